//! GF(2^128) field element implementation.

use crate::{BLOCK_SIZE, Block, Multiplier, multiply};
use core::{
    array::TryFromSliceError,
    fmt::{self, Debug},
    ops::{Add, AddAssign, Mul, MulAssign},
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Low word of `x^128` once reduced, i.e. `x^7 + x^2 + x + 1`.
const R: u64 = 0x87;

/// An element in the GCM field.
///
/// This type represents an element of the binary field GF(2^128) modulo the irreducible polynomial
/// `x^128 + x^7 + x^2 + x + 1` as described in [NIST SP 800-38D §6.3].
///
/// # Representation
///
/// The element is stored as a pair of `u64` words `(low, high)` where bit `i` of the pair is the
/// coefficient of `x^i`.
///
/// Serialization via [`FieldElement::to_bytes`] uses the GCM bit order: the most significant bit
/// of the first byte is the coefficient of `x^0`, and the least significant bit of the last byte is
/// the coefficient of `x^127`. Conversions to and from `u128` keep the polynomial order instead.
///
/// Arithmetic in the field has the following properties:
/// - All arithmetic operations are performed modulo the polynomial above.
/// - Addition is equivalent to the XOR operation applied to the two field elements
/// - Multiplication is carryless
///
/// Equality comparisons are not constant time.
///
/// [NIST SP 800-38D §6.3]: https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38d.pdf
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct FieldElement(u64, u64);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self(0, 0);

    /// The multiplicative identity, i.e. the constant polynomial `1`.
    ///
    /// Serializes as `80 00 00 .. 00` in GCM bit order.
    pub const ONE: Self = Self(1, 0);

    /// The polynomial `x`.
    pub const X: Self = Self(2, 0);

    /// Create a field element from its low and high 64-bit words.
    #[inline]
    #[must_use]
    pub const fn from_words(lo: u64, hi: u64) -> Self {
        Self(lo, hi)
    }

    /// Split this field element into its low and high 64-bit words.
    #[inline]
    #[must_use]
    pub const fn to_words(self) -> (u64, u64) {
        (self.0, self.1)
    }

    /// Decode a field element from its GCM byte representation.
    #[inline]
    #[must_use]
    pub fn from_bytes(bytes: &Block) -> Self {
        let (lo, hi) = bytes.split_at(BLOCK_SIZE / 2);
        Self(reflect_word(lo), reflect_word(hi))
    }

    /// Encode this field element using the GCM byte representation.
    #[inline]
    #[must_use]
    pub fn to_bytes(self) -> Block {
        let mut block = Block::default();
        let (lo, hi) = block.split_at_mut(BLOCK_SIZE / 2);
        lo.copy_from_slice(&self.0.reverse_bits().to_be_bytes());
        hi.copy_from_slice(&self.1.reverse_bits().to_be_bytes());
        block
    }

    /// Multiply this field element by `x`.
    ///
    /// This is the "doubling" used to step tweaks in XTS and LRW.
    #[inline]
    #[must_use]
    pub const fn mul_x(self) -> Self {
        let carry = self.1 >> 63;
        Self(
            (self.0 << 1) ^ (R & carry.wrapping_neg()),
            (self.1 << 1) | (self.0 >> 63),
        )
    }

    /// Square this field element.
    #[inline]
    #[must_use]
    pub fn square(self) -> Self {
        multiply(self, self)
    }

    /// Raise this field element to the power `exp`.
    ///
    /// Every exponent bit costs one squaring and one multiplication, and the result is selected with
    /// a mask, so the sequence of operations does not depend on `exp`.
    #[must_use]
    pub fn pow(self, exp: u128) -> Self {
        let mul = Multiplier::new();
        let mut acc = Self::ONE;

        for i in (0..u128::BITS).rev() {
            acc = mul.mul(acc, acc);
            let product = mul.mul(acc, self);
            let mask = u64::from((exp >> i) & 1 == 1).wrapping_neg();
            acc = Self::select(acc, product, mask);
        }

        acc
    }

    /// Compute `x^n` in the field.
    ///
    /// `x^i` is the `i`-th tweak multiplier ("alpha to the i") in XTS and LRW.
    #[must_use]
    pub fn x_pow(n: u32) -> Self {
        Self::X.pow(u128::from(n))
    }

    /// Return `b` where `mask` is all ones and `a` where it is zero.
    #[inline]
    const fn select(a: Self, b: Self, mask: u64) -> Self {
        Self(a.0 ^ ((a.0 ^ b.0) & mask), a.1 ^ ((a.1 ^ b.1) & mask))
    }
}

/// Read a big-endian word and reverse its bits, so that the most significant bit of the first byte
/// becomes bit 0.
#[inline]
fn reflect_word(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_be_bytes(word).reverse_bits()
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:016x} {:016x})", self.0, self.1)
    }
}

impl From<Block> for FieldElement {
    #[inline]
    fn from(bytes: Block) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<&Block> for FieldElement {
    #[inline]
    fn from(bytes: &Block) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<FieldElement> for Block {
    #[inline]
    fn from(fe: FieldElement) -> Self {
        fe.to_bytes()
    }
}

impl TryFrom<&[u8]> for FieldElement {
    type Error = TryFromSliceError;

    #[inline]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Block::try_from(bytes).map(Self::from)
    }
}

impl From<u128> for FieldElement {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from(x: u128) -> Self {
        Self(x as u64, (x >> 64) as u64)
    }
}

impl From<FieldElement> for u128 {
    #[inline]
    fn from(fe: FieldElement) -> Self {
        (u128::from(fe.1) << 64) | u128::from(fe.0)
    }
}

impl Add for FieldElement {
    type Output = Self;

    /// Adds two field elements.
    ///
    /// In GF(2^128), addition is the equivalent operation to XOR.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0, self.1 ^ rhs.1)
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    /// Perform carryless multiplication within the field modulo its polynomial.
    ///
    /// Goes through [`multiply`]; hold a [`Multiplier`] when performing many multiplications.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        multiply(self, rhs)
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.1.zeroize();
    }
}
