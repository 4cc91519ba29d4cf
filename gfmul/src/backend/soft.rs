//! Portable pure Rust implementation of the 64x64-bit carryless multiplication.
//!
//! Used when the CPU lacks a carryless multiply instruction, or when the `soft` backend is forced
//! with `--cfg gfmul_backend="soft"`.

use crate::{field_element::FieldElement, karatsuba::karatsuba, reduce::reduce};

/// Multiply two field elements using [`clmul64`] for the partial products.
pub(super) fn gfmul(a: FieldElement, b: FieldElement) -> FieldElement {
    reduce(karatsuba(a, b, clmul64))
}

/// Carryless multiplication of two 64-bit words, returning the `(low, high)` words of the 128-bit
/// product.
///
/// Schoolbook method: a copy of `x` shifted by `i` is XORed into the accumulator for each set bit
/// `i` of `y`. Each bit of `y` is expanded into a mask instead of being branched on, so the
/// sequence of operations does not depend on the operands.
#[inline]
pub(crate) fn clmul64(x: u64, y: u64) -> (u64, u64) {
    let mut lo = x & (y & 1).wrapping_neg();
    let mut hi = 0;

    for i in 1..u64::BITS {
        let mask = ((y >> i) & 1).wrapping_neg();
        lo ^= (x << i) & mask;
        hi ^= (x >> (u64::BITS - i)) & mask;
    }

    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::clmul64;

    /// Carryless product computed over `u128` one bit at a time.
    fn clmul64_u128(x: u64, y: u64) -> (u64, u64) {
        let mut acc = 0u128;
        for i in 0..64 {
            if (y >> i) & 1 == 1 {
                acc ^= u128::from(x) << i;
            }
        }
        (acc as u64, (acc >> 64) as u64)
    }

    #[test]
    fn small_products() {
        assert_eq!(clmul64(0, 0xdead_beef), (0, 0));
        assert_eq!(clmul64(1, 0xdead_beef), (0xdead_beef, 0));
        // (x + 1)^2 = x^2 + 1
        assert_eq!(clmul64(3, 3), (5, 0));
    }

    #[test]
    fn all_ones_squared() {
        // Cross terms cancel in characteristic 2, leaving only the even powers.
        assert_eq!(
            clmul64(u64::MAX, u64::MAX),
            (0x5555_5555_5555_5555, 0x5555_5555_5555_5555)
        );
    }

    #[test]
    fn top_bits() {
        assert_eq!(clmul64(1 << 63, 1 << 63), (0, 1 << 62));
        assert_eq!(clmul64(1 << 63, 2), (0, 1));
    }

    #[test]
    fn matches_u128_reference() {
        let words = [
            0x0000_0000_0000_0001,
            0x8000_0000_0000_0000,
            0xa06a_ea02_65e8_4b8a,
            0x1486_b2d8_d928_3453,
            0xb962_3d58_7488_039f,
            0xffff_ffff_0000_0000,
            0x0123_4567_89ab_cdef,
        ];

        for x in words {
            for y in words {
                assert_eq!(clmul64(x, y), clmul64_u128(x, y));
                assert_eq!(clmul64(x, y), clmul64(y, x));
            }
        }
    }
}
