//! 128x128-bit carryless multiplication.

use crate::field_element::FieldElement;

/// Unreduced 256-bit carryless product of two field elements.
///
/// Words are ordered from least to most significant. The polynomial has degree at most 254 and has
/// no meaning in the field until it is passed through [`reduce`][crate::reduce::reduce].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WideProduct(pub(crate) [u64; 4]);

/// Compute the unreduced 256-bit carryless product of two 128-bit field elements.
///
/// Uses a Karatsuba decomposition in which the 128x128 multiplication is reduced to three 64x64
/// multiplications, performed by `clmul` which must return the `(low, high)` words of the 128-bit
/// carryless product of its operands.
///
/// ```text
/// (a1*b0 + a0*b1) = (a1+a0) * (b1+b0) + (a1*b1) + (a0*b0)
///        M                  E              C         D
/// ```
#[inline(always)]
pub(crate) fn karatsuba<F>(a: FieldElement, b: FieldElement, clmul: F) -> WideProduct
where
    F: Fn(u64, u64) -> (u64, u64),
{
    let (a0, a1) = a.to_words();
    let (b0, b1) = b.to_words();

    let (c0, c1) = clmul(a1, b1);
    let (d0, d1) = clmul(a0, b0);
    let (e0, e1) = clmul(a0 ^ a1, b0 ^ b1);

    // The middle product lands on words 1 and 2
    let x3 = c1;
    let x2 = c0 ^ c1 ^ d1 ^ e1;
    let x1 = d1 ^ c0 ^ d0 ^ e0;
    let x0 = d0;
    WideProduct([x0, x1, x2, x3])
}
