//! Reduction modulo the GCM polynomial `x^128 + x^7 + x^2 + x + 1`.
//!
//! Follows the shift-and-XOR method from Intel's carry-less multiplication white paper, §4:
//! <https://www.intel.com/content/dam/develop/external/us/en/documents/clmul-wp-rev-2-02-2014-04-20.pdf>

use crate::{field_element::FieldElement, karatsuba::WideProduct};

/// Reduce the 256-bit carryless product of Karatsuba modulo the GCM polynomial.
///
/// Since `x^128 = x^7 + x^2 + x + 1` in the field, the high half `[X3:X2]` is folded into the low
/// half as `[X3:X2] * (x^7 + x^2 + x + 1)`. The bits that spill past `x^255` when shifting by 1, 2
/// and 7 are folded in first, which is why `X3` is shifted right by 63, 62 and 57.
///
/// The shift amounts are fixed by the polynomial.
#[inline(always)]
pub(crate) fn reduce(product: WideProduct) -> FieldElement {
    let [x0, x1, x2, x3] = product.0;

    let a = x3 >> 63;
    let b = x3 >> 62;
    let c = x3 >> 57;
    let d = x2 ^ a ^ b ^ c;

    let (e0, e1) = shl128(d, x3, 1);
    let (f0, f1) = shl128(d, x3, 2);
    let (g0, g1) = shl128(d, x3, 7);

    FieldElement::from_words(x0 ^ d ^ e0 ^ f0 ^ g0, x1 ^ x3 ^ e1 ^ f1 ^ g1)
}

/// Shift the 128-bit value `[hi:lo]` left by `n` bits, `0 < n < 64`, discarding the carry out.
#[inline(always)]
const fn shl128(lo: u64, hi: u64, n: u32) -> (u64, u64) {
    (lo << n, (hi << n) | (lo >> (64 - n)))
}
