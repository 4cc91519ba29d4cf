//! ARMv8 `PMULL`-accelerated implementation.
//!
//! For more information about PMULL, see:
//! - <https://developer.arm.com/documentation/100069/0608/A64-SIMD-Vector-Instructions/PMULL--PMULL2--vector->

#![allow(unsafe_op_in_unsafe_fn, unused_unsafe)]

use crate::{field_element::FieldElement, karatsuba::karatsuba, reduce::reduce};
use core::arch::aarch64::*;

/// Multiply two field elements using `PMULL` for the partial products.
///
/// # Safety
/// It is the caller's responsibility to ensure the host CPU is capable of PMULL and NEON
/// instructions.
#[target_feature(enable = "aes,neon")]
pub(super) unsafe fn gfmul(a: FieldElement, b: FieldElement) -> FieldElement {
    reduce(karatsuba(a, b, |x, y| unsafe { clmul64(x, y) }))
}

/// Carryless multiplication of the 64-bit words `x` and `y`.
#[inline]
#[target_feature(enable = "aes,neon")]
#[allow(clippy::cast_possible_truncation)]
unsafe fn clmul64(x: u64, y: u64) -> (u64, u64) {
    let product = vmull_p64(x, y);
    (product as u64, (product >> 64) as u64)
}
