//! Intel `CLMUL`-accelerated implementation for modern x86/x86_64 CPUs
//! (i.e. Intel Westmere-compatible or newer)

#![allow(unsafe_op_in_unsafe_fn, unused_unsafe)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::{field_element::FieldElement, karatsuba::karatsuba, reduce::reduce};

/// Multiply two field elements using `PCLMULQDQ` for the partial products.
///
/// # Safety
///
/// The SSE2 and pclmulqdq target features must be enabled.
#[target_feature(enable = "pclmulqdq,sse2")]
pub(super) unsafe fn gfmul(a: FieldElement, b: FieldElement) -> FieldElement {
    reduce(karatsuba(a, b, |x, y| unsafe { clmul64(x, y) }))
}

/// Carryless multiplication of the 64-bit words `x` and `y`.
///
/// # Safety
///
/// The SSE2 and pclmulqdq target features must be enabled.
#[inline]
#[target_feature(enable = "pclmulqdq,sse2")]
unsafe fn clmul64(x: u64, y: u64) -> (u64, u64) {
    let x = _mm_loadu_si128([x, 0u64].as_ptr().cast());
    let y = _mm_loadu_si128([y, 0u64].as_ptr().cast());
    let product = _mm_clmulepi64_si128(x, y, 0x00);

    let mut words = [0u64; 2];
    _mm_storeu_si128(words.as_mut_ptr().cast(), product);
    (words[0], words[1])
}
