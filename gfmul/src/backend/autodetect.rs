//! Autodetection for carryless multiply CPU intrinsics, with fallback to the "soft" backend when
//! they are unavailable.

#[cfg(target_arch = "aarch64")]
use super::pmull as intrinsics;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
use super::clmul as intrinsics;

use super::MulFn;
use crate::field_element::FieldElement;

#[cfg(target_arch = "aarch64")]
cpufeatures::new!(cpuid_clmul, "aes"); // `aes` implies PMULL
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
cpufeatures::new!(cpuid_clmul, "pclmulqdq", "sse2");

/// Get the intrinsics backend if the CPU supports it.
///
/// `cpufeatures` caches the probe result after the first call.
#[inline]
pub(super) fn detect_intrinsics() -> Option<MulFn> {
    if cpuid_clmul::get() {
        Some(gfmul)
    } else {
        None
    }
}

/// Only ever handed out by [`detect_intrinsics`] after a successful CPU feature check.
fn gfmul(a: FieldElement, b: FieldElement) -> FieldElement {
    // SAFETY: `detect_intrinsics` has checked the CPU has the necessary intrinsics
    unsafe { intrinsics::gfmul(a, b) }
}
