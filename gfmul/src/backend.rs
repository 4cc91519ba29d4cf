//! Backends providing the 64x64-bit carryless multiplications, and the [`Multiplier`] strategy
//! which selects between them.

pub(crate) mod soft;

use crate::field_element::FieldElement;
use core::fmt::{self, Debug};
use cpubits::cfg_if;

/// Full field multiplication as implemented by one backend.
type MulFn = fn(FieldElement, FieldElement) -> FieldElement;

cfg_if! {
    if #[cfg(all(target_arch = "aarch64", not(gfmul_backend = "soft")))] {
        // aarch64
        mod autodetect;
        mod pmull;
        use autodetect::detect_intrinsics;
    } else if #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        not(gfmul_backend = "soft")
    ))] {
        // x86/x86-64
        mod autodetect;
        mod clmul;
        use autodetect::detect_intrinsics;
    } else {
        // "soft" fallback implementation for other targets written in pure Rust

        /// Stub intrinsics "detection"
        #[inline]
        fn detect_intrinsics() -> Option<MulFn> {
            None
        }
    }
}

/// Implementation used to compute 64x64-bit carryless products.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Backend {
    /// Portable software implementation with no data-dependent branches.
    Soft,

    /// CPU carryless multiplication instructions: `PCLMULQDQ` on x86/x86_64, `PMULL` on aarch64.
    Intrinsics,
}

/// GF(2^128) multiplier bound to a backend.
///
/// The backend is chosen when the multiplier is constructed, so calls to [`Multiplier::mul`] never
/// probe CPU features or branch on the backend.
#[derive(Clone, Copy)]
pub struct Multiplier {
    backend: Backend,
    mul: MulFn,
}

impl Multiplier {
    /// Select the fastest backend supported by the current CPU.
    ///
    /// CPU features are only probed once per process; the result is cached.
    #[must_use]
    pub fn new() -> Self {
        match detect_intrinsics() {
            Some(mul) => Self {
                backend: Backend::Intrinsics,
                mul,
            },
            None => Self::soft(),
        }
    }

    /// Use the portable software backend regardless of CPU support.
    #[must_use]
    pub const fn soft() -> Self {
        Self {
            backend: Backend::Soft,
            mul: soft::gfmul,
        }
    }

    /// Get the backend this multiplier uses.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Multiply two field elements modulo `x^128 + x^7 + x^2 + x + 1`.
    #[inline]
    #[must_use]
    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        (self.mul)(a, b)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multiplier")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Backend, Multiplier};

    #[test]
    fn soft_is_soft() {
        assert_eq!(Multiplier::soft().backend(), Backend::Soft);
    }

    #[test]
    fn detection_is_stable() {
        assert_eq!(Multiplier::new().backend(), Multiplier::default().backend());
    }

    #[cfg(gfmul_backend = "soft")]
    #[test]
    fn forced_soft_backend() {
        assert_eq!(Multiplier::new().backend(), Backend::Soft);
    }
}
