#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

mod backend;
mod field_element;
mod karatsuba;
mod reduce;

pub use crate::{
    backend::{Backend, Multiplier},
    field_element::FieldElement,
};

/// Size of a GF(2^128) field element in bytes
pub const BLOCK_SIZE: usize = 16;

/// Serialized field element (16-bytes, GCM bit order)
pub type Block = [u8; BLOCK_SIZE];

/// Multiply two elements of GF(2^128) modulo `x^128 + x^7 + x^2 + x + 1`.
///
/// This is the GHASH multiplication used by AES-GCM. The fastest backend available on the current
/// CPU is used; CPU feature detection only runs on the first call and is cached afterwards.
///
/// This is a convenience wrapper which selects a backend on every call, at the cost of reading the
/// cached detection result. Loops performing many multiplications should construct a
/// [`Multiplier`] once and call [`Multiplier::mul`] instead.
#[inline]
#[must_use]
pub fn multiply(a: FieldElement, b: FieldElement) -> FieldElement {
    Multiplier::new().mul(a, b)
}
