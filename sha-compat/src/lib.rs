//! OpenSSL-shaped SHA-1 over wolfcrypt or RustCrypto.
//!
//! This crate implements no part of SHA-1 itself. It exposes the familiar three call lifecycle,
//! initialize, update, finalize, and forwards every call to a wrapped library:
//!
//! * [`HashContext`] is the typed API, where ownership makes misuse (updating before
//!   initialization, updating after finalization) unrepresentable.
//! * [`compat`] carries the OpenSSL names, [`SHA_CTX`], [`SHA1_Init`], [`SHA1_Update`],
//!   [`SHA1_Final`] and [`SHA1`], for code ported from OpenSSL.
//!
//! The wrapped library is chosen with Cargo features: `wolfcrypt` (the default) or
//! `rustcrypto`.
//!
//! # Security Warning
//!
//! SHA-1 is cryptographically broken, practical collisions have been demonstrated. It is
//! offered for compatibility with existing formats and protocols only. Do not use it for digital
//! signatures, certificate validation, or anywhere collision resistance matters.
//!
//! # Example
//!
//! ```
//! use sha_compat::HashContext;
//!
//! let mut ctx = HashContext::new().unwrap();
//!
//! assert!(ctx.try_update(b"hello ").is_ok());
//! assert!(ctx.try_update(b"world").is_ok());
//!
//! assert_eq!(
//!     ctx.try_finalize().unwrap().encode_hex().as_str(),
//!     "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
//! );
//! ```
//!
//! [`SHA_CTX`]: compat::SHA_CTX
//! [`SHA1_Init`]: compat::SHA1_Init
//! [`SHA1_Update`]: compat::SHA1_Update
//! [`SHA1_Final`]: compat::SHA1_Final
//! [`SHA1`]: compat::SHA1
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::all
)]
// the u32 length limit of the wrapped update function is always checked in the safe api.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
// this devalues things which actually require the must-use attribute
#![allow(clippy::must_use_candidate)]
// I don't need a linter lecturing me on performance
#![allow(clippy::inline_always)]
// constant time bitwise hacks
#![allow(clippy::cast_sign_loss)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod sealed;
mod error;
mod ct;

pub mod opaque_res;
pub mod buf;
pub mod hex;
pub mod backend;
pub mod context;
pub mod compat;
pub mod io;

#[cfg(feature = "digest")]
mod digest_compat;

#[cfg(test)]
mod test_utils;

/// The size of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// The size of a SHA-1 message block in bytes.
pub const BLOCK_LEN: usize = 64;

pub use error::Unspecified;
pub use ct::ct_eq;
pub use buf::Digest;
pub use backend::{Backend, DefaultBackend};
pub use context::{HashContext, sha1};
