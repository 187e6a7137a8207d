//! OpenSSL's SHA-1 API Shape
//!
//! Code written against `<openssl/sha.h>` keeps a `SHA_CTX` value around and drives it with
//! `SHA1_Init`, `SHA1_Update` and `SHA1_Final`. This module offers the same names and call
//! order, forwarding to [`HashContext`] and therefore to whichever [`Backend`] is selected.
//!
//! Unlike the C API, calling these in the wrong order is not undefined behavior. A `SHA_CTX`
//! tracks its [`Lifecycle`], and `SHA1_Update` or `SHA1_Final` on a context which is not
//! [`Active`] return `0` without touching anything.
//!
//! # Security Warning
//!
//! SHA-1 is cryptographically broken. See the [crate level documentation](crate).
//!
//! # Example
//!
//! ```
//! use sha_compat::compat::{SHA_CTX, SHA_DIGEST_LENGTH, SHA1_Init, SHA1_Update, SHA1_Final};
//!
//! let mut ctx = SHA_CTX::new();
//! let mut md = [0u8; SHA_DIGEST_LENGTH];
//!
//! assert_eq!(SHA1_Init(&mut ctx), 1);
//! assert_eq!(SHA1_Update(&mut ctx, b"abc"), 1);
//! assert_eq!(SHA1_Final(&mut md, &mut ctx), 1);
//!
//! assert_eq!(md, hex_literal::hex!("a9993e364706816aba3e25717850c26c9cd0d89d"));
//!
//! // the context is finalized, it must be initialized again before reuse.
//! assert_eq!(SHA1_Update(&mut ctx, b"abc"), 0);
//! ```
//!
//! [`Active`]: Lifecycle::Active
#![allow(non_camel_case_types, non_snake_case)]

use core::ffi::c_int;
use core::fmt;
use core::mem;

use crate::backend::{Backend, DefaultBackend};
use crate::context::HashContext;
use crate::opaque_res::Res;

/// The length of a SHA-1 digest in bytes.
pub const SHA_DIGEST_LENGTH: usize = crate::DIGEST_LEN;
/// The SHA-1 block length in bytes.
pub const SHA_CBLOCK: usize = crate::BLOCK_LEN;
/// The SHA-1 block length in 32 bit words.
pub const SHA_LBLOCK: usize = SHA_CBLOCK / 4;

/// Where a [`SHA_CTX`] is in its init / update / finalize lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Never initialized, or the last `SHA1_Init` failed.
    Uninitialized,
    /// Initialized and accepting message bytes.
    Active,
    /// The digest was emitted and the wrapped state released.
    Finalized
}

enum State<B: Backend> {
    Uninitialized,
    Active(HashContext<B>),
    Finalized
}

/// An OpenSSL-style SHA-1 context.
///
/// Create one with [`SHA_CTX::new`] (or [`SHA_CTX::with_backend`]), then drive it with
/// [`SHA1_Init`], [`SHA1_Update`] and [`SHA1_Final`].
pub struct SHA_CTX<B: Backend = DefaultBackend> {
    state: State<B>
}

impl SHA_CTX<DefaultBackend> {
    /// An uninitialized context using the [`DefaultBackend`], [`SHA1_Init`] must be called
    /// before use.
    pub const fn new() -> Self {
        Self::with_backend()
    }
}

impl<B: Backend> SHA_CTX<B> {
    /// An uninitialized context using the backend `B`, [`SHA1_Init`] must be called before use.
    pub const fn with_backend() -> Self {
        Self { state: State::Uninitialized }
    }

    /// The current lifecycle state.
    pub const fn lifecycle(&self) -> Lifecycle {
        match self.state {
            State::Uninitialized => Lifecycle::Uninitialized,
            State::Active(_) => Lifecycle::Active,
            State::Finalized => Lifecycle::Finalized
        }
    }
}

impl<B: Backend> Default for SHA_CTX<B> {
    #[inline]
    fn default() -> Self {
        Self::with_backend()
    }
}

impl<B: Backend> fmt::Debug for SHA_CTX<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SHA_CTX")
            .field("library", &B::LIBRARY)
            .field("lifecycle", &self.lifecycle())
            .finish()
    }
}

/// Initialize `c`, discarding whatever state it held.
///
/// # Returns
///
/// `1` on success, `0` if the wrapped library failed to initialize, in which case `c` is left
/// [`Uninitialized`](Lifecycle::Uninitialized).
pub fn SHA1_Init<B: Backend>(c: &mut SHA_CTX<B>) -> c_int {
    match HashContext::<B>::with_backend() {
        Ok(ctx) => {
            c.state = State::Active(ctx);
            1
        },
        Err(_) => {
            c.state = State::Uninitialized;
            0
        }
    }
}

/// Append `data` to the message being hashed by `c`.
///
/// Empty `data` is a no-op.
///
/// # Returns
///
/// `1` on success, `0` if `c` is not [`Active`](Lifecycle::Active) or the wrapped update
/// function failed.
pub fn SHA1_Update<B: Backend>(c: &mut SHA_CTX<B>, data: &[u8]) -> c_int {
    match c.state {
        State::Active(ref mut ctx) => ctx.try_update(data).into_c_int(),
        _ => {
            debug_event!(lifecycle = ?c.lifecycle(), "SHA1_Update on a context which is not active");
            0
        }
    }
}

/// Write the digest of `c` into `md`, then release the wrapped state.
///
/// On success `c` becomes [`Finalized`](Lifecycle::Finalized) and must be passed to
/// [`SHA1_Init`] before it can hash another message.
///
/// # Returns
///
/// `1` on success, `0` if `c` is not [`Active`](Lifecycle::Active) or the wrapped finalize
/// function failed. `md` is only written on success.
pub fn SHA1_Final<B: Backend>(md: &mut [u8; SHA_DIGEST_LENGTH], c: &mut SHA_CTX<B>) -> c_int {
    match mem::replace(&mut c.state, State::Finalized) {
        State::Active(ctx) => match ctx.try_finalize() {
            Ok(digest) => {
                *md = digest.into_bytes();
                1
            },
            Err(_) => 0
        },
        other => {
            c.state = other;
            debug_event!(lifecycle = ?c.lifecycle(), "SHA1_Final on a context which is not active");
            0
        }
    }
}

/// Hash `d` in one call, writing the digest to `md`.
///
/// # Returns
///
/// `md` on success, `None` if the wrapped library failed, in which case the contents of `md` are
/// unspecified.
///
/// # Example
///
/// ```
/// use sha_compat::compat::{SHA1, SHA_DIGEST_LENGTH};
///
/// let mut md = [0u8; SHA_DIGEST_LENGTH];
/// let out = SHA1(b"", &mut md).unwrap();
///
/// assert_eq!(out, &hex_literal::hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
/// ```
pub fn SHA1<'md>(
    d: &[u8],
    md: &'md mut [u8; SHA_DIGEST_LENGTH]
) -> Option<&'md mut [u8; SHA_DIGEST_LENGTH]> {
    let mut ctx = HashContext::new().ok()?;

    let mut res = Res::new();
    res.ensure(ctx.try_update(d));
    res.ensure(ctx.finalize_into_exact(md));

    if res.is_ok() { Some(md) } else { None }
}
