//! The seam between the OpenSSL-shaped surface and the library which actually implements SHA-1.
//!
//! A [`Backend`] owns the raw running state of the wrapped library and forwards to its init,
//! update and finalize calls. Nothing above this module knows which library is in use.
use crate::opaque_res::Res;
use crate::sealed::Sealed;
use crate::{Unspecified, DIGEST_LEN};

#[macro_use]
mod test_gen;

#[cfg(feature = "wolfcrypt")]
#[cfg_attr(docsrs, doc(cfg(feature = "wolfcrypt")))]
pub mod wolf;
#[cfg(feature = "rustcrypto")]
#[cfg_attr(docsrs, doc(cfg(feature = "rustcrypto")))]
pub mod rust_crypto;

#[cfg(feature = "wolfcrypt")]
pub use wolf::WolfSha1;
#[cfg(feature = "rustcrypto")]
pub use rust_crypto::RustCryptoSha1;

/// The backend used when none is named, wolfcrypt if enabled, otherwise RustCrypto.
#[cfg(feature = "wolfcrypt")]
pub type DefaultBackend = WolfSha1;

/// The backend used when none is named, wolfcrypt if enabled, otherwise RustCrypto.
#[cfg(all(feature = "rustcrypto", not(feature = "wolfcrypt")))]
pub type DefaultBackend = RustCryptoSha1;

#[cfg(not(any(feature = "wolfcrypt", feature = "rustcrypto")))]
compile_error!("sha-compat needs a SHA-1 implementation, enable `wolfcrypt` or `rustcrypto`");

/// A library providing the SHA-1 primitive.
///
/// This trait is sealed, the supported libraries are [`WolfSha1`] (feature `wolfcrypt`) and
/// [`RustCryptoSha1`] (feature `rustcrypto`).
pub trait Backend : Sealed + Sized {
    /// Name of the wrapped library.
    const LIBRARY: &'static str;

    /// The largest input the wrapped update function accepts in a single call.
    #[doc(hidden)]
    const MAX_UPDATE: usize;

    /// Allocate and initialize the wrapped state, ready to absorb message bytes.
    #[doc(hidden)]
    fn start() -> Result<Self, Unspecified>;

    /// Forward `data` to the wrapped update function.
    ///
    /// # Safety
    ///
    /// `data` must be no longer than [`MAX_UPDATE`](Self::MAX_UPDATE) bytes.
    #[doc(hidden)]
    unsafe fn update_unchecked(&mut self, data: &[u8]) -> Res;

    /// Write the digest of everything absorbed so far to `output`, leaving the state as it was
    /// after [`start`](Self::start).
    #[doc(hidden)]
    fn finish(&mut self, output: &mut [u8; DIGEST_LEN]) -> Res;

    /// Copy the running state.
    #[doc(hidden)]
    fn duplicate(&self) -> Result<Self, Unspecified>;

    /// Forward `data` of any length, split into calls the wrapped library accepts.
    ///
    /// Empty input results in no calls at all.
    #[doc(hidden)]
    #[inline]
    fn update(&mut self, data: &[u8]) -> Res {
        let mut res = Res::new();

        for chunk in data.chunks(Self::MAX_UPDATE) {
            // SAFETY: `chunks` never yields more than `MAX_UPDATE` bytes.
            res.ensure(unsafe { self.update_unchecked(chunk) });
        }

        res
    }
}
