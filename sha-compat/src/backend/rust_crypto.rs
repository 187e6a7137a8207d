//! SHA-1 from the pure Rust `sha1` crate.
use core::ptr::addr_of_mut;
use sha1::{Digest as _, Sha1};
use zeroize::Zeroize;

use crate::backend::Backend;
use crate::opaque_res::Res;
use crate::sealed::Sealed;
use crate::{Unspecified, DIGEST_LEN};

/// The RustCrypto `sha1::Sha1` state.
///
/// Nothing in this backend can fail, every call reports success.
pub struct RustCryptoSha1 {
    inner: Sha1
}

impl Sealed for RustCryptoSha1 {}

impl Backend for RustCryptoSha1 {
    const LIBRARY: &'static str = "rustcrypto";
    const MAX_UPDATE: usize = usize::MAX;

    #[inline]
    fn start() -> Result<Self, Unspecified> {
        Ok(Self { inner: Sha1::new() })
    }

    #[inline]
    unsafe fn update_unchecked(&mut self, data: &[u8]) -> Res {
        self.inner.update(data);
        Res::OK
    }

    #[inline]
    fn finish(&mut self, output: &mut [u8; DIGEST_LEN]) -> Res {
        let mut out = self.inner.finalize_reset();
        output.copy_from_slice(out.as_slice());
        out.as_mut_slice().zeroize();
        Res::OK
    }

    #[inline]
    fn duplicate(&self) -> Result<Self, Unspecified> {
        Ok(Self { inner: self.inner.clone() })
    }
}

impl Drop for RustCryptoSha1 {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: `Sha1` is a fixed-size block buffer and chaining state without references,
        // and all zeroes is the state of an empty buffer.
        unsafe { zeroize::zeroize_flat_type(addr_of_mut!(self.inner)) }
    }
}

backend_tests! { RustCryptoSha1 }
