//! SHA-1 from wolfSSL's wolfcrypt.
use core::mem::MaybeUninit;
use core::ptr::{addr_of, addr_of_mut};
use wolf_crypto_sys::{
    wc_Sha,
    wc_ShaUpdate, wc_ShaFinal,
    wc_InitSha, wc_ShaFree,
    wc_ShaCopy
};

use crate::backend::Backend;
use crate::opaque_res::Res;
use crate::sealed::Sealed;
use crate::{Unspecified, DIGEST_LEN};

/// The wolfcrypt `wc_Sha` state.
///
/// `wc_InitSha` stands in for `SHA1_Init`, `wc_ShaUpdate` for `SHA1_Update`, and `wc_ShaFinal`
/// for `SHA1_Final`. `wc_ShaFinal` re-initializes the state after writing the digest, and
/// `wc_ShaFree` is called on drop.
#[repr(transparent)]
pub struct WolfSha1 {
    inner: wc_Sha
}

impl Sealed for WolfSha1 {}

impl Backend for WolfSha1 {
    const LIBRARY: &'static str = "wolfcrypt";
    // wolfcrypt takes the length as a `word32`.
    const MAX_UPDATE: usize = u32::MAX as usize;

    fn start() -> Result<Self, Unspecified> {
        unsafe {
            let mut res = Res::new();
            let mut inner = MaybeUninit::<wc_Sha>::uninit();

            res.ensure_0(wc_InitSha(inner.as_mut_ptr()));

            res.unit_err_with(|| Self { inner: inner.assume_init() })
        }
    }

    #[inline]
    unsafe fn update_unchecked(&mut self, data: &[u8]) -> Res {
        let mut res = Res::new();

        res.ensure_0(wc_ShaUpdate(
            addr_of_mut!(self.inner),
            data.as_ptr(),
            data.len() as u32
        ));

        res
    }

    #[inline]
    fn finish(&mut self, output: &mut [u8; DIGEST_LEN]) -> Res {
        let mut res = Res::new();

        unsafe {
            res.ensure_0(wc_ShaFinal(addr_of_mut!(self.inner), output.as_mut_ptr()));
        }

        res
    }

    fn duplicate(&self) -> Result<Self, Unspecified> {
        unsafe {
            let mut res = Res::new();
            let mut dst = MaybeUninit::<wc_Sha>::uninit();

            // wc_ShaCopy only reads `src`, the C signature just lacks the const qualifier.
            res.ensure_0(wc_ShaCopy(addr_of!(self.inner).cast_mut(), dst.as_mut_ptr()));

            res.unit_err_with(|| Self { inner: dst.assume_init() })
        }
    }
}

impl Drop for WolfSha1 {
    /// Calls `wc_ShaFree`, then wipes the buffered message bytes which `wc_ShaFinal` leaves
    /// behind.
    #[inline]
    fn drop(&mut self) {
        unsafe {
            wc_ShaFree(addr_of_mut!(self.inner));
            // SAFETY: `wc_Sha` is plain C data without references, all zeroes is a valid value.
            zeroize::zeroize_flat_type(addr_of_mut!(self.inner));
        }
    }
}

// SAFETY:
// All methods which mutate the underlying state require a mutable reference,
// the only way to obtain a mutable reference across thread boundaries is via
// synchronization or unsafe in Rust (which then would be the user's responsibility).
unsafe impl Send for WolfSha1 {}

// SAFETY:
// There is no providing of interior mutability, all methods which mutate the underlying
// state require a mutable reference, thus making this safe to mark `Sync`.
unsafe impl Sync for WolfSha1 {}

backend_tests! { WolfSha1 }
