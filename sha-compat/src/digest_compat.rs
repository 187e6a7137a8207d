//! RustCrypto `digest` Trait Implementations
//!
//! Lets a [`HashContext`] stand in wherever RustCrypto code expects a hasher, such as
//! `hmac::SimpleHmac<HashContext>` or functions generic over [`digest::Digest`].
//!
//! The `digest` traits are infallible, so a failure of the wrapped library panics here. This is
//! why the `digest` feature enables `can-panic`.
use digest::{
    consts::{U20, U64},
    core_api::BlockSizeUser,
    FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update
};

use crate::backend::Backend;
use crate::context::HashContext;

impl<B: Backend> Default for HashContext<B> {
    /// Equivalent to [`HashContext::with_backend`].
    ///
    /// # Panics
    ///
    /// If the wrapped library fails to initialize its state.
    #[track_caller]
    fn default() -> Self {
        Self::with_backend().expect("Failed to initialize SHA-1 `HashContext`")
    }
}

impl<B: Backend> Clone for HashContext<B> {
    /// Equivalent to [`HashContext::try_clone`].
    ///
    /// # Panics
    ///
    /// If the wrapped library fails to copy its state.
    #[track_caller]
    fn clone(&self) -> Self {
        self.try_clone().expect("Failed to clone SHA-1 `HashContext`")
    }
}

impl<B: Backend> HashMarker for HashContext<B> {}

impl<B: Backend> OutputSizeUser for HashContext<B> {
    type OutputSize = U20;
}

impl<B: Backend> BlockSizeUser for HashContext<B> {
    type BlockSize = U64;
}

impl<B: Backend> Update for HashContext<B> {
    #[track_caller]
    fn update(&mut self, data: &[u8]) {
        HashContext::update(self, data);
    }
}

impl<B: Backend> FixedOutput for HashContext<B> {
    #[track_caller]
    fn finalize_into(mut self, out: &mut Output<Self>) {
        FixedOutputReset::finalize_into_reset(&mut self, out);
    }
}

impl<B: Backend> FixedOutputReset for HashContext<B> {
    #[track_caller]
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let digest = self.try_finalize_reset().expect("Failed to finalize SHA-1 `HashContext`");
        out.copy_from_slice(digest.as_slice());
    }
}

impl<B: Backend> Reset for HashContext<B> {
    #[track_caller]
    fn reset(&mut self) {
        HashContext::reset(self).unwrap();
    }
}
