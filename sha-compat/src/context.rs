//! The SHA-1 Hashing Context
//!
//! [`HashContext`] is the init / update / finalize lifecycle of the wrapped library, with the
//! lifecycle enforced by ownership rather than by convention:
//!
//! * A context only exists once [`HashContext::new`] succeeded, so an uninitialized context
//!   cannot be updated.
//! * [`HashContext::try_finalize`] consumes the context, so a finalized context cannot be
//!   updated or finalized again.
//!
//! The resetting variants (`finalize_into*`, [`try_finalize_reset`]) write the digest and leave
//! the context ready for a new, independent message.
//!
//! # Security Warning
//!
//! SHA-1 is cryptographically broken, practical collisions have been demonstrated. It is
//! offered for compatibility with existing formats and protocols only. Do not use it for digital
//! signatures, certificate validation, or anywhere collision resistance matters.
//!
//! [`try_finalize_reset`]: HashContext::try_finalize_reset
use crate::backend::{Backend, DefaultBackend};
use crate::buf::Digest;
use crate::opaque_res::Res;
use crate::{Unspecified, DIGEST_LEN};

/// The running state of one SHA-1 computation.
///
/// # Example
///
/// ```
/// use sha_compat::HashContext;
///
/// let mut ctx = HashContext::new().unwrap();
///
/// assert!(ctx.try_update(b"a").is_ok());
/// assert!(ctx.try_update(b"bc").is_ok());
///
/// let digest = ctx.try_finalize().unwrap();
/// assert_eq!(digest.encode_hex().as_str(), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
#[repr(transparent)]
pub struct HashContext<B: Backend = DefaultBackend> {
    inner: B
}

impl HashContext<DefaultBackend> {
    /// Create a new, initialized `HashContext` using the [`DefaultBackend`].
    ///
    /// # Errors
    ///
    /// If the wrapped library fails to initialize its state.
    ///
    /// # Example
    ///
    /// ```
    /// use sha_compat::HashContext;
    ///
    /// let ctx = HashContext::new().unwrap();
    /// assert_eq!(
    ///     ctx.try_finalize().unwrap().encode_hex().as_str(),
    ///     "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    /// );
    /// ```
    #[doc(alias = "init")]
    #[doc(alias = "SHA1_Init")]
    #[inline]
    pub fn new() -> Result<Self, Unspecified> {
        Self::with_backend()
    }
}

impl<B: Backend> HashContext<B> {
    /// Create a new, initialized `HashContext` using the backend `B`.
    ///
    /// # Errors
    ///
    /// If the wrapped library fails to initialize its state.
    pub fn with_backend() -> Result<Self, Unspecified> {
        match B::start() {
            Ok(inner) => {
                trace_event!(library = B::LIBRARY, "SHA-1 context initialized");
                Ok(Self { inner })
            },
            Err(err) => {
                debug_event!(library = B::LIBRARY, "SHA-1 context failed to initialize");
                Err(err)
            }
        }
    }

    /// The name of the library performing the hashing.
    #[inline]
    pub const fn library(&self) -> &'static str {
        B::LIBRARY
    }

    /// Append `data` to the message.
    ///
    /// Empty input is a no-op. Input of any length is accepted, if the wrapped library limits the
    /// length of a single call the input is split across several.
    ///
    /// # Errors
    ///
    /// If the wrapped update function fails.
    ///
    /// # Example
    ///
    /// ```
    /// use sha_compat::HashContext;
    ///
    /// let mut ctx = HashContext::new().unwrap();
    /// assert!(ctx.try_update(b"hello world").is_ok());
    /// assert!(ctx.try_update(&[]).is_ok());
    /// ```
    #[doc(alias = "SHA1_Update")]
    #[inline]
    pub fn try_update(&mut self, data: &[u8]) -> Res {
        self.inner.update(data)
    }

    /// Append `data`, whose length is known at compile time, to the message.
    ///
    /// When `C` is within the wrapped library's single call limit, the split performed by
    /// [`try_update`] is skipped.
    ///
    /// # Errors
    ///
    /// If the wrapped update function fails.
    ///
    /// [`try_update`]: Self::try_update
    #[inline]
    pub fn update_sized<const C: usize>(&mut self, data: &[u8; C]) -> Res {
        if C <= B::MAX_UPDATE {
            // SAFETY: `C` was just checked against the single call limit.
            unsafe { self.inner.update_unchecked(data) }
        } else {
            self.inner.update(data)
        }
    }

    can_panic! {
        /// Append `data` to the message, panicking under any failure.
        ///
        /// # Panics
        ///
        /// If the wrapped update function fails. If a `panic` is not acceptable for your use case,
        /// see [`try_update`].
        ///
        /// [`try_update`]: Self::try_update
        #[track_caller]
        pub fn update(&mut self, data: &[u8]) {
            self.try_update(data).unit_err(())
                .expect("Failed to update SHA-1 `HashContext`");
        }
    }

    /// Discard everything absorbed so far, returning the context to its freshly initialized
    /// state.
    ///
    /// # Errors
    ///
    /// If the wrapped library fails to initialize a new state. The context is left unchanged.
    pub fn reset(&mut self) -> Res {
        match B::start() {
            Ok(fresh) => {
                // dropping the previous state releases and wipes it.
                self.inner = fresh;
                trace_event!(library = B::LIBRARY, "SHA-1 context reset");
                Res::OK
            },
            Err(_) => {
                debug_event!(library = B::LIBRARY, "SHA-1 context failed to reset");
                Res::ERR
            }
        }
    }

    /// Copy the running state, so that a shared prefix is only hashed once.
    ///
    /// # Errors
    ///
    /// If the wrapped library fails to copy its state.
    ///
    /// # Example
    ///
    /// ```
    /// use sha_compat::{HashContext, sha1};
    ///
    /// let mut ctx = HashContext::new().unwrap();
    /// assert!(ctx.try_update(b"common prefix ").is_ok());
    ///
    /// let mut fork = ctx.try_clone().unwrap();
    /// assert!(fork.try_update(b"and more").is_ok());
    ///
    /// assert_eq!(fork.try_finalize().unwrap(), sha1(b"common prefix and more").unwrap());
    /// assert_eq!(ctx.try_finalize().unwrap(), sha1(b"common prefix ").unwrap());
    /// ```
    #[inline]
    pub fn try_clone(&self) -> Result<Self, Unspecified> {
        self.inner.duplicate().map(|inner| Self { inner })
    }

    /// Write the digest into `output` and reset the context, without checking the size of
    /// `output`.
    ///
    /// # Safety
    ///
    /// `output` must be at least [`DIGEST_LEN`] bytes.
    #[inline]
    pub unsafe fn finalize_unchecked(&mut self, output: &mut [u8]) -> Res {
        debug_assert!(output.len() >= DIGEST_LEN);
        let output = &mut *output.as_mut_ptr().cast::<[u8; DIGEST_LEN]>();
        self.finalize_into_exact(output)
    }

    /// Write the digest into `output` and reset the context for a new message.
    ///
    /// # Errors
    ///
    /// - If `output` is shorter than [`DIGEST_LEN`] bytes. Nothing is written and the context
    ///   is left untouched.
    /// - If the wrapped finalize function fails.
    ///
    /// # Example
    ///
    /// ```
    /// use sha_compat::HashContext;
    ///
    /// let mut ctx = HashContext::new().unwrap();
    /// # assert!(ctx.try_update(b"hello world").is_ok());
    ///
    /// let mut small = [0u8; 16];
    /// assert!(ctx.finalize_into(&mut small).is_err());
    ///
    /// let mut output = [0u8; 32];
    /// assert!(ctx.finalize_into(&mut output).is_ok());
    /// ```
    #[inline]
    pub fn finalize_into(&mut self, output: &mut [u8]) -> Res {
        if output.len() < DIGEST_LEN { return Res::ERR }
        // SAFETY: the length was just checked.
        unsafe { self.finalize_unchecked(output) }
    }

    /// Write the digest into `output`, whose size is known at compile time, and reset the
    /// context for a new message.
    ///
    /// # Errors
    ///
    /// - If `C` is less than [`DIGEST_LEN`].
    /// - If the wrapped finalize function fails.
    #[inline]
    pub fn finalize_into_sized<const C: usize>(&mut self, output: &mut [u8; C]) -> Res {
        if C < DIGEST_LEN { return Res::ERR }
        // SAFETY: the length was just checked.
        unsafe { self.finalize_unchecked(output) }
    }

    /// Write the digest into `output` and reset the context for a new message, with the size
    /// check moved to the type system.
    ///
    /// # Errors
    ///
    /// If the wrapped finalize function fails.
    #[doc(alias = "SHA1_Final")]
    #[inline]
    pub fn finalize_into_exact(&mut self, output: &mut [u8; DIGEST_LEN]) -> Res {
        let res = self.inner.finish(output);
        if res.is_ok() {
            trace_event!(library = B::LIBRARY, "SHA-1 context finalized");
        } else {
            debug_event!(library = B::LIBRARY, "SHA-1 context failed to finalize");
        }
        res
    }

    /// Return the digest and reset the context for a new, independent message.
    ///
    /// # Errors
    ///
    /// If the wrapped finalize function fails.
    ///
    /// # Example
    ///
    /// ```
    /// use sha_compat::{HashContext, sha1};
    ///
    /// let mut ctx = HashContext::new().unwrap();
    ///
    /// assert!(ctx.try_update(b"first").is_ok());
    /// let first = ctx.try_finalize_reset().unwrap();
    ///
    /// assert!(ctx.try_update(b"second").is_ok());
    /// let second = ctx.try_finalize_reset().unwrap();
    ///
    /// assert_eq!(first, sha1(b"first").unwrap());
    /// assert_eq!(second, sha1(b"second").unwrap());
    /// ```
    #[inline]
    pub fn try_finalize_reset(&mut self) -> Result<Digest, Unspecified> {
        let mut digest = Digest::new_zeroed();
        self.finalize_into_exact(digest.as_mut()).unit_err(digest)
    }

    /// Return the digest, consuming the context.
    ///
    /// The wrapped state is released and wiped when the context is dropped at the end of this
    /// call.
    ///
    /// # Errors
    ///
    /// If the wrapped finalize function fails.
    #[inline]
    pub fn try_finalize(mut self) -> Result<Digest, Unspecified> {
        self.try_finalize_reset()
    }

    can_panic! {
        /// Return the digest, consuming the context, panicking under any failure.
        ///
        /// # Panics
        ///
        /// If the wrapped finalize function fails. If a `panic` is not acceptable for your use
        /// case, see [`try_finalize`].
        ///
        /// [`try_finalize`]: Self::try_finalize
        #[track_caller]
        pub fn finalize(self) -> Digest {
            self.try_finalize().expect("Failed to finalize SHA-1 `HashContext`")
        }
    }
}

impl<B: Backend> core::fmt::Debug for HashContext<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashContext")
            .field("library", &B::LIBRARY)
            .finish_non_exhaustive()
    }
}

/// Compute the SHA-1 digest of `data` in one call.
///
/// # Errors
///
/// If the wrapped library fails at any point.
///
/// # Example
///
/// ```
/// use sha_compat::sha1;
///
/// let digest = sha1(b"The quick brown fox jumps over the lazy dog").unwrap();
/// assert_eq!(digest.encode_hex().as_str(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
/// ```
pub fn sha1(data: &[u8]) -> Result<Digest, Unspecified> {
    let mut ctx = HashContext::new()?;
    ctx.try_update(data).unit_err(())?;
    ctx.try_finalize()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::test_utils::{AnyList, BoundList};
    use digest::Digest as _;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2_000))]

        #[test]
        fn chunking_is_irrelevant(inputs in any::<AnyList<32, BoundList<256>>>()) {
            let mut chunked = HashContext::<DefaultBackend>::new().unwrap();

            for input in inputs.as_slice() {
                prop_assert!(chunked.try_update(input.as_slice()).is_ok());
            }

            let joined = inputs.join();
            let mut whole = HashContext::<DefaultBackend>::new().unwrap();
            prop_assert!(whole.try_update(joined.as_slice()).is_ok());

            let chunked = chunked.try_finalize().unwrap();
            prop_assert_eq!(chunked, whole.try_finalize().unwrap());
            let expected = sha1::Sha1::digest(joined.as_slice());
            prop_assert_eq!(chunked.as_slice(), expected.as_slice());
        }

        #[test]
        fn finalize_reset_equivalence(inputs in any::<AnyList<32, BoundList<256>>>()) {
            let mut ctx = HashContext::<DefaultBackend>::new().unwrap();

            for input in inputs.as_slice() {
                prop_assert!(ctx.try_update(input.as_slice()).is_ok());
                let out = ctx.try_finalize_reset().unwrap();
                prop_assert_eq!(out, sha1(input.as_slice()).unwrap());
            }
        }

        #[test]
        fn clone_equivalence(prefix in any::<BoundList<256>>(), suffix in any::<BoundList<256>>()) {
            let mut ctx = HashContext::<DefaultBackend>::new().unwrap();
            prop_assert!(ctx.try_update(prefix.as_slice()).is_ok());

            let mut fork = ctx.try_clone().unwrap();
            prop_assert!(fork.try_update(suffix.as_slice()).is_ok());

            let mut joined = prefix.as_slice().to_vec();
            joined.extend_from_slice(suffix.as_slice());

            prop_assert_eq!(fork.try_finalize().unwrap(), sha1(&joined).unwrap());
            prop_assert_eq!(ctx.try_finalize().unwrap(), sha1(prefix.as_slice()).unwrap());
        }
    }
}
