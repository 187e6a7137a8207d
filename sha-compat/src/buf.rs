//! The SHA-1 Digest and Buffer Size Errors
use core::fmt;
use crate::hex::{self, HexError};
use crate::opaque_res::Res;
use crate::DIGEST_LEN;

/// Error returned when a provided buffer is not the expected length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidSize;

impl fmt::Display for InvalidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InvalidSize")
    }
}

std! {
    impl std::error::Error for InvalidSize {}
}

/// The length of a hex-encoded SHA-1 digest.
pub const HEX_DIGEST_LEN: usize = hex::encode_len(DIGEST_LEN);

/// A 20 byte SHA-1 digest, in the standard big-endian byte order.
///
/// Equality is checked in constant-time.
///
/// # Example
///
/// ```
/// use sha_compat::Digest;
///
/// let empty = Digest::from_hex(b"da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();
/// assert_eq!(empty.as_bytes()[0], 0xda);
/// assert_eq!(empty.encode_hex().as_str(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
/// ```
#[must_use = "A digest which is never compared or stored is wasted work"]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Digest {
    inner: [u8; DIGEST_LEN]
}

impl Digest {
    /// The size of the digest in bytes.
    pub const CAPACITY: usize = DIGEST_LEN;

    /// Creates a new `Digest` from its raw bytes.
    pub const fn new(inner: [u8; DIGEST_LEN]) -> Self {
        Self { inner }
    }

    pub(crate) const fn new_zeroed() -> Self {
        Self::new([0u8; DIGEST_LEN])
    }

    /// Parses a lowercase hex-encoded digest.
    ///
    /// # Errors
    ///
    /// - [`HexError::Size`]: `hex` is not exactly 40 characters.
    /// - [`HexError::Encoding`]: `hex` contains a character outside of `0-9a-f`.
    pub fn from_hex(hex: &[u8]) -> Result<Self, HexError> {
        if hex.len() != HEX_DIGEST_LEN { return Err(HexError::Size) }
        let mut out = Self::new_zeroed();
        hex::decode_into(hex, &mut out.inner).map(|_| out)
    }

    /// Returns a reference to the underlying bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.inner
    }

    /// Returns the digest as a byte slice.
    #[inline]
    pub const fn as_slice(&self) -> &[u8] {
        self.inner.as_slice()
    }

    /// Consumes the `Digest`, returning the underlying bytes.
    #[inline]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.inner
    }

    #[inline]
    pub(crate) fn as_mut(&mut self) -> &mut [u8; DIGEST_LEN] {
        &mut self.inner
    }

    /// Hex-encodes the digest in constant-time.
    pub fn encode_hex(&self) -> HexDigest {
        let mut out = HexDigest { inner: [0u8; HEX_DIGEST_LEN] };
        // the output is exactly `encode_len(DIGEST_LEN)`, this cannot fail.
        let _ = hex::encode_into(&self.inner, &mut out.inner);
        out
    }

    /// Checks, in constant-time, that `expected` is exactly this digest.
    ///
    /// # Example
    ///
    /// ```
    /// use sha_compat::HashContext;
    ///
    /// let mut ctx = HashContext::new().unwrap();
    /// assert!(ctx.try_update(b"abc").is_ok());
    ///
    /// let digest = ctx.try_finalize().unwrap();
    /// assert!(digest.verify(&hex_literal::hex!("a9993e364706816aba3e25717850c26c9cd0d89d")).is_ok());
    /// assert!(digest.verify(&[0u8; 20]).is_err());
    /// ```
    pub fn verify(&self, expected: &[u8]) -> Res {
        Res::from(crate::ct::cmp_slice(&self.inner, expected) == 1)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    #[inline]
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Self::new(value)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    #[inline]
    fn from(value: Digest) -> Self {
        value.inner
    }
}

impl<'s> TryFrom<&'s [u8]> for Digest {
    type Error = InvalidSize;

    fn try_from(value: &'s [u8]) -> Result<Self, Self::Error> {
        match value.try_into() {
            Ok(res) => Ok(Self::new(res)),
            Err(_) => Err(InvalidSize)
        }
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for Digest {
    /// Constant Time Equivalence
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        crate::ct::ct_eq(self.inner, other.inner)
    }
}

impl Eq for Digest {}

impl PartialEq<[u8; DIGEST_LEN]> for Digest {
    /// Constant Time Equivalence
    #[inline]
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        crate::ct::ct_eq(self.inner, other)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode_hex().as_str())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("Digest({})", self.encode_hex().as_str()))
    }
}

/// A hex-encoded [`Digest`], held on the stack.
#[derive(Copy, Clone)]
pub struct HexDigest {
    inner: [u8; HEX_DIGEST_LEN]
}

impl HexDigest {
    /// The encoded digest as a `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `inner` is only ever written by `hex::encode_into`, which only produces ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.inner) }
    }

    /// The encoded digest as bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; HEX_DIGEST_LEN] {
        &self.inner
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for HexDigest {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const ABC: [u8; 20] = hex!("a9993e364706816aba3e25717850c26c9cd0d89d");

    #[test]
    fn hex_roundtrip() {
        let digest = Digest::new(ABC);
        let encoded = digest.encode_hex();

        assert_eq!(encoded.as_str(), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(Digest::from_hex(encoded.as_bytes()).unwrap(), digest);
    }

    #[test]
    fn from_hex_wrong_len() {
        assert_eq!(Digest::from_hex(b"a9993e").unwrap_err(), HexError::Size);
        assert_eq!(
            Digest::from_hex(b"a9993e364706816aba3e25717850c26c9cd0d89d00").unwrap_err(),
            HexError::Size
        );
    }

    #[test]
    fn from_hex_uppercase_rejected() {
        assert_eq!(
            Digest::from_hex(b"A9993E364706816ABA3E25717850C26C9CD0D89D").unwrap_err(),
            HexError::Encoding
        );
    }

    #[test]
    fn formatting() {
        let digest = Digest::new(ABC);
        assert_eq!(std::format!("{digest}"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(std::format!("{digest:x}"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(
            std::format!("{digest:?}"),
            "Digest(a9993e364706816aba3e25717850c26c9cd0d89d)"
        );
    }

    #[test]
    fn try_from_slice() {
        assert_eq!(Digest::try_from(ABC.as_slice()).unwrap(), ABC);
        assert_eq!(Digest::try_from(&ABC[..19]).unwrap_err(), InvalidSize);
    }

    #[test]
    fn verify() {
        let digest = Digest::new(ABC);
        assert!(digest.verify(&ABC).is_ok());
        assert!(digest.verify(&ABC[..19]).is_err());

        let mut flipped = ABC;
        flipped[19] ^= 1;
        assert!(digest.verify(&flipped).is_err());
        assert_ne!(digest, Digest::new(flipped));
    }
}
