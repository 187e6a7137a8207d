//! Constant-Time Hex Encoding and Decoding
//!
//! Digests are most often exchanged as lowercase hex. Encoding and decoding here avoid
//! data-dependent branches and lookup tables, so rendering or parsing an expected digest does not
//! leak its content through timing.
use core::fmt;
use crate::buf::InvalidSize;

/// The length of `len` bytes once hex-encoded.
#[must_use]
#[inline]
pub const fn encode_len(len: usize) -> usize {
    len << 1
}

#[inline]
fn encode_byte(byte: u8, output: &mut [u8]) {
    let lower = (byte & 0xf) as u32;
    let upper = (byte >> 4) as u32;

    let h =
        87u32.wrapping_add(lower)
            .wrapping_add(lower.wrapping_sub(10u32).wrapping_shr(8) & !38u32)
            .wrapping_shl(8)
            |
            87u32.wrapping_add(upper)
                .wrapping_add(upper.wrapping_sub(10u32).wrapping_shr(8) & !38u32);

    // truncate
    output[0] = h as u8;
    // get highest byte
    output[1] = h.wrapping_shr(8) as u8;
}

/// Constant-time lowercase hex encoding.
///
/// # Returns
///
/// The number of bytes written to `output`, always `input.len() * 2`.
///
/// # Errors
///
/// If `output` is shorter than `input.len() * 2`.
///
/// # Example
///
/// ```
/// use sha_compat::hex;
///
/// let mut output = [0u8; 22];
/// let len = hex::encode_into(b"hello world", &mut output).unwrap();
///
/// assert_eq!(len, 22);
/// assert_eq!(&output, b"68656c6c6f20776f726c64");
/// ```
pub fn encode_into(input: &[u8], output: &mut [u8]) -> Result<usize, InvalidSize> {
    let hex_len = encode_len(input.len());
    if output.len() < hex_len { return Err(InvalidSize) }

    for (byte, out) in input.iter().zip(output.chunks_exact_mut(2)) {
        encode_byte(*byte, out);
    }

    Ok(hex_len)
}

/// Constant-time lowercase hex encoding, returning the encoded region as a `&str`.
///
/// # Errors
///
/// If `output` is shorter than `input.len() * 2`.
///
/// # Example
///
/// ```
/// use sha_compat::hex;
///
/// let mut output = [0u8; 6];
/// assert_eq!(hex::encode_str(b"abc", &mut output).unwrap(), "616263");
/// ```
#[inline]
pub fn encode_str<'o>(input: &[u8], output: &'o mut [u8]) -> Result<&'o str, InvalidSize> {
    encode_into(input, output)
        // SAFETY: `encode_byte` only ever writes bytes in `0-9a-f`, all of which are ASCII.
        .map(move |len| unsafe { core::str::from_utf8_unchecked(&output[..len]) })
}

alloc! {
    /// Constant-time lowercase hex encoding into a new `String`.
    ///
    /// # Example
    ///
    /// ```
    /// use sha_compat::hex;
    ///
    /// assert_eq!(hex::encode(b"abc"), "616263");
    /// ```
    #[must_use]
    pub fn encode(input: &[u8]) -> alloc::string::String {
        let mut output = alloc::vec![0u8; encode_len(input.len())];
        for (byte, out) in input.iter().zip(output.chunks_exact_mut(2)) {
            encode_byte(*byte, out);
        }
        // SAFETY: `encode_byte` only ever writes ASCII.
        unsafe { alloc::string::String::from_utf8_unchecked(output) }
    }
}

#[inline]
const fn decode_nibble(first: u8) -> u16 {
    let byte = first as i16;
    let mut ret: i16 = -1;

    ret = ret.wrapping_add(
        (0x2fi16.wrapping_sub(byte) & byte.wrapping_sub(0x3a)).wrapping_shr(8)
            & byte.wrapping_sub(47)
    );

    ret = ret.wrapping_add(
        (0x60i16.wrapping_sub(byte) & byte.wrapping_sub(0x67)).wrapping_shr(8)
            & byte.wrapping_sub(86)
    );

    ret as u16
}

#[must_use]
const fn decode_predicate(inp_len: usize, out_len: usize) -> (bool, usize) {
    let dec_len = inp_len >> 1;
    (inp_len & 1 == 0 && out_len >= dec_len, dec_len)
}

/// Possible errors while decoding a hex string.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum HexError {
    /// An invalid character was encountered.
    Encoding,
    /// The output was too small, or the input was of odd length.
    Size
}

impl From<InvalidSize> for HexError {
    fn from(_value: InvalidSize) -> Self {
        Self::Size
    }
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size => f.write_str("HexError::Size"),
            Self::Encoding => f.write_str("HexError::Encoding")
        }
    }
}

impl fmt::Debug for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

std! { impl std::error::Error for HexError {} }

/// Constant-time decoding of lowercase hex.
///
/// # Errors
///
/// - [`HexError::Size`]: `output` cannot hold the decoded input, or `input` has odd length.
/// - [`HexError::Encoding`]: A character outside of `0-9a-f` was encountered.
///
/// # Returns
///
/// The amount of data which was decoded (`input.len() / 2`).
///
/// # Example
///
/// ```
/// use sha_compat::hex;
///
/// let mut out = [0u8; 3];
/// assert_eq!(hex::decode_into(b"616263", &mut out), Ok(3));
/// assert_eq!(&out, b"abc");
///
/// assert!(hex::decode_into(b"61626", &mut out).is_err());
/// ```
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize, HexError> {
    let (valid_len, dec_len) = decode_predicate(input.len(), output.len());
    if !valid_len { return Err(HexError::Size) }

    let mut err: u16 = 0;

    // `take` to guard against the length being zero
    for (pos, o_byte) in output.iter_mut().enumerate().take(dec_len) {
        let src_pos = pos << 1;

        let byte = decode_nibble(input[src_pos]).wrapping_shl(4)
            | decode_nibble(input[src_pos + 1]);

        err |= byte >> 8;

        *o_byte = byte as u8;
    }

    if err == 0 {
        Ok(dec_len)
    } else {
        Err(HexError::Encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_works() {
        let mut out = [0u8; 22];
        let len = encode_into(b"hello world", &mut out).unwrap();
        assert_eq!(len, 22);
        assert_eq!(core::str::from_utf8(&out).unwrap(), "68656c6c6f20776f726c64");
    }

    #[test]
    fn encode_every_byte_matches_hex_crate() {
        let all: std::vec::Vec<u8> = (0..=u8::MAX).collect();
        let mut out = [0u8; 512];

        let s = encode_str(&all, &mut out).unwrap();
        assert_eq!(s, ::hex::encode(&all));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn encode_alloc_matches_hex_crate() {
        let all: std::vec::Vec<u8> = (0..=u8::MAX).rev().collect();
        assert_eq!(encode(&all), ::hex::encode(&all));
        assert!(encode(&[]).is_empty());
    }

    #[test]
    fn encode_output_too_small() {
        let mut out = [0u8; 21];
        assert_eq!(encode_into(b"hello world", &mut out), Err(InvalidSize));
    }

    #[test]
    fn encode_to_decode() {
        let mut out = [0u8; 22];
        let _len = encode_into(b"hello world", &mut out).unwrap();

        let mut dec = [0u8; 11];
        let read = decode_into(&out, &mut dec).unwrap();

        assert_eq!(read, 11);
        assert_eq!(&dec, b"hello world");
    }

    #[test]
    fn invalid_hex() {
        let mut out = [0; 69];
        assert_eq!(
            decode_into(b"hello world I am not valid hex !!!", &mut out),
            Err(HexError::Encoding)
        );
    }

    #[test]
    fn odd_length() {
        let mut out = [0; 8];
        assert_eq!(decode_into(b"abc", &mut out), Err(HexError::Size));
    }

    #[test]
    fn empty() {
        let mut out = [0; 0];
        assert_eq!(decode_into(b"", &mut out), Ok(0));
        assert_eq!(encode_into(b"", &mut out), Ok(0));
    }
}
