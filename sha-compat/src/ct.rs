//! Constant-Time Comparison
//!
//! Used when a computed [`Digest`] is compared against an expected value, so that a mismatch does
//! not reveal how many leading bytes were correct.
//!
//! [`Digest`]: crate::Digest

#[inline(always)]
fn volatile(byte: u8) -> u8 {
    unsafe { core::ptr::read_volatile(&byte) }
}

#[inline(always)]
fn eq_hsb(xor: u8) -> u8 {
    volatile(xor | volatile(xor.wrapping_neg())) >> 7
}

/// Compare two bytes in constant-time.
///
/// # Returns
///
/// * `0`: `a != b`
/// * `1`: `a == b`
#[inline(always)]
#[must_use]
pub fn byte_eq(a: u8, b: u8) -> u8 {
    // the volatile read keeps the optimizer from turning the mask into a compare and select.
    eq_hsb(b ^ a) ^ volatile(1)
}

/// Compare two slices in constant-time.
///
/// # Note
///
/// If the lengths of `a` and `b` differ this exits early. Lengths are public for every use in
/// this crate (a SHA-1 digest is always 20 bytes).
///
/// # Returns
///
/// * `0`: `a != b`
/// * `1`: `a == b`
#[must_use]
pub fn cmp_slice(a: &[u8], b: &[u8]) -> u8 {
    if a.len() != b.len() { return 0 }

    let mut res = volatile(1u8);

    for (l, r) in a.iter().zip(b.iter()) {
        res &= byte_eq(*l, *r);
    }

    res
}

/// Compare two byte sequences in constant-time.
///
/// # Warning
///
/// Constant-time programming is nuanced, this is a *best-effort* equivalence check. There is no
/// guarantee of constant-time properties across all existing hardware.
///
/// # Example
///
/// ```
/// use sha_compat::ct_eq;
///
/// assert!(ct_eq(b"hello world", "hello world"));
/// assert!(!ct_eq(b"hello world", "hello_world"));
/// ```
#[must_use]
pub fn ct_eq<A: AsRef<[u8]>, B: AsRef<[u8]>>(a: A, b: B) -> bool {
    cmp_slice(a.as_ref(), b.as_ref()) != 0
}
