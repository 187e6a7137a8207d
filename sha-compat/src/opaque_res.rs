//! Opaque Result Accumulation
//!
//! The wrapped libraries report success through C integer return codes. `Res` folds those codes
//! into a single success flag, so a sequence of calls can be checked once at the end without
//! branching on each intermediate result.
use core::ffi::c_int;
use crate::error::Unspecified;

/// An opaque result type which only records success or failure.
#[must_use = "You must handle the potential error"]
#[repr(transparent)]
pub struct Res(bool);

impl Default for Res {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Res {
    /// Represents a successful result.
    pub const OK: Self = Self(true);
    /// Represents an error result.
    pub const ERR: Self = Self(false);

    /// Creates a new `Res` instance initialized to `OK`.
    pub const fn new() -> Self {
        Self::OK
    }

    /// Checks if the result is OK (successful).
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.0
    }

    /// Checks if the result is an error.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.0
    }

    /// Ensures that a C integer result is equal to 0.
    ///
    /// wolfcrypt returns `0` on success and a negative error code otherwise.
    ///
    /// # Arguments
    ///
    /// * `res` - A C integer to check.
    #[inline]
    pub fn ensure_0(&mut self, res: c_int) {
        self.0 &= res == 0;
    }

    /// Combines this `Res` with another `Res`.
    ///
    /// The result will be OK only if both `Res` instances are OK.
    #[inline]
    pub fn ensure(&mut self, res: Self) {
        self.0 &= res.0;
    }

    /// Converts the `Res` into the OpenSSL return code convention, `1` on success and `0` on
    /// failure.
    #[inline]
    pub const fn into_c_int(self) -> c_int {
        self.0 as c_int
    }

    /// Converts the `Res` into a `Result<OK, Unspecified>`.
    ///
    /// # Arguments
    ///
    /// * `ok` - The value to return in the `Ok` variant if the `Res` is OK.
    #[allow(clippy::missing_errors_doc)]
    #[inline(always)]
    pub fn unit_err<OK>(self, ok: OK) -> Result<OK, Unspecified> {
        if self.is_ok() {
            Ok(ok)
        } else {
            Err(Unspecified)
        }
    }

    /// Converts the `Res` into a `Result<OK, Unspecified>`, with a closure for the OK case.
    ///
    /// Use this when constructing the `OK` value is only sound if the result is OK, such as
    /// assuming a `MaybeUninit` was initialized by the wrapped library.
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn unit_err_with<F, OK>(self, ok: F) -> Result<OK, Unspecified>
        where F: FnOnce() -> OK
    {
        if self.is_ok() {
            Ok(ok())
        } else {
            Err(Unspecified)
        }
    }

    /// Unwraps the `Res`, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the `Res` is an error.
    #[cfg(feature = "can-panic")]
    #[inline]
    #[track_caller]
    pub fn unwrap(self) {
        self.unit_err(()).unwrap();
    }
}

impl From<bool> for Res {
    #[inline]
    fn from(value: bool) -> Self {
        Self(value)
    }
}
