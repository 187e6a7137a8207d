use core::fmt;

/// A generic error type representing an unspecified failure in a hashing operation.
///
/// The wrapped libraries only ever report that a call failed, never why. `Unspecified` carries
/// exactly that much information and nothing more.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unspecified;

impl fmt::Display for Unspecified {
    /// Writes "Unspecified" to the formatter.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Unspecified")
    }
}

std! { impl std::error::Error for Unspecified {} }

no_std_io! {
    impl embedded_io::Error for Unspecified {
        #[inline]
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }
}
