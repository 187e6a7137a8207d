macro_rules! std {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "std")]
            #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
            $item
        )*
    };
}

macro_rules! alloc {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "alloc")]
            #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
            $item
        )*
    };
}

macro_rules! no_std_io {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "embedded-io")]
            #[cfg_attr(docsrs, doc(cfg(feature = "embedded-io")))]
            $item
        )*
    };
}

macro_rules! can_panic {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "can-panic")]
            #[cfg_attr(docsrs, doc(cfg(feature = "can-panic")))]
            $item
        )*
    };
}

/// Lifecycle events, compiled out entirely without the `tracing` feature.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        { ::tracing::trace!($($arg)*); }
    };
}

/// Failures and rejected calls, compiled out entirely without the `tracing` feature.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        { ::tracing::debug!($($arg)*); }
    };
}
