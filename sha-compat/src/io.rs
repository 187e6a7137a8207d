//! Feeding a [`HashContext`] From I/O
//!
//! With `std`, a [`HashContext`] is a [`std::io::Write`] sink, and [`HashingReader`] hashes
//! everything read through it. With `embedded-io` the same is offered over the
//! `embedded_io` traits for `no_std` targets.
use crate::backend::{Backend, DefaultBackend};
use crate::context::HashContext;

/// Reads through an inner reader, appending every byte read to a [`HashContext`].
///
/// # Example
///
#[cfg_attr(not(feature = "std"), doc = "```ignore")]
#[cfg_attr(feature = "std", doc = "```")]
/// use std::io::Read;
/// use sha_compat::{HashContext, io::HashingReader, sha1};
///
/// let mut reader = HashingReader::new(HashContext::new().unwrap(), b"abc".as_slice());
///
/// let mut buf = Vec::new();
/// reader.read_to_end(&mut buf).unwrap();
///
/// let (ctx, _inner) = reader.finish();
/// assert_eq!(ctx.try_finalize().unwrap(), sha1(&buf).unwrap());
/// ```
#[must_use]
pub struct HashingReader<IO, B: Backend = DefaultBackend> {
    ctx: HashContext<B>,
    io: IO
}

impl<IO, B: Backend> HashingReader<IO, B> {
    /// Wrap `io`, hashing what is read from it into `ctx`.
    pub const fn new(ctx: HashContext<B>, io: IO) -> Self {
        Self { ctx, io }
    }

    /// Unwrap, returning the context and the inner reader.
    #[inline]
    pub fn finish(self) -> (HashContext<B>, IO) {
        (self.ctx, self.io)
    }
}

std! {
    use std::io as std_io;

    impl<B: Backend> std_io::Write for HashContext<B> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> std_io::Result<usize> {
            self.write_all(buf).map(|()| buf.len())
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> std_io::Result<()> {
            self.try_update(buf).unit_err(()).map_err(std_io::Error::other)
        }

        #[inline]
        fn flush(&mut self) -> std_io::Result<()> {
            Ok(())
        }
    }

    impl<B: Backend> HashContext<B> {
        /// Append everything `reader` yields until EOF to the message.
        ///
        /// # Errors
        ///
        /// - Any error from `reader` other than [`Interrupted`], which is retried.
        /// - If the wrapped update function fails.
        ///
        /// # Returns
        ///
        /// The number of bytes hashed.
        ///
        /// [`Interrupted`]: std_io::ErrorKind::Interrupted
        pub fn update_reader<R: std_io::Read>(&mut self, mut reader: R) -> std_io::Result<u64> {
            let mut buf = [0u8; 8192];
            let mut total = 0u64;

            loop {
                let read = match reader.read(&mut buf) {
                    Ok(0) => break,
                    Ok(read) => read,
                    Err(e) if e.kind() == std_io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e)
                };

                self.try_update(&buf[..read]).unit_err(()).map_err(std_io::Error::other)?;
                total += read as u64;
            }

            Ok(total)
        }
    }

    impl<IO, B> std_io::Read for HashingReader<IO, B>
        where
            IO: std_io::Read,
            B: Backend
    {
        #[inline]
        fn read(&mut self, buf: &mut [u8]) -> std_io::Result<usize> {
            let read = self.io.read(buf)?;
            self.ctx.try_update(&buf[..read]).unit_err(read).map_err(std_io::Error::other)
        }
    }
}

no_std_io! {
    use embedded_io::{self as eio, ErrorType};
    use crate::Unspecified;

    impl<B: Backend> ErrorType for HashContext<B> {
        type Error = Unspecified;
    }

    impl<B: Backend> eio::Write for HashContext<B> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.try_update(buf).unit_err(buf.len())
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl<IO: ErrorType, B: Backend> ErrorType for HashingReader<IO, B> {
        type Error = Unspecified;
    }

    impl<IO, B> eio::Read for HashingReader<IO, B>
        where
            IO: eio::Read,
            B: Backend
    {
        #[inline]
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            match self.io.read(buf) {
                Ok(read) => self.ctx.try_update(&buf[..read]).unit_err(read),
                Err(_) => Err(Unspecified)
            }
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::sha1;
    use std::io::{Read, Write};

    #[test]
    fn write_equivalence() {
        let mut ctx = HashContext::<DefaultBackend>::new().unwrap();

        write!(ctx, "hello {}", "world").unwrap();
        ctx.flush().unwrap();

        assert_eq!(ctx.try_finalize().unwrap(), sha1(b"hello world").unwrap());
    }

    #[test]
    fn io_copy_into_context() {
        let input = std::vec![3u8; 100_000];
        let mut ctx = HashContext::<DefaultBackend>::new().unwrap();

        let copied = std::io::copy(&mut input.as_slice(), &mut ctx).unwrap();

        assert_eq!(copied, 100_000);
        assert_eq!(ctx.try_finalize().unwrap(), sha1(&input).unwrap());
    }

    #[test]
    fn update_reader_counts() {
        let input = std::vec![9u8; 20_000];
        let mut ctx = HashContext::<DefaultBackend>::new().unwrap();

        assert_eq!(ctx.update_reader(input.as_slice()).unwrap(), 20_000);
        assert_eq!(ctx.try_finalize().unwrap(), sha1(&input).unwrap());
    }

    #[test]
    fn update_reader_empty() {
        let mut ctx = HashContext::<DefaultBackend>::new().unwrap();

        assert_eq!(ctx.update_reader(std::io::empty()).unwrap(), 0);
        assert_eq!(ctx.try_finalize().unwrap(), sha1(b"").unwrap());
    }

    /// Fails with `Interrupted` on every other call.
    struct Flaky<'a> {
        inner: &'a [u8],
        interrupt: bool
    }

    impl Read for Flaky<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(std::io::ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(7);
            self.inner.read(&mut buf[..n])
        }
    }

    #[test]
    fn update_reader_retries_interrupted() {
        let input = b"The quick brown fox jumps over the lazy dog";
        let mut ctx = HashContext::<DefaultBackend>::new().unwrap();

        let read = ctx.update_reader(Flaky { inner: input.as_slice(), interrupt: false }).unwrap();

        assert_eq!(read, input.len() as u64);
        assert_eq!(ctx.try_finalize().unwrap(), sha1(input).unwrap());
    }

    #[test]
    fn update_reader_propagates_other_errors() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
        }

        let mut ctx = HashContext::<DefaultBackend>::new().unwrap();
        let err = ctx.update_reader(Broken).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn hashing_reader_partial_reads() {
        let input = b"The quick brown fox jumps over the lazy dog";
        let mut reader = HashingReader::new(
            HashContext::<DefaultBackend>::new().unwrap(),
            input.as_slice()
        );

        let mut small = [0u8; 5];
        let mut seen = std::vec::Vec::new();
        loop {
            let read = reader.read(&mut small).unwrap();
            if read == 0 { break }
            seen.extend_from_slice(&small[..read]);
        }

        let (ctx, rest) = reader.finish();
        assert!(rest.is_empty());
        assert_eq!(seen.as_slice(), input.as_slice());
        assert_eq!(
            ctx.try_finalize().unwrap().encode_hex().as_str(),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );
    }
}
