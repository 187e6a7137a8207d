use core::fmt;
use core::mem::MaybeUninit;
use core::ops;
use proptest::arbitrary::{any, Arbitrary};
use proptest::array;
use proptest::num::u8::Any;
use proptest::strategy::{BoxedStrategy, Strategy};

/// A byte message of at most `C` bytes, stored inline.
#[derive(Clone, Copy)]
pub struct BoundList<const C: usize> {
    inner: [u8; C],
    len: usize
}

impl<const C: usize> fmt::Debug for BoundList<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut dbg = f.debug_struct("BoundList");
        dbg.field("len", &self.len());

        if C <= 32 {
            dbg.field("inner", &self.as_slice());
        }

        dbg.finish()
    }
}

impl<const C: usize> BoundList<C> {
    pub const fn new_with_unchecked(inner: [u8; C], len: usize) -> Self {
        Self { inner, len }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner.as_slice()[..self.len()]
    }
}

impl<const C: usize> PartialEq for BoundList<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const C: usize> ops::Deref for BoundList<C> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<const C: usize> Arbitrary for BoundList<C> {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (0..=C, array::uniform::<Any, C>(any::<u8>()))
            .prop_map(|(len, buf)| {
                BoundList::new_with_unchecked(buf, len)
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

/// A list of at most `C` `Copy` values, used to model a message fed through several updates.
#[derive(Copy, Clone)]
pub struct AnyList<const C: usize, T: Copy> {
    inner: [MaybeUninit<T>; C],
    len: usize
}

impl<const C: usize, T: fmt::Debug + Copy> fmt::Debug for AnyList<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut dbg = f.debug_struct("AnyList");
        dbg.field("len", &self.len());

        if C <= 32 {
            dbg.field("inner", &self.as_slice());
        }

        dbg.finish()
    }
}

impl<const C: usize, T: Copy> AnyList<C, T> {
    pub fn new_with_slice(slice: &[T]) -> Self {
        debug_assert!(slice.len() <= C);

        let mut inner = [const { MaybeUninit::<T>::uninit() }; C];
        for (dst, src) in inner.iter_mut().zip(slice) {
            dst.write(*src);
        }

        Self { inner, len: slice.len() }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` elements were written in `new_with_slice`, and
        // `MaybeUninit<T>` has the same layout as `T`.
        unsafe { core::slice::from_raw_parts(self.inner.as_ptr().cast::<T>(), self.len) }
    }
}

impl<const C: usize, const B: usize> AnyList<C, BoundList<B>> {
    /// Concatenate every chunk into the full message.
    pub fn join(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((C * B) / 2);

        for e in self.as_slice() {
            out.extend_from_slice(e.as_slice());
        }

        out
    }
}

impl<const C: usize, T: PartialEq + Copy> PartialEq for AnyList<C, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const C: usize, T: Copy> ops::Deref for AnyList<C, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<const C: usize, T: Arbitrary + Copy + 'static> Arbitrary for AnyList<C, T>
    where <T as Arbitrary>::Strategy: 'static
{
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (0..=C, array::uniform::<<T as Arbitrary>::Strategy, C>(any::<T>()))
            .prop_map(|(len, buf)| {
                Self::new_with_slice(&buf.as_slice()[..len])
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
