use std::marker::PhantomData;

/// Like [`Iterator::enumerate`], but yields typed indices instead of raw `usize`.
pub struct EnumeratedIdx<I, Idx> {
    inner: std::iter::Enumerate<I>,
    _index: PhantomData<Idx>,
}

pub trait EnumerateIdx<Idx>: Iterator + Sized {
    fn enumerate_idx(self) -> EnumeratedIdx<Self, Idx> {
        EnumeratedIdx {
            inner: self.enumerate(),
            _index: PhantomData,
        }
    }
}

impl<I: Iterator, Idx> EnumerateIdx<Idx> for I {}

impl<I: Iterator, Idx: From<usize>> Iterator for EnumeratedIdx<I, Idx> {
    type Item = (Idx, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, item) = self.inner.next()?;
        Some((Idx::from(index), item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator, Idx: From<usize>> ExactSizeIterator for EnumeratedIdx<I, Idx> {}
