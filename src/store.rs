//! The `store` module defines the [`QueueStore`] abstraction over the
//! vector-like containers a [`MinQueue`](crate::MinQueue) uses as
//! backing storage for its two internal buffers.
use smallvec::SmallVec;

/// In order to implement a min-queue, we need an underlying container
/// that can push to the end, truncate to a prefix of the elements, and
/// expose its contents as a contiguous slice.
///
/// The queue's minimum trackers are plain indices into [`slice`], so an
/// implementation must keep element positions stable under `push` (any
/// vector-like container does).
///
/// [`slice`]: QueueStore::slice
pub trait QueueStore {
    /// The type of each value in the container.
    type Item;

    /// Pushes `value` to the end of the container.
    fn push(&mut self, value: Self::Item);
    /// Shrinks the container to the first `len` elements.
    fn truncate(&mut self, len: usize);

    /// Returns a single contiguous slice for the container's
    /// elements, in order.
    fn slice(&self) -> &[Self::Item];
}

impl<T: Copy> QueueStore for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn push(&mut self, value: T) {
        self.push(value)
    }

    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }

    #[inline(always)]
    fn slice(&self) -> &[T] {
        self
    }
}

impl<A> QueueStore for SmallVec<A>
where
    A: smallvec::Array,
    <A as smallvec::Array>::Item: Copy,
{
    type Item = <A as smallvec::Array>::Item;

    #[inline(always)]
    fn push(&mut self, value: Self::Item) {
        self.push(value)
    }

    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }

    #[inline(always)]
    fn slice(&self) -> &[Self::Item] {
        self
    }
}
