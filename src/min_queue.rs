//! The `min_queue` module defines the [`MinQueue`] container wrapper.
//! It's a FIFO queue (push at the back, pop at the front) that also
//! tracks the minimum of its live contents, over any
//! [`QueueStore`]-compatible backing container ([`Vec`] for the regular
//! case, and [`SmallVec`](smallvec::SmallVec) for queues that are
//! usually small).
use smallvec::SmallVec;

use crate::store::QueueStore;

/// A [`MinQueue`] wraps a pair of vector-like buffers to implement a
/// FIFO queue with constant-time minimum queries.
///
/// All insertions go to the back of a *tail* buffer, next to a cached
/// index for the smallest element pushed since the last rebalance.
/// All removals come from the front of a *head* buffer, next to a stack
/// of suffix-minimum indices: read from the top down, each entry is the
/// minimum of the head elements from its position to the end, so the
/// top always names the minimum of whatever remains in the head.
///
/// When the head runs dry and a pop needs an element, the tail buffer
/// is swapped wholesale into the head position and the suffix stack is
/// rebuilt in one backward pass.  Each element takes part in exactly
/// one such rebuild, which is what makes `pop_front` amortised
/// constant time; `push_back`, `front`, `back`, `min`, and `len` are
/// all worst-case constant time.
///
/// The price of those bounds is asymmetry: there is no `push_front`
/// and no `pop_back`.
///
/// An empty queue answers `None` from every partial operation
/// (`front`, `back`, `min`, `pop_front`); nothing panics.
#[derive(Clone, Debug, Default)]
pub struct MinQueue<Container>
where
    Container: QueueStore + Clone + Default,
    <Container as QueueStore>::Item: Copy,
{
    /// Receives every `push_back`.  Append-only between rebalances.
    tail: Container,
    /// Index into `tail` of the smallest element pushed since the last
    /// rebalance; `None` iff `tail` is empty.  Updated only on strict
    /// decrease, so ties keep the earliest occurrence.
    tail_min: Option<usize>,
    /// Serves every `pop_front`.  Filled wholesale from `tail` when it
    /// runs dry, then only drained; reset to empty once fully consumed.
    head: Container,
    /// Read position in `head`: everything before it has been popped.
    head_pos: usize,
    /// Suffix-minimum stack of indices into `head`.  The last entry
    /// always names the minimum of the unconsumed `head` suffix.
    head_min: Vec<usize>,
}

/// A [`MinQueue`] where the backing storage is a [`Vec<T>`]
pub type MinVec<T> = MinQueue<Vec<T>>;

/// A [`MinQueue`] where the backing storage is a
/// [`SmallVec<SliceType>`](SmallVec), e.g. `MinSmallVec<[u32; 8]>`.
pub type MinSmallVec<SliceType> = MinQueue<SmallVec<SliceType>>;

impl<Container: QueueStore + Clone + Default> MinQueue<Container>
where
    <Container as QueueStore>::Item: Copy + Ord,
{
    /// Creates a new empty [`MinQueue`]
    #[inline(always)]
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the number of elements currently in the [`MinQueue`].
    #[must_use]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tail.slice().len() + (self.head.slice().len() - self.head_pos)
    }

    /// Determines whether the [`MinQueue`] holds no element.
    #[must_use]
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tail.slice().is_empty() && self.head.slice().is_empty()
    }

    /// Pushes `item` to the back of the [`MinQueue`].
    #[inline(always)]
    pub fn push_back(&mut self, item: Container::Item) {
        self.check_rep();

        let improved = match self.tail_min {
            Some(idx) => item < self.tail.slice()[idx],
            None => true,
        };
        if improved {
            self.tail_min = Some(self.tail.slice().len());
        }

        self.tail.push(item);
        self.check_rep();
    }

    /// Consumes and returns the first element in the [`MinQueue`], if
    /// any.
    ///
    /// Amortised constant time: when the head buffer is exhausted, the
    /// whole tail buffer slides over in one linear rebalance.
    #[inline(never)]
    pub fn pop_front(&mut self) -> Option<Container::Item> {
        self.check_rep();

        if self.head.slice().is_empty() {
            if self.tail.slice().is_empty() {
                return None;
            }

            self.rebalance();
        }

        // The departing front may be the tracked suffix minimum; its
        // stack entry is stale once the element leaves.
        if self.head_min.last() == Some(&self.head_pos) {
            self.head_min.pop();
        }

        let ret = self.head.slice()[self.head_pos];
        self.head_pos += 1;

        // Reclaim the storage as soon as the head drains.
        if self.head_pos == self.head.slice().len() {
            self.head.truncate(0);
            self.head_pos = 0;
        }

        self.check_rep();

        Some(ret)
    }

    /// Returns a reference to the first element in the [`MinQueue`],
    /// if any.
    #[must_use]
    #[inline(always)]
    pub fn front(&self) -> Option<&Container::Item> {
        self.check_rep();

        if self.head.slice().is_empty() {
            self.tail.slice().first()
        } else {
            self.head.slice().get(self.head_pos)
        }
    }

    /// Returns a reference to the last element in the [`MinQueue`],
    /// if any.
    #[must_use]
    #[inline(always)]
    pub fn back(&self) -> Option<&Container::Item> {
        self.check_rep();

        self.tail.slice().last().or_else(|| self.head.slice().last())
    }

    /// Returns a reference to the smallest element in the
    /// [`MinQueue`], if any.
    ///
    /// Constant time: the answer is the smaller of the two tracked
    /// minima (head side wins ties).
    #[must_use]
    #[inline(always)]
    pub fn min(&self) -> Option<&Container::Item> {
        self.check_rep();

        let head_min = self.head_min.last().map(|&idx| &self.head.slice()[idx]);
        let tail_min = self.tail_min.map(|idx| &self.tail.slice()[idx]);

        match (head_min, tail_min) {
            (Some(h), Some(t)) => Some(if *t < *h { t } else { h }),
            (Some(h), None) => Some(h),
            (None, t) => t,
        }
    }

    /// Returns an iterator over the elements of the [`MinQueue`], in
    /// FIFO (front-to-back) order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &Container::Item> {
        self.head.slice()[self.head_pos..]
            .iter()
            .chain(self.tail.slice())
    }

    /// Removes all elements from this [`MinQueue`], and restores the
    /// internal state to the freshly constructed empty state.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.tail.truncate(0);
        self.tail_min = None;

        self.head.truncate(0);
        self.head_pos = 0;
        self.head_min.clear();

        self.check_rep();
    }

    /// Slides the tail buffer into the (exhausted) head position and
    /// rebuilds the suffix-minimum stack in one backward pass.
    #[inline(never)]
    fn rebalance(&mut self) {
        debug_assert!(self.head.slice().is_empty());
        debug_assert_eq!(self.head_pos, 0);
        debug_assert!(self.head_min.is_empty());

        std::mem::swap(&mut self.head, &mut self.tail);
        self.tail_min = None;

        // Keep an index each time a strictly smaller value appears, so
        // the stack's last entry names the suffix minimum.  Ties are
        // not retained; the stack stays as small as possible.
        let slice = self.head.slice();
        for idx in (0..slice.len()).rev() {
            match self.head_min.last() {
                Some(&best) if slice[best] <= slice[idx] => {}
                _ => self.head_min.push(idx),
            }
        }
    }

    #[inline(always)]
    #[cfg_attr(test, mutants::skip)] // obviously, removing checks will not be detected.
    fn check_rep(&self) {
        // The tail tracker is present iff the tail holds elements, and
        // targets one of them.
        debug_assert_eq!(self.tail_min.is_some(), !self.tail.slice().is_empty());
        if let Some(idx) = self.tail_min {
            debug_assert!(idx < self.tail.slice().len());
        }

        // The head buffer is reset as soon as it drains, so a live
        // read position always lands on an element.
        debug_assert!(self.head_pos == 0 || self.head_pos < self.head.slice().len());

        // The suffix stack is non-empty iff the head holds elements,
        // and its top targets the unconsumed suffix.
        debug_assert_eq!(self.head_min.is_empty(), self.head.slice().is_empty());
        if let Some(&idx) = self.head_min.last() {
            debug_assert!(idx >= self.head_pos);
            debug_assert!(idx < self.head.slice().len());
        }
    }
}

impl<Container> From<Container> for MinQueue<Container>
where
    Container: QueueStore + Clone + Default,
    <Container as QueueStore>::Item: Copy + Ord,
{
    /// Bulk-loads a [`MinQueue`] from `container`: the contents seed
    /// the tail buffer, and the tail minimum is found by one full scan.
    fn from(container: Container) -> MinQueue<Container> {
        let mut tail_min = None;

        let slice = container.slice();
        for (idx, item) in slice.iter().enumerate() {
            match tail_min {
                Some(best) if slice[best] <= *item => {}
                _ => tail_min = Some(idx),
            }
        }

        MinQueue {
            tail: container,
            tail_min,
            head: Default::default(),
            head_pos: 0,
            head_min: Vec::new(),
        }
    }
}

impl<Container> Extend<<Container as QueueStore>::Item> for MinQueue<Container>
where
    Container: QueueStore + Clone + Default,
    <Container as QueueStore>::Item: Copy + Ord,
{
    #[inline(always)]
    fn extend<I: IntoIterator<Item = Container::Item>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<Container> FromIterator<<Container as QueueStore>::Item> for MinQueue<Container>
where
    Container: QueueStore + Clone + Default,
    <Container as QueueStore>::Item: Copy + Ord,
{
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Container::Item>>(iter: I) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

/// Structural equality: two queues are equal when they hold the same
/// elements in the same FIFO order, regardless of where each queue's
/// internal head/tail split currently lies.
impl<Container> PartialEq for MinQueue<Container>
where
    Container: QueueStore + Clone + Default,
    <Container as QueueStore>::Item: Copy + Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<Container> Eq for MinQueue<Container>
where
    Container: QueueStore + Clone + Default,
    <Container as QueueStore>::Item: Copy + Ord,
{
}

/// Splittable deterministic generator for the randomised tests
/// (no external PRNG dependency; same role as `std::rand` in ad-hoc
/// test drivers).
#[cfg(test)]
fn lcg(state: &mut u64) -> u32 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*state >> 33) as u32
}

#[test]
fn test_empty_miri() {
    let mut queue = MinQueue::<Vec<u32>>::new();

    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
    assert_eq!(queue.min(), None);
    assert_eq!(queue.pop_front(), None);
    assert_eq!(queue.iter().count(), 0);

    // Clearing an empty queue is a no-op.
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.pop_front(), None);
}

#[test]
fn test_single_element_miri() {
    let mut queue = MinQueue::<Vec<u32>>::new();

    queue.push_back(777);
    assert_eq!(queue.len(), 1);
    assert!(!queue.is_empty());
    assert_eq!(queue.min(), Some(&777));
    assert_eq!(queue.back(), Some(&777));
    assert_eq!(queue.front(), Some(&777));

    assert_eq!(queue.pop_front(), Some(777));
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert_eq!(queue.min(), None);
}

#[test]
fn test_increasing_miri() {
    let mut queue = MinQueue::<Vec<u32>>::new();

    for i in 0..10 {
        queue.push_back(i);
        assert_eq!(queue.len(), (i + 1) as usize);
        assert_eq!(queue.min(), Some(&0));
        assert_eq!(queue.back(), Some(&i));
        assert_eq!(queue.front(), Some(&0));
    }

    // Monotonic input: the minimum always sits at the front.
    for i in 0..10 {
        assert_eq!(queue.len(), (10 - i) as usize);
        assert_eq!(queue.min(), Some(&i));
        assert_eq!(queue.back(), Some(&9));
        assert_eq!(queue.front(), Some(&i));
        assert_eq!(queue.pop_front(), Some(i));
    }

    assert!(queue.is_empty());
}

#[test]
fn test_increasing_duplicates_miri() {
    let mut queue = MinQueue::<Vec<u32>>::new();

    for i in 0..10 {
        queue.push_back(i);
        queue.push_back(i);
        assert_eq!(queue.len(), ((i + 1) * 2) as usize);
        assert_eq!(queue.min(), Some(&0));
        assert_eq!(queue.back(), Some(&i));
        assert_eq!(queue.front(), Some(&0));
    }

    for i in 0..10 {
        assert_eq!(queue.min(), Some(&i));
        assert_eq!(queue.front(), Some(&i));
        assert_eq!(queue.pop_front(), Some(i));

        // The duplicate is still live; the minimum must not advance.
        assert_eq!(queue.min(), Some(&i));
        assert_eq!(queue.front(), Some(&i));
        assert_eq!(queue.pop_front(), Some(i));
    }

    assert!(queue.is_empty());
}

#[test]
fn test_decreasing_miri() {
    let mut queue = MinQueue::<Vec<u32>>::new();

    for i in (1..=10).rev() {
        queue.push_back(i);
        assert_eq!(queue.min(), Some(&i));
        assert_eq!(queue.back(), Some(&i));
        assert_eq!(queue.front(), Some(&10));
    }

    for i in (1..=10).rev() {
        assert_eq!(queue.len(), i as usize);
        assert_eq!(queue.min(), Some(&1));
        assert_eq!(queue.back(), Some(&1));
        assert_eq!(queue.front(), Some(&i));
        assert_eq!(queue.pop_front(), Some(i));
    }

    assert!(queue.is_empty());
}

#[test]
fn test_tracked_across_pop_miri() {
    let mut queue: MinVec<i32> = [10, 9, 8, 18, 7].into_iter().collect();

    assert_eq!(queue.len(), 5);
    assert_eq!(queue.min(), Some(&7));
    assert_eq!(queue.back(), Some(&7));
    assert_eq!(queue.front(), Some(&10));

    assert_eq!(queue.pop_front(), Some(10));
    assert_eq!(queue.min(), Some(&7));
    assert_eq!(queue.front(), Some(&9));
}

// The three scenarios below poke at the state where both buffers are
// live (a pop forced a rebalance, then a push refilled the tail).

#[test]
fn test_split_state_new_min_miri() {
    let mut queue: MinVec<i32> = vec![2, 1, 3, 4, 5].into();

    assert_eq!(queue.min(), Some(&1));
    assert_eq!(queue.pop_front(), Some(2));
    assert_eq!(queue.min(), Some(&1));

    queue.push_back(0);
    assert_eq!(queue.min(), Some(&0));
    assert_eq!(queue.pop_front(), Some(1));
    assert_eq!(queue.min(), Some(&0));
}

#[test]
fn test_split_state_large_push_miri() {
    let mut queue: MinVec<i32> = vec![2, 1, 3, 4, 5].into();

    assert_eq!(queue.min(), Some(&1));
    assert_eq!(queue.pop_front(), Some(2));
    assert_eq!(queue.min(), Some(&1));

    queue.push_back(110);
    assert_eq!(queue.min(), Some(&1));
    assert_eq!(queue.pop_front(), Some(1));
    assert_eq!(queue.min(), Some(&3));
}

#[test]
fn test_split_state_tied_min_miri() {
    let mut queue: MinVec<i32> = vec![2, 1, 3, 4, 5].into();

    assert_eq!(queue.min(), Some(&1));
    assert_eq!(queue.pop_front(), Some(2));
    assert_eq!(queue.min(), Some(&1));

    // A second 1 in the tail ties with the head-side minimum.
    queue.push_back(1);
    assert_eq!(queue.min(), Some(&1));
    assert_eq!(queue.pop_front(), Some(1));
    assert_eq!(queue.min(), Some(&1));
}

#[test]
fn test_rebalance_boundary_miri() {
    let mut queue = MinQueue::<Vec<u32>>::new();

    // Fill-then-drain must reproduce the push order, twice in a row to
    // confirm the drained state is reusable.
    for _ in 0..2 {
        for i in 0..8 {
            queue.push_back(i ^ 5);
        }

        for i in 0..8 {
            assert_eq!(queue.pop_front(), Some(i ^ 5));
        }

        assert!(queue.is_empty());
        assert_eq!(queue.pop_front(), None);
    }
}

#[test]
fn test_random_drain_miri() {
    let mut state = 0x853c_49e6_748f_ea9bu64;
    let values: Vec<u32> = (0..200).map(|_| lcg(&mut state) % 1000).collect();

    let mut queue: MinVec<u32> = values.clone().into();
    let mut shadow = std::collections::VecDeque::from(values);

    while !shadow.is_empty() {
        assert_eq!(queue.len(), shadow.len());
        assert_eq!(queue.front(), shadow.front());
        assert_eq!(queue.back(), shadow.back());
        assert_eq!(queue.min(), shadow.iter().min());

        assert_eq!(queue.pop_front(), shadow.pop_front());
    }

    assert!(queue.is_empty());
    assert_eq!(queue.min(), None);
}

#[test]
fn test_random_interleaved_miri() {
    let mut state = 0xda3e_39cb_94b9_5bdbu64;

    let mut queue = MinQueue::<Vec<u32>>::new();
    let mut shadow = std::collections::VecDeque::new();

    for _ in 0..1000 {
        // Pop roughly one time in three, so the queue grows and the
        // head/tail split drifts across many rebalances.
        if lcg(&mut state) % 3 == 0 {
            assert_eq!(queue.pop_front(), shadow.pop_front());
        } else {
            let value = lcg(&mut state) % 100;
            queue.push_back(value);
            shadow.push_back(value);
        }

        assert_eq!(queue.len(), shadow.len());
        assert_eq!(queue.front(), shadow.front());
        assert_eq!(queue.back(), shadow.back());
        assert_eq!(queue.min(), shadow.iter().min());
        assert!(queue.iter().eq(shadow.iter()));
    }
}

#[test]
fn test_equality_split_independent_miri() {
    let a: MinVec<u32> = [1, 2, 3].into_iter().collect();

    // Same logical contents, but `b` has a live head/tail split.
    let mut b = MinQueue::<Vec<u32>>::new();
    b.push_back(9);
    b.push_back(1);
    assert_eq!(b.pop_front(), Some(9));
    b.push_back(2);
    b.push_back(3);

    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(a, a);

    // One differing element breaks equality.
    let c: MinVec<u32> = [1, 2, 4].into_iter().collect();
    assert_ne!(a, c);

    // So does a missing element.
    let d: MinVec<u32> = [1, 2].into_iter().collect();
    assert_ne!(a, d);
    assert_ne!(d, a);

    // Two empty queues are equal.
    assert_eq!(MinQueue::<Vec<u32>>::new(), MinQueue::<Vec<u32>>::new());
}

#[test]
fn test_clone_independent_miri() {
    let mut queue: MinVec<i32> = vec![2, 1, 3, 4, 5].into();
    assert_eq!(queue.pop_front(), Some(2)); // force a split state

    let mut copy = queue.clone();
    assert_eq!(copy, queue);
    assert_eq!(copy.min(), Some(&1));
    assert_eq!(copy.front(), Some(&1));
    assert_eq!(copy.back(), Some(&5));
    assert_eq!(copy.len(), 4);

    // Mutating the copy must not touch the original.
    assert_eq!(copy.pop_front(), Some(1));
    copy.push_back(-7);
    assert_eq!(copy.min(), Some(&-7));
    assert_eq!(queue.min(), Some(&1));
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.len(), 4);

    // And vice versa.
    queue.push_back(-9);
    assert_eq!(queue.min(), Some(&-9));
    assert_eq!(copy.min(), Some(&-7));
}

#[test]
fn test_move_miri() {
    let mut queue: MinVec<i32> = vec![2, 1, 3, 4, 5].into();
    assert_eq!(queue.pop_front(), Some(2));

    // Moving transfers the whole logical state.
    let mut moved = queue;
    assert_eq!(moved.len(), 4);
    assert_eq!(moved.min(), Some(&1));
    assert_eq!(moved.front(), Some(&1));
    assert_eq!(moved.back(), Some(&5));
    assert_eq!(moved.pop_front(), Some(1));
    assert_eq!(moved.min(), Some(&3));
}

#[test]
fn test_clear_miri() {
    let mut queue: MinVec<u32> = (0..20).collect();
    assert_eq!(queue.pop_front(), Some(0));
    queue.push_back(3);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.min(), None);
    assert_eq!(queue, MinQueue::<Vec<u32>>::new());

    // The cleared queue is fully reusable.
    queue.push_back(4);
    queue.push_back(2);
    assert_eq!(queue.min(), Some(&2));
    assert_eq!(queue.pop_front(), Some(4));
    assert_eq!(queue.pop_front(), Some(2));
    assert!(queue.is_empty());
}

#[test]
fn test_iter_across_split_miri() {
    let mut queue = MinQueue::<Vec<u32>>::new();
    queue.extend([4, 5, 6]);
    assert_eq!(queue.pop_front(), Some(4));
    queue.extend([7, 8]);

    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [5, 6, 7, 8]);
}

#[test]
fn test_bulk_construction_miri() {
    let from_vec: MinVec<u32> = vec![3, 1, 2].into();
    let collected: MinVec<u32> = [3, 1, 2].into_iter().collect();
    assert_eq!(from_vec, collected);
    assert_eq!(from_vec.min(), Some(&1));
    assert_eq!(from_vec.front(), Some(&3));
    assert_eq!(from_vec.back(), Some(&2));

    let empty: MinVec<u32> = Vec::new().into();
    assert!(empty.is_empty());
    assert_eq!(empty.min(), None);
}

#[test]
fn test_smallvec_miri() {
    let mut queue: MinSmallVec<[u32; 4]> = MinSmallVec::new();

    assert!(queue.is_empty());
    assert_eq!(queue.min(), None);

    // Push past the inline capacity to exercise the spilled state.
    for i in 0..10 {
        queue.push_back(100 - i);
    }

    assert_eq!(queue.len(), 10);
    assert_eq!(queue.min(), Some(&91));
    assert_eq!(queue.front(), Some(&100));
    assert_eq!(queue.back(), Some(&91));

    for i in 0..10 {
        assert_eq!(queue.pop_front(), Some(100 - i));
    }

    assert!(queue.is_empty());
}
