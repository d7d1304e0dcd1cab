//! The `min_queue` crate defines the [`MinQueue`] container wrapper: a
//! FIFO queue that also answers "what is the smallest element currently
//! enqueued?" in constant time.
//!
//! A [`MinQueue`] only allows pushing to the back and popping from the
//! front, and trades that restriction for strong bounds: `push_back`,
//! `front`, `back`, `min`, and `len` are all worst-case constant time,
//! while `pop_front` is amortised constant time (an individual call may
//! take linear time when the internal buffers rebalance, but each element
//! is moved at most once over its lifetime).  The natural fit is
//! stream-shaped workloads, e.g., a sliding-window minimum where values
//! enter at the back and expire at the front.
//!
//! Like the standard [`VecDeque`], a [`MinQueue`] stores its elements in
//! growable vector storage, but it is defined as a wrapper over an
//! arbitrary container type; this crate comes with support for [`Vec`]
//! for the regular case, and [`SmallVec`] for queues that are usually
//! small.
//!
//! # Examples
//!
//! ```rust
//! use min_queue::MinVec;
//!
//! let mut queue: MinVec<u32> = MinVec::new();
//! queue.push_back(3);
//! queue.push_back(1);
//! queue.push_back(2);
//!
//! assert_eq!(queue.min(), Some(&1));
//! assert_eq!(queue.pop_front(), Some(3));
//! assert_eq!(queue.min(), Some(&1));
//! assert_eq!(queue.pop_front(), Some(1));
//! assert_eq!(queue.min(), Some(&2));
//! ```
//!
//! ```rust
//! use min_queue::MinSmallVec;
//!
//! // Sliding-window minimum with a window of 3, inline storage.
//! let mut window: MinSmallVec<[i64; 4]> = MinSmallVec::new();
//! let mut minima = Vec::new();
//! for value in [5, 2, 8, 7, 1, 9] {
//!     window.push_back(value);
//!     if window.len() > 3 {
//!         let _ = window.pop_front();
//!     }
//!     minima.push(*window.min().unwrap());
//! }
//! assert_eq!(minima, [5, 2, 2, 2, 1, 1]);
//! ```
//!
//! [`VecDeque`]: std::collections::VecDeque
//! [`SmallVec`]: smallvec::SmallVec

mod min_queue;
mod store;

pub use min_queue::MinQueue;
pub use min_queue::MinSmallVec;
pub use min_queue::MinVec;

pub mod traits {
    //! The `traits` module contains the trait a container type must
    //! implement to serve as [`MinQueue`](crate::MinQueue) backing
    //! storage.
    //!
    //! Basic usage ([`Vec`] or [`SmallVec`](smallvec::SmallVec) storage)
    //! does not need to implement this trait.

    pub use crate::store::QueueStore;
}
