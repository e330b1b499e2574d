//! Lock-free single-producer/single-consumer byte queue
//!
//! A fixed-capacity ring of `N` bytes (`N` a power of two) with a `head`
//! index owned by the producer and a `tail` index owned by the consumer.
//! One slot is always left unused so `head == tail` means empty and
//! `head + 1 == tail` means full without a shared counter, giving `N - 1`
//! usable slots.
//!
//! Each side only ever stores its own index, so the queue is safe to share
//! between an interrupt handler and the foreground as long as there is at
//! most one producer and one consumer.

#![allow(unsafe_code)]

use core::cell::UnsafeCell;

use portable_atomic::{AtomicUsize, Ordering};

/// Fixed-capacity SPSC byte queue
pub struct RingQueue<const N: usize> {
    storage: UnsafeCell<[u8; N]>,
    /// Next slot to write (producer-owned)
    head: AtomicUsize,
    /// Next slot to read (consumer-owned)
    tail: AtomicUsize,
}

// SAFETY: slots in [tail, head) are only read by the consumer and slots
// outside it are only written by the producer; ownership of a slot moves
// with the release store of the index that covers it.
unsafe impl<const N: usize> Sync for RingQueue<N> {}

impl<const N: usize> Default for RingQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingQueue<N> {
    const MASK: usize = {
        assert!(N >= 2 && N.is_power_of_two(), "queue size must be a power of two");
        N - 1
    };

    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            storage: UnsafeCell::new([0; N]),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        }
    }

    /// Number of bytes the queue can hold at once
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    fn slot(&self, index: usize) -> *mut u8 {
        // SAFETY: index is always masked into 0..N
        unsafe { self.storage.get().cast::<u8>().add(index & Self::MASK) }
    }

    /// Append a byte (producer side)
    ///
    /// Returns `false` and drops the byte if the queue is full.
    pub fn push(&self, byte: u8) -> bool {
        let head = self.head.load(Ordering::Relaxed);
        let next = (head + 1) & Self::MASK;
        if next == self.tail.load(Ordering::Acquire) {
            return false;
        }

        // SAFETY: `head` is outside the readable range until the store below
        unsafe { self.slot(head).write(byte) };
        self.head.store(next, Ordering::Release);
        true
    }

    /// Append a byte, calling `wait` until space frees up (producer side)
    ///
    /// Only for contexts the consumer can preempt; spinning here from a
    /// context the consumer cannot interrupt never returns.
    pub fn push_blocking(&self, byte: u8, mut wait: impl FnMut()) {
        while !self.push(byte) {
            wait();
        }
    }

    /// Remove the oldest byte (consumer side)
    pub fn pop(&self) -> Option<u8> {
        let tail = self.tail.load(Ordering::Relaxed);
        if tail == self.head.load(Ordering::Acquire) {
            return None;
        }

        // SAFETY: `tail` is inside the readable range published by the producer
        let byte = unsafe { self.slot(tail).read() };
        self.tail.store((tail + 1) & Self::MASK, Ordering::Release);
        Some(byte)
    }

    /// Return the oldest byte without removing it (consumer side)
    pub fn peek(&self) -> Option<u8> {
        let tail = self.tail.load(Ordering::Relaxed);
        if tail == self.head.load(Ordering::Acquire) {
            return None;
        }

        // SAFETY: as in `pop`
        Some(unsafe { self.slot(tail).read() })
    }

    /// Number of buffered bytes
    ///
    /// Exact when called from either side; a concurrent push or pop on the
    /// other side can only make the real value drift in its own direction.
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        head.wrapping_sub(tail) & Self::MASK
    }

    /// Check if the queue holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Free slots, as seen by the producer
    ///
    /// Reads the consumer index once; a consumer running concurrently can
    /// only free more space, so the result never over-promises.
    pub fn free(&self) -> usize {
        let tail = self.tail.load(Ordering::Acquire);
        let head = self.head.load(Ordering::Relaxed);
        tail.wrapping_sub(head).wrapping_sub(1) & Self::MASK
    }

    /// Reset both indices
    ///
    /// The caller must ensure neither side is active, typically by masking
    /// the interrupt that owns one of them.
    pub fn clear(&self) {
        self.tail.store(0, Ordering::Relaxed);
        self.head.store(0, Ordering::Release);
    }

    /// Current consumer index
    pub fn read_index(&self) -> usize {
        self.tail.load(Ordering::Relaxed)
    }

    /// Length of the run of buffered bytes starting at the consumer index
    /// that does not wrap around the end of storage
    pub fn contiguous_len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Relaxed);
        if head >= tail {
            head - tail
        } else {
            N - tail
        }
    }

    /// Borrow the first `len` buffered bytes without consuming them
    ///
    /// `len` is clamped to [`RingQueue::contiguous_len`]. The bytes stay
    /// valid and unmodified until the consumer index moves past them.
    pub fn contiguous(&self, len: usize) -> &[u8] {
        let len = len.min(self.contiguous_len());
        let tail = self.tail.load(Ordering::Relaxed);
        // SAFETY: [tail, tail + len) lies inside storage (no wrap) and inside
        // the readable range, which the producer never writes
        unsafe { core::slice::from_raw_parts(self.slot(tail), len) }
    }

    /// Move the consumer index to `index` (consumer side)
    ///
    /// Used to release a block previously borrowed with
    /// [`RingQueue::contiguous`].
    pub fn advance_to(&self, index: usize) {
        self.tail.store(index & Self::MASK, Ordering::Release);
    }

    /// Index `len` bytes past the consumer index
    pub fn index_after(&self, len: usize) -> usize {
        (self.read_index() + len) & Self::MASK
    }
}
