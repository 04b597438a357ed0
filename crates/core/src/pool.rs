use derive_more::{Add, AddAssign};
use log::trace;
use serde::Serialize;

/// Counters describing how a [BufferPool] has been used
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Add, AddAssign, Serialize,
)]
pub struct PoolStats {
    /// Buffers handed out
    pub acquired: u64,
    /// Buffers handed out that came from the idle list
    pub reused: u64,
    /// Buffers handed out that had to be freshly allocated
    pub allocated: u64,
    /// Buffers given back
    pub released: u64,
    /// Buffers given back while the idle list was full, and so dropped
    pub dropped: u64,
}

/// A pool of reusable `Vec`s, so repeated sequence queries (neighbors, ranges,
/// lines) don't allocate every time.
///
/// Buffers have to be handed back explicitly with [Self::release]. Forgetting
/// to is harmless, the buffer just gets dropped like any other `Vec` and the
/// pool allocates a new one next time. The pool holds at most `max_buffers`
/// idle buffers; anything released past that is dropped.
#[derive(Clone, Debug)]
pub struct BufferPool<T> {
    idle: Vec<Vec<T>>,
    max_buffers: usize,
    buffer_capacity: usize,
    stats: PoolStats,
}

impl<T> BufferPool<T> {
    /// Create an empty pool. Nothing is allocated up front; `buffer_capacity`
    /// is the capacity that new buffers start out with.
    pub fn new(max_buffers: usize, buffer_capacity: usize) -> Self {
        Self {
            idle: Vec::new(),
            max_buffers,
            buffer_capacity,
            stats: PoolStats::default(),
        }
    }

    /// Get an empty buffer, reusing an idle one if there is one
    pub fn acquire(&mut self) -> Vec<T> {
        self.stats.acquired += 1;
        match self.idle.pop() {
            Some(buffer) => {
                self.stats.reused += 1;
                buffer
            }
            None => {
                self.stats.allocated += 1;
                Vec::with_capacity(self.buffer_capacity)
            }
        }
    }

    /// Hand a buffer back to the pool. Its contents are dropped, but its
    /// allocation is kept for the next [Self::acquire].
    pub fn release(&mut self, mut buffer: Vec<T>) {
        self.stats.released += 1;
        if self.idle.len() < self.max_buffers {
            buffer.clear();
            self.idle.push(buffer);
        } else {
            trace!(
                "Buffer pool full ({} idle), dropping buffer with capacity {}",
                self.max_buffers,
                buffer.capacity()
            );
            self.stats.dropped += 1;
        }
    }

    /// Number of idle buffers ready to be reused
    pub fn available(&self) -> usize {
        self.idle.len()
    }

    pub fn max_buffers(&self) -> usize {
        self.max_buffers
    }

    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Drop all idle buffers and reset stats
    pub fn clear(&mut self) {
        self.idle.clear();
        self.stats = PoolStats::default();
    }
}
