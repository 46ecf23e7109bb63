//! Ordered callback queue for resumed asynchronous work.
//!
//! Callbacks run one at a time in FIFO order; expectations recorded from a
//! resumed callback land in the report in the order the callbacks actually
//! ran, which may differ from source order.

use harness_types::ScriptError;
use std::collections::VecDeque;

/// A deferred callback scheduled by an asynchronous test.
///
/// The callback receives the caller's context (typically the test context)
/// and may complete abruptly with a thrown script error.
pub struct Callback<Ctx> {
    callback: Box<dyn FnOnce(&mut Ctx) -> Result<(), ScriptError>>,
}

impl<Ctx> Callback<Ctx> {
    /// Creates a new callback from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut Ctx) -> Result<(), ScriptError> + 'static,
    {
        Self {
            callback: Box::new(f),
        }
    }

    /// Runs the callback against the given context.
    pub fn run(self, ctx: &mut Ctx) -> Result<(), ScriptError> {
        (self.callback)(ctx)
    }
}

impl<Ctx> std::fmt::Debug for Callback<Ctx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback {{ ... }}")
    }
}

/// FIFO queue of deferred callbacks for one test-file execution.
///
/// # Examples
///
/// ```
/// use async_coordinator::{Callback, CallbackQueue};
///
/// let mut order: Vec<u32> = Vec::new();
/// let mut queue: CallbackQueue<Vec<u32>> = CallbackQueue::new();
/// queue.enqueue(Callback::new(|order: &mut Vec<u32>| {
///     order.push(1);
///     Ok(())
/// }));
/// queue.enqueue(Callback::new(|order: &mut Vec<u32>| {
///     order.push(2);
///     Ok(())
/// }));
/// queue.drain(&mut order).unwrap();
/// assert_eq!(order, vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct CallbackQueue<Ctx> {
    queue: VecDeque<Callback<Ctx>>,
}

impl<Ctx> Default for CallbackQueue<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> CallbackQueue<Ctx> {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Adds a callback to the end of the queue.
    pub fn enqueue(&mut self, callback: Callback<Ctx>) {
        self.queue.push_back(callback);
    }

    /// Removes and returns the next callback.
    pub fn dequeue(&mut self) -> Option<Callback<Ctx>> {
        self.queue.pop_front()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued callbacks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Runs all queued callbacks in order.
    ///
    /// An abrupt callback stops the drain and yields its thrown error so
    /// the caller can finalize as a failure rather than leave the test
    /// hung; the unreached callbacks stay queued.
    pub fn drain(&mut self, ctx: &mut Ctx) -> Result<(), ScriptError> {
        while let Some(callback) = self.dequeue() {
            callback.run(ctx)?;
        }
        Ok(())
    }
}
