//! Exactly-once completion tracking for asynchronous tests.

use harness_types::{AsyncOutcome, HarnessError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Source of per-coordinator identities; tokens carry their issuer's id so
/// a token from one coordinator is never accepted by another.
static NEXT_COORDINATOR_ID: AtomicU64 = AtomicU64::new(0);

/// The state of one async test registration.
///
/// Tokens transition Pending → Completed or Pending → TimedOut. Both are
/// terminal; there is no transition out of a terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenState {
    /// The async test has started and not yet signalled completion.
    Pending,
    /// The test signalled completion with the recorded outcome.
    Completed(AsyncOutcome),
    /// The armed deadline elapsed before any completion signal.
    TimedOut,
}

impl TokenState {
    /// Returns whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TokenState::Pending)
    }
}

/// Sentinel for one asynchronous test's "finished" signal.
///
/// The token is cloneable because a `$DONE`-style callback captured by
/// both a success handler and an error handler is still one registration;
/// a second `complete` through any clone is the double-completion bug the
/// coordinator exists to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionToken {
    coordinator: u64,
    index: usize,
}

/// Tracks completion tokens for one test-file execution.
///
/// Double completion is recorded as an error, never ignored: historically
/// it hides real bugs, such as a success handler and an error handler both
/// firing.
///
/// # Examples
///
/// ```
/// use async_coordinator::Coordinator;
/// use harness_types::AsyncOutcome;
///
/// let mut coordinator = Coordinator::new();
/// let token = coordinator.begin();
/// coordinator.complete(&token, AsyncOutcome::Pass).unwrap();
///
/// // The second signal is a usage error, not a silent no-op
/// assert!(coordinator.complete(&token, AsyncOutcome::Pass).is_err());
/// ```
#[derive(Debug)]
pub struct Coordinator {
    id: u64,
    tokens: Vec<TokenState>,
    deadline: Option<Instant>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    /// Creates a coordinator with no registrations.
    pub fn new() -> Self {
        Self {
            id: NEXT_COORDINATOR_ID.fetch_add(1, Ordering::Relaxed),
            tokens: Vec::new(),
            deadline: None,
        }
    }

    /// Registers an async test start and returns its completion token.
    pub fn begin(&mut self) -> CompletionToken {
        let index = self.tokens.len();
        self.tokens.push(TokenState::Pending);
        CompletionToken {
            coordinator: self.id,
            index,
        }
    }

    /// Signals that the async test identified by `token` finished.
    ///
    /// First signal on a pending token transitions it to Completed and
    /// returns the outcome for the caller to finalize with. A signal on a
    /// terminal token returns [`HarnessError::DoubleCompletion`]; a token
    /// this coordinator never issued returns [`HarnessError::UnknownToken`].
    pub fn complete(
        &mut self,
        token: &CompletionToken,
        outcome: AsyncOutcome,
    ) -> Result<AsyncOutcome, HarnessError> {
        if token.coordinator != self.id {
            return Err(HarnessError::UnknownToken);
        }
        let state = self
            .tokens
            .get_mut(token.index)
            .ok_or(HarnessError::UnknownToken)?;
        if state.is_terminal() {
            return Err(HarnessError::DoubleCompletion);
        }
        *state = TokenState::Completed(outcome.clone());
        Ok(outcome)
    }

    /// Arms a timeout deadline for all pending registrations.
    pub fn timeout(&mut self, duration: Duration) {
        self.deadline = Some(Instant::now() + duration);
    }

    /// Transitions pending tokens to TimedOut if the armed deadline has
    /// elapsed; returns whether any token expired on this poll.
    ///
    /// Polling keeps the coordinator single-threaded; the terminal-state
    /// guard in [`Coordinator::complete`] resolves the race where a resumed
    /// callback and the timeout would otherwise both finalize.
    pub fn poll_expired(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if Instant::now() < deadline {
            return false;
        }
        let mut expired = false;
        for state in &mut self.tokens {
            if matches!(state, TokenState::Pending) {
                *state = TokenState::TimedOut;
                expired = true;
            }
        }
        expired
    }

    /// Returns the state of a token, if this coordinator issued it.
    pub fn state(&self, token: &CompletionToken) -> Option<&TokenState> {
        if token.coordinator != self.id {
            return None;
        }
        self.tokens.get(token.index)
    }

    /// Returns whether any registration is still pending.
    pub fn has_pending(&self) -> bool {
        self.tokens.iter().any(|s| matches!(s, TokenState::Pending))
    }

    /// Number of registrations made so far.
    pub fn registration_count(&self) -> usize {
        self.tokens.len()
    }
}
