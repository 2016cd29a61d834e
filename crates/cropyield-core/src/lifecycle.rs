//! Tri-state request lifecycle
//!
//! Every data-fetching screen owns one [`RequestLifecycle`]. The state is a
//! tagged union so "loading and errored at once" cannot be represented, and
//! each request is stamped with a [`RequestToken`]. Only a completion carrying
//! the latest token is applied; anything older is dropped as stale.

/// Identity of one outbound request within a lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Observable state of one asynchronous load or submission
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    /// Nothing requested yet, or cleared by the user
    Idle,
    /// A request is in flight
    Pending,
    /// The latest request succeeded
    Succeeded(T),
    /// The latest request failed; carries a short user-facing message
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short name used in logs and headless output
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Succeeded(_) => "succeeded",
            RequestState::Failed(_) => "failed",
        }
    }
}

/// What happened to a completion handed to [`RequestLifecycle::settle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The completion belonged to the latest request and was stored
    Applied,
    /// A newer request (or a reset) superseded it; state is unchanged
    Stale,
}

/// Request state plus the token of the latest request
#[derive(Debug, Clone)]
pub struct RequestLifecycle<T> {
    state: RequestState<T>,
    latest: RequestToken,
}

impl<T> Default for RequestLifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestLifecycle<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            latest: RequestToken::default(),
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Start a new request: clears any previous value and enters `Pending`.
    ///
    /// Returns the token the completion must carry to be applied.
    pub fn begin(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        self.state = RequestState::Pending;
        self.latest
    }

    /// Apply a completion if it belongs to the latest request
    pub fn settle(&mut self, token: RequestToken, outcome: Result<T, String>) -> Settlement {
        if token != self.latest || !self.state.is_pending() {
            return Settlement::Stale;
        }
        self.state = match outcome {
            Ok(value) => RequestState::Succeeded(value),
            Err(message) => RequestState::Failed(message),
        };
        Settlement::Applied
    }

    /// Return to `Idle`, invalidating any request still in flight
    pub fn reset(&mut self) {
        self.latest = self.latest.next();
        self.state = RequestState::Idle;
    }
}
