#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// UI-visible lifecycle of one controller's requests.
///
/// `generation` counts `execute` calls; only the call holding the current
/// generation may write `status` past `Loading`, `data` or `error_message`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub status: RequestStatus,
    pub data: Option<T>,
    pub error_message: Option<String>,
    pub generation: u64,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            data: None,
            error_message: None,
            generation: 0,
        }
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }
}

/// How one `execute` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Result was written to the state.
    Committed(T),
    /// Failure was written to the state and sent to the notification sink.
    Failed(String),
    /// A newer call was issued first; nothing was written.
    Superseded,
}

impl<T> Outcome<T> {
    pub fn committed(self) -> Option<T> {
        match self {
            Outcome::Committed(value) => Some(value),
            Outcome::Failed(_) | Outcome::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Outcome::Superseded)
    }
}
