use std::sync::Mutex;

use crate::errors::CoreError;

/// Async state of one screen concern (main data, picker options, add action).
///
/// `Idle → Loading → {Ready, Failed}`. There is no retry edge: a new
/// activation goes back through `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// User-visible message
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, CoreError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Interior-mutable holder so controllers can be driven through `&self`
/// while a fetch is in flight. The lock is never held across an await.
#[derive(Debug)]
pub(crate) struct StateCell<T> {
    inner: Mutex<LoadState<T>>,
}

impl<T: Clone> StateCell<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(LoadState::Idle),
        }
    }

    pub(crate) fn get(&self) -> LoadState<T> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub(crate) fn set(&self, state: LoadState<T>) {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    /// Back to `Idle`, unless an operation is still in flight; that one
    /// settles the state itself when it lands.
    pub(crate) fn reset_if_settled(&self) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if !guard.is_loading() {
            *guard = LoadState::Idle;
        }
    }

    /// Move to `Loading` unless already there. Returns `false` when an
    /// operation for this concern is still in flight.
    pub(crate) fn try_start(&self) -> bool {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if guard.is_loading() {
            return false;
        }
        *guard = LoadState::Loading;
        true
    }
}
