use serde::Serialize;
use std::fmt::Display;

/// Render state of a page: one fetch, one transition, no retries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum PageState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> PageState<T> {
    /// Settle on the outcome of the page's fetch. Only `Loading` moves;
    /// a settled page keeps its state.
    pub fn settle<E: Display>(self, result: Result<T, E>) -> Self {
        match self {
            Self::Loading => match result {
                Ok(data) => Self::Loaded(data),
                Err(err) => Self::Error(err.to_string()),
            },
            settled => settled,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PageState<U> {
        match self {
            Self::Loading => PageState::Loading,
            Self::Error(message) => PageState::Error(message),
            Self::Loaded(data) => PageState::Loaded(f(data)),
        }
    }
}
