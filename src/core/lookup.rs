use tracing::{debug, warn};

use crate::core::InsightsError;

/// Outcome of one provider call.
///
/// `NotFound` is an authoritative "no such thing" from the provider (an error payload
/// or HTTP 404). `Failed` covers transport errors, unexpected statuses and bodies that
/// do not parse. Report assembly degrades both the same way.
#[derive(Debug)]
#[must_use]
pub enum Lookup<T> {
    /// The provider returned usable data.
    Found(T),
    /// The provider answered, but has nothing for this key.
    NotFound,
    /// The call or its decoding failed.
    Failed(InsightsError),
}

impl<T> Lookup<T> {
    /// Returns `true` if this is [`Lookup::Found`].
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Discards the reason for a miss.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound | Self::Failed(_) => None,
        }
    }

    /// Maps the found value, keeping misses as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(v) => Lookup::Found(f(v)),
            Self::NotFound => Lookup::NotFound,
            Self::Failed(e) => Lookup::Failed(e),
        }
    }

    /// Logs a miss for `section`/`key` and discards its reason.
    pub(crate) fn logged(self, section: &str, key: &str) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound => {
                debug!(section, key, "nothing found");
                None
            }
            Self::Failed(e) => {
                warn!(section, key, error = %e, "lookup failed, section left empty");
                None
            }
        }
    }
}

impl<T> From<Result<Option<T>, InsightsError>> for Lookup<T> {
    fn from(res: Result<Option<T>, InsightsError>) -> Self {
        match res {
            Ok(Some(v)) => Self::Found(v),
            Ok(None) | Err(InsightsError::NotFound { .. }) => Self::NotFound,
            Err(e) => Self::Failed(e),
        }
    }
}
