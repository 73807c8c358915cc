//! Two-step escalation: try the primary, and only on failure the fallback.

use std::future::Future;

/// Outcome of [`escalate`].
#[derive(Debug, PartialEq)]
pub enum Escalation<T, E> {
    Primary(T),
    Fallback { primary: E, value: T },
    Exhausted { primary: E, fallback: E },
}

impl<T, E> Escalation<T, E> {
    /// Collapse into a result, combining both errors when exhausted.
    pub fn into_result<R>(self, combine: impl FnOnce(E, E) -> R) -> Result<T, R> {
        match self {
            Self::Primary(value) | Self::Fallback { value, .. } => Ok(value),
            Self::Exhausted { primary, fallback } => Err(combine(primary, fallback)),
        }
    }
}

/// Await `primary`; if it fails, build the fallback from its error and await
/// that. The fallback future is never created when the primary succeeds.
pub async fn escalate<T, E, P, F, Fut>(primary: P, fallback: F) -> Escalation<T, E>
where
    P: Future<Output = Result<T, E>>,
    F: FnOnce(&E) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match primary.await {
        Ok(value) => Escalation::Primary(value),
        Err(primary) => match fallback(&primary).await {
            Ok(value) => Escalation::Fallback { primary, value },
            Err(fallback) => Escalation::Exhausted { primary, fallback },
        },
    }
}
