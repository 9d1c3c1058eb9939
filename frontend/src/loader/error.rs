use std::fmt;

use thiserror::Error;

/// Why a single script element never reached its `load` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The element fired `error`: fetch failed or the response was rejected.
    Network,
    /// There was no window or document to attach the element to.
    NoDocument,
    /// Creating or attaching the element threw.
    Dom(String),
    /// The element's listeners went away before either event fired.
    Abandoned,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Network => write!(f, "network error"),
            FailureReason::NoDocument => write!(f, "no document available"),
            FailureReason::Dom(message) => write!(f, "dom error: {}", message),
            FailureReason::Abandoned => write!(f, "load abandoned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load script {url} ({reason})")]
pub struct ScriptLoadError {
    pub url: String,
    pub reason: FailureReason,
}

impl ScriptLoadError {
    pub fn new(url: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            url: url.into(),
            reason,
        }
    }
}

/// Outcome of a failed resource group load, shared by every caller that awaited it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Script(#[from] ScriptLoadError),
    #[error("{group}: global `{symbol}` is missing after its scripts loaded")]
    MissingGlobal {
        group: &'static str,
        symbol: &'static str,
    },
    #[error("{group}: plugin registration failed: {message}")]
    Registration {
        group: &'static str,
        message: String,
    },
    /// The page registry was torn down before the group finished.
    #[error("{group}: loader shut down before the group finished")]
    RegistryGone { group: &'static str },
}

impl LoadError {
    pub fn failed_url(&self) -> Option<&str> {
        match self {
            LoadError::Script(err) => Some(&err.url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_errors_name_the_url() {
        let err = LoadError::from(ScriptLoadError::new(
            "https://cdn.example/a.js",
            FailureReason::Network,
        ));
        assert_eq!(err.failed_url(), Some("https://cdn.example/a.js"));
        assert_eq!(
            err.to_string(),
            "failed to load script https://cdn.example/a.js (network error)"
        );
    }

    #[test]
    fn group_errors_have_no_url() {
        let err = LoadError::MissingGlobal {
            group: "confetti",
            symbol: "confetti",
        };
        assert_eq!(err.failed_url(), None);
        assert!(err.to_string().contains("`confetti`"));
    }

    #[test]
    fn shutdown_is_not_reported_as_registration() {
        let err = LoadError::RegistryGone {
            group: "animation-engine",
        };
        assert_eq!(err.failed_url(), None);
        assert_eq!(
            err.to_string(),
            "animation-engine: loader shut down before the group finished"
        );
    }
}
