//! Error types surfaced by the shipping runtime.
//!
//! Settlement faults never reach these types; they are absorbed per container
//! by [`crate::BestEffort`]. What remains are start-up failures and hook
//! failures the registry has to classify.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load {what} from {}", path.display())]
    Content {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("failed to create log directory {}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("global subscriber already installed")]
    Subscriber(#[source] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Hook(#[from] HookError),
}

/// Failure reported by a day-transition hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("hook {hook} failed: {reason}")]
    Failed { hook: &'static str, reason: String },
}

impl HookError {
    pub fn failed(hook: &'static str, reason: impl Into<String>) -> Self {
        Self::Failed {
            hook,
            reason: reason.into(),
        }
    }
}
