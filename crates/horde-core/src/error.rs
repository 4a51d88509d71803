use thiserror::Error;

/// Errors raised while evaluating behaviors.
///
/// Unmet conditions are never errors; they are reported as `Status::Failure`.
/// This type only covers contract violations that indicate a misconfigured tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument to `{callback}`: {reason}")]
    InvalidArgument {
        callback: &'static str,
        reason: &'static str,
    },
}

impl Error {
    pub fn invalid_argument(callback: &'static str, reason: &'static str) -> Self {
        Error::InvalidArgument { callback, reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
