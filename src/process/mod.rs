use std::fmt;

pub mod launcher;
pub mod signal;

#[derive(Debug)]
pub enum ProcessError {
    /// Process creation itself failed (the fork-failure class). The shell
    /// does not survive this.
    SpawnFailed(std::io::Error),
    WaitFailed(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SpawnFailed(e) => write!(f, "fork failed: {}", e),
            ProcessError::WaitFailed(e) => write!(f, "wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

impl ProcessError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::SpawnFailed(_))
    }
}
