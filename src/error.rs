use crate::commands::CommandError;
use crate::history::expander::ExpandError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Command(CommandError),
    Expand(ExpandError),
    Process(ProcessError),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<ExpandError> for ShellError {
    fn from(err: ExpandError) -> Self {
        ShellError::Expand(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::Expand(e) => write!(f, "{}", e),
            ShellError::Process(e) => write!(f, "{}", e),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

impl ShellError {
    /// True for conditions the command loop must not survive: a failed
    /// process creation or a broken input stream.
    pub fn is_fatal(&self) -> bool {
        match self {
            ShellError::Process(e) => e.is_fatal(),
            ShellError::Readline(_) | ShellError::CtrlC(_) => true,
            ShellError::Io(_) | ShellError::Command(_) | ShellError::Expand(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_registration_error_converts() {
        // The registration call site relies on this conversion.
        let err: ShellError = ctrlc::Error::MultipleHandlers.into();
        assert!(matches!(err, ShellError::CtrlC(_)));
        assert!(err.is_fatal());
    }
}
