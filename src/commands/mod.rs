use std::sync::{Arc, Mutex};

mod cd;
pub mod help;

pub use cd::CdCommand;

use crate::history::HistoryStore;

#[derive(Debug)]
pub enum CommandError {
    TooManyArguments,
    ChangeDir(std::io::Error),
    HomeDirNotFound,
    HistoryLock,
    Io(std::io::Error),
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Io(err)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::TooManyArguments => write!(f, "Error: Too many arguments."),
            CommandError::ChangeDir(e) => write!(f, "ERROR: {}", e),
            CommandError::HomeDirNotFound => write!(f, "ERROR: home directory not found"),
            CommandError::HistoryLock => write!(f, "ERROR: history unavailable"),
            CommandError::Io(e) => write!(f, "ERROR: {}", e),
        }
    }
}

impl std::error::Error for CommandError {}

const BUILTIN_VERBS: &[&str] = &["exit", "pwd", "cd", "help", "history"];

/// Executes built-in verbs in the shell's own process. History references
/// (`!` tokens) are not built-ins; the shell routes them to the expander
/// before consulting the dispatcher.
pub struct Dispatcher {
    cd: CdCommand,
    history: Arc<Mutex<HistoryStore>>,
}

impl Dispatcher {
    pub fn new(history: Arc<Mutex<HistoryStore>>) -> Self {
        Dispatcher {
            cd: CdCommand::new(),
            history,
        }
    }

    pub fn is_builtin(verb: &str) -> bool {
        BUILTIN_VERBS.contains(&verb)
    }

    /// Run a built-in. `tokens[0]` is one of the recognized verbs.
    pub fn dispatch(&mut self, tokens: &[&str]) -> Result<(), CommandError> {
        let args = &tokens[1..];
        match tokens[0] {
            "exit" => {
                if !args.is_empty() {
                    return Err(CommandError::TooManyArguments);
                }
                std::process::exit(0);
            }
            "pwd" => {
                if !args.is_empty() {
                    return Err(CommandError::TooManyArguments);
                }
                println!("{}", std::env::current_dir()?.display());
                Ok(())
            }
            "cd" => self.cd.execute(args),
            "help" => help::execute(args),
            "history" => {
                if !args.is_empty() {
                    return Err(CommandError::TooManyArguments);
                }
                self.history
                    .lock()
                    .map_err(|_| CommandError::HistoryLock)?
                    .print();
                Ok(())
            }
            verb => unreachable!("dispatch called for non-builtin {:?}", verb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(Mutex::new(HistoryStore::new())))
    }

    #[test]
    fn test_builtin_detection() {
        for verb in ["exit", "pwd", "cd", "help", "history"] {
            assert!(Dispatcher::is_builtin(verb));
        }
        assert!(!Dispatcher::is_builtin("ls"));
        assert!(!Dispatcher::is_builtin("!!"));
        assert!(!Dispatcher::is_builtin("!-"));
        assert!(!Dispatcher::is_builtin(""));
    }

    #[test]
    fn test_exit_with_arguments_does_not_terminate() {
        let mut d = dispatcher();
        let err = d.dispatch(&["exit", "now"]).unwrap_err();
        assert!(matches!(err, CommandError::TooManyArguments));
    }

    #[test]
    fn test_pwd_rejects_arguments() {
        let mut d = dispatcher();
        assert!(matches!(
            d.dispatch(&["pwd", "x"]),
            Err(CommandError::TooManyArguments)
        ));
        assert!(d.dispatch(&["pwd"]).is_ok());
    }

    #[test]
    fn test_history_rejects_arguments() {
        let mut d = dispatcher();
        assert!(matches!(
            d.dispatch(&["history", "5"]),
            Err(CommandError::TooManyArguments)
        ));
        assert!(d.dispatch(&["history"]).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::TooManyArguments.to_string(),
            "Error: Too many arguments."
        );
        let e = CommandError::ChangeDir(std::io::Error::from_raw_os_error(libc::ENOENT));
        assert!(e.to_string().starts_with("ERROR: "));
    }
}
