use super::CommandError;

/// Every built-in verb and its one-line description, in summary order.
const BUILTIN_HELP: &[(&str, &str)] = &[
    (
        "help",
        "'help' is a builtin command for displaying useful information about shell commands.",
    ),
    (
        "pwd",
        "'pwd' is a builtin command for returning the current working directory.",
    ),
    (
        "exit",
        "'exit' is a builtin command for closing and exiting the shell.",
    ),
    (
        "cd",
        "'cd' is a builtin command for changing the current working directory.",
    ),
    (
        "history",
        "'history' is a builtin command for displaying past commands.",
    ),
];

pub fn description(verb: &str) -> Option<&'static str> {
    BUILTIN_HELP
        .iter()
        .find(|(name, _)| *name == verb)
        .map(|(_, desc)| *desc)
}

/// The line printed for a single `help <topic>` request.
pub fn topic_line(topic: &str) -> String {
    match description(topic) {
        Some(desc) => desc.to_string(),
        None => format!("'{}' is an external command or application.", topic),
    }
}

/// Print the full summary: one blank-line-separated entry per built-in,
/// then a trailing blank line. Also used as the interrupt reaction's output.
pub fn print_summary() {
    for (verb, desc) in BUILTIN_HELP {
        println!();
        println!("{}: {}", verb, desc);
    }
    println!();
}

pub fn execute(args: &[&str]) -> Result<(), CommandError> {
    match args {
        [] => {
            print_summary();
            Ok(())
        }
        [topic] => {
            println!("{}", topic_line(topic));
            Ok(())
        }
        _ => Err(CommandError::TooManyArguments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_topics() {
        for verb in ["help", "pwd", "exit", "cd", "history"] {
            let line = topic_line(verb);
            assert!(line.starts_with(&format!("'{}' is a builtin command", verb)));
        }
    }

    #[test]
    fn test_unknown_topic() {
        assert_eq!(
            topic_line("vim"),
            "'vim' is an external command or application."
        );
    }

    #[test]
    fn test_too_many_arguments() {
        let err = execute(&["cd", "pwd"]).unwrap_err();
        assert!(matches!(err, CommandError::TooManyArguments));
    }

    #[test]
    fn test_single_topic_ok() {
        assert!(execute(&["history"]).is_ok());
        assert!(execute(&[]).is_ok());
    }
}
