use super::{HistoryStore, DEPTH};

#[derive(Debug, PartialEq, Eq)]
pub enum ExpandError {
    NoPreviousCommands,
    InvalidInput,
    OutOfRange,
    TooManyArguments,
}

impl std::fmt::Display for ExpandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpandError::NoPreviousCommands => write!(f, "ERROR: no previous commands."),
            ExpandError::InvalidInput => write!(f, "ERROR: invalid input."),
            ExpandError::OutOfRange => write!(f, "ERROR: outside of history range."),
            ExpandError::TooManyArguments => write!(f, "Error: Too many arguments."),
        }
    }
}

impl std::error::Error for ExpandError {}

/// Expand a history reference. The first token is known to start with `!`
/// and the literal line has already been recorded; every form except `!-`
/// unrecords that literal entry before doing anything else, so even a failed
/// reference leaves no trace of itself in history.
///
/// `Ok(Some(line))` is a command line to re-execute (always foreground);
/// `Ok(None)` means the reference was handled with nothing left to run.
pub fn expand(
    tokens: &[&str],
    history: &mut HistoryStore,
) -> Result<Option<String>, ExpandError> {
    match tokens[0] {
        "!!" => expand_previous(history),
        "!-" => {
            if tokens.len() > 1 {
                return Err(ExpandError::TooManyArguments);
            }
            history.clear();
            Ok(None)
        }
        reference => expand_numbered(reference, history),
    }
}

/// `!!`: echo and re-run the command typed before it.
fn expand_previous(history: &mut HistoryStore) -> Result<Option<String>, ExpandError> {
    history.unrecord();

    let line = history
        .most_recent()
        .ok_or(ExpandError::NoPreviousCommands)?
        .to_string();
    println!("{}", line);
    history.record(&line);
    Ok(Some(line))
}

/// `!n`: re-run the command with displayed ordinal `n`, without echoing it.
fn expand_numbered(
    reference: &str,
    history: &mut HistoryStore,
) -> Result<Option<String>, ExpandError> {
    history.unrecord();

    let digits = &reference[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExpandError::InvalidInput);
    }

    // A bare `!` reads as ordinal 0 (inherited atoi behavior); a digit
    // string too long to parse cannot name a live entry either way.
    let n: usize = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| ExpandError::OutOfRange)?
    };

    if n >= history.counter() {
        return Err(ExpandError::OutOfRange);
    }
    let age = history.counter() - n - 1;
    if age >= DEPTH {
        return Err(ExpandError::OutOfRange);
    }

    let line = history
        .lookup_by_age(age)
        .ok_or(ExpandError::OutOfRange)?
        .to_string();
    history.record(&line);
    Ok(Some(line))
}
