use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rustyline::DefaultEditor;

use crate::commands::Dispatcher;
use crate::error::ShellError;
use crate::history::{expander, HistoryStore};
use crate::process::{launcher, signal};
use crate::tokenizer;

pub struct Shell {
    editor: DefaultEditor,
    history: Arc<Mutex<HistoryStore>>,
    interrupted: Arc<AtomicBool>,
    dispatcher: Dispatcher,
}

impl Shell {
    pub fn new() -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        let history = Arc::new(Mutex::new(HistoryStore::new()));
        let interrupted = Arc::new(AtomicBool::new(false));

        signal::install_interrupt_handler(Arc::clone(&history), Arc::clone(&interrupted))?;

        let dispatcher = Dispatcher::new(Arc::clone(&history));

        Ok(Shell {
            editor,
            history,
            interrupted,
            dispatcher,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            launcher::reap_background();

            let prompt = format!("{}$ ", env::current_dir()?.display());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    // A SIGINT that landed outside the read already printed
                    // its help summary; the line it cut into is discarded
                    // unrecorded so history is not touched twice.
                    if self.interrupted.swap(false, Ordering::SeqCst) {
                        continue;
                    }

                    if let Err(e) = self.handle_line(&line) {
                        if e.is_fatal() {
                            return Err(e);
                        }
                        println!("{}", e);
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    signal::interrupt_reaction(&self.history);
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<(), ShellError> {
        let line = tokenizer::clamp(line);
        if line.is_empty() {
            return Ok(());
        }

        if let Err(e) = self.editor.add_history_entry(line) {
            eprintln!("Warning: Couldn't add to history: {}", e);
        }

        // The raw line is recorded as typed, before tokenizing; a
        // whitespace-only line still counts even though it runs nothing.
        self.record(line);

        let parsed = tokenizer::tokenize(line);
        if parsed.tokens.is_empty() {
            return Ok(());
        }

        self.execute(&parsed.tokens, parsed.background)
    }

    fn execute(&mut self, tokens: &[&str], background: bool) -> Result<(), ShellError> {
        let verb = tokens[0];
        if Dispatcher::is_builtin(verb) {
            self.dispatcher.dispatch(tokens)?;
            Ok(())
        } else if verb.starts_with('!') {
            self.expand_reference(tokens)
        } else {
            launcher::launch(tokens, background)?;
            Ok(())
        }
    }

    /// Resolve a `!` reference against history and, if it names a command,
    /// run the recalled line. Recalled lines always run in the foreground.
    fn expand_reference(&mut self, tokens: &[&str]) -> Result<(), ShellError> {
        let expanded = {
            let mut history = self
                .history
                .lock()
                .map_err(|_| crate::commands::CommandError::HistoryLock)?;
            expander::expand(tokens, &mut history)?
        };

        match expanded {
            Some(line) => {
                let parsed = tokenizer::tokenize(&line);
                if parsed.tokens.is_empty() {
                    return Ok(());
                }
                self.execute(&parsed.tokens, false)
            }
            None => Ok(()),
        }
    }

    fn record(&self, line: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.record(line);
        }
    }
}
