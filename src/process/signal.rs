use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::commands::help;
use crate::history::HistoryStore;

/// What an interrupt does, regardless of how it arrived: move to a fresh
/// line, show the help summary, and leave a synthetic `help` entry in
/// history.
pub fn interrupt_reaction(history: &Mutex<HistoryStore>) {
    println!();
    help::print_summary();
    if let Ok(mut history) = history.lock() {
        history.record("help");
    }
}

// Full handler for a SIGINT delivered outside the raw-mode read: the
// reaction, plus the flag telling the main loop to discard the next
// completed line instead of recording it.
fn handle_interrupt(history: &Mutex<HistoryStore>, interrupted: &AtomicBool) {
    interrupt_reaction(history);
    interrupted.store(true, Ordering::SeqCst);
}

/// Register the SIGINT handler for signals delivered while the shell is not
/// inside the raw-mode read, e.g. while blocked waiting on a foreground
/// child. The handler runs on its own thread, so it may take the history
/// lock and print.
pub fn install_interrupt_handler(
    history: Arc<Mutex<HistoryStore>>,
    interrupted: Arc<AtomicBool>,
) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || handle_interrupt(&history, &interrupted))
}
