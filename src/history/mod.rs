pub mod expander;

/// Number of history entries reachable by lookup and listing.
pub const DEPTH: usize = 10;

// One extra physical slot beyond DEPTH: when a record rotates the oldest
// retained entry out, it survives there until the next record, so an
// unrecord that immediately follows can restore it.
const SLOTS: usize = DEPTH + 1;

/// Bounded ring of the most recent command lines plus a logical counter.
///
/// Recency slot 0 is always the newest entry; the displayed ordinal of
/// recency slot `i` is `counter - (i + 1)`. `clear` only resets the counter,
/// leaving old strings physically in place but unreachable through the
/// ordinal arithmetic.
pub struct HistoryStore {
    entries: [String; SLOTS],
    head: usize,
    counter: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        HistoryStore {
            entries: std::array::from_fn(|_| String::new()),
            head: 0,
            counter: 0,
        }
    }

    /// Ordinal of the next command to be recorded.
    pub fn counter(&self) -> usize {
        self.counter
    }

    fn slot(&self, age: usize) -> usize {
        (self.head + age) % SLOTS
    }

    /// Record `line` as the newest entry. Empty lines are ignored; anything
    /// else, including whitespace-only lines and lines ending in `&`, is
    /// recorded exactly as typed.
    pub fn record(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        self.head = (self.head + SLOTS - 1) % SLOTS;
        self.entries[self.head].clear();
        self.entries[self.head].push_str(line);
        self.counter += 1;
    }

    /// Undo the most recent `record`. Only ever called right after recording
    /// a literal history-reference token, so the expanded command text ends
    /// up in history instead of the reference itself.
    pub fn unrecord(&mut self) {
        self.head = (self.head + 1) % SLOTS;
        self.counter = self.counter.saturating_sub(1);
    }

    /// Entry `age` commands back, 0 = newest. `None` once `age` runs past
    /// either the counter or the retained window.
    pub fn lookup_by_age(&self, age: usize) -> Option<&str> {
        if age >= self.counter || age >= DEPTH {
            return None;
        }
        Some(&self.entries[self.slot(age)])
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.lookup_by_age(0)
    }

    /// Reset the counter without touching stored strings. Old entries stay
    /// physically present but become unreachable (inherited behavior of the
    /// `!-` command).
    pub fn clear(&mut self) {
        self.counter = 0;
    }

    /// Listing lines, newest first: an 8-character left-justified ordinal
    /// field followed by the command text. Slots whose ordinal would be
    /// negative are skipped.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for age in 0..DEPTH {
            if age >= self.counter {
                break;
            }
            let ordinal = self.counter - (age + 1);
            lines.push(format!("{:<8}{}", ordinal, self.entries[self.slot(age)]));
        }
        lines
    }

    pub fn print(&self) {
        for line in self.render() {
            println!("{}", line);
        }
    }
}
