use super::CommandError;
use std::env;
use std::ffi::CStr;
use std::path::PathBuf;

/// The `cd` built-in. Owns the previous-directory pointer: nothing else
/// reads or writes it.
pub struct CdCommand {
    previous_dir: String,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        CdCommand {
            previous_dir: String::new(),
        }
    }

    /// Change directory: no argument or `~` means home, `-` means the
    /// directory before the last successful change, anything else is a
    /// literal path. The previous-directory pointer moves only on success.
    pub fn execute(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if args.len() > 1 {
            return Err(CommandError::TooManyArguments);
        }

        let current = env::current_dir()?;
        let target: PathBuf = match args.first().copied() {
            None | Some("~") => home_dir()?,
            Some("-") => PathBuf::from(&self.previous_dir),
            Some(path) => PathBuf::from(path),
        };

        env::set_current_dir(&target).map_err(CommandError::ChangeDir)?;
        self.previous_dir = current.to_string_lossy().into_owned();
        Ok(())
    }
}

/// Home directory from the user database keyed by the real uid, not from
/// `$HOME` (which can be stale or spoofed). Falls back to the platform
/// lookup if the passwd entry is missing.
fn home_dir() -> Result<PathBuf, CommandError> {
    // getpwuid reads a static entry; we copy out of it immediately and
    // never call it concurrently.
    let entry = unsafe { libc::getpwuid(libc::getuid()) };
    if !entry.is_null() {
        let dir = unsafe { CStr::from_ptr((*entry).pw_dir) };
        if let Ok(dir) = dir.to_str() {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
    }
    dirs::home_dir().ok_or(CommandError::HomeDirNotFound)
}
