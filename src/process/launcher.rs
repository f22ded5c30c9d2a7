use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::ptr;

use super::ProcessError;

/// Launch an external command. Token 0 names the program (resolved through
/// the executable search path); the rest become its argument vector, and the
/// child inherits the shell's stdio.
///
/// A not-found or not-executable failure prints `EXECVP: <error>` and
/// reports success: a launch that never happened is indistinguishable from a
/// command that ran and exited cleanly, matching the historical behavior of
/// the failed exec path. Only the fork-failure class is an error, and the
/// caller treats it as fatal.
pub fn launch(tokens: &[&str], background: bool) -> Result<(), ProcessError> {
    let mut command = Command::new(tokens[0]);
    command
        .args(&tokens[1..])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if is_exec_failure(&e) => {
            println!("EXECVP: {}", e);
            return Ok(());
        }
        Err(e) => return Err(ProcessError::SpawnFailed(e)),
    };

    if background {
        // No handle kept; the reap sweep collects it once it exits.
        return Ok(());
    }

    child.wait().map_err(ProcessError::WaitFailed)?;
    Ok(())
}

/// Failures that the original reported from inside the child after execvp
/// returned, as opposed to fork itself failing.
fn is_exec_failure(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::NotFound | ErrorKind::PermissionDenied | ErrorKind::InvalidInput
    )
}

/// Collect every already-exited child without blocking. Called once per
/// loop iteration so background children never pile up as zombies.
pub fn reap_background() {
    unsafe {
        while libc::waitpid(-1, ptr::null_mut(), libc::WNOHANG) > 0 {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    // One test owns every spawned child: the reap sweep uses waitpid(-1),
    // which would steal children from concurrently running tests.
    #[test]
    fn test_launch_and_reap() {
        // Foreground command runs to completion.
        assert!(launch(&["true"], false).is_ok());

        // `sh -c` exits with the status of its script; wait() succeeding is
        // all we require, since the shell ignores child exit statuses.
        assert!(launch(&["sh", "-c", "exit 3"], false).is_ok());

        // A missing program is reported but is not an error.
        assert!(launch(&["no-such-program-venule"], false).is_ok());

        // Background launch returns before the child exits.
        let start = Instant::now();
        assert!(launch(&["sleep", "2"], true).is_ok());
        assert!(start.elapsed() < Duration::from_secs(1));

        // Reaping with nothing exited yet is a no-op, repeatedly.
        reap_background();
        reap_background();

        // An exited background child is collected by the sweep.
        assert!(launch(&["true"], true).is_ok());
        std::thread::sleep(Duration::from_millis(200));
        reap_background();
    }
}
