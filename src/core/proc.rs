//! Bounded child-process execution.

use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

/// Run a command to completion, killing it if it exceeds `timeout`.
///
/// Returns `Ok(None)` on timeout; the child is killed and reaped, never
/// orphaned. Pipes are drained after exit, so this is only suitable for
/// commands with small output (the caller-identity calls emit a few lines).
pub fn output_with_timeout(cmd: &mut Command, timeout: Duration) -> std::io::Result<Option<Output>> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(status) = child.try_wait()? {
            let mut stdout = Vec::new();
            if let Some(mut pipe) = child.stdout.take() {
                pipe.read_to_end(&mut stdout)?;
            }
            let mut stderr = Vec::new();
            if let Some(mut pipe) = child.stderr.take() {
                pipe.read_to_end(&mut stderr)?;
            }
            return Ok(Some(Output {
                status,
                stdout,
                stderr,
            }));
        }

        if Instant::now() >= deadline {
            child.kill().ok();
            child.wait()?;
            return Ok(None);
        }

        std::thread::sleep(Duration::from_millis(25));
    }
}
