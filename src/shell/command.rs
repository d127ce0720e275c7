//! Bounded-wait command execution.
//!
//! Every external program the verifier touches (`python3`, `ollama`,
//! `systemctl`, `vcgencmd`) is run through [`execute`], which enforces an
//! upper bound on how long the child may run. The [`CommandRunner`] trait is
//! the seam checks use, so tests can swap in [`MockRunner`](super::MockRunner).

use crate::error::{RackcheckError, Result};
use std::io::{ErrorKind, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a command that exited on its own.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        if status.success() {
            Self::success(stdout, stderr, duration)
        } else {
            Self::failure(status.code(), stdout, stderr, duration)
        }
    }
}

/// Runs external programs on behalf of checks.
///
/// Implementations must return [`RackcheckError::CommandNotFound`] when the
/// program is absent and [`RackcheckError::CommandTimedOut`] when it outlives
/// `timeout`. A program that runs and exits non-zero is `Ok` with
/// `success == false`.
pub trait CommandRunner {
    /// Run `program` with `args`, waiting at most `timeout`.
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandResult>;
}

/// [`CommandRunner`] backed by real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        execute(program, args, timeout)
    }
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Kills and reaps the child on drop unless it was already reaped.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn try_wait(&mut self) -> std::io::Result<Option<ExitStatus>> {
        let status = self.child.try_wait()?;
        if status.is_some() {
            self.reaped = true;
        }
        Ok(status)
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
    });
    rx
}

/// Wait for a reader thread's output until `deadline`.
///
/// Returns `None` if the pipe is still open at the deadline, which happens
/// when a grandchild inherited it.
fn collect(rx: &Receiver<String>, deadline: Instant) -> Option<String> {
    match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(output) => Some(output),
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

/// Execute a program directly (no shell), waiting at most `timeout`.
///
/// Stdout and stderr are captured by reader threads so a chatty child can't
/// block on a full pipe. The deadline covers both the child's exit and the
/// pipes closing. On timeout the child is killed and reaped, and the reader
/// threads are left to finish on their own.
pub fn execute(program: &str, args: &[&str], timeout: Duration) -> Result<CommandResult> {
    let command = display_command(program, args);
    let start = Instant::now();
    let deadline = start + timeout;
    tracing::debug!("Running `{}` (timeout {:?})", command, timeout);

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => RackcheckError::CommandNotFound {
                program: program.to_string(),
            },
            _ => RackcheckError::Io(e),
        })?;

    let mut guard = ChildGuard {
        child,
        reaped: false,
    };
    let stdout_rx = drain(guard.child.stdout.take());
    let stderr_rx = drain(guard.child.stderr.take());

    let status = loop {
        if let Some(status) = guard.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            tracing::debug!("`{}` exceeded {:?}, killing", command, timeout);
            drop(guard);
            return Err(RackcheckError::CommandTimedOut { command, timeout });
        }
        thread::sleep(POLL_INTERVAL.min(deadline.saturating_duration_since(Instant::now())));
    };

    let (Some(stdout), Some(stderr)) = (collect(&stdout_rx, deadline), collect(&stderr_rx, deadline))
    else {
        tracing::debug!("`{}` exited but its output is still open after {:?}", command, timeout);
        return Err(RackcheckError::CommandTimedOut { command, timeout });
    };
    let duration = start.elapsed();
    tracing::debug!("`{}` exited with {:?} in {:?}", command, status.code(), duration);

    Ok(CommandResult::from_status(status, stdout, stderr, duration))
}
