//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] and answers from a table of
//! canned responses keyed by the full command line. Unscripted commands
//! behave as if the program were not installed.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use rackcheck::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new()
//!     .with_stdout("ollama --version", "ollama version is 0.5.7")
//!     .with_timeout("vcgencmd measure_temp");
//!
//! let result = runner.run("ollama", &["--version"], Duration::from_secs(5)).unwrap();
//! assert!(result.success);
//! assert!(runner.run("vcgencmd", &["measure_temp"], Duration::from_secs(5)).is_err());
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{RackcheckError, Result};

use super::command::{display_command, CommandResult, CommandRunner};

/// Canned behavior for one command line.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The program ran and exited with `code`.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// The program is not installed.
    NotFound,
    /// The program outlived its time bound.
    Timeout,
}

/// Mock command runner.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, MockResponse>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an arbitrary response for a command line.
    pub fn with_response(mut self, command: &str, response: MockResponse) -> Self {
        self.responses.insert(command.to_string(), response);
        self
    }

    /// Script a successful run printing `stdout`.
    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_exit(command, 0, stdout)
    }

    /// Script a run exiting with `code`.
    pub fn with_exit(self, command: &str, code: i32, stdout: &str) -> Self {
        self.with_response(
            command,
            MockResponse::Exit {
                code,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        )
    }

    /// Script a timeout.
    pub fn with_timeout(self, command: &str) -> Self {
        self.with_response(command, MockResponse::Timeout)
    }

    /// Command lines that were run, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Result<CommandResult> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());

        match self.responses.get(&command) {
            Some(MockResponse::Exit {
                code,
                stdout,
                stderr,
            }) => Ok(if *code == 0 {
                CommandResult::success(stdout.clone(), stderr.clone(), Duration::ZERO)
            } else {
                CommandResult::failure(Some(*code), stdout.clone(), stderr.clone(), Duration::ZERO)
            }),
            Some(MockResponse::Timeout) => Err(RackcheckError::CommandTimedOut { command, timeout }),
            Some(MockResponse::NotFound) | None => Err(RackcheckError::CommandNotFound {
                program: program.to_string(),
            }),
        }
    }
}
