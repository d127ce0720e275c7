//! External command execution.

pub mod command;
pub mod mock;

pub use command::{display_command, execute, CommandResult, CommandRunner, SystemRunner};
pub use mock::{MockResponse, MockRunner};
