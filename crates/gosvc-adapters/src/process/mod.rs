//! Process adapters.

mod command;

pub use command::SystemCommandRunner;
