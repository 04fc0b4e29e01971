//! The interactive command session: command table, state, execution.

pub mod command;
pub mod exec;
pub mod session;
