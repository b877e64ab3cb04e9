//! CLI command implementations

pub mod init;
pub mod list;
pub mod renumber;
pub mod select;
pub mod session;
