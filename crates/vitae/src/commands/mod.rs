//! CLI command implementations.

pub mod build;
pub mod check;
pub mod export;
pub mod init;
