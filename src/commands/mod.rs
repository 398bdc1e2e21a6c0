//! CLI commands

pub mod build;
pub mod clean;
pub mod convert;
pub mod init;
pub mod list;
pub mod new;
pub mod show;
