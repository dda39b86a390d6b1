//! m17n CLI - command implementations shared by the `m17n` binary and its tests

pub mod cmd;
pub mod config;
pub mod document;
