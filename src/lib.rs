//! hosts-merge - merge a custom hosts file into the system one, or remove a named section.

pub mod backup;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod grammar;
pub mod hosts;
pub mod merge;
pub mod platform;
pub mod remove;
pub mod report;
