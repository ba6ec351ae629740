//! IPC (Inter-Process Communication) Module
//!
//! Handles communication between the caption engine and a front-end.
//! Payloads are camelCase JSON; command errors are plain strings.

mod commands;
mod payloads;

pub use commands::*;
pub use payloads::*;

#[cfg(test)]
mod tests_destructive;
