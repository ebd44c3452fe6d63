//! High-level operations behind the CLI, separated from argument
//! parsing and output rendering concerns.

pub mod bootstrap;

pub use bootstrap::bootstrap_operation;
