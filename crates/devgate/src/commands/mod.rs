//! Command implementations for the devgate CLI.
//!
//! - [`dev`] - Development server with the request guard
//! - [`preview`] - Production preview server
//! - [`check`] - Configuration validation
//! - [`probe`] - Guard decision for a user agent
//! - [`init`] - Example config scaffolding
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod dev;
pub mod init;
pub mod preview;
pub mod probe;
pub(crate) mod serve;

pub use check::execute as check_execute;
pub use dev::execute as dev_execute;
pub use init::execute as init_execute;
pub use preview::execute as preview_execute;
pub use probe::execute as probe_execute;
