//! Subcommands of the kavap CLI.
//!
//! Each subcommand lives in its own file and exposes an `XxxArgs` struct plus a `run_xxx`
//! entry point writing its report to a caller-supplied writer.

pub mod common;

pub mod check;
pub mod erase;
pub mod inspect;

pub use check::{run_check, CheckArgs};
pub use erase::{run_erase, EraseArgs};
pub use inspect::{run_inspect, InspectArgs};
