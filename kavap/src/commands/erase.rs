//! Erase command implementation.
//!
//! Prints the basic form of a method descriptor: references become `Object`, sub-int
//! primitives become `int`.

use std::io::Write;

use kava_symbols::ByteView;

use crate::commands::common::build_table;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the erase command.
#[derive(Debug, Clone, Default)]
pub struct EraseArgs {
    pub signature: String,
    /// Copy the trailing parameter unchanged.
    pub keep_last_arg: bool,
}

pub fn run_erase(args: EraseArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let table = build_table(&config.symbols)?;
    let sigs = table.signatures();
    let sig = sigs.get_or_create_valid_signature(ByteView::new(args.signature.as_bytes()))?;

    let keep_last_arg = args.keep_last_arg || config.erase.keep_last_arg;
    let basic = sigs.to_basic(&sig, keep_last_arg);
    tracing::debug!("erased {} to {} (keep_last_arg = {})", sig, basic, keep_last_arg);
    writeln!(out, "{basic}")?;
    Ok(())
}
