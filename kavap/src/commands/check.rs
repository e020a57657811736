//! Check command implementation.
//!
//! Validates each input as a method descriptor (when it starts with `(`) or a field
//! descriptor, printing one line per input.

use std::io::Write;
use std::path::PathBuf;

use kava_symbols::{ByteView, ClassFormatResult, SymbolTable};

use crate::commands::common::{build_table, read_input_file, InputKind};
use crate::config::Config;
use crate::error::{KavapError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Descriptors given on the command line.
    pub inputs: Vec<String>,
    /// File with one descriptor per line.
    pub file: Option<PathBuf>,
    /// Read field types as Java-language names.
    pub dotted: bool,
}

/// Outcome of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub valid: usize,
    pub invalid: usize,
}

impl CheckSummary {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Validate every input, writing `ok <input>` or `error <input>: <reason>` lines to `out`.
pub fn run_check(args: CheckArgs, config: &Config, out: &mut impl Write) -> Result<CheckSummary> {
    let mut inputs = args.inputs;
    if let Some(path) = &args.file {
        inputs.extend(read_input_file(path)?);
    }
    if inputs.is_empty() {
        return Err(KavapError::Validation("no descriptors given".to_string()));
    }

    let dotted = args.dotted || config.check.dotted_names;
    let table = build_table(&config.symbols)?;
    let mut summary = CheckSummary { valid: 0, invalid: 0 };

    for input in &inputs {
        match check_one(&table, input, dotted) {
            Ok(canonical) => {
                summary.valid += 1;
                if canonical == *input {
                    writeln!(out, "ok    {input}")?;
                } else {
                    writeln!(out, "ok    {input} -> {canonical}")?;
                }
            }
            Err(err) => {
                summary.invalid += 1;
                writeln!(out, "error {input}: {err}")?;
            }
        }
    }

    tracing::debug!(
        "checked {} inputs: {} valid, {} invalid",
        inputs.len(),
        summary.valid,
        summary.invalid
    );
    Ok(summary)
}

/// Canonical descriptor text for one input.
fn check_one(table: &SymbolTable, input: &str, dotted: bool) -> ClassFormatResult<String> {
    match InputKind::of(input) {
        InputKind::Signature => {
            let sig = table
                .signatures()
                .get_or_create_valid_signature(ByteView::new(input.as_bytes()))?;
            Ok(sig.to_string())
        }
        InputKind::Type if dotted => {
            let ty = table.types().internal_from_class_name(input)?;
            Ok(ty.to_string())
        }
        InputKind::Type => {
            let ty = table
                .types()
                .get_or_create_valid_type(ByteView::new(input.as_bytes()))?;
            Ok(ty.to_string())
        }
    }
}
