//! Shared helpers for kavap commands.

use std::path::Path;

use kava_symbols::{SymbolTable, WellKnownSymbols};

use crate::config::SymbolsConfig;
use crate::error::{KavapError, Result};

// ============================================================================
// Input Classification
// ============================================================================

/// What a command-line input is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A field descriptor such as `[I` or `Ljava/lang/String;`
    Type,
    /// A method descriptor such as `(IJ)V`
    Signature,
}

impl InputKind {
    pub fn of(input: &str) -> Self {
        if input.starts_with('(') {
            Self::Signature
        } else {
            Self::Type
        }
    }
}

// ============================================================================
// Table Construction
// ============================================================================

/// Symbol table for one run, seeded from the well-known catalog.
pub fn build_table(symbols: &SymbolsConfig) -> Result<SymbolTable> {
    let registry = WellKnownSymbols::global().registry();
    let table = SymbolTable::with_config(registry, &symbols.table_config())?;
    tracing::debug!("seeded symbol table with {} catalog entries", table.len());
    Ok(table)
}

// ============================================================================
// Input Files
// ============================================================================

/// Read one input per line, skipping blank lines and `#` comments.
pub fn read_input_file(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(KavapError::Validation(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let inputs: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect();
    tracing::debug!("read {} inputs from {}", inputs.len(), path.display());
    Ok(inputs)
}
