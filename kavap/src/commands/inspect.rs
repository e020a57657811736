//! Inspect command implementation.
//!
//! Prints what the symbol table knows about one field or method descriptor.

use std::io::Write;

use kava_symbols::{ByteSequence, ByteView, Signature, Symbol, SymbolTable, Type, WellKnownSymbols};

use crate::commands::common::{build_table, InputKind};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the inspect command.
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    pub descriptor: String,
    /// Keep the last parameter when printing the basic signature.
    pub keep_last_arg: bool,
}

/// Describe `args.descriptor` on `out`.
///
/// Malformed input is an error; nothing is printed for it.
pub fn run_inspect(args: InspectArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let table = build_table(&config.symbols)?;
    let view = ByteView::new(args.descriptor.as_bytes());
    let keep_last_arg = args.keep_last_arg || config.erase.keep_last_arg;

    match InputKind::of(&args.descriptor) {
        InputKind::Signature => {
            let sig = table.signatures().get_or_create_valid_signature(view)?;
            describe_signature(&table, &sig, keep_last_arg, out)
        }
        InputKind::Type => {
            let ty = table.types().get_or_create_valid_type(view)?;
            describe_type(&table, &ty, out)
        }
    }
}

fn describe_type(table: &SymbolTable, ty: &Symbol<Type>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "type:             {ty}")?;
    writeln!(out, "kind:             {}", ty.kind())?;
    writeln!(out, "array dimensions: {}", ty.array_dimensions())?;
    if ty.is_array() {
        writeln!(out, "elemental type:   {}", table.types().elemental_type(ty))?;
    }
    writeln!(out, "binary name:      {}", ty.binary_name())?;
    let package = ty.runtime_package();
    if !package.is_empty() {
        writeln!(out, "runtime package:  {package}")?;
    }
    writeln!(out, "well-known:       {}", yes_no(is_well_known(ty.view())))?;
    Ok(())
}

fn describe_signature(
    table: &SymbolTable,
    sig: &Symbol<Signature>,
    keep_last_arg: bool,
    out: &mut impl Write,
) -> Result<()> {
    let parsed = table.signatures().parsed(sig);

    writeln!(out, "signature:  {sig}")?;
    writeln!(out, "parameters: {}", parsed.parameter_count())?;
    for (index, param) in parsed.parameters().iter().enumerate() {
        writeln!(out, "  {index}: {param} ({})", param.kind())?;
    }
    writeln!(out, "return:     {} ({})", parsed.return_type(), parsed.return_kind())?;
    writeln!(out, "slots:      {}", parsed.slots_for_parameters())?;
    writeln!(out, "basic:      {}", table.signatures().to_basic(sig, keep_last_arg))?;
    writeln!(out, "well-known: {}", yes_no(is_well_known(sig.view())))?;
    Ok(())
}

fn is_well_known(view: ByteView<'_>) -> bool {
    WellKnownSymbols::global().seed().contains(view)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
