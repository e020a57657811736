//! Shared fixtures for the integration suites

#![allow(dead_code)]

use kava_symbols::{BootstrapRegistry, SymbolTable, SymbolTableConfig};

/// Thread count used by the concurrency suites
pub const THREADS: usize = 8;

/// A small catalog: a parser-level registry with a handful of names and types, frozen.
pub fn small_registry() -> BootstrapRegistry {
    let registry = BootstrapRegistry::with_config(&SymbolTableConfig::small())
        .expect("small config is valid");
    registry.put_name("<init>");
    registry.put_name("value");
    let object = registry.put_type("Ljava/lang/Object;");
    let void = registry.put_type("V");
    registry.put_type("I");
    registry.put_signature(&void, &[&object]);
    registry.freeze();
    registry
}

/// A per-runtime table over [`small_registry`]'s catalog
pub fn small_table(registry: &BootstrapRegistry) -> SymbolTable {
    SymbolTable::with_config(registry, &SymbolTableConfig::small()).expect("small config is valid")
}

/// Class descriptor `Lpkg<n>/Class<m>;`
pub fn class_descriptor(n: usize, m: usize) -> String {
    format!("Lpkg{n}/Class{m};")
}
