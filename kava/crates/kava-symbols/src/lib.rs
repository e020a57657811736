//! kava-symbols - Canonical Symbol Table and Descriptor Grammar
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Every name, field descriptor and method descriptor read from a class file is
//! stored exactly once per runtime. Two symbols with the same content are the
//! same allocation, so equality is a pointer comparison and hashing reuses a
//! hash computed when the symbol was minted.
//!
//! LAYERS:
//! -------
//! 1. BYTE VIEWS
//!    [`ByteView`] is a borrowed window over modified-UTF-8 bytes carrying a
//!    precomputed polynomial hash. Lookups never allocate.
//!
//! 2. INTERNING
//!    [`Interner`] is a concurrent content-addressed table handing out
//!    [`Symbol`]s. Concurrent interning of the same content from many threads
//!    yields one canonical symbol.
//!
//! 3. TAGS
//!    `Symbol<Name>`, `Symbol<Type>` and `Symbol<Signature>` are zero-cost views
//!    of the same representation. Promotion to a descriptor tag goes through the
//!    grammar; widening back to [`ModifiedUtf8`] is free.
//!
//! 4. BOOTSTRAP
//!    [`BootstrapRegistry`] collects a fixed catalog before any runtime starts,
//!    then freezes. [`WellKnownSymbols`] is that catalog. Each [`SymbolTable`]
//!    starts as a copy of it.
//!
//! 5. GRAMMAR
//!    [`TypeSymbols`] parses field descriptors, [`SignatureSymbols`] parses and
//!    caches method descriptors and derives erased ("basic") signatures.
//!
//! ============================================================================
//! USAGE
//! ============================================================================
//!
//! ```
//! use kava_symbols::{ByteView, JavaKind, SymbolTable};
//!
//! let table = SymbolTable::bootstrap();
//! let sig = table
//!     .signatures()
//!     .get_or_create_valid_signature(ByteView::new(b"(IJLjava/lang/String;)V"))
//!     .unwrap();
//!
//! let parsed = table.signatures().parsed(&sig);
//! assert_eq!(parsed.parameter_count(), 3);
//! assert_eq!(parsed.slots_for_parameters(), 4);
//! assert_eq!(parsed.parameter_kind(1), JavaKind::Long);
//! ```

pub mod byte_view;
pub mod mutf8;
pub mod signatures;
pub mod types;
pub mod validation;

mod config;
mod error;
mod interner;
mod kind;
mod registry;
mod symbol;
mod table;
mod well_known;

pub use byte_view::{ByteSequence, ByteView};
pub use config::{SymbolTableConfig, DEFAULT_INITIAL_CAPACITY};
pub use error::{
    ClassFormatError, ClassFormatResult, ConfigError, ConfigResult, SymbolError, SymbolResult,
};
pub use interner::{FrozenSeed, Interner, InternerStats};
pub use kind::JavaKind;
pub use registry::BootstrapRegistry;
pub use signatures::{ParsedSignature, SignatureSymbols};
pub use symbol::{Descriptor, ModifiedUtf8, Name, Signature, Symbol, Tag, Type};
pub use table::SymbolTable;
pub use types::TypeSymbols;
pub use well_known::{WellKnownNames, WellKnownSignatures, WellKnownSymbols, WellKnownTypes};
