//! Per-runtime symbol table.
//!
//! A [`SymbolTable`] bundles one [`Interner`] seeded from a frozen registry with the type
//! and signature factories bound to it. Each runtime owns one; symbols minted by one table
//! never appear in another, while catalog symbols are shared by all of them.

use std::sync::Arc;

use crate::byte_view::ByteView;
use crate::config::SymbolTableConfig;
use crate::error::ConfigResult;
use crate::interner::Interner;
use crate::mutf8;
use crate::registry::BootstrapRegistry;
use crate::signatures::SignatureSymbols;
use crate::symbol::{ModifiedUtf8, Name, Symbol};
use crate::types::TypeSymbols;
use crate::well_known::WellKnownSymbols;

/// Interner plus type and signature factories for one runtime.
///
/// # Examples
///
/// ```
/// use kava_symbols::{ByteView, SymbolTable, WellKnownSymbols};
///
/// let table = SymbolTable::bootstrap();
/// let object = table.types().get_or_create_valid_type(ByteView::new(b"Ljava/lang/Object;")).unwrap();
/// assert!(object.ptr_eq(&WellKnownSymbols::global().types.object));
/// ```
pub struct SymbolTable {
    interner: Arc<Interner>,
    types: TypeSymbols,
    signatures: SignatureSymbols,
}

impl SymbolTable {
    /// Table seeded from a frozen `registry`, with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `registry` is still open.
    pub fn new(registry: &BootstrapRegistry) -> Self {
        let interner = Interner::from(registry.seed());
        Self::from_interner(interner)
    }

    /// Table seeded from a frozen `registry`.
    ///
    /// # Panics
    ///
    /// Panics if `registry` is still open.
    pub fn with_config(registry: &BootstrapRegistry, config: &SymbolTableConfig) -> ConfigResult<Self> {
        let interner = Interner::seeded_from(registry.seed(), config)?;
        Ok(Self::from_interner(interner))
    }

    /// Table seeded from the process-wide well-known catalog
    pub fn bootstrap() -> Self {
        Self::new(WellKnownSymbols::global().registry())
    }

    fn from_interner(interner: Interner) -> Self {
        let interner = Arc::new(interner);
        let types = TypeSymbols::new(Arc::clone(&interner));
        let signatures = SignatureSymbols::new(types.clone());
        Self {
            interner,
            types,
            signatures,
        }
    }

    #[inline]
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    #[inline]
    pub fn types(&self) -> &TypeSymbols {
        &self.types
    }

    #[inline]
    pub fn signatures(&self) -> &SignatureSymbols {
        &self.signatures
    }

    /// Intern `text` as a name
    pub fn name(&self, text: &str) -> Symbol<Name> {
        let encoded = mutf8::encode(text);
        self.interner.symbolify_name(ByteView::new(&encoded))
    }

    /// Intern `text` without tagging it
    pub fn utf8(&self, text: &str) -> Symbol<ModifiedUtf8> {
        self.interner.symbolify_str(text)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.interner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.len())
            .field("parsed_signatures", &self.signatures.cache_len())
            .finish()
    }
}

static_assertions::assert_impl_all!(SymbolTable: Send, Sync);
