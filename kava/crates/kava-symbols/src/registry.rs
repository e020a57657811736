//! Bootstrap registry for well-known symbols.
//!
//! A [`BootstrapRegistry`] is filled once with a fixed catalog of names, types and signatures,
//! then frozen. From then on it is read-only and serves as the seed every per-runtime
//! [`Interner`] is copied from, so catalog symbols are shared by all runtimes without being
//! interned again.
//!
//! Misuse (registering after the freeze, freezing twice, an empty name, a malformed
//! descriptor literal) is a bug in the catalog and panics.

use parking_lot::RwLock;

use crate::byte_view::ByteView;
use crate::config::SymbolTableConfig;
use crate::error::ConfigResult;
use crate::interner::{FrozenSeed, Interner};
use crate::mutf8;
use crate::signatures::{check_signature, signature_bytes};
use crate::symbol::{Name, Signature, Symbol, Type};
use crate::types::check_type;

/// Two-phase (open, then frozen) table of catalog symbols.
///
/// # Examples
///
/// ```
/// use kava_symbols::{BootstrapRegistry, ByteView, Interner, SymbolTableConfig};
///
/// let registry = BootstrapRegistry::new();
/// let init = registry.put_name("<init>");
/// let void = registry.put_type("V");
/// let default_ctor = registry.put_signature(&void, &[]);
///
/// let seed = registry.freeze();
/// let runtime = Interner::seeded_from(seed, &SymbolTableConfig::default()).unwrap();
/// assert_eq!(runtime.lookup_name(ByteView::new(b"<init>")), Some(init));
/// assert_eq!(default_ctor.to_string(), "()V");
/// ```
pub struct BootstrapRegistry {
    delegate: Interner,
    frozen: RwLock<bool>,
}

impl BootstrapRegistry {
    pub fn new() -> Self {
        Self::from_interner(Interner::new())
    }

    pub fn with_config(config: &SymbolTableConfig) -> ConfigResult<Self> {
        Ok(Self::from_interner(Interner::with_config(config)?))
    }

    /// Open registry pre-filled with a copy of a frozen `parent`.
    ///
    /// Lets a runtime-level catalog extend a parser-level one while keeping the parent's
    /// symbols identity-equal in both.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is still open.
    pub fn derived(parent: &BootstrapRegistry, config: &SymbolTableConfig) -> ConfigResult<Self> {
        Ok(Self::from_interner(Interner::seeded_from(parent.seed(), config)?))
    }

    fn from_interner(delegate: Interner) -> Self {
        Self {
            delegate,
            frozen: RwLock::new(false),
        }
    }

    /// Register a class, field or method name.
    ///
    /// # Panics
    ///
    /// Panics if the registry is frozen or `name` is empty.
    pub fn put_name(&self, name: &str) -> Symbol<Name> {
        let frozen = self.frozen.read();
        assert!(!*frozen, "cannot register name {name:?}: registry is frozen");
        assert!(!name.is_empty(), "cannot register an empty name");
        let encoded = mutf8::encode(name);
        self.delegate.symbolify_name(ByteView::new(&encoded))
    }

    /// Register a field descriptor in internal form.
    ///
    /// # Panics
    ///
    /// Panics if the registry is frozen or `descriptor` is not a valid field descriptor.
    pub fn put_type(&self, descriptor: &str) -> Symbol<Type> {
        let frozen = self.frozen.read();
        assert!(!*frozen, "cannot register type {descriptor:?}: registry is frozen");
        if let Err(err) = check_type(descriptor.as_bytes()) {
            panic!("invalid type descriptor {descriptor:?}: {err}");
        }
        self.delegate
            .symbolify_unchecked(ByteView::new(descriptor.as_bytes()))
    }

    /// Register the signature `( params ) return_type`.
    ///
    /// # Panics
    ///
    /// Panics if the registry is frozen or a parameter is `void`.
    pub fn put_signature(&self, return_type: &Symbol<Type>, params: &[&Symbol<Type>]) -> Symbol<Signature> {
        let frozen = self.frozen.read();
        assert!(!*frozen, "cannot register signature: registry is frozen");
        let bytes = signature_bytes(return_type, params.iter().copied());
        if let Err(err) = check_signature(&bytes) {
            panic!("invalid signature {}: {err}", ByteView::new(&bytes));
        }
        self.delegate.symbolify_owned(bytes).retag()
    }

    /// Close the registry and hand out a read-only view of its table as a seed.
    ///
    /// # Panics
    ///
    /// Panics if called more than once.
    pub fn freeze(&self) -> FrozenSeed<'_> {
        let mut frozen = self.frozen.write();
        assert!(!*frozen, "registry is already frozen");
        *frozen = true;
        log::debug!("froze bootstrap registry with {} symbols", self.delegate.len());
        FrozenSeed::new(&self.delegate)
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        *self.frozen.read()
    }

    /// The frozen table, for seeding per-runtime interners.
    ///
    /// # Panics
    ///
    /// Panics if the registry is still open.
    pub fn seed(&self) -> FrozenSeed<'_> {
        assert!(self.is_frozen(), "registry must be frozen before it can seed other tables");
        FrozenSeed::new(&self.delegate)
    }

    /// Number of registered symbols
    #[inline]
    pub fn len(&self) -> usize {
        self.delegate.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.delegate.is_empty()
    }
}

impl Default for BootstrapRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BootstrapRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapRegistry")
            .field("len", &self.len())
            .field("frozen", &self.is_frozen())
            .finish()
    }
}

static_assertions::assert_impl_all!(BootstrapRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_view::ByteSequence;

    fn config() -> SymbolTableConfig {
        SymbolTableConfig::small()
    }

    #[test]
    fn test_put_and_freeze() {
        let registry = BootstrapRegistry::new();
        let name = registry.put_name("value");
        let object = registry.put_type("Ljava/lang/Object;");
        let int = registry.put_type("I");
        let sig = registry.put_signature(&object, &[&int, &object]);
        assert_eq!(sig.as_bytes(), b"(ILjava/lang/Object;)Ljava/lang/Object;");
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_frozen());

        let seed = registry.freeze();
        assert!(registry.is_frozen());
        assert_eq!(seed.lookup_name(ByteView::new(b"value")), Some(name));
    }

    #[test]
    fn test_put_is_idempotent() {
        let registry = BootstrapRegistry::new();
        let a = registry.put_type("[B");
        let b = registry.put_type("[B");
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_seeded_tables_share_catalog_symbols() {
        let registry = BootstrapRegistry::new();
        let string = registry.put_type("Ljava/lang/String;");
        let seed = registry.freeze();

        let one = Interner::seeded_from(seed, &config()).unwrap();
        let two = Interner::seeded_from(seed, &config()).unwrap();
        let from_one = one.symbolify(ByteView::new(b"Ljava/lang/String;"));
        let from_two = two.symbolify(ByteView::new(b"Ljava/lang/String;"));
        assert!(from_one.ptr_eq(&string));
        assert_eq!(from_one, from_two);

        one.symbolify(ByteView::new(b"only/in/one"));
        assert!(!two.contains(ByteView::new(b"only/in/one")));
        assert!(!registry.seed().contains(ByteView::new(b"only/in/one")));
    }

    #[test]
    #[should_panic(expected = "registry is frozen")]
    fn test_put_name_after_freeze_panics() {
        let registry = BootstrapRegistry::new();
        registry.freeze();
        registry.put_name("late");
    }

    #[test]
    #[should_panic(expected = "registry is frozen")]
    fn test_put_type_after_freeze_panics() {
        let registry = BootstrapRegistry::new();
        registry.freeze();
        registry.put_type("I");
    }

    #[test]
    #[should_panic(expected = "registry is frozen")]
    fn test_put_signature_after_freeze_panics() {
        let registry = BootstrapRegistry::new();
        let void = registry.put_type("V");
        registry.freeze();
        registry.put_signature(&void, &[]);
    }

    #[test]
    fn test_failed_put_leaves_seed_untouched() {
        let registry = BootstrapRegistry::new();
        registry.put_name("before");
        let seed_len = registry.freeze().len();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            registry.put_name("after");
        }));
        assert!(result.is_err());
        assert_eq!(registry.seed().len(), seed_len);
        assert!(!registry.seed().contains(ByteView::new(b"after")));
    }

    #[test]
    #[should_panic(expected = "already frozen")]
    fn test_double_freeze_panics() {
        let registry = BootstrapRegistry::new();
        registry.freeze();
        registry.freeze();
    }

    #[test]
    #[should_panic(expected = "empty name")]
    fn test_empty_name_panics() {
        BootstrapRegistry::new().put_name("");
    }

    #[test]
    #[should_panic(expected = "invalid type descriptor")]
    fn test_invalid_type_panics() {
        BootstrapRegistry::new().put_type("Ljava/lang/String");
    }

    #[test]
    #[should_panic(expected = "invalid signature")]
    fn test_void_parameter_panics() {
        let registry = BootstrapRegistry::new();
        let void = registry.put_type("V");
        registry.put_signature(&void, &[&void]);
    }

    #[test]
    #[should_panic(expected = "must be frozen")]
    fn test_seed_requires_freeze() {
        BootstrapRegistry::new().seed();
    }

    // ========================================================================
    // Chaining
    // ========================================================================

    #[test]
    fn test_derived_registry() {
        let parent = BootstrapRegistry::new();
        let object = parent.put_type("Ljava/lang/Object;");
        parent.freeze();

        let child = BootstrapRegistry::derived(&parent, &config()).unwrap();
        assert!(!child.is_frozen());
        assert_eq!(child.put_type("Ljava/lang/Object;"), object);

        let thread = child.put_type("Ljava/lang/Thread;");
        child.freeze();
        assert!(child.seed().contains(ByteView::new(b"Ljava/lang/Thread;")));
        assert!(!parent.seed().contains(ByteView::new(b"Ljava/lang/Thread;")));
        assert_eq!(thread.to_string(), "Ljava/lang/Thread;");
    }

    #[test]
    #[should_panic(expected = "must be frozen")]
    fn test_derived_from_open_parent_panics() {
        let parent = BootstrapRegistry::new();
        let _ = BootstrapRegistry::derived(&parent, &config());
    }
}
