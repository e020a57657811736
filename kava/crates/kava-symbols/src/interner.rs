//! Concurrent content-addressed symbol table.
//!
//! The [`Interner`] maps byte content to the one canonical [`Symbol`] holding that content.
//! It is backed by a sharded `DashMap` hashed with `ahash`, so lookups from many class-loading
//! threads proceed in parallel and inserts only contend on a single shard.
//!
//! # Canonicalization under contention
//!
//! `symbolify` first probes with the borrowed view (no allocation). On a miss it copies the
//! view into an exact-sized candidate and offers it to the map's `entry` API, which decides
//! atomically under the shard lock. If another thread won the race the candidate is dropped
//! and the winner returned, so callers only ever observe one symbol per content. Candidates
//! are always fresh copies, so nothing retains the (possibly large) buffer the probe view
//! pointed into.
//!
//! # Performance Characteristics
//!
//! - **Lookup**: O(len) hash + compare, no allocation
//! - **Interning (hit)**: same as lookup
//! - **Interning (miss)**: one exact-sized allocation plus a shard-locked insert
//! - **Symbol comparison**: pointer comparison

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::byte_view::{ByteSequence, ByteView};
use crate::config::SymbolTableConfig;
use crate::error::{ConfigResult, SymbolError, SymbolResult};
use crate::mutf8;
use crate::symbol::{ModifiedUtf8, Name, Symbol, Tag};

/// Map key that hashes and compares a symbol by content, so the map can be probed with `&[u8]`.
#[derive(Clone)]
struct ContentKey(Symbol<ModifiedUtf8>);

impl Borrow<[u8]> for ContentKey {
    fn borrow(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Hash for ContentKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `<[u8] as Hash>` for borrowed lookups
        self.0.as_bytes().hash(state);
    }
}

impl PartialEq for ContentKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes() == other.0.as_bytes()
    }
}

impl Eq for ContentKey {}

/// Interner statistics for profiling
///
/// # Examples
///
/// ```
/// use kava_symbols::{ByteView, Interner};
///
/// let interner = Interner::new();
/// interner.symbolify(ByteView::new(b"value"));
/// interner.symbolify(ByteView::new(b"value"));
///
/// let stats = interner.stats();
/// assert_eq!(stats.count, 1);
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses, 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of canonical symbols
    pub count: usize,
    /// Map capacity
    pub capacity: usize,
    /// Interning calls answered by an existing symbol
    pub hits: usize,
    /// Interning calls that had to build a candidate
    pub misses: usize,
    /// Candidates discarded because another thread inserted the same content first
    pub races: usize,
}

impl InternerStats {
    pub const fn new(count: usize, capacity: usize, hits: usize, misses: usize, races: usize) -> Self {
        Self {
            count,
            capacity,
            hits,
            misses,
            races,
        }
    }

    /// Calculate the load factor (count / capacity)
    ///
    /// Returns 0.0 if capacity is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use kava_symbols::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 0, 0);
    /// assert_eq!(stats.load_factor(), 0.5);
    /// ```
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if nothing was interned yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use kava_symbols::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 90, 10, 0);
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of interning operations
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

/// Thread-safe table of canonical symbols.
///
/// Tables are independent: a table built [from a seed](Interner::seeded_from) copies the
/// seed's entries once, and symbols interned afterwards in either table are invisible to the
/// other. Entries are never removed; symbols live as long as their table or any handle to
/// them.
pub struct Interner {
    table: DashMap<ContentKey, (), RandomState>,
    track_stats: bool,
    hits: AtomicUsize,
    misses: AtomicUsize,
    races: AtomicUsize,
}

impl Interner {
    /// Create an empty table with the default configuration
    pub fn new() -> Self {
        Self::build(&SymbolTableConfig::default(), 0)
    }

    /// Create an empty table with the given configuration
    pub fn with_config(config: &SymbolTableConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config, 0))
    }

    /// Create a table holding a copy of every entry in `seed`.
    ///
    /// The copy is taken once, here. Later inserts into the new table do not show up in the
    /// seed, but every symbol copied from the seed is the seed's own allocation, so it
    /// compares equal to the seed's handle.
    pub fn seeded_from(seed: FrozenSeed<'_>, config: &SymbolTableConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::copy_of(seed, config))
    }

    fn copy_of(seed: FrozenSeed<'_>, config: &SymbolTableConfig) -> Self {
        let interner = Self::build(config, seed.len());
        for entry in seed.table.table.iter() {
            interner.table.insert(entry.key().clone(), ());
        }
        log::debug!("seeded symbol table with {} entries", interner.len());
        interner
    }

    fn build(config: &SymbolTableConfig, reserve: usize) -> Self {
        let capacity = config.initial_capacity.max(reserve);
        let table = match config.shard_amount {
            Some(shards) => {
                DashMap::with_capacity_and_hasher_and_shard_amount(capacity, RandomState::new(), shards)
            }
            None => DashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        };
        Self {
            table,
            track_stats: config.track_stats,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            races: AtomicUsize::new(0),
        }
    }

    /// Find the canonical symbol for `view`'s content without creating one.
    #[inline]
    pub fn lookup(&self, view: ByteView<'_>) -> Option<Symbol<ModifiedUtf8>> {
        self.table.get(view.as_bytes()).map(|entry| entry.key().0.clone())
    }

    /// Like [`lookup`](Self::lookup), failing with [`SymbolError::NotFound`] when the content
    /// was never interned.
    pub fn require(&self, view: ByteView<'_>) -> SymbolResult<Symbol<ModifiedUtf8>> {
        self.lookup(view).ok_or(SymbolError::NotFound)
    }

    /// Canonical symbol for `view`'s content, created if absent.
    ///
    /// Safe to call from any number of threads with equal or different content; all callers
    /// with equal content receive the same allocation.
    pub fn symbolify(&self, view: ByteView<'_>) -> Symbol<ModifiedUtf8> {
        self.get_or_create(view).0
    }

    /// Like [`symbolify`](Self::symbolify), also reporting whether this call created the
    /// symbol.
    pub fn get_or_create(&self, view: ByteView<'_>) -> (Symbol<ModifiedUtf8>, bool) {
        if let Some(symbol) = self.lookup(view) {
            self.bump(&self.hits);
            return (symbol, false);
        }
        self.insert_candidate(view.as_bytes().into())
    }

    /// Intern an already-owned, exact-sized buffer without copying it again.
    pub(crate) fn symbolify_owned(&self, bytes: Box<[u8]>) -> Symbol<ModifiedUtf8> {
        if let Some(symbol) = self.lookup(ByteView::new(&bytes)) {
            self.bump(&self.hits);
            return symbol;
        }
        self.insert_candidate(bytes).0
    }

    fn insert_candidate(&self, bytes: Box<[u8]>) -> (Symbol<ModifiedUtf8>, bool) {
        self.bump(&self.misses);
        let candidate = Symbol::<ModifiedUtf8>::mint(bytes);
        match self.table.entry(ContentKey(candidate)) {
            Entry::Occupied(entry) => {
                self.bump(&self.races);
                log::trace!("discarded racing candidate for {}", entry.key().0);
                (entry.key().0.clone(), false)
            }
            Entry::Vacant(entry) => {
                let symbol = entry.key().0.clone();
                entry.insert(());
                log::trace!("interned {:?}", symbol);
                (symbol, true)
            }
        }
    }

    /// Intern content known to satisfy `T`'s grammar.
    #[inline]
    pub(crate) fn symbolify_unchecked<T: Tag>(&self, view: ByteView<'_>) -> Symbol<T> {
        self.symbolify(view).retag()
    }

    #[inline]
    pub(crate) fn lookup_unchecked<T: Tag>(&self, view: ByteView<'_>) -> Option<Symbol<T>> {
        self.lookup(view).map(|symbol| symbol.retag())
    }

    /// Intern a class, field or method name
    pub fn symbolify_name(&self, view: ByteView<'_>) -> Symbol<Name> {
        self.symbolify_unchecked(view)
    }

    pub fn lookup_name(&self, view: ByteView<'_>) -> Option<Symbol<Name>> {
        self.lookup_unchecked(view)
    }

    /// Intern a host string, encoding it as modified UTF-8 first
    pub fn symbolify_str(&self, text: &str) -> Symbol<ModifiedUtf8> {
        let encoded = mutf8::encode(text);
        self.symbolify(ByteView::new(&encoded))
    }

    /// Whether a canonical symbol exists for `view`'s content
    #[inline]
    pub fn contains(&self, view: ByteView<'_>) -> bool {
        self.table.contains_key(view.as_bytes())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get statistics about the table for profiling
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.table.len(),
            capacity: self.table.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            races: self.races.load(Ordering::Relaxed),
        }
    }

    /// Reset statistics counters (useful for benchmarking)
    #[cfg(test)]
    pub(crate) fn reset_stats(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.races.store(0, Ordering::Relaxed);
    }

    #[inline]
    fn bump(&self, counter: &AtomicUsize) {
        if self.track_stats {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FrozenSeed<'_>> for Interner {
    /// Seed a new table from `seed` with the default configuration.
    fn from(seed: FrozenSeed<'_>) -> Self {
        Self::copy_of(seed, &SymbolTableConfig::default())
    }
}

impl std::fmt::Debug for Interner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interner")
            .field("len", &self.len())
            .field("track_stats", &self.track_stats)
            .finish()
    }
}

/// Read-only handle on a frozen registry's table.
///
/// Only lookups are exposed, so nothing can be added to a catalog once it has been frozen.
/// Per-runtime tables copy from it with [`Interner::seeded_from`].
#[derive(Clone, Copy)]
pub struct FrozenSeed<'a> {
    table: &'a Interner,
}

impl<'a> FrozenSeed<'a> {
    pub(crate) fn new(table: &'a Interner) -> Self {
        Self { table }
    }

    #[inline]
    pub fn lookup(&self, view: ByteView<'_>) -> Option<Symbol<ModifiedUtf8>> {
        self.table.lookup(view)
    }

    #[inline]
    pub fn lookup_name(&self, view: ByteView<'_>) -> Option<Symbol<Name>> {
        self.table.lookup_name(view)
    }

    pub fn require(&self, view: ByteView<'_>) -> SymbolResult<Symbol<ModifiedUtf8>> {
        self.table.require(view)
    }

    #[inline]
    pub fn contains(&self, view: ByteView<'_>) -> bool {
        self.table.contains(view)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl std::fmt::Debug for FrozenSeed<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrozenSeed").field("len", &self.len()).finish()
    }
}

static_assertions::assert_impl_all!(Interner: Send, Sync);
static_assertions::assert_impl_all!(FrozenSeed<'static>: Send, Sync, Copy);
