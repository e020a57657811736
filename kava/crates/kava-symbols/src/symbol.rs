//! Canonical interned byte sequences.
//!
//! A [`Symbol<T>`] is a reference-counted handle to an exact-sized, immutable byte buffer
//! owned by an [`Interner`](crate::Interner). The interner mints at most one buffer per
//! distinct content, so two symbols are equal exactly when they share an allocation and
//! comparison is a pointer check.
//!
//! # Tags
//!
//! The type parameter records what the bytes are known to be:
//!
//! | Tag | Content |
//! |-----|---------|
//! | [`ModifiedUtf8`] | any constant-pool string |
//! | [`Name`] | a class, field or method name |
//! | [`Type`] | a valid field descriptor (`I`, `[J`, `Ljava/lang/Object;`) |
//! | [`Signature`] | a valid method descriptor (`(I)V`) |
//!
//! Tags are uninhabited marker types and exist only at compile time. Every symbol can be
//! widened to [`Symbol<ModifiedUtf8>`] with [`Symbol::upcast`]; narrowing to a descriptor tag
//! goes through [`Symbol::to_type`] or [`Symbol::to_signature`], which re-check the grammar.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::byte_view::{fmt_text, ByteSequence, ByteView};
use crate::error::ClassFormatResult;
use crate::{signatures, types};

/// Compile-time marker describing what a symbol's bytes are
pub trait Tag: 'static + Send + Sync {
    /// Human-readable tag name used in `Debug` output
    const NAME: &'static str;
}

/// Tags whose content obeys the descriptor grammar
pub trait Descriptor: Tag {}

/// General constant-pool UTF-8
#[derive(Debug)]
pub enum ModifiedUtf8 {}

/// Class, field and method names
#[derive(Debug)]
pub enum Name {}

/// Field descriptors
#[derive(Debug)]
pub enum Type {}

/// Method descriptors
#[derive(Debug)]
pub enum Signature {}

impl Tag for ModifiedUtf8 {
    const NAME: &'static str = "ModifiedUtf8";
}

impl Tag for Name {
    const NAME: &'static str = "Name";
}

impl Tag for Type {
    const NAME: &'static str = "Type";
}

impl Tag for Signature {
    const NAME: &'static str = "Signature";
}

impl Descriptor for Type {}
impl Descriptor for Signature {}

/// Heap block behind a symbol
pub(crate) struct SymbolData {
    bytes: Box<[u8]>,
    hash: i32,
}

/// An interned byte sequence tagged with `T`.
///
/// # Examples
///
/// ```
/// use kava_symbols::{ByteSequence, ByteView, Interner};
///
/// let interner = Interner::new();
/// let a = interner.symbolify(ByteView::new(b"java/lang/Object"));
/// let b = interner.symbolify(ByteView::new(b"java/lang/Object"));
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 16);
/// ```
pub struct Symbol<T: Tag> {
    data: Arc<SymbolData>,
    _tag: PhantomData<fn() -> T>,
}

impl Symbol<ModifiedUtf8> {
    /// Allocate a new canonical buffer.
    ///
    /// Only the interner calls this; any other caller would break the one-allocation-per-
    /// content rule that identity equality depends on.
    pub(crate) fn mint(bytes: Box<[u8]>) -> Self {
        let hash = crate::byte_view::content_hash(&bytes);
        Self {
            data: Arc::new(SymbolData { bytes, hash }),
            _tag: PhantomData,
        }
    }
}

impl<T: Tag> Symbol<T> {
    /// View over the symbol's bytes
    #[inline]
    pub fn view(&self) -> ByteView<'_> {
        ByteView::new(&self.data.bytes)
    }

    /// Forget the tag.
    #[inline]
    pub fn upcast(&self) -> Symbol<ModifiedUtf8> {
        self.retag()
    }

    /// Reinterpret as a field descriptor, validating the content first.
    pub fn to_type(&self) -> ClassFormatResult<Symbol<Type>> {
        types::check_type(&self.data.bytes)?;
        Ok(self.retag())
    }

    /// Reinterpret as a method descriptor, validating the content first.
    pub fn to_signature(&self) -> ClassFormatResult<Symbol<Signature>> {
        signatures::check_signature(&self.data.bytes)?;
        Ok(self.retag())
    }

    /// Identity comparison across tags.
    #[inline]
    pub fn ptr_eq<U: Tag>(&self, other: &Symbol<U>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Change the tag without checking the content.
    ///
    /// Callers must already know the bytes satisfy `U`'s grammar.
    #[inline]
    pub(crate) fn retag<U: Tag>(&self) -> Symbol<U> {
        Symbol {
            data: Arc::clone(&self.data),
            _tag: PhantomData,
        }
    }
}

impl<T: Tag> ByteSequence for Symbol<T> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.data.bytes
    }

    #[inline]
    fn hash_code(&self) -> i32 {
        self.data.hash
    }
}

impl<T: Tag> Clone for Symbol<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            _tag: PhantomData,
        }
    }
}

impl<T: Tag> PartialEq for Symbol<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<T: Tag> Eq for Symbol<T> {}

impl<T: Tag> Hash for Symbol<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.data.hash);
    }
}

impl<T: Tag> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_text(self, log::Level::Error, f)
    }
}

impl<T: Tag> fmt::Debug for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol<{}>(\"{}\")", T::NAME, self)
    }
}

// Compile-time check that symbols can be shared across threads
static_assertions::assert_impl_all!(Symbol<ModifiedUtf8>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Symbol<Type>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Symbol<Signature>: Send, Sync, Clone);
