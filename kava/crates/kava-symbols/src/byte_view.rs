//! Read-only windows over byte buffers.
//!
//! [`ByteView`] is the probe type every lookup goes through: a borrowed `(buffer, offset, len)`
//! triple with its content hash computed once up front. Views are `Copy`, never own their
//! bytes and never outlive the buffer they point into, so a view over a whole class file can
//! be used to look up a symbol without the class file ever being retained.
//!
//! [`ByteSequence`] holds the operations shared between views and interned
//! [`Symbol`](crate::Symbol)s.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::SymbolResult;
use crate::mutf8;

/// Polynomial content hash shared by views and symbols.
///
/// Empty content hashes to `0`. Otherwise the hash starts at `1` and folds every byte in as
/// `h = 31 * h + b`, where `b` is the byte read as a *signed* 8-bit value and all arithmetic
/// wraps at 32 bits. Equal content always yields equal hashes, which is what lets a borrowed
/// view find the symbol minted from a different buffer.
///
/// # Examples
///
/// ```
/// use kava_symbols::byte_view::content_hash;
///
/// assert_eq!(content_hash(b""), 0);
/// assert_eq!(content_hash(b"I"), 31 + 73);
/// ```
#[inline]
pub fn content_hash(bytes: &[u8]) -> i32 {
    if bytes.is_empty() {
        return 0;
    }
    bytes
        .iter()
        .fold(1i32, |h, &b| h.wrapping_mul(31).wrapping_add(b as i8 as i32))
}

/// Operations common to anything that exposes an immutable run of bytes and its content hash.
///
/// Implementors supply [`as_bytes`](Self::as_bytes) and [`hash_code`](Self::hash_code); the
/// rest is derived. Indexing methods panic on out-of-range arguments: an out-of-range index
/// is a bug in the caller, never a property of the input data.
pub trait ByteSequence {
    /// The bytes covered by this sequence
    fn as_bytes(&self) -> &[u8];

    /// The precomputed [`content_hash`] of [`as_bytes`](Self::as_bytes)
    fn hash_code(&self) -> i32;

    #[inline]
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        let bytes = self.as_bytes();
        match bytes.get(index) {
            Some(&b) => b,
            None => panic!("byte index {index} out of range for length {}", bytes.len()),
        }
    }

    /// Byte-wise content comparison, checking lengths first.
    #[inline]
    fn content_equals<S: ByteSequence + ?Sized>(&self, other: &S) -> bool {
        self.len() == other.len() && self.as_bytes() == other.as_bytes()
    }

    #[inline]
    fn starts_with<S: ByteSequence + ?Sized>(&self, prefix: &S) -> bool {
        self.as_bytes().starts_with(prefix.as_bytes())
    }

    /// Position of the last occurrence of `byte`, scanning backwards.
    #[inline]
    fn last_index_of(&self, byte: u8) -> Option<usize> {
        self.as_bytes().iter().rposition(|&b| b == byte)
    }

    /// Copy the content into `dest` starting at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is too short to hold the content at `at`.
    #[inline]
    fn write_into(&self, dest: &mut [u8], at: usize) {
        let bytes = self.as_bytes();
        let end = at + bytes.len();
        assert!(
            end <= dest.len(),
            "cannot write {} bytes at offset {at} into buffer of length {}",
            bytes.len(),
            dest.len()
        );
        dest[at..end].copy_from_slice(bytes);
    }

    /// Decode the content as modified UTF-8.
    fn try_to_text(&self) -> SymbolResult<String> {
        mutf8::decode(self.as_bytes())
    }

    /// Decode the content as modified UTF-8.
    ///
    /// # Panics
    ///
    /// Panics if the content is not well-formed. Symbols reaching this call have already been
    /// validated, so a failure here means memory holding symbol content was corrupted or an
    /// unchecked constructor was misused. Use [`try_to_text`](Self::try_to_text) for
    /// untrusted bytes.
    fn to_text(&self) -> String {
        match self.try_to_text() {
            Ok(text) => text,
            Err(err) => panic!("symbol content is not valid modified UTF-8: {err}"),
        }
    }

    /// Lowercase hex rendering, two digits per byte.
    fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

/// Shared `Display` logic: text when decodable, hex otherwise.
///
/// `level` is how loudly undecodable content is reported. Raw views often cover untrusted
/// class-file bytes; symbols should always decode.
pub(crate) fn fmt_text<S: ByteSequence + ?Sized>(
    seq: &S,
    level: log::Level,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match seq.try_to_text() {
        Ok(text) => f.write_str(&text),
        Err(err) => {
            log::log!(level, "rendering undecodable content 0x{} as hex: {err}", seq.to_hex());
            write!(f, "0x{}", seq.to_hex())
        }
    }
}

/// An immutable window of `len` bytes starting at `offset` in `buffer`.
///
/// # Examples
///
/// ```
/// use kava_symbols::{ByteSequence, ByteView};
///
/// let class_file = b"....Ljava/lang/String;....";
/// let view = ByteView::from_range(class_file, 4, 18);
/// assert_eq!(view.as_bytes(), b"Ljava/lang/String;");
/// assert_eq!(view.last_index_of(b'/'), Some(10));
///
/// let name = view.sub(1, 16);
/// assert_eq!(name.as_bytes(), b"java/lang/String");
/// ```
#[derive(Clone, Copy)]
pub struct ByteView<'a> {
    buffer: &'a [u8],
    offset: usize,
    len: usize,
    hash: i32,
}

impl<'a> ByteView<'a> {
    /// View over all of `buffer`
    #[inline]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::from_range(buffer, 0, buffer.len())
    }

    /// View over `buffer[offset..offset + len]`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie within `buffer`.
    #[inline]
    pub fn from_range(buffer: &'a [u8], offset: usize, len: usize) -> Self {
        assert!(
            offset.checked_add(len).is_some_and(|end| end <= buffer.len()),
            "view range {offset}+{len} out of bounds for buffer of length {}",
            buffer.len()
        );
        let hash = content_hash(&buffer[offset..offset + len]);
        Self {
            buffer,
            offset,
            len,
            hash,
        }
    }

    /// Narrower view sharing the same backing buffer.
    ///
    /// `offset` is relative to this view. Returns `self` unchanged when the range covers the
    /// whole view.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    #[inline]
    pub fn sub(&self, offset: usize, len: usize) -> ByteView<'a> {
        assert!(
            offset.checked_add(len).is_some_and(|end| end <= self.len),
            "sub-view {offset}+{len} out of bounds for view of length {}",
            self.len
        );
        if offset == 0 && len == self.len {
            return *self;
        }
        ByteView::from_range(self.buffer, self.offset + offset, len)
    }

    /// Sub-view from `start` to the end of this view
    #[inline]
    pub fn suffix(&self, start: usize) -> ByteView<'a> {
        assert!(start <= self.len, "suffix start {start} beyond view length {}", self.len);
        self.sub(start, self.len - start)
    }

    /// The bytes with the lifetime of the backing buffer rather than of the view
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        &self.buffer[self.offset..self.offset + self.len]
    }

    /// Offset of this window in its backing buffer
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl ByteSequence for ByteView<'_> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.bytes()
    }

    #[inline]
    fn hash_code(&self) -> i32 {
        self.hash
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        ByteView::new(buffer)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(buffer: &'a [u8; N]) -> Self {
        ByteView::new(buffer)
    }
}

impl PartialEq for ByteView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.content_equals(other)
    }
}

impl Eq for ByteView<'_> {}

impl Hash for ByteView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash);
    }
}

impl fmt::Display for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_text(self, log::Level::Debug, f)
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteView(\"{self}\")")
    }
}
