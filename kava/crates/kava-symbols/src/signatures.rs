//! Method descriptor grammar.
//!
//! ```text
//! MethodDescriptor := ( FieldType* ) ReturnType
//! ReturnType       := FieldType | V
//! ```
//!
//! [`SignatureSymbols`] builds on [`TypeSymbols`]: every parameter and return type of a parsed
//! signature is itself a canonical [`Symbol<Type>`] from the same interner. Parses are cached
//! per signature symbol, since the same signature is typically resolved many times while
//! linking call sites.

use std::sync::Arc;

use ahash::RandomState;
use dashmap::DashMap;

use crate::byte_view::{ByteSequence, ByteView};
use crate::error::{ClassFormatError, ClassFormatResult};
use crate::kind::JavaKind;
use crate::symbol::{Signature, Symbol, Type};
use crate::types::{skip_valid_type_descriptor, TypeSymbols};

/// Recognize one method descriptor starting at `start`, returning the index just past it.
///
/// Parameters may not be `void`; the return type may.
pub fn skip_valid_signature(bytes: &[u8], start: usize) -> ClassFormatResult<usize> {
    match bytes.get(start) {
        Some(b'(') => {}
        Some(_) => return Err(ClassFormatError::MissingParenthesis { at: start }),
        None => return Err(ClassFormatError::UnexpectedEnd { at: start }),
    }

    let mut index = start + 1;
    loop {
        match bytes.get(index) {
            None => return Err(ClassFormatError::UnexpectedEnd { at: index }),
            Some(b')') => break,
            Some(b'V') => return Err(ClassFormatError::VoidNotAllowed { at: index }),
            Some(_) => index = skip_valid_type_descriptor(bytes, index, true)?,
        }
    }
    skip_valid_type_descriptor(bytes, index + 1, true)
}

/// Check that `bytes` is exactly one method descriptor
pub fn check_signature(bytes: &[u8]) -> ClassFormatResult<()> {
    let end = skip_valid_signature(bytes, 0)?;
    if end != bytes.len() {
        return Err(ClassFormatError::TrailingBytes {
            end,
            len: bytes.len(),
        });
    }
    Ok(())
}

/// # Examples
///
/// ```
/// use kava_symbols::signatures::is_valid_signature;
///
/// assert!(is_valid_signature(b"(I[Ljava/lang/String;)V"));
/// assert!(!is_valid_signature(b"(I"));
/// assert!(!is_valid_signature(b"(V)V"));
/// ```
#[inline]
pub fn is_valid_signature(bytes: &[u8]) -> bool {
    check_signature(bytes).is_ok()
}

/// Local-variable slots needed for values of the given kinds: two for `long` and `double`,
/// one for anything else.
pub fn number_of_slots<I>(kinds: I) -> usize
where
    I: IntoIterator<Item = JavaKind>,
{
    kinds
        .into_iter()
        .map(|kind| if kind.needs_two_slots() { 2 } else { 1 })
        .sum()
}

/// Exact byte layout `( params ) ret` in a single allocation of the final size
pub(crate) fn signature_bytes<'a, I>(return_type: &Symbol<Type>, params: I) -> Box<[u8]>
where
    I: IntoIterator<Item = &'a Symbol<Type>> + Clone,
{
    let len = 2 + return_type.len() + params.clone().into_iter().map(|p| p.len()).sum::<usize>();
    let mut bytes = vec![0u8; len];
    bytes[0] = b'(';
    let mut at = 1;
    for param in params {
        param.write_into(&mut bytes, at);
        at += param.len();
    }
    bytes[at] = b')';
    return_type.write_into(&mut bytes, at + 1);
    bytes.into_boxed_slice()
}

/// A parsed method descriptor: parameter types followed by the return type.
///
/// Cheap to clone; the types are shared with the parse cache.
#[derive(Clone, PartialEq, Eq)]
pub struct ParsedSignature(Arc<[Symbol<Type>]>);

impl ParsedSignature {
    #[inline]
    pub fn parameter_count(&self) -> usize {
        self.0.len() - 1
    }

    #[inline]
    pub fn return_type(&self) -> &Symbol<Type> {
        &self.0[self.0.len() - 1]
    }

    /// Type of parameter `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.parameter_count()`.
    #[inline]
    pub fn parameter_type(&self, index: usize) -> &Symbol<Type> {
        let count = self.parameter_count();
        assert!(index < count, "parameter index {index} out of range for {count} parameters");
        &self.0[index]
    }

    #[inline]
    pub fn parameter_kind(&self, index: usize) -> JavaKind {
        self.parameter_type(index).kind()
    }

    #[inline]
    pub fn return_kind(&self) -> JavaKind {
        self.return_type().kind()
    }

    #[inline]
    pub fn parameters(&self) -> &[Symbol<Type>] {
        &self.0[..self.parameter_count()]
    }

    /// Parameter kinds in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = JavaKind> + '_ {
        self.parameters().iter().map(Symbol::<Type>::kind)
    }

    pub fn slots_for_parameters(&self) -> usize {
        number_of_slots(self.kinds())
    }

    /// Parameters then return type
    #[inline]
    pub fn as_slice(&self) -> &[Symbol<Type>] {
        &self.0
    }
}

impl std::fmt::Debug for ParsedSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSignature")
            .field("parameters", &self.parameters())
            .field("return_type", self.return_type())
            .finish()
    }
}

/// Parser, factory and parse cache for [`Symbol<Signature>`].
pub struct SignatureSymbols {
    types: TypeSymbols,
    object: Symbol<Type>,
    parsed: DashMap<Symbol<Signature>, ParsedSignature, RandomState>,
}

impl SignatureSymbols {
    pub fn new(types: TypeSymbols) -> Self {
        let object = types
            .interner()
            .symbolify_unchecked(ByteView::new(b"Ljava/lang/Object;"));
        Self {
            types,
            object,
            parsed: DashMap::with_hasher(RandomState::new()),
        }
    }

    #[inline]
    pub fn types(&self) -> &TypeSymbols {
        &self.types
    }

    /// Parse the method descriptor starting at `start`, which must run to the end of `view`.
    pub fn parse(&self, view: ByteView<'_>, start: usize) -> ClassFormatResult<ParsedSignature> {
        let end = skip_valid_signature(view.as_bytes(), start)?;
        if end != view.len() {
            return Err(ClassFormatError::TrailingBytes {
                end,
                len: view.len(),
            });
        }

        let bytes = view.as_bytes();
        let mut parsed = Vec::new();
        let mut index = start + 1;
        while bytes[index] != b')' {
            let next = skip_valid_type_descriptor(bytes, index, true)?;
            parsed.push(self.types.intern_span(view, index, next));
            index = next;
        }
        parsed.push(self.types.intern_span(view, index + 1, end));
        Ok(ParsedSignature(parsed.into()))
    }

    /// Cached parse of `signature`.
    ///
    /// Concurrent first calls for the same signature may each parse it; one result is kept
    /// and every caller receives equal types.
    pub fn parsed(&self, signature: &Symbol<Signature>) -> ParsedSignature {
        if let Some(hit) = self.parsed.get(signature) {
            return hit.value().clone();
        }

        let fresh = match self.parse(signature.view(), 0) {
            Ok(parsed) => parsed,
            Err(err) => panic!("signature symbol {signature:?} failed to parse: {err}"),
        };
        self.parsed
            .entry(signature.clone())
            .or_insert(fresh)
            .value()
            .clone()
    }

    /// Intern `( params ) ret`.
    pub fn make_raw(
        &self,
        return_type: &Symbol<Type>,
        params: &[Symbol<Type>],
    ) -> ClassFormatResult<Symbol<Signature>> {
        self.build(return_type, params.iter())
    }

    /// Like [`make_raw`](Self::make_raw) for a list of borrowed parameter types
    pub fn make(
        &self,
        return_type: &Symbol<Type>,
        params: &[&Symbol<Type>],
    ) -> ClassFormatResult<Symbol<Signature>> {
        self.build(return_type, params.iter().copied())
    }

    /// Rebuild the signature symbol for an existing parse
    pub fn make_from_parsed(&self, parsed: &ParsedSignature) -> Symbol<Signature> {
        let bytes = signature_bytes(parsed.return_type(), parsed.parameters());
        self.types.interner().symbolify_owned(bytes).retag()
    }

    fn build<'a, I>(&self, return_type: &Symbol<Type>, params: I) -> ClassFormatResult<Symbol<Signature>>
    where
        I: Iterator<Item = &'a Symbol<Type>> + Clone,
    {
        let mut at = 1;
        for param in params.clone() {
            if param.as_bytes() == b"V" {
                return Err(ClassFormatError::VoidNotAllowed { at });
            }
            at += param.len();
        }
        let bytes = signature_bytes(return_type, params);
        Ok(self.types.interner().symbolify_owned(bytes).retag())
    }

    /// Erased signature for polymorphic-signature call sites.
    ///
    /// References and arrays become `Ljava/lang/Object;`, `boolean`, `byte`, `short` and
    /// `char` become `int`, and `long`, `float`, `double` and `void` stay as they are. The
    /// return type is erased by the same rule. With `keep_last_arg` the final parameter is
    /// copied unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use kava_symbols::{ByteView, SymbolTable};
    ///
    /// let table = SymbolTable::bootstrap();
    /// let sigs = table.signatures();
    /// let sig = sigs
    ///     .get_or_create_valid_signature(ByteView::new(b"(Ljava/lang/String;C)V"))
    ///     .unwrap();
    /// assert_eq!(sigs.to_basic(&sig, false).to_string(), "(Ljava/lang/Object;I)V");
    /// assert_eq!(sigs.to_basic(&sig, true).to_string(), "(Ljava/lang/Object;C)V");
    /// ```
    pub fn to_basic(&self, signature: &Symbol<Signature>, keep_last_arg: bool) -> Symbol<Signature> {
        let parsed = self.parsed(signature);
        let count = parsed.parameter_count();

        let params: Vec<Symbol<Type>> = parsed
            .parameters()
            .iter()
            .enumerate()
            .map(|(index, param)| {
                if keep_last_arg && index + 1 == count {
                    param.clone()
                } else {
                    self.basic_type(param)
                }
            })
            .collect();
        let return_type = self.basic_type(parsed.return_type());

        let bytes = signature_bytes(&return_type, &params);
        self.types.interner().symbolify_owned(bytes).retag()
    }

    fn basic_type(&self, ty: &Symbol<Type>) -> Symbol<Type> {
        match ty.kind() {
            JavaKind::Object => self.object.clone(),
            kind => self.types.for_primitive(kind.basic_kind()),
        }
    }

    /// Existing signature symbol for `view`, if `view` is a valid descriptor that was interned.
    pub fn lookup_valid_signature(&self, view: ByteView<'_>) -> Option<Symbol<Signature>> {
        check_signature(view.as_bytes()).ok()?;
        self.types.interner().lookup_unchecked(view)
    }

    /// Validate `view` as exactly one method descriptor and intern it.
    pub fn get_or_create_valid_signature(&self, view: ByteView<'_>) -> ClassFormatResult<Symbol<Signature>> {
        check_signature(view.as_bytes())?;
        Ok(self.types.interner().symbolify_unchecked(view))
    }

    /// Number of cached parses
    pub fn cache_len(&self) -> usize {
        self.parsed.len()
    }
}

impl std::fmt::Debug for SignatureSymbols {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureSymbols")
            .field("types", &self.types)
            .field("cached", &self.cache_len())
            .finish()
    }
}
