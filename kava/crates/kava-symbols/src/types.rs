//! Field descriptor grammar.
//!
//! ```text
//! FieldType     := BaseType | ObjectType | ArrayType
//! BaseType      := B | C | D | F | I | J | S | Z      (and V, as a whole return type)
//! ObjectType    := L ClassName ;
//! ArrayType     := [ FieldType                        (at most 255 dimensions)
//! ```
//!
//! The recognizer works directly on bytes. Validation is split from construction:
//! [`skip_valid_type_descriptor`] only computes where a descriptor ends, and
//! [`TypeSymbols`] interns the span once it is known to be valid, so a malformed descriptor
//! never produces a symbol.

use std::sync::Arc;

use crate::byte_view::{ByteSequence, ByteView};
use crate::error::{ClassFormatError, ClassFormatResult};
use crate::interner::Interner;
use crate::kind::JavaKind;
use crate::mutf8;
use crate::symbol::{Name, Symbol, Type};
use crate::validation;

/// Deepest array type the class-file format can express
pub const MAX_ARRAY_DIMENSIONS: usize = 255;

/// Single primitive (or `void`) descriptor
#[inline]
pub fn is_primitive(bytes: &[u8]) -> bool {
    bytes.len() == 1 && JavaKind::from_primitive_char(bytes[0]).is_some()
}

#[inline]
pub fn is_array(bytes: &[u8]) -> bool {
    bytes.len() > 1 && bytes[0] == b'['
}

/// Class or array descriptor
#[inline]
pub fn is_reference(bytes: &[u8]) -> bool {
    bytes.len() > 1 && matches!(bytes[0], b'L' | b'[')
}

/// Number of leading `[`
#[inline]
pub fn array_dimensions(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| b == b'[').count()
}

/// Kind denoted by a descriptor's first byte
#[inline]
pub fn kind_of(bytes: &[u8]) -> Option<JavaKind> {
    bytes.first().and_then(|&b| JavaKind::from_type_char(b))
}

/// Recognize one field descriptor starting at `start`, returning the index just past it.
///
/// `slashes` selects the package separator expected inside class names: `/` for internal
/// form, `.` for the dotted form some reflective callers use. Meeting the other separator
/// ends the class name early, which then fails for lack of a `;`.
///
/// # Examples
///
/// ```
/// use kava_symbols::types::skip_valid_type_descriptor;
///
/// let sig = b"(I[Ljava/lang/String;)V";
/// assert_eq!(skip_valid_type_descriptor(sig, 1, true), Ok(2));
/// assert_eq!(skip_valid_type_descriptor(sig, 2, true), Ok(21));
/// assert!(skip_valid_type_descriptor(b"Ljava.lang.String;", 0, true).is_err());
/// assert_eq!(skip_valid_type_descriptor(b"Ljava.lang.String;", 0, false), Ok(18));
/// ```
pub fn skip_valid_type_descriptor(bytes: &[u8], start: usize, slashes: bool) -> ClassFormatResult<usize> {
    let Some(&first) = bytes.get(start) else {
        return Err(ClassFormatError::UnexpectedEnd { at: start });
    };

    match first {
        b'L' => {
            let wrong_separator = if slashes { b'.' } else { b'/' };
            let name_start = start + 1;
            let name_end = bytes[name_start..]
                .iter()
                .position(|&b| b == b';' || b == b'[' || b == wrong_separator)
                .map_or(bytes.len(), |offset| name_start + offset);

            if bytes.get(name_end) != Some(&b';') {
                return Err(ClassFormatError::MissingSemicolon { at: name_end });
            }
            if name_end == name_start {
                return Err(ClassFormatError::EmptyClassName { at: start });
            }
            Ok(name_end + 1)
        }
        b'[' => {
            let dims = array_dimensions(&bytes[start..]);
            if dims > MAX_ARRAY_DIMENSIONS {
                return Err(ClassFormatError::ArrayTooDeep { dims });
            }
            let element = start + dims;
            if bytes.get(element) == Some(&b'V') {
                return Err(ClassFormatError::VoidNotAllowed { at: element });
            }
            skip_valid_type_descriptor(bytes, element, slashes)
        }
        c if JavaKind::from_primitive_char(c).is_some() => Ok(start + 1),
        c => Err(ClassFormatError::InvalidTypeChar {
            at: start,
            found: char::from(c),
        }),
    }
}

/// Check that `bytes` is exactly one field descriptor in internal form
pub fn check_type(bytes: &[u8]) -> ClassFormatResult<()> {
    let end = skip_valid_type_descriptor(bytes, 0, true)?;
    if end != bytes.len() {
        return Err(ClassFormatError::TrailingBytes {
            end,
            len: bytes.len(),
        });
    }
    Ok(())
}

#[inline]
pub fn is_valid_type(bytes: &[u8]) -> bool {
    check_type(bytes).is_ok()
}

/// Java-language binary name: `java.lang.String`, `[Ljava.lang.String;`, `int`.
pub fn binary_name(descriptor: &[u8]) -> String {
    if is_primitive(descriptor) {
        if let Some(kind) = JavaKind::from_primitive_char(descriptor[0]) {
            return kind.java_name().to_owned();
        }
    }

    let inner = if is_array(descriptor) {
        descriptor
    } else if descriptor.len() >= 2 && descriptor[0] == b'L' {
        &descriptor[1..descriptor.len() - 1]
    } else {
        descriptor
    };

    let dotted: Vec<u8> = inner
        .iter()
        .map(|&b| if b == b'/' { b'.' } else { b })
        .collect();
    mutf8::decode(&dotted).unwrap_or_else(|_| String::from_utf8_lossy(&dotted).into_owned())
}

/// Package part of a type's class name, in internal form.
///
/// Arrays report their elemental type's package; primitives and classes in the unnamed
/// package report an empty view.
///
/// # Examples
///
/// ```
/// use kava_symbols::ByteSequence;
/// use kava_symbols::types::runtime_package;
///
/// assert_eq!(runtime_package(b"[[Ljava/util/Map;").as_bytes(), b"java/util");
/// assert!(runtime_package(b"LFoo;").is_empty());
/// assert!(runtime_package(b"I").is_empty());
/// ```
pub fn runtime_package(descriptor: &[u8]) -> ByteView<'_> {
    let view = ByteView::new(descriptor);
    let element = view.suffix(array_dimensions(descriptor));
    if element.len() < 2 || element.byte_at(0) != b'L' {
        return view.sub(0, 0);
    }
    match element.last_index_of(b'/') {
        Some(slash) => element.sub(1, slash - 1),
        None => view.sub(0, 0),
    }
}

/// Type-level queries on interned descriptors
impl Symbol<Type> {
    /// Kind of values of this type
    pub fn kind(&self) -> JavaKind {
        match kind_of(self.as_bytes()) {
            Some(kind) => kind,
            None => panic!("type symbol {self:?} does not start with a type character"),
        }
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        is_array(self.as_bytes())
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        is_primitive(self.as_bytes())
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        is_reference(self.as_bytes())
    }

    #[inline]
    pub fn array_dimensions(&self) -> usize {
        array_dimensions(self.as_bytes())
    }

    pub fn binary_name(&self) -> String {
        binary_name(self.as_bytes())
    }

    pub fn runtime_package(&self) -> ByteView<'_> {
        runtime_package(self.as_bytes())
    }
}

/// Parser and factory for [`Symbol<Type>`], bound to one [`Interner`].
///
/// Holds the nine primitive type symbols so single-character descriptors never touch the
/// map.
#[derive(Clone)]
pub struct TypeSymbols {
    interner: Arc<Interner>,
    primitives: [Symbol<Type>; 9],
}

impl TypeSymbols {
    pub fn new(interner: Arc<Interner>) -> Self {
        let primitives = JavaKind::PRIMITIVES
            .map(|kind| interner.symbolify_unchecked::<Type>(ByteView::new(&[kind.type_char()])));
        Self {
            interner,
            primitives,
        }
    }

    #[inline]
    pub fn interner(&self) -> &Arc<Interner> {
        &self.interner
    }

    /// Type symbol for a primitive kind.
    ///
    /// # Panics
    ///
    /// Panics for [`JavaKind::Object`], which has no single descriptor.
    #[inline]
    pub fn for_primitive(&self, kind: JavaKind) -> Symbol<Type> {
        match kind.primitive_index() {
            Some(index) => self.primitives[index].clone(),
            None => panic!("{kind} is not a primitive kind"),
        }
    }

    #[inline]
    pub fn kind_of(&self, ty: &Symbol<Type>) -> JavaKind {
        ty.kind()
    }

    /// Parse the descriptor starting at `start` and intern it.
    ///
    /// Bytes after the descriptor are ignored; see
    /// [`get_or_create_valid_type`](Self::get_or_create_valid_type) for whole-input parsing.
    pub fn parse(&self, view: ByteView<'_>, start: usize, slashes: bool) -> ClassFormatResult<Symbol<Type>> {
        let end = skip_valid_type_descriptor(view.as_bytes(), start, slashes)?;
        Ok(self.intern_span(view, start, end))
    }

    /// Intern `view[start..end]`, a span already known to be one valid descriptor.
    pub(crate) fn intern_span(&self, view: ByteView<'_>, start: usize, end: usize) -> Symbol<Type> {
        if end - start == 1 {
            let c = view.byte_at(start);
            return match JavaKind::from_primitive_char(c) {
                Some(kind) => self.for_primitive(kind),
                None => panic!("invalid primitive type character {:?}", char::from(c)),
            };
        }
        self.interner.symbolify_unchecked(view.sub(start, end - start))
    }

    /// Array type with `dims` more dimensions than `element`.
    pub fn array_of(&self, element: &Symbol<Type>, dims: usize) -> ClassFormatResult<Symbol<Type>> {
        if dims == 0 {
            return Ok(element.clone());
        }
        let total = element.array_dimensions() + dims;
        if total > MAX_ARRAY_DIMENSIONS {
            return Err(ClassFormatError::ArrayTooDeep { dims: total });
        }
        if element.as_bytes() == b"V" {
            return Err(ClassFormatError::VoidNotAllowed { at: dims });
        }

        let mut bytes = Vec::with_capacity(dims + element.len());
        bytes.resize(dims, b'[');
        bytes.extend_from_slice(element.as_bytes());
        Ok(self.interner.symbolify_owned(bytes.into_boxed_slice()).retag())
    }

    /// Strip one array dimension; `None` for non-array types.
    pub fn component_type(&self, ty: &Symbol<Type>) -> Option<Symbol<Type>> {
        if !ty.is_array() {
            return None;
        }
        Some(self.intern_span(ty.view(), 1, ty.len()))
    }

    /// Strip every array dimension; non-array types are returned unchanged.
    pub fn elemental_type(&self, ty: &Symbol<Type>) -> Symbol<Type> {
        let dims = ty.array_dimensions();
        if dims == 0 {
            return ty.clone();
        }
        self.intern_span(ty.view(), dims, ty.len())
    }

    /// Field descriptor for a class name in internal form.
    ///
    /// `java/lang/String` becomes `Ljava/lang/String;`. Array class names are already
    /// descriptors and are returned as the same allocation.
    pub fn from_class_name(&self, name: &Symbol<Name>) -> ClassFormatResult<Symbol<Type>> {
        validation::check_class_name(name.as_bytes())?;
        if name.byte_at(0) == b'[' {
            return Ok(name.retag());
        }
        Ok(self.class_descriptor(name.as_bytes()))
    }

    /// Field descriptor for a Java-language name: `java.lang.String`, `int`, `[I`.
    pub fn internal_from_class_name(&self, name: &str) -> ClassFormatResult<Symbol<Type>> {
        if let Some(kind) = JavaKind::from_java_name(name) {
            return Ok(self.for_primitive(kind));
        }

        let encoded = mutf8::encode(name);
        let internal: Vec<u8> = encoded
            .iter()
            .map(|&b| if b == b'.' { b'/' } else { b })
            .collect();
        validation::check_class_name(&internal)?;

        if internal[0] == b'[' {
            return Ok(self.intern_span(ByteView::new(&internal), 0, internal.len()));
        }
        Ok(self.class_descriptor(&internal))
    }

    fn class_descriptor(&self, internal_name: &[u8]) -> Symbol<Type> {
        let mut bytes = Vec::with_capacity(internal_name.len() + 2);
        bytes.push(b'L');
        bytes.extend_from_slice(internal_name);
        bytes.push(b';');
        self.interner.symbolify_owned(bytes.into_boxed_slice()).retag()
    }

    /// Class name for a reference type: `Ljava/lang/String;` becomes `java/lang/String`,
    /// arrays keep their descriptor. `None` for primitives.
    pub fn to_class_name(&self, ty: &Symbol<Type>) -> Option<Symbol<Name>> {
        match ty.byte_at(0) {
            b'[' => Some(ty.retag()),
            b'L' => Some(self.interner.symbolify_name(ty.view().sub(1, ty.len() - 2))),
            _ => None,
        }
    }

    /// Checked tag conversion from a name that already holds a descriptor
    pub fn from_name_checked(&self, name: &Symbol<Name>) -> ClassFormatResult<Symbol<Type>> {
        name.to_type()
    }

    /// Existing type symbol for `view`, if `view` is a valid descriptor that was interned.
    pub fn lookup_valid_type(&self, view: ByteView<'_>) -> Option<Symbol<Type>> {
        check_type(view.as_bytes()).ok()?;
        if view.len() == 1 {
            return Some(self.intern_span(view, 0, 1));
        }
        self.interner.lookup_unchecked(view)
    }

    /// Validate `view` as exactly one descriptor and intern it.
    pub fn get_or_create_valid_type(&self, view: ByteView<'_>) -> ClassFormatResult<Symbol<Type>> {
        check_type(view.as_bytes())?;
        Ok(self.intern_span(view, 0, view.len()))
    }
}

impl std::fmt::Debug for TypeSymbols {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeSymbols")
            .field("interner", &self.interner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    fn types() -> TypeSymbols {
        TypeSymbols::new(Arc::new(Interner::new()))
    }

    fn ty(types: &TypeSymbols, s: &str) -> Symbol<Type> {
        types
            .get_or_create_valid_type(ByteView::new(s.as_bytes()))
            .unwrap_or_else(|e| panic!("{s}: {e}"))
    }

    // ========================================================================
    // Recognizer
    // ========================================================================

    #[test]
    fn test_primitives() {
        for c in b"BCDFIJSVZ" {
            assert!(is_primitive(&[*c]));
            assert!(is_valid_type(&[*c]));
        }
        assert!(!is_primitive(b"L"));
        assert!(!is_primitive(b"II"));
        assert_eq!(
            check_type(b"X"),
            Err(ClassFormatError::InvalidTypeChar { at: 0, found: 'X' })
        );
    }

    #[test]
    fn test_class_descriptors() {
        assert!(is_valid_type(b"Ljava/lang/String;"));
        assert!(is_valid_type(b"LFoo;"));
        assert_eq!(
            check_type(b"Ljava/lang/String"),
            Err(ClassFormatError::MissingSemicolon { at: 17 })
        );
        assert_eq!(check_type(b"L;"), Err(ClassFormatError::EmptyClassName { at: 0 }));
        assert_eq!(check_type(b"L"), Err(ClassFormatError::MissingSemicolon { at: 1 }));
        assert_eq!(
            check_type(b"Ljava/lang/String;;"),
            Err(ClassFormatError::TrailingBytes { end: 18, len: 19 })
        );
    }

    #[test]
    fn test_wrong_separator_ends_name() {
        assert_eq!(
            check_type(b"Ljava.lang/String;"),
            Err(ClassFormatError::MissingSemicolon { at: 5 })
        );
        assert_eq!(
            skip_valid_type_descriptor(b"Ljava/lang.String;", 0, false),
            Err(ClassFormatError::MissingSemicolon { at: 5 })
        );
        assert_eq!(skip_valid_type_descriptor(b"La.b;", 0, false), Ok(5));
        assert!(check_type(b"La[b;").is_err());
    }

    #[test]
    fn test_array_descriptors() {
        assert!(is_valid_type(b"[I"));
        assert!(is_valid_type(b"[[Ljava/lang/Object;"));
        assert_eq!(check_type(b"["), Err(ClassFormatError::UnexpectedEnd { at: 1 }));
        assert_eq!(check_type(b"[[V"), Err(ClassFormatError::VoidNotAllowed { at: 2 }));
        assert_eq!(
            check_type(b"[Q"),
            Err(ClassFormatError::InvalidTypeChar { at: 1, found: 'Q' })
        );
    }

    #[test]
    fn test_array_depth_limit() {
        let mut ok = vec![b'['; 255];
        ok.push(b'I');
        assert!(is_valid_type(&ok));

        let mut deep = vec![b'['; 256];
        deep.push(b'I');
        assert_eq!(check_type(&deep), Err(ClassFormatError::ArrayTooDeep { dims: 256 }));

        let mut deeper = vec![b'['; 257];
        deeper.push(b'I');
        assert!(!is_valid_type(&deeper));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(check_type(b""), Err(ClassFormatError::UnexpectedEnd { at: 0 }));
    }

    #[test]
    fn test_free_queries() {
        assert!(is_array(b"[I"));
        assert!(!is_array(b"I"));
        assert!(is_reference(b"LFoo;"));
        assert!(is_reference(b"[I"));
        assert!(!is_reference(b"J"));
        assert_eq!(array_dimensions(b"[[[J"), 3);
        assert_eq!(kind_of(b"[J"), Some(JavaKind::Object));
        assert_eq!(kind_of(b"J"), Some(JavaKind::Long));
        assert_eq!(kind_of(b""), None);
    }

    // ========================================================================
    // Names and packages
    // ========================================================================

    #[test]
    fn test_binary_name() {
        assert_eq!(binary_name(b"Ljava/lang/String;"), "java.lang.String");
        assert_eq!(binary_name(b"[Ljava/lang/String;"), "[Ljava.lang.String;");
        assert_eq!(binary_name(b"[[I"), "[[I");
        assert_eq!(binary_name(b"I"), "int");
        assert_eq!(binary_name(b"V"), "void");
        assert_eq!(binary_name(b"LFoo;"), "Foo");
    }

    #[test]
    fn test_runtime_package() {
        assert_eq!(runtime_package(b"Ljava/lang/String;").as_bytes(), b"java/lang");
        assert_eq!(runtime_package(b"[[Ljava/util/Map;").as_bytes(), b"java/util");
        assert_eq!(runtime_package(b"La/B;").as_bytes(), b"a");
        assert!(runtime_package(b"LFoo;").is_empty());
        assert!(runtime_package(b"[I").is_empty());
        assert!(runtime_package(b"Z").is_empty());
    }

    // ========================================================================
    // TypeSymbols
    // ========================================================================

    #[test]
    fn test_parse_primitive_uses_cached_symbol() {
        let types = types();
        let a = types.parse(ByteView::new(b"(I)V"), 1, true).unwrap();
        assert_eq!(a, types.for_primitive(JavaKind::Int));
        let v = types.parse(ByteView::new(b"(I)V"), 3, true).unwrap();
        assert_eq!(v, types.for_primitive(JavaKind::Void));
    }

    #[test]
    fn test_parse_span_in_larger_buffer() {
        let types = types();
        let buf = b"([Ljava/lang/String;)V";
        let parsed = types.parse(ByteView::new(buf), 1, true).unwrap();
        assert_eq!(parsed.as_bytes(), b"[Ljava/lang/String;");
        assert_eq!(parsed, ty(&types, "[Ljava/lang/String;"));
        assert!(types.parse(ByteView::new(buf), 0, true).is_err());
    }

    #[test]
    fn test_symbol_queries() {
        let types = types();
        let arr = ty(&types, "[[J");
        assert!(arr.is_array());
        assert!(arr.is_reference());
        assert!(!arr.is_primitive());
        assert_eq!(arr.array_dimensions(), 2);
        assert_eq!(arr.kind(), JavaKind::Object);
        assert_eq!(types.kind_of(&ty(&types, "D")), JavaKind::Double);
        assert_eq!(ty(&types, "LFoo;").binary_name(), "Foo");
        assert_eq!(ty(&types, "Lp/q/R;").runtime_package().as_bytes(), b"p/q");
    }

    #[test]
    fn test_array_of() {
        let types = types();
        let int = types.for_primitive(JavaKind::Int);
        let arr = types.array_of(&int, 2).unwrap();
        assert_eq!(arr.as_bytes(), b"[[I");
        assert_eq!(arr, ty(&types, "[[I"));
        assert_eq!(types.array_of(&arr, 0).unwrap(), arr);

        let max = types.array_of(&int, MAX_ARRAY_DIMENSIONS).unwrap();
        assert_eq!(max.array_dimensions(), 255);
        assert_eq!(
            types.array_of(&max, 1),
            Err(ClassFormatError::ArrayTooDeep { dims: 256 })
        );
        assert!(types
            .array_of(&types.for_primitive(JavaKind::Void), 1)
            .is_err());
    }

    #[test]
    fn test_component_and_elemental() {
        let types = types();
        let arr = ty(&types, "[[Ljava/lang/Object;");
        let component = types.component_type(&arr).unwrap();
        assert_eq!(component.as_bytes(), b"[Ljava/lang/Object;");
        let elemental = types.elemental_type(&arr);
        assert_eq!(elemental, ty(&types, "Ljava/lang/Object;"));
        assert_eq!(types.component_type(&component), Some(elemental.clone()));
        assert_eq!(types.component_type(&elemental), None);
        assert_eq!(types.elemental_type(&elemental), elemental);

        let ints = ty(&types, "[I");
        assert_eq!(
            types.component_type(&ints),
            Some(types.for_primitive(JavaKind::Int))
        );
    }

    #[test]
    fn test_class_name_conversions() {
        let types = types();
        let interner = Arc::clone(types.interner());

        let name = interner.symbolify_name(ByteView::new(b"java/lang/String"));
        let string = types.from_class_name(&name).unwrap();
        assert_eq!(string.as_bytes(), b"Ljava/lang/String;");
        assert_eq!(types.to_class_name(&string), Some(name));

        let array_name = interner.symbolify_name(ByteView::new(b"[I"));
        let array = types.from_class_name(&array_name).unwrap();
        assert!(array.ptr_eq(&array_name));
        assert_eq!(types.to_class_name(&array), Some(array_name));

        assert_eq!(types.to_class_name(&types.for_primitive(JavaKind::Int)), None);

        let bad = interner.symbolify_name(ByteView::new(b"java;lang"));
        assert!(matches!(
            types.from_class_name(&bad),
            Err(ClassFormatError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_internal_from_class_name() {
        let types = types();
        assert_eq!(
            types.internal_from_class_name("java.lang.String").unwrap(),
            ty(&types, "Ljava/lang/String;")
        );
        assert_eq!(
            types.internal_from_class_name("int").unwrap(),
            types.for_primitive(JavaKind::Int)
        );
        assert_eq!(
            types.internal_from_class_name("[Ljava.lang.Object;").unwrap(),
            ty(&types, "[Ljava/lang/Object;")
        );
        assert!(types.internal_from_class_name("").is_err());
        assert!(types.internal_from_class_name("a..b").is_err());
    }

    #[test]
    fn test_from_name_checked() {
        let types = types();
        let interner = Arc::clone(types.interner());
        let good = interner.symbolify_name(ByteView::new(b"[J"));
        assert!(types.from_name_checked(&good).is_ok());
        let bad = interner.symbolify_name(ByteView::new(b"java/lang/Object"));
        assert!(types.from_name_checked(&bad).is_err());
    }

    #[test]
    fn test_lookup_and_get_or_create() {
        let types = types();
        assert!(types.lookup_valid_type(ByteView::new(b"LNope;")).is_none());
        assert!(types.lookup_valid_type(ByteView::new(b"bogus")).is_none());
        assert!(types.lookup_valid_type(ByteView::new(b"J")).is_some());

        let created = types
            .get_or_create_valid_type(ByteView::new(b"LNope;"))
            .unwrap();
        assert_eq!(types.lookup_valid_type(ByteView::new(b"LNope;")), Some(created));
        assert!(types.get_or_create_valid_type(ByteView::new(b"LNope")).is_err());
        assert!(!types.interner().contains(ByteView::new(b"LNope")));
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// A randomly generated valid descriptor
    #[derive(Clone, Debug)]
    struct ValidDescriptor(String);

    impl Arbitrary for ValidDescriptor {
        fn arbitrary(g: &mut Gen) -> Self {
            const ELEMENTS: &[&str] = &[
                "Z", "B", "S", "C", "I", "F", "J", "D",
                "Ljava/lang/Object;", "LFoo;", "Lp/q/r/Name$Inner;",
            ];
            let dims = usize::arbitrary(g) % 4;
            let element = g.choose(ELEMENTS).copied().unwrap_or("I");
            ValidDescriptor(format!("{}{}", "[".repeat(dims), element))
        }
    }

    #[quickcheck]
    fn prop_descriptor_round_trip(desc: ValidDescriptor) -> bool {
        let types = types();
        let parsed = types.parse(ByteView::new(desc.0.as_bytes()), 0, true).unwrap();
        parsed.to_string() == desc.0
    }

    #[quickcheck]
    fn prop_array_of_then_component(desc: ValidDescriptor) -> bool {
        let types = types();
        let element = ty(&types, &desc.0);
        let arr = types.array_of(&element, 1).unwrap();
        types.component_type(&arr) == Some(element)
    }
}
