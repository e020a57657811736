//! Value kinds of the JVM type system.

use std::fmt;

/// The kind of a value as seen by the interpreter and the calling convention: one of the
/// eight primitives, a reference, or `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JavaKind {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Float,
    Long,
    Double,
    Object,
    Void,
}

impl JavaKind {
    /// The nine kinds with a single-character descriptor, in descriptor-table order
    pub const PRIMITIVES: [JavaKind; 9] = [
        JavaKind::Boolean,
        JavaKind::Byte,
        JavaKind::Short,
        JavaKind::Char,
        JavaKind::Int,
        JavaKind::Float,
        JavaKind::Long,
        JavaKind::Double,
        JavaKind::Void,
    ];

    /// Kind for a single primitive descriptor character
    pub const fn from_primitive_char(c: u8) -> Option<JavaKind> {
        match c {
            b'Z' => Some(JavaKind::Boolean),
            b'B' => Some(JavaKind::Byte),
            b'S' => Some(JavaKind::Short),
            b'C' => Some(JavaKind::Char),
            b'I' => Some(JavaKind::Int),
            b'F' => Some(JavaKind::Float),
            b'J' => Some(JavaKind::Long),
            b'D' => Some(JavaKind::Double),
            b'V' => Some(JavaKind::Void),
            _ => None,
        }
    }

    /// Kind of the field type whose descriptor starts with `c`
    pub const fn from_type_char(c: u8) -> Option<JavaKind> {
        match c {
            b'L' | b'[' => Some(JavaKind::Object),
            _ => Self::from_primitive_char(c),
        }
    }

    /// Primitive kind for a Java-language type name (`int`, `boolean`, ...)
    pub fn from_java_name(name: &str) -> Option<JavaKind> {
        Self::PRIMITIVES
            .into_iter()
            .find(|kind| kind.java_name() == name)
    }

    /// Position in [`JavaKind::PRIMITIVES`]
    pub const fn primitive_index(self) -> Option<usize> {
        match self {
            JavaKind::Boolean => Some(0),
            JavaKind::Byte => Some(1),
            JavaKind::Short => Some(2),
            JavaKind::Char => Some(3),
            JavaKind::Int => Some(4),
            JavaKind::Float => Some(5),
            JavaKind::Long => Some(6),
            JavaKind::Double => Some(7),
            JavaKind::Void => Some(8),
            JavaKind::Object => None,
        }
    }

    /// Descriptor character; `L` for [`JavaKind::Object`]
    pub const fn type_char(self) -> u8 {
        match self {
            JavaKind::Boolean => b'Z',
            JavaKind::Byte => b'B',
            JavaKind::Short => b'S',
            JavaKind::Char => b'C',
            JavaKind::Int => b'I',
            JavaKind::Float => b'F',
            JavaKind::Long => b'J',
            JavaKind::Double => b'D',
            JavaKind::Object => b'L',
            JavaKind::Void => b'V',
        }
    }

    /// Java-language spelling
    pub const fn java_name(self) -> &'static str {
        match self {
            JavaKind::Boolean => "boolean",
            JavaKind::Byte => "byte",
            JavaKind::Short => "short",
            JavaKind::Char => "char",
            JavaKind::Int => "int",
            JavaKind::Float => "float",
            JavaKind::Long => "long",
            JavaKind::Double => "double",
            JavaKind::Object => "Object",
            JavaKind::Void => "void",
        }
    }

    /// Everything with a single-character descriptor, `void` included
    #[inline]
    pub const fn is_primitive(self) -> bool {
        !matches!(self, JavaKind::Object)
    }

    #[inline]
    pub const fn is_object(self) -> bool {
        matches!(self, JavaKind::Object)
    }

    /// `long` and `double` take two local-variable slots
    #[inline]
    pub const fn needs_two_slots(self) -> bool {
        matches!(self, JavaKind::Long | JavaKind::Double)
    }

    /// Kinds the operand stack represents as an `int`
    #[inline]
    pub const fn is_stack_int(self) -> bool {
        matches!(
            self,
            JavaKind::Boolean | JavaKind::Byte | JavaKind::Short | JavaKind::Char | JavaKind::Int
        )
    }

    /// Kind after erasure to the basic calling convention.
    ///
    /// Sub-word integers become `Int`; everything else is unchanged.
    #[inline]
    pub const fn basic_kind(self) -> JavaKind {
        if self.is_stack_int() {
            JavaKind::Int
        } else {
            self
        }
    }
}

impl fmt::Display for JavaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_chars_round_trip() {
        for (i, kind) in JavaKind::PRIMITIVES.into_iter().enumerate() {
            assert_eq!(JavaKind::from_primitive_char(kind.type_char()), Some(kind));
            assert_eq!(kind.primitive_index(), Some(i));
        }
        assert_eq!(JavaKind::Object.primitive_index(), None);
        assert_eq!(JavaKind::from_primitive_char(b'L'), None);
        assert_eq!(JavaKind::from_primitive_char(b'X'), None);
        assert_eq!(JavaKind::from_type_char(b'['), Some(JavaKind::Object));
    }

    #[test]
    fn test_java_names() {
        assert_eq!(JavaKind::from_java_name("int"), Some(JavaKind::Int));
        assert_eq!(JavaKind::from_java_name("void"), Some(JavaKind::Void));
        assert_eq!(JavaKind::from_java_name("Object"), None);
        assert_eq!(JavaKind::Boolean.to_string(), "boolean");
    }

    #[test]
    fn test_slots() {
        assert!(JavaKind::Long.needs_two_slots());
        assert!(JavaKind::Double.needs_two_slots());
        assert!(!JavaKind::Float.needs_two_slots());
    }

    #[test]
    fn test_basic_kind() {
        assert_eq!(JavaKind::Char.basic_kind(), JavaKind::Int);
        assert_eq!(JavaKind::Boolean.basic_kind(), JavaKind::Int);
        assert_eq!(JavaKind::Long.basic_kind(), JavaKind::Long);
        assert_eq!(JavaKind::Object.basic_kind(), JavaKind::Object);
        assert!(JavaKind::Void.is_primitive());
        assert!(!JavaKind::Object.is_primitive());
        assert!(JavaKind::Float.is_primitive());
    }
}
