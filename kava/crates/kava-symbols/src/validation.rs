//! Name validation for the class-file format.
//!
//! Class names are stored in internal form (`java/lang/Thread$State`), fields and methods use
//! unqualified names. Array classes are named by their descriptor (`[Ljava/lang/String;`).

use crate::error::{ClassFormatError, ClassFormatResult};
use crate::types;

/// Non-empty, and free of `.`, `;`, `[` and `/`.
///
/// # Examples
///
/// ```
/// use kava_symbols::validation::is_valid_unqualified_name;
///
/// assert!(is_valid_unqualified_name(b"value"));
/// assert!(!is_valid_unqualified_name(b"java/lang"));
/// assert!(!is_valid_unqualified_name(b""));
/// ```
pub fn is_valid_unqualified_name(name: &[u8]) -> bool {
    !name.is_empty() && !name.iter().any(|b| matches!(b, b'.' | b';' | b'[' | b'/'))
}

/// Field names follow the unqualified-name rule
#[inline]
pub fn is_valid_field_name(name: &[u8]) -> bool {
    is_valid_unqualified_name(name)
}

/// An unqualified name that also avoids `<` and `>`, except for the two special names
/// `<init>` and `<clinit>`.
pub fn is_valid_method_name(name: &[u8]) -> bool {
    if name == b"<init>" || name == b"<clinit>" {
        return true;
    }
    is_valid_unqualified_name(name) && !name.iter().any(|b| matches!(b, b'<' | b'>'))
}

/// A class name in internal form: slash-separated unqualified segments, or a valid array
/// descriptor.
pub fn is_valid_binary_name(name: &[u8]) -> bool {
    if name.first() == Some(&b'[') {
        return types::is_valid_type(name) && types::array_dimensions(name) > 0;
    }
    !name.is_empty() && name.split(|&b| b == b'/').all(is_valid_unqualified_name)
}

/// Whether `name` can be turned into a field descriptor.
///
/// Array names qualify when they are well-formed descriptors, plain class names when every
/// segment is a valid unqualified name.
pub fn is_valid_class_name_for_type(name: &[u8]) -> bool {
    is_valid_binary_name(name)
}

/// [`is_valid_binary_name`] reporting a [`ClassFormatError::InvalidName`] on failure
pub fn check_class_name(name: &[u8]) -> ClassFormatResult<()> {
    if is_valid_class_name_for_type(name) {
        Ok(())
    } else {
        Err(invalid_name(name))
    }
}

pub(crate) fn invalid_name(name: &[u8]) -> ClassFormatError {
    ClassFormatError::InvalidName {
        name: String::from_utf8_lossy(name).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified_names() {
        assert!(is_valid_unqualified_name(b"x"));
        assert!(is_valid_unqualified_name(b"$outer"));
        assert!(is_valid_unqualified_name(b"<init>"));
        let bad: [&[u8]; 5] = [b"", b"a.b", b"a;", b"[a", b"a/b"];
        for name in bad {
            assert!(!is_valid_unqualified_name(name), "{:?}", name);
        }
    }

    #[test]
    fn test_method_names() {
        assert!(is_valid_method_name(b"<init>"));
        assert!(is_valid_method_name(b"<clinit>"));
        assert!(is_valid_method_name(b"invokeExact"));
        assert!(!is_valid_method_name(b"<foo>"));
        assert!(!is_valid_method_name(b"a<b"));
        assert!(!is_valid_method_name(b"a/b"));
    }

    #[test]
    fn test_binary_names() {
        assert!(is_valid_binary_name(b"java/lang/Object"));
        assert!(is_valid_binary_name(b"Foo"));
        assert!(is_valid_binary_name(b"java/lang/Thread$State"));
        assert!(is_valid_binary_name(b"[I"));
        assert!(is_valid_binary_name(b"[[Ljava/lang/String;"));

        assert!(!is_valid_binary_name(b""));
        assert!(!is_valid_binary_name(b"java//Object"));
        assert!(!is_valid_binary_name(b"/java"));
        assert!(!is_valid_binary_name(b"java/"));
        assert!(!is_valid_binary_name(b"java.lang.Object"));
        assert!(!is_valid_binary_name(b"[Ljava/lang/String"));
        assert!(!is_valid_binary_name(b"[V"));
    }

    #[test]
    fn test_check_class_name() {
        assert!(check_class_name(b"java/util/List").is_ok());
        assert_eq!(
            check_class_name(b"a;b"),
            Err(ClassFormatError::InvalidName { name: "a;b".into() })
        );
    }
}
