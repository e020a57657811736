//! Catalog of well-known symbols.
//!
//! Names, types and signatures the runtime refers to by identity (constructors, boxes,
//! exception classes, `java/lang/invoke` entry points, class-file attribute names) are
//! registered once in a [`BootstrapRegistry`] and frozen. Every [`SymbolTable`] seeded from
//! the catalog hands out these same allocations, so runtime code can compare against them
//! with a pointer check.
//!
//! [`SymbolTable`]: crate::SymbolTable

use std::sync::LazyLock;

use crate::interner::FrozenSeed;
use crate::registry::BootstrapRegistry;
use crate::symbol::{Name, Signature, Symbol, Type};

macro_rules! well_known_names {
    ($($field:ident => $text:literal),* $(,)?) => {
        /// Well-known class, field, method and attribute names
        #[derive(Debug, Clone)]
        pub struct WellKnownNames {
            $(pub $field: Symbol<Name>,)*
        }

        impl WellKnownNames {
            /// Number of entries
            pub const COUNT: usize = [$($text),*].len();

            fn register(registry: &BootstrapRegistry) -> Self {
                Self {
                    $($field: registry.put_name($text),)*
                }
            }
        }
    };
}

macro_rules! well_known_types {
    ($($field:ident => $text:literal),* $(,)?) => {
        /// Well-known field descriptors
        #[derive(Debug, Clone)]
        pub struct WellKnownTypes {
            $(pub $field: Symbol<Type>,)*
        }

        impl WellKnownTypes {
            /// Number of entries
            pub const COUNT: usize = [$($text),*].len();

            fn register(registry: &BootstrapRegistry) -> Self {
                Self {
                    $($field: registry.put_type($text),)*
                }
            }
        }
    };
}

macro_rules! well_known_signatures {
    ($($field:ident => $ret:ident($($param:ident),*)),* $(,)?) => {
        /// Well-known method descriptors, named `<return>_<parameters>`
        #[derive(Debug, Clone)]
        pub struct WellKnownSignatures {
            $(pub $field: Symbol<Signature>,)*
        }

        impl WellKnownSignatures {
            /// Number of entries
            pub const COUNT: usize = [$(stringify!($field)),*].len();

            fn register(registry: &BootstrapRegistry, types: &WellKnownTypes) -> Self {
                Self {
                    $($field: registry.put_signature(&types.$ret, &[$(&types.$param),*]),)*
                }
            }
        }
    };
}

well_known_names! {
    // Special methods
    init => "<init>",
    clinit => "<clinit>",
    main => "main",
    finalize => "finalize",

    // Object
    equals => "equals",
    hash_code => "hashCode",
    to_string => "toString",
    get_class => "getClass",
    clone => "clone",
    this => "this",
    value => "value",
    hash => "hash",
    name => "name",
    run => "run",

    // Boxing
    value_of => "valueOf",
    boolean_value => "booleanValue",
    byte_value => "byteValue",
    char_value => "charValue",
    short_value => "shortValue",
    int_value => "intValue",
    long_value => "longValue",
    float_value => "floatValue",
    double_value => "doubleValue",

    // Throwable
    get_message => "getMessage",
    get_cause => "getCause",
    fill_in_stack_trace => "fillInStackTrace",
    print_stack_trace => "printStackTrace",
    stack_trace => "stackTrace",

    // Class loading
    load_class => "loadClass",
    get_system_class_loader => "getSystemClassLoader",
    parent => "parent",
    module => "module",
    modifiers => "modifiers",
    signature => "signature",
    java_base => "java.base",
    enum_values => "$VALUES",

    // Method handles
    invoke => "invoke",
    invoke_exact => "invokeExact",
    invoke_basic => "invokeBasic",
    invoke_with_arguments => "invokeWithArguments",
    link_to_virtual => "linkToVirtual",
    link_to_static => "linkToStatic",
    link_to_special => "linkToSpecial",
    link_to_interface => "linkToInterface",
    link_to_native => "linkToNative",
    link_call_site => "linkCallSite",
    link_method_handle_constant => "linkMethodHandleConstant",
    lookup => "lookup",
    metafactory => "metafactory",
    member_name => "memberName",

    // Attributes
    code => "Code",
    constant_value => "ConstantValue",
    exceptions => "Exceptions",
    source_file => "SourceFile",
    line_number_table => "LineNumberTable",
    local_variable_table => "LocalVariableTable",
    stack_map_table => "StackMapTable",
    inner_classes => "InnerClasses",
    enclosing_method => "EnclosingMethod",
    signature_attribute => "Signature",
    bootstrap_methods => "BootstrapMethods",
    method_parameters => "MethodParameters",
    permitted_subclasses => "PermittedSubclasses",
    synthetic => "Synthetic",
    deprecated => "Deprecated",
    runtime_visible_annotations => "RuntimeVisibleAnnotations",
}

well_known_types! {
    // Primitives
    boolean => "Z",
    byte => "B",
    char => "C",
    short => "S",
    int => "I",
    float => "F",
    double => "D",
    long => "J",
    void => "V",

    // Primitive arrays
    boolean_array => "[Z",
    byte_array => "[B",
    char_array => "[C",
    short_array => "[S",
    int_array => "[I",
    float_array => "[F",
    double_array => "[D",
    long_array => "[J",

    // java.lang
    object => "Ljava/lang/Object;",
    object_array => "[Ljava/lang/Object;",
    string => "Ljava/lang/String;",
    string_array => "[Ljava/lang/String;",
    char_sequence => "Ljava/lang/CharSequence;",
    class => "Ljava/lang/Class;",
    class_array => "[Ljava/lang/Class;",
    class_loader => "Ljava/lang/ClassLoader;",
    cloneable => "Ljava/lang/Cloneable;",
    serializable => "Ljava/io/Serializable;",
    enum_ => "Ljava/lang/Enum;",
    record => "Ljava/lang/Record;",
    system => "Ljava/lang/System;",
    thread => "Ljava/lang/Thread;",
    thread_group => "Ljava/lang/ThreadGroup;",

    // Boxes
    boolean_box => "Ljava/lang/Boolean;",
    byte_box => "Ljava/lang/Byte;",
    character_box => "Ljava/lang/Character;",
    short_box => "Ljava/lang/Short;",
    integer_box => "Ljava/lang/Integer;",
    float_box => "Ljava/lang/Float;",
    double_box => "Ljava/lang/Double;",
    long_box => "Ljava/lang/Long;",
    void_box => "Ljava/lang/Void;",
    number => "Ljava/lang/Number;",

    // Throwables
    throwable => "Ljava/lang/Throwable;",
    exception => "Ljava/lang/Exception;",
    runtime_exception => "Ljava/lang/RuntimeException;",
    error => "Ljava/lang/Error;",
    null_pointer_exception => "Ljava/lang/NullPointerException;",
    class_cast_exception => "Ljava/lang/ClassCastException;",
    array_store_exception => "Ljava/lang/ArrayStoreException;",
    arithmetic_exception => "Ljava/lang/ArithmeticException;",
    illegal_argument_exception => "Ljava/lang/IllegalArgumentException;",
    illegal_state_exception => "Ljava/lang/IllegalStateException;",
    array_index_out_of_bounds_exception => "Ljava/lang/ArrayIndexOutOfBoundsException;",
    negative_array_size_exception => "Ljava/lang/NegativeArraySizeException;",
    clone_not_supported_exception => "Ljava/lang/CloneNotSupportedException;",
    unsupported_operation_exception => "Ljava/lang/UnsupportedOperationException;",
    interrupted_exception => "Ljava/lang/InterruptedException;",
    class_not_found_exception => "Ljava/lang/ClassNotFoundException;",
    linkage_error => "Ljava/lang/LinkageError;",
    class_format_error => "Ljava/lang/ClassFormatError;",
    no_class_def_found_error => "Ljava/lang/NoClassDefFoundError;",
    incompatible_class_change_error => "Ljava/lang/IncompatibleClassChangeError;",
    abstract_method_error => "Ljava/lang/AbstractMethodError;",
    no_such_field_error => "Ljava/lang/NoSuchFieldError;",
    no_such_method_error => "Ljava/lang/NoSuchMethodError;",
    exception_in_initializer_error => "Ljava/lang/ExceptionInInitializerError;",
    bootstrap_method_error => "Ljava/lang/BootstrapMethodError;",
    stack_overflow_error => "Ljava/lang/StackOverflowError;",
    out_of_memory_error => "Ljava/lang/OutOfMemoryError;",

    // java.lang.invoke
    method_type => "Ljava/lang/invoke/MethodType;",
    method_handle => "Ljava/lang/invoke/MethodHandle;",
    method_handles => "Ljava/lang/invoke/MethodHandles;",
    method_handles_lookup => "Ljava/lang/invoke/MethodHandles$Lookup;",
    var_handle => "Ljava/lang/invoke/VarHandle;",
    call_site => "Ljava/lang/invoke/CallSite;",
    member_name => "Ljava/lang/invoke/MemberName;",
    lambda_form => "Ljava/lang/invoke/LambdaForm;",
    lambda_metafactory => "Ljava/lang/invoke/LambdaMetafactory;",
    method_handle_natives => "Ljava/lang/invoke/MethodHandleNatives;",
    resolved_method_name => "Ljava/lang/invoke/ResolvedMethodName;",

    // java.lang.reflect
    method => "Ljava/lang/reflect/Method;",
    field => "Ljava/lang/reflect/Field;",
    constructor => "Ljava/lang/reflect/Constructor;",
}

well_known_signatures! {
    // No arguments
    void => void(),
    boolean => boolean(),
    byte => byte(),
    char => char(),
    short => short(),
    int => int(),
    float => float(),
    double => double(),
    long => long(),
    object => object(),
    string => string(),
    class => class(),
    throwable => throwable(),

    // Returning void
    void_boolean => void(boolean),
    void_int => void(int),
    void_long => void(long),
    void_object => void(object),
    void_string => void(string),
    void_throwable => void(throwable),
    void_string_throwable => void(string, throwable),
    void_string_array => void(string_array),

    // Object methods
    boolean_object => boolean(object),
    string_object => string(object),
    object_object => object(object),
    object_object_array => object(object_array),
    class_string => class(string),

    // Boxing
    boolean_box_boolean => boolean_box(boolean),
    byte_box_byte => byte_box(byte),
    character_box_char => character_box(char),
    short_box_short => short_box(short),
    integer_box_int => integer_box(int),
    float_box_float => float_box(float),
    double_box_double => double_box(double),
    long_box_long => long_box(long),

    // Method handles
    method_type_class_class_array => method_type(class, class_array),
    object_object_int_object_array => object(object, int, object_array),
}

/// The frozen catalog together with typed handles to each entry.
///
/// # Examples
///
/// ```
/// use kava_symbols::{ByteSequence, WellKnownSymbols};
///
/// let well_known = WellKnownSymbols::global();
/// assert_eq!(well_known.names.init.as_bytes(), b"<init>");
/// assert_eq!(well_known.types.object.as_bytes(), b"Ljava/lang/Object;");
/// assert_eq!(well_known.signatures.void.as_bytes(), b"()V");
/// assert!(well_known.registry().is_frozen());
/// ```
#[derive(Debug)]
pub struct WellKnownSymbols {
    pub names: WellKnownNames,
    pub types: WellKnownTypes,
    pub signatures: WellKnownSignatures,
    registry: BootstrapRegistry,
}

static GLOBAL: LazyLock<WellKnownSymbols> = LazyLock::new(WellKnownSymbols::bootstrap);

impl WellKnownSymbols {
    /// Register the catalog in a fresh registry and freeze it.
    pub fn bootstrap() -> Self {
        Self::with_registry(BootstrapRegistry::new())
    }

    /// Register the catalog in `registry` and freeze it.
    ///
    /// `registry` may already hold other symbols, e.g. when it was
    /// [derived](BootstrapRegistry::derived) from a lower-level catalog.
    ///
    /// # Panics
    ///
    /// Panics if `registry` is already frozen.
    pub fn with_registry(registry: BootstrapRegistry) -> Self {
        let names = WellKnownNames::register(&registry);
        let types = WellKnownTypes::register(&registry);
        let signatures = WellKnownSignatures::register(&registry, &types);
        registry.freeze();
        Self {
            names,
            types,
            signatures,
            registry,
        }
    }

    /// Process-wide catalog, built on first use
    pub fn global() -> &'static WellKnownSymbols {
        &GLOBAL
    }

    #[inline]
    pub fn registry(&self) -> &BootstrapRegistry {
        &self.registry
    }

    /// Frozen table to seed per-runtime interners from
    #[inline]
    pub fn seed(&self) -> FrozenSeed<'_> {
        self.registry.seed()
    }
}
