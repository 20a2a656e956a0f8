//! Descriptors for classes, interfaces, arrays, and primitive types.

use std::{
    fmt::Display,
    str::{Chars, FromStr},
};

use itertools::Itertools;

use crate::macros::see_jvm_spec;

use super::InvalidDescriptor;

/// A primitive type in the JVM, including `void`.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    Boolean,
    /// The `char` type.
    Char,
    /// The `float` type.
    Float,
    /// The `double` type.
    Double,
    /// The `byte` type.
    Byte,
    /// The `short` type.
    Short,
    /// The `int` type.
    Int,
    /// The `long` type.
    Long,
    /// The `void` pseudo-type. Only valid as a return type.
    Void,
}

impl PrimitiveType {
    /// Returns the descriptor character of the type (e.g., `I` for `int`).
    #[must_use]
    pub const fn descriptor(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Void => 'V',
        }
    }

    /// Returns the name of the type as it appears in source code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Void => "void",
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            'V' => Ok(Self::Void),
            unexpected => Err(InvalidDescriptor::Syntax(unexpected.to_string())),
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A nominal descriptor for a class, interface, array, or primitive type.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum ClassDesc {
    /// A primitive type, including `void`.
    Primitive(PrimitiveType),
    /// A class or interface.
    Object {
        /// The internal binary name of the class or interface
        /// (e.g., `java/lang/Object`).
        binary_name: String,
    },
    /// An array type.
    Array(Box<ClassDesc>),
}

impl ClassDesc {
    /// Creates a descriptor for a class or interface from its fully qualified
    /// dotted name (e.g., `java.lang.Object`).
    /// # Errors
    /// [`InvalidDescriptor::Syntax`] if a name segment is empty or contains a
    /// forbidden character.
    pub fn of(name: &str) -> Result<Self, InvalidDescriptor> {
        validate_class_name(name, '.')?;
        Ok(Self::Object {
            binary_name: name.replace('.', "/"),
        })
    }

    /// Creates a descriptor for a class or interface from its internal binary
    /// name (e.g., `java/lang/Object`).
    /// # Errors
    /// [`InvalidDescriptor::Syntax`] if a name segment is empty or contains a
    /// forbidden character.
    pub fn of_internal_name(name: &str) -> Result<Self, InvalidDescriptor> {
        validate_class_name(name, '/')?;
        Ok(Self::Object {
            binary_name: name.to_owned(),
        })
    }

    /// Creates a descriptor from a field descriptor string (e.g., `I`,
    /// `Ljava/lang/String;`, or `[[D`).
    /// # Errors
    /// See [`InvalidDescriptor`] for more information.
    pub fn of_descriptor(descriptor: &str) -> Result<Self, InvalidDescriptor> {
        descriptor.parse()
    }

    /// Creates a descriptor for a nested class of this class, named by
    /// appending `$` and the simple name to this class's binary name.
    /// # Errors
    /// [`InvalidDescriptor::Syntax`] if this descriptor does not name a class
    /// or interface, or if `simple_name` is not a valid unqualified name.
    pub fn inner(&self, simple_name: &str) -> Result<Self, InvalidDescriptor> {
        let Self::Object { binary_name } = self else {
            return Err(InvalidDescriptor::Syntax(self.descriptor()));
        };
        if !is_valid_segment(simple_name) {
            return Err(InvalidDescriptor::Syntax(simple_name.to_owned()));
        }
        Ok(Self::Object {
            binary_name: format!("{binary_name}${simple_name}"),
        })
    }

    /// Returns a descriptor for the array type whose component type is this
    /// type.
    #[must_use]
    pub fn array_type(&self) -> Self {
        Self::Array(Box::new(self.clone()))
    }

    /// Returns the component type if this descriptor names an array type.
    #[must_use]
    pub fn component_type(&self) -> Option<&Self> {
        match self {
            Self::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Whether this descriptor names a primitive type (including `void`).
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Whether this descriptor is the `void` descriptor.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Void))
    }

    /// Whether this descriptor names an array type.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Whether this descriptor names a class or interface.
    #[must_use]
    pub const fn is_class_or_interface(&self) -> bool {
        matches!(self, Self::Object { .. })
    }

    /// Returns the field descriptor string of this type.
    #[doc = see_jvm_spec!(4, 3, 2)]
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            Self::Primitive(primitive) => primitive.descriptor().to_string(),
            Self::Object { binary_name } => format!("L{binary_name};"),
            Self::Array(component) => format!("[{}", component.descriptor()),
        }
    }

    /// Returns a human-readable name: the simple name of a class, the source
    /// name of a primitive, or the component's display name followed by `[]`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Primitive(primitive) => primitive.name().to_owned(),
            Self::Object { binary_name } => binary_name
                .rsplit('/')
                .next()
                .unwrap_or(binary_name)
                .to_owned(),
            Self::Array(component) => format!("{}[]", component.display_name()),
        }
    }

    /// Parses a single type starting at `prefix` and advances the iterator
    /// past the remainder of that type. For an input as follows.
    /// ```text
    ///   L      java/lang/String;IJB
    ///   ^      ^
    ///   prefix remaining
    /// ```
    /// It returns an object descriptor for `java/lang/String` and leaves
    /// `remaining` at `IJB`.
    pub(crate) fn parse_single(
        prefix: char,
        remaining: &mut Chars<'_>,
    ) -> Result<Self, InvalidDescriptor> {
        if let Ok(primitive) = PrimitiveType::try_from(prefix) {
            Ok(Self::Primitive(primitive))
        } else {
            match prefix {
                'L' => {
                    let binary_name: String = remaining.take_while_ref(|c| *c != ';').collect();
                    match remaining.next() {
                        Some(';') => {
                            validate_class_name(&binary_name, '/')?;
                            Ok(Self::Object { binary_name })
                        }
                        _ => Err(InvalidDescriptor::Syntax(binary_name)),
                    }
                }
                '[' => {
                    let next_prefix = remaining
                        .next()
                        .ok_or_else(|| InvalidDescriptor::Syntax("[".to_owned()))?;
                    let component = Self::parse_single(next_prefix, remaining)?;
                    if component.is_void() {
                        Err(InvalidDescriptor::VoidType)
                    } else {
                        Ok(Self::Array(Box::new(component)))
                    }
                }
                unexpected => Err(InvalidDescriptor::Syntax(unexpected.to_string())),
            }
        }
    }
}

impl FromStr for ClassDesc {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let mut chars = descriptor.chars();
        let prefix = chars
            .next()
            .ok_or_else(|| InvalidDescriptor::Syntax(descriptor.to_owned()))?;
        let result = Self::parse_single(prefix, &mut chars)
            .map_err(|_| InvalidDescriptor::Syntax(descriptor.to_owned()))?;
        if chars.next().is_none() {
            Ok(result)
        } else {
            Err(InvalidDescriptor::Syntax(descriptor.to_owned()))
        }
    }
}

impl Display for ClassDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(primitive) => primitive.fmt(f),
            Self::Object { binary_name } => write!(f, "{}", binary_name.replace('/', ".")),
            Self::Array(component) => write!(f, "{component}[]"),
        }
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(['.', ';', '[', '/'])
}

fn validate_class_name(name: &str, separator: char) -> Result<(), InvalidDescriptor> {
    if !name.is_empty() && name.split(separator).all(is_valid_segment) {
        Ok(())
    } else {
        Err(InvalidDescriptor::Syntax(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::*;
    use crate::tests::arb_class_name;

    #[test]
    fn parse_primitive_types() {
        let descriptors = ['Z', 'C', 'F', 'D', 'B', 'S', 'I', 'J', 'V'];
        let mut types = descriptors
            .into_iter()
            .map(PrimitiveType::try_from)
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to parse primitive types")
            .into_iter();
        assert_eq!(types.next(), Some(PrimitiveType::Boolean));
        assert_eq!(types.next(), Some(PrimitiveType::Char));
        assert_eq!(types.next(), Some(PrimitiveType::Float));
        assert_eq!(types.next(), Some(PrimitiveType::Double));
        assert_eq!(types.next(), Some(PrimitiveType::Byte));
        assert_eq!(types.next(), Some(PrimitiveType::Short));
        assert_eq!(types.next(), Some(PrimitiveType::Int));
        assert_eq!(types.next(), Some(PrimitiveType::Long));
        assert_eq!(types.next(), Some(PrimitiveType::Void));
    }

    #[test]
    fn parse_invalid_primitive_type() {
        assert!(PrimitiveType::try_from('A').is_err());
    }

    #[test]
    fn parse_class_descriptors() {
        let string_type = ClassDesc::Object {
            binary_name: "java/lang/String".to_owned(),
        };
        assert_eq!(
            ClassDesc::of_descriptor("I"),
            Ok(ClassDesc::Primitive(PrimitiveType::Int))
        );
        assert_eq!(
            ClassDesc::from_str("Ljava/lang/String;"),
            Ok(string_type.clone())
        );
        assert_eq!(
            ClassDesc::from_str("[I"),
            Ok(ClassDesc::Primitive(PrimitiveType::Int).array_type())
        );
        assert_eq!(
            ClassDesc::from_str("[[Ljava/lang/String;"),
            Ok(string_type.array_type().array_type())
        );
    }

    #[test]
    fn missing_semicolon() {
        assert!(ClassDesc::from_str("Ljava/lang/String").is_err());
    }

    #[test]
    fn trailing_characters() {
        assert!(ClassDesc::from_str("Ljava/lang/String;A").is_err());
        assert!(ClassDesc::from_str("IJ").is_err());
    }

    #[test]
    fn array_of_void_is_rejected() {
        assert!(ClassDesc::from_str("[V").is_err());
        assert!(ClassDesc::from_str("[[V").is_err());
    }

    #[test]
    fn of_dotted_name() {
        let desc = ClassDesc::of("java.lang.Object").expect("Valid class name");
        assert_eq!(desc.descriptor(), "Ljava/lang/Object;");
        assert_eq!(desc.to_string(), "java.lang.Object");
    }

    #[test]
    fn of_rejects_malformed_names() {
        for name in ["", ".", "java..lang", "java.lang.Obj;ect", "a.b[c"] {
            assert!(ClassDesc::of(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn inner_class() {
        let outer = ClassDesc::of("java.lang.invoke.MethodHandles").expect("Valid class name");
        let inner = outer.inner("Lookup").expect("Valid simple name");
        assert_eq!(
            inner.descriptor(),
            "Ljava/lang/invoke/MethodHandles$Lookup;"
        );
    }

    #[test]
    fn inner_of_primitive_is_rejected() {
        assert!(
            ClassDesc::Primitive(PrimitiveType::Int)
                .inner("Lookup")
                .is_err()
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(
            ClassDesc::of("java.lang.String")
                .expect("Valid class name")
                .display_name(),
            "String"
        );
        assert_eq!(
            ClassDesc::Primitive(PrimitiveType::Int)
                .array_type()
                .display_name(),
            "int[]"
        );
    }

    proptest! {
        #[test]
        fn descriptor_round_trip(desc in crate::tests::arb_value_class_desc()) {
            let parsed = ClassDesc::from_str(&desc.descriptor()).expect("Failed to parse descriptor");
            prop_assert_eq!(parsed, desc);
        }

        #[test]
        fn internal_name_round_trip(name in arb_class_name()) {
            let desc = ClassDesc::of_internal_name(&name).expect("Failed to parse internal name");
            prop_assert_eq!(desc.descriptor(), format!("L{name};"));
        }
    }
}
