//! Nominal descriptors for entities in the JVM constant pool.
//!
//! A descriptor describes a class, a method type, a method handle, or a
//! dynamically-computed constant as an immutable value that is compared and
//! hashed structurally. Descriptors only *name* runtime entities; turning a
//! descriptor into the live entity it denotes is a resolution step performed
//! elsewhere.

pub mod class;
pub mod constant;
pub mod dynamic;
pub mod method_handle;
pub mod method_type;

pub use class::{ClassDesc, PrimitiveType};
pub use constant::ConstantDesc;
pub use dynamic::DynamicConstantDesc;
pub use method_handle::{BoundMethodHandleDesc, DirectMethodHandleDesc, Kind, MethodHandleDesc};
pub use method_type::MethodTypeDesc;

use crate::macros::see_jvm_spec;

/// The name of a constructor.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// The name of a static initializer block.
pub const CLASS_INITIALIZER_NAME: &str = "<clinit>";

/// The invocation name to use when no name is needed, such as the name of a
/// dynamic constant whose bootstrap method ignores the invocation name.
pub const DEFAULT_NAME: &str = "_";

/// An error raised when constructing a descriptor from invalid input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDescriptor {
    /// The descriptor string is syntactically malformed.
    #[error("Invalid type descriptor: {0}")]
    Syntax(String),
    /// A member name violates the unqualified-name rules.
    #[doc = see_jvm_spec!(4, 2, 2)]
    #[error("Invalid unqualified name: {0}")]
    MemberName(String),
    /// The `void` descriptor was used where a value type is required.
    #[error("`void` is not a value type")]
    VoidType,
    /// A parameter position is out of range for the method type.
    #[error("Parameter position {position} is out of bounds for arity {arity}")]
    ParameterPosition {
        /// The requested insertion position.
        position: usize,
        /// The number of parameters in the method type.
        arity: usize,
    },
    /// The method handle kind cannot describe the requested member.
    #[error("Method handle kind {0} cannot describe this member")]
    UnsupportedKind(Kind),
}

/// Checks that `name` is a valid unqualified member name.
/// `<init>` and `<clinit>` are the only names that may contain `<` or `>`.
#[doc = see_jvm_spec!(4, 2, 2)]
pub(crate) fn validate_member_name(name: &str) -> Result<(), InvalidDescriptor> {
    let valid = match name {
        CONSTRUCTOR_NAME | CLASS_INITIALIZER_NAME => true,
        "" => false,
        _ => !name.contains(['.', ';', '[', '/', '<', '>']),
    };
    if valid {
        Ok(())
    } else {
        Err(InvalidDescriptor::MemberName(name.to_owned()))
    }
}
