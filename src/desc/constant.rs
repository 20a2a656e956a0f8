//! Descriptors for loadable constants.

use std::fmt::Display;

use super::{ClassDesc, DynamicConstantDesc, MethodHandleDesc, MethodTypeDesc};

/// A nominal descriptor for a loadable constant: a value that a `ldc`
/// instruction or a bootstrap-method argument list can carry.
#[doc = crate::macros::see_jvm_spec!(4, 4)]
#[derive(Debug, PartialEq, Clone, derive_more::From)]
pub enum ConstantDesc {
    /// A 32-bit integer constant.
    Integer(i32),
    /// A 64-bit integer constant.
    Long(i64),
    /// A 32-bit floating-point constant.
    Float(f32),
    /// A 64-bit floating-point constant.
    Double(f64),
    /// A string constant.
    String(String),
    /// A class constant.
    Class(ClassDesc),
    /// A method type constant.
    MethodType(MethodTypeDesc),
    /// A method handle constant.
    MethodHandle(MethodHandleDesc),
    /// A dynamically-computed constant.
    Dynamic(DynamicConstantDesc),
}

impl From<&str> for ConstantDesc {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl Display for ConstantDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "int({value})"),
            Self::Long(value) => write!(f, "long({value})"),
            Self::Float(value) => write!(f, "float({value})"),
            Self::Double(value) => write!(f, "double({value})"),
            Self::String(value) => write!(f, "String(\"{value}\")"),
            Self::Class(value) => write!(f, "{value}.class"),
            Self::MethodType(value) => value.fmt(f),
            Self::MethodHandle(value) => value.fmt(f),
            Self::Dynamic(value) => value.fmt(f),
        }
    }
}
