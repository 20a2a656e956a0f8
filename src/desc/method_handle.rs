//! Descriptors for method handles.

use std::fmt::Display;

use itertools::Itertools;

use crate::macros::see_jvm_spec;

use super::{
    CLASS_INITIALIZER_NAME, CONSTRUCTOR_NAME, ClassDesc, ConstantDesc, InvalidDescriptor,
    MethodTypeDesc, PrimitiveType, validate_member_name,
};

/// The kind of a direct method handle reference.
#[doc = see_jvm_spec!(4, 4, 8)]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[repr(u8)]
pub enum Kind {
    /// Read an instance field.
    #[display("REF_getField")]
    GetField = 1,
    /// Read a static field.
    #[display("REF_getStatic")]
    GetStatic = 2,
    /// Write an instance field.
    #[display("REF_putField")]
    PutField = 3,
    /// Write a static field.
    #[display("REF_putStatic")]
    PutStatic = 4,
    /// Invoke an instance method.
    #[display("REF_invokeVirtual")]
    InvokeVirtual = 5,
    /// Invoke a static method.
    #[display("REF_invokeStatic")]
    InvokeStatic = 6,
    /// Invoke an instance method with `invokespecial` semantics.
    #[display("REF_invokeSpecial")]
    InvokeSpecial = 7,
    /// Invoke a constructor.
    #[display("REF_newInvokeSpecial")]
    NewInvokeSpecial = 8,
    /// Invoke an interface method.
    #[display("REF_invokeInterface")]
    InvokeInterface = 9,
}

impl Kind {
    /// Returns the `reference_kind` tag of a `CONSTANT_MethodHandle_info`
    /// entry of this kind.
    #[must_use]
    pub const fn ref_kind(self) -> u8 {
        self as u8
    }

    /// Whether this kind describes a field accessor.
    #[must_use]
    pub const fn is_field_access(self) -> bool {
        matches!(
            self,
            Self::GetField | Self::GetStatic | Self::PutField | Self::PutStatic
        )
    }

    /// Whether this kind requires no receiver argument.
    #[must_use]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::GetStatic | Self::PutStatic | Self::InvokeStatic)
    }
}

/// A nominal descriptor for a direct method handle: a reference to a named
/// method, field accessor, or constructor of a class.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DirectMethodHandleDesc {
    /// The kind of the method handle.
    pub kind: Kind,
    /// The class declaring the referenced member.
    pub owner: ClassDesc,
    /// The name of the referenced member.
    pub name: String,
    /// The lookup type of the handle. For field kinds this is the accessor
    /// type without the receiver (`()T` for getters, `(T)V` for setters).
    pub method_type: MethodTypeDesc,
}

impl DirectMethodHandleDesc {
    /// Creates a descriptor for a method handle invoking a named method.
    /// # Errors
    /// - [`InvalidDescriptor::UnsupportedKind`] if `kind` is a field-access
    ///   kind.
    /// - [`InvalidDescriptor::MemberName`] if `name` is not a valid
    ///   unqualified name, if `kind` is [`Kind::NewInvokeSpecial`] and `name`
    ///   is not `<init>`, or if `name` is `<init>` or `<clinit>` for any
    ///   other kind.
    pub fn of_method(
        kind: Kind,
        owner: ClassDesc,
        name: impl Into<String>,
        method_type: MethodTypeDesc,
    ) -> Result<Self, InvalidDescriptor> {
        if kind.is_field_access() {
            return Err(InvalidDescriptor::UnsupportedKind(kind));
        }
        let name = name.into();
        validate_member_name(&name)?;
        let name_matches_kind = if kind == Kind::NewInvokeSpecial {
            name == CONSTRUCTOR_NAME
        } else {
            name != CONSTRUCTOR_NAME && name != CLASS_INITIALIZER_NAME
        };
        if !name_matches_kind {
            return Err(InvalidDescriptor::MemberName(name));
        }
        Ok(Self {
            kind,
            owner,
            name,
            method_type,
        })
    }

    /// Creates a descriptor for a method handle accessing a named field.
    /// # Errors
    /// - [`InvalidDescriptor::UnsupportedKind`] if `kind` is not a
    ///   field-access kind.
    /// - [`InvalidDescriptor::VoidType`] if `field_type` is `void`.
    /// - [`InvalidDescriptor::MemberName`] if `name` is not a valid
    ///   unqualified field name.
    pub fn of_field(
        kind: Kind,
        owner: ClassDesc,
        name: impl Into<String>,
        field_type: ClassDesc,
    ) -> Result<Self, InvalidDescriptor> {
        if !kind.is_field_access() {
            return Err(InvalidDescriptor::UnsupportedKind(kind));
        }
        if field_type.is_void() {
            return Err(InvalidDescriptor::VoidType);
        }
        let name = name.into();
        if name == CONSTRUCTOR_NAME || name == CLASS_INITIALIZER_NAME {
            return Err(InvalidDescriptor::MemberName(name));
        }
        validate_member_name(&name)?;
        let method_type = match kind {
            Kind::GetField | Kind::GetStatic => MethodTypeDesc {
                parameter_types: Vec::new(),
                return_type: field_type,
            },
            _ => MethodTypeDesc {
                parameter_types: vec![field_type],
                return_type: ClassDesc::Primitive(PrimitiveType::Void),
            },
        };
        Ok(Self {
            kind,
            owner,
            name,
            method_type,
        })
    }

    /// Creates a descriptor for a method handle invoking a constructor.
    /// # Errors
    /// [`InvalidDescriptor::VoidType`] if any parameter type is `void`.
    pub fn of_constructor(
        owner: ClassDesc,
        parameter_types: impl IntoIterator<Item = ClassDesc>,
    ) -> Result<Self, InvalidDescriptor> {
        let method_type = MethodTypeDesc::of(
            ClassDesc::Primitive(PrimitiveType::Void),
            parameter_types,
        )?;
        Ok(Self {
            kind: Kind::NewInvokeSpecial,
            owner,
            name: CONSTRUCTOR_NAME.to_owned(),
            method_type,
        })
    }

    /// Returns the type an invocation of this handle has: the lookup type
    /// with the receiver prepended for instance kinds, and with the return
    /// type replaced by the owner for constructors.
    #[must_use]
    pub fn invocation_type(&self) -> MethodTypeDesc {
        match self.kind {
            Kind::NewInvokeSpecial => self.method_type.change_return_type(self.owner.clone()),
            kind if kind.is_static() => self.method_type.clone(),
            _ => {
                let mut parameter_types =
                    Vec::with_capacity(self.method_type.parameter_types.len() + 1);
                parameter_types.push(self.owner.clone());
                parameter_types.extend_from_slice(&self.method_type.parameter_types);
                MethodTypeDesc {
                    parameter_types,
                    return_type: self.method_type.return_type.clone(),
                }
            }
        }
    }
}

impl Display for DirectMethodHandleDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}::{}{}",
            self.kind, self.owner, self.name, self.method_type
        )
    }
}

/// A nominal descriptor for a method handle.
#[derive(Debug, PartialEq, Clone, derive_more::From)]
pub enum MethodHandleDesc {
    /// A direct reference to a named member of a class.
    Direct(DirectMethodHandleDesc),
    /// A direct handle partially applied to leading captured arguments.
    Bound(BoundMethodHandleDesc),
}

impl MethodHandleDesc {
    /// Creates a descriptor for `target` partially applied to the given
    /// leading arguments.
    /// # Errors
    /// [`InvalidDescriptor::ParameterPosition`] if there are more bound
    /// arguments than the target's invocation type has parameters.
    pub fn bind(
        target: DirectMethodHandleDesc,
        bound_arguments: impl IntoIterator<Item = ConstantDesc>,
    ) -> Result<Self, InvalidDescriptor> {
        let bound_arguments: Vec<_> = bound_arguments.into_iter().collect();
        let arity = target.invocation_type().parameter_types.len();
        if bound_arguments.len() > arity {
            return Err(InvalidDescriptor::ParameterPosition {
                position: bound_arguments.len(),
                arity,
            });
        }
        Ok(Self::Bound(BoundMethodHandleDesc {
            target,
            bound_arguments,
        }))
    }

    /// Returns the type an invocation of this handle has. For bound handles
    /// the captured leading parameters are dropped.
    #[must_use]
    pub fn invocation_type(&self) -> MethodTypeDesc {
        match self {
            Self::Direct(direct) => direct.invocation_type(),
            Self::Bound(bound) => {
                let invocation = bound.target.invocation_type();
                MethodTypeDesc {
                    parameter_types: invocation.parameter_types[bound.bound_arguments.len()..]
                        .to_vec(),
                    return_type: invocation.return_type,
                }
            }
        }
    }
}

impl Display for MethodHandleDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(direct) => direct.fmt(f),
            Self::Bound(bound) => bound.fmt(f),
        }
    }
}

/// A direct method handle with leading captured arguments.
#[derive(Debug, PartialEq, Clone)]
pub struct BoundMethodHandleDesc {
    /// The underlying direct method handle.
    pub target: DirectMethodHandleDesc,
    /// The captured arguments, bound to the leading parameters of the
    /// target's invocation type.
    pub bound_arguments: Vec<ConstantDesc>,
}

impl Display for BoundMethodHandleDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}]",
            self.target,
            self.bound_arguments.iter().map(ToString::to_string).join(", ")
        )
    }
}
