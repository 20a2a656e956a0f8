//! Descriptors for dynamically-computed constants.

use std::fmt::Display;

use itertools::Itertools;

use crate::macros::see_jvm_spec;

use super::{
    ClassDesc, ConstantDesc, DEFAULT_NAME, DirectMethodHandleDesc, InvalidDescriptor,
    validate_member_name,
};

/// A nominal descriptor for a dynamically-computed constant: a named constant
/// resolved at link time by invoking a bootstrap method with the call site's
/// lookup context, the invocation name, the expected type, and a fixed
/// sequence of static arguments.
#[doc = see_jvm_spec!(4, 4, 13)]
#[derive(Debug, PartialEq, Clone)]
pub struct DynamicConstantDesc {
    /// The bootstrap method that computes the constant.
    pub bootstrap_method: DirectMethodHandleDesc,
    /// The invocation name passed to the bootstrap method.
    pub constant_name: String,
    /// The expected type of the constant.
    pub constant_type: ClassDesc,
    /// The static arguments passed to the bootstrap method after the
    /// implicit ones.
    pub bootstrap_args: Vec<ConstantDesc>,
}

impl DynamicConstantDesc {
    /// Creates a descriptor for a dynamic constant with the given invocation
    /// name and no static arguments.
    /// # Errors
    /// - [`InvalidDescriptor::MemberName`] if `constant_name` is not a valid
    ///   unqualified name.
    /// - [`InvalidDescriptor::VoidType`] if `constant_type` is `void`.
    pub fn of_named(
        bootstrap_method: DirectMethodHandleDesc,
        constant_name: impl Into<String>,
        constant_type: ClassDesc,
    ) -> Result<Self, InvalidDescriptor> {
        let constant_name = constant_name.into();
        validate_member_name(&constant_name)?;
        if constant_type.is_void() {
            return Err(InvalidDescriptor::VoidType);
        }
        Ok(Self {
            bootstrap_method,
            constant_name,
            constant_type,
            bootstrap_args: Vec::new(),
        })
    }

    /// Creates a descriptor for a dynamic constant whose bootstrap method
    /// ignores the invocation name, using [`DEFAULT_NAME`].
    /// # Errors
    /// [`InvalidDescriptor::VoidType`] if `constant_type` is `void`.
    pub fn of(
        bootstrap_method: DirectMethodHandleDesc,
        constant_type: ClassDesc,
    ) -> Result<Self, InvalidDescriptor> {
        Self::of_named(bootstrap_method, DEFAULT_NAME, constant_type)
    }

    /// Returns a descriptor with the static bootstrap arguments replaced by
    /// the given sequence.
    #[must_use]
    pub fn with_args(mut self, bootstrap_args: impl IntoIterator<Item = ConstantDesc>) -> Self {
        self.bootstrap_args = bootstrap_args.into_iter().collect();
        self
    }
}

impl Display for DynamicConstantDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dynamic({}: {}, {}({}))",
            self.constant_name,
            self.constant_type.descriptor(),
            self.bootstrap_method,
            self.bootstrap_args.iter().map(ToString::to_string).join(", ")
        )
    }
}
