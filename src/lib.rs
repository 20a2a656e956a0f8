#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![doc = include_str!("../README.md")]

/// Module containing the builders for bootstrap-method descriptors.
pub mod bootstrap;
/// Module containing the catalog of canonical descriptor singletons.
pub mod catalog;
/// Module containing the nominal descriptor value types.
pub mod desc;
pub(crate) mod macros;

#[cfg(test)]
pub(crate) mod tests;
