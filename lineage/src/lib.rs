//! Inheritance-shape demonstration programs.
//!
//! Four independent demos show how derived types pick up base-type behavior:
//!
//! - **[`hierarchical`]**: one root, two siblings, two leaves under one sibling.
//! - **[`multi_level`]**: a linear three-type chain.
//! - **[`multiple`]**: one type combining two unrelated bases.
//! - **[`single`]**: one base and one derived type carrying text fields.
//!
//! Base types are embedded values inside derived types. Inherited behaviors
//! are forwarded to the embedded value through capability traits. The
//! [`graph`] module describes each demo's inheritance shape declaratively so it
//! can be listed, rendered, and checked against its invariants.

pub mod config;
pub mod demo;
pub mod exit_codes;
pub mod graph;
pub mod hierarchical;
pub mod logging;
pub mod multi_level;
pub mod multiple;
pub mod single;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use demo::Demo;
pub use graph::{FieldDecl, InheritanceStyle, TypeDecl, TypeGraph};
