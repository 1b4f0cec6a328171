//! Template generators for stubgen.
//!
//! Turns a validated [`Signature`](stubgen_types::ast::Signature) into a
//! complete, runnable program skeleton in one of the supported languages.
//!
//! # Pipeline
//!
//! 1. A [`TypeMapper`] renders each DSL type in native syntax and collects
//!    the imports those types need.
//! 2. A [`TemplateGenerator`] stitches the mapped signature into the
//!    language's program layout: imports, optional `TreeNode` definition,
//!    solution stub, tree/graph helpers and a stdin-JSON to stdout-JSON
//!    `main`.
//! 3. The [`Generator`] registry picks the generator for a language id.
//!
//! Generation is pure: the same signature always yields byte-identical
//! output.

pub mod cpp;
pub mod idioms;
pub mod java;
pub mod javascript;
pub mod mapper;
pub mod python;
pub mod registry;
mod template;

pub use cpp::CppGenerator;
pub use idioms::Idioms;
pub use java::JavaGenerator;
pub use javascript::JavaScriptGenerator;
pub use mapper::{CppMapper, JavaMapper, JavaScriptMapper, PythonMapper, TypeMapper};
pub use python::PythonGenerator;
pub use registry::{resolve, Generator};
pub use template::TemplateGenerator;
