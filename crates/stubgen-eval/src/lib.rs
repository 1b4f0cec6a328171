//! stubgen reference scaffold.
//!
//! Executes the generated-program contract natively: decode the stdin JSON
//! object into typed arguments, run a Rust solution closure, and encode the
//! result as one JSON line. Used as the golden semantics the emitted
//! Python, Java, C++ and JavaScript scaffolds are checked against.

pub mod error;
pub mod runner;
pub mod tree;

pub use error::{EvalError, EvalResult};
pub use runner::{check_shape, decode_argument, encode_result, run_scaffold, Argument};
pub use tree::{
    deserialize_level_order, serialize_level_order, tree_from_json, tree_to_json, TreeNode,
};
