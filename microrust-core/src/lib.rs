//! Scalar reverse-mode automatic differentiation.
//!
//! Every arithmetic operation on a [`Value`] records its operands, building a
//! directed acyclic computation graph. Calling [`Value::backward`] on an output
//! walks that graph in reverse topological order and fills in the gradient of
//! the output with respect to every reachable node.

pub mod autograd;
pub mod error;
pub mod ops;
pub mod utils;
pub mod value;
pub mod value_data;

pub use autograd::backward_op::OpKind;
pub use autograd::graph::{topological_sort, NodeId};
pub use autograd::GradPolicy;
pub use error::MicroRustError;
pub use value::{create_leaf, Value};
// Re-export traits required by public functions/structs
pub use num_traits;

/// Double-precision scalar node, the default element type.
pub type Scalar = Value<f64>;
