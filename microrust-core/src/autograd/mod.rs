//! Reverse-mode differentiation over the scalar computation graph.
//!
//! - [`backward_op`]: the operation tag stored on each node and its gradient rules.
//! - [`graph`]: node identity and topological ordering.
//! - [`hooks`]: optional observer notified of node creation and gradient updates.
//! - [`grad_check`]: numerical verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod hooks;

pub use backward_op::{BackwardOp, OpKind};
pub use graph::{topological_sort, NodeId};

/// How a backward pass treats gradients left over from an earlier pass.
///
/// A node's gradient is only meaningful for the pass that produced it. Running
/// a second pass over nodes that were not reset adds the new contributions to
/// the old ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradPolicy {
    /// Zero every reachable gradient before seeding the root.
    #[default]
    ResetOnEntry,
    /// Leave existing gradients in place; repeated passes sum up.
    ///
    /// Intermediate nodes keep their old gradient as well and push it to
    /// their operands again, so a second pass over a multi-level graph gives
    /// more than twice the single-pass gradient below the first level.
    Accumulate,
    /// Refuse to run if any reachable node was processed by an earlier pass
    /// and not reset since (see [`Value::zero_grad`](crate::Value::zero_grad)).
    FailOnStale,
}
