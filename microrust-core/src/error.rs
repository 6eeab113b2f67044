use crate::autograd::backward_op::OpKind;
use crate::autograd::grad_check::GradCheckError;
use thiserror::Error;

/// Custom error type for the microrust engine.
///
/// Graph construction and the default backward pass are total; errors only
/// surface from the opt-in guards and from gradient checking.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroRustError {
    #[error("Stale gradient on '{op}' node (value {value}): reset gradients before running backward again")]
    StaleGradient { op: OpKind, value: f64 },

    #[error("Gradient check failed: {0}")]
    GradCheck(#[from] GradCheckError),
}
