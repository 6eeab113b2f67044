// Defines the operation tag stored on every node and the gradient rules
// dispatched on it during the backward pass.

use crate::ops::traits::MicroNumeric;
use crate::value::Value;
use std::fmt;

/// Provenance tag identifying which operator produced a node.
///
/// Only used for debugging, logging and error reporting; the gradient rules
/// dispatch on [`BackwardOp`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Leaf node created directly by the user.
    None,
    Add,
    Mul,
    Sub,
    Neg,
    Pow,
    Exp,
    Ln,
    Tanh,
    Relu,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            OpKind::None => "none",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Sub => "-",
            OpKind::Neg => "neg",
            OpKind::Pow => "pow",
            OpKind::Exp => "exp",
            OpKind::Ln => "ln",
            OpKind::Tanh => "tanh",
            OpKind::Relu => "relu",
        };
        f.write_str(symbol)
    }
}

/// The operation that produced a node, together with the operands it was
/// applied to.
///
/// Each variant stores its operands in slot order. A node used in both slots
/// (`a * a`) appears twice here even though it is a single predecessor, so the
/// rule below credits both slots.
///
/// Operands are strong handles: a node keeps everything it was computed from
/// alive, and since operands must exist before the result, no cycle can form.
#[derive(Debug, Clone)]
pub enum BackwardOp<T: MicroNumeric> {
    /// Leaf node: backward is a no-op.
    Leaf,
    Add { lhs: Value<T>, rhs: Value<T> },
    Mul { lhs: Value<T>, rhs: Value<T> },
    Sub { lhs: Value<T>, rhs: Value<T> },
    Neg { input: Value<T> },
    /// `base^exponent` with a constant exponent.
    Pow { base: Value<T>, exponent: T },
    Exp { input: Value<T> },
    Ln { input: Value<T> },
    Tanh { input: Value<T> },
    Relu { input: Value<T> },
}

impl<T: MicroNumeric> BackwardOp<T> {
    /// Returns the provenance tag of this operation.
    pub fn kind(&self) -> OpKind {
        match self {
            BackwardOp::Leaf => OpKind::None,
            BackwardOp::Add { .. } => OpKind::Add,
            BackwardOp::Mul { .. } => OpKind::Mul,
            BackwardOp::Sub { .. } => OpKind::Sub,
            BackwardOp::Neg { .. } => OpKind::Neg,
            BackwardOp::Pow { .. } => OpKind::Pow,
            BackwardOp::Exp { .. } => OpKind::Exp,
            BackwardOp::Ln { .. } => OpKind::Ln,
            BackwardOp::Tanh { .. } => OpKind::Tanh,
            BackwardOp::Relu { .. } => OpKind::Relu,
        }
    }

    /// Returns the operands in slot order, duplicates included.
    pub fn operands(&self) -> Vec<&Value<T>> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs }
            | BackwardOp::Mul { lhs, rhs }
            | BackwardOp::Sub { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Neg { input }
            | BackwardOp::Exp { input }
            | BackwardOp::Ln { input }
            | BackwardOp::Tanh { input }
            | BackwardOp::Relu { input } => vec![input],
        }
    }

    /// Consumes the op and returns its operands in slot order.
    pub(crate) fn into_operands(self) -> Vec<Value<T>> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs }
            | BackwardOp::Mul { lhs, rhs }
            | BackwardOp::Sub { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Neg { input }
            | BackwardOp::Exp { input }
            | BackwardOp::Ln { input }
            | BackwardOp::Tanh { input }
            | BackwardOp::Relu { input } => vec![input],
        }
    }

    /// Applies the chain rule for this operation.
    ///
    /// `output_value` is the forward value of the node this op produced and
    /// `grad_output` its current gradient (dL/dOutput). The contribution
    /// dL/dOutput * dOutput/dInput is added into each operand's gradient,
    /// once per slot.
    pub(crate) fn backward(&self, output_value: T, grad_output: T) {
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => {
                lhs.accumulate_grad(grad_output);
                rhs.accumulate_grad(grad_output);
            }
            BackwardOp::Mul { lhs, rhs } => {
                // Each factor receives the *other* factor's value, not the output's.
                let lhs_value = lhs.value();
                let rhs_value = rhs.value();
                lhs.accumulate_grad(rhs_value * grad_output);
                rhs.accumulate_grad(lhs_value * grad_output);
            }
            BackwardOp::Sub { lhs, rhs } => {
                lhs.accumulate_grad(grad_output);
                rhs.accumulate_grad(-grad_output);
            }
            BackwardOp::Neg { input } => input.accumulate_grad(-grad_output),
            BackwardOp::Pow { base, exponent } => {
                let local = *exponent * base.value().powf(*exponent - T::one());
                base.accumulate_grad(local * grad_output);
            }
            BackwardOp::Exp { input } => input.accumulate_grad(output_value * grad_output),
            BackwardOp::Ln { input } => input.accumulate_grad(grad_output / input.value()),
            BackwardOp::Tanh { input } => {
                let local = T::one() - output_value * output_value;
                input.accumulate_grad(local * grad_output);
            }
            BackwardOp::Relu { input } => {
                if output_value > T::zero() {
                    input.accumulate_grad(grad_output);
                } else if output_value.is_nan() {
                    input.accumulate_grad(output_value);
                }
            }
        }
    }
}
