// src/value/mod.rs

use crate::autograd::backward_op::{BackwardOp, OpKind};
use crate::autograd::graph::NodeId;
use crate::autograd::hooks;
use crate::ops::traits::MicroNumeric;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod math_methods;
mod traits;

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** one node can be an operand of many downstream
///     nodes. Cloning a `Value` is cheap and yields another handle to the
///     *same* node.
/// 2.  **Interior Mutability:** the gradient is accumulated through shared
///     handles during the backward pass.
///
/// The graph is single-threaded; `Value` is neither `Send` nor `Sync`.
pub struct Value<T: MicroNumeric> {
    pub(crate) data: Rc<RefCell<ValueData<T>>>,
}

/// Creates a leaf node holding `value`.
///
/// Equivalent to [`Value::new`]. Any float is accepted, NaN and infinities included.
pub fn create_leaf<T: MicroNumeric>(value: T) -> Value<T> {
    Value::new(value)
}

impl<T: MicroNumeric> Value<T> {
    /// Creates a leaf node: no predecessors, zero gradient, no-op backward rule.
    pub fn new(value: T) -> Self {
        Value::from_op(value, BackwardOp::Leaf)
    }

    /// Wraps the result of an operation. Called by every operator in `ops`.
    pub(crate) fn from_op(value: T, op: BackwardOp<T>) -> Self {
        let kind = op.kind();
        log::trace!("[Value] created {} node, value={}", kind, value);
        let node = Value {
            data: Rc::new(RefCell::new(ValueData::with_op(value, op))),
        };
        hooks::notify_node_created(kind, value);
        node
    }

    /// Returns the forward-computed value.
    pub fn value(&self) -> T {
        self.read_data().value
    }

    /// Returns the gradient accumulated by the last backward pass(es).
    pub fn grad(&self) -> T {
        self.read_data().grad
    }

    /// Overwrites the gradient, e.g. to seed or reset it between passes.
    ///
    /// This counts as an explicit reset: the node is no longer considered
    /// stale by [`GradPolicy::FailOnStale`](crate::GradPolicy::FailOnStale).
    pub fn set_grad(&self, grad: T) {
        let mut guard = self.write_data();
        guard.grad = grad;
        guard.stale = false;
    }

    /// Returns the tag of the operator that produced this node.
    pub fn op_kind(&self) -> OpKind {
        self.read_data().op.kind()
    }

    /// Returns a clone of the operation (operands included) that produced this node.
    pub fn op(&self) -> BackwardOp<T> {
        self.read_data().op.clone()
    }

    /// Checks whether this node was created directly rather than by an operator.
    pub fn is_leaf(&self) -> bool {
        matches!(self.read_data().op, BackwardOp::Leaf)
    }

    /// Returns the distinct operand nodes that produced this node.
    ///
    /// Identity-based: `a * a` has the single predecessor `a`.
    pub fn predecessors(&self) -> Vec<Value<T>> {
        let guard = self.read_data();
        let mut distinct: Vec<Value<T>> = Vec::with_capacity(2);
        for operand in guard.op.operands() {
            if !distinct.iter().any(|seen| seen.ptr_eq(operand)) {
                distinct.push(operand.clone());
            }
        }
        distinct
    }

    /// Returns the identity of this node (the address of its shared cell).
    pub fn node_id(&self) -> NodeId<T> {
        Rc::as_ptr(&self.data)
    }

    /// Checks whether two handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Borrows the node state immutably.
    ///
    /// Panics if the state is currently borrowed mutably, which cannot happen
    /// outside of a gradient update.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData<T>> {
        self.data.borrow()
    }

    /// Borrows the node state mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData<T>> {
        self.data.borrow_mut()
    }

    /// Adds `contribution` to this node's gradient.
    pub(crate) fn accumulate_grad(&self, contribution: T) {
        let (kind, value, grad) = {
            let mut guard = self.write_data();
            guard.accumulate_grad(contribution);
            (guard.op.kind(), guard.value, guard.grad)
        };
        hooks::notify_gradient_updated(kind, value, grad);
    }

    pub(crate) fn is_stale(&self) -> bool {
        self.read_data().stale
    }
}

impl<T: MicroNumeric> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::new(value)
    }
}
