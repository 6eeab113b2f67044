// src/value_data.rs
use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use std::mem;
use std::rc::Rc;

/// Internal state of one node in the computation graph.
///
/// This struct holds the forward value, the gradient accumulator and the
/// operation that produced the node. It is wrapped in `Rc<RefCell<ValueData>>`
/// by the `Value` struct to allow shared ownership (a node can feed many
/// downstream nodes) and mutation of the gradient through shared handles.
#[derive(Debug)]
pub struct ValueData<T: MicroNumeric> {
    /// The forward-computed result. Never changes after construction.
    pub(crate) value: T,
    /// Accumulator for d(output)/d(this node). Zero after construction.
    pub(crate) grad: T,
    /// The operation that produced this node, holding its operands in slot order.
    /// Leaf nodes carry `BackwardOp::Leaf`.
    pub(crate) op: BackwardOp<T>,
    /// Set when a backward pass processes this node, cleared by an explicit reset.
    pub(crate) stale: bool,
}

impl<T: MicroNumeric> ValueData<T> {
    /// Creates the state of a node produced by `op`.
    pub(crate) fn with_op(value: T, op: BackwardOp<T>) -> Self {
        ValueData {
            value,
            grad: T::zero(),
            op,
            stale: false,
        }
    }

    /// Adds `contribution` into the gradient accumulator.
    pub(crate) fn accumulate_grad(&mut self, contribution: T) {
        self.grad += contribution;
    }

    /// Zeroes the gradient and clears the stale marker.
    pub(crate) fn reset_grad(&mut self) {
        self.grad = T::zero();
        self.stale = false;
    }
}

impl<T: MicroNumeric> Drop for ValueData<T> {
    /// Releases the operands iteratively.
    ///
    /// The default drop glue would recurse once per level of a chain of
    /// uniquely owned nodes. Here, each operand this node was the last owner of
    /// has its own operands moved onto a worklist before it is dropped, so it
    /// drops as a leaf.
    fn drop(&mut self) {
        let mut worklist = mem::replace(&mut self.op, BackwardOp::Leaf).into_operands();
        while let Some(operand) = worklist.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.data) {
                let mut data = cell.into_inner();
                worklist.extend(mem::replace(&mut data.op, BackwardOp::Leaf).into_operands());
            }
        }
    }
}
