use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// The result's predecessors are `{a, b}`. During backward, both operands
/// receive the upstream gradient unchanged (d(a+b)/da = d(a+b)/db = 1).
/// `add_op(&a, &a)` is legal and credits `a` twice.
pub fn add_op<T: MicroNumeric>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    Value::from_op(
        a.value() + b.value(),
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
