use super::*;
use crate::autograd::backward_op::OpKind;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_neg() {
    let a = Value::new(2.5);
    let b = neg_op(&a);
    assert_relative_eq!(b.value(), -2.5);
    assert_eq!(b.op_kind(), OpKind::Neg);
    b.backward();
    assert_relative_eq!(a.grad(), -1.0);
}

#[test]
fn test_neg_operator_chain() {
    let a = Value::new(3.0);
    let b = -(&a * &a);
    b.backward();
    assert_relative_eq!(b.value(), -9.0);
    assert_relative_eq!(a.grad(), -6.0);
}
