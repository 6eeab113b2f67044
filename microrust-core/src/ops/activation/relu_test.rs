use super::*;
use crate::autograd::backward_op::OpKind;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_relu_forward() {
    let inputs = [-2.0f64, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, e) in inputs.iter().zip(expected.iter()) {
        let out = relu_op(&Value::new(*x));
        assert_relative_eq!(out.value(), *e);
        assert_eq!(out.op_kind(), OpKind::Relu);
    }
}

#[test]
fn test_relu_backward_positive() {
    let a = Value::new(3.0);
    let b = a.relu();
    b.backward();
    assert_relative_eq!(a.grad(), 1.0);
}

#[test]
fn test_relu_backward_negative_and_zero() {
    for x in [-3.0f64, 0.0] {
        let a = Value::new(x);
        let b = (&a * 2.0).relu();
        b.backward();
        assert_relative_eq!(a.grad(), 0.0);
    }
}

#[test]
fn test_relu_propagates_nan() {
    let a = Value::new(f64::NAN);
    let b = a.relu();
    assert!(b.value().is_nan());
    b.backward();
    assert!(a.grad().is_nan());
}
