use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward_backward() {
    let a = Value::new(1.0f64);
    let b = exp_op(&a);
    assert_relative_eq!(b.value(), std::f64::consts::E, epsilon = 1e-12);
    b.backward();
    assert_relative_eq!(a.grad(), std::f64::consts::E, epsilon = 1e-12);
}

#[test]
fn test_exp_overflow_is_infinite() {
    let a = Value::new(1000.0f64);
    assert!(a.exp().value().is_infinite());
}

#[test]
fn test_exp_grad_check() {
    let result = check_grad(|x| (&x[0] * 0.5).exp(), &[1.3f64], GradCheckConfig::default());
    assert!(result.is_ok(), "{:?}", result);
}
