//! # Scalar Operations Module (`ops`)
//!
//! Every operator computes its forward value immediately and returns a new
//! [`Value`](crate::Value) whose [`BackwardOp`](crate::autograd::BackwardOp)
//! records the operands. No gradient is touched until a backward pass runs.
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu, tanh.
//! - [`math_elem`]: exp, ln.
//!
//! The `std::ops` overloads on `Value` (`a + b`, `a * 2.0`, `-a`, ...) call
//! into the `_op` functions defined here.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};
