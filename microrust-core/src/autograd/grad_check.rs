use crate::autograd::hooks::to_f64;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;
use num_traits::NumCast;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Gradient check needs at least one input.")]
    EmptyInput,
}

/// Step size and tolerance of a gradient check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied to each input for the central difference.
    pub epsilon: f64,
    /// Maximum accepted absolute *and* relative difference.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks the analytical gradients of `func` against central finite differences.
///
/// `func` receives one fresh leaf per entry of `inputs` and must build its
/// output from them. The analytical gradients come from one call to
/// [`Value::backward`]; each numerical gradient is
/// `(func(x + eps) - func(x - eps)) / (2 * eps)` with only that input perturbed.
/// A gradient fails when the difference exceeds `tolerance` both absolutely
/// and relative to the analytical value.
///
/// # Errors
/// Returns the first failing input as a `GradCheckError`.
pub fn check_grad<T, F>(func: F, inputs: &[T], config: GradCheckConfig) -> Result<(), GradCheckError>
where
    T: MicroNumeric,
    F: Fn(&[Value<T>]) -> Value<T>,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInput);
    }
    let epsilon = <T as NumCast>::from(config.epsilon).unwrap_or_else(T::epsilon);
    let two = T::one() + T::one();

    let leaves: Vec<Value<T>> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();

    let evaluate = |index: usize, delta: T| -> T {
        let perturbed: Vec<Value<T>> = inputs
            .iter()
            .enumerate()
            .map(|(i, &x)| Value::new(if i == index { x + delta } else { x }))
            .collect();
        func(&perturbed).value()
    };

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = to_f64(leaf.grad());
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate(input_index, epsilon);
        let loss_minus = evaluate(input_index, -epsilon);
        let numerical_grad = to_f64((loss_plus - loss_minus) / (two * epsilon));
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus: to_f64(loss_plus),
                loss_minus: to_f64(loss_minus),
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        log::trace!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            input_index,
            analytical_grad,
            numerical_grad,
            difference
        );
        if difference > config.tolerance
            && difference / (analytical_grad.abs() + config.epsilon) > config.tolerance
        {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
