use crate::autograd::graph::topological_sort;
use crate::autograd::hooks;
use crate::autograd::GradPolicy;
use crate::error::MicroRustError;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

impl<T: MicroNumeric> Value<T> {
    /// Performs the backward pass starting from this node.
    ///
    /// After the call, every node reachable from `self` holds d(self)/d(node)
    /// in its gradient. All reachable gradients are zeroed first
    /// ([`GradPolicy::ResetOnEntry`]), so calling this twice gives the same
    /// result both times. Calling it on a leaf just sets the leaf's gradient to 1.
    ///
    /// Gradients only hold for the latest pass: a later pass from another root
    /// that reaches the same nodes resets and overwrites them.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        reset_grads(&sorted_nodes);
        self.propagate(&sorted_nodes, GradPolicy::ResetOnEntry);
    }

    /// Performs the backward pass under an explicit gradient policy.
    ///
    /// # Errors
    /// Returns `MicroRustError::StaleGradient` under [`GradPolicy::FailOnStale`]
    /// if a reachable node was processed by an earlier pass and not reset since.
    /// No gradient is modified in that case.
    pub fn backward_with(&self, policy: GradPolicy) -> Result<(), MicroRustError> {
        let sorted_nodes = topological_sort(self);
        match policy {
            GradPolicy::ResetOnEntry => reset_grads(&sorted_nodes),
            GradPolicy::Accumulate => {}
            GradPolicy::FailOnStale => {
                if let Some(stale) = sorted_nodes.iter().find(|node| node.is_stale()) {
                    return Err(MicroRustError::StaleGradient {
                        op: stale.op_kind(),
                        value: hooks::to_f64(stale.value()),
                    });
                }
            }
        }
        self.propagate(&sorted_nodes, policy);
        Ok(())
    }

    /// Zeroes the gradient of every node reachable from this one.
    pub fn zero_grad(&self) {
        reset_grads(&topological_sort(self));
    }

    /// Seeds `self` and walks `sorted_nodes` in reverse, running each node's rule once.
    fn propagate(&self, sorted_nodes: &[Value<T>], policy: GradPolicy) {
        log::debug!(
            "backward: {} nodes, policy {:?}",
            sorted_nodes.len(),
            policy
        );

        // d(self)/d(self) = 1, assigned rather than accumulated.
        let (kind, value) = {
            let mut guard = self.write_data();
            guard.grad = T::one();
            (guard.op.kind(), guard.value)
        };
        hooks::notify_gradient_updated(kind, value, T::one());

        for node in sorted_nodes.iter().rev() {
            // Release the borrow before the rule writes into the operands.
            let (op, value, grad) = {
                let guard = node.read_data();
                (guard.op.clone(), guard.value, guard.grad)
            };
            log::trace!("backward: {} node, value={}, grad={}", op.kind(), value, grad);
            op.backward(value, grad);
            node.write_data().stale = true;
        }

        log::debug!("backward: done");
    }
}

fn reset_grads<T: MicroNumeric>(nodes: &[Value<T>]) {
    for node in nodes {
        node.write_data().reset_grad();
    }
}
