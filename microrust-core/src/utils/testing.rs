use crate::autograd::graph::NodeId;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;
use std::collections::HashMap;

/// Checks that a node holds the expected value and gradient within `tolerance`.
/// Panics with the offending field otherwise.
pub fn check_value_near(actual: &Value<f64>, expected_value: f64, expected_grad: f64, tolerance: f64) {
    let value = actual.value();
    let grad = actual.grad();
    if !approx::relative_eq!(value, expected_value, epsilon = tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            value, expected_value, tolerance
        );
    }
    if !approx::relative_eq!(grad, expected_grad, epsilon = tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, tolerance={:?}",
            grad, expected_grad, tolerance
        );
    }
}

/// Checks that `order` is a valid linearization of the graph it covers:
/// no node appears twice and every predecessor of a node appears strictly
/// before it. Panics otherwise.
pub fn check_topological<T: MicroNumeric>(order: &[Value<T>]) {
    let mut positions: HashMap<NodeId<T>, usize> = HashMap::new();
    for (position, node) in order.iter().enumerate() {
        if let Some(previous) = positions.insert(node.node_id(), position) {
            panic!(
                "Node {:?} appears twice, at positions {} and {}",
                node, previous, position
            );
        }
    }
    for (position, node) in order.iter().enumerate() {
        for predecessor in node.predecessors() {
            match positions.get(&predecessor.node_id()) {
                Some(&p) if p < position => {}
                Some(&p) => panic!(
                    "Predecessor {:?} at position {} does not precede {:?} at position {}",
                    predecessor, p, node, position
                ),
                None => panic!(
                    "Predecessor {:?} of {:?} is missing from the order",
                    predecessor, node
                ),
            }
        }
    }
}
