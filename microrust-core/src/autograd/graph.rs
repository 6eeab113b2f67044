use crate::ops::traits::MicroNumeric;
use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node: the address of its shared cell.
///
/// Stable for as long as any handle to the node is alive, and independent of
/// the node's value, so two distinct nodes holding equal values never collide.
pub type NodeId<T> = *const RefCell<ValueData<T>>;

/// Returns every node reachable from `root` in topological order.
///
/// Each node appears exactly once, after all of its predecessors; `root` is
/// the last element. Reversing the result gives the order in which gradients
/// must be propagated.
pub fn topological_sort<T: MicroNumeric>(root: &Value<T>) -> Vec<Value<T>> {
    let mut visited = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(root, &mut visited, &mut sorted_list);
    log::trace!("[topological_sort] {} nodes reachable", sorted_list.len());
    sorted_list
}

/// Depth-first post-order walk over predecessors.
///
/// Uses an explicit stack of frames instead of recursion, so the depth of the
/// graph is not limited by the thread stack. Each frame holds a node, its
/// distinct predecessors and the index of the next predecessor to explore.
fn build_topo<T: MicroNumeric>(
    root: &Value<T>,
    visited: &mut HashSet<NodeId<T>>,
    sorted_list: &mut Vec<Value<T>>,
) {
    let mut stack: Vec<(Value<T>, Vec<Value<T>>, usize)> = Vec::new();
    if visited.insert(root.node_id()) {
        stack.push((root.clone(), root.predecessors(), 0));
    }

    while let Some((node, inputs, next_input)) = stack.last_mut() {
        if let Some(input) = inputs.get(*next_input).cloned() {
            *next_input += 1;
            let input_id = input.node_id();
            if visited.insert(input_id) {
                let input_inputs = input.predecessors();
                stack.push((input, input_inputs, 0));
            } else {
                log::trace!("[build_topo] Node {:?} already visited.", input_id);
            }
        } else {
            // Every predecessor is ordered: the node can follow them.
            log::trace!(
                "[build_topo] Adding node {:?} ({}) to sorted_list",
                node.node_id(),
                node.op_kind()
            );
            sorted_list.push(node.clone());
            stack.pop();
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
