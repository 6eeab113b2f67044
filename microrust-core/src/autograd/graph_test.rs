use super::*;
use crate::utils::testing::check_topological;
use crate::value::Value;

#[test]
fn test_leaf_yields_single_element() {
    let a = Value::new(1.0f64);
    let order = topological_sort(&a);
    assert_eq!(order.len(), 1);
    assert!(order[0].ptr_eq(&a));
}

#[test]
fn test_root_is_last_and_leaves_precede() {
    let a = Value::new(2.0f64);
    let b = Value::new(3.0f64);
    let c = &a + &b;
    let d = &c * &a;
    let order = topological_sort(&d);
    assert_eq!(order.len(), 4);
    assert!(order.last().is_some_and(|last| last.ptr_eq(&d)));
    check_topological(&order);
}

#[test]
fn test_diamond_visits_shared_node_once() {
    //      a
    //     / \
    //    b   c
    //     \ /
    //      d
    let a = Value::new(1.5f64);
    let b = &a * 2.0;
    let c = &a + 1.0;
    let d = &b * &c;
    let order = topological_sort(&d);
    // a, b, c, d and the two constant leaves
    assert_eq!(order.len(), 6);
    assert_eq!(order.iter().filter(|n| n.ptr_eq(&a)).count(), 1);
    check_topological(&order);
}

#[test]
fn test_identity_not_value() {
    // Two distinct leaves holding the same value are two nodes.
    let a = Value::new(1.0f64);
    let b = Value::new(1.0f64);
    let c = &a + &b;
    assert_eq!(topological_sort(&c).len(), 3);
}

#[test]
fn test_self_operand_single_predecessor() {
    let a = Value::new(4.0f64);
    let c = &a * &a;
    let order = topological_sort(&c);
    assert_eq!(order.len(), 2);
    check_topological(&order);
}

#[test]
fn test_unreachable_nodes_excluded() {
    let a = Value::new(1.0f64);
    let b = Value::new(2.0f64);
    let _unused = &a * &b;
    let c = &a + 3.0;
    let order = topological_sort(&c);
    assert_eq!(order.len(), 3);
    assert!(!order.iter().any(|n| n.ptr_eq(&b)));
}

#[test]
fn test_deep_chain() {
    let x = Value::new(0.5f64);
    let mut y = x.clone();
    for _ in 0..500 {
        y = &y + &x;
    }
    let order = topological_sort(&y);
    // x plus 500 sums
    assert_eq!(order.len(), 501);
    check_topological(&order);
}

#[test]
fn test_very_deep_chain_backward() {
    let n = 100_000;
    let x = Value::new(0.5f64);
    let mut y = x.clone();
    for _ in 0..n {
        y = &y + &x;
    }
    let order = topological_sort(&y);
    assert_eq!(order.len(), n + 1);
    assert!(order[0].ptr_eq(&x));
    drop(order);

    y.backward();
    // y = (n + 1) * x
    assert_eq!(x.grad(), (n + 1) as f64);
    assert_eq!(y.grad(), 1.0);
}

#[test]
fn test_very_deep_chain_drop() {
    let x = Value::new(1.0f64);
    let mut y = x.clone();
    for _ in 0..200_000 {
        y = &(&y * 1.0) + &x;
    }
    assert_eq!(y.value(), 200_001.0);
    // Releasing the whole chain must not exhaust the stack.
    drop(y);
    assert!(x.is_leaf());
}
