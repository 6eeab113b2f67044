use approx::assert_relative_eq;
use microrust_core::ops::{add_op, mul_op};
use microrust_core::utils::testing::{check_topological, check_value_near};
use microrust_core::{create_leaf, topological_sort, GradPolicy, Scalar};
use rand::Rng;

mod common;
use common::{init_logger, random_leaf, seeded_rng};

#[test]
fn add_and_mul_forward_values() {
    init_logger();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let a = random_leaf(&mut rng);
        let b = random_leaf(&mut rng);
        assert_eq!(add_op(&a, &b).value(), a.value() + b.value());
        assert_eq!(mul_op(&a, &b).value(), a.value() * b.value());
    }
}

#[test]
fn add_backward_gives_unit_gradients() {
    init_logger();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let a = random_leaf(&mut rng);
        let b = random_leaf(&mut rng);
        add_op(&a, &b).backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
    }
}

#[test]
fn mul_backward_gives_sibling_values() {
    init_logger();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let a = random_leaf(&mut rng);
        let b = random_leaf(&mut rng);
        mul_op(&a, &b).backward();
        assert_eq!(a.grad(), b.value());
        assert_eq!(b.grad(), a.value());
    }
}

#[test]
fn chain_rule_example() {
    init_logger();
    let a = create_leaf(2.0);
    let b = create_leaf(3.0);
    let c = mul_op(&add_op(&a, &b), &a);
    c.backward();
    check_value_near(&c, 10.0, 1.0, 1e-12);
    check_value_near(&a, 2.0, 7.0, 1e-12);
    check_value_near(&b, 3.0, 2.0, 1e-12);
}

#[test]
fn self_multiplication_counts_both_slots() {
    init_logger();
    let a = create_leaf(4.0);
    let c = mul_op(&a, &a);
    assert_eq!(c.predecessors().len(), 1);
    c.backward();
    assert_relative_eq!(a.grad(), 8.0);
}

#[test]
fn diamond_accumulates_from_every_consumer() {
    init_logger();
    // d = (a * 3) + (a * a): dd/da = 3 + 2a
    let a = create_leaf(1.5f64);
    let left = &a * 3.0;
    let right = &a * &a;
    let d = &left + &right;
    d.backward();
    assert_relative_eq!(a.grad(), 6.0, epsilon = 1e-12);

    let order = topological_sort(&d);
    check_topological(&order);
    assert_eq!(order.iter().filter(|n| n.ptr_eq(&a)).count(), 1);
}

#[test]
fn random_graphs_are_linearized() {
    init_logger();
    let mut rng = seeded_rng();
    for _ in 0..20 {
        let mut pool: Vec<Scalar> = (0..4).map(|_| random_leaf(&mut rng)).collect();
        for _ in 0..30 {
            let i = rng.gen_range(0..pool.len());
            let j = rng.gen_range(0..pool.len());
            let node = if rng.gen_bool(0.5) {
                &pool[i] + &pool[j]
            } else {
                &pool[i] * &pool[j]
            };
            pool.push(node);
        }
        let root = pool.last().cloned().unwrap_or_else(|| Scalar::new(0.0));
        let order = topological_sort(&root);
        check_topological(&order);
        assert!(order.last().is_some_and(|n| n.ptr_eq(&root)));
    }
}

#[test]
fn accumulate_policy_sums_two_passes() {
    init_logger();
    let a = create_leaf(2.0);
    let b = create_leaf(3.0);
    let c = mul_op(&a, &b);
    c.backward_with(GradPolicy::Accumulate).unwrap();
    c.backward_with(GradPolicy::Accumulate).unwrap();
    assert_relative_eq!(a.grad(), 6.0);
    assert_relative_eq!(b.grad(), 4.0);
}

#[test]
fn accumulate_policy_compounds_through_intermediates() {
    init_logger();
    // The intermediate `sum` keeps its gradient from the first pass too, so
    // the second pass pushes 2 * a into a and b through it.
    let a = create_leaf(2.0);
    let b = create_leaf(3.0);
    let sum = add_op(&a, &b);
    let c = mul_op(&sum, &a);
    c.backward_with(GradPolicy::Accumulate).unwrap();
    c.backward_with(GradPolicy::Accumulate).unwrap();
    assert_relative_eq!(sum.grad(), 4.0);
    assert_relative_eq!(a.grad(), 16.0);
    assert_relative_eq!(b.grad(), 6.0);
}

#[test]
fn default_backward_is_repeatable() {
    init_logger();
    let a = create_leaf(2.0);
    let b = create_leaf(3.0);
    let c = mul_op(&add_op(&a, &b), &a);
    for _ in 0..3 {
        c.backward();
        assert_relative_eq!(a.grad(), 7.0);
        assert_relative_eq!(b.grad(), 2.0);
    }
}
