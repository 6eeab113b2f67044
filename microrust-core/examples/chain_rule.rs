// Run with: RUST_LOG=debug cargo run --example chain_rule

use microrust_core::{create_leaf, topological_sort, Scalar};

fn main() {
    env_logger::init();

    let a: Scalar = create_leaf(2.0);
    let b: Scalar = create_leaf(3.0);
    let c = &(&a + &b) * &a;

    log::info!("Forward: c = (a + b) * a = {}", c.value());
    for node in topological_sort(&c) {
        log::info!("  topo: {}", node);
    }

    c.backward();

    println!("c = {}", c);
    println!("dc/da = {} (expected 7)", a.grad());
    println!("dc/db = {} (expected 2)", b.grad());
}
