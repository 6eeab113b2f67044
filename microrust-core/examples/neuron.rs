// A single tanh neuron, o = tanh(w1*x1 + w2*x2 + b), and its gradients.
// Run with: RUST_LOG=trace cargo run --example neuron

use microrust_core::autograd::hooks::{set_observer, GraphObserver};
use microrust_core::{OpKind, Scalar};
use std::rc::Rc;

struct LogUpdates;

impl GraphObserver for LogUpdates {
    fn on_gradient_updated(&self, kind: OpKind, value: f64, grad: f64) {
        log::info!("grad update on '{}' node (value {:.4}) -> {:.4}", kind, value, grad);
    }
}

fn main() {
    env_logger::init();
    let _guard = set_observer(Rc::new(LogUpdates));

    let x1 = Scalar::new(2.0);
    let x2 = Scalar::new(0.0);
    let w1 = Scalar::new(-3.0);
    let w2 = Scalar::new(1.0);
    let b = Scalar::new(6.881_373_587_019_543);

    let n = &(&(&x1 * &w1) + &(&x2 * &w2)) + &b;
    let o = n.tanh();
    o.backward();

    println!("o  = {:.4}", o.value());
    for (name, node) in [("x1", &x1), ("x2", &x2), ("w1", &w1), ("w2", &w2), ("b", &b)] {
        println!("d o / d {:<2} = {:.4}", name, node.grad());
    }
}
