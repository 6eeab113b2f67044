//! Optional trace hook invoked at well-defined points of graph construction
//! and backpropagation.
//!
//! The hook is installed per thread, matching the single-threaded graph model:
//!
//! ```
//! use microrust_core::autograd::hooks::{set_observer, GraphObserver};
//! use microrust_core::{OpKind, Scalar};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct CountCreated(Cell<usize>);
//!
//! impl GraphObserver for CountCreated {
//!     fn on_node_created(&self, _kind: OpKind, _value: f64) {
//!         self.0.set(self.0.get() + 1);
//!     }
//! }
//!
//! let counter = Rc::new(CountCreated::default());
//! {
//!     let _guard = set_observer(counter.clone());
//!     let a = Scalar::new(1.0);
//!     let _b = &a + &a;
//! }
//! assert_eq!(counter.0.get(), 2);
//! ```

use crate::autograd::backward_op::OpKind;
use crate::ops::traits::MicroNumeric;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives graph events. Every method defaults to a no-op.
///
/// Values are reported as `f64` whatever the element type of the graph.
pub trait GraphObserver {
    /// Called once for every node, leaf or operator result, right after creation.
    fn on_node_created(&self, _kind: OpKind, _value: f64) {}

    /// Called whenever a backward pass changes a node's gradient: when the root
    /// is seeded and each time an operator rule adds into an operand.
    fn on_gradient_updated(&self, _kind: OpKind, _value: f64, _grad: f64) {}
}

thread_local! {
    static OBSERVER: RefCell<Option<Rc<dyn GraphObserver>>> = const { RefCell::new(None) };
}

/// Restores the previously installed observer when dropped.
#[must_use = "the observer is uninstalled as soon as the guard is dropped"]
pub struct ObserverGuard {
    previous: Option<Rc<dyn GraphObserver>>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        OBSERVER.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Installs `observer` for the current thread until the returned guard is dropped.
pub fn set_observer(observer: Rc<dyn GraphObserver>) -> ObserverGuard {
    let previous = OBSERVER.with(|slot| slot.borrow_mut().replace(observer));
    ObserverGuard { previous }
}

fn current_observer() -> Option<Rc<dyn GraphObserver>> {
    // Cloned out so the callback may itself build nodes without re-entering the borrow.
    OBSERVER.with(|slot| slot.borrow().clone())
}

pub(crate) fn notify_node_created<T: MicroNumeric>(kind: OpKind, value: T) {
    if let Some(observer) = current_observer() {
        observer.on_node_created(kind, to_f64(value));
    }
}

pub(crate) fn notify_gradient_updated<T: MicroNumeric>(kind: OpKind, value: T, grad: T) {
    if let Some(observer) = current_observer() {
        observer.on_gradient_updated(kind, to_f64(value), to_f64(grad));
    }
}

pub(crate) fn to_f64<T: MicroNumeric>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "hooks_test.rs"]
mod tests;
