use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::remember_with_key;
use crate::scope::current_scope;

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    pub fn noop() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_spent(&self) -> bool {
        self.0.borrow().is_none()
    }
}

/// Runs `f()` immediately and returns its `Dispose`, which is also registered
/// with the current scope if there is one.
pub fn effect<F>(f: F) -> Dispose
where
    F: FnOnce() -> Dispose + 'static,
{
    let d = f();

    if let Some(scope) = current_scope() {
        let d2 = d.clone();
        scope.add_disposer(move || d2.run());
    }

    d
}

/// Helper to register cleanup inside effect.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

/// Runs `f` on the first composition pass that reaches this key and never
/// again for the lifetime of the composition. Its cleanup runs on unmount.
pub fn launched_effect(key: &str, f: impl FnOnce() -> Dispose + 'static) {
    let launched = remember_with_key(format!("launched:{key}"), || Cell::new(false));
    if !launched.replace(true) {
        effect(f);
    }
}
