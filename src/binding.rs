use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn(i64)>;

#[derive(Default)]
struct Inner {
    value: Cell<i64>,
    next_id: Cell<u64>,
    observers: RefCell<Vec<(u64, Observer)>>,
}

/// The current page, owned by the host and observed by indicators.
///
/// Clones share the same cell. Indicators only read it and subscribe to
/// changes; writing is the host's business. The value is not range-checked.
#[derive(Clone, Default)]
pub struct CurrentIndex {
    inner: Rc<Inner>,
}

impl CurrentIndex {
    pub fn new(value: i64) -> Self {
        let index = Self::default();
        index.inner.value.set(value);
        index
    }

    pub fn get(&self) -> i64 {
        self.inner.value.get()
    }

    /// Stores `value` and notifies observers if it differs from the current one.
    pub fn set(&self, value: i64) {
        if self.inner.value.replace(value) == value {
            return;
        }
        let observers: Vec<Observer> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(value);
        }
    }

    /// Calls `observer` with every new value until the returned handle is dropped.
    pub fn subscribe(&self, observer: impl Fn(i64) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Keeps an observer registered on a [`CurrentIndex`]; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    inner: Weak<Inner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.observers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl fmt::Debug for CurrentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentIndex")
            .field("value", &self.get())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}
