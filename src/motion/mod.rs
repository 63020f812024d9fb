//! Live values for the animated sections.
//!
//! A [`MotionValue`] is a shared cell that tells its subscribers whenever it
//! changes. Derived values ([`transform`], [`motion_template`]) keep their
//! inputs alive for as long as they exist, so a component only has to hold on
//! to the values it renders.

pub mod animate;
pub mod scroll;
pub mod template;
pub mod transform;

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

pub use template::motion_template;
pub use transform::transform;

type Listener<T> = Rc<dyn Fn(&T)>;

thread_local! {
    // Values written inside `batch`, each notified once when it ends.
    static PENDING: RefCell<Option<Vec<(usize, Box<dyn FnOnce()>)>>> = RefCell::new(None);
}

/// Runs `f`, holding back change notifications until it returns, so values
/// derived from several inputs only see the final state.
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    let outermost = PENDING.with(|pending| {
        let mut pending = pending.borrow_mut();
        if pending.is_some() {
            return false;
        }
        *pending = Some(Vec::new());
        true
    });

    let result = f();

    if outermost {
        let queued = PENDING
            .with(|pending| pending.borrow_mut().take())
            .unwrap_or_default();
        for (_, notify) in queued {
            notify();
        }
    }
    result
}

struct Inner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_id: Cell<u64>,
    // Inputs of a derived value and the subscriptions feeding it.
    upstream: RefCell<Vec<Box<dyn Any>>>,
}

/// A value that notifies dependents when it changes.
pub struct MotionValue<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for MotionValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for MotionValue<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for MotionValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MotionValue")
            .field(&*self.inner.value.borrow())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> MotionValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                upstream: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Stores `value` and notifies subscribers in subscription order.
    /// Setting the value it already holds does nothing. Inside [`batch`] the
    /// notification waits until the batch ends.
    pub fn set(&self, value: T) {
        if *self.inner.value.borrow() == value {
            return;
        }
        *self.inner.value.borrow_mut() = value;

        let key = Rc::as_ptr(&self.inner) as *const () as usize;
        let this = self.clone();
        let deferred = PENDING.with(move |pending| match pending.borrow_mut().as_mut() {
            Some(queue) => {
                if !queue.iter().any(|(queued, _)| *queued == key) {
                    let notify: Box<dyn FnOnce()> = Box::new(move || this.notify());
                    queue.push((key, notify));
                }
                true
            }
            None => false,
        });
        if !deferred {
            self.notify();
        }
    }

    fn notify(&self) {
        let value = self.get();
        // Snapshot so a listener can subscribe or unsubscribe while we notify.
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&value);
        }
    }

    /// Calls `f` with every new value until the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn on_change(&self, f: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(f)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.listeners.borrow_mut().retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub(crate) fn downgrade(&self) -> WeakMotionValue<T> {
        WeakMotionValue {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Keeps `item` alive for as long as this value exists.
    pub(crate) fn retain(&self, item: impl Any) {
        self.inner.upstream.borrow_mut().push(Box::new(item));
    }
}

pub(crate) struct WeakMotionValue<T> {
    inner: Weak<Inner<T>>,
}

impl<T> Clone for WeakMotionValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakMotionValue<T> {
    pub(crate) fn upgrade(&self) -> Option<MotionValue<T>> {
        self.inner.upgrade().map(|inner| MotionValue { inner })
    }
}

/// Handle returned by [`MotionValue::on_change`]. Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
