//! Generic publish/subscribe subject.

use std::cell::RefCell;
use std::rc::Rc;

/// Subscriber callback; receives an owned snapshot of the collection.
pub type Listener<T> = Rc<dyn Fn(Vec<T>)>;

/// Subject of the observer pattern for a typed collection.
///
/// The store does not own the collection itself; owners pass the current
/// items to [`StateStore::notify`] after each completed mutation.
pub struct StateStore<T> {
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Default for StateStore<T> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> StateStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback.
    ///
    /// No duplicate detection: registering the same closure twice yields two
    /// invocations per change.
    pub fn subscribe(&self, listener: impl Fn(Vec<T>) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Invokes every listener in registration order, each with its own copy
    /// of `items`.
    ///
    /// The listener list is cloned before dispatch, so a listener may
    /// subscribe further callbacks; those only see later notifications.
    pub fn notify(&self, items: &[T]) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(items.to_vec());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}
