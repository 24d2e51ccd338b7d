//! Single-writer observable value with dirty-flag readers.
//!
//! [`Signal`] is owned by exactly one producer. Consumers hold a [`Watch`]
//! and poll [`Watch::changed`] on their next frame instead of being called
//! back synchronously, which keeps the core independent of any rendering
//! framework's reactivity. Each watch owns its own teardown: dropping it (or
//! calling [`Watch::unsubscribe`]) releases the registration exactly once.

use fnv::FnvHashSet;
use std::cell::RefCell;
use std::rc::Rc;

struct Shared<T> {
    value: T,
    version: u64,
    watchers: FnvHashSet<u64>,
    next_watcher: u64,
}

/// Writer half. Not `Clone`: there is one writer per value.
pub struct Signal<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T: Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                value,
                version: 0,
                watchers: FnvHashSet::default(),
                next_watcher: 0,
            })),
        }
    }

    /// Replaces the value and bumps the version.
    pub fn set(&self, value: T) {
        let mut s = self.shared.borrow_mut();
        s.value = value;
        s.version = s.version.wrapping_add(1);
    }

    /// Mutates in place; always counts as a change.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut s = self.shared.borrow_mut();
        f(&mut s.value);
        s.version = s.version.wrapping_add(1);
    }

    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }

    pub fn version(&self) -> u64 {
        self.shared.borrow().version
    }

    /// Registers a new reader. The reader starts out "changed" so it renders
    /// the current value on its first poll.
    pub fn watch(&self) -> Watch<T> {
        let mut s = self.shared.borrow_mut();
        let id = s.next_watcher;
        s.next_watcher += 1;
        s.watchers.insert(id);
        let seen = s.version.wrapping_sub(1);
        Watch {
            shared: Some(Rc::clone(&self.shared)),
            id,
            seen,
        }
    }

    /// Number of live watches.
    pub fn watcher_count(&self) -> usize {
        self.shared.borrow().watchers.len()
    }
}

/// Reader half handed to each consumer.
pub struct Watch<T> {
    shared: Option<Rc<RefCell<Shared<T>>>>,
    id: u64,
    seen: u64,
}

impl<T: Clone> Watch<T> {
    /// Returns true (once) if the value changed since the last call.
    pub fn changed(&mut self) -> bool {
        let Some(shared) = &self.shared else {
            return false;
        };
        let version = shared.borrow().version;
        if version == self.seen {
            return false;
        }
        self.seen = version;
        true
    }

    /// Current value, or `None` after unsubscribing.
    pub fn get(&self) -> Option<T> {
        self.shared.as_ref().map(|s| s.borrow().value.clone())
    }

    /// Combined poll: the value if it changed since the last poll.
    pub fn take_changed(&mut self) -> Option<T> {
        if self.changed() {
            self.get()
        } else {
            None
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.shared.is_some()
    }

    /// Releases the registration. Calling twice is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(shared) = self.shared.take() {
            shared.borrow_mut().watchers.remove(&self.id);
        }
    }
}

impl<T> Drop for Watch<T> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            // try_borrow_mut: a watch dropped while its signal is mid-update
            // must not panic; the id is simply left for the signal to drop.
            if let Ok(mut s) = shared.try_borrow_mut() {
                s.watchers.remove(&self.id);
            }
        }
    }
}
