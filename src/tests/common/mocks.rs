use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use crate::host::{ ColorSchemeHost, Subscription };

type Listener = (usize, Box<dyn FnMut(bool)>);

/// Stand-in for `matchMedia`: remembers listeners and lets a test emit
/// color-scheme changes. Clones share the same listeners.
#[derive(Clone)]
pub struct MockColorSchemeHost {
    prefers_dark: Rc<Cell<bool>>,
    supported: bool,
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_id: Rc<Cell<usize>>,
}

impl MockColorSchemeHost {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Rc::new(Cell::new(prefers_dark)),
            supported: true,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// A host without change notifications.
    pub fn unsupported(prefers_dark: bool) -> Self {
        Self { supported: false, ..Self::new(prefers_dark) }
    }

    pub fn emit(&self, is_dark: bool) {
        self.prefers_dark.set(is_dark);
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(is_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ColorSchemeHost for MockColorSchemeHost {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn subscribe(&self, on_change: Box<dyn FnMut(bool)>) -> Subscription {
        if !self.supported {
            return Subscription::inert();
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, on_change));

        let listeners = Rc::clone(&self.listeners);
        Subscription::new(move || listeners.borrow_mut().retain(|(other, _)| *other != id))
    }
}
