use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use crate::binding::{MarkerTarget, ToggleControl};

/// In-memory stand-in for the checkbox control.
pub struct MockToggle {
    checked: Cell<bool>,
}

impl MockToggle {
    pub fn new(checked: bool) -> Self {
        Self {
            checked: Cell::new(checked),
        }
    }

    pub fn set_checked(&self, value: bool) {
        self.checked.set(value);
    }
}

impl ToggleControl for MockToggle {
    fn is_checked(&self) -> bool {
        self.checked.get()
    }
}

/// In-memory stand-in for the root element's marker set.
#[derive(Default)]
pub struct MockRoot {
    markers: RefCell<BTreeSet<String>>,
}

impl MockRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(initial: &[&str]) -> Self {
        let root = Self::default();
        for marker in initial {
            root.markers.borrow_mut().insert((*marker).to_string());
        }
        root
    }

    pub fn has(&self, marker: &str) -> bool {
        self.markers.borrow().contains(marker)
    }

    pub fn markers(&self) -> Vec<String> {
        self.markers.borrow().iter().cloned().collect()
    }
}

impl MarkerTarget for MockRoot {
    fn add_marker(&self, marker: &str) {
        self.markers.borrow_mut().insert(marker.to_string());
    }

    fn remove_marker(&self, marker: &str) {
        self.markers.borrow_mut().remove(marker);
    }
}
