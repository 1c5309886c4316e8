extern crate std;

use std::{cell::Cell, rc::Rc};

mod cmp;
mod position;

/// Counts how many times values sharing the same counter were cloned.
#[derive(Debug)]
pub(super) struct CloneCounter {
    pub(super) value: i32,
    clones: Rc<Cell<usize>>,
}

impl CloneCounter {
    pub(super) fn new(value: i32, clones: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            clones: Rc::clone(clones),
        }
    }
}

impl Clone for CloneCounter {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            value: self.value,
            clones: Rc::clone(&self.clones),
        }
    }
}

/// Counts how many values sharing the same counter were dropped.
pub(super) struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(super) fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
