use super::Address;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Word name to entry address mapping
///
/// User-defined words, constants, and variables share one namespace.
/// Primitive names are resolved ahead of this map and never enter it.
/// Insertion order is kept so `words` can list names as registered.

#[derive(Debug, Default)]
pub struct Dictionary {
    words: HashMap<Rc<str>, Address>,
    order: Vec<Rc<str>>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Registers or rebinds a name. Later registrations shadow earlier
    /// ones; the heap cells of the old binding remain reachable by
    /// address only.
    pub fn insert(&mut self, name: Rc<str>, addr: Address) {
        if self.words.insert(name.clone(), addr).is_none() {
            self.order.push(name);
        }
    }

    pub fn remove(&mut self, name: &str) {
        if self.words.remove(name).is_some() {
            self.order.retain(|n| &**n != name);
        }
    }

    pub fn get(&self, name: &str) -> Option<Address> {
        self.words.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|n| &**n)
    }
}
