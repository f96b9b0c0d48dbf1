use crate::hotel::Hotel;
use crate::person::{Guest, Manager};
use crate::reservation::Reservation;
use crate::room::Room;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::rc::Rc;

/// An entity stored in a [`Container`], identified by a unique key.
pub trait Keyed: Clone {
    type Key: Clone + Eq + Hash + Display;
    /// Human readable entity kind used in messages.
    const KIND: &'static str;

    fn key(&self) -> &Self::Key;
}

/// In-memory table of one entity kind.
///
/// Entities keep their insertion order; `index` maps every key to the
/// position of its entity in `items`.
#[derive(Debug)]
pub struct Container<E: Keyed> {
    items: Vec<E>,
    index: HashMap<E::Key, usize>,
}

pub type ManagerContainer = Container<Manager>;
pub type GuestContainer = Container<Guest>;
pub type HotelContainer = Container<Hotel>;
pub type RoomContainer = Container<Room>;
pub type ReservationContainer = Container<Reservation>;

/// Containers are shared between the controllers that need them.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

impl<E: Keyed> Default for Container<E> {
    fn default() -> Self {
        Container {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: Keyed> Container<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entity` unless its key is taken.
    pub fn include(&mut self, entity: E) -> bool {
        if self.index.contains_key(entity.key()) {
            return false;
        }
        self.index.insert(entity.key().clone(), self.items.len());
        self.items.push(entity);
        true
    }

    pub fn remove(&mut self, key: &E::Key) -> Option<E> {
        let idx = self.index.remove(key)?;
        let removed = self.items.remove(idx);
        self.index
            .values_mut()
            .filter(|i| **i > idx)
            .for_each(|i| *i -= 1);
        Some(removed)
    }

    pub fn find(&self, key: &E::Key) -> Option<&E> {
        self.index.get(key).map(|i| &self.items[*i])
    }

    pub fn contains(&self, key: &E::Key) -> bool {
        self.index.contains_key(key)
    }

    /// Replaces the stored entity with the same key.
    pub fn update(&mut self, entity: E) -> bool {
        match self.index.get(entity.key()) {
            Some(i) => {
                self.items[*i] = entity;
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> Vec<E> {
        self.items.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u8,
        payload: u32,
    }

    impl Keyed for Item {
        type Key = u8;
        const KIND: &'static str = "item";

        fn key(&self) -> &u8 {
            &self.id
        }
    }

    fn item(id: u8, payload: u32) -> Item {
        Item { id, payload }
    }

    #[test]
    fn test_include_rejects_duplicate_key() {
        let mut container = Container::new();
        assert!(container.include(item(1, 10)));
        assert!(!container.include(item(1, 20)));
        assert_eq!(1, container.len());
        assert_eq!(Some(&item(1, 10)), container.find(&1));
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut container = Container::new();
        for id in 1..=4 {
            container.include(item(id, id as u32));
        }
        assert_eq!(Some(item(2, 2)), container.remove(&2));
        assert_eq!(None, container.remove(&2));
        assert_eq!(Some(&item(3, 3)), container.find(&3));
        assert_eq!(Some(&item(4, 4)), container.find(&4));
        assert_eq!(vec![item(1, 1), item(3, 3), item(4, 4)], container.list());
    }

    #[test]
    fn test_update() {
        let mut container = Container::new();
        container.include(item(1, 10));
        assert!(container.update(item(1, 11)));
        assert!(!container.update(item(2, 20)));
        assert_eq!(Some(&item(1, 11)), container.find(&1));
        assert!(!container.contains(&2));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Include(u8, u32),
        Remove(u8),
        Update(u8, u32),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..8u8, any::<u32>()).prop_map(|(id, p)| Op::Include(id, p)),
            (0..8u8).prop_map(Op::Remove),
            (0..8u8, any::<u32>()).prop_map(|(id, p)| Op::Update(id, p)),
        ]
    }

    proptest! {
        #[test]
        fn test_find_agrees_with_list(ops in prop::collection::vec(arb_op(), 0..60)) {
            let mut container = Container::new();
            for op in ops {
                match op {
                    Op::Include(id, p) => { container.include(item(id, p)); }
                    Op::Remove(id) => { container.remove(&id); }
                    Op::Update(id, p) => { container.update(item(id, p)); }
                }
            }

            let listed = container.list();
            let mut keys: Vec<u8> = listed.iter().map(|i| i.id).collect();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), listed.len());
            for entry in &listed {
                prop_assert_eq!(Some(entry), container.find(&entry.id));
            }
            for id in 0..8u8 {
                prop_assert_eq!(container.contains(&id), listed.iter().any(|i| i.id == id));
            }
        }
    }
}
