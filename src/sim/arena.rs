//! Fixed-capacity entity slab
//!
//! A `SlotMap` with a hard population cap. Freed slots are handed out again
//! before new ones; iteration walks slots in index order, which is the
//! "population order" collision scans use.

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to an occupied slot; goes stale once the slot is freed
    pub struct SlotId;
}

#[derive(Debug, Clone)]
pub struct Arena<T> {
    slots: SlotMap<SlotId, T>,
    capacity: usize,
}

impl<T> Arena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "arena capacity must be non-zero");
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Store `value`, reusing a freed slot if there is one.
    ///
    /// Returns the value back when every slot is occupied.
    pub fn insert(&mut self, value: T) -> Result<SlotId, T> {
        if self.is_full() {
            return Err(value);
        }
        Ok(self.slots.insert(value))
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.slots.remove(id)
    }

    /// Remove every listed slot; stale or repeated ids are ignored
    pub fn remove_all(&mut self, ids: &[SlotId]) -> usize {
        ids.iter().filter(|&&id| self.remove(id).is_some()).count()
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id)
    }

    /// Drop every entity; the next insert starts again at the first slot
    pub fn clear(&mut self) {
        self.slots = SlotMap::with_capacity_and_key(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut T)> {
        self.slots.iter_mut()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.values()
    }

    /// Keep only the entities for which `keep` returns true.
    ///
    /// Every entity is visited exactly once before any slot is freed.
    pub fn retain(&mut self, mut keep: impl FnMut(&mut T) -> bool) -> usize {
        let doomed: Vec<SlotId> = self
            .iter_mut()
            .filter_map(|(id, value)| (!keep(value)).then_some(id))
            .collect();
        self.remove_all(&doomed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_until_full() {
        let mut arena = Arena::with_capacity(2);
        assert!(arena.insert('a').is_ok());
        assert!(arena.insert('b').is_ok());
        assert!(arena.is_full());
        assert_eq!(arena.insert('c'), Err('c'));
    }

    #[test]
    fn test_free_slot_is_reused() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.insert(1).unwrap();
        let _b = arena.insert(2).unwrap();
        assert_eq!(arena.remove(a), Some(1));
        let c = arena.insert(3).unwrap();
        // Same slot, new handle: the old one must not see the new value
        assert_ne!(c, a);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(c), Some(&3));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.values().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_full_arena_accepts_again_after_remove() {
        let mut arena = Arena::with_capacity(1);
        let a = arena.insert(1).unwrap();
        assert_eq!(arena.insert(2), Err(2));
        arena.remove(a);
        assert!(arena.insert(3).is_ok());
    }

    #[test]
    fn test_double_remove_is_ignored() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.insert(1).unwrap();
        assert_eq!(arena.remove_all(&[a, a]), 1);
        assert!(arena.is_empty());
        assert_eq!(arena.get(a), None);
    }

    #[test]
    fn test_retain_visits_everything() {
        let mut arena = Arena::with_capacity(8);
        for i in 0..6 {
            arena.insert(i).unwrap();
        }
        let mut visited = 0;
        let removed = arena.retain(|v| {
            visited += 1;
            *v % 2 == 0
        });
        assert_eq!(visited, 6);
        assert_eq!(removed, 3);
        assert_eq!(arena.values().copied().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn test_clear_resets_order() {
        let mut arena = Arena::with_capacity(3);
        for i in 0..3 {
            arena.insert(i).unwrap();
        }
        arena.clear();
        for i in 10..13 {
            arena.insert(i).unwrap();
        }
        assert_eq!(arena.values().copied().collect::<Vec<_>>(), vec![10, 11, 12]);
        assert!(arena.is_full());
    }

    proptest! {
        #[test]
        fn prop_len_matches_live_slots(ops in proptest::collection::vec(any::<(bool, u8)>(), 0..200)) {
            let mut arena = Arena::with_capacity(16);
            let mut live: Vec<SlotId> = Vec::new();
            for (insert, pick) in ops {
                if insert {
                    if let Ok(id) = arena.insert(pick) {
                        live.push(id);
                    }
                } else if !live.is_empty() {
                    let id = live.swap_remove(pick as usize % live.len());
                    prop_assert!(arena.remove(id).is_some());
                }
                prop_assert_eq!(arena.len(), live.len());
                prop_assert_eq!(arena.iter().count(), live.len());
                prop_assert!(arena.len() <= arena.capacity());
            }
        }
    }
}
