// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Depboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered map: values live in a `Vec`, a hash index maps keys to slots.
///
/// Slots are never removed, so an index handed out by [`OrderedRegistry::insert`] stays valid for
/// the lifetime of the registry.
#[derive(Debug, Clone)]
pub struct OrderedRegistry<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedRegistry<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedRegistry<K, V> {
    /// Appends `value` under `key`, returning its slot.
    ///
    /// An existing key is left untouched and the rejected value is handed back.
    pub fn insert(&mut self, key: K, value: V) -> Result<usize, V> {
        if self.index.contains_key(&key) {
            return Err(value);
        }
        let slot = self.entries.len();
        self.index.insert(key.clone(), slot);
        self.entries.push((key, value));
        Ok(slot)
    }

    pub fn slot_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slot_of(key).map(|slot| &self.entries[slot].1)
    }

    pub fn get_slot(&self, slot: usize) -> Option<&V> {
        self.entries.get(slot).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }
}
