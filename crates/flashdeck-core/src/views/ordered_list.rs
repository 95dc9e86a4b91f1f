// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::card_id::CardId;

/// Every live card, in the order it was added.
#[derive(Default)]
pub struct OrderedCardList {
    entries: Vec<CardId>,
}

impl OrderedCardList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, id: CardId) {
        self.entries.push(id);
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Confirm that an entry exists for a card being edited in place. Edits
    /// never move an entry; returns false if the card is not in the list.
    pub fn update(&self, id: CardId) -> bool {
        self.contains(id)
    }

    /// Remove the entry for the given card, keeping the order of the rest.
    /// Returns false if the card is not in the list.
    pub fn remove(&mut self, id: CardId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Traverse the list in insertion order. Each call starts over from the
    /// head.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
