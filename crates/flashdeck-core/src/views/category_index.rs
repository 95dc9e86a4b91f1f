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

use std::collections::BTreeMap;

use crate::types::card_id::CardId;

/// Groups cards by category name. Within a bucket, cards keep the order in
/// which they joined it. Empty buckets are pruned.
#[derive(Default)]
pub struct CategoryIndex {
    buckets: BTreeMap<String, Vec<CardId>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to a category, creating the bucket if needed. A card that
    /// is already in the bucket is not added twice.
    pub fn add_to(&mut self, category: &str, id: CardId) {
        let bucket = self.buckets.entry(category.to_string()).or_default();
        if !bucket.contains(&id) {
            bucket.push(id);
        }
    }

    /// Remove a card from a category. Returns false if it was not there.
    pub fn remove_from(&mut self, category: &str, id: CardId) -> bool {
        let Some(bucket) = self.buckets.get_mut(category) else {
            return false;
        };
        let Some(idx) = bucket.iter().position(|entry| *entry == id) else {
            return false;
        };
        bucket.remove(idx);
        if bucket.is_empty() {
            self.buckets.remove(category);
        }
        true
    }

    /// Move a card between categories. The caller invokes this whenever a
    /// card's category field changes; nothing here watches the card.
    pub fn move_category(&mut self, old: &str, new: &str, id: CardId) {
        self.remove_from(old, id);
        self.add_to(new, id);
    }

    /// Names of all non-empty categories, sorted.
    pub fn list_categories(&self) -> Vec<&str> {
        self.buckets.keys().map(String::as_str).collect()
    }

    /// The cards in a category. Unknown categories are empty.
    pub fn get_by_category(&self, category: &str) -> &[CardId] {
        self.buckets
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}
