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

/// Last-in, first-out history of reviewed cards.
#[derive(Default)]
pub struct ReviewStack {
    stack: Vec<CardId>,
}

impl ReviewStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: CardId) {
        self.stack.push(id);
    }

    /// Take the most recently reviewed card, if any.
    pub fn pop(&mut self) -> Option<CardId> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<CardId> {
        self.stack.last().copied()
    }

    /// Drop every entry for the given card. Returns how many were dropped.
    pub fn remove_all(&mut self, id: CardId) -> usize {
        let before = self.stack.len();
        self.stack.retain(|entry| *entry != id);
        before - self.stack.len()
    }

    /// Current depth.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
