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

use std::collections::VecDeque;

use crate::types::card_id::CardId;

/// First-in, first-out queue of cards waiting to be reviewed. A card may
/// appear more than once if it was failed and put back.
#[derive(Default)]
pub struct PracticeQueue {
    queue: VecDeque<CardId>,
}

impl PracticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, id: CardId) {
        self.queue.push_back(id);
    }

    /// Take the card at the head of the queue, if any.
    pub fn dequeue(&mut self) -> Option<CardId> {
        self.queue.pop_front()
    }

    /// Drop every entry for the given card. Returns how many were dropped.
    pub fn remove_all(&mut self, id: CardId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|entry| *entry != id);
        before - self.queue.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.queue.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
