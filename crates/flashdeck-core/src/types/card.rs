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

/// The category given to cards stored without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A flashcard. The id is fixed at creation; everything else can be edited.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    id: CardId,
    question: String,
    answer: String,
    category: String,
}

impl Card {
    pub fn new(id: CardId, question: String, answer: String, category: String) -> Self {
        Self {
            id,
            question,
            answer,
            category,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn set_content(&mut self, question: String, answer: String) {
        self.question = question;
        self.answer = answer;
    }

    /// Change the category, returning the old one.
    pub(crate) fn set_category(&mut self, category: String) -> String {
        std::mem::replace(&mut self.category, category)
    }
}
