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

//! The card store keeps the in-memory views in step with the document store.
//!
//! Every mutation writes to the document store first and only then touches
//! the views, so memory can fall behind the store but never run ahead of it.
//! If the two disagree, [`CardStore::reload`] rebuilds the views from the
//! store.

use crate::error::CardStoreError;
use crate::error::Fallible;
use crate::store::CardDocument;
use crate::store::CardPatch;
use crate::store::DocumentStore;
use crate::types::card::Card;
use crate::types::card::UNCATEGORIZED;
use crate::types::card_id::CardId;
use crate::views::card_index::CardIndex;
use crate::views::category_index::CategoryIndex;
use crate::views::ordered_list::OrderedCardList;
use crate::views::practice_queue::PracticeQueue;
use crate::views::review_stack::ReviewStack;

pub struct CardStore<S: DocumentStore> {
    store: S,
    list: OrderedCardList,
    index: CardIndex,
    categories: CategoryIndex,
    queue: PracticeQueue,
    history: ReviewStack,
}

impl<S: DocumentStore> CardStore<S> {
    /// Open a card store over a document store, loading every document into
    /// the views. All loaded cards start out in the practice queue.
    pub fn open(store: S) -> Fallible<Self> {
        let mut card_store = Self {
            store,
            list: OrderedCardList::new(),
            index: CardIndex::new(),
            categories: CategoryIndex::new(),
            queue: PracticeQueue::new(),
            history: ReviewStack::new(),
        };
        card_store.reload()?;
        Ok(card_store)
    }

    /// Close the card store, handing back the document store.
    pub fn close(self) -> S {
        log::debug!("Closing card store with {} cards", self.index.len());
        self.store
    }

    /// Throw away the views and rebuild them from the document store. The
    /// practice queue is refilled and the review history is lost.
    pub fn reload(&mut self) -> Fallible<()> {
        let documents = self.store.find_all()?;
        self.list.clear();
        self.index.clear();
        self.categories.clear();
        self.queue.clear();
        self.history.clear();
        for (id, document) in documents {
            let category = document.category_or_default().to_string();
            let card = Card::new(id, document.question, document.answer, category);
            self.insert(card);
        }
        log::debug!("Loaded {} cards", self.index.len());
        Ok(())
    }

    /// The in-memory half of adding a card.
    fn insert(&mut self, card: Card) {
        let id = card.id();
        let category = card.category().to_string();
        self.list.append(id);
        self.index.put(card);
        self.categories.add_to(&category, id);
        self.queue.enqueue(id);
    }

    pub fn add(
        &mut self,
        question: &str,
        answer: &str,
        category: &str,
    ) -> Result<&Card, CardStoreError> {
        let category = if category.is_empty() {
            UNCATEGORIZED
        } else {
            category
        };
        let document = CardDocument::new(question, answer, category);
        let id = self
            .store
            .create(&document)
            .map_err(CardStoreError::StoreWriteFailure)?;
        self.insert(Card::new(
            id,
            question.to_string(),
            answer.to_string(),
            category.to_string(),
        ));
        log::debug!("Added card {id}");
        self.index
            .get(id)
            .ok_or(CardStoreError::PartialConsistencyFailure(id))
    }

    /// Rewrite a card's question and answer, and its category if one is
    /// given. An empty category counts as none.
    pub fn edit(
        &mut self,
        id: CardId,
        question: &str,
        answer: &str,
        category: Option<&str>,
    ) -> Result<(), CardStoreError> {
        let category = category.filter(|category| !category.is_empty());
        let patch = CardPatch {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.map(str::to_string),
        };
        let in_store = self
            .store
            .update(id, &patch)
            .map_err(CardStoreError::StoreWriteFailure)?;
        let in_list = self.list.update(id);
        check_outcome(id, in_store, in_list)?;

        let Some(card) = self.index.get_mut(id) else {
            log::warn!("Card {id} is listed but not indexed");
            return Err(CardStoreError::PartialConsistencyFailure(id));
        };
        card.set_content(question.to_string(), answer.to_string());
        if let Some(new_category) = category {
            if card.category() != new_category {
                let old_category = card.set_category(new_category.to_string());
                self.categories
                    .move_category(&old_category, new_category, id);
            }
        }
        log::debug!("Updated card {id}");
        Ok(())
    }

    /// Delete a card from the document store and from every view.
    pub fn delete(&mut self, id: CardId) -> Result<(), CardStoreError> {
        let in_store = self
            .store
            .delete(id)
            .map_err(CardStoreError::StoreWriteFailure)?;
        let in_list = self.list.remove(id);
        let removed = self.index.remove(id);
        self.queue.remove_all(id);
        self.history.remove_all(id);
        if let Some(card) = removed {
            self.categories.remove_from(card.category(), id);
        }
        check_outcome(id, in_store, in_list)?;
        log::debug!("Deleted card {id}");
        Ok(())
    }

    /// Take the next card to practice, if any.
    pub fn dequeue_next(&mut self) -> Option<&Card> {
        while let Some(id) = self.queue.dequeue() {
            if self.index.contains(id) {
                return self.index.get(id);
            }
            log::warn!("Skipping unknown card {id} in practice queue");
        }
        None
    }

    /// Record a review. Failed cards go to the back of the practice queue.
    /// Reviews are not persisted.
    pub fn mark_reviewed(&mut self, id: CardId, correct: bool) -> Result<(), CardStoreError> {
        if !self.index.contains(id) {
            log::warn!("Cannot review card {id}: not found");
            return Err(CardStoreError::NotFound(id));
        }
        self.history.push(id);
        if !correct {
            self.queue.enqueue(id);
        }
        Ok(())
    }

    /// Take the most recently reviewed card off the review history.
    pub fn revisit_last(&mut self) -> Option<&Card> {
        while let Some(id) = self.history.pop() {
            if self.index.contains(id) {
                return self.index.get(id);
            }
            log::warn!("Skipping unknown card {id} in review history");
        }
        None
    }

    pub fn find_by_id(&self, id: CardId) -> Option<&Card> {
        self.index.get(id)
    }

    /// All cards, in the order they were added.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.list.iter().filter_map(move |id| self.index.get(id))
    }

    pub fn get_by_category(&self, category: &str) -> Vec<&Card> {
        self.categories
            .get_by_category(category)
            .iter()
            .filter_map(|id| self.index.get(*id))
            .collect()
    }

    pub fn list_categories(&self) -> Vec<&str> {
        self.categories.list_categories()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }

    pub fn review_stack_size(&self) -> usize {
        self.history.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Combine what the document store and the ordered list reported about the
/// same id.
fn check_outcome(id: CardId, in_store: bool, in_list: bool) -> Result<(), CardStoreError> {
    match (in_store, in_list) {
        (true, true) => Ok(()),
        (false, false) => {
            log::warn!("Card {id} not found");
            Err(CardStoreError::NotFound(id))
        }
        _ => {
            log::warn!("Card {id} out of sync: store={in_store}, memory={in_list}");
            Err(CardStoreError::PartialConsistencyFailure(id))
        }
    }
}
