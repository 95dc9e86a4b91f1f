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

//! The persistent document store contract, and an in-memory implementation.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::UNCATEGORIZED;
use crate::types::card_id::CardId;
use crate::types::card_id::IdGenerator;

/// A card as the document store sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDocument {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CardDocument {
    pub fn new(question: &str, answer: &str, category: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category: Some(category.to_string()),
        }
    }

    /// The document's category, or the default if it has none.
    pub fn category_or_default(&self) -> &str {
        match &self.category {
            Some(category) if !category.is_empty() => category.as_str(),
            _ => UNCATEGORIZED,
        }
    }
}

/// The fields changed by an edit. Question and answer are always rewritten;
/// the category only if given.
#[derive(Clone, Debug, PartialEq)]
pub struct CardPatch {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
}

impl CardPatch {
    pub fn apply(&self, document: &mut CardDocument) {
        document.question = self.question.clone();
        document.answer = self.answer.clone();
        if let Some(category) = &self.category {
            document.category = Some(category.clone());
        }
    }
}

/// The system of record for cards.
///
/// Calls block until the store answers. Errors mean the store could not carry
/// out the request; a `false` from `update` or `delete` means it did, but
/// found no document with that id.
pub trait DocumentStore {
    /// Insert a new document and return the id assigned to it.
    fn create(&mut self, document: &CardDocument) -> Fallible<CardId>;

    /// Every document in the store, in creation order.
    fn find_all(&self) -> Fallible<Vec<(CardId, CardDocument)>>;

    /// Apply a patch to a document. Returns whether the document existed.
    fn update(&mut self, id: CardId, patch: &CardPatch) -> Fallible<bool>;

    /// Delete a document. Returns whether the document existed.
    fn delete(&mut self, id: CardId) -> Fallible<bool>;
}

/// A document store that lives in memory. Ids carry no creation time.
pub struct MemoryStore {
    documents: Vec<(CardId, CardDocument)>,
    ids: IdGenerator,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            ids: IdGenerator::from_seed(0),
            read_only: false,
        }
    }

    /// Make every subsequent write fail.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn get(&self, id: CardId) -> Option<&CardDocument> {
        self.documents
            .iter()
            .find(|(doc_id, _)| *doc_id == id)
            .map(|(_, document)| document)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn check_writable(&self) -> Fallible<()> {
        if self.read_only {
            return fail("store is read-only");
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn create(&mut self, document: &CardDocument) -> Fallible<CardId> {
        self.check_writable()?;
        let id = self.ids.next_id(0);
        self.documents.push((id, document.clone()));
        Ok(id)
    }

    fn find_all(&self) -> Fallible<Vec<(CardId, CardDocument)>> {
        Ok(self.documents.clone())
    }

    fn update(&mut self, id: CardId, patch: &CardPatch) -> Fallible<bool> {
        self.check_writable()?;
        match self.documents.iter_mut().find(|(doc_id, _)| *doc_id == id) {
            Some((_, document)) => {
                patch.apply(document);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: CardId) -> Fallible<bool> {
        self.check_writable()?;
        let before = self.documents.len();
        self.documents.retain(|(doc_id, _)| *doc_id != id);
        Ok(self.documents.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_category_defaults() -> Fallible<()> {
        let document: CardDocument =
            serde_json::from_str(r#"{"question": "Q", "answer": "A"}"#)?;
        assert_eq!(document.category, None);
        assert_eq!(document.category_or_default(), "Uncategorized");

        let document: CardDocument =
            serde_json::from_str(r#"{"question": "Q", "answer": "A", "category": ""}"#)?;
        assert_eq!(document.category_or_default(), "Uncategorized");
        Ok(())
    }

    #[test]
    fn test_serialize_document() -> Fallible<()> {
        let document = CardDocument::new("Q", "A", "Math");
        let json = serde_json::to_string(&document)?;
        assert_eq!(json, r#"{"question":"Q","answer":"A","category":"Math"}"#);
        Ok(())
    }

    #[test]
    fn test_patch_without_category() {
        let mut document = CardDocument::new("Q", "A", "Math");
        let patch = CardPatch {
            question: "Q2".to_string(),
            answer: "A2".to_string(),
            category: None,
        };
        patch.apply(&mut document);
        assert_eq!(document, CardDocument::new("Q2", "A2", "Math"));
    }

    #[test]
    fn test_memory_store_lifecycle() -> Fallible<()> {
        let mut store = MemoryStore::new();
        let a = store.create(&CardDocument::new("Q1", "A1", "Math"))?;
        let b = store.create(&CardDocument::new("Q2", "A2", "Science"))?;
        assert_ne!(a, b);

        let all = store.find_all()?;
        assert_eq!(all.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![a, b]);

        let patch = CardPatch {
            question: "Q1'".to_string(),
            answer: "A1'".to_string(),
            category: Some("History".to_string()),
        };
        assert!(store.update(a, &patch)?);
        assert_eq!(store.get(a), Some(&CardDocument::new("Q1'", "A1'", "History")));

        assert!(store.delete(a)?);
        assert!(!store.delete(a)?);
        assert!(!store.update(a, &patch)?);
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn test_read_only_store_rejects_writes() -> Fallible<()> {
        let mut store = MemoryStore::new();
        let id = store.create(&CardDocument::new("Q", "A", "Math"))?;
        store.set_read_only(true);
        assert!(store.create(&CardDocument::new("Q", "A", "Math")).is_err());
        assert!(store.delete(id).is_err());
        assert_eq!(store.find_all()?.len(), 1);
        Ok(())
    }
}
