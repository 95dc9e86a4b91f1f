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

//! flashdeck-core: Core library for the flashdeck flashcard system.
//!
//! This library provides:
//! - The card type and its store-assigned id
//! - In-memory views over the card set (ordered list, id index, category
//!   buckets, practice queue, review history)
//! - The document store contract, with an in-memory implementation
//! - The card store, which keeps the views in step with the document store

pub mod card_store;
pub mod error;
pub mod store;
pub mod types;
pub mod views;

// Re-exports for convenience
pub use card_store::CardStore;
pub use error::{CardStoreError, ErrorReport, Fallible, fail};
pub use store::{CardDocument, CardPatch, DocumentStore, MemoryStore};
pub use types::card::{Card, UNCATEGORIZED};
pub use types::card_id::{CardId, IdGenerator};
