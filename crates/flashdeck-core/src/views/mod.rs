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

//! In-memory views over the card set.
//!
//! The [`card_index::CardIndex`] owns every [`Card`](crate::types::card::Card).
//! The other views store only [`CardId`](crate::types::card_id::CardId)s and
//! never reach into each other; keeping them in step is the job of the
//! [`CardStore`](crate::card_store::CardStore).

pub mod card_index;
pub mod category_index;
pub mod ordered_list;
pub mod practice_queue;
pub mod review_stack;
