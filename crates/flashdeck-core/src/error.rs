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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::card_id::CardId;

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value:#?}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value:#?}"),
        }
    }
}

impl From<CardStoreError> for ErrorReport {
    fn from(value: CardStoreError) -> Self {
        match value {
            CardStoreError::StoreWriteFailure(report) => report,
            other => ErrorReport {
                message: other.to_string(),
            },
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {
    fn description(&self) -> &str {
        &self.message
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}

/// The ways a card store operation can fail.
#[derive(Debug, PartialEq)]
pub enum CardStoreError {
    /// The id is unknown to both the in-memory views and the document store.
    NotFound(CardId),
    /// The document store rejected the write. The in-memory views were not
    /// touched.
    StoreWriteFailure(ErrorReport),
    /// The document store and the in-memory views disagree about whether the
    /// card exists. Nothing is rolled back; reload the store to reconcile.
    PartialConsistencyFailure(CardId),
}

impl Display for CardStoreError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CardStoreError::NotFound(id) => write!(f, "card {id} not found"),
            CardStoreError::StoreWriteFailure(report) => {
                write!(f, "store write failed: {}", report.message())
            }
            CardStoreError::PartialConsistencyFailure(id) => {
                write!(f, "card {id} is out of sync with the store")
            }
        }
    }
}

impl Error for CardStoreError {}
