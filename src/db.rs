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

use std::path::Path;

use chrono::Utc;
use flashdeck_core::error::ErrorReport;
use flashdeck_core::error::Fallible;
use flashdeck_core::store::CardDocument;
use flashdeck_core::store::CardPatch;
use flashdeck_core::store::DocumentStore;
use flashdeck_core::types::card_id::CardId;
use flashdeck_core::types::card_id::IdGenerator;
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::params;

/// A document store kept in a SQLite database. Each card is one row holding
/// its JSON-encoded document.
pub struct SqliteStore {
    conn: Connection,
    ids: IdGenerator,
}

fn db_error(e: rusqlite::Error) -> ErrorReport {
    ErrorReport::new(format!("database error: {e}"))
}

impl SqliteStore {
    /// Open the database at the given path, creating it if needed.
    pub fn open(path: &Path) -> Fallible<Self> {
        log::debug!("Opening database at {}", path.display());
        let conn = Connection::open(path).map_err(db_error)?;
        Self::init(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Fallible<Self> {
        let conn = Connection::open_in_memory().map_err(db_error)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Fallible<Self> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                body TEXT NOT NULL
            );
            ",
        )
        .map_err(db_error)?;
        let now = Utc::now();
        let seed = (now.timestamp_nanos_opt().unwrap_or_default() as u64)
            ^ ((std::process::id() as u64) << 32);
        Ok(Self {
            conn,
            ids: IdGenerator::from_seed(seed),
        })
    }
}

impl DocumentStore for SqliteStore {
    fn create(&mut self, document: &CardDocument) -> Fallible<CardId> {
        let timestamp = u32::try_from(Utc::now().timestamp()).unwrap_or_default();
        let id = self.ids.next_id(timestamp);
        let body = serde_json::to_string(document)?;
        self.conn
            .execute(
                "INSERT INTO documents (id, body) VALUES (?1, ?2)",
                params![id.to_hex(), body],
            )
            .map_err(db_error)?;
        Ok(id)
    }

    fn find_all(&self) -> Fallible<Vec<(CardId, CardDocument)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, body FROM documents ORDER BY seq")
            .map_err(db_error)?;
        let rows = stmt
            .query_map([], |row| {
                let id: String = row.get(0)?;
                let body: String = row.get(1)?;
                Ok((id, body))
            })
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;
        let mut documents = Vec::with_capacity(rows.len());
        for (id, body) in rows {
            let id = CardId::from_hex(&id)?;
            let document: CardDocument = serde_json::from_str(&body)?;
            documents.push((id, document));
        }
        Ok(documents)
    }

    fn update(&mut self, id: CardId, patch: &CardPatch) -> Fallible<bool> {
        let tx = self.conn.transaction().map_err(db_error)?;
        let body: Option<String> = tx
            .query_row(
                "SELECT body FROM documents WHERE id = ?1",
                params![id.to_hex()],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_error)?;
        let Some(body) = body else {
            return Ok(false);
        };
        let mut document: CardDocument = serde_json::from_str(&body)?;
        patch.apply(&mut document);
        let body = serde_json::to_string(&document)?;
        tx.execute(
            "UPDATE documents SET body = ?1 WHERE id = ?2",
            params![body, id.to_hex()],
        )
        .map_err(db_error)?;
        tx.commit().map_err(db_error)?;
        Ok(true)
    }

    fn delete(&mut self, id: CardId) -> Fallible<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM documents WHERE id = ?1", params![id.to_hex()])
            .map_err(db_error)?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use flashdeck_core::card_store::CardStore;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_create_and_find_all() -> Fallible<()> {
        let mut store = SqliteStore::open_in_memory()?;
        let a = store.create(&CardDocument::new("Q1", "A1", "Math"))?;
        let b = store.create(&CardDocument::new("Q2", "A2", "Science"))?;
        assert_ne!(a, b);

        let all = store.find_all()?;
        assert_eq!(
            all,
            vec![
                (a, CardDocument::new("Q1", "A1", "Math")),
                (b, CardDocument::new("Q2", "A2", "Science")),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_update_and_delete() -> Fallible<()> {
        let mut store = SqliteStore::open_in_memory()?;
        let id = store.create(&CardDocument::new("Q", "A", "Math"))?;
        let patch = CardPatch {
            question: "Q'".to_string(),
            answer: "A'".to_string(),
            category: None,
        };
        assert!(store.update(id, &patch)?);
        // Rewriting identical content still counts as found.
        assert!(store.update(id, &patch)?);
        assert_eq!(
            store.find_all()?,
            vec![(id, CardDocument::new("Q'", "A'", "Math"))]
        );

        assert!(store.delete(id)?);
        assert!(!store.delete(id)?);
        assert!(!store.update(id, &patch)?);
        assert!(store.find_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_document_without_category() -> Fallible<()> {
        let store = SqliteStore::open_in_memory()?;
        store
            .conn
            .execute(
                "INSERT INTO documents (id, body) VALUES (?1, ?2)",
                params!["65f1a2b3c4d5e6f708192a3b", r#"{"question":"Q","answer":"A"}"#],
            )
            .map_err(db_error)?;
        let cards = CardStore::open(store)?;
        let card = cards.cards().next();
        assert_eq!(card.map(|c| c.category()), Some("Uncategorized"));
        Ok(())
    }

    #[test]
    fn test_corrupt_body_is_an_error() -> Fallible<()> {
        let store = SqliteStore::open_in_memory()?;
        store
            .conn
            .execute(
                "INSERT INTO documents (id, body) VALUES (?1, ?2)",
                params!["65f1a2b3c4d5e6f708192a3b", "not json"],
            )
            .map_err(db_error)?;
        assert!(store.find_all().is_err());
        assert!(CardStore::open(store).is_err());
        Ok(())
    }

    #[test]
    fn test_cards_survive_reopen() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashdeck.db");

        let mut cards = CardStore::open(SqliteStore::open(&path)?)?;
        let q1 = cards.add("Q1", "A1", "Math")?.id();
        let q2 = cards.add("Q2", "A2", "Math")?.id();
        cards.edit(q2, "Q2", "A2", Some("Science"))?;
        cards.delete(q1)?;
        drop(cards.close());

        let cards = CardStore::open(SqliteStore::open(&path)?)?;
        assert_eq!(cards.len(), 1);
        assert!(cards.find_by_id(q1).is_none());
        assert_eq!(cards.find_by_id(q2).map(|c| c.category()), Some("Science"));
        assert_eq!(cards.list_categories(), vec!["Science"]);
        assert_eq!(cards.queue_size(), 1);
        Ok(())
    }
}
