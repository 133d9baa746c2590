use rusqlite::{params, Connection};
use std::error::Error;

use crate::faq::record::Record;
use crate::faq::seed::SeedQuestion;

/// SQLite-backed question store. Variations live in a JSON text column and
/// are validated when rows are read back.
pub struct FaqStore {
    conn: Connection,
}

impl FaqStore {
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(path)?;
        Ok(FaqStore { conn })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(FaqStore { conn })
    }

    pub fn init(&self) -> rusqlite::Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                answer TEXT NOT NULL,
                variations TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub fn is_empty(&self) -> rusqlite::Result<bool> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count == 0)
    }

    pub fn seed(&mut self, questions: &[SeedQuestion]) -> Result<(), Box<dyn Error>> {
        let tx = self.conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO questions (text, answer, variations) VALUES (?, ?, ?)",
            )?;

            for question in questions {
                let variations = serde_json::to_string(question.variations)?;
                stmt.execute(params![question.text, question.answer, variations])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Full snapshot of every stored question, in insertion order.
    pub fn load_all(&self) -> rusqlite::Result<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text, answer, variations FROM questions ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_variations: String = row.get(3)?;
            let variations = serde_json::from_str(&raw_variations).unwrap_or_else(|e| {
                eprintln!("Warning: malformed variations for question {}: {}", id, e);
                Vec::new()
            });

            Ok(Record {
                id,
                question: row.get(1)?,
                answer: row.get(2)?,
                variations,
            })
        })?;

        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::seed::DEFAULT_QUESTIONS;

    fn seeded_store() -> FaqStore {
        let mut store = FaqStore::open_in_memory().unwrap();
        store.init().unwrap();
        store.seed(DEFAULT_QUESTIONS).unwrap();
        store
    }

    #[test]
    fn seeding_fills_an_empty_store() {
        let store = seeded_store();
        assert!(!store.is_empty().unwrap());

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), DEFAULT_QUESTIONS.len());
    }

    #[test]
    fn records_come_back_in_insertion_order() {
        let records = seeded_store().load_all().unwrap();
        assert_eq!(records[0].question, "Какие факультеты есть в университете?");
        assert_eq!(records[1].question, "Какие проходные баллы?");
        assert!(records[0].id < records[1].id);
    }

    #[test]
    fn variations_round_trip_through_json_column() {
        let records = seeded_store().load_all().unwrap();
        assert_eq!(
            records[0].variations,
            vec!["Какие есть направления?", "Перечислите факультеты"]
        );
    }

    #[test]
    fn malformed_variations_degrade_to_empty() {
        let store = FaqStore::open_in_memory().unwrap();
        store.init().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO questions (text, answer, variations) VALUES (?, ?, ?)",
                params!["Вопрос?", "Ответ", "not json"],
            )
            .unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].variations.is_empty());
    }

    #[test]
    fn fresh_store_is_empty() {
        let store = FaqStore::open_in_memory().unwrap();
        store.init().unwrap();
        assert!(store.is_empty().unwrap());
        assert!(store.load_all().unwrap().is_empty());
    }
}
