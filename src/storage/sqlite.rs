use chrono::Utc;
use rusqlite::{params, Connection, Row};

use crate::model::{Posting, StorageError};

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the database and runs migrations.
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS postings (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                company TEXT NOT NULL DEFAULT '',
                location TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                stipend TEXT NOT NULL DEFAULT '',
                source TEXT NOT NULL DEFAULT '',
                link TEXT NOT NULL DEFAULT '',
                first_seen TEXT NOT NULL,
                last_seen TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS notified (
                posting_id TEXT PRIMARY KEY,
                notified_at TEXT NOT NULL
            );
            ",
        )?;

        // Columns added after the first release; guarantee they exist.
        Self::migrate_add_column_if_missing(&conn, "postings", "apply_url", "TEXT NOT NULL DEFAULT ''")?;
        Self::migrate_add_column_if_missing(&conn, "postings", "stipend_monthly", "INTEGER")?;

        Ok(Self { conn })
    }

    /// Adds a column to a table if it is not already present.
    fn migrate_add_column_if_missing(
        conn: &Connection,
        table: &str,
        column: &str,
        column_def: &str,
    ) -> Result<(), StorageError> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let existing_columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<_, _>>()?;

        if !existing_columns.iter().any(|c| c == column) {
            let alter_sql = format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, column_def);
            conn.execute(&alter_sql, [])?;
        }

        Ok(())
    }

    /// Inserts or refreshes a posting. `first_seen` survives re-scrapes;
    /// stipend fields and `last_seen` track the latest listing state.
    pub fn save_posting(
        &self,
        posting: &Posting,
        stipend_monthly: Option<i64>,
    ) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO postings (
                id, title, company, location, description, stipend,
                source, link, apply_url, stipend_monthly, first_seen, last_seen
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)
            ON CONFLICT(id) DO UPDATE SET
                stipend = excluded.stipend,
                stipend_monthly = excluded.stipend_monthly,
                location = excluded.location,
                last_seen = excluded.last_seen",
            params![
                posting.id(),
                posting.title,
                posting.company,
                posting.location,
                posting.description,
                posting.stipend,
                posting.source,
                posting.link,
                posting.apply_url,
                stipend_monthly,
                now,
            ],
        )?;
        Ok(())
    }

    /// Idempotent set membership for the already-alerted state.
    pub fn is_notified(&self, posting_id: &str) -> Result<bool, StorageError> {
        let mut stmt = self.conn.prepare("SELECT 1 FROM notified WHERE posting_id = ?1")?;
        let mut rows = stmt.query(params![posting_id])?;
        Ok(rows.next()?.is_some())
    }

    pub fn mark_notified(&self, posting_id: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO notified (posting_id, notified_at) VALUES (?1, datetime('now'))",
            params![posting_id],
        )?;
        Ok(())
    }

    /// Most recently alerted posting, for the /last command.
    pub fn get_last_notified(&self) -> Result<Option<Posting>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.title, p.company, p.location, p.description, p.stipend,
                    p.source, p.link, p.apply_url
             FROM postings p
             JOIN notified n ON n.posting_id = p.id
             ORDER BY n.notified_at DESC, p.last_seen DESC
             LIMIT 1",
        )?;
        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Self::map_posting(row)?))
        } else {
            Ok(None)
        }
    }

    /// Best-paying stored postings with a parseable stipend, for /top5.
    pub fn get_top_paid(&self, limit: usize) -> Result<Vec<Posting>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT title, company, location, description, stipend,
                    source, link, apply_url
             FROM postings
             WHERE stipend_monthly IS NOT NULL
             ORDER BY stipend_monthly DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| Self::map_posting(row))?;

        let mut postings = Vec::new();
        for posting in rows {
            postings.push(posting?);
        }
        Ok(postings)
    }

    pub fn count_postings(&self) -> Result<i64, StorageError> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM postings", [], |row| row.get(0))?)
    }

    pub fn count_notified(&self) -> Result<i64, StorageError> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM notified", [], |row| row.get(0))?)
    }

    fn map_posting(row: &Row) -> Result<Posting, rusqlite::Error> {
        Ok(Posting {
            title: row.get(0)?,
            company: row.get(1)?,
            location: row.get(2)?,
            description: row.get(3)?,
            stipend: row.get(4)?,
            source: row.get(5)?,
            link: row.get(6)?,
            apply_url: row.get(7)?,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> SqliteStorage {
        SqliteStorage::new(":memory:").unwrap()
    }

    fn posting(title: &str, stipend: &str, link: &str) -> Posting {
        Posting {
            title: title.into(),
            company: "Acme".into(),
            stipend: stipend.into(),
            link: link.into(),
            ..Default::default()
        }
    }

    #[test]
    fn notified_set_membership_round_trip() {
        let s = storage();
        let p = posting("Backend Intern", "40k", "https://x/1");
        assert!(!s.is_notified(&p.id()).unwrap());
        s.mark_notified(&p.id()).unwrap();
        assert!(s.is_notified(&p.id()).unwrap());
        // Marking twice is fine.
        s.mark_notified(&p.id()).unwrap();
        assert!(s.is_notified(&p.id()).unwrap());
    }

    #[test]
    fn save_is_an_upsert() {
        let s = storage();
        let mut p = posting("Backend Intern", "40k", "https://x/1");
        s.save_posting(&p, Some(40000)).unwrap();
        p.stipend = "50k".into();
        s.save_posting(&p, Some(50000)).unwrap();
        assert_eq!(s.count_postings().unwrap(), 1);
        let top = s.get_top_paid(5).unwrap();
        assert_eq!(top[0].stipend, "50k");
    }

    #[test]
    fn top_paid_ranks_by_parsed_stipend() {
        let s = storage();
        s.save_posting(&posting("A", "20k", "https://x/a"), Some(20000)).unwrap();
        s.save_posting(&posting("B", "60k", "https://x/b"), Some(60000)).unwrap();
        s.save_posting(&posting("C", "Check listing", "https://x/c"), None).unwrap();
        s.save_posting(&posting("D", "40k", "https://x/d"), Some(40000)).unwrap();

        let top = s.get_top_paid(2).unwrap();
        let titles: Vec<_> = top.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "D"]);
    }

    #[test]
    fn last_notified_returns_the_alerted_posting() {
        let s = storage();
        let a = posting("A", "20k", "https://x/a");
        let b = posting("B", "60k", "https://x/b");
        s.save_posting(&a, Some(20000)).unwrap();
        s.save_posting(&b, Some(60000)).unwrap();
        assert!(s.get_last_notified().unwrap().is_none());

        s.mark_notified(&b.id()).unwrap();
        let last = s.get_last_notified().unwrap().unwrap();
        assert_eq!(last.title, "B");
        assert_eq!(s.count_notified().unwrap(), 1);
    }
}
