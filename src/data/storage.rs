//! SQLite storage layer for workout selection counts.
//!
//! Database schema:
//! - One table per catalog, named `<catalog>_counts`
//! - Columns: `item` (TEXT PRIMARY KEY), `count` (INTEGER DEFAULT 0)
//!
//! Every mutation runs in its own transaction, so a failed write leaves all
//! counts as they were.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{params, Connection};
use tracing::{debug, info};

use super::catalog::Catalog;
use super::models::{CountReport, CountSection, CounterRecord};
use crate::error::{Error, SqliteContext, StorageError, UsageError};

/// An open handle on the counter database.
///
/// The connection is released when the store is dropped; [`CounterStore::close`]
/// does the same but reports close-time failures. Once closed, every operation
/// fails with [`UsageError::Closed`].
pub struct CounterStore {
    conn: Option<Connection>,
    catalogs: Vec<Catalog>,
    path: PathBuf,
}

impl CounterStore {
    /// Open or create the database at `path` and make sure every catalog item
    /// has a counter row. Existing counts are kept.
    pub fn open(path: impl AsRef<Path>, catalogs: Vec<Catalog>) -> Result<Self, Error> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut conn = Connection::open(path).action("open database")?;
        initialize(&mut conn, &catalogs)?;
        info!(path = %path.display(), catalogs = catalogs.len(), "counter store ready");

        Ok(CounterStore {
            conn: Some(conn),
            catalogs,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> Result<&Connection, UsageError> {
        self.conn.as_ref().ok_or(UsageError::Closed)
    }

    /// Pick an item uniformly at random from `catalog` and add one to its count.
    pub fn pick_and_increment<R>(&mut self, catalog: &str, rng: &mut R) -> Result<String, Error>
    where
        R: Rng + ?Sized,
    {
        let conn = self.conn.as_mut().ok_or(UsageError::Closed)?;
        let catalog = find_catalog(&self.catalogs, catalog)?;

        let item = catalog
            .items()
            .choose(rng)
            .ok_or_else(|| UsageError::EmptyCatalog(catalog.name().to_string()))?
            .clone();
        let table = catalog.table();

        let tx = conn.transaction().action("begin increment")?;
        let updated = tx
            .execute(
                &format!("UPDATE {table} SET count = count + 1 WHERE item = ?1"),
                params![item],
            )
            .action("increment count")?;
        if updated != 1 {
            // Dropping the transaction rolls it back.
            return Err(StorageError::MissingRecord { table, item }.into());
        }
        tx.commit().action("commit increment")?;

        debug!(catalog = catalog.name(), %item, "picked");
        Ok(item)
    }

    /// All counters of one catalog, ordered by item
    #[allow(dead_code)] // Used in tests
    pub fn records(&self, catalog: &str) -> Result<Vec<CounterRecord>, Error> {
        let conn = self.conn()?;
        let catalog = find_catalog(&self.catalogs, catalog)?;
        Ok(read_records(conn, catalog)?)
    }

    /// Snapshot every catalog's counts. Read-only.
    pub fn display_counts(&self) -> Result<CountReport, Error> {
        let conn = self.conn()?;

        let mut sections = Vec::with_capacity(self.catalogs.len());
        for catalog in &self.catalogs {
            sections.push(CountSection {
                title: catalog.title().to_string(),
                records: read_records(conn, catalog)?,
            });
        }
        Ok(CountReport { sections })
    }

    /// Set every count in every catalog back to zero, keeping the rows.
    pub fn reset_counts(&mut self) -> Result<(), Error> {
        let conn = self.conn.as_mut().ok_or(UsageError::Closed)?;

        let tx = conn.transaction().action("begin reset")?;
        for catalog in &self.catalogs {
            tx.execute(&format!("UPDATE {} SET count = 0", catalog.table()), [])
                .action("reset counts")?;
        }
        tx.commit().action("commit reset")?;

        info!("all counts reset to 0");
        Ok(())
    }

    /// Release the connection.
    pub fn close(&mut self) -> Result<(), Error> {
        let conn = self.conn.take().ok_or(UsageError::Closed)?;
        conn.close()
            .map_err(|(_, source)| StorageError::Sqlite {
                action: "close database",
                source,
            })?;
        debug!(path = %self.path.display(), "counter store closed");
        Ok(())
    }
}

fn find_catalog<'a>(catalogs: &'a [Catalog], name: &str) -> Result<&'a Catalog, UsageError> {
    catalogs
        .iter()
        .find(|c| c.name() == name)
        .ok_or_else(|| UsageError::UnknownCatalog(name.to_string()))
}

/// Create the tables and add missing catalog rows in one transaction.
/// Rows are never removed here, even for items no longer in a catalog.
fn initialize(conn: &mut Connection, catalogs: &[Catalog]) -> Result<(), StorageError> {
    let tx = conn.transaction().action("begin initialization")?;

    for catalog in catalogs {
        let table = catalog.table();
        tx.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                item TEXT PRIMARY KEY,
                count INTEGER DEFAULT 0
            )"
        ))
        .action("create counter table")?;

        let mut insert = tx
            .prepare(&format!(
                "INSERT OR IGNORE INTO {table} (item, count) VALUES (?1, 0)"
            ))
            .action("prepare counter insert")?;
        for item in catalog.items() {
            insert.execute(params![item]).action("insert counter")?;
        }
    }

    tx.commit().action("commit initialization")
}

fn read_records(conn: &Connection, catalog: &Catalog) -> Result<Vec<CounterRecord>, StorageError> {
    let table = catalog.table();
    let mut stmt = conn
        .prepare(&format!("SELECT item, count FROM {table} ORDER BY item"))
        .action("read counts")?;

    let rows = stmt
        .query_map([], |row| {
            let item: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            Ok((item, count))
        })
        .action("read counts")?;

    let mut records = Vec::new();
    for row in rows {
        let (item, value) = row.action("read counts")?;
        let count = u64::try_from(value).map_err(|_| StorageError::InvalidCount {
            table: table.clone(),
            item: item.clone(),
            value,
        })?;
        records.push(CounterRecord { item, count });
    }
    Ok(records)
}
