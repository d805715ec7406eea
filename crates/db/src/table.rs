//! Generic CSV-backed table.
//!
//! A table owns one CSV file with a fixed header row. Reads load and parse
//! the whole file; mutations rewrite it in full by writing a temporary
//! sibling file and renaming it over the original, so a rewrite either
//! lands completely or not at all.
//!
//! Alongside the CSV file a `<file>.seq` sidecar records the largest id ever
//! handed out, so ids are never reused after the highest record is deleted.
//! The sidecar is replaced the same way as the table.

use std::collections::HashSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use taskdesk_core::types::DbId;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StoreError;

/// A row type that can be stored in a [`CsvTable`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human-readable entity name used in errors and logs.
    const ENTITY: &'static str;
    /// Expected header row, in column order. Must match the serialized field order.
    const HEADERS: &'static [&'static str];

    fn id(&self) -> DbId;
}

/// One CSV file holding every record of type `R`.
#[derive(Debug)]
pub struct CsvTable<R> {
    path: PathBuf,
    seq_path: PathBuf,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> CsvTable<R> {
    /// Open the table at `path`, creating parent directories and a
    /// header-only file if nothing exists there yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let table = Self {
            seq_path: sibling(&path, ".seq"),
            path,
            write_lock: Mutex::new(()),
            _record: PhantomData,
        };

        let exists = fs::try_exists(&table.path)
            .await
            .map_err(|e| StoreError::io(&table.path, e))?;
        if !exists {
            table.save(&[]).await?;
            tracing::info!(entity = R::ENTITY, path = %table.path.display(), "Created empty table");
        }

        Ok(table)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the table's write lock. Hold the guard across a
    /// load-modify-save sequence so writers in this process do not
    /// overwrite each other.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read and parse every row, in file order.
    pub async fn load(&self) -> Result<Vec<R>, StoreError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        self.decode(&bytes)
    }

    /// Replace the file contents with `rows`.
    pub async fn save(&self, rows: &[R]) -> Result<(), StoreError> {
        let bytes = self.encode(rows)?;
        replace_file(&self.path, &bytes).await?;

        tracing::debug!(entity = R::ENTITY, rows = rows.len(), "Rewrote table");
        Ok(())
    }

    /// Allocate the id for a new row given the current contents and persist
    /// the new high-water mark.
    pub async fn next_id(&self, rows: &[R]) -> Result<DbId, StoreError> {
        let max_live = rows.iter().map(Record::id).max().unwrap_or(0);
        let highest = max_live.max(self.high_water().await?);
        let next = highest.checked_add(1).ok_or_else(|| {
            StoreError::corrupt(
                &self.path,
                format!("{} ids exhausted at {highest}", R::ENTITY),
            )
        })?;

        replace_file(&self.seq_path, next.to_string().as_bytes()).await?;
        Ok(next)
    }

    async fn high_water(&self) -> Result<DbId, StoreError> {
        match fs::read_to_string(&self.seq_path).await {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                StoreError::corrupt(
                    &self.seq_path,
                    format!("invalid id high-water mark '{}'", raw.trim()),
                )
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(StoreError::io(&self.seq_path, e)),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<R>, StoreError> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| StoreError::csv(&self.path, e))?
            .clone();
        if headers.iter().ne(R::HEADERS.iter().copied()) {
            return Err(StoreError::corrupt(
                &self.path,
                format!(
                    "expected header '{}', found '{}'",
                    R::HEADERS.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for result in reader.deserialize::<R>() {
            let row = result.map_err(|e| StoreError::csv(&self.path, e))?;
            let id = row.id();
            if id <= 0 {
                return Err(StoreError::corrupt(
                    &self.path,
                    format!("{} has non-positive id {id}", R::ENTITY),
                ));
            }
            if !seen.insert(id) {
                return Err(StoreError::corrupt(
                    &self.path,
                    format!("duplicate {} id {id}", R::ENTITY),
                ));
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn encode(&self, rows: &[R]) -> Result<Vec<u8>, StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(R::HEADERS)
            .map_err(|e| StoreError::csv(&self.path, e))?;
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| StoreError::csv(&self.path, e))?;
        }

        writer
            .into_inner()
            .map_err(|e| StoreError::io(&self.path, e.into_error()))
    }
}

/// Write `bytes` to a temporary sibling of `path`, sync it, and rename it
/// over `path`.
async fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let tmp_path = sibling(path, ".tmp");

    let mut file = fs::File::create(&tmp_path)
        .await
        .map_err(|e| StoreError::io(&tmp_path, e))?;
    file.write_all(bytes)
        .await
        .map_err(|e| StoreError::io(&tmp_path, e))?;
    file.sync_all()
        .await
        .map_err(|e| StoreError::io(&tmp_path, e))?;
    drop(file);

    fs::rename(&tmp_path, path)
        .await
        .map_err(|e| StoreError::io(path, e))
}

/// `path` with `suffix` appended to the file name (`tasks.csv` -> `tasks.csv.seq`).
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
