//! Read-only university catalog: typed records, JSON ingestion, and providers.
//!
//! Raw catalog entries are converted into [`University`] records once, at load time.
//! Entries that cannot be converted are skipped and reported instead of failing the
//! whole catalog.

mod loader;
pub mod records;

pub use records::{Dormitory, Program, University};

use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable snapshot of the reference catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    universities: Vec<University>,
    skipped: Vec<SkippedRecord>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let (universities, skipped) = loader::parse_records(reader)?;
        Ok(Self::assemble(universities, skipped))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a catalog from in-memory records, applying the same checks as file ingestion.
    pub fn from_universities(universities: Vec<University>) -> Self {
        let records = universities
            .into_iter()
            .map(|university| (Some(u64::from(university.id)), Ok(university)));
        let (universities, skipped) = loader::ingest(records);
        Self::assemble(universities, skipped)
    }

    fn assemble(universities: Vec<University>, skipped: Vec<SkippedRecord>) -> Self {
        Self {
            universities,
            skipped,
            loaded_at: Utc::now(),
        }
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn find(&self, id: u32) -> Option<&University> {
        self.universities
            .iter()
            .find(|university| university.id == id)
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}

/// Catalog entry that was left out during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Zero-based position in the source collection.
    pub position: usize,
    pub id: Option<u64>,
    pub reason: MalformedRecord,
}

/// Reasons a catalog entry is rejected at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedRecord {
    #[error("record does not match the university schema: {0}")]
    Invalid(String),
    #[error("university lists no programs")]
    NoPrograms,
    #[error("program '{program}' has grant_percent {value} outside 0-100")]
    GrantPercentOutOfRange { program: String, value: u8 },
    #[error("rating is not a finite number")]
    InvalidRating,
    #[error("{field} must be a finite, non-negative amount")]
    InvalidCost { field: String },
    #[error("university id {0} already present in the catalog")]
    DuplicateId(u32),
}

/// The reference catalog could not be loaded at all.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable at {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not a JSON array of universities: {0}")]
    Format(#[from] serde_json::Error),
}

/// Source of catalog snapshots for the recommendation service.
pub trait CatalogProvider: Send + Sync {
    fn load(&self) -> Result<Arc<Catalog>, CatalogError>;
}

/// Reads the catalog file on every load.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        Catalog::from_path(&self.path).map(Arc::new)
    }
}

/// Snapshot loaded once and shared by every request.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Arc<Catalog>,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn preload<P: CatalogProvider>(provider: &P) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: provider.load()?,
        })
    }

    pub fn snapshot(&self) -> &Catalog {
        &self.catalog
    }
}

impl CatalogProvider for StaticCatalog {
    fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        Ok(Arc::clone(&self.catalog))
    }
}
