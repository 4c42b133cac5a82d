use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use queens_core::{Coordinate, PlacementCache, Placement, SolutionSet};

use crate::error::StoreError;

/// File name used inside the data directory
pub const STORE_FILE_NAME: &str = "placements.jsonl";

/// One queen of one stored placement.
///
/// Records sharing an `id` make up a single placement. Coordinates are
/// 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQueen {
    pub id: u64,
    #[serde(rename = "N")]
    pub n: usize,
    pub row: usize,
    pub column: usize,
}

/// Queens collected under one id
#[derive(Debug, Clone, Default)]
struct Entry {
    n: usize,
    queens: Vec<Coordinate>,
}

/// Placement store backed by a JSON-lines file.
///
/// The file is read once when the store is opened; later writes are appended
/// to it and mirrored in memory.
pub struct PlacementStore {
    /// Location of the JSON-lines file
    path: PathBuf,
    /// Whether the store is enabled
    enabled: bool,
    /// Whether writes are skipped
    read_only: bool,
    /// Stored queens grouped by placement id
    entries: BTreeMap<u64, Entry>,
}

impl PlacementStore {
    /// Open the store at `path`, loading any records already there.
    ///
    /// A missing file is treated as an empty store and created on first write.
    ///
    /// # Example
    /// ```no_run
    /// use queens_store::PlacementStore;
    ///
    /// let store = PlacementStore::open("/tmp/queens/placements.jsonl").unwrap();
    /// println!("{} placements stored", store.len());
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = Self::load(&path)?;
        debug!(
            "Opened placement store {} with {} placements",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            enabled: true,
            read_only: false,
            entries,
        })
    }

    /// Default location of the store in the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "queens").map(|dirs| dirs.data_dir().join(STORE_FILE_NAME))
    }

    fn load(path: &Path) -> Result<BTreeMap<u64, Entry>, StoreError> {
        let mut entries: BTreeMap<u64, Entry> = BTreeMap::new();
        if !path.exists() {
            return Ok(entries);
        }

        let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| StoreError::io(path, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let record: StoredQueen =
                serde_json::from_str(&line).map_err(|source| StoreError::Json {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                })?;

            let entry = entries.entry(record.id).or_insert_with(|| Entry {
                n: record.n,
                queens: Vec::new(),
            });
            if entry.n != record.n {
                warn!(
                    "Placement {} mixes board sizes {} and {}",
                    record.id, entry.n, record.n
                );
            }
            entry.queens.push(Coordinate::new(record.row, record.column));
        }

        Ok(entries)
    }

    /// Set the read-only mode
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Set whether the store is enabled
    ///
    /// A disabled store never hits and silently drops writes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored placements across all board sizes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored placements per board size
    pub fn sizes(&self) -> BTreeMap<usize, usize> {
        let mut sizes = BTreeMap::new();
        for entry in self.entries.values() {
            *sizes.entry(entry.n).or_insert(0) += 1;
        }
        sizes
    }

    fn placement(id: u64, entry: &Entry) -> Result<Placement, StoreError> {
        let placement = Placement::from_coordinates(entry.queens.iter().copied())
            .map_err(|source| StoreError::Corrupt { id, source })?;

        if placement.size() != entry.n {
            return Err(StoreError::Corrupt {
                id,
                source: queens_core::QueensError::InvalidPlacement {
                    reason: format!("{} queens recorded for n = {}", placement.size(), entry.n),
                },
            });
        }
        Ok(placement)
    }

    fn ids_for(&self, n: usize) -> impl Iterator<Item = (&u64, &Entry)> + '_ {
        self.entries.iter().filter(move |(_, entry)| entry.n == n)
    }

    /// Append `records` to the file in a single write.
    ///
    /// If the write fails the file is truncated back to its previous length,
    /// so a placement is either stored whole or not at all.
    fn append(&self, records: &[StoredQueen]) -> Result<(), StoreError> {
        let buffer = self.encode(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        let previous_len = file
            .metadata()
            .map_err(|e| StoreError::io(&self.path, e))?
            .len();

        if let Err(e) = file.write_all(&buffer).and_then(|()| file.flush()) {
            if let Err(truncate) = file.set_len(previous_len) {
                warn!(
                    "Failed to roll back partial write to {}: {}",
                    self.path.display(),
                    truncate
                );
            }
            return Err(StoreError::io(&self.path, e));
        }
        Ok(())
    }

    /// Serialize `records` as JSON lines.
    fn encode(&self, records: &[StoredQueen]) -> Result<Vec<u8>, StoreError> {
        let mut buffer = Vec::new();
        for record in records {
            serde_json::to_writer(&mut buffer, record).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                line: 0,
                source,
            })?;
            buffer.push(b'\n');
        }
        Ok(buffer)
    }

    /// Remove every stored placement.
    ///
    /// The file is replaced by an empty one through a temporary file and a
    /// rename, so readers never see a partially truncated store.
    pub fn clear(&mut self) -> Result<usize, StoreError> {
        if !self.enabled || self.read_only {
            info!("Store is disabled or read-only, not clearing");
            return Ok(0);
        }

        let removed = self.entries.len();
        if self.path.exists() {
            let temp_path = self.path.with_extension("tmp");
            File::create(&temp_path).map_err(|e| StoreError::io(&temp_path, e))?;
            fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        }

        self.entries.clear();
        debug!("Cleared {} placements from {}", removed, self.path.display());
        Ok(removed)
    }
}

impl PlacementCache for PlacementStore {
    type Error = StoreError;

    fn lookup(&self, n: usize) -> Result<Option<Placement>, Self::Error> {
        if !self.enabled {
            return Ok(None);
        }

        match self.ids_for(n).next() {
            Some((&id, entry)) => {
                debug!("Store hit for n = {} (id {})", n, id);
                Self::placement(id, entry).map(Some)
            }
            None => Ok(None),
        }
    }

    fn lookup_all(&self, n: usize) -> Result<SolutionSet, Self::Error> {
        let mut set = SolutionSet::new(n);
        if !self.enabled {
            return Ok(set);
        }

        for (&id, entry) in self.ids_for(n) {
            let placement = Self::placement(id, entry)?;
            if !set
                .insert(placement)
                .map_err(|source| StoreError::Corrupt { id, source })?
            {
                debug!("Skipping duplicate placement {} for n = {}", id, n);
            }
        }
        Ok(set)
    }

    /// The empty placement of `n = 0` has no queens and so no records; it is
    /// never persisted.
    fn store(&mut self, n: usize, placement: &Placement, id: u64) -> Result<(), Self::Error> {
        if placement.size() != n {
            return Err(StoreError::SizeMismatch {
                id,
                n,
                size: placement.size(),
            });
        }
        if !self.enabled || self.read_only {
            info!("Store is disabled or read-only, not saving placement {}", id);
            return Ok(());
        }
        if placement.is_empty() {
            debug!("Not storing the empty placement {}", id);
            return Ok(());
        }
        if self.entries.contains_key(&id) {
            return Err(StoreError::DuplicateId { id });
        }

        let records: Vec<StoredQueen> = placement
            .iter()
            .map(|queen| StoredQueen {
                id,
                n,
                row: queen.row,
                column: queen.col,
            })
            .collect();
        self.append(&records)?;

        self.entries.insert(
            id,
            Entry {
                n,
                queens: placement.coordinates().to_vec(),
            },
        );
        debug!("Stored placement {} for n = {}", id, n);
        Ok(())
    }

    fn next_id(&self) -> Result<u64, Self::Error> {
        Ok(self.entries.keys().next_back().map_or(1, |id| id + 1))
    }
}
