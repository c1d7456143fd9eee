//! Staging area
//!
//! The index records what the next commit will contain: one entry per
//! tracked file, holding its blob digest and the filesystem metadata
//! observed when it was staged.
//!
//! ## Index File Format
//!
//! The index file contains:
//! - Header: Signature, version, and entry count
//! - Entries: Sorted list of tracked files with metadata
//! - Checksum: SHA-1 hash of the entire index for integrity verification
//!
//! A missing index file is an empty index. Writes go to `index.lock` under
//! an exclusive lock and are renamed over `index`, so a reader never sees a
//! partially written file.

use crate::artifacts::files::file::File;
use crate::artifacts::files::file_set::FileSet;
use crate::artifacts::index::checksum::Checksummed;
use crate::artifacts::index::index_entry::{ENTRY_BLOCK, ENTRY_MIN_SIZE, IndexEntry};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::object::{Packable, Unpackable};
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use tracing::info;

const LOCK_EXTENSION: &str = "lock";

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
    /// Tracked files mapped by path
    entries: BTreeMap<PathBuf, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index contents as a file set with neutral statuses.
    pub fn file_set(&self) -> FileSet {
        self.entries().cloned().map(File::from).collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.changed = false;
    }

    /// Load the index from disk, replacing whatever is held in memory.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open index {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        // if the index file is empty, return early
        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksummed::new(lock.deref_mut());
        let header_bytes = reader.take_bytes(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;
        self.parse_entries(header.entries_count, &mut reader)?;

        reader.verify()
    }

    /// Entries are NUL-terminated and padded to whole blocks, so read the
    /// fixed part and then whole blocks until the last byte is a NUL.
    fn parse_entries(
        &mut self,
        entries_count: u32,
        reader: &mut Checksummed<impl Read>,
    ) -> anyhow::Result<()> {
        for _ in 0..entries_count {
            let mut entry_bytes = reader.take_bytes(ENTRY_MIN_SIZE)?.to_vec();

            while entry_bytes.last() != Some(&0) {
                entry_bytes.extend_from_slice(&reader.take_bytes(ENTRY_BLOCK)?);
            }

            let entry = IndexEntry::deserialize(std::io::Cursor::new(Bytes::from(entry_bytes)))?;
            self.entries.insert(entry.name.clone(), entry);
        }

        Ok(())
    }

    /// Stage `entry`, replacing any entry that would conflict with it: a
    /// file where one of its parent directories is expected, or files below
    /// it when it replaces a directory.
    pub fn add(&mut self, entry: IndexEntry) {
        for parent in entry.name.ancestors().skip(1) {
            self.entries.remove(parent);
        }
        self.remove_children(&entry.name);

        self.entries.insert(entry.name.clone(), entry);
        self.changed = true;
    }

    pub fn remove(&mut self, path: &Path) {
        if self.entries.remove(path).is_some() {
            self.changed = true;
        }
        if self.remove_children(path) {
            self.changed = true;
        }
    }

    fn remove_children(&mut self, path: &Path) -> bool {
        let children = self
            .entries
            .keys()
            .filter(|entry_path| entry_path.starts_with(path) && entry_path.as_path() != path)
            .cloned()
            .collect::<Vec<_>>();

        for child in &children {
            self.entries.remove(child);
        }

        !children.is_empty()
    }

    /// Replace every entry at once.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = IndexEntry>) {
        self.entries = entries
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect();
        self.changed = true;
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let lock_path = self.path.with_extension(LOCK_EXTENSION);

        {
            let mut lock_file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&lock_path)
                .with_context(|| format!("Unable to create {}", lock_path.display()))?;
            let mut lock =
                file_guard::lock(&mut lock_file, file_guard::Lock::Exclusive, 0, 1)?;

            let mut writer = Checksummed::new(lock.deref_mut());
            writer.write_all(&IndexHeader::new(self.entries.len() as u32).serialize()?)?;
            for entry in self.entries() {
                writer.write_all(&entry.serialize()?)?;
            }

            writer
                .finish()?
                .sync_all()
                .with_context(|| format!("Unable to sync {}", lock_path.display()))?;
        }

        std::fs::rename(&lock_path, &self.path)
            .with_context(|| format!("Unable to replace index {}", self.path.display()))?;

        info!(entries = self.entries.len(), "index written");
        self.changed = false;

        Ok(())
    }
}
