//! Insertion-ordered collection of files keyed by path
//!
//! The sequence of files and the path lookup are kept behind one type so
//! that every path in the sequence appears exactly once in the lookup and
//! vice versa. Files are never removed; merges only update or append.

use crate::artifacts::files::file::File;
use crate::artifacts::files::file_status::{IndexStatus, WorktreeStatus};
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<File>,
    lookup: HashMap<PathBuf, usize>,
}

impl FileSet {
    pub fn new(files: impl IntoIterator<Item = File>) -> Self {
        let mut file_set = FileSet::default();
        for file in files {
            file_set.upsert(file);
        }
        file_set
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &File> {
        self.files.iter()
    }

    pub fn into_files(self) -> Vec<File> {
        self.files
    }

    pub fn contains(&self, path: &Path) -> Option<&File> {
        self.lookup.get(path).map(|&position| &self.files[position])
    }

    fn get_mut(&mut self, path: &Path) -> Option<&mut File> {
        self.lookup
            .get(path)
            .copied()
            .map(move |position| &mut self.files[position])
    }

    /// Replace the record for the file's path, or append it.
    pub fn upsert(&mut self, file: File) {
        match self.lookup.get(&file.path) {
            Some(&position) => self.files[position] = file,
            None => self.push(file),
        }
    }

    fn push(&mut self, file: File) {
        debug_assert!(!self.lookup.contains_key(&file.path));

        self.lookup.insert(file.path.clone(), self.files.len());
        self.files.push(file);
    }

    /// Fill in statuses for shared paths without overwriting ones already
    /// set, and adopt paths only `other` knows about.
    pub fn merge(&mut self, other: FileSet) {
        for file in other.files {
            match self.get_mut(&file.path) {
                Some(existing) => {
                    if existing.index_status == IndexStatus::Unmodified {
                        existing.index_status = file.index_status;
                    }
                    if existing.worktree_status == WorktreeStatus::Matches {
                        existing.worktree_status = file.worktree_status;
                    }
                }
                None => self.push(file),
            }
        }
    }

    /// Reconcile a commit-derived set (`self`) with the index.
    ///
    /// - only in the index: added
    /// - in both: index metadata is copied over, a different digest means updated
    /// - only in `self`: deleted from the index
    pub fn merge_from_index(&mut self, index: FileSet) {
        for file in self.files.iter_mut() {
            if index.contains(&file.path).is_none() {
                file.index_status = IndexStatus::Deleted;
            }
        }

        for mut file in index.files {
            match self.get_mut(&file.path) {
                Some(existing) => {
                    existing.metadata = file.metadata;
                    if !ObjectId::same(file.oid.as_ref(), existing.oid.as_ref()) {
                        existing.index_status = IndexStatus::Updated;
                    }
                }
                None => {
                    file.index_status = IndexStatus::Added;
                    self.push(file);
                }
            }
        }
    }

    /// Reconcile an index-derived set (`self`) with a working directory scan.
    ///
    /// Change detection compares modification times only: a touched file
    /// with identical content is reported as changed.
    pub fn merge_from_worktree(&mut self, worktree: FileSet) {
        for file in self.files.iter_mut() {
            if worktree.contains(&file.path).is_none() {
                file.worktree_status = WorktreeStatus::Deleted;
            }
        }

        for mut file in worktree.files {
            match self.get_mut(&file.path) {
                Some(existing) => match (&existing.metadata, &file.metadata) {
                    (None, _) => {
                        existing.worktree_status = WorktreeStatus::Untracked;
                        existing.index_status = IndexStatus::Untracked;
                    }
                    (Some(recorded), Some(observed)) if !recorded.mtime_match(observed) => {
                        existing.worktree_status = WorktreeStatus::Changed;
                        existing.metadata = file.metadata;
                    }
                    _ => {}
                },
                None => {
                    file.worktree_status = WorktreeStatus::Untracked;
                    file.index_status = IndexStatus::Untracked;
                    self.push(file);
                }
            }
        }
    }

    /// Files of `other` whose path is absent from `self`.
    pub fn complement(&self, other: &FileSet) -> FileSet {
        other
            .iter()
            .filter(|file| self.contains(&file.path).is_none())
            .cloned()
            .collect()
    }
}

impl FromIterator<File> for FileSet {
    fn from_iter<T: IntoIterator<Item = File>>(iter: T) -> Self {
        FileSet::new(iter)
    }
}

impl IntoIterator for FileSet {
    type Item = File;
    type IntoIter = std::vec::IntoIter<File>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
