use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::files::file::File;
use crate::artifacts::files::file_set::FileSet;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_line::StatusLine;
use derive_new::new;
use tracing::debug;

/// Result of both status passes
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    /// Index against the last commit
    pub(crate) staged: Vec<StatusLine>,
    /// Working directory against the index
    pub(crate) unstaged: Vec<StatusLine>,
    /// Both passes folded together, one record per changed path
    pub(crate) combined: FileSet,
}

impl StatusInfo {
    pub fn staged(&self) -> &[StatusLine] {
        &self.staged
    }

    pub fn unstaged(&self) -> &[StatusLine] {
        &self.unstaged
    }

    /// Staged rows first, then working directory rows.
    pub fn lines(&self) -> impl Iterator<Item = &StatusLine> {
        self.staged.iter().chain(self.unstaged.iter())
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }

    /// Changed paths that are tracked by the index or the last commit.
    pub fn tracked_changes(&self) -> Vec<String> {
        self.combined
            .iter()
            .filter(|file| !StatusLine::from(*file).is_untracked())
            .map(|file| file.path.display().to_string())
            .collect()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Reload the index and run both passes.
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let mut index = self.repository.index();
        index.rehydrate()?;

        let staged = Self::changed(self.index_pass(&index)?);
        let unstaged = Self::changed(self.worktree_pass(&index)?);

        let mut combined = staged.clone();
        combined.merge(unstaged.clone());

        debug!(
            staged = staged.len(),
            unstaged = unstaged.len(),
            "status computed"
        );

        Ok(StatusInfo {
            staged: staged.iter().map(StatusLine::from).collect(),
            unstaged: unstaged.iter().map(StatusLine::from).collect(),
            combined,
        })
    }

    /// Index merged into the last commit's files.
    pub fn index_pass(&self, index: &Index) -> anyhow::Result<FileSet> {
        let mut files = self.head_file_set()?;
        files.merge_from_index(index.file_set());

        Ok(files)
    }

    /// Working directory merged into the index's files.
    pub fn worktree_pass(&self, index: &Index) -> anyhow::Result<FileSet> {
        let worktree = self
            .repository
            .workspace()
            .scan(self.repository.ignore())?;

        let mut files = index.file_set();
        files.merge_from_worktree(worktree);

        Ok(files)
    }

    /// Files of the current branch tip; an unborn branch has none.
    pub fn head_file_set(&self) -> anyhow::Result<FileSet> {
        match self.repository.refs().last_commit() {
            Ok(oid) => self.commit_file_set(&oid),
            Err(error) if RepositoryError::is_no_commit_yet(&error) => Ok(FileSet::default()),
            Err(error) => Err(error),
        }
    }

    pub fn commit_file_set(&self, commit_oid: &ObjectId) -> anyhow::Result<FileSet> {
        let database = self.repository.database();
        let commit = database.parse_object_as_commit(commit_oid)?;

        Ok(database
            .flatten_tree(commit.tree_oid())?
            .into_iter()
            .map(|(path, oid)| File::from_commit(path, oid))
            .collect())
    }

    fn changed(files: FileSet) -> FileSet {
        files
            .into_iter()
            .filter(|file| !file.is_unchanged())
            .collect()
    }
}
