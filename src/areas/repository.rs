use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::config::Config;
use crate::artifacts::core::ignore::Ignore;
use crate::artifacts::status::status_info::Status;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    config: Config,
    ignore: Ignore,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(config: Config, writer: Box<dyn std::io::Write>) -> Self {
        let index = Index::new(config.index_path().into_boxed_path());
        let database = Database::new(config.objects_path().into_boxed_path());
        let workspace = Workspace::new(config.path().into());
        let refs = Refs::new(&config);
        let ignore = Ignore::new(&config);

        Repository {
            config,
            ignore,
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        }
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ignore(&self) -> &Ignore {
        &self.ignore
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// The index as last loaded; call `rehydrate` before relying on it.
    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn status_engine(&'_ self) -> Status<'_> {
        Status::new(self)
    }
}
