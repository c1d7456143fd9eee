//! Nested tree construction from a flat list of staged files
//!
//! Paths are split into components and inserted into a recursive builder.
//! Writing is post-order: every child tree is stored and its digest known
//! before the parent tree is encoded.
//!
//! Children are kept in canonical git order: names compare bytewise, with
//! directories compared as if their name ended in `/`.

use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TreeNode {
    File(ObjectId),
    Directory(TreeBuilder),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeBuilder {
    // directory keys carry a trailing '/' so the map yields canonical order
    children: BTreeMap<String, TreeNode>,
}

impl TreeBuilder {
    pub fn build<'p>(
        files: impl IntoIterator<Item = (&'p Path, ObjectId)>,
    ) -> anyhow::Result<Self> {
        let mut root = TreeBuilder::default();

        for (path, oid) in files {
            let components = path
                .iter()
                .map(|component| {
                    component
                        .to_str()
                        .map(str::to_owned)
                        .with_context(|| format!("Invalid path {}", path.display()))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            root.insert(&components, oid);
        }

        Ok(root)
    }

    fn insert(&mut self, components: &[String], oid: ObjectId) {
        match components {
            [] => {}
            [name] => {
                self.children.insert(name.clone(), TreeNode::File(oid));
            }
            [directory, rest @ ..] => {
                let node = self
                    .children
                    .entry(format!("{directory}/"))
                    .or_insert_with(|| TreeNode::Directory(TreeBuilder::default()));

                if let TreeNode::Directory(subtree) = node {
                    subtree.insert(rest, oid);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Hand every tree to `store` children first; returns the root digest.
    pub fn traverse<F>(&self, store: &mut F) -> anyhow::Result<ObjectId>
    where
        F: FnMut(Tree) -> anyhow::Result<ObjectId>,
    {
        let mut entries = Vec::with_capacity(self.children.len());

        for (key, node) in &self.children {
            let entry = match node {
                TreeNode::File(oid) => TreeEntry::new(key.clone(), EntryMode::Regular, *oid),
                TreeNode::Directory(subtree) => {
                    let oid = subtree.traverse(store)?;
                    let name = key.trim_end_matches('/').to_string();
                    TreeEntry::new(name, EntryMode::Directory, oid)
                }
            };
            entries.push(entry);
        }

        store(Tree::new(entries))
    }
}
