//! Content-addressable object store
//!
//! Objects live under `objects/<2 hex>/<38 hex>` as zlib-compressed
//! `<type> <size>\0<content>` sequences. The digest is taken over the
//! uncompressed sequence, so an object is streamed once through the hasher
//! and the compressor into a temporary file, which is then renamed into
//! place. An object that already exists is never rewritten.

use crate::artifacts::objects::blob::{Blob, StoredBlob};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::{ObjectHeader, ObjectType};
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::objects::{OBJECT_ID_LENGTH, tree_builder::TreeBuilder};
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

/// Feeds every byte to the digest before passing it on
struct HashingWriter<W: Write> {
    inner: W,
    digest: Sha1,
    written: u64,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        HashingWriter {
            inner,
            digest: Sha1::new(),
            written: 0,
        }
    }

    fn finish(self) -> anyhow::Result<(ObjectId, u64, W)> {
        let oid = ObjectId::try_from_bytes(self.digest.finalize().as_slice())?;
        Ok((oid, self.written, self.inner))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.digest.update(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.path.join(oid.to_path()).exists()
    }

    /// Stream `header` followed by `content` into the store.
    ///
    /// Fails if `content` does not yield exactly `header.size` bytes.
    pub fn write_object(
        &self,
        header: ObjectHeader,
        content: impl Read,
    ) -> anyhow::Result<ObjectId> {
        std::fs::create_dir_all(&self.path).with_context(|| {
            format!("Unable to create object directory {}", self.path.display())
        })?;

        let temp_object_path = self.path.join(Self::generate_temp_name());
        let result = self.write_temp_object(&temp_object_path, header, content);

        let oid = match result {
            Ok(oid) => oid,
            Err(error) => {
                let _ = std::fs::remove_file(&temp_object_path);
                return Err(error);
            }
        };

        let object_path = self.path.join(oid.to_path());
        if object_path.exists() {
            std::fs::remove_file(&temp_object_path).with_context(|| {
                format!(
                    "Unable to remove temporary object {}",
                    temp_object_path.display()
                )
            })?;
            debug!(oid = %oid, object_type = %header.object_type, "object already stored");
            return Ok(oid);
        }

        let object_dir = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).with_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).with_context(|| {
            format!("Unable to rename object file to {}", object_path.display())
        })?;
        debug!(oid = %oid, object_type = %header.object_type, size = header.size, "object written");

        Ok(oid)
    }

    fn write_temp_object(
        &self,
        temp_object_path: &Path,
        header: ObjectHeader,
        content: impl Read,
    ) -> anyhow::Result<ObjectId> {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_object_path)
            .with_context(|| {
                format!(
                    "Unable to open object file {}",
                    temp_object_path.display()
                )
            })?;
        let encoder = ZlibEncoder::new(BufWriter::new(file), Compression::default());

        let (oid, encoder) = Self::stream(header, content, encoder)?;
        let writer = encoder
            .finish()
            .context("Unable to finish compressing object content")?;
        let file = writer.into_inner().map_err(|error| error.into_error()).with_context(|| {
            format!(
                "Unable to write object file {}",
                temp_object_path.display()
            )
        })?;
        // the object must be on disk before it is renamed into place
        file.sync_all().with_context(|| {
            format!("Unable to sync object file {}", temp_object_path.display())
        })?;

        Ok(oid)
    }

    fn stream<W: Write>(
        header: ObjectHeader,
        content: impl Read,
        sink: W,
    ) -> anyhow::Result<(ObjectId, W)> {
        let header_bytes = header.to_bytes();
        let mut writer = HashingWriter::new(sink);

        std::io::copy(&mut Cursor::new(&header_bytes).chain(content), &mut writer)
            .context("Unable to stream object content")?;

        let (oid, written, sink) = writer.finish()?;
        let expected = header_bytes.len() as u64 + header.size;
        if written != expected {
            anyhow::bail!(
                "object content changed while hashing: expected {} bytes, read {}",
                header.size,
                written.saturating_sub(header_bytes.len() as u64)
            );
        }

        Ok((oid, sink))
    }

    /// Digest of an object without storing it.
    pub fn hash_object(&self, header: ObjectHeader, content: impl Read) -> anyhow::Result<ObjectId> {
        Self::stream(header, content, std::io::sink()).map(|(oid, _)| oid)
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let content = object.serialize()?;
        let header = ObjectHeader::new(object.object_type(), content.len() as u64);

        self.write_object(header, Cursor::new(content))
    }

    /// Stream a working directory file into the store as a blob.
    pub fn write_blob(&self, path: &Path, relative_path: PathBuf) -> anyhow::Result<StoredBlob> {
        let (header, file) = Self::open_blob(path)?;
        let oid = self.write_object(header, file)?;

        Ok(StoredBlob::new(oid, relative_path))
    }

    pub fn hash_blob(&self, path: &Path) -> anyhow::Result<ObjectId> {
        let (header, file) = Self::open_blob(path)?;
        self.hash_object(header, file)
    }

    fn open_blob(path: &Path) -> anyhow::Result<(ObjectHeader, std::fs::File)> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Unable to open file {}", path.display()))?;
        let size = file
            .metadata()
            .with_context(|| format!("Unable to stat file {}", path.display()))?
            .len();

        Ok((ObjectHeader::new(ObjectType::Blob, size), file))
    }

    /// Store every tree of `builder`, children first, and return the root.
    pub fn write_tree(&self, builder: &TreeBuilder) -> anyhow::Result<ObjectId> {
        builder.traverse(&mut |tree: Tree| self.store(&tree))
    }

    pub fn load(&self, oid: &ObjectId) -> anyhow::Result<(ObjectHeader, Bytes)> {
        let object_path = self.path.join(oid.to_path());
        let compressed = std::fs::read(&object_path).with_context(|| {
            format!("Unable to read object file {}", object_path.display())
        })?;

        let mut decoder = ZlibDecoder::new(compressed.as_slice());
        let mut object_content = Vec::new();
        decoder
            .read_to_end(&mut object_content)
            .context("Unable to decompress object content")?;

        let mut reader = Cursor::new(object_content);
        let header = ObjectHeader::parse(&mut reader)
            .with_context(|| format!("Invalid object header in {oid}"))?;

        let offset = reader.position() as usize;
        let body = Bytes::from(reader.into_inner()).slice(offset..);
        if body.len() as u64 != header.size {
            anyhow::bail!(
                "object {} is corrupt: header says {} bytes, found {}",
                oid,
                header.size,
                body.len()
            );
        }

        Ok((header, body))
    }

    pub fn parse_object(&self, oid: &ObjectId) -> anyhow::Result<ObjectBox> {
        let (header, body) = self.load(oid)?;
        let reader = Cursor::new(body);

        match header.object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(reader)?))),
        }
    }

    pub fn parse_object_as_blob(&self, oid: &ObjectId) -> anyhow::Result<Blob> {
        match self.parse_object(oid)? {
            ObjectBox::Blob(blob) => Ok(*blob),
            _ => anyhow::bail!("object {oid} is not a blob"),
        }
    }

    pub fn parse_object_as_tree(&self, oid: &ObjectId) -> anyhow::Result<Tree> {
        match self.parse_object(oid)? {
            ObjectBox::Tree(tree) => Ok(*tree),
            _ => anyhow::bail!("object {oid} is not a tree"),
        }
    }

    pub fn parse_object_as_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        match self.parse_object(oid)? {
            ObjectBox::Commit(commit) => Ok(*commit),
            _ => anyhow::bail!("object {oid} is not a commit"),
        }
    }

    /// Flatten a tree into `(path, blob digest)` pairs, depth first.
    pub fn flatten_tree(&self, oid: &ObjectId) -> anyhow::Result<Vec<(PathBuf, ObjectId)>> {
        let mut files = Vec::new();
        self.collect_tree_files(oid, PathBuf::new(), &mut files)?;
        Ok(files)
    }

    fn collect_tree_files(
        &self,
        oid: &ObjectId,
        prefix: PathBuf,
        files: &mut Vec<(PathBuf, ObjectId)>,
    ) -> anyhow::Result<()> {
        for entry in self.parse_object_as_tree(oid)?.into_entries() {
            let path = prefix.join(&entry.name);
            if entry.is_tree() {
                self.collect_tree_files(&entry.oid, path, files)?;
            } else {
                files.push((path, entry.oid));
            }
        }

        Ok(())
    }

    /// Number of loose objects in the store.
    pub fn count_objects(&self) -> anyhow::Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in WalkDir::new(&self.path).min_depth(2).max_depth(2) {
            let entry = entry.context("Unable to scan object directory")?;
            let file_name = entry.file_name().to_string_lossy();
            if entry.file_type().is_file() && file_name.len() == OBJECT_ID_LENGTH - 2 {
                count += 1;
            }
        }

        Ok(count)
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
