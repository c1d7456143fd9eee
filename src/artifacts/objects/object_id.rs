//! Object identifier (SHA-1 hash)
//!
//! An object ID is the 20-byte SHA-1 digest of an object's encoded form.
//! It can be built from its 40-character lowercase hex form or from the raw
//! 20 bytes; any other input length is rejected.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::{OBJECT_ID_BYTES, OBJECT_ID_LENGTH};
use std::io;
use std::path::PathBuf;

/// Object identifier (SHA-1 digest)
///
/// "No digest" is modelled as `Option<ObjectId>` by callers; use
/// [`ObjectId::same`] when two optional digests must both be present to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_BYTES]);

impl ObjectId {
    /// Parse an object ID from either 40 hex characters or 20 raw bytes.
    pub fn try_from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        match bytes.len() {
            OBJECT_ID_LENGTH => {
                let mut digest = [0u8; OBJECT_ID_BYTES];
                hex::decode_to_slice(bytes, &mut digest).map_err(|_| {
                    RepositoryError::InvalidObjectIdCharacters {
                        value: String::from_utf8_lossy(bytes).to_string(),
                    }
                })?;
                Ok(Self(digest))
            }
            OBJECT_ID_BYTES => {
                let mut digest = [0u8; OBJECT_ID_BYTES];
                digest.copy_from_slice(bytes);
                Ok(Self(digest))
            }
            length => Err(RepositoryError::InvalidObjectId { length }.into()),
        }
    }

    /// Parse and validate an object ID from its hex form
    pub fn try_parse(id: impl AsRef<str>) -> anyhow::Result<Self> {
        let id = id.as_ref();
        if id.len() != OBJECT_ID_LENGTH {
            return Err(RepositoryError::InvalidObjectId { length: id.len() }.into());
        }

        Self::try_from_bytes(id.as_bytes())
    }

    /// Both digests must be present and byte-wise equal.
    pub fn same(left: Option<&ObjectId>, right: Option<&ObjectId>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn to_hex_bytes(&self) -> [u8; OBJECT_ID_LENGTH] {
        let mut encoded = [0u8; OBJECT_ID_LENGTH];
        encoded.copy_from_slice(self.to_hex().as_bytes());
        encoded
    }

    pub fn to_array(&self) -> [u8; OBJECT_ID_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Write the object ID in binary format (20 bytes)
    ///
    /// Used when serializing tree entries and index entries.
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        writer.write_all(&self.0)?;
        Ok(())
    }

    /// Read an object ID from binary format (20 bytes)
    pub fn read_h40_from<R: io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<Self> {
        let mut digest = [0u8; OBJECT_ID_BYTES];
        reader.read_exact(&mut digest)?;
        Ok(Self(digest))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let hex = self.to_hex();
        let (dir, file) = hex.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
