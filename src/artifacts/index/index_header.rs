use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::{Packable, Unpackable};
use anyhow::Context;
use byteorder::{ByteOrder, NetworkEndian};
use bytes::Bytes;
use std::io::BufRead;

/// Leading block of the index; only the entry count varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    pub entries_count: u32,
}

impl IndexHeader {
    pub fn new(entries_count: u32) -> Self {
        IndexHeader { entries_count }
    }
}

impl Packable for IndexHeader {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[..4].copy_from_slice(&SIGNATURE);
        NetworkEndian::write_u32(&mut bytes[4..8], VERSION);
        NetworkEndian::write_u32(&mut bytes[8..], self.entries_count);

        Ok(Bytes::copy_from_slice(&bytes))
    }
}

impl Unpackable for IndexHeader {
    /// Rejects anything but a version 2 `DIRC` header.
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut bytes = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut bytes)
            .context("Index header is truncated")?;

        if bytes[..4] != SIGNATURE {
            anyhow::bail!("Invalid index file signature");
        }

        let version = NetworkEndian::read_u32(&bytes[4..8]);
        if version != VERSION {
            anyhow::bail!("Unsupported index file version: {version}");
        }

        Ok(IndexHeader::new(NetworkEndian::read_u32(&bytes[8..])))
    }
}
