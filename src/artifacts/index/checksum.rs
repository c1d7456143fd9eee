//! SHA-1 trailer over the index stream
//!
//! `Checksummed` sits between the index code and the locked file. Every byte
//! read or written passes through the hasher, so the trailer can be
//! appended or verified without tracking offsets.

use crate::artifacts::index::CHECKSUM_SIZE;
use anyhow::Context;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};

pub struct Checksummed<T> {
    inner: T,
    digest: Sha1,
}

impl<T> Checksummed<T> {
    pub fn new(inner: T) -> Self {
        Checksummed {
            inner,
            digest: Sha1::new(),
        }
    }
}

impl<T: Read> Read for Checksummed<T> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.digest.update(&buf[..n]);
        Ok(n)
    }
}

impl<T: Read> Checksummed<T> {
    pub fn take_bytes(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.read_exact(&mut buffer)
            .context("Unexpected end of index file")?;

        Ok(Bytes::from(buffer))
    }

    /// Compare the stored trailer with the digest of everything read.
    pub fn verify(mut self) -> anyhow::Result<()> {
        let mut stored = [0u8; CHECKSUM_SIZE];
        self.inner
            .read_exact(&mut stored)
            .context("Index file is missing its checksum")?;

        if self.digest.finalize().as_slice() != stored {
            anyhow::bail!("Index checksum does not match its contents");
        }

        Ok(())
    }
}

impl<T: Write> Write for Checksummed<T> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.digest.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl<T: Write> Checksummed<T> {
    /// Append the trailer and hand the stream back.
    pub fn finish(mut self) -> anyhow::Result<T> {
        let trailer = self.digest.finalize();
        self.inner
            .write_all(trailer.as_slice())
            .context("Unable to write index checksum")?;
        self.inner.flush()?;

        Ok(self.inner)
    }
}
