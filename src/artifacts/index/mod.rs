//! On-disk records of the staging area
//!
//! The index file is a 12-byte header (`DIRC`, version 2, entry count in
//! network order), the entries sorted by path and each padded with NULs to
//! a multiple of eight bytes, then a 20-byte SHA-1 of everything before it.

pub mod checksum;
pub mod entry_mode;
pub mod index_entry;
pub mod index_header;

pub const CHECKSUM_SIZE: usize = 20;

pub const HEADER_SIZE: usize = 12;

pub const SIGNATURE: [u8; 4] = *b"DIRC";

pub const VERSION: u32 = 2;
