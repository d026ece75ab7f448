//! Binary pack holding the whole catalog for runtime and tooling lookups.
//!
//! Layout: 4-byte magic `HDPK`, `u32` little-endian format version, then the
//! catalog as a `bincode` standard-config map (varint lengths, UTF-8
//! strings, records as their six optional attributes in declaration order).

use bincode::config;

use crate::catalog::{Catalog, CatalogSource};
use crate::emit::Emitter;
use crate::error::{Error, Result};

pub const MAGIC: [u8; 4] = *b"HDPK";
pub const FORMAT_VERSION: u32 = 1;

pub struct PackEmitter;

impl Emitter for PackEmitter {
    fn encode(&self, catalog: &Catalog) -> Result<Vec<u8>> {
        encode(catalog)
    }

    fn artifact(&self) -> &str {
        "pack"
    }
}

pub fn encode(catalog: &Catalog) -> Result<Vec<u8>> {
    let payload = bincode::serde::encode_to_vec(catalog, config::standard())?;
    let mut out = Vec::with_capacity(MAGIC.len() + 4 + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Read a pack back into a catalog, re-validating every entry.
pub fn decode(bytes: &[u8]) -> Result<Catalog> {
    let (magic, rest) = bytes
        .split_first_chunk::<4>()
        .ok_or_else(|| Error::BadPack("truncated header".into()))?;
    if *magic != MAGIC {
        return Err(Error::BadPack("missing HDPK magic".into()));
    }
    let (version, payload) = rest
        .split_first_chunk::<4>()
        .ok_or_else(|| Error::BadPack("truncated header".into()))?;
    let version = u32::from_le_bytes(*version);
    if version != FORMAT_VERSION {
        return Err(Error::BadPack(format!("unsupported format version {}", version)));
    }

    let (source, read): (CatalogSource, usize) =
        bincode::serde::decode_from_slice(payload, config::standard())?;
    if read != payload.len() {
        return Err(Error::BadPack(format!(
            "{} trailing bytes after catalog",
            payload.len() - read
        )));
    }
    source.into_catalog()
}
