//! Emitters: one catalog, two artifacts.
//!
//! Each format implements [`Emitter`] to turn the catalog into bytes;
//! [`write_artifact`] owns the filesystem side and the cancellation
//! checkpoints, so both formats share the same write contract.

pub mod pack;
pub mod remap;

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::cancel::CancellationToken;
use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Bytes written between two cancellation checks.
pub const CHUNK_SIZE: usize = 4096;

/// Trait for serializing a Catalog into one artifact format.
pub trait Emitter {
    fn encode(&self, catalog: &Catalog) -> Result<Vec<u8>>;
    /// Short artifact name for logs.
    fn artifact(&self) -> &str;
}

/// Output locations for one run.
#[derive(Debug, Clone)]
pub struct EmitPlan {
    pub pack_path: PathBuf,
    pub rsp_path: PathBuf,
}

/// Write the binary pack, then the remap file.
///
/// The pack is not rolled back if the remap write fails or is canceled.
pub async fn emit_all(catalog: &Catalog, plan: &EmitPlan, cancel: &CancellationToken) -> Result<()> {
    emit_binary(catalog, &plan.pack_path, cancel).await?;
    emit_remap(catalog, &plan.rsp_path, cancel).await
}

pub async fn emit_binary(catalog: &Catalog, path: &Path, cancel: &CancellationToken) -> Result<()> {
    emit(&pack::PackEmitter, catalog, path, cancel).await
}

pub async fn emit_remap(catalog: &Catalog, path: &Path, cancel: &CancellationToken) -> Result<()> {
    emit(&remap::RemapEmitter, catalog, path, cancel).await
}

async fn emit(
    emitter: &dyn Emitter,
    catalog: &Catalog,
    path: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    cancel.check()?;
    let bytes = emitter.encode(catalog)?;
    debug!(artifact = emitter.artifact(), bytes = bytes.len(), "encoded");
    write_artifact(path, &bytes, cancel).await?;
    info!(artifact = emitter.artifact(), path = %path.display(), "written");
    Ok(())
}

/// Create `path`'s parent directories, then write `bytes` to `path`,
/// truncating any previous content.
///
/// Cancellation is checked before the directory is created, before the file
/// is opened, and before every [`CHUNK_SIZE`] chunk. A cancel after the open
/// leaves a partial file behind.
pub async fn write_artifact(path: &Path, bytes: &[u8], cancel: &CancellationToken) -> Result<()> {
    cancel.check()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }

    cancel.check()?;
    let mut file = fs::File::create(path).await.map_err(|e| Error::io(path, e))?;
    write_chunks(&mut file, path, bytes, cancel).await
}

async fn write_chunks<W: AsyncWrite + Unpin>(
    out: &mut W,
    path: &Path,
    bytes: &[u8],
    cancel: &CancellationToken,
) -> Result<()> {
    for chunk in bytes.chunks(CHUNK_SIZE) {
        cancel.check()?;
        out.write_all(chunk).await.map_err(|e| Error::io(path, e))?;
    }
    out.flush().await.map_err(|e| Error::io(path, e))
}
