//! Local export of a clone result.
//!
//! Saving follows the browser flow: wrap the markup in a blob, obtain a
//! transient handle for it, trigger the save, then release the handle.
//! [`FileExporter`] is that platform capability; [`DownloadSynthesizer`]
//! drives it and guarantees the release even when triggering fails.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use cloner_core::CloneResult;
use cloner_logging::{cloner_debug, cloner_info, cloner_warn};
use tempfile::NamedTempFile;

use crate::persist::{AtomicFileWriter, PersistError};

pub const DOWNLOAD_FILENAME: &str = "cloned-website.html";
pub const HTML_MIME_TYPE: &str = "text/html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBlob {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl ExportBlob {
    pub fn html(markup: &str) -> Self {
        Self {
            bytes: markup.as_bytes().to_vec(),
            mime_type: HTML_MIME_TYPE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReceipt {
    pub filename: String,
    /// Where the platform put the file, as far as it can tell.
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Nothing to save: no result, or a result without markup.
    Skipped,
    Saved(DownloadReceipt),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("export rejected: {0}")]
    Rejected(String),
}

/// Platform capability for saving an in-memory blob as a file.
pub trait FileExporter {
    /// Transient reference to a staged blob.
    type Handle;

    fn create_object_url(&self, blob: ExportBlob) -> Result<Self::Handle, ExportError>;

    fn trigger_download(
        &self,
        handle: &Self::Handle,
        filename: &str,
    ) -> Result<DownloadReceipt, ExportError>;

    /// Must tolerate being called after a failed trigger.
    fn revoke_object_url(&self, handle: &Self::Handle);
}

struct ObjectUrlGuard<'a, E: FileExporter> {
    exporter: &'a E,
    handle: E::Handle,
}

impl<E: FileExporter> Drop for ObjectUrlGuard<'_, E> {
    fn drop(&mut self) {
        self.exporter.revoke_object_url(&self.handle);
    }
}

pub struct DownloadSynthesizer<E> {
    exporter: E,
}

impl<E: FileExporter> DownloadSynthesizer<E> {
    pub fn new(exporter: E) -> Self {
        Self { exporter }
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Saves the markup of `result`, or does nothing when there is none.
    pub fn download_current_result(
        &self,
        result: Option<&CloneResult>,
    ) -> Result<DownloadOutcome, ExportError> {
        match result
            .and_then(CloneResult::html)
            .filter(|html| !html.is_empty())
        {
            Some(html) => self.download_html(html).map(DownloadOutcome::Saved),
            None => Ok(DownloadOutcome::Skipped),
        }
    }

    pub fn download_html(&self, html: &str) -> Result<DownloadReceipt, ExportError> {
        let handle = self.exporter.create_object_url(ExportBlob::html(html))?;
        let guard = ObjectUrlGuard {
            exporter: &self.exporter,
            handle,
        };
        let receipt = self
            .exporter
            .trigger_download(&guard.handle, DOWNLOAD_FILENAME);
        drop(guard);
        receipt
    }
}

/// Desktop exporter: stages the blob in a temp file and copies it into the
/// export directory on trigger.
#[derive(Debug, Clone)]
pub struct FsFileExporter {
    export_dir: PathBuf,
    staging_dir: PathBuf,
}

#[derive(Debug)]
pub struct StagedBlob {
    file: NamedTempFile,
    mime_type: &'static str,
}

impl StagedBlob {
    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }
}

impl FsFileExporter {
    pub fn new(export_dir: PathBuf) -> Self {
        Self::with_staging_dir(export_dir, std::env::temp_dir())
    }

    pub fn with_staging_dir(export_dir: PathBuf, staging_dir: PathBuf) -> Self {
        Self {
            export_dir,
            staging_dir,
        }
    }

    pub fn export_dir(&self) -> &std::path::Path {
        &self.export_dir
    }
}

impl FileExporter for FsFileExporter {
    type Handle = StagedBlob;

    fn create_object_url(&self, blob: ExportBlob) -> Result<StagedBlob, ExportError> {
        let mut file = tempfile::Builder::new()
            .prefix("cloner-")
            .suffix(".html")
            .tempfile_in(&self.staging_dir)?;
        file.write_all(&blob.bytes)?;
        file.flush()?;
        cloner_debug!(
            "staged {} bytes of {} at {:?}",
            blob.bytes.len(),
            blob.mime_type,
            file.path()
        );
        Ok(StagedBlob {
            file,
            mime_type: blob.mime_type,
        })
    }

    fn trigger_download(
        &self,
        handle: &StagedBlob,
        filename: &str,
    ) -> Result<DownloadReceipt, ExportError> {
        let mut source = handle.file.reopen()?;
        let writer = AtomicFileWriter::new(self.export_dir.clone());
        let target = writer.write_from(filename, &mut source)?;
        cloner_info!("saved {} to {:?}", filename, target);
        Ok(DownloadReceipt {
            filename: filename.to_string(),
            location: target.display().to_string(),
        })
    }

    fn revoke_object_url(&self, handle: &StagedBlob) {
        match fs::remove_file(handle.path()) {
            Ok(()) => cloner_debug!("released staged blob {:?}", handle.path()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => cloner_warn!(
                "failed to release staged blob {:?}: {}",
                handle.path(),
                err
            ),
        }
    }
}
