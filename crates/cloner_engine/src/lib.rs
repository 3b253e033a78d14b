//! Cloner engine: service client, export and effect execution.
mod client;
mod download;
mod engine;
mod persist;
mod preview;
mod types;
mod wire;

pub use client::{
    resolve_clone, ClientSettings, CloneClient, ReqwestCloneClient, DEFAULT_ENDPOINT,
};
pub use download::{
    DownloadOutcome, DownloadReceipt, DownloadSynthesizer, ExportBlob, ExportError, FileExporter,
    FsFileExporter, StagedBlob, DOWNLOAD_FILENAME, HTML_MIME_TYPE,
};
pub use engine::{EngineError, EngineHandle};
pub use persist::PersistError;
pub use preview::{render_preview, sanitize_html, MAX_PREVIEW_CONTENT};
pub use types::{ClientError, EngineEvent, FailureKind};
pub use wire::{decode_clone_response, encode_clone_request};
