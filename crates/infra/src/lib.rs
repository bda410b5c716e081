//! Serving-layer plumbing without a transport: configuration, upload checks,
//! the ingest pipeline and session-scoped project storage.

pub mod config;
pub mod ingest;
pub mod read_model;
pub mod report;
pub mod upload;


pub use config::{ConfigError, IngestConfig};
pub use ingest::{IngestError, Ingestor};
pub use read_model::{InMemoryProjectStore, ProjectStore};
pub use report::AnalysisReport;
pub use upload::{Upload, UploadPolicy, UploadRejection};
