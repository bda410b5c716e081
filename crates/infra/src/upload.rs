//! Upload acceptance rules.

use thiserror::Error;

use crate::config::IngestConfig;

pub const XER_EXTENSION: &str = "xer";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A candidate file handed over by whatever transport received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("only XER files are allowed (got `{file_name}`)")]
    UnsupportedType { file_name: String },

    #[error("file size {size} exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

/// Accepts `.xer` files (any case) or anything sent as an octet stream, up to
/// a size limit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    max_bytes: u64,
}

impl UploadPolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.max_upload_bytes)
    }

    pub fn check(&self, upload: &Upload) -> Result<(), UploadRejection> {
        let size = upload.bytes.len() as u64;
        if size > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let is_octet_stream = upload
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.trim().eq_ignore_ascii_case(OCTET_STREAM));
        if is_octet_stream || has_xer_extension(&upload.file_name) {
            Ok(())
        } else {
            Err(UploadRejection::UnsupportedType {
                file_name: upload.file_name.clone(),
            })
        }
    }
}

fn has_xer_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(XER_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_xer_extension_in_any_case() {
        let policy = UploadPolicy::new(1024);
        assert!(policy.check(&Upload::new("plan.xer", "x")).is_ok());
        assert!(policy.check(&Upload::new("PLAN.XER", "x")).is_ok());
    }

    #[test]
    fn accepts_octet_stream_regardless_of_name() {
        let policy = UploadPolicy::new(1024);
        let upload = Upload::new("export", "x").with_content_type("application/octet-stream");
        assert!(policy.check(&upload).is_ok());
    }

    #[test]
    fn rejects_other_types() {
        let policy = UploadPolicy::new(1024);
        let upload = Upload::new("plan.xer.pdf", "x").with_content_type("application/pdf");
        assert_eq!(
            policy.check(&upload),
            Err(UploadRejection::UnsupportedType {
                file_name: "plan.xer.pdf".to_string()
            })
        );
        assert!(policy.check(&Upload::new("xer", "x")).is_err());
    }

    #[test]
    fn rejects_oversized_files() {
        let policy = UploadPolicy::new(4);
        let err = policy.check(&Upload::new("big.xer", "12345")).unwrap_err();
        assert_eq!(err, UploadRejection::TooLarge { size: 5, limit: 4 });
        assert!(policy.check(&Upload::new("ok.xer", "1234")).is_ok());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn size_limit_is_inclusive(limit in 0u64..512, len in 0usize..512) {
                let policy = UploadPolicy::new(limit);
                let result = policy.check(&Upload::new("p.xer", vec![b'x'; len]));
                prop_assert_eq!(result.is_ok(), len as u64 <= limit);
            }
        }
    }
}
