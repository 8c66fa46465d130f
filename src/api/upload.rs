//! Bet slip upload rules
//!
//! Files are checked before anything is sent: JPEG, PNG or PDF, at most
//! 10 MiB. The form then walks Info (selected, uploading) to Success or Error.

use thiserror::Error;

use super::error::ApiError;

/// MIME types the upload endpoint accepts
pub const ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];

/// Largest accepted file, in bytes
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Multipart field carrying the file
pub const UPLOAD_FIELD: &str = "file";

/// Reasons a file is refused before upload
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid file type. Please upload JPG, PNG, or PDF files only.")]
    InvalidType,

    #[error("File too large. Maximum size is 10MB.")]
    TooLarge,

    #[error("Please select a file first.")]
    NoFile,
}

/// Check a candidate file's MIME type, then its size
pub fn validate_file(mime_type: &str, size: u64) -> Result<(), UploadError> {
    if !ALLOWED_TYPES.contains(&mime_type) {
        return Err(UploadError::InvalidType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// Severity of the status line under the drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Info => "text-blue-300",
            StatusKind::Success => "text-green-400",
            StatusKind::Error => "text-red-400",
        }
    }
}

/// Status line shown on the upload form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl UploadStatus {
    pub fn selected(file_name: &str) -> Self {
        Self {
            kind: StatusKind::Info,
            message: format!("File \"{}\" selected. Click Upload to submit.", file_name),
        }
    }

    pub fn uploading() -> Self {
        Self {
            kind: StatusKind::Info,
            message: "Uploading bet slip...".to_string(),
        }
    }

    pub fn uploaded() -> Self {
        Self {
            kind: StatusKind::Success,
            message: "Bet slip uploaded successfully! Analyzing your bet...".to_string(),
        }
    }

    pub fn rejected(err: UploadError) -> Self {
        Self {
            kind: StatusKind::Error,
            message: err.to_string(),
        }
    }

    /// Server-side failure; the server's `error` text wins when present
    pub fn failed(err: &ApiError) -> Self {
        let message = match err {
            ApiError::Status { .. } | ApiError::Rejected(_) => err.user_message(),
            _ => "Failed to upload bet slip. Please try again.".to_string(),
        };
        Self {
            kind: StatusKind::Error,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_types() {
        for mime in ALLOWED_TYPES {
            assert_eq!(validate_file(mime, 1024), Ok(()));
        }
    }

    #[test]
    fn test_rejects_other_types() {
        assert_eq!(validate_file("image/gif", 10), Err(UploadError::InvalidType));
        assert_eq!(validate_file("", 10), Err(UploadError::InvalidType));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert_eq!(validate_file("image/png", MAX_UPLOAD_BYTES), Ok(()));
        assert_eq!(
            validate_file("image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        assert_eq!(
            validate_file("text/plain", MAX_UPLOAD_BYTES * 2),
            Err(UploadError::InvalidType)
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            UploadStatus::selected("slip.png").message,
            "File \"slip.png\" selected. Click Upload to submit."
        );
        assert_eq!(
            UploadStatus::rejected(UploadError::NoFile).message,
            "Please select a file first."
        );
        assert_eq!(UploadStatus::uploaded().kind, StatusKind::Success);
    }

    #[test]
    fn test_failed_prefers_server_error() {
        let server = ApiError::from_status(422, r#"{"error":"Unreadable slip"}"#);
        assert_eq!(UploadStatus::failed(&server).message, "Unreadable slip");

        let network = ApiError::Network("offline".to_string());
        assert_eq!(
            UploadStatus::failed(&network).message,
            "Failed to upload bet slip. Please try again."
        );
    }
}
