//! Upload admission checks.
//!
//! A payload is admitted only when every independent signal agrees it is a
//! PDF: the declared filename extension, the declared content type, the size
//! limit, and the leading magic bytes of the payload itself. The magic check
//! is the authoritative one: renaming an arbitrary file to `.pdf` or spoofing
//! the content-type header still fails here.

use crate::config::UploadConfig;
use crate::models::UploadRequest;

/// Leading bytes every PDF starts with.
pub const PDF_MAGIC: &[u8] = b"%PDF";

/// Expected filename extension, compared case-insensitively.
const PDF_EXTENSION: &str = ".pdf";

/// Why a payload was turned away. Closed set; each variant carries its
/// client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("Only PDF files are allowed")]
    InvalidExtension,

    #[error("Content type must be {}", mime::APPLICATION_PDF)]
    InvalidContentType,

    #[error("File is empty")]
    Empty,

    #[error("File size exceeds {}MB limit", limit / (1024 * 1024))]
    TooLarge { limit: usize },

    #[error("File is not a valid PDF")]
    InvalidSignature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Admitted,
    Rejected(RejectReason),
}

/// Returns true when the buffer opens with the PDF magic signature.
///
/// Only the header window is inspected; buffers shorter than the signature
/// simply do not match.
pub fn has_pdf_signature(data: &[u8]) -> bool {
    data.len() >= PDF_MAGIC.len() && &data[..PDF_MAGIC.len()] == PDF_MAGIC
}

#[derive(Debug, Clone)]
pub struct AdmissionPolicy {
    max_file_size: usize,
}

impl AdmissionPolicy {
    pub fn new(upload: &UploadConfig) -> Self {
        Self {
            max_file_size: upload.max_file_size,
        }
    }

    /// Applies the checks in a fixed order, short-circuiting at the first
    /// failure so the reported reason is deterministic.
    pub fn admit(&self, request: &UploadRequest) -> Verdict {
        if !request
            .filename
            .to_ascii_lowercase()
            .ends_with(PDF_EXTENSION)
        {
            return Verdict::Rejected(RejectReason::InvalidExtension);
        }

        if request.content_type != mime::APPLICATION_PDF.as_ref() {
            return Verdict::Rejected(RejectReason::InvalidContentType);
        }

        if request.data.is_empty() {
            return Verdict::Rejected(RejectReason::Empty);
        }

        if request.data.len() > self.max_file_size {
            return Verdict::Rejected(RejectReason::TooLarge {
                limit: self.max_file_size,
            });
        }

        if !has_pdf_signature(&request.data) {
            return Verdict::Rejected(RejectReason::InvalidSignature);
        }

        Verdict::Admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn policy() -> AdmissionPolicy {
        AdmissionPolicy::new(&UploadConfig {
            max_file_size: 50 * 1024 * 1024,
            store_timeout_secs: 5,
        })
    }

    fn request(filename: &str, content_type: &str, data: &'static [u8]) -> UploadRequest {
        UploadRequest {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            data: Bytes::from_static(data),
        }
    }

    #[test]
    fn accepts_a_well_formed_pdf() {
        let verdict = policy().admit(&request("a.pdf", "application/pdf", b"%PDF-1.4\n%"));
        assert_eq!(verdict, Verdict::Admitted);
    }

    #[test]
    fn extension_is_case_insensitive() {
        let verdict = policy().admit(&request("REPORT.PDF", "application/pdf", b"%PDF-1.7"));
        assert_eq!(verdict, Verdict::Admitted);
    }

    #[test]
    fn wrong_extension_wins_regardless_of_bytes() {
        let verdict = policy().admit(&request("a.txt", "application/pdf", b"%PDF-1.4"));
        assert_eq!(verdict, Verdict::Rejected(RejectReason::InvalidExtension));

        let no_extension = policy().admit(&request("apdf", "application/pdf", b"%PDF-1.4"));
        assert_eq!(
            no_extension,
            Verdict::Rejected(RejectReason::InvalidExtension)
        );
    }

    #[test]
    fn declared_content_type_must_match_exactly() {
        let verdict = policy().admit(&request("a.pdf", "text/plain", b"%PDF-1.4"));
        assert_eq!(verdict, Verdict::Rejected(RejectReason::InvalidContentType));

        let missing = policy().admit(&request("a.pdf", "", b"%PDF-1.4"));
        assert_eq!(missing, Verdict::Rejected(RejectReason::InvalidContentType));
    }

    #[test]
    fn empty_payload_is_rejected() {
        let verdict = policy().admit(&request("a.pdf", "application/pdf", b""));
        assert_eq!(verdict, Verdict::Rejected(RejectReason::Empty));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let mut data = vec![0u8; 60 * 1024 * 1024];
        data[..PDF_MAGIC.len()].copy_from_slice(PDF_MAGIC);
        let request = UploadRequest {
            filename: "big.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: Bytes::from(data),
        };

        let verdict = policy().admit(&request);
        assert!(matches!(
            verdict,
            Verdict::Rejected(RejectReason::TooLarge { .. })
        ));
    }

    #[test]
    fn spoofed_bytes_fail_the_signature_check() {
        let verdict = policy().admit(&request("a.pdf", "application/pdf", &[0u8; 10]));
        assert_eq!(verdict, Verdict::Rejected(RejectReason::InvalidSignature));
    }

    #[test]
    fn signature_window_is_only_the_header() {
        assert!(has_pdf_signature(b"%PDF-1.7 trailing garbage"));
        assert!(has_pdf_signature(b"%PDF"));
        assert!(!has_pdf_signature(b"%PD"));
        assert!(!has_pdf_signature(b""));
        assert!(!has_pdf_signature(b"PDF%1.4"));
    }
}
