use super::*;

#[test]
fn detects_kind_by_mime_type() {
    assert_eq!(detect_kind("cv", "application/pdf"), Some(FileKind::Pdf));
    assert_eq!(detect_kind("cv", DOCX_MIME), Some(FileKind::Docx));
    assert_eq!(detect_kind("cv", "text/plain"), Some(FileKind::Text));
}

#[test]
fn falls_back_to_extension_when_mime_is_generic() {
    assert_eq!(detect_kind("CV.PDF", ""), Some(FileKind::Pdf));
    assert_eq!(detect_kind("resume.docx", "application/octet-stream"), Some(FileKind::Docx));
    assert_eq!(detect_kind("notes.txt", ""), Some(FileKind::Text));
}

#[test]
fn rejects_unsupported_formats() {
    assert_eq!(detect_kind("photo.png", "image/png"), None);
    assert_eq!(detect_kind("cv.doc", "application/msword"), None);
    assert_eq!(detect_kind("archive", ""), None);
}

#[test]
fn size_limit_is_ten_megabytes_inclusive() {
    assert!(within_size_limit(0.0));
    assert!(within_size_limit(MAX_FILE_BYTES));
    assert!(!within_size_limit(MAX_FILE_BYTES + 1.0));
}
