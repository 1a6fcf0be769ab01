//! Resume text extraction for uploaded files.
//!
//! Real PDF/DOCX parsing is out of scope: only plain-text uploads are read, every
//! other format yields a simulated extraction naming the file.

use bytes::Bytes;

use crate::errors::AppError;

const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "text"];

fn is_plain_text(filename: &str, content_type: Option<&str>) -> bool {
    if content_type.is_some_and(|ct| ct.starts_with("text/")) {
        return true;
    }
    filename
        .rsplit_once('.')
        .map(|(_, ext)| TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn simulated_extraction(filename: &str) -> String {
    format!(
        "This is a simulated text extraction from \"{filename}\".\n\
         In a real application, we would extract the actual content of the document.\n\
         For now, the resume analysis will use this placeholder text."
    )
}

pub fn extract_text(
    filename: &str,
    content_type: Option<&str>,
    content: &Bytes,
) -> Result<String, AppError> {
    if content.is_empty() {
        return Err(AppError::Validation(format!("Uploaded file '{filename}' is empty")));
    }

    if is_plain_text(filename, content_type) {
        return String::from_utf8(content.to_vec()).map_err(|_| {
            AppError::Validation(format!("Uploaded file '{filename}' is not valid UTF-8 text"))
        });
    }

    tracing::debug!("No extractor for '{filename}', using simulated text");
    Ok(simulated_extraction(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_by_extension_is_returned_as_is() {
        let body = Bytes::from_static(b"Jane Doe\nSoftware Engineer");
        let text = extract_text("resume.TXT", None, &body).unwrap();
        assert_eq!(text, "Jane Doe\nSoftware Engineer");
    }

    #[test]
    fn test_plain_text_by_content_type() {
        let body = Bytes::from_static(b"hello");
        assert_eq!(
            extract_text("upload", Some("text/plain; charset=utf-8"), &body).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_pdf_yields_simulated_text_naming_file() {
        let body = Bytes::from_static(b"%PDF-1.7 binary");
        let text = extract_text("cv.pdf", Some("application/pdf"), &body).unwrap();
        assert!(text.contains("\"cv.pdf\""));
        assert!(text.starts_with("This is a simulated text extraction"));
    }

    #[test]
    fn test_empty_upload_rejected() {
        assert!(matches!(
            extract_text("cv.pdf", None, &Bytes::new()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_text_rejected() {
        let body = Bytes::from_static(&[0xff, 0xfe, 0x00]);
        assert!(matches!(
            extract_text("cv.txt", None, &body),
            Err(AppError::Validation(_))
        ));
    }
}
