//! Loads a schedule document as plain text.

use std::path::Path;

use tracing::debug;

use shiftcal_export::read_docx_text;

use crate::error::ClientResult;

/// Returns true if the path has a `.docx` extension, in any case.
pub fn is_docx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}

/// Reads a schedule from a `.docx` file or a UTF-8 text file.
pub fn load_document(path: &Path) -> ClientResult<String> {
    let text = if is_docx(path) {
        read_docx_text(path)?
    } else {
        std::fs::read_to_string(path)?
    };
    debug!(path = %path.display(), lines = text.lines().count(), "Loaded schedule");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    use crate::error::ClientError;

    #[test]
    fn docx_extension_is_case_insensitive() {
        assert!(is_docx(Path::new("vagtplan.docx")));
        assert!(is_docx(Path::new("VAGTPLAN.DOCX")));
        assert!(!is_docx(Path::new("vagtplan.txt")));
        assert!(!is_docx(Path::new("docx")));
    }

    #[test]
    fn plain_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.txt");
        std::fs::write(&path, "Mandag d.1/4\n13-17: Jane\n").unwrap();

        assert_eq!(load_document(&path).unwrap(), "Mandag d.1/4\n13-17: Jane\n");
    }

    #[test]
    fn docx_file() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Mandag d.1/4</w:t></w:r></w:p><w:p><w:r><w:t>13-17: Jane</w:t></w:r></w:p></w:body></w:document>"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.Docx");

        let mut writer = ZipWriter::new(std::fs::File::create(&path).unwrap());
        writer.start_file("word/document.xml", SimpleFileOptions::default()).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();

        assert_eq!(load_document(&path).unwrap(), "Mandag d.1/4\n13-17: Jane");
    }

    #[test]
    fn broken_docx_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.docx");
        std::fs::write(&path, "not a zip").unwrap();

        assert!(matches!(load_document(&path), Err(ClientError::Document(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/plan.txt")).unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
