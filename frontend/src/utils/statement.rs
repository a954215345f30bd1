use thiserror::Error;

use crate::api::ApiError;

pub const PDF_REQUIRED_MESSAGE: &str = "Please upload a PDF file";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("Please upload a PDF file")]
    NotPdf,
    #[error("Failed to read file: {0}")]
    Read(String),
}

impl From<StatementError> for ApiError {
    fn from(error: StatementError) -> Self {
        ApiError::validation(error.to_string())
    }
}

pub fn is_pdf_file_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".pdf")
}

pub fn validate_statement_name(name: &str) -> Result<(), StatementError> {
    if is_pdf_file_name(name) {
        Ok(())
    } else {
        Err(StatementError::NotPdf)
    }
}

pub async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>, StatementError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| {
            StatementError::Read(err.as_string().unwrap_or_else(|| "unreadable file".into()))
        })?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_extension_check_is_case_insensitive() {
        assert!(is_pdf_file_name("statement.pdf"));
        assert!(is_pdf_file_name("STATEMENT.PDF"));
        assert!(is_pdf_file_name("Bank.Statement.Pdf"));
        assert!(!is_pdf_file_name("statement.txt"));
        assert!(!is_pdf_file_name("statement.pdf.exe"));
        assert!(!is_pdf_file_name("pdf"));
    }

    #[test]
    fn rejection_converts_to_validation_error() {
        let err: ApiError = validate_statement_name("statement.txt").unwrap_err().into();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.error, PDF_REQUIRED_MESSAGE);
    }

    #[test]
    fn read_error_mentions_cause() {
        let err = StatementError::Read("aborted".into());
        assert_eq!(err.to_string(), "Failed to read file: aborted");
    }
}
