//! Resume file downloads. Plain reads from `RESUME_DIR`; nothing is cached.

use std::io::ErrorKind;

use axum::{
    extract::{Path, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Word,
}

impl ResumeFormat {
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "pdf" => Some(ResumeFormat::Pdf),
            "word" | "docx" => Some(ResumeFormat::Word),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Word => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Value of the `X-File-Type` header.
    pub fn label(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Word => "word",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "Resume PDF",
            ResumeFormat::Word => "Resume Word document",
        }
    }
}

/// GET /api/download/:format  (`pdf` or `word`)
pub async fn handle_download(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Response, AppError> {
    let format = ResumeFormat::from_path(&format)
        .ok_or_else(|| AppError::NotFound(format!("Unknown resume format '{format}'")))?;

    let file_name = format!("{}.{}", state.config.resume_file_stem, format.extension());
    let path = state.config.resume_dir.join(&file_name);

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Resume file missing: {}", path.display());
            return Err(AppError::NotFound(format!(
                "{} not available",
                format.display_name()
            )));
        }
        Err(e) => {
            return Err(AppError::Internal(
                anyhow::Error::new(e).context(format!("Failed to read {}", path.display())),
            ))
        }
    };

    let size = bytes.len().to_string();
    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (header::CONTENT_LENGTH, size.clone()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
        (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        (HeaderName::from_static("x-file-size"), size),
        (HeaderName::from_static("x-file-name"), file_name),
        (
            HeaderName::from_static("x-file-type"),
            format.label().to_string(),
        ),
    ];

    Ok((headers, bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::build_router;

    fn state_in(dir: &std::path::Path) -> AppState {
        let mut state = AppState::for_tests(None);
        state.config.resume_dir = dir.to_path_buf();
        state
    }

    async fn get(state: AppState, uri: &str) -> Response {
        build_router(state)
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ResumeFormat::from_path("pdf"), Some(ResumeFormat::Pdf));
        assert_eq!(ResumeFormat::from_path("word"), Some(ResumeFormat::Word));
        assert_eq!(ResumeFormat::from_path("docx"), Some(ResumeFormat::Word));
        assert_eq!(ResumeFormat::from_path("txt"), None);
    }

    #[tokio::test]
    async fn test_pdf_download_serves_file_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Resume.pdf"), b"%PDF-1.7 test").unwrap();

        let response = get(state_in(dir.path()), "/api/download/pdf").await;
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers["content-type"], "application/pdf");
        assert_eq!(
            headers["content-disposition"],
            "attachment; filename=\"Resume.pdf\""
        );
        assert_eq!(headers["cache-control"], "public, max-age=3600");
        assert_eq!(headers["x-file-size"], "13");
        assert_eq!(headers["x-file-name"], "Resume.pdf");
        assert_eq!(headers["x-file-type"], "pdf");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"%PDF-1.7 test");
    }

    #[tokio::test]
    async fn test_word_download_uses_docx_content_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Resume.docx"), b"PK\x03\x04").unwrap();

        let response = get(state_in(dir.path()), "/api/download/word").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(response.headers()["x-file-type"], "word");
    }

    #[tokio::test]
    async fn test_missing_file_returns_404_with_error_field() {
        let dir = tempfile::tempdir().unwrap();

        let response = get(state_in(dir.path()), "/api/download/word").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("error").is_some());
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_format_returns_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = get(state_in(dir.path()), "/api/download/txt").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unreadable_path_returns_500() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the read fail with a non-NotFound error.
        std::fs::create_dir(dir.path().join("Resume.pdf")).unwrap();

        let response = get(state_in(dir.path()), "/api/download/pdf").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
