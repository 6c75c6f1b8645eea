//! Streaming PDF downloads.
//!
//! The response body takes ownership of the [`Artifact`]. It is discarded
//! once the last chunk has been read, and dropped (which also deletes it) if
//! the client goes away mid-transfer.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use futures::stream;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::ports::Artifact;

const CHUNK_SIZE: usize = 64 * 1024;

/// Build an `application/pdf` attachment response streaming `artifact`.
///
/// `file_name` must be header-safe; it is used verbatim in
/// `Content-Disposition`.
pub async fn pdf_attachment(artifact: Artifact, file_name: &str) -> std::io::Result<Response> {
    let file = File::open(artifact.path()).await?;
    let length = file.metadata().await?.len();

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    let body = Body::from_stream(stream::unfold(
        Some((file, artifact)),
        |state| async move {
            let Some((mut file, artifact)) = state else {
                return None;
            };
            let mut buf = vec![0u8; CHUNK_SIZE];
            match file.read(&mut buf).await {
                Ok(0) => {
                    drop(file);
                    artifact.discard().await;
                    None
                }
                Ok(n) => {
                    buf.truncate(n);
                    Some((Ok(Bytes::from(buf)), Some((file, artifact))))
                }
                Err(e) => {
                    tracing::warn!("Failed reading {}: {}", artifact.path().display(), e);
                    Some((Err(e), None))
                }
            }
        },
    ));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, HeaderValue::from(length)),
        ],
        body,
    )
        .into_response())
}
