//! Handler for `POST /uploadfile`.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::multipart::{Field, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use taskdesk_core::upload::validate_filename;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Distinguishes the in-flight part files of concurrent uploads.
static PART_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
}

/// POST /uploadfile
///
/// Stores the `file` part under its original name in the upload directory,
/// replacing any existing file with that name. Other parts are ignored.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| AppError::BadRequest("The 'file' field has no file name".into()))?;
        validate_filename(&filename)?;

        let size = store_field(&state.config.upload_dir, &filename, &mut field).await?;
        tracing::info!(%filename, size, "Stored uploaded file");

        return Ok(Json(UploadResponse { filename }));
    }

    Err(AppError::BadRequest("Missing required 'file' field".into()))
}

/// Stream `field` into `dir/filename`, returning the number of bytes written.
///
/// Data is written to a hidden `.part` file unique to this upload and renamed
/// into place only once the whole part has arrived, so a failed upload never
/// leaves a truncated file under the final name.
async fn store_field(dir: &Path, filename: &str, field: &mut Field<'_>) -> AppResult<u64> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("creating {}: {e}", dir.display())))?;

    let final_path = dir.join(filename);
    let part_path = dir.join(format!(
        ".{filename}.{}-{}.part",
        std::process::id(),
        PART_SEQ.fetch_add(1, Ordering::Relaxed)
    ));

    match write_part(&part_path, field).await {
        Ok(size) => {
            fs::rename(&part_path, &final_path).await.map_err(|e| {
                AppError::InternalError(format!("renaming {}: {e}", part_path.display()))
            })?;
            Ok(size)
        }
        Err(err) => {
            if let Err(e) = fs::remove_file(&part_path).await {
                tracing::warn!(
                    path = %part_path.display(),
                    error = %e,
                    "Failed to remove partial upload"
                );
            }
            Err(err)
        }
    }
}

async fn write_part(path: &Path, field: &mut Field<'_>) -> AppResult<u64> {
    let io_err =
        |e: std::io::Error| AppError::InternalError(format!("writing {}: {e}", path.display()));

    let mut file = fs::File::create(path).await.map_err(io_err)?;
    let mut written = 0u64;
    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await.map_err(io_err)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(io_err)?;

    Ok(written)
}
