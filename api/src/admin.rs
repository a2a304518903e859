use crate::app::AppState;
use crate::error::AppError;
use crate::upload_utils::{store_upload, validate_filename};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

const FILE_FIELD: &str = "source_file";

pub async fn upload_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    state.templates.admin("")
}

pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        upload = Some((file_name, bytes.to_vec()));
        break;
    }

    // Browsers send an empty, unnamed part when no file was chosen.
    let Some((file_name, bytes)) = upload.filter(|(name, _)| !name.is_empty()) else {
        return Ok(state.templates.admin("")?.into_response());
    };

    let file_name = match validate_filename(&file_name) {
        Ok(name) => name,
        Err(reason) => {
            log::warn!("Rejected upload {:?}: {}", file_name, reason);
            let page = state.templates.admin(&format!("Invalid file name: {reason}"))?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let path = store_upload(&state.upload_dir, file_name, &bytes).await?;
    log::info!("Stored upload {} ({} bytes)", path.display(), bytes.len());

    let message = format!("File {file_name} uploaded successfully!");
    Ok(state.templates.admin(&message)?.into_response())
}
