//! Video unikalization endpoint.

use std::io;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::{BoxError, Json};
use futures_util::{Stream, TryStreamExt};
use serde::Serialize;
use tokio::fs::File;
use tokio::io::BufWriter;
use tokio_util::io::StreamReader;
use tracing::info;
use uuid::Uuid;

use uniq_models::{GeneratedFileInfo, ProcessSettings};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response body for a completed batch. Only successful copies are
/// listed; per-copy failures were already absorbed by the orchestrator.
#[derive(Debug, Serialize)]
pub struct UnikalizeResponse {
    pub success: bool,
    pub copies: Vec<GeneratedFileInfo>,
}

/// Accepts a multipart form with one `file` field and string-typed
/// settings fields, runs the batch and returns the generated copies.
pub async fn unikalize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UnikalizeResponse>> {
    let mut upload: Option<(PathBuf, String)> = None;
    let mut settings = ProcessSettings::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "file" {
            let original_name = field
                .file_name()
                .map(str::to_owned)
                .ok_or_else(|| ApiError::bad_request("File field has no filename"))?;
            let saved = save_upload(&state.config.upload_dir, &original_name, field).await?;
            upload = Some((saved, original_name));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(format!("Unreadable form field: {e}")))?;
            apply_form_field(&mut settings, &name, &value);
        }
    }

    let (input, original_name) = upload.ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    if settings.copies > state.config.max_copies {
        return Err(ApiError::bad_request(format!(
            "Requested {} copies, maximum is {}",
            settings.copies, state.config.max_copies
        )));
    }

    info!(file = %original_name, copies = settings.copies, "received unikalize job");

    let outcome = state
        .batch
        .process_video_batch(
            &input,
            &original_name,
            &settings,
            &state.config.output_dir,
            &state.config.output_url_base(),
        )
        .await?;

    Ok(Json(UnikalizeResponse {
        success: true,
        copies: outcome.copies,
    }))
}

/// Multipart form values arrive as strings; anything other than the
/// literal "true" counts as false.
fn parse_bool(value: &str) -> bool {
    value == "true"
}

/// Map one named form field onto the settings. Unknown fields are
/// ignored; an unparseable copies value keeps the default.
fn apply_form_field(settings: &mut ProcessSettings, name: &str, value: &str) {
    match name {
        "copies" => {
            if let Ok(copies) = value.parse() {
                settings.copies = copies;
            }
        }
        "brightness" => settings.brightness = parse_bool(value),
        "contrast" => settings.contrast = parse_bool(value),
        "saturation" => settings.saturation = parse_bool(value),
        "mirror" => settings.mirror = parse_bool(value),
        "rotation" => settings.rotation = parse_bool(value),
        "zoom" => settings.zoom = parse_bool(value),
        "audioSpeed" => settings.audio_speed = parse_bool(value),
        "audioVolume" => settings.audio_volume = parse_bool(value),
        "audioPitch" => settings.audio_pitch = parse_bool(value),
        _ => {}
    }
}

/// Stream the uploaded field to the upload directory under a unique
/// name, keeping the original extension.
async fn save_upload(dir: &Path, original_name: &str, field: Field<'_>) -> ApiResult<PathBuf> {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    let path = dir.join(format!("{}{}", Uuid::new_v4().simple(), ext));

    stream_to_file(&path, field)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to save upload: {e}")))?;

    Ok(path)
}

/// Save a byte stream to a file.
async fn stream_to_file<S, E>(path: &Path, stream: S) -> io::Result<()>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<BoxError>,
{
    let body_with_io_error = stream.map_err(|err| io::Error::new(io::ErrorKind::Other, err));
    let body_reader = StreamReader::new(body_with_io_error);
    futures_util::pin_mut!(body_reader);

    let mut file = BufWriter::new(File::create(path).await?);
    tokio::io::copy(&mut body_reader, &mut file).await?;

    Ok(())
}
