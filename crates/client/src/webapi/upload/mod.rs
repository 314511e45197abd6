// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Uploading of audio files to the media hosting service.

use anyhow::Context as _;
use reqwest::{
    Request,
    multipart::{Form, Part},
};
use serde::Deserialize;
use url::Url;

use tracklet_core::MediaFile;

use super::{ClientEnvironment, receive_response_body};

pub const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

pub const DEFAULT_CLOUD_NAME: &str = "xarala";

pub const DEFAULT_RESOURCE_TYPE: &str = "raw";

pub const DEFAULT_UPLOAD_PRESET: &str = "react-tracks";

/// Parameters of the upload endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub base_url: String,
    pub cloud_name: String,
    pub resource_type: String,
    pub upload_preset: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            cloud_name: DEFAULT_CLOUD_NAME.to_owned(),
            resource_type: DEFAULT_RESOURCE_TYPE.to_owned(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_owned(),
        }
    }
}

impl UploadConfig {
    /// `{base_url}/{cloud_name}/{resource_type}/upload`
    pub fn upload_url(&self) -> anyhow::Result<Url> {
        let Self {
            base_url,
            cloud_name,
            resource_type,
            upload_preset: _,
        } = self;
        let base_url = base_url.trim_end_matches('/');
        let upload_url = format!("{base_url}/{cloud_name}/{resource_type}/upload");
        upload_url
            .parse()
            .with_context(|| format!("invalid upload URL \"{upload_url}\""))
    }
}

fn upload_form(config: &UploadConfig, file: MediaFile) -> anyhow::Result<Form> {
    let MediaFile {
        name,
        size,
        content_type,
        content,
    } = file;
    let mut file_part = Part::stream_with_length(content, size).file_name(name);
    if let Some(content_type) = content_type {
        file_part = file_part.mime_str(content_type.as_ref())?;
    }
    let form = Form::new()
        .part("file", file_part)
        .text("resource_type", config.resource_type.clone())
        .text("upload_preset", config.upload_preset.clone())
        .text("cloud_name", config.cloud_name.clone());
    Ok(form)
}

pub fn build_upload_request<E>(
    env: &E,
    config: &UploadConfig,
    file: MediaFile,
) -> anyhow::Result<Request>
where
    E: ClientEnvironment,
{
    let url = config.upload_url()?;
    let form = upload_form(config, file)?;
    env.client()
        .post(url)
        .multipart(form)
        .build()
        .map_err(Into::into)
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Extracts the public URL of the uploaded file.
pub fn parse_upload_response(body: &[u8]) -> anyhow::Result<Url> {
    let UploadResponse { url } =
        serde_json::from_slice(body).context("invalid upload response")?;
    url.parse()
        .with_context(|| format!("invalid URL \"{url}\" of uploaded file"))
}

/// Uploads the file and returns its public URL.
pub async fn upload_media_file<E>(
    env: &E,
    config: &UploadConfig,
    file: MediaFile,
) -> anyhow::Result<Url>
where
    E: ClientEnvironment,
{
    log::debug!(
        "Uploading file \"{name}\" with {size} byte(s)",
        name = file.name,
        size = file.size
    );
    let request = build_upload_request(env, config, file)?;
    let response = env.client().execute(request).await?;
    let response_body = receive_response_body(response).await?;
    let url = parse_upload_response(&response_body)?;
    log::debug!("Uploaded file is available at {url}");
    Ok(url)
}
