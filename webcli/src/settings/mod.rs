// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use tracklet_client::webapi::upload::{
    DEFAULT_BASE_URL, DEFAULT_CLOUD_NAME, DEFAULT_RESOURCE_TYPE, DEFAULT_UPLOAD_PRESET,
    UploadConfig,
};
use tracklet_core::{FILE_SIZE_LIMIT_BYTES, SubmitPolicy};

pub(crate) const FILE_NAME: &str = "tracklet_settings";

pub(crate) const FILE_SUFFIX: &str = "ron";

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8000/graphql/";

pub(crate) const API_URL_ENV: &str = "TRACKLET_API_URL";

pub(crate) const AUTH_TOKEN_ENV: &str = "TRACKLET_AUTH_TOKEN";

pub(crate) const UPLOAD_CLOUD_NAME_ENV: &str = "TRACKLET_UPLOAD_CLOUD_NAME";

pub(crate) const UPLOAD_PRESET_ENV: &str = "TRACKLET_UPLOAD_PRESET";

#[derive(Debug, thiserror::Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings from \"{}\": {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse settings from \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    #[error("invalid API URL \"{url}\": {source}")]
    InvalidApiUrl {
        url: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct UploadSettings {
    pub(crate) base_url: String,
    pub(crate) cloud_name: String,
    pub(crate) resource_type: String,
    pub(crate) upload_preset: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            cloud_name: DEFAULT_CLOUD_NAME.to_owned(),
            resource_type: DEFAULT_RESOURCE_TYPE.to_owned(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_owned(),
        }
    }
}

impl From<UploadSettings> for UploadConfig {
    fn from(from: UploadSettings) -> Self {
        let UploadSettings {
            base_url,
            cloud_name,
            resource_type,
            upload_preset,
        } = from;
        Self {
            base_url,
            cloud_name,
            resource_type,
            upload_preset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SubmitSettings {
    pub(crate) file_required_on_update: bool,
    pub(crate) file_size_limit_bytes: u64,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            file_required_on_update: true,
            file_size_limit_bytes: FILE_SIZE_LIMIT_BYTES,
        }
    }
}

impl From<SubmitSettings> for SubmitPolicy {
    fn from(from: SubmitSettings) -> Self {
        let SubmitSettings {
            file_required_on_update,
            file_size_limit_bytes,
        } = from;
        Self {
            file_required_on_update,
            file_size_limit_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Endpoint of the GraphQL API
    pub(crate) api_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) auth_token: Option<String>,

    pub(crate) upload: UploadSettings,

    pub(crate) submit: SubmitSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            auth_token: None,
            upload: Default::default(),
            submit: Default::default(),
        }
    }
}

impl Settings {
    /// Loads the settings file from the given directory.
    ///
    /// A missing file results in the default settings.
    pub(crate) fn load(parent_dir: &Path) -> Result<Self, SettingsError> {
        let path = settings_file_path(parent_dir);
        log::debug!("Loading settings from file: {}", path.display());
        match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text).map_err(|source| SettingsError::Parse { path, source }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("Using default settings");
                Ok(Default::default())
            }
            Err(source) => Err(SettingsError::Read { path, source }),
        }
    }

    pub(crate) fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Applies overrides from environment variables.
    pub(crate) fn override_from_env(&mut self) {
        self.override_with(|key| env::var(key).ok());
    }

    fn override_with(&mut self, mut var: impl FnMut(&str) -> Option<String>) {
        let mut var = |key: &str| var(key).filter(|value: &String| !value.trim().is_empty());
        if let Some(api_url) = var(API_URL_ENV) {
            self.api_url = api_url;
        }
        if let Some(auth_token) = var(AUTH_TOKEN_ENV) {
            self.auth_token = Some(auth_token);
        }
        if let Some(cloud_name) = var(UPLOAD_CLOUD_NAME_ENV) {
            self.upload.cloud_name = cloud_name;
        }
        if let Some(upload_preset) = var(UPLOAD_PRESET_ENV) {
            self.upload.upload_preset = upload_preset;
        }
    }

    pub(crate) fn api_url(&self) -> Result<Url, SettingsError> {
        self.api_url
            .parse()
            .map_err(|source| SettingsError::InvalidApiUrl {
                url: self.api_url.clone(),
                source,
            })
    }
}

#[must_use]
pub(crate) fn settings_file_path(parent_dir: &Path) -> PathBuf {
    let mut path = parent_dir.join(FILE_NAME);
    path.set_extension(FILE_SUFFIX);
    path
}

/// The platform-specific configuration directory
#[must_use]
pub(crate) fn default_settings_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tracklet").map(|dirs| dirs.config_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests;
