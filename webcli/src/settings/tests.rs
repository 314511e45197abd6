// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use super::*;

#[test]
fn parse_empty() {
    assert_eq!(Settings::default(), Settings::parse("()").unwrap());
}

#[test]
fn parse_partial() {
    let settings = Settings::parse(
        r#"(
            api_url: "https://tracks.example.com/graphql/",
            upload: (cloud_name: "demo"),
            submit: (file_required_on_update: false),
        )"#,
    )
    .unwrap();
    assert_eq!("https://tracks.example.com/graphql/", settings.api_url);
    assert!(settings.auth_token.is_none());
    assert_eq!("demo", settings.upload.cloud_name);
    assert_eq!(DEFAULT_UPLOAD_PRESET, settings.upload.upload_preset);
    assert!(!settings.submit.file_required_on_update);
    assert_eq!(FILE_SIZE_LIMIT_BYTES, settings.submit.file_size_limit_bytes);
}

#[test]
fn parse_invalid() {
    assert!(Settings::parse("(api_url: 1)").is_err());
}

#[test]
fn load_missing_file() {
    let dir = env::temp_dir().join("tracklet-settings-test-missing");
    assert_eq!(Settings::default(), Settings::load(&dir).unwrap());
}

#[test]
fn file_path() {
    assert_eq!(
        Path::new("/etc/tracklet/tracklet_settings.ron"),
        settings_file_path(Path::new("/etc/tracklet"))
    );
}

#[test]
fn override_with_vars() {
    let vars = HashMap::from([
        (API_URL_ENV, "http://[::1]:8000/graphql/"),
        (AUTH_TOKEN_ENV, "abc"),
        (UPLOAD_CLOUD_NAME_ENV, "demo"),
        (UPLOAD_PRESET_ENV, " "),
    ]);
    let mut settings = Settings::default();
    settings.override_with(|key| vars.get(key).map(ToString::to_string));
    assert_eq!("http://[::1]:8000/graphql/", settings.api_url().unwrap().as_str());
    assert_eq!(Some("abc"), settings.auth_token.as_deref());
    assert_eq!("demo", settings.upload.cloud_name);
    // Blank values are ignored
    assert_eq!(DEFAULT_UPLOAD_PRESET, settings.upload.upload_preset);
}

#[test]
fn invalid_api_url() {
    let settings = Settings {
        api_url: "localhost".to_owned(),
        ..Default::default()
    };
    assert!(matches!(
        settings.api_url(),
        Err(SettingsError::InvalidApiUrl { .. })
    ));
}

#[test]
fn into_upload_config_and_policy() {
    let settings = Settings::default();
    assert_eq!(UploadConfig::default(), settings.upload.into());
    assert_eq!(SubmitPolicy::default(), settings.submit.into());
}
