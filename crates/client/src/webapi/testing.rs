// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use reqwest::Client;
use url::Url;

use super::{ClientEnvironment, upload::UploadConfig};

/// Environment for building requests without sending them
#[derive(Debug)]
pub(crate) struct TestEnvironment {
    pub(crate) client: Client,
    pub(crate) api_url: Url,
    pub(crate) auth_token: Option<String>,
    pub(crate) upload_config: UploadConfig,
}

impl TestEnvironment {
    pub(crate) fn new() -> Self {
        Self {
            client: Client::new(),
            api_url: "http://localhost:8000/graphql/".parse().unwrap(),
            auth_token: None,
            upload_config: UploadConfig::default(),
        }
    }

    pub(crate) fn with_auth_token(auth_token: &str) -> Self {
        Self {
            auth_token: Some(auth_token.to_owned()),
            ..Self::new()
        }
    }
}

impl ClientEnvironment for TestEnvironment {
    fn client(&self) -> &Client {
        &self.client
    }

    fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    fn upload_config(&self) -> &UploadConfig {
        &self.upload_config
    }
}

/// The JSON body of a built request
pub(crate) fn request_body_json(request: &reqwest::Request) -> serde_json::Value {
    let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
    serde_json::from_slice(body).unwrap()
}
