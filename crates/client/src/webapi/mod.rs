// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bytes::Bytes;
use reqwest::{Client, Response, StatusCode};
use url::Url;

pub mod graphql;

pub mod upload;
use self::upload::UploadConfig;

/// Access to the remote services
pub trait ClientEnvironment {
    fn client(&self) -> &Client;

    /// Endpoint of the GraphQL API
    fn api_url(&self) -> &Url;

    /// Token for the `Authorization` header
    fn auth_token(&self) -> Option<&str>;

    fn upload_config(&self) -> &UploadConfig;
}

/// Checks the response status and reads the body.
///
/// The JSON body of an unsuccessful response is attached
/// as context to the error.
pub async fn receive_response_body(response: Response) -> anyhow::Result<Bytes> {
    let response_status = response.status();
    let bytes = response.bytes().await?;
    check_response_status(response_status, &bytes)?;
    Ok(bytes)
}

fn check_response_status(response_status: StatusCode, body: &[u8]) -> anyhow::Result<()> {
    if response_status.is_success() {
        return Ok(());
    }
    let err = anyhow::anyhow!("{response_status}");
    let json = serde_json::from_slice::<serde_json::Value>(body).unwrap_or_default();
    let err = if json.is_null() {
        err
    } else {
        err.context(json)
    };
    Err(err)
}

#[cfg(test)]
pub(crate) mod testing;
