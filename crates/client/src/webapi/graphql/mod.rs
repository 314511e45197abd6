// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Minimal GraphQL over HTTP.
//!
//! Every operation is sent as a `POST` request with a JSON body
//! containing the query document and its variables.

use anyhow::Context as _;
use reqwest::{Request, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{ClientEnvironment, receive_response_body};

/// Prefix of the `Authorization` header value
pub const AUTHORIZATION_SCHEME: &str = "JWT";

#[derive(Debug, Serialize)]
struct RequestBody<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound = "D: DeserializeOwned")]
struct ResponseBody<D> {
    #[serde(default)]
    data: Option<D>,

    #[serde(default)]
    errors: Vec<ResponseError>,
}

pub fn build_request<E, V>(env: &E, query: &str, variables: V) -> anyhow::Result<Request>
where
    E: ClientEnvironment,
    V: Serialize,
{
    let body = RequestBody { query, variables };
    let mut request = env.client().post(env.api_url().clone()).json(&body);
    if let Some(auth_token) = env.auth_token() {
        request = request.header(
            header::AUTHORIZATION,
            format!("{AUTHORIZATION_SCHEME} {auth_token}"),
        );
    }
    request.build().map_err(Into::into)
}

/// Extracts the data from a response body.
///
/// Fails if the response contains any errors, even if some
/// data is available.
pub fn parse_response<D>(body: &[u8]) -> anyhow::Result<D>
where
    D: DeserializeOwned,
{
    let ResponseBody { data, errors } = serde_json::from_slice::<ResponseBody<D>>(body)
        .context("invalid GraphQL response")?;
    if !errors.is_empty() {
        let messages = errors
            .into_iter()
            .map(|ResponseError { message }| message)
            .collect::<Vec<_>>();
        anyhow::bail!("{}", messages.join("; "));
    }
    data.context("missing data in GraphQL response")
}

/// Executes a query or mutation.
pub async fn execute<E, V, D>(env: &E, query: &str, variables: V) -> anyhow::Result<D>
where
    E: ClientEnvironment,
    V: Serialize,
    D: DeserializeOwned,
{
    let request = build_request(env, query, variables)?;
    log::debug!("Sending GraphQL request to {url}", url = request.url());
    let response = env.client().execute(request).await?;
    let response_body = receive_response_body(response).await?;
    parse_response(&response_body)
}
