// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use infect::{TaskContext, TaskExecutor};
use reqwest::Client;
use url::Url;

use tracklet_client::webapi::{ClientEnvironment, upload::UploadConfig};

use super::{Effect, Intent, Task};

/// Immutable environment
#[derive(Debug)]
pub(crate) struct Environment {
    client: Client,
    api_url: Url,
    auth_token: Option<String>,
    upload_config: UploadConfig,
}

impl Environment {
    #[must_use]
    pub(crate) fn new(api_url: Url, auth_token: Option<String>, upload_config: UploadConfig) -> Self {
        Self {
            client: Client::new(),
            api_url,
            auth_token,
            upload_config,
        }
    }
}

impl ClientEnvironment for Environment {
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

impl TaskExecutor<Arc<Self>> for Environment {
    type Intent = Intent;
    type Effect = Effect;
    type Task = Task;

    fn spawn_task(&self, context: TaskContext<Arc<Self>, Intent, Effect>, task: Task) {
        let TaskContext {
            task_executor: shared_env,
            mut message_port,
        } = context;
        tokio::spawn(async move {
            log::debug!("Executing task: {task:?}");
            let effect = task.execute(&*shared_env).await;
            log::debug!("Task finished with effect: {effect:?}");
            // The effect and the completion of the task arrive together
            message_port.submit_effect(Effect::TaskFinished(Box::new(effect)));
        });
    }
}
