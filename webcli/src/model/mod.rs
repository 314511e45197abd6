// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use infect::{
    ModelChanged, ModelRender, MessagesConsumed, TaskContext, TaskExecutor, consume_messages,
};
use tracklet_client::models::{session, track_list, track_submission};
use tracklet_core::SubmitPolicy;

pub(crate) mod effect;
pub(crate) use self::effect::Effect;

pub(crate) mod environment;
pub(crate) use self::environment::Environment;

pub(crate) mod intent;
pub(crate) use self::intent::Intent;

pub(crate) mod task;
pub(crate) use self::task::Task;

pub(crate) type MessagePort = infect::MessagePort<Intent, Effect>;
pub(crate) type MessageReceiver = infect::MessageReceiver<Intent, Effect>;

pub(crate) type IntentHandled = infect::IntentHandled<Intent, Effect, Task, ModelChanged>;
pub(crate) type EffectApplied = infect::EffectApplied<Effect, Task, ModelChanged>;

/// Composition of all client models
#[derive(Debug, Default)]
pub(crate) struct Model {
    pub(crate) track_list: track_list::Model,
    pub(crate) track_submission: track_submission::Model,
    pub(crate) session: session::Model,

    /// Spawned tasks whose [`Effect::TaskFinished`] has not arrived yet
    pending_tasks: usize,
}

impl Model {
    #[must_use]
    pub(crate) fn new(submit_policy: SubmitPolicy) -> Self {
        Self {
            track_submission: track_submission::Model::new(submit_policy),
            ..Default::default()
        }
    }

    /// Errors that occurred since the last invocation.
    pub(crate) fn take_last_errors(&mut self) -> Vec<anyhow::Error> {
        let Self {
            track_list,
            track_submission,
            session,
            pending_tasks: _,
        } = self;
        track_list
            .take_last_error()
            .into_iter()
            .chain(track_submission.take_last_error().map(Into::into))
            .chain(session.take_last_error())
            .collect()
    }

    #[must_use]
    pub(crate) fn has_errors(&self) -> bool {
        self.track_list.last_error().is_some()
            || self.track_submission.last_error().is_some()
            || self.session.last_error().is_some()
    }

    #[must_use]
    pub(crate) const fn all_tasks_finished(&self) -> bool {
        self.pending_tasks == 0
    }

    /// Both the submission and liking invalidate the listing of tracks.
    fn take_listing_invalidated(&mut self) -> bool {
        // Both flags must be consumed
        let submitted = self.track_submission.take_listing_invalidated();
        let liked = self.session.take_listing_invalidated();
        submitted || liked
    }

    fn task_finished(&mut self) {
        debug_assert!(self.pending_tasks > 0);
        self.pending_tasks = self.pending_tasks.saturating_sub(1);
        if self.all_tasks_finished() {
            log::debug!("Finished last pending task");
        }
    }

    fn count_spawned_task(&mut self, effect_applied: &EffectApplied) {
        if effect_applied.task.is_none() {
            return;
        }
        self.pending_tasks += 1;
        if self.pending_tasks == 1 {
            log::debug!("Started first pending task");
        }
    }
}

impl infect::Model for Model {
    type Intent = Intent;
    type IntentRejected = Intent;
    type Effect = Effect;
    type Task = Task;
    type RenderHint = ModelChanged;

    fn handle_intent(&mut self, intent: Self::Intent) -> IntentHandled {
        let intent_handled = intent.handle_on(self);
        if let IntentHandled::Accepted(effect_applied) = &intent_handled {
            self.count_spawned_task(effect_applied);
        }
        intent_handled
    }

    fn apply_effect(&mut self, effect: Self::Effect) -> EffectApplied {
        let effect_applied = effect.apply_on(self);
        self.count_spawned_task(&effect_applied);
        effect_applied
    }
}

/// Processes messages until all spawned tasks have finished.
///
/// Rejected intents don't stop the loop. They are collected and
/// returned when finished.
pub(crate) async fn consume_messages_until_finished<T, R>(
    message_rx: &mut MessageReceiver,
    task_context: &mut TaskContext<T, Intent, Effect>,
    model: &mut Model,
    render_model: &mut R,
) -> Vec<Intent>
where
    T: TaskExecutor<T, Intent = Intent, Effect = Effect, Task = Task> + Clone,
    R: ModelRender<Model = Model>,
{
    let mut rejected_intents = Vec::new();
    loop {
        match consume_messages(message_rx, task_context, model, render_model).await {
            MessagesConsumed::IntentRejected(intent) => {
                log::debug!("Continuing message loop after intent rejected: {intent:?}");
                rejected_intents.push(intent);
                // The channel might be empty otherwise
                task_context.submit_intent(Intent::RenderModel);
            }
            MessagesConsumed::ChannelClosed => {
                log::debug!("Exiting message loop after channel closed");
                break;
            }
            MessagesConsumed::NoProgress => {
                if model.all_tasks_finished() {
                    log::debug!("Exiting message loop after all tasks finished");
                    break;
                }
                log::debug!("Continuing message loop until all tasks finished");
            }
        }
    }
    rejected_intents
}
