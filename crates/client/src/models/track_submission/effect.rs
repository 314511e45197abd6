// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tracklet_core::{Draft, MediaFile, SubmissionMode, Track};
use url::Url;

use super::{EffectApplied, Model, State, SubmissionError};

#[derive(Debug)]
pub enum Effect {
    Opened {
        mode: SubmissionMode,
        draft: Draft,
    },
    TitleChanged(String),
    DescriptionChanged(String),
    FileSelected(Option<MediaFile>),
    Cancelled,
    SubmitAccepted,
    UploadFinished(anyhow::Result<Url>),
    MutationFinished(anyhow::Result<Track>),
}

impl Effect {
    pub fn apply_on(self, model: &mut Model) -> EffectApplied {
        log::trace!("Applying effect {self:?} on {model:?}");
        match self {
            Self::Opened { mode, draft } => {
                if model.is_open() {
                    log::warn!("Already open in mode {mode:?}", mode = model.mode);
                    return EffectApplied::unchanged();
                }
                model.open(mode, draft);
                EffectApplied::maybe_changed()
            }
            Self::TitleChanged(title) => {
                if model.state != State::Editing {
                    return EffectApplied::unchanged();
                }
                model.draft.title = title;
                EffectApplied::maybe_changed()
            }
            Self::DescriptionChanged(description) => {
                if model.state != State::Editing {
                    return EffectApplied::unchanged();
                }
                model.draft.description = description;
                EffectApplied::maybe_changed()
            }
            Self::FileSelected(file) => {
                if model.state != State::Editing {
                    return EffectApplied::unchanged();
                }
                model.select_file(file);
                EffectApplied::maybe_changed()
            }
            Self::Cancelled => {
                if model.state != State::Editing {
                    return EffectApplied::unchanged();
                }
                model.close();
                EffectApplied::maybe_changed()
            }
            Self::SubmitAccepted => {
                let Some(task) = model.start_submission() else {
                    log::warn!("Cannot submit draft {draft:?}", draft = model.draft);
                    return EffectApplied::unchanged();
                };
                EffectApplied::maybe_changed_task(task)
            }
            Self::UploadFinished(res) => {
                if model.state != State::Uploading {
                    log::warn!("Discarding unexpected upload result: {res:?}");
                    return EffectApplied::unchanged();
                }
                match res {
                    Ok(url) => {
                        log::debug!("Uploaded file: {url}");
                        let task = model.finish_upload(url);
                        EffectApplied::maybe_changed_task(task)
                    }
                    Err(err) => {
                        model.abort_submission(SubmissionError::UploadFailed(err));
                        EffectApplied::maybe_changed()
                    }
                }
            }
            Self::MutationFinished(res) => {
                if model.state != State::Mutating {
                    log::warn!("Discarding unexpected mutation result: {res:?}");
                    return EffectApplied::unchanged();
                }
                match res {
                    Ok(track) => {
                        model.finish_submission(track);
                        EffectApplied::maybe_changed()
                    }
                    Err(err) => {
                        model.abort_submission(SubmissionError::MutationFailed(err));
                        EffectApplied::maybe_changed()
                    }
                }
            }
        }
    }
}
