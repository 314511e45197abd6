// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use anyhow::{Context as _, bail};
use clap::{Arg, ArgMatches, Command, value_parser};
use infect::{ModelChanged, ModelRender, TaskContext, message_channel};
use tokio::signal;
use url::Url;

use tracklet_client::models::{session, track_list, track_submission};
use tracklet_core::{MediaFile, Track, TrackId, UserId, media::is_accepted_media_type};

mod model;
use self::model::{Environment, Intent, MessagePort, Model, consume_messages_until_finished};

mod settings;
use self::settings::Settings;

const DEFAULT_LOG_FILTER: &str = "info";

const MESSAGE_CHANNEL_CAPACITY: usize = 1000;

const API_URL_ARG: &str = "api-url";

const SETTINGS_DIR_ARG: &str = "settings-dir";

const SEARCH_ARG: &str = "search";

const USER_ID_ARG: &str = "user-id";

const TRACK_ID_ARG: &str = "track-id";

const TITLE_ARG: &str = "title";

const DESCRIPTION_ARG: &str = "description";

const FILE_ARG: &str = "file";

#[derive(Debug)]
enum CliCommand {
    Tracks {
        search: Option<String>,
    },
    Me,
    Profile {
        user_id: UserId,
    },
    Create {
        title: String,
        description: String,
        file: MediaFile,
    },
    Update {
        track_id: TrackId,
        title: Option<String>,
        description: Option<String>,
        file: Option<MediaFile>,
    },
    Like {
        track_id: TrackId,
    },
}

impl CliCommand {
    async fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let command = match matches.subcommand() {
            Some(("tracks", matches)) => Self::Tracks {
                search: matches.get_one::<String>(SEARCH_ARG).cloned(),
            },
            Some(("me", _)) => Self::Me,
            Some(("profile", matches)) => Self::Profile {
                user_id: required_arg::<UserId>(matches, USER_ID_ARG)?,
            },
            Some(("create", matches)) => {
                let file_path = required_arg::<PathBuf>(matches, FILE_ARG)?;
                Self::Create {
                    title: required_arg::<String>(matches, TITLE_ARG)?,
                    description: required_arg::<String>(matches, DESCRIPTION_ARG)?,
                    file: read_media_file(&file_path).await?,
                }
            }
            Some(("update", matches)) => {
                let file = match matches.get_one::<PathBuf>(FILE_ARG) {
                    Some(file_path) => Some(read_media_file(file_path).await?),
                    None => None,
                };
                Self::Update {
                    track_id: required_arg::<TrackId>(matches, TRACK_ID_ARG)?,
                    title: matches.get_one::<String>(TITLE_ARG).cloned(),
                    description: matches.get_one::<String>(DESCRIPTION_ARG).cloned(),
                    file,
                }
            }
            Some(("like", matches)) => Self::Like {
                track_id: required_arg::<TrackId>(matches, TRACK_ID_ARG)?,
            },
            Some((subcommand, _)) => bail!("unknown subcommand {subcommand}"),
            None => bail!("missing subcommand"),
        };
        Ok(command)
    }

    /// Intents that are sent before processing any messages.
    fn into_initial_intents(self) -> (Vec<Intent>, Option<PendingEdit>) {
        match self {
            Self::Tracks { search } => (
                vec![track_list::Intent::FetchTracks { search }.into()],
                None,
            ),
            Self::Me => (vec![session::Intent::FetchMe.into()], None),
            Self::Profile { user_id } => (
                vec![session::Intent::FetchProfile { user_id }.into()],
                None,
            ),
            Self::Create {
                title,
                description,
                file,
            } => (
                vec![
                    track_submission::Intent::OpenCreate.into(),
                    track_submission::Intent::ChangeTitle(title).into(),
                    track_submission::Intent::ChangeDescription(description).into(),
                    track_submission::Intent::SelectFile(Some(file)).into(),
                    track_submission::Intent::Submit.into(),
                ],
                None,
            ),
            Self::Update {
                track_id,
                title,
                description,
                file,
            } => (
                fetch_session_and_tracks(),
                Some(PendingEdit::Update {
                    track_id,
                    title,
                    description,
                    file,
                }),
            ),
            Self::Like { track_id } => (
                fetch_session_and_tracks(),
                Some(PendingEdit::Like { track_id }),
            ),
        }
    }
}

fn fetch_session_and_tracks() -> Vec<Intent> {
    vec![
        session::Intent::FetchMe.into(),
        track_list::Intent::FetchTracks { search: None }.into(),
    ]
}

fn required_arg<T>(matches: &ArgMatches, id: &str) -> anyhow::Result<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .cloned()
        .with_context(|| format!("missing argument {id}"))
}

/// Reads an audio file for uploading.
async fn read_media_file(path: &Path) -> anyhow::Result<MediaFile> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("invalid file path \"{}\"", path.display()))?;
    let content_type = mime_guess::from_path(path).first();
    if let Some(content_type) = &content_type {
        if !is_accepted_media_type(content_type) {
            bail!("{name}: unsupported media type {content_type}");
        }
    } else {
        log::warn!("{name}: unknown media type");
    }
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read file \"{}\"", path.display()))?;
    Ok(MediaFile::new(name, content_type, content.into()))
}

/// Edits that require both the session and the track
#[derive(Debug)]
enum PendingEdit {
    Update {
        track_id: TrackId,
        title: Option<String>,
        description: Option<String>,
        file: Option<MediaFile>,
    },
    Like {
        track_id: TrackId,
    },
}

impl PendingEdit {
    const fn track_id(&self) -> TrackId {
        match self {
            Self::Update { track_id, .. } | Self::Like { track_id } => *track_id,
        }
    }

    fn into_intents(self, session: &tracklet_core::Session, track: Track) -> Vec<Intent> {
        match self {
            Self::Update {
                track_id: _,
                title,
                description,
                file,
            } => {
                let mut intents = vec![
                    track_submission::Intent::OpenEdit {
                        session: session.clone(),
                        track,
                    }
                    .into(),
                ];
                if let Some(title) = title {
                    intents.push(track_submission::Intent::ChangeTitle(title).into());
                }
                if let Some(description) = description {
                    intents.push(track_submission::Intent::ChangeDescription(description).into());
                }
                if file.is_some() {
                    intents.push(track_submission::Intent::SelectFile(file).into());
                }
                intents.push(track_submission::Intent::Submit.into());
                intents
            }
            Self::Like { track_id: _ } => vec![session::Intent::LikeTrack { track }.into()],
        }
    }
}

#[derive(Debug)]
struct RenderCli {
    message_port: MessagePort,
    pending_edit: Option<PendingEdit>,
    failed: bool,
    last_tracks_since: Option<Instant>,
    last_me_since: Option<Instant>,
    last_profile_since: Option<Instant>,
    last_submitted: Option<Track>,
}

impl RenderCli {
    fn new(message_port: MessagePort, pending_edit: Option<PendingEdit>) -> Self {
        Self {
            message_port,
            pending_edit,
            failed: false,
            last_tracks_since: None,
            last_me_since: None,
            last_profile_since: None,
            last_submitted: None,
        }
    }

    fn render(&mut self, model: &Model) {
        if model.has_errors() {
            // Errors are reported after terminating
            self.pending_edit = None;
            return;
        }
        self.render_tracks(&model.track_list);
        self.render_session(&model.session);
        if self.last_submitted.as_ref() != model.track_submission.last_submitted() {
            self.last_submitted = model.track_submission.last_submitted().cloned();
            if let Some(track) = &self.last_submitted {
                log::info!("Submitted track {}: {}", track.id.value(), track.title);
            }
        }
        self.submit_pending_edit(model);
    }

    fn render_tracks(&mut self, track_list: &track_list::Model) {
        let Some(snapshot) = track_list.tracks().last_snapshot() else {
            return;
        };
        if self.last_tracks_since == Some(snapshot.since) {
            return;
        }
        self.last_tracks_since = Some(snapshot.since);
        log::info!("Found {} track(s)", snapshot.value.len());
        for track in &snapshot.value {
            log_track(track);
        }
    }

    fn render_session(&mut self, session: &session::Model) {
        if let Some(snapshot) = session.me().last_snapshot() {
            if self.last_me_since != Some(snapshot.since) {
                self.last_me_since = Some(snapshot.since);
                if let Some(me) = &snapshot.value {
                    log::info!(
                        "Signed in as {} ({}) with {} like(s)",
                        me.username,
                        me.id.value(),
                        me.likes.len()
                    );
                } else {
                    log::info!("Not signed in");
                }
            }
        }
        if let Some(snapshot) = session.profile().last_snapshot() {
            if self.last_profile_since != Some(snapshot.since) {
                self.last_profile_since = Some(snapshot.since);
                if let Some(profile) = &snapshot.value {
                    log::info!(
                        "User {} ({}) has posted {} track(s) and liked {} track(s)",
                        profile.user.username,
                        profile.user.id.value(),
                        profile.tracks.len(),
                        profile.likes.len()
                    );
                    if let Some(date_joined) = profile.date_joined {
                        log::info!("Joined at {date_joined}");
                    }
                    for track in &profile.tracks {
                        log_track(track);
                    }
                } else {
                    log::info!("User not found");
                }
            }
        }
    }

    fn submit_pending_edit(&mut self, model: &Model) {
        let Some(pending_edit) = &self.pending_edit else {
            return;
        };
        if model.session.me().is_pending() || model.track_list.is_pending() {
            return;
        }
        let (Some(me), Some(tracks)) = (
            model.session.me().last_value(),
            model.track_list.tracks().last_value(),
        ) else {
            return;
        };
        let track_id = pending_edit.track_id();
        let Some(pending_edit) = self.pending_edit.take() else {
            return;
        };
        let Some(session) = me else {
            log::error!("Authentication required");
            self.failed = true;
            return;
        };
        let Some(track) = tracks.iter().find(|track| track.id == track_id) else {
            log::error!("Track {} not found", track_id.value());
            self.failed = true;
            return;
        };
        for intent in pending_edit.into_intents(session, track.clone()) {
            self.message_port.submit_intent(intent);
        }
    }
}

impl ModelRender for RenderCli {
    type Model = Model;

    fn render_model(&mut self, model: &Self::Model, model_changed: ModelChanged) -> Option<Intent> {
        debug_assert_eq!(ModelChanged::MaybeChanged, model_changed);
        self.render(model);
        None
    }
}

fn log_track(track: &Track) {
    let owner = track
        .owner
        .as_ref()
        .map_or("unknown", |owner| owner.username.as_str());
    log::info!(
        "{id}: \"{title}\" by {owner} ({like_count} like(s)) <{url}>",
        id = track.id.value(),
        title = track.title,
        like_count = track.like_count,
        url = track.url,
    );
}

fn track_id_arg() -> Arg {
    Arg::new(TRACK_ID_ARG)
        .help("The id of the track")
        .value_parser(value_parser!(TrackId))
        .required(true)
}

fn title_arg() -> Arg {
    Arg::new(TITLE_ARG)
        .long(TITLE_ARG)
        .help("The title of the track")
        .num_args(1)
}

fn description_arg() -> Arg {
    Arg::new(DESCRIPTION_ARG)
        .long(DESCRIPTION_ARG)
        .help("The description of the track")
        .num_args(1)
}

fn file_arg() -> Arg {
    Arg::new(FILE_ARG)
        .long(FILE_ARG)
        .help("An MP3 or WAV audio file")
        .value_parser(value_parser!(PathBuf))
        .num_args(1)
}

fn new_app() -> Command {
    Command::new("tracklet-webcli")
        .about("Share, like and edit short audio tracks")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg(
            Arg::new(API_URL_ARG)
                .long(API_URL_ARG)
                .help("The URL of the GraphQL API (overrides the settings)")
                .value_parser(value_parser!(Url))
                .num_args(1),
        )
        .arg(
            Arg::new(SETTINGS_DIR_ARG)
                .long(SETTINGS_DIR_ARG)
                .help("The directory of the settings file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .subcommand(
            Command::new("tracks").about("Lists all tracks").arg(
                Arg::new(SEARCH_ARG)
                    .long(SEARCH_ARG)
                    .help("Only list tracks that match the search term")
                    .num_args(1),
            ),
        )
        .subcommand(Command::new("me").about("Shows the signed in user"))
        .subcommand(
            Command::new("profile")
                .about("Shows the profile of a user")
                .arg(
                    Arg::new(USER_ID_ARG)
                        .help("The id of the user")
                        .value_parser(value_parser!(UserId))
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("create")
                .about("Uploads an audio file and creates a new track")
                .arg(title_arg().required(true))
                .arg(description_arg().required(true))
                .arg(file_arg().required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Updates one of your tracks")
                .arg(track_id_arg())
                .arg(title_arg())
                .arg(description_arg())
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("like")
                .about("Likes a track")
                .arg(track_id_arg()),
        )
}

fn load_settings(matches: &ArgMatches) -> anyhow::Result<Settings> {
    let settings_dir = matches
        .get_one::<PathBuf>(SETTINGS_DIR_ARG)
        .cloned()
        .or_else(settings::default_settings_dir);
    let mut settings = if let Some(settings_dir) = settings_dir {
        Settings::load(&settings_dir)?
    } else {
        log::warn!("No settings directory available");
        Settings::default()
    };
    settings.override_from_env();
    if let Some(api_url) = matches.get_one::<Url>(API_URL_ARG) {
        settings.api_url = api_url.to_string();
    }
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let matches = new_app().get_matches();
    let settings = load_settings(&matches)?;
    let api_url = settings.api_url()?;
    log::info!("Using API at {api_url}");

    let command = CliCommand::from_matches(&matches).await?;
    let (initial_intents, pending_edit) = command.into_initial_intents();

    let Settings {
        auth_token,
        upload,
        submit,
        ..
    } = settings;
    let shared_env = Arc::new(Environment::new(api_url, auth_token, upload.into()));
    let mut model = Model::new(submit.into());

    let (message_tx, mut message_rx) = message_channel(MESSAGE_CHANNEL_CAPACITY);
    let mut message_port = MessagePort::new(message_tx);
    for intent in initial_intents {
        message_port.submit_intent(intent);
    }
    let mut task_context = TaskContext {
        message_port: message_port.clone(),
        task_executor: Arc::clone(&shared_env),
    };
    let mut render_cli = RenderCli::new(message_port, pending_edit);

    let rejected_intents = tokio::select! {
        rejected_intents = consume_messages_until_finished(
            &mut message_rx,
            &mut task_context,
            &mut model,
            &mut render_cli,
        ) => rejected_intents,
        res = signal::ctrl_c() => {
            res.context("failed to receive Ctrl-C/SIGINT signal")?;
            bail!("aborted");
        }
    };

    for intent in &rejected_intents {
        log::error!("{}", intent.rejection_message());
    }
    let last_errors = model.take_last_errors();
    for err in &last_errors {
        log::error!("{err:#}");
    }
    if render_cli.failed || !rejected_intents.is_empty() || !last_errors.is_empty() {
        bail!("failed");
    }
    Ok(())
}
