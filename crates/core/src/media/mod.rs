// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use bytes::Bytes;
use mime::Mime;

/// Maximum size of audio files that are accepted for uploading.
pub const FILE_SIZE_LIMIT_BYTES: u64 = 10_000_000;

/// Media types offered when picking audio files.
pub const ACCEPTED_MEDIA_TYPES: [&str; 2] = ["audio/mp3", "audio/wav"];

// Common aliases of the accepted media types
const ACCEPTED_MEDIA_TYPE_ALIASES: [&str; 4] =
    ["audio/mpeg", "audio/x-wav", "audio/wave", "audio/vnd.wave"];

/// Checks if a media type is one of the accepted audio formats.
#[must_use]
pub fn is_accepted_media_type(media_type: &Mime) -> bool {
    if media_type.type_() != mime::AUDIO {
        return false;
    }
    let essence = media_type.essence_str();
    ACCEPTED_MEDIA_TYPES
        .iter()
        .chain(ACCEPTED_MEDIA_TYPE_ALIASES.iter())
        .any(|accepted| accepted.eq_ignore_ascii_case(essence))
}

/// A file selected for uploading
#[derive(Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Display name, usually the file name without any directories
    pub name: String,

    /// Size in bytes
    pub size: u64,

    pub content_type: Option<Mime>,

    pub content: Bytes,
}

impl MediaFile {
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: Option<Mime>, content: Bytes) -> Self {
        let size = content.len() as u64;
        Self {
            name: name.into(),
            size,
            content_type,
            content,
        }
    }
}

// The content is omitted from debug output
impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            size,
            content_type,
            content: _,
        } = self;
        f.debug_struct("MediaFile")
            .field("name", name)
            .field("size", size)
            .field("content_type", content_type)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{file_name}: is to large")]
pub struct FileTooLarge {
    pub file_name: String,
    pub size: u64,
    pub limit_bytes: u64,
}

/// Accepts or rejects a selected file by its size.
///
/// Selecting no file is always accepted.
pub fn validate_file(
    file: Option<MediaFile>,
    limit_bytes: u64,
) -> Result<Option<MediaFile>, FileTooLarge> {
    let Some(file) = file else {
        return Ok(None);
    };
    if file.size > limit_bytes {
        let MediaFile { name, size, .. } = file;
        return Err(FileTooLarge {
            file_name: name,
            size,
            limit_bytes,
        });
    }
    Ok(Some(file))
}
