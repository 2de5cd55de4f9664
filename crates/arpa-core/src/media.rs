use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

/// Tipo de medio de una entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Song,
    Video,
    #[default]
    Unknown,
}

impl MediaType {
    pub const SONG_EXTENSIONS: &'static [&'static str] = &[
        "mp3", "ogg", "oga", "opus", "flac", "wav", "aac", "m4a", "aiff", "aif", "wma", "wv",
    ];
    pub const VIDEO_EXTENSIONS: &'static [&'static str] = &[
        "mp4", "m4v", "mkv", "avi", "webm", "ogv", "mov", "wmv", "mpg", "mpeg",
    ];

    /// Deduce el tipo a partir de la extensión del fichero (sin distinguir mayúsculas).
    pub fn from_extension(extension: &OsStr) -> Self {
        let Some(ext) = extension.to_str() else {
            return MediaType::Unknown;
        };
        let ext = ext.to_ascii_lowercase();

        if Self::SONG_EXTENSIONS.contains(&ext.as_str()) {
            MediaType::Song
        } else if Self::VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaType::Video
        } else {
            MediaType::Unknown
        }
    }
}

/// Estado de reproducción de una entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    #[default]
    None,
    Playing,
    Paused,
    Stopped,
    /// El fichero de la entrada ya no está en disco
    Missing,
}

impl EntryState {
    pub fn glyph(self) -> Option<StateGlyph> {
        match self {
            EntryState::Playing => Some(StateGlyph::Play),
            EntryState::Paused => Some(StateGlyph::Pause),
            EntryState::Missing => Some(StateGlyph::Error),
            EntryState::None | EntryState::Stopped => None,
        }
    }
}

/// Icono simbólico asociado a un estado. Resolverlo y dibujarlo es cosa de la UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateGlyph {
    Play,
    Pause,
    Error,
}

impl StateGlyph {
    /// Nombre del icono según la especificación de iconos de freedesktop.
    pub fn icon_name(self) -> &'static str {
        match self {
            StateGlyph::Play => "media-playback-start",
            StateGlyph::Pause => "media-playback-pause",
            StateGlyph::Error => "dialog-error",
        }
    }
}
