// Track references and file/track type classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Index used when a track is created without an explicit one
pub const DEFAULT_TRACK_INDEX: i32 = 0;

/// Zero-based reference to a track inside a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTrack")]
pub struct Track {
    #[serde(rename = "track")]
    index: i32,
}

impl Track {
    /// Create a track reference, rejecting negative indices
    pub fn new(index: i32) -> Result<Self, DomainError> {
        if index < DEFAULT_TRACK_INDEX {
            return Err(DomainError::out_of_range(
                "The track index must be greater than or equal to 0.",
            ));
        }
        Ok(Self { index })
    }

    pub fn index(&self) -> i32 {
        self.index
    }
}

impl Default for Track {
    fn default() -> Self {
        Self {
            index: DEFAULT_TRACK_INDEX,
        }
    }
}

#[derive(Deserialize)]
struct RawTrack {
    #[serde(rename = "track", default)]
    index: i32,
}

impl TryFrom<RawTrack> for Track {
    type Error = DomainError;

    fn try_from(raw: RawTrack) -> Result<Self, Self::Error> {
        Track::new(raw.index)
    }
}

/// Kind of media carried by an input file or produced by a transcoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Audio,
    Video,
    Multi,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Audio => "audio",
            FileType::Video => "video",
            FileType::Multi => "multi",
        }
    }

    /// Audio and multiplexed files carry audio track information
    pub fn has_audio_info(&self) -> bool {
        matches!(self, FileType::Audio | FileType::Multi)
    }

    /// Video and multiplexed files count against the single-video limit
    pub fn is_multi_or_video(&self) -> bool {
        matches!(self, FileType::Video | FileType::Multi)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audio" => Ok(FileType::Audio),
            "video" => Ok(FileType::Video),
            "multi" => Ok(FileType::Multi),
            other => Err(DomainError::invalid(format!(
                "Unknown file type '{}'. Expected one of: audio, video, multi",
                other
            ))),
        }
    }
}
