// Output renditions: audio and video transcodings sharing a common track header

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::{FileType, Track};
use crate::domain::rules::{
    require_even, require_items, require_text, require_value, BitratePolicy, BitrateSettings,
};

/// Rate control used by a video rendition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitrateMode {
    /// Constant bitrate
    Cbr,
    /// Variable bitrate
    Vbr,
}

impl BitrateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BitrateMode::Cbr => "cbr",
            BitrateMode::Vbr => "vbr",
        }
    }
}

impl fmt::Display for BitrateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BitrateMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cbr" => Ok(BitrateMode::Cbr),
            "vbr" => Ok(BitrateMode::Vbr),
            other => Err(DomainError::invalid(format!(
                "Unknown bitrate mode '{}'. Expected one of: cbr, vbr",
                other
            ))),
        }
    }
}

/// Fields every rendition carries regardless of its media kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackHeader {
    track_id: String,
    track_type: FileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    track_name: Option<String>,
    codec: String,
}

impl TrackHeader {
    pub fn track_id(&self) -> &str {
        &self.track_id
    }

    pub fn track_type(&self) -> FileType {
        self.track_type
    }

    pub fn track_name(&self) -> Option<&str> {
        self.track_name.as_deref()
    }

    pub fn codec(&self) -> &str {
        &self.codec
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TrackHeaderDraft {
    track_id: Option<String>,
    track_type: Option<FileType>,
    track_name: Option<String>,
    codec: Option<String>,
}

impl TrackHeaderDraft {
    fn build(self) -> Result<TrackHeader, DomainError> {
        let track_id = require_text(
            self.track_id,
            "The 'trackId' field is required when creating Transcoding.",
        )?;
        let track_type = require_value(
            self.track_type,
            "The 'trackType' field is required when creating Transcoding.",
        )?;
        let codec = require_text(
            self.codec,
            "The 'codec' field is required when creating Transcoding.",
        )?;
        Ok(TrackHeader {
            track_id,
            track_type,
            track_name: self.track_name,
            codec,
        })
    }
}

/// Audio rendition mixed from one or more source tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioTranscoding {
    #[serde(flatten)]
    header: TrackHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    sources: Vec<Track>,
}

impl AudioTranscoding {
    pub fn builder() -> AudioTranscodingBuilder {
        AudioTranscodingBuilder::default()
    }

    pub fn header(&self) -> &TrackHeader {
        &self.header
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn sources(&self) -> &[Track] {
        &self.sources
    }
}

#[derive(Debug, Default)]
pub struct AudioTranscodingBuilder {
    header: TrackHeaderDraft,
    language: Option<String>,
    sources: Option<Vec<Track>>,
}

impl AudioTranscodingBuilder {
    pub fn track_id(mut self, track_id: impl Into<String>) -> Self {
        self.header.track_id = Some(track_id.into());
        self
    }

    pub fn track_type(mut self, track_type: FileType) -> Self {
        self.header.track_type = Some(track_type);
        self
    }

    pub fn track_name(mut self, track_name: impl Into<String>) -> Self {
        self.header.track_name = Some(track_name.into());
        self
    }

    pub fn codec(mut self, codec: impl Into<String>) -> Self {
        self.header.codec = Some(codec.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn sources(mut self, sources: Vec<Track>) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn source(mut self, track: Track) -> Self {
        self.sources.get_or_insert_with(Vec::new).push(track);
        self
    }

    /// Variant rules first, then the common header
    pub fn build(self) -> Result<AudioTranscoding, DomainError> {
        let sources = require_items(
            self.sources,
            "The 'sources' field is required when the track_type is 'audio' during Transcoding creation.",
        )?;
        let header = self.header.build()?;
        Ok(AudioTranscoding {
            header,
            language: self.language,
            sources,
        })
    }
}

/// Video rendition at a fixed resolution and rate-control setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoTranscoding {
    #[serde(flatten)]
    header: TrackHeader,
    height: u32,
    width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitrate_mode: Option<BitrateMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crf: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bandwidth: Option<u32>,
}

impl VideoTranscoding {
    pub fn builder() -> VideoTranscodingBuilder {
        VideoTranscodingBuilder::default()
    }

    pub fn header(&self) -> &TrackHeader {
        &self.header
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn bitrate_mode(&self) -> Option<BitrateMode> {
        self.bitrate_mode
    }

    pub fn bitrate(&self) -> Option<u32> {
        self.bitrate
    }

    pub fn min_bitrate(&self) -> Option<u32> {
        self.min_bitrate
    }

    pub fn max_bitrate(&self) -> Option<u32> {
        self.max_bitrate
    }

    pub fn crf(&self) -> Option<u32> {
        self.crf
    }

    pub fn bandwidth(&self) -> Option<u32> {
        self.bandwidth
    }
}

#[derive(Debug, Default)]
pub struct VideoTranscodingBuilder {
    header: TrackHeaderDraft,
    height: Option<u32>,
    width: Option<u32>,
    bitrate: BitrateSettings,
    bandwidth: Option<u32>,
}

impl VideoTranscodingBuilder {
    pub fn track_id(mut self, track_id: impl Into<String>) -> Self {
        self.header.track_id = Some(track_id.into());
        self
    }

    pub fn track_type(mut self, track_type: FileType) -> Self {
        self.header.track_type = Some(track_type);
        self
    }

    pub fn track_name(mut self, track_name: impl Into<String>) -> Self {
        self.header.track_name = Some(track_name.into());
        self
    }

    pub fn codec(mut self, codec: impl Into<String>) -> Self {
        self.header.codec = Some(codec.into());
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn bitrate_mode(mut self, mode: BitrateMode) -> Self {
        self.bitrate.mode = Some(mode);
        self
    }

    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate.bitrate = Some(bitrate);
        self
    }

    pub fn min_bitrate(mut self, min_bitrate: u32) -> Self {
        self.bitrate.min_bitrate = Some(min_bitrate);
        self
    }

    pub fn max_bitrate(mut self, max_bitrate: u32) -> Self {
        self.bitrate.max_bitrate = Some(max_bitrate);
        self
    }

    pub fn crf(mut self, crf: u32) -> Self {
        self.bitrate.crf = Some(crf);
        self
    }

    pub fn bandwidth(mut self, bandwidth: u32) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Dimensions, then rate control, then the common header
    pub fn build(self) -> Result<VideoTranscoding, DomainError> {
        let height = require_value(
            self.height,
            "The 'height' field is required when the trackType is 'video' during Transcoding creation.",
        )?;
        let width = require_value(
            self.width,
            "The 'width' field is required when the trackType is 'video' during Transcoding creation.",
        )?;
        require_even(
            height,
            "The 'height' value must be an even number when creating Transcoding.",
        )?;
        require_even(
            width,
            "The 'width' value must be an even number when creating Transcoding.",
        )?;

        BitratePolicy::validate(&self.bitrate)?;
        let header = self.header.build()?;

        Ok(VideoTranscoding {
            header,
            height,
            width,
            bitrate_mode: self.bitrate.mode,
            bitrate: self.bitrate.bitrate,
            min_bitrate: self.bitrate.min_bitrate,
            max_bitrate: self.bitrate.max_bitrate,
            crf: self.bitrate.crf,
            bandwidth: self.bandwidth,
        })
    }
}

/// One output rendition
///
/// Serialized flat: the variant is implied by `track_type` and the
/// variant-specific fields present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Transcoding {
    Audio(AudioTranscoding),
    Video(VideoTranscoding),
}

impl Transcoding {
    pub fn header(&self) -> &TrackHeader {
        match self {
            Transcoding::Audio(audio) => audio.header(),
            Transcoding::Video(video) => video.header(),
        }
    }

    /// Only audio renditions consume audio track information
    pub fn has_audio_info(&self) -> bool {
        matches!(self, Transcoding::Audio(_))
    }
}

impl From<AudioTranscoding> for Transcoding {
    fn from(audio: AudioTranscoding) -> Self {
        Transcoding::Audio(audio)
    }
}

impl From<VideoTranscoding> for Transcoding {
    fn from(video: VideoTranscoding) -> Self {
        Transcoding::Video(video)
    }
}

/// Flat wire shape decoded before the variant is known
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TranscodingDraft {
    #[serde(flatten)]
    header: TrackHeaderDraft,
    language: Option<String>,
    sources: Option<Vec<Track>>,
    height: Option<u32>,
    width: Option<u32>,
    bitrate_mode: Option<BitrateMode>,
    bitrate: Option<u32>,
    min_bitrate: Option<u32>,
    max_bitrate: Option<u32>,
    crf: Option<u32>,
    bandwidth: Option<u32>,
}

impl TranscodingDraft {
    fn has_video_fields(&self) -> bool {
        self.height.is_some()
            || self.width.is_some()
            || self.bitrate_mode.is_some()
            || self.bitrate.is_some()
            || self.min_bitrate.is_some()
            || self.max_bitrate.is_some()
            || self.crf.is_some()
            || self.bandwidth.is_some()
    }
}

impl TryFrom<TranscodingDraft> for Transcoding {
    type Error = DomainError;

    /// The payload picks the variant; `track_type` only breaks a tie when
    /// neither audio nor video fields are present
    fn try_from(draft: TranscodingDraft) -> Result<Self, Self::Error> {
        let audio = if draft.sources.is_some() {
            true
        } else if draft.has_video_fields() {
            false
        } else {
            draft.header.track_type == Some(FileType::Audio)
        };

        if audio {
            AudioTranscodingBuilder {
                header: draft.header,
                language: draft.language,
                sources: draft.sources,
            }
            .build()
            .map(Transcoding::Audio)
        } else {
            VideoTranscodingBuilder {
                header: draft.header,
                height: draft.height,
                width: draft.width,
                bitrate: BitrateSettings {
                    mode: draft.bitrate_mode,
                    bitrate: draft.bitrate,
                    min_bitrate: draft.min_bitrate,
                    max_bitrate: draft.max_bitrate,
                    crf: draft.crf,
                },
                bandwidth: draft.bandwidth,
            }
            .build()
            .map(Transcoding::Video)
        }
    }
}

impl<'de> Deserialize<'de> for Transcoding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let draft = TranscodingDraft::deserialize(deserializer)?;
        Transcoding::try_from(draft).map_err(serde::de::Error::custom)
    }
}
