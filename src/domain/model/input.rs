// Input side of a job: source storage, files, audio remaps and sidecar subtitles

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::{FileType, Track};
use crate::domain::rules::{require_items, require_text, require_value};

/// Maximum number of `video` or `multi` files a single input may carry
pub const MAX_MULTI_OR_VIDEO_COUNT: usize = 1;

/// Mapping of a source audio track onto an output audio slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AudioBuilder")]
pub struct Audio {
    #[serde(rename = "in")]
    input: Track,
    remap: Track,
}

impl Audio {
    pub fn builder() -> AudioBuilder {
        AudioBuilder::default()
    }

    pub fn input(&self) -> Track {
        self.input
    }

    pub fn remap(&self) -> Track {
        self.remap
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AudioBuilder {
    #[serde(rename = "in")]
    input: Option<Track>,
    remap: Option<Track>,
}

impl AudioBuilder {
    /// Source track (`in` on the wire)
    pub fn input(mut self, track: Track) -> Self {
        self.input = Some(track);
        self
    }

    pub fn remap(mut self, track: Track) -> Self {
        self.remap = Some(track);
        self
    }

    pub fn build(self) -> Result<Audio, DomainError> {
        let input = require_value(
            self.input,
            "The 'in' field is required when creating an Audio.",
        )?;
        let remap = require_value(
            self.remap,
            "The 'remap' field is required when creating an Audio.",
        )?;
        Ok(Audio { input, remap })
    }
}

impl TryFrom<AudioBuilder> for Audio {
    type Error = DomainError;

    fn try_from(builder: AudioBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// A media file in the input storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InputFileBuilder")]
pub struct InputFile {
    file_type: FileType,
    file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    audios: Option<Vec<Audio>>,
}

impl InputFile {
    pub fn builder() -> InputFileBuilder {
        InputFileBuilder::default()
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn audios(&self) -> &[Audio] {
        self.audios.as_deref().unwrap_or(&[])
    }

    pub fn has_audio_info(&self) -> bool {
        self.file_type.has_audio_info()
    }

    pub fn is_multi_or_video(&self) -> bool {
        self.file_type.is_multi_or_video()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputFileBuilder {
    file_type: Option<FileType>,
    file_path: Option<String>,
    audios: Option<Vec<Audio>>,
}

impl InputFileBuilder {
    pub fn file_type(mut self, file_type: FileType) -> Self {
        self.file_type = Some(file_type);
        self
    }

    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn audios(mut self, audios: Vec<Audio>) -> Self {
        self.audios = Some(audios);
        self
    }

    /// Append a single audio mapping
    pub fn audio(mut self, audio: Audio) -> Self {
        self.audios.get_or_insert_with(Vec::new).push(audio);
        self
    }

    pub fn build(self) -> Result<InputFile, DomainError> {
        let file_type = require_value(
            self.file_type,
            "The 'fileType' field is required when creating an InputFile.",
        )?;
        let file_path = require_text(
            self.file_path,
            "The 'filePath' field is required when creating an InputFile.",
        )?;

        let audios = if file_type.has_audio_info() {
            Some(require_items(
                self.audios,
                "The 'audios' field is required when the fileType is 'audio' or 'multi'.",
            )?)
        } else {
            self.audios
        };

        Ok(InputFile {
            file_type,
            file_path,
            audios,
        })
    }
}

impl TryFrom<InputFileBuilder> for InputFile {
    type Error = DomainError;

    fn try_from(builder: InputFileBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Sidecar subtitle file attached to the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubtitleBuilder")]
pub struct Subtitle {
    file_path: String,
    language: String,
}

impl Subtitle {
    pub fn builder() -> SubtitleBuilder {
        SubtitleBuilder::default()
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubtitleBuilder {
    file_path: Option<String>,
    language: Option<String>,
}

impl SubtitleBuilder {
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn build(self) -> Result<Subtitle, DomainError> {
        let file_path = require_text(
            self.file_path,
            "The 'filePath' field is required when creating a Subtitle.",
        )?;
        let language = require_text(
            self.language,
            "The 'language' field is required when creating a Subtitle.",
        )?;
        Ok(Subtitle {
            file_path,
            language,
        })
    }
}

impl TryFrom<SubtitleBuilder> for Subtitle {
    type Error = DomainError;

    fn try_from(builder: SubtitleBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Everything the service reads: one storage and the files inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InputBuilder")]
pub struct Input {
    storage_id: String,
    files: Vec<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitles: Option<Vec<Subtitle>>,
}

impl Input {
    pub fn builder() -> InputBuilder {
        InputBuilder::default()
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    pub fn files(&self) -> &[InputFile] {
        &self.files
    }

    pub fn subtitles(&self) -> &[Subtitle] {
        self.subtitles.as_deref().unwrap_or(&[])
    }

    /// True when any input file carries audio track information
    pub fn has_audio_info(&self) -> bool {
        self.files.iter().any(InputFile::has_audio_info)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputBuilder {
    storage_id: Option<String>,
    files: Option<Vec<InputFile>>,
    subtitles: Option<Vec<Subtitle>>,
}

impl InputBuilder {
    pub fn storage_id(mut self, storage_id: impl Into<String>) -> Self {
        self.storage_id = Some(storage_id.into());
        self
    }

    pub fn files(mut self, files: Vec<InputFile>) -> Self {
        self.files = Some(files);
        self
    }

    /// Append a single input file
    pub fn file(mut self, file: InputFile) -> Self {
        self.files.get_or_insert_with(Vec::new).push(file);
        self
    }

    pub fn subtitles(mut self, subtitles: Vec<Subtitle>) -> Self {
        self.subtitles = Some(subtitles);
        self
    }

    pub fn subtitle(mut self, subtitle: Subtitle) -> Self {
        self.subtitles.get_or_insert_with(Vec::new).push(subtitle);
        self
    }

    pub fn build(self) -> Result<Input, DomainError> {
        let storage_id = require_text(
            self.storage_id,
            "The 'storageId' field is required when creating an Input.",
        )?;
        let files = require_items(
            self.files,
            "The 'files' field is required when creating an Input.",
        )?;

        let multi_or_video = files.iter().filter(|f| f.is_multi_or_video()).count();
        if multi_or_video > MAX_MULTI_OR_VIDEO_COUNT {
            return Err(DomainError::invalid(format!(
                "The number of files with file_type 'multi' or 'video' must not exceed {} when creating an Input.",
                MAX_MULTI_OR_VIDEO_COUNT
            )));
        }

        Ok(Input {
            storage_id,
            files,
            subtitles: self.subtitles,
        })
    }
}

impl TryFrom<InputBuilder> for Input {
    type Error = DomainError;

    fn try_from(builder: InputBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
