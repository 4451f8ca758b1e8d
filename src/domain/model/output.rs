// Output side of a job: destination, renditions, packaging and protection

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::{Drm, Packaging, Transcoding};
use crate::domain::rules::{require_items, require_text, require_value};

/// Forensic watermark embedding switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForensicWatermarking {
    enabled: bool,
}

impl ForensicWatermarking {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Everything the service writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OutputBuilder")]
pub struct Output {
    storage_id: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_language: Option<String>,
    transcodings: Vec<Transcoding>,
    packaging: Packaging,
    #[serde(skip_serializing_if = "Option::is_none")]
    drm: Option<Drm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forensic_watermarking: Option<ForensicWatermarking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_noti_id: Option<i64>,
}

impl Output {
    pub fn builder() -> OutputBuilder {
        OutputBuilder::default()
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    pub fn transcodings(&self) -> &[Transcoding] {
        &self.transcodings
    }

    pub fn packaging(&self) -> &Packaging {
        &self.packaging
    }

    pub fn drm(&self) -> Option<&Drm> {
        self.drm.as_ref()
    }

    pub fn forensic_watermarking(&self) -> Option<ForensicWatermarking> {
        self.forensic_watermarking
    }

    /// Notification channel id registered with the service
    pub fn job_noti_id(&self) -> Option<i64> {
        self.job_noti_id
    }

    /// True when any rendition is an audio transcoding
    pub fn has_audio_info(&self) -> bool {
        self.transcodings.iter().any(Transcoding::has_audio_info)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputBuilder {
    storage_id: Option<String>,
    path: Option<String>,
    default_language: Option<String>,
    transcodings: Option<Vec<Transcoding>>,
    packaging: Option<Packaging>,
    drm: Option<Drm>,
    forensic_watermarking: Option<ForensicWatermarking>,
    job_noti_id: Option<i64>,
}

impl OutputBuilder {
    pub fn storage_id(mut self, storage_id: impl Into<String>) -> Self {
        self.storage_id = Some(storage_id.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    pub fn transcodings(mut self, transcodings: Vec<Transcoding>) -> Self {
        self.transcodings = Some(transcodings);
        self
    }

    /// Append a single rendition
    pub fn transcoding(mut self, transcoding: impl Into<Transcoding>) -> Self {
        self.transcodings
            .get_or_insert_with(Vec::new)
            .push(transcoding.into());
        self
    }

    pub fn packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = Some(packaging);
        self
    }

    pub fn drm(mut self, drm: Drm) -> Self {
        self.drm = Some(drm);
        self
    }

    pub fn forensic_watermarking(mut self, watermarking: ForensicWatermarking) -> Self {
        self.forensic_watermarking = Some(watermarking);
        self
    }

    pub fn job_noti_id(mut self, id: i64) -> Self {
        self.job_noti_id = Some(id);
        self
    }

    pub fn build(self) -> Result<Output, DomainError> {
        let storage_id = require_text(
            self.storage_id,
            "The 'storageId' field is required when creating Output.",
        )?;
        let path = require_text(
            self.path,
            "The 'path' field is required when creating Output.",
        )?;
        let transcodings = require_items(
            self.transcodings,
            "The 'transcodings' field is required when creating Output.",
        )?;
        let packaging = require_value(
            self.packaging,
            "The 'packaging' field is required when creating Output.",
        )?;

        Ok(Output {
            storage_id,
            path,
            default_language: self.default_language,
            transcodings,
            packaging,
            drm: self.drm,
            forensic_watermarking: self.forensic_watermarking,
            job_noti_id: self.job_noti_id,
        })
    }
}

impl TryFrom<OutputBuilder> for Output {
    type Error = DomainError;

    fn try_from(builder: OutputBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
