// DRM settings

use serde::{Deserialize, Serialize};

pub const DEFAULT_MULTI_KEY: bool = false;
pub const DEFAULT_MAX_SD_HEIGHT: u32 = 480;
pub const DEFAULT_MAX_HD_HEIGHT: u32 = 1080;
pub const DEFAULT_MAX_UHD1_HEIGHT: u32 = 2160;
pub const DEFAULT_SKIP_AUDIO_ENCRYPTION: bool = false;
pub const DEFAULT_CLEAR_LEAD: u32 = 0;
pub const DEFAULT_GENERATE_TRACK_TYPE_MANIFESTS: bool = false;

/// Key and manifest layout for encrypted output
///
/// Every field has a documented default, so building never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DrmOptionBuilder")]
pub struct DrmOption {
    multi_key: bool,
    max_sd_height: u32,
    max_hd_height: u32,
    max_uhd1_height: u32,
    skip_audio_encryption: bool,
    clear_lead: u32,
    #[serde(rename = "generate_tracktype_manifests")]
    generate_track_type_manifests: bool,
}

impl DrmOption {
    pub fn builder() -> DrmOptionBuilder {
        DrmOptionBuilder::default()
    }

    pub fn multi_key(&self) -> bool {
        self.multi_key
    }

    pub fn max_sd_height(&self) -> u32 {
        self.max_sd_height
    }

    pub fn max_hd_height(&self) -> u32 {
        self.max_hd_height
    }

    pub fn max_uhd1_height(&self) -> u32 {
        self.max_uhd1_height
    }

    pub fn skip_audio_encryption(&self) -> bool {
        self.skip_audio_encryption
    }

    pub fn clear_lead(&self) -> u32 {
        self.clear_lead
    }

    pub fn generate_track_type_manifests(&self) -> bool {
        self.generate_track_type_manifests
    }
}

impl Default for DrmOption {
    fn default() -> Self {
        DrmOptionBuilder::default().build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DrmOptionBuilder {
    multi_key: bool,
    max_sd_height: u32,
    max_hd_height: u32,
    max_uhd1_height: u32,
    skip_audio_encryption: bool,
    clear_lead: u32,
    #[serde(rename = "generate_tracktype_manifests")]
    generate_track_type_manifests: bool,
}

impl Default for DrmOptionBuilder {
    fn default() -> Self {
        Self {
            multi_key: DEFAULT_MULTI_KEY,
            max_sd_height: DEFAULT_MAX_SD_HEIGHT,
            max_hd_height: DEFAULT_MAX_HD_HEIGHT,
            max_uhd1_height: DEFAULT_MAX_UHD1_HEIGHT,
            skip_audio_encryption: DEFAULT_SKIP_AUDIO_ENCRYPTION,
            clear_lead: DEFAULT_CLEAR_LEAD,
            generate_track_type_manifests: DEFAULT_GENERATE_TRACK_TYPE_MANIFESTS,
        }
    }
}

impl DrmOptionBuilder {
    pub fn multi_key(mut self, enabled: bool) -> Self {
        self.multi_key = enabled;
        self
    }

    pub fn max_sd_height(mut self, height: u32) -> Self {
        self.max_sd_height = height;
        self
    }

    pub fn max_hd_height(mut self, height: u32) -> Self {
        self.max_hd_height = height;
        self
    }

    pub fn max_uhd1_height(mut self, height: u32) -> Self {
        self.max_uhd1_height = height;
        self
    }

    pub fn skip_audio_encryption(mut self, skip: bool) -> Self {
        self.skip_audio_encryption = skip;
        self
    }

    pub fn clear_lead(mut self, seconds: u32) -> Self {
        self.clear_lead = seconds;
        self
    }

    pub fn generate_track_type_manifests(mut self, enabled: bool) -> Self {
        self.generate_track_type_manifests = enabled;
        self
    }

    pub fn build(self) -> DrmOption {
        DrmOption {
            multi_key: self.multi_key,
            max_sd_height: self.max_sd_height,
            max_hd_height: self.max_hd_height,
            max_uhd1_height: self.max_uhd1_height,
            skip_audio_encryption: self.skip_audio_encryption,
            clear_lead: self.clear_lead,
            generate_track_type_manifests: self.generate_track_type_manifests,
        }
    }
}

impl From<DrmOptionBuilder> for DrmOption {
    fn from(builder: DrmOptionBuilder) -> Self {
        builder.build()
    }
}

/// DRM switch plus optional key layout
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "DrmBuilder")]
pub struct Drm {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option: Option<DrmOption>,
}

impl Drm {
    pub fn builder() -> DrmBuilder {
        DrmBuilder::default()
    }

    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    pub fn option(&self) -> Option<&DrmOption> {
        self.option.as_ref()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DrmBuilder {
    enabled: Option<bool>,
    option: Option<DrmOption>,
}

impl DrmBuilder {
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn option(mut self, option: DrmOption) -> Self {
        self.option = Some(option);
        self
    }

    pub fn build(self) -> Drm {
        Drm {
            enabled: self.enabled,
            option: self.option,
        }
    }
}

impl From<DrmBuilder> for Drm {
    fn from(builder: DrmBuilder) -> Self {
        builder.build()
    }
}
