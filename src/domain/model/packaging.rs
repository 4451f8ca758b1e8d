// Packaging formats and their options

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::rules::is_blank;

/// Smallest accepted `min_buffer_time`, in seconds
pub const MIN_BUFFER_TIME: u32 = 2;

/// Subtitle codec to emit per packaging format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubtitleFormatBuilder")]
pub struct SubtitleFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    dash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hls: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cmaf: Option<String>,
}

impl SubtitleFormat {
    pub fn builder() -> SubtitleFormatBuilder {
        SubtitleFormatBuilder::default()
    }

    pub fn dash(&self) -> Option<&str> {
        self.dash.as_deref()
    }

    pub fn hls(&self) -> Option<&str> {
        self.hls.as_deref()
    }

    pub fn cmaf(&self) -> Option<&str> {
        self.cmaf.as_deref()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubtitleFormatBuilder {
    dash: Option<String>,
    hls: Option<String>,
    cmaf: Option<String>,
}

impl SubtitleFormatBuilder {
    pub fn dash(mut self, format: impl Into<String>) -> Self {
        self.dash = Some(format.into());
        self
    }

    pub fn hls(mut self, format: impl Into<String>) -> Self {
        self.hls = Some(format.into());
        self
    }

    pub fn cmaf(mut self, format: impl Into<String>) -> Self {
        self.cmaf = Some(format.into());
        self
    }

    pub fn build(self) -> Result<SubtitleFormat, DomainError> {
        if is_blank(self.dash.as_deref())
            && is_blank(self.hls.as_deref())
            && is_blank(self.cmaf.as_deref())
        {
            return Err(DomainError::missing(
                "At least one of 'dash', 'hls', or 'cmaf' must be provided when creating a SubtitleFormat.",
            ));
        }
        Ok(SubtitleFormat {
            dash: self.dash,
            hls: self.hls,
            cmaf: self.cmaf,
        })
    }
}

impl TryFrom<SubtitleFormatBuilder> for SubtitleFormat {
    type Error = DomainError;

    fn try_from(builder: SubtitleFormatBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Tuning knobs shared by all packaging formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PackagingOptionBuilder")]
pub struct PackagingOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    min_buffer_time: Option<u32>,
    enable_average_bandwidth_mpd: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle_format: Option<SubtitleFormat>,
}

impl PackagingOption {
    pub fn builder() -> PackagingOptionBuilder {
        PackagingOptionBuilder::default()
    }

    pub fn min_buffer_time(&self) -> Option<u32> {
        self.min_buffer_time
    }

    pub fn enable_average_bandwidth_mpd(&self) -> bool {
        self.enable_average_bandwidth_mpd
    }

    pub fn subtitle_format(&self) -> Option<&SubtitleFormat> {
        self.subtitle_format.as_ref()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PackagingOptionBuilder {
    min_buffer_time: Option<u32>,
    enable_average_bandwidth_mpd: bool,
    subtitle_format: Option<SubtitleFormat>,
}

impl PackagingOptionBuilder {
    pub fn min_buffer_time(mut self, seconds: u32) -> Self {
        self.min_buffer_time = Some(seconds);
        self
    }

    pub fn enable_average_bandwidth_mpd(mut self, enabled: bool) -> Self {
        self.enable_average_bandwidth_mpd = enabled;
        self
    }

    pub fn subtitle_format(mut self, format: SubtitleFormat) -> Self {
        self.subtitle_format = Some(format);
        self
    }

    pub fn build(self) -> Result<PackagingOption, DomainError> {
        if let Some(min_buffer_time) = self.min_buffer_time {
            if min_buffer_time < MIN_BUFFER_TIME {
                return Err(DomainError::out_of_range(format!(
                    "The 'minBufferTime' must be at least {} when creating a PackagingOption.",
                    MIN_BUFFER_TIME
                )));
            }
        }
        Ok(PackagingOption {
            min_buffer_time: self.min_buffer_time,
            enable_average_bandwidth_mpd: self.enable_average_bandwidth_mpd,
            subtitle_format: self.subtitle_format,
        })
    }
}

impl TryFrom<PackagingOptionBuilder> for PackagingOption {
    type Error = DomainError;

    fn try_from(builder: PackagingOptionBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Which streaming formats to package the renditions into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PackagingBuilder")]
pub struct Packaging {
    #[serde(skip_serializing_if = "Option::is_none")]
    dash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cmaf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    option: Option<PackagingOption>,
}

impl Packaging {
    pub fn builder() -> PackagingBuilder {
        PackagingBuilder::default()
    }

    pub fn dash(&self) -> bool {
        self.dash.unwrap_or(false)
    }

    pub fn hls(&self) -> bool {
        self.hls.unwrap_or(false)
    }

    pub fn cmaf(&self) -> bool {
        self.cmaf.unwrap_or(false)
    }

    pub fn option(&self) -> Option<&PackagingOption> {
        self.option.as_ref()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PackagingBuilder {
    dash: Option<bool>,
    hls: Option<bool>,
    cmaf: Option<bool>,
    option: Option<PackagingOption>,
}

impl PackagingBuilder {
    pub fn dash(mut self, enabled: bool) -> Self {
        self.dash = Some(enabled);
        self
    }

    pub fn hls(mut self, enabled: bool) -> Self {
        self.hls = Some(enabled);
        self
    }

    pub fn cmaf(mut self, enabled: bool) -> Self {
        self.cmaf = Some(enabled);
        self
    }

    pub fn option(mut self, option: PackagingOption) -> Self {
        self.option = Some(option);
        self
    }

    pub fn build(self) -> Result<Packaging, DomainError> {
        let dash = self.dash.unwrap_or(false);
        let hls = self.hls.unwrap_or(false);
        let cmaf = self.cmaf.unwrap_or(false);

        if !dash && !hls && !cmaf {
            return Err(DomainError::missing(
                "At least one of 'dash', 'hls', or 'cmaf' must be true when creating Packaging.",
            ));
        }
        if cmaf && (dash || hls) {
            return Err(DomainError::invalid(
                "If 'cmaf' is true, both 'dash' and 'hls' must be false or null when creating Packaging.",
            ));
        }

        Ok(Packaging {
            dash: self.dash,
            hls: self.hls,
            cmaf: self.cmaf,
            option: self.option,
        })
    }
}

impl TryFrom<PackagingBuilder> for Packaging {
    type Error = DomainError;

    fn try_from(builder: PackagingBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
