// Domain rules - Validation policies shared by the builders

use crate::domain::errors::DomainError;
use crate::domain::model::{BitrateMode, Input, Output};

/// True when the value is absent or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Require a non-blank string
pub fn require_text(value: Option<String>, detail: &str) -> Result<String, DomainError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DomainError::missing(detail)),
    }
}

/// Require a present value
pub fn require_value<T>(value: Option<T>, detail: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::missing(detail))
}

/// Require a present, non-empty list
pub fn require_items<T>(value: Option<Vec<T>>, detail: &str) -> Result<Vec<T>, DomainError> {
    match value {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(DomainError::missing(detail)),
    }
}

/// Reject odd dimensions
pub fn require_even(value: u32, detail: &str) -> Result<(), DomainError> {
    if value % 2 != 0 {
        return Err(DomainError::invalid(detail));
    }
    Ok(())
}

/// Rate-control fields of a video rendition, as staged by its builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitrateSettings {
    pub mode: Option<BitrateMode>,
    pub bitrate: Option<u32>,
    pub min_bitrate: Option<u32>,
    pub max_bitrate: Option<u32>,
    pub crf: Option<u32>,
}

/// Accepted VBR field combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VbrShape {
    /// Target bitrate only
    Bitrate,
    /// Both bounds, nothing else
    Range,
    /// Constant rate factor only
    Crf,
}

impl BitrateSettings {
    /// Matching VBR shape, if the fields form exactly one
    pub fn vbr_shape(&self) -> Option<VbrShape> {
        match (self.bitrate, self.min_bitrate, self.max_bitrate, self.crf) {
            (Some(_), None, None, None) => Some(VbrShape::Bitrate),
            (None, Some(_), Some(_), None) => Some(VbrShape::Range),
            (None, None, None, Some(_)) => Some(VbrShape::Crf),
            _ => None,
        }
    }
}

/// Business rules for video rate control
pub struct BitratePolicy;

impl BitratePolicy {
    /// CBR (or no mode) needs a bitrate; VBR needs exactly one shape
    pub fn validate(settings: &BitrateSettings) -> Result<(), DomainError> {
        match settings.mode.unwrap_or(BitrateMode::Cbr) {
            BitrateMode::Cbr => {
                if settings.bitrate.is_none() {
                    return Err(DomainError::missing(
                        "The 'bitrate' field is required when 'bitrate_mode' is CBR during Transcoding creation.",
                    ));
                }
                Ok(())
            }
            BitrateMode::Vbr => Self::validate_vbr(settings),
        }
    }

    // Elimination order decides which message wins when several conditions hold.
    fn validate_vbr(settings: &BitrateSettings) -> Result<(), DomainError> {
        if settings.vbr_shape().is_some() {
            return Ok(());
        }

        if settings.min_bitrate.is_some() != settings.max_bitrate.is_some() {
            return Err(DomainError::invalid(
                "When 'bitrate_mode' is VBR, both 'min_bitrate' and 'max_bitrate' must be set together.",
            ));
        }

        if settings.bitrate.is_none() && settings.min_bitrate.is_none() {
            return Err(DomainError::missing(
                "When 'bitrate_mode' is VBR, one of the following must be provided: 'bitrate', 'min_bitrate and max_bitrate', or 'crf'.",
            ));
        }

        Err(DomainError::invalid(
            "When 'bitrate_mode' is VBR, only one of the following should be provided: 'bitrate', 'min_bitrate and max_bitrate', or 'crf'.",
        ))
    }
}

/// Business rules tying the input files to the output renditions
pub struct AudioConsistency;

impl AudioConsistency {
    /// Audio must be present on both sides or on neither
    pub fn validate(input: &Input, output: &Output) -> Result<(), DomainError> {
        if input.has_audio_info() != output.has_audio_info() {
            return Err(DomainError::missing(
                "The audio information in 'input' and 'output' must be consistent when creating a Job.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
