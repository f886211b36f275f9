//! Media and layout status columns

use crate::audit::PageAnalysis;
use std::fmt;

/// Tri-state column value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaStatus {
    Yes,
    No,
    NotApplicable,
}

impl MediaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaStatus::Yes => "Yes",
            MediaStatus::No => "No",
            MediaStatus::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four status columns of one report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaFlags {
    pub video: MediaStatus,
    pub audio: MediaStatus,
    pub images: MediaStatus,
    /// Only ever `Yes` or `No`
    pub mobile: MediaStatus,
}

impl MediaFlags {
    /// Presence of an embed counts as working; embeds are not probed
    pub fn from_analysis(analysis: &PageAnalysis, missing_images: &[String]) -> Self {
        let present = |yes: bool| {
            if yes {
                MediaStatus::Yes
            } else {
                MediaStatus::NotApplicable
            }
        };

        let images = if !analysis.has_images() {
            MediaStatus::NotApplicable
        } else if missing_images.is_empty() {
            MediaStatus::Yes
        } else {
            MediaStatus::No
        };

        let mobile = if analysis.is_mobile_responsive() {
            MediaStatus::Yes
        } else {
            MediaStatus::No
        };

        Self {
            video: present(analysis.has_video()),
            audio: present(analysis.has_audio()),
            images,
            mobile,
        }
    }
}
