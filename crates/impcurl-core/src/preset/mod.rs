//! Browser presets: named bundles of default headers and curl flags that
//! reproduce a specific browser's request fingerprint.
//!
//! Preset headers are emitted in their fixed order; preset flags are emitted
//! before the client's own flags. See `Client::build_args`.

mod chromium;
mod safari;

use crate::params::{Flags, Headers};
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Default headers and flags for one browser fingerprint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preset {
    pub headers: Headers,
    pub flags: Flags,
}

impl Preset {
    pub fn new(headers: Headers, flags: Flags) -> Self {
        Self { headers, flags }
    }

    /// Preset by name.
    pub fn named(name: PresetName) -> Self {
        name.build()
    }

    /// One of the known presets, picked uniformly at random.
    pub fn random() -> Self {
        random_name().build()
    }
}

/// Known browser presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetName {
    Chrome99,
    Chrome99Android,
    Chrome100,
    Chrome101,
    Chrome104,
    Chrome107,
    Chrome110,
    Chrome116,
    Edge99,
    Edge101,
    Safari153,
    Safari155,
}

impl PresetName {
    pub const ALL: [PresetName; 12] = [
        PresetName::Chrome99Android,
        PresetName::Chrome99,
        PresetName::Chrome100,
        PresetName::Chrome101,
        PresetName::Chrome104,
        PresetName::Chrome107,
        PresetName::Chrome110,
        PresetName::Chrome116,
        PresetName::Edge99,
        PresetName::Edge101,
        PresetName::Safari153,
        PresetName::Safari155,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetName::Chrome99 => "chrome99",
            PresetName::Chrome99Android => "chrome99-android",
            PresetName::Chrome100 => "chrome100",
            PresetName::Chrome101 => "chrome101",
            PresetName::Chrome104 => "chrome104",
            PresetName::Chrome107 => "chrome107",
            PresetName::Chrome110 => "chrome110",
            PresetName::Chrome116 => "chrome116",
            PresetName::Edge99 => "edge99",
            PresetName::Edge101 => "edge101",
            PresetName::Safari153 => "safari15.3",
            PresetName::Safari155 => "safari15.5",
        }
    }

    pub fn build(self) -> Preset {
        match self {
            PresetName::Chrome99 => chromium::chrome99(),
            PresetName::Chrome99Android => chromium::chrome99_android(),
            PresetName::Chrome100 => chromium::chrome100(),
            PresetName::Chrome101 => chromium::chrome101(),
            PresetName::Chrome104 => chromium::chrome104(),
            PresetName::Chrome107 => chromium::chrome107(),
            PresetName::Chrome110 => chromium::chrome110(),
            PresetName::Chrome116 => chromium::chrome116(),
            PresetName::Edge99 => chromium::edge99(),
            PresetName::Edge101 => chromium::edge101(),
            PresetName::Safari153 => safari::safari153(),
            PresetName::Safari155 => safari::safari155(),
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a preset name does not match any known preset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset '{0}'")]
pub struct UnknownPreset(pub String);

impl FromStr for PresetName {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PresetName::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// Uniformly random preset name.
pub fn random_name() -> PresetName {
    *PresetName::ALL
        .choose(&mut rand::thread_rng())
        .unwrap_or(&PresetName::Chrome116)
}
