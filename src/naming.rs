//! Pure name composition: track file names, quality labels, folder names.

use std::fmt;
use std::path::Path;

use crate::config::NamingSettings;
use crate::library::TrackMetadata;

/// Sample rates above this (in Hz) may qualify as hi-res.
const CD_SAMPLE_RATE_HZ: u32 = 44_100;
/// Bit depths above this may qualify as hi-res.
const CD_BIT_DEPTH_BITS: u8 = 16;

/// Left-pad `number` with zeros to at least `width` digits.
pub fn pad_track_number(number: u32, width: usize) -> String {
    format!("{number:0width$}")
}

/// The source extension including its dot, case preserved. Empty when the
/// path has none.
fn extension_suffix(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// `NN. Title.ext` for one track.
pub fn proposed_file_name(
    metadata: &TrackMetadata,
    source: &Path,
    settings: &NamingSettings,
) -> String {
    let number = metadata
        .track_number
        .unwrap_or(settings.missing_track_number);
    let title = metadata.title.as_deref().unwrap_or_default();

    format!(
        "{}. {}{}",
        pad_track_number(number, settings.tracknum_width),
        title,
        extension_suffix(source)
    )
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QualityLabel {
    HiRes,
    Cd,
}

impl QualityLabel {
    pub fn classify(sample_rate_hz: u32, bit_depth_bits: u8) -> Self {
        if sample_rate_hz > CD_SAMPLE_RATE_HZ && bit_depth_bits > CD_BIT_DEPTH_BITS {
            Self::HiRes
        } else {
            Self::Cd
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HiRes => f.write_str("Hi-Res"),
            Self::Cd => f.write_str("CD"),
        }
    }
}

/// A single sample rate / bit depth shared by every track of a folder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Quality {
    pub sample_rate_hz: u32,
    pub bit_depth_bits: u8,
}

impl Quality {
    pub fn label(&self) -> QualityLabel {
        QualityLabel::classify(self.sample_rate_hz, self.bit_depth_bits)
    }
}

/// Hz as kHz with at least one decimal: `44100 -> "44.1"`, `48000 -> "48.0"`,
/// `22050 -> "22.05"`.
pub fn format_khz(sample_rate_hz: u32) -> String {
    let whole = sample_rate_hz / 1000;
    let frac = sample_rate_hz % 1000;
    if frac == 0 {
        return format!("{whole}.0");
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// `[Label] Album - Artist [44.1kHz／16bit]`.
///
/// The artist segment is dropped when `artist` is empty. Without a single
/// resolved quality both the label and the bracketed suffix are dropped.
/// The separator inside the suffix is the full-width solidus U+FF0F.
pub fn folder_name(album: &str, artist: &str, quality: Option<Quality>) -> String {
    let mut name = String::new();

    if let Some(q) = quality {
        name.push_str(&format!("[{}] ", q.label()));
    }
    name.push_str(album);
    if !artist.is_empty() {
        name.push_str(" - ");
        name.push_str(artist);
    }
    if let Some(q) = quality {
        name.push_str(&format!(
            " [{}kHz／{}bit]",
            format_khz(q.sample_rate_hz),
            q.bit_depth_bits
        ));
    }

    name
}

#[cfg(test)]
mod tests;
