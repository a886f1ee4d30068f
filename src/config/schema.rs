use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mfm/config.toml` or `~/.config/mfm/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `MFM__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub naming: NamingSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Minimum width of the track number in generated file names.
    /// Shorter numbers are left-padded with `0`.
    pub tracknum_width: usize,
    /// Number used for files whose tags carry no track number.
    pub missing_track_number: u32,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            tracknum_width: 2,
            missing_track_number: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks while walking the target directory.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: true,
        }
    }
}
