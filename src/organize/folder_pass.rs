use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::Path;

use crossterm::style::Stylize;

use crate::console::{Console, quoted};
use crate::error::Error;
use crate::naming::{Quality, folder_name};

use super::aggregate::AggregateState;
use super::rename::rename_without_overwrite;

/// The values chosen for the folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderChoice {
    pub album: String,
    pub artist: String,
    pub quality: Option<Quality>,
}

impl FolderChoice {
    pub fn folder_name(&self) -> String {
        folder_name(&self.album, &self.artist, self.quality)
    }
}

fn display_value(value: &Option<String>) -> String {
    match value {
        Some(v) => quoted(v),
        None => "None".to_string(),
    }
}

fn only<T: Clone>(set: &BTreeSet<T>) -> Option<T> {
    if set.len() == 1 {
        set.iter().next().cloned()
    } else {
        None
    }
}

/// Single artist: used as-is. Several: the operator types one in. None
/// observed: empty, and the artist is left out of the name.
fn resolve_artist<R: BufRead, W: Write>(
    artists: &BTreeSet<Option<String>>,
    console: &mut Console<R, W>,
) -> Result<String, Error> {
    if artists.len() > 1 {
        let listed: Vec<String> = artists.iter().map(display_value).collect();
        console.field("multiple artists", listed.join(", "))?;
        let answer = console.ask(
            "Please choose or input the artist to use in dirname: "
                .yellow()
                .to_string(),
        )?;
        return Ok(answer);
    }

    let artist = only(artists).flatten().unwrap_or_default();
    console.field("artist", display_value(&only(artists).flatten()))?;
    Ok(artist)
}

/// Single album: used as-is. Several: the operator picks a 1-based index; a
/// bad index ends the run.
fn resolve_album<R: BufRead, W: Write>(
    albums: &BTreeSet<Option<String>>,
    console: &mut Console<R, W>,
) -> Result<String, Error> {
    let album = if albums.len() > 1 {
        console.field("multiple albums", "")?;
        let choices: Vec<&Option<String>> = albums.iter().collect();
        for (i, album) in choices.iter().enumerate() {
            console.line(format!("\t{}: {}", i + 1, display_value(album).green()))?;
        }

        let answer = console.ask(
            "Please choose one album to use in dirname: "
                .yellow()
                .to_string(),
        )?;
        let choice = answer
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=choices.len()).contains(n))
            .ok_or_else(|| Error::InvalidAlbumChoice {
                input: answer.clone(),
                count: choices.len(),
            })?;

        choices[choice - 1].clone().unwrap_or_default()
    } else {
        console.field("album", display_value(&only(albums).flatten()))?;
        only(albums).flatten().unwrap_or_default()
    };

    console.line(format!(
        "{} {} {}",
        "Use album".green(),
        quoted(&album).magenta(),
        "in dirname".green()
    ))?;
    Ok(album)
}

/// A quality is only derived when every tagged file agrees on one known
/// sample rate and one known bit depth.
fn resolve_quality<R: BufRead, W: Write>(
    state: &AggregateState,
    console: &mut Console<R, W>,
) -> Result<Option<Quality>, Error> {
    match (only(&state.sample_rates).flatten(), only(&state.bit_depths).flatten()) {
        (Some(sample_rate_hz), Some(bit_depth_bits)) => {
            console.field(
                "samplerate/bitdepth",
                format!("{sample_rate_hz}Hz/{bit_depth_bits}bit"),
            )?;
            Ok(Some(Quality {
                sample_rate_hz,
                bit_depth_bits,
            }))
        }
        _ => {
            console.warn(
                "Multiple or unknown samplerates/bitdepths in target directory, please judge them by yourself",
            )?;
            Ok(None)
        }
    }
}

/// Turn the aggregates into concrete folder name parts, prompting where the
/// aggregates are ambiguous.
pub fn resolve<R: BufRead, W: Write>(
    state: &AggregateState,
    console: &mut Console<R, W>,
) -> Result<FolderChoice, Error> {
    let artist = resolve_artist(&state.artists, console)?;
    let album = resolve_album(&state.albums, console)?;
    let quality = resolve_quality(state, console)?;

    tracing::debug!(%album, %artist, ?quality, "folder aggregates resolved");

    Ok(FolderChoice {
        album,
        artist,
        quality,
    })
}

/// Propose a name for `root`, confirm it and rename `root` inside its
/// parent directory. A failed rename is reported, not returned. Nothing is
/// renamed when no file was tagged or the chosen name is empty.
pub fn run_folder_pass<R: BufRead, W: Write>(
    root: &Path,
    state: &AggregateState,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    console.progress(format!(
        "Processing target folder {}...",
        quoted(root.display())
    ))?;

    if state.is_empty() {
        console.warn("No tagged files in target directory, folder left unchanged")?;
        return Ok(());
    }

    let proposed = resolve(state, console)?.folder_name();
    console.generated("target directory name", &proposed)?;

    let chosen = console.confirm(&proposed)?;
    if chosen.is_empty() {
        console.warn("Empty folder name, folder left unchanged")?;
        return Ok(());
    }

    let target = root.with_file_name(&chosen);
    match rename_without_overwrite(root, &target) {
        Ok(()) => {
            tracing::info!(from = %root.display(), to = %target.display(), "folder renamed");
        }
        Err(err) => {
            tracing::debug!(path = %root.display(), "folder rename failed: {err}");
            console.error(format!("Rename failed: {err}"))?;
        }
    }

    Ok(())
}
