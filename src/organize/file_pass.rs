use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crossterm::style::Stylize;

use crate::config::NamingSettings;
use crate::console::{Console, quoted};
use crate::error::Error;
use crate::library::{TagReader, TrackMetadata};
use crate::naming::proposed_file_name;

use super::aggregate::AggregateState;
use super::rename::rename_without_overwrite;

/// A proposed rename for one file, resolved before moving to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub original: PathBuf,
    pub proposed: String,
}

impl RenamePlan {
    /// Rename the file to `name` inside its own directory. An existing
    /// entry with that name is never replaced.
    pub fn execute(&self, name: &str) -> io::Result<PathBuf> {
        let target = self.original.with_file_name(name);
        rename_without_overwrite(&self.original, &target)?;
        Ok(target)
    }
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "None".to_string())
}

fn print_metadata<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    metadata: &TrackMetadata,
) -> io::Result<()> {
    console.field("title", or_unknown(metadata.title.as_deref()))?;
    console.field("artist", or_unknown(metadata.artist.as_deref()))?;
    console.field("album", or_unknown(metadata.album.as_deref()))?;
    console.field("tracknum", or_unknown(metadata.track_number))?;
    console.field(
        "samplerate/bitdepth",
        format!(
            "{}Hz/{}bit",
            or_unknown(metadata.sample_rate_hz),
            or_unknown(metadata.bit_depth_bits)
        ),
    )
}

/// Rename every supported file and collect the folder aggregates.
///
/// Unsupported or unreadable files are skipped with a warning. A failed
/// rename is reported and the file's metadata is still aggregated. Only
/// console I/O failures end the pass early.
pub fn run_file_pass<T, R, W>(
    files: &[PathBuf],
    reader: &T,
    naming: &NamingSettings,
    console: &mut Console<R, W>,
) -> Result<AggregateState, Error>
where
    T: TagReader,
    R: BufRead,
    W: Write,
{
    let mut state = AggregateState::default();

    for file in files {
        if let Some(metadata) = read_supported(file, reader, console)? {
            rename_one(file, &metadata, naming, console)?;
            state.observe(&metadata);
        }
    }

    Ok(state)
}

fn read_supported<T, R, W>(
    file: &Path,
    reader: &T,
    console: &mut Console<R, W>,
) -> Result<Option<TrackMetadata>, Error>
where
    T: TagReader,
    R: BufRead,
    W: Write,
{
    if !reader.is_supported(file) {
        console.warn(format!(
            "File {} cannot be recognized by the tag reader",
            quoted(file.display()).magenta()
        ))?;
        return Ok(None);
    }

    console.progress(format!("Processing file {}...", quoted(file.display())))?;

    match reader.read_tags(file) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(err) => {
            tracing::debug!(path = %file.display(), "tag read failed: {err}");
            console.warn(format!(
                "File {} could not be read: {err}",
                quoted(file.display()).magenta()
            ))?;
            Ok(None)
        }
    }
}

fn rename_one<R: BufRead, W: Write>(
    file: &Path,
    metadata: &TrackMetadata,
    naming: &NamingSettings,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    print_metadata(console, metadata)?;

    let plan = RenamePlan {
        original: file.to_path_buf(),
        proposed: proposed_file_name(metadata, file, naming),
    };
    console.generated("filename", &plan.proposed)?;

    let chosen = console.confirm(&plan.proposed)?;
    match plan.execute(&chosen) {
        Ok(target) => {
            tracing::info!(from = %file.display(), to = %target.display(), "file renamed");
        }
        Err(err) => {
            tracing::debug!(path = %file.display(), "rename failed: {err}");
            console.error(format!("Rename failed: {err}"))?;
        }
    }

    Ok(())
}
