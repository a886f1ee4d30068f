use clap::Parser;
use std::path::PathBuf;

/// Music Folder Manager: rename tracks and the album folder from their tags
#[derive(Parser, Debug)]
#[command(name = "mfm", author, version, about, long_about = None)]
pub struct Args {
    /// Target music directory
    #[arg(short, long, value_name = "DIR")]
    pub dir: PathBuf,

    /// Width of the track number in generated file names
    #[arg(long, value_name = "WIDTH", value_parser = parse_width)]
    pub tracknum_width: Option<usize>,

    /// Increase diagnostics output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_width(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("width must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
