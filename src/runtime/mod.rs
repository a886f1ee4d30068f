use std::env;

use crate::cli::Args;
use crate::console;
use crate::error::Error;
use crate::library::{LoftyTagReader, collect_files};
use crate::organize::{run_file_pass, run_folder_pass};

mod checks;
pub mod logging;
mod settings;

pub fn run(args: Args) -> Result<(), Error> {
    let mut settings = settings::load_settings();
    settings::apply_args(&mut settings, &args);

    let cwd = env::current_dir()?;
    let root = checks::validate_target(&args.dir, &cwd)?;

    let files = collect_files(&root, &settings.library)?;
    if files.is_empty() {
        return Err(Error::EmptyDirectory(args.dir));
    }

    let mut console = console::stdio();
    let aggregates = run_file_pass(&files, &LoftyTagReader, &settings.naming, &mut console)?;
    run_folder_pass(&root, &aggregates, &mut console)?;

    Ok(())
}
