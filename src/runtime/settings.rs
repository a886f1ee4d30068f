use crate::cli::Args;
use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("mfm: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            eprintln!("mfm: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Command line flags win over file and environment settings.
pub fn apply_args(settings: &mut config::Settings, args: &Args) {
    if let Some(width) = args.tracknum_width {
        settings.naming.tracknum_width = width;
    }
}
