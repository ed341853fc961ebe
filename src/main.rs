//! Standalone orrery window.

use std::path::PathBuf;

use clap::Parser;
use orrery::{navigation::navigator_from_options, Options, Viewer};

/// Hover, click, and swipe between Earth, Mars, and the Moon.
#[derive(Parser, Debug)]
#[command(name = "orrery", version, about)]
struct Args {
    /// TOML options file; missing fields use defaults.
    #[arg(long)]
    options: Option<PathBuf>,

    /// JSON landmark recording to replay as the hand-tracking input.
    #[arg(long)]
    landmarks: Option<PathBuf>,

    /// Open clicked experiences with the system opener instead of logging
    /// them.
    #[arg(long)]
    open_externally: bool,

    /// Window title prefix.
    #[arg(long, default_value = "Orrery")]
    title: String,
}

fn load_options(args: &Args) -> Result<Options, orrery::OrreryError> {
    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if args.open_externally {
        options.navigation.open_externally = true;
    }
    Ok(options)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let navigator = navigator_from_options(&options.navigation);
    let mut builder = Viewer::builder()
        .with_title(args.title)
        .with_options(options)
        .with_navigator(navigator);
    if let Some(path) = args.landmarks {
        builder = builder.with_landmarks(path);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
