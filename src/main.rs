use std::io;
use std::path::PathBuf;

use ascii_art::cli::{handle_config_action, Args, Command};
use ascii_art::config::Config;
use ascii_art::error::AsciiError;
use ascii_art::pipeline::{self, Pipeline, RenderSettings};
use ascii_art::prompt;
use clap::Parser;

fn main() {
    let mut args = Args::parse();
    init_logging(args.verbose);

    if let Some(Command::Config { action }) = args.command.take() {
        handle_config_action(action, args.config.as_deref());
        return;
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout only carries the art.
/// Default level is warn; `-v` raises it to debug. RUST_LOG still wins.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;

    let mut settings = RenderSettings::from_config(&config);
    if let Some(filter) = args.filter {
        settings.filter = filter.into();
    }

    let (image_path, width) = resolve_input(&args, settings.width)?;
    let settings = settings.with_width(width);

    let mut pipeline = Pipeline::new(settings);
    let art = pipeline.run(&image_path)?;

    let stdout = io::stdout();
    pipeline::print_art(&mut stdout.lock(), &art)?;

    let save = config.output.save && !args.no_save;
    if save {
        let output = args.output.clone().unwrap_or(config.output.file);
        art.save(&output)?;
        println!();
        println!("ASCII art has been saved to '{}'.", output.display());
    }

    Ok(())
}

/// Take the image path and width from the command line, prompting for
/// whatever is missing.
///
/// The width is only prompted for when the path was prompted for too;
/// otherwise `default_width` applies.
fn resolve_input(args: &Args, default_width: u32) -> ascii_art::Result<(PathBuf, u32)> {
    if let Some(path) = &args.image {
        return Ok((path.clone(), args.width.unwrap_or(default_width)));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let path = prompt::ask_path(&mut input, &mut output)?;
    // Fail before asking anything else
    if !path.exists() {
        return Err(AsciiError::PathNotFound(path));
    }

    let width = match args.width {
        Some(width) => width,
        None => prompt::ask_width(&mut input, &mut output, default_width)?,
    };

    Ok((path, width))
}
