use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use asciiview::ascii::rescale_to_fit;
use asciiview::cli::Args;
use asciiview::{geometry, loader, render};

fn main() -> ExitCode {
    env_logger::init();

    // clap exits with 2 on usage errors by default; this tool uses 1.
    // Help and version output keep clap's normal handling.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            eprint!("{}", err);
            return ExitCode::from(1);
        }
        Err(err) => err.exit(),
    };

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = loader::load_grayscale(&args.input)?;
    let geometry = geometry::probe();
    debug!(
        "fitting {}x{} image into {}x{} terminal",
        source.width(),
        source.height(),
        geometry.columns,
        geometry.rows
    );

    let scaled = rescale_to_fit(&source, geometry);
    let stdout = io::stdout();
    render::render(&scaled, &mut stdout.lock())?;
    Ok(())
}
