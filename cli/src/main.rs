mod args;

use args::Args;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // Configure logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config()?;
    let image = asciify::decode::open(&args.image)?;
    let art = asciify::process_image(&image, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(art.as_str().as_bytes())?;
    stdout.flush()?;

    // A failed save leaves the printed art intact
    match asciify::persist(&art, &config, args.save) {
        Ok(true) => eprintln!("ASCII art saved to {}", config.output_path.display()),
        Ok(false) => {}
        Err(e) if e.is_recoverable() => log::warn!("{}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
