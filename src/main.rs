//! Binary entrypoint for the `litebuild` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is normal; only the environment it would populate matters.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // LITEBUILD_RECORD / LITEBUILD_REPLAY are read in commands::dispatch.
    match litebuild::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(litebuild::Error::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
