//! Binary entrypoint for the `conrun` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // CONRUN_* variables may come from a local .env file.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match conrun::run(std::env::args()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
