use std::process::ExitCode;

use bound::app::BoundApp;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::init();
    let args = match BoundApp::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported on stdout and are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    log::debug!("cwd: {:?}", std::env::current_dir());
    match args.run() {
        Ok(summary) => {
            log::info!("finished: {summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("bound: fatal error: {e}");
            ExitCode::FAILURE
        }
    }
}
