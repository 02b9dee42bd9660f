use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = datesort::cli::parse();
    app::run(args)
}
