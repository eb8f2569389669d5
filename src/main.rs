use std::io::{BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use ansi_preview::cli::{self, Args, Reporter, EXIT_FAILURE, EXIT_SUCCESS};
use ansi_preview::terminal;
use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version go to stdout and count as success
            let code = if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    log::debug!("Arguments: {:?}", args);

    let geometry = terminal::terminal_size();

    let stderr = std::io::stderr();
    let color = stderr.is_terminal();
    let mut reporter = Reporter::new(stderr.lock(), color);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let code = cli::run(&args, geometry, &mut out, &mut reporter);
    let _ = out.flush();
    ExitCode::from(code)
}
