//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = trailhead_cli::init_logging() {
        eprintln!("trailhead: logging disabled: {err}");
    }

    if let Err(err) = trailhead_cli::run() {
        eprintln!("trailhead: {err}");
        std::process::exit(1);
    }
}
