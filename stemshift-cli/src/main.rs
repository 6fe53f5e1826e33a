use clap::Parser;
use stemshift_core::ShiftError;
use std::process;
use std::thread;

mod cli;
mod logging;
mod shift;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match shift::handle_shift(cli.config.as_deref()) {
        Ok(delay) => {
            thread::sleep(delay);
            process::exit(0);
        },
        Err(e) => {
            eprintln!("Error: {e:#}");

            // Anything that is not one of ours is an internal error
            let exit_code = e
                .downcast_ref::<ShiftError>()
                .map_or(3, ShiftError::exit_code);

            process::exit(exit_code);
        },
    }
}
