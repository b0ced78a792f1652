//! Standalone single inheritance demo: no arguments, fixed stdout.

use lineage::{Demo, exit_codes, logging};

fn main() {
    logging::init(logging::DEFAULT_FILTER);
    if let Err(err) = Demo::Single.run_stdout() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}
