use lineage::{Demo, exit_codes, logging};

fn main() {
    logging::init(logging::DEFAULT_FILTER);
    if let Err(err) = Demo::Multiple.run_stdout() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}
