//! # gestalt CLI
//!
//! Command-line interface for the gestalt matcher.
//!
//! ## Usage
//! ```bash
//! gestalt compare MH12AB1234 MH12AB1235
//! gestalt validate --count 1000 --seed 7 --verbose
//! ```

mod cli;

use console::Term;

fn main() {
    gestalt_match::init_tracing();

    if let Err(error) = cli::run() {
        Term::stderr()
            .write_line(&cli::render_error(&error))
            .ok();
        std::process::exit(1);
    }
}
