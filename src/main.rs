//! rDietLogger main entrypoint.

use rdietlogger::run;
use rdietlogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
