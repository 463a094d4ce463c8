//! duedate main entrypoint.

use duedate::run;
use duedate::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
