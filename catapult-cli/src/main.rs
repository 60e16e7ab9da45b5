// catapult-cli/src/main.rs
//
// Entry point of the `catapult` binary.

use catapult_cli::{CATAPULT, launch};

fn main() {
    std::process::exit(launch(&CATAPULT));
}
