// catapult-cli/src/bin/envy.rs
//
// Entry point of the `envy` binary: the same tool with labelled console
// output and INFO as the file level for a bare `--log_level`.

use catapult_cli::{ENVY, launch};

fn main() {
    std::process::exit(launch(&ENVY));
}
