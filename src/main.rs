use std::io;

use moodfetch::cli::{build_cli, display_mode};
use moodfetch::commands;
use moodfetch::SysinfoSource;

fn main() {
    moodfetch::init_logging();

    let matches = build_cli().get_matches();
    let mode = display_mode(&matches);

    let mut source = SysinfoSource::new();
    let code = commands::run(
        mode,
        &mut source,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    std::process::exit(code);
}
