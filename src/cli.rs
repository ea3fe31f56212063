use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};

use crate::ui::DisplayMode;

pub fn build_cli() -> Command {
    Command::new("moodfetch")
        .version(crate_version!())
        .about("MoodFetch: System Performance Mood Tracker")
        .after_help("Track your system's operational state with ease.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Display detailed system metrics")
                .action(ArgAction::SetTrue)
                .conflicts_with("minimal"),
        )
        .arg(
            Arg::new("minimal")
                .short('m')
                .long("minimal")
                .help("Show only mood and emoji")
                .action(ArgAction::SetTrue),
        )
}

pub fn display_mode(matches: &ArgMatches) -> DisplayMode {
    if matches.get_flag("verbose") {
        DisplayMode::Verbose
    } else if matches.get_flag("minimal") {
        DisplayMode::Minimal
    } else {
        DisplayMode::Default
    }
}
