
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, Command};

use cherry_core::{DEFAULT_TITLE_STRIP_PATTERN, State};

pub fn build_cli() -> Command {
    Command::new("git-cherry-tri-state")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show git cherry results with a third, ambiguous state")
        .long_about(
            "Layer over `git cherry` that reports an ambiguous state '~' for commits whose \
             patch is not found on <upstream-branch> but whose title matches a commit that \
             is only on <upstream-branch>. Such a commit exists upstream with the same title \
             as in <reference-branch>, but its content differs.\n\n\
             States, from lowest to highest: '-' no equivalent patch and no title match, \
             '~' title match only, '+' equivalent patch found upstream.",
        )
        .after_help(
            "git cherry on its own only compares patch content between <upstream-branch> \
             and <reference-branch>.",
        )
        .arg(
            Arg::new("upstream")
                .value_name("upstream-branch")
                .help("Upstream branch where to search for matching content and titles")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("reference")
                .value_name("reference-branch")
                .help(
                    "Reference branch whose commits are classified against upstream \
                     (default: HEAD)",
                )
                .index(2),
        )
        .arg(
            Arg::new("output-level")
                .short('o')
                .long("output-level")
                .alias("output_level")
                .value_name("LEVEL")
                .help(
                    "Minimum state to print: '-' all commits, '~' title-matched and \
                     content-matched commits, '+' content-matched commits only",
                )
                .value_parser(
                    PossibleValuesParser::new(["-", "~", "+"]).try_map(|s| s.parse::<State>()),
                )
                .allow_hyphen_values(true)
                .default_value("-"),
        )
        .arg(
            Arg::new("strip-title")
                .short('s')
                .long("strip-title")
                .alias("strip_title")
                .value_name("PATTERN")
                .help(
                    "Regular expression whose first match is removed from commit titles \
                     before matching; an empty pattern disables stripping",
                )
                .allow_hyphen_values(true)
                .default_value(DEFAULT_TITLE_STRIP_PATTERN),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
}
