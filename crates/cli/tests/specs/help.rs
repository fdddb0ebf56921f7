//! CLI help output specs

use crate::prelude::*;

#[test]
fn dur_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn dur_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("parse")
        .stdout_has("format")
        .stdout_has("replace")
        .stdout_has("units");
}

#[test]
fn dur_without_subcommand_fails_with_usage() {
    cli().fails().code(2).stderr_has("Usage:");
}
