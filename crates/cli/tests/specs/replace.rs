//! `dur replace` specs

use crate::prelude::*;

#[test]
fn replaces_standalone_shorthands_in_argument() {
    cli()
        .args(&["replace", "1w + 3m - 2s"])
        .passes()
        .stdout_eq("604800000 + 180000 - 2000\n");
}

#[test]
fn leaves_embedded_tokens_alone() {
    cli()
        .args(&["replace", "foo500msbar"])
        .passes()
        .stdout_eq("foo500msbar\n");
}

#[test]
fn reads_stdin_and_keeps_its_newlines() {
    cli()
        .args(&["replace"])
        .stdin("9m59s and 1s is 10m\nI've drunk 99bottles of rum in 1w\n")
        .passes()
        .stdout_eq("599000 and 1000 is 600000\nI've drunk 99bottles of rum in 604800000\n");
}

#[test]
fn canonical_rewrites_shorthands() {
    cli()
        .args(&["replace", "--canonical", "it took 90m, or 5400s"])
        .passes()
        .stdout_eq("it took 1h30m, or 1h30m\n");
}

#[test]
fn json_wraps_text() {
    let run = cli().args(&["replace", "-o", "json", "wait 2s"]).passes();
    assert_eq!(run.stdout_json()["text"], "wait 2000");
}
