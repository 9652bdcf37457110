//! Tests for preset, presets, config-path and completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use std::path::Path;

#[test]
fn cli_parse_preset() {
    match parse(&["rellist", "preset", "stats2", "data-2.html"]) {
        CliCommand::Preset {
            name,
            input,
            rewrite,
        } => {
            assert_eq!(name, "stats2");
            assert_eq!(input, Path::new("data-2.html"));
            assert!(rewrite.is_none());
        }
        _ => panic!("expected Preset"),
    }
}

#[test]
fn cli_parse_preset_rewrite() {
    match parse(&["rellist", "preset", "ribs", "-", "--rewrite", "left.html"]) {
        CliCommand::Preset { input, rewrite, .. } => {
            assert_eq!(input, Path::new("-"));
            assert_eq!(rewrite.as_deref(), Some(Path::new("left.html")));
        }
        _ => panic!("expected Preset with --rewrite"),
    }
}

#[test]
fn cli_parse_presets() {
    match parse(&["rellist", "presets"]) {
        CliCommand::Presets => {}
        _ => panic!("expected Presets"),
    }
}

#[test]
fn cli_parse_config_path() {
    match parse(&["rellist", "config-path"]) {
        CliCommand::ConfigPath => {}
        _ => panic!("expected ConfigPath"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["rellist", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_missing_subcommand() {
    assert!(Cli::try_parse_from(["rellist"]).is_err());
}
