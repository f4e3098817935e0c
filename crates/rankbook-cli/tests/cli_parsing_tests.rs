//! CLI argument shape tests.
//!
//! The binary's `Args` is private, so these check only the command layout
//! with plain string arguments. Value parsing (regions, Riot IDs, formats)
//! is tested against the real `Args` in `src/cli.rs`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "rankbook")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Add {
        region: String,
        riot_id: String,
        username: String,
        password: String,
    },
    Resync,
    Show {
        region: String,
    },
}

#[test]
fn test_parse_no_args_fails() {
    let result = Args::try_parse_from(["rankbook"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_add_missing_password_fails() {
    let result = Args::try_parse_from(["rankbook", "add", "KR", "Faker#KR1", "faker"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_show_without_region_fails() {
    let result = Args::try_parse_from(["rankbook", "show"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["rankbook", "invalid-command"]);
    let err = result.err().unwrap();
    assert!(err.to_string().contains("invalid-command"));
}
