//! CLI argument definitions for rankbook.

use clap::{Parser, Subcommand};
use rankbook::{Region, RegionFilter, RiotId};

#[derive(Parser)]
#[command(name = "rankbook")]
#[command(about = "League of Legends account ledger", version)]
pub struct Args {
    /// Ledger file (defaults to .accounts.json)
    #[arg(long, env = "RANKBOOK_DB", value_name = "FILE", global = true)]
    pub db: Option<String>,

    /// Riot API key
    #[arg(long, env = "RIOT_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Routing cluster for Riot ID lookups (americas, asia, europe, sea)
    #[arg(long, env = "RANKBOOK_ACCOUNT_ROUTE", global = true)]
    pub account_route: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Extra attempts for timeouts, HTTP 429 and 5xx responses
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    /// Send every request to this base URL instead of the platform hosts
    #[arg(long, value_name = "URL", hide = true, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch an account and add it to the ledger
    Add {
        /// Platform region (e.g. EUW1, KR, NA1)
        #[arg(value_parser = parse_region)]
        region: Region,
        /// Riot ID as name#tag
        #[arg(value_parser = parse_riot_id)]
        riot_id: RiotId,
        /// Login username (stored masked)
        username: String,
        /// Login password (stored masked)
        password: String,
    },
    /// Refresh level and ranks of every account
    Resync,
    /// Print the ledger sorted by solo rank
    Show {
        /// Platform region, or "all"
        #[arg(value_parser = parse_region_filter)]
        region: RegionFilter,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<String>,
        /// Reveal usernames and passwords
        #[arg(long = "unsafe")]
        reveal: bool,
        /// Output format
        #[arg(long, short, value_enum, default_value = "table")]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Table,
    Tsv,
    Json,
}

impl From<ExportFormat> for rankbook::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Table => rankbook::ExportFormat::Table,
            ExportFormat::Tsv => rankbook::ExportFormat::Tsv,
            ExportFormat::Json => rankbook::ExportFormat::Json,
        }
    }
}

fn parse_region(value: &str) -> Result<Region, String> {
    Region::parse(value).map_err(|e| e.to_string())
}

fn parse_riot_id(value: &str) -> Result<RiotId, String> {
    RiotId::parse(value).map_err(|e| e.to_string())
}

fn parse_region_filter(value: &str) -> Result<RegionFilter, String> {
    RegionFilter::parse(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_parses_region_case_insensitively() {
        let args =
            Args::try_parse_from(["rankbook", "add", "euw1", "Faker#KR1", "user", "pass"]).unwrap();
        match args.command {
            Command::Add { region, riot_id, .. } => {
                assert_eq!(region, Region::Euw1);
                assert_eq!(riot_id.name, "Faker");
                assert_eq!(riot_id.tag, "KR1");
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_add_rejects_unknown_region() {
        let result = Args::try_parse_from(["rankbook", "add", "XX9", "a#b", "u", "p"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_rejects_malformed_riot_id() {
        for riot_id in ["Faker", "#KR1", "Faker#", "a#b#c"] {
            let result = Args::try_parse_from(["rankbook", "add", "KR", riot_id, "u", "p"]);
            let err = result.err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_show_accepts_pbe_filter() {
        let args = Args::try_parse_from(["rankbook", "show", "pbe1"]).unwrap();
        match args.command {
            Command::Show { region, .. } => {
                assert_eq!(region, RegionFilter::Only(Region::Pbe1));
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_show_all_with_unsafe() {
        let args = Args::try_parse_from(["rankbook", "show", "all", "--unsafe"]).unwrap();
        match args.command {
            Command::Show {
                region,
                reveal,
                output,
                format,
            } => {
                assert_eq!(region, RegionFilter::All);
                assert!(reveal);
                assert!(output.is_none());
                assert_eq!(format, ExportFormat::Table);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_show_tsv_to_file() {
        let args = Args::try_parse_from(["rankbook", "show", "NA1", "-o", "out.tsv", "-f", "tsv"])
            .unwrap();
        match args.command {
            Command::Show {
                region,
                output,
                reveal,
                format,
            } => {
                assert_eq!(region, RegionFilter::Only(Region::Na1));
                assert_eq!(output.as_deref(), Some("out.tsv"));
                assert!(!reveal);
                assert_eq!(format, ExportFormat::Tsv);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "rankbook",
            "resync",
            "--db",
            "ledger.json",
            "--api-key",
            "RGAPI-x",
            "--retries",
            "2",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Resync));
        assert_eq!(args.db.as_deref(), Some("ledger.json"));
        assert_eq!(args.api_key.as_deref(), Some("RGAPI-x"));
        assert_eq!(args.retries, Some(2));
    }

    #[test]
    fn test_format_maps_to_library() {
        assert_eq!(
            rankbook::ExportFormat::from(ExportFormat::Tsv),
            rankbook::ExportFormat::Tsv
        );
    }
}
