//! Presentation of ledger rows: aligned text table, TSV or JSON.

mod table;

pub use table::TextTable;

use serde::Serialize;
use strum::{Display, EnumString};

use crate::account::AccountRecord;
use crate::codec;
use crate::error::Result;

/// Shown in place of credentials unless they are explicitly revealed.
pub const HIDDEN: &str = "[HIDDEN]";

pub const COLUMNS: [&str; 13] = [
    "Name#Tag",
    "Region",
    "Level",
    "SOLOQ Rank",
    "LP",
    "Wins",
    "Losses",
    "FLEX Rank",
    "Flex LP",
    "Flex Wins",
    "Flex Losses",
    "Username",
    "Password",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRow {
    pub key: String,
    pub region: String,
    pub level: u32,
    pub solo_rank: String,
    pub solo_lp: u32,
    pub solo_wins: u32,
    pub solo_losses: u32,
    pub flex_rank: String,
    pub flex_lp: u32,
    pub flex_wins: u32,
    pub flex_losses: u32,
    pub username: String,
    pub password: String,
}

impl AccountRow {
    /// Build a row; credentials are decoded only when `reveal` is set.
    pub fn new(key: &str, record: &AccountRecord, reveal: bool) -> Result<Self> {
        let (username, password) = if reveal {
            (codec::decode(&record.username)?, codec::decode(&record.password)?)
        } else {
            (HIDDEN.to_string(), HIDDEN.to_string())
        };

        Ok(Self {
            key: key.to_string(),
            region: record.region.to_string(),
            level: record.level,
            solo_rank: record.solo.label(),
            solo_lp: record.solo.league_points,
            solo_wins: record.solo.wins,
            solo_losses: record.solo.losses,
            flex_rank: record.flex.label(),
            flex_lp: record.flex.league_points,
            flex_wins: record.flex.wins,
            flex_losses: record.flex.losses,
            username,
            password,
        })
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.region.clone(),
            self.level.to_string(),
            self.solo_rank.clone(),
            self.solo_lp.to_string(),
            self.solo_wins.to_string(),
            self.solo_losses.to_string(),
            self.flex_rank.clone(),
            self.flex_lp.to_string(),
            self.flex_wins.to_string(),
            self.flex_losses.to_string(),
            self.username.clone(),
            self.password.clone(),
        ]
    }
}

pub fn render(rows: &[AccountRow], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Table => Ok(render_table(rows)),
        ExportFormat::Tsv => Ok(render_tsv(rows)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

pub fn render_table(rows: &[AccountRow]) -> String {
    let mut table = TextTable::new(COLUMNS);
    for row in rows {
        table.add_row(row.cells());
    }
    table.render()
}

pub fn render_tsv(rows: &[AccountRow]) -> String {
    let mut lines = vec![COLUMNS.join("\t")];
    lines.extend(rows.iter().map(|row| row.cells().join("\t")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Division, RankSummary, Region, Tier};

    fn row(reveal: bool) -> AccountRow {
        let mut ranks = RankSummary::default();
        ranks.solo.tier = Tier::Diamond;
        ranks.solo.division = Some(Division::II);
        ranks.solo.league_points = 57;
        let record = AccountRecord::new(
            Region::Kr,
            codec::encode("faker").unwrap(),
            codec::encode("t1").unwrap(),
            250,
            ranks,
        );
        AccountRow::new("Faker#KR1", &record, reveal).unwrap()
    }

    #[test]
    fn test_row_labels() {
        let row = row(false);
        assert_eq!(row.solo_rank, "DIAMOND II");
        assert_eq!(row.flex_rank, "Unranked");
        assert_eq!(row.username, HIDDEN);
        assert_eq!(row.cells().len(), COLUMNS.len());
    }

    #[test]
    fn test_row_reveal() {
        let row = row(true);
        assert_eq!(row.username, "faker");
        assert_eq!(row.password, "t1");
    }

    #[test]
    fn test_tsv() {
        let tsv = render(&[row(false)], ExportFormat::Tsv).unwrap();
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name#Tag\tRegion\tLevel"));
        assert!(lines[1].starts_with("Faker#KR1\tKR\t250\tDIAMOND II\t57"));
    }

    #[test]
    fn test_json() {
        let json = render(&[row(false)], ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["key"], "Faker#KR1");
        assert_eq!(value[0]["solo_rank"], "DIAMOND II");
        assert_eq!(value[0]["password"], HIDDEN);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::default(), ExportFormat::Table);
    }
}
