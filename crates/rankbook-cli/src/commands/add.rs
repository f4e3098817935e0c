//! Add command: fetch one account and store it.

use anyhow::{Context, Result};
use rankbook::{Region, RiotId};

use crate::settings::Settings;

pub fn run(
    settings: &Settings,
    region: Region,
    riot_id: &RiotId,
    username: &str,
    password: &str,
) -> Result<()> {
    let api = rankbook::connect(settings.platform_config()?)?;
    let mut store = settings.store();

    let key = riot_id.to_string();
    rankbook::add(&mut store, &*api, region, &key, username, password)
        .with_context(|| format!("Failed to add account {}", key))?;

    println!("Account {} added successfully!", key);
    Ok(())
}
