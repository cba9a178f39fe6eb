use anyhow::Result;
use std::path::PathBuf;

use frontdesk::{Desk, DeskConfig};

use crate::render::print_stats;

pub fn exec(path: PathBuf, json: bool) -> Result<()> {
    let desk = Desk::open(&path, DeskConfig::from_env())?;
    let stats = desk.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }
    desk.close()?;
    Ok(())
}
