use anyhow::Result;
use std::path::PathBuf;

use frontdesk::{Desk, DeskConfig};

pub fn exec(path: PathBuf) -> Result<()> {
    let cfg = DeskConfig::from_env();
    let count = Desk::init(&path, &cfg)?;
    println!("seeded {} rooms at {}", count, path.display());
    Ok(())
}
