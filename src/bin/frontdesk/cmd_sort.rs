use anyhow::Result;
use std::path::PathBuf;

use frontdesk::{Desk, DeskConfig, SortKey};

use crate::render::print_room_brief;

pub fn exec(path: PathBuf, by: SortKey) -> Result<()> {
    let mut desk = Desk::open(&path, DeskConfig::from_env())?;
    if desk.sort_rooms(by) {
        println!("sorted:");
        for room in desk.rooms() {
            print_room_brief(room);
        }
    } else {
        println!("fewer than two rooms, nothing to sort");
    }
    desk.close()?;
    Ok(())
}
