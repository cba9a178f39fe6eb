use anyhow::Result;
use std::path::PathBuf;

use frontdesk::{Desk, DeskConfig, Room, RoomType};

use crate::render::print_room_brief;

pub fn exec(path: PathBuf, available: bool, kind: Option<RoomType>, json: bool) -> Result<()> {
    let desk = Desk::open(&path, DeskConfig::from_env())?;

    let rooms: Vec<&Room> = match (available, kind) {
        (true, Some(k)) => desk.available_rooms_of(k),
        (true, None) => desk.available_rooms(),
        (false, Some(k)) => desk.rooms().iter().filter(|r| r.kind == k).collect(),
        (false, None) => desk.rooms().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rooms)?);
    } else if rooms.is_empty() {
        println!("no matching rooms");
    } else {
        for room in rooms {
            print_room_brief(room);
        }
    }

    desk.close()?;
    Ok(())
}
