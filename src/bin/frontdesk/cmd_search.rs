use anyhow::{anyhow, Result};
use std::path::PathBuf;

use frontdesk::{Desk, DeskConfig};

use crate::render::print_room;

pub fn exec(
    path: PathBuf,
    room: Option<u32>,
    name: Option<String>,
    id_card: Option<String>,
) -> Result<()> {
    let desk = Desk::open(&path, DeskConfig::from_env())?;

    match (room, name, id_card) {
        (Some(number), None, None) => match desk.find_by_number(number) {
            Some(r) => print_room(r),
            None => println!("room {} not found", number),
        },
        (None, Some(name), None) => {
            let hits = desk.find_by_guest_name(&name);
            if hits.is_empty() {
                println!("no room has a guest named '{}'", name);
            }
            for r in hits {
                print_room(r);
            }
        }
        (None, None, Some(id)) => {
            let hits = desk.find_by_id_card(&id);
            if hits.is_empty() {
                println!("no room has a guest with id card '{}'", id);
            }
            for r in hits {
                print_room(r);
            }
        }
        _ => {
            return Err(anyhow!(
                "pass exactly one of --room, --name, --id-card"
            ))
        }
    }

    desk.close()?;
    Ok(())
}
