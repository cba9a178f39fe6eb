use anyhow::Result;
use std::path::PathBuf;

use frontdesk::{Desk, DeskConfig, Guest};

use crate::render::print_room;

pub fn exec(
    path: PathBuf,
    room: u32,
    name: String,
    id_card: String,
    phone: String,
    address: String,
) -> Result<()> {
    let mut desk = Desk::open(&path, DeskConfig::from_env())?;
    let guest = Guest {
        name,
        id_card,
        phone,
        address,
    };
    let checked_in = desk.check_in(room, guest)?.clone();
    println!("checked in:");
    print_room(&checked_in);
    desk.close()?;
    Ok(())
}
