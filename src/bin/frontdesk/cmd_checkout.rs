use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use frontdesk::{CheckOutOutcome, Confirmation, Desk, DeskConfig};

use crate::render::print_room;

pub fn exec(path: PathBuf, room: u32, yes: bool) -> Result<()> {
    let mut desk = Desk::open(&path, DeskConfig::from_env())?;

    let confirmation = if yes {
        Confirmation::Confirmed
    } else {
        println!("about to check out:");
        print_room(desk.check_out_preview(room)?);
        prompt_confirmation()?
    };

    match desk.check_out(room, confirmation)? {
        CheckOutOutcome::Done => println!("room {} checked out, now cleaning", room),
        CheckOutOutcome::Cancelled => println!("check-out cancelled"),
    }
    desk.close()?;
    Ok(())
}

fn prompt_confirmation() -> Result<Confirmation> {
    print!("confirm check-out? (y/n): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read confirmation")?;
    match line.trim() {
        "y" | "Y" => Ok(Confirmation::Confirmed),
        _ => Ok(Confirmation::Declined),
    }
}
