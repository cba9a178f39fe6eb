use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use frontdesk::{Confirmation, Desk, DeskConfig, Guest, Room, RoomType};

#[test]
fn duplicate_id_card_returns_every_match() -> Result<()> {
    let root = unique_root("dup-id");
    fs::create_dir_all(&root)?;
    let mut desk = Desk::open(&root, DeskConfig::default())?;
    desk.registry
        .add(Room::new(101, RoomType::StandardSingle, 199.0));
    desk.registry
        .add(Room::new(102, RoomType::StandardSingle, 199.0));
    desk.registry
        .add(Room::new(103, RoomType::StandardSingle, 199.0));

    // a data-entry duplicate: same id card on two rooms
    desk.check_in(101, Guest::new("Alice", "SAME-ID", "", ""))?;
    desk.check_in(103, Guest::new("Alice Z", "SAME-ID", "", ""))?;

    let hits: Vec<u32> = desk
        .find_by_id_card("SAME-ID")
        .iter()
        .map(|r| r.number)
        .collect();
    assert_eq!(hits, vec![101, 103], "both rooms, not just the first");
    Ok(())
}

#[test]
fn stale_guest_data_is_still_searchable() -> Result<()> {
    let root = unique_root("stale-guest");
    fs::create_dir_all(&root)?;
    let mut desk = Desk::open(&root, DeskConfig::default())?;
    desk.registry
        .add(Room::new(101, RoomType::StandardSingle, 199.0));

    desk.check_in(101, Guest::new("Bob", "B-42", "", ""))?;
    desk.check_out(101, Confirmation::Confirmed)?;

    // room is Cleaning now, but its guest record was not cleared
    let by_name = desk.find_by_guest_name("Bob");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].number, 101);
    assert_eq!(desk.find_by_id_card("B-42").len(), 1);
    Ok(())
}

#[test]
fn misses_come_back_empty() -> Result<()> {
    let root = unique_root("misses");
    fs::create_dir_all(&root)?;
    let mut desk = Desk::open(&root, DeskConfig::default())?;
    desk.registry
        .add(Room::new(101, RoomType::StandardSingle, 199.0));
    desk.check_in(101, Guest::new("Alice", "A-1", "", ""))?;

    assert!(desk.find_by_number(999).is_none());
    assert!(desk.find_by_guest_name("alice").is_empty(), "exact match only");
    assert!(desk.find_by_id_card("A-2").is_empty());
    Ok(())
}

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("frontdesk-{}-{}-{}", prefix, pid, t))
}
