use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use frontdesk::{
    snapshot, CheckOutOutcome, Confirmation, Desk, DeskConfig, Guest, Room, RoomStatus, RoomType,
};

#[test]
fn front_desk_cycle_archives_checked_out_room() -> Result<()> {
    let root = unique_root("scenario");
    fs::create_dir_all(&root)?;
    let mirror_db = root.join("rooms.db");
    let cfg = DeskConfig::default().with_mirror_path(Some(mirror_db.to_string_lossy()));

    // 1) session one: check Alice in to 101, check her out again
    {
        let mut desk = Desk::open(&root, cfg.clone())?;
        desk.registry
            .add(Room::new(101, RoomType::StandardSingle, 199.0));
        desk.registry
            .add(Room::new(102, RoomType::StandardDouble, 299.0));

        desk.check_in(101, Guest::new("Alice", "A-001", "", ""))?;
        let avail: Vec<u32> = desk.available_rooms().iter().map(|r| r.number).collect();
        assert_eq!(avail, vec![102], "only 102 is bookable while Alice stays");

        let outcome = desk.check_out(101, Confirmation::Confirmed)?;
        assert_eq!(outcome, CheckOutOutcome::Done);

        let r101 = desk.find_by_number(101).expect("101 still live pre-reconcile");
        assert_eq!(r101.status, RoomStatus::Cleaning);
        assert!(r101.checked_out);
        assert!(r101.check_out_time >= r101.check_in_time);
        // guest data is retained after check-out (historical behavior)
        assert_eq!(r101.guest.name, "Alice");

        let report = desk.close()?;
        assert_eq!(report.kept, 1);
        assert_eq!(report.archived, 1);
    }

    // 2) snapshot now holds exactly the still-active room
    {
        let desk = Desk::open(&root, cfg.clone())?;
        let numbers: Vec<u32> = desk.rooms().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![102]);
        desk.close()?;
    }

    // 3) archive holds room 101, record intact (same layout as the snapshot)
    let archived = snapshot::load(&root.join("checked_out_rooms.dat"))?;
    assert_eq!(archived.len(), 1);
    let r = archived.find(101).expect("101 archived");
    assert!(r.checked_out);
    assert_eq!(r.status, RoomStatus::Cleaning);
    assert_eq!(r.guest.name, "Alice");
    assert_eq!(r.guest.id_card, "A-001");

    // 4) mirror: 101 deleted at archival, 102 still present
    let conn = rusqlite::Connection::open(&mirror_db)?;
    let numbers: Vec<u32> = conn
        .prepare("SELECT room_number FROM rooms ORDER BY room_number")?
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(numbers, vec![102]);

    Ok(())
}

#[test]
fn archive_accumulates_across_runs() -> Result<()> {
    let root = unique_root("archive-accum");
    fs::create_dir_all(&root)?;
    let cfg = DeskConfig::default();

    for (number, name) in [(201u32, "Bob"), (202u32, "Carol")] {
        let mut desk = Desk::open(&root, cfg.clone())?;
        desk.registry
            .add(Room::new(number, RoomType::StandardDouble, 299.0));
        desk.check_in(number, Guest::new(name, "dup-id", "", ""))?;
        desk.check_out(number, Confirmation::Confirmed)?;
        desk.close()?;
    }

    let archived = snapshot::load(&root.join("checked_out_rooms.dat"))?;
    let numbers: Vec<u32> = archived.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![201, 202], "append-only, both runs kept");

    Ok(())
}

#[test]
fn reconcile_now_flushes_once_per_session() -> Result<()> {
    let root = unique_root("reconcile-now");
    fs::create_dir_all(&root)?;

    let mut desk = Desk::open(&root, DeskConfig::default())?;
    desk.registry
        .add(Room::new(101, RoomType::StandardSingle, 199.0));
    desk.check_in(101, Guest::new("Alice", "A-001", "", ""))?;
    desk.check_out(101, Confirmation::Confirmed)?;

    let report = desk.reconcile_now()?;
    assert_eq!(report.archived, 1);
    assert!(desk.rooms().is_empty(), "archived room left the registry");
    drop(desk); // close path must not reconcile (and archive) a second time

    let archived = snapshot::load(&root.join("checked_out_rooms.dat"))?;
    assert_eq!(archived.len(), 1, "exactly one archive record");
    Ok(())
}

#[test]
fn init_refuses_a_locked_root() -> Result<()> {
    let root = unique_root("init-locked");
    let cfg = DeskConfig::default();

    // no snapshot exists yet, so the only obstacle is the session's lock
    let desk = Desk::open(&root, cfg.clone())?;
    assert!(Desk::init(&root, &cfg).is_err());
    desk.close()?;

    // lock released (close wrote an empty snapshot; clear it so only the
    // lock could refuse the seeding)
    fs::remove_file(root.join("occupied_rooms.dat"))?;
    assert_eq!(Desk::init(&root, &cfg)?, 33);
    Ok(())
}

#[test]
fn init_seeds_stock_floor_plan_once() -> Result<()> {
    let root = unique_root("init");
    let cfg = DeskConfig::default();

    let count = Desk::init(&root, &cfg)?;
    assert_eq!(count, 33);

    // seeding over an existing snapshot is refused
    assert!(Desk::init(&root, &cfg).is_err());

    let desk = Desk::open(&root, cfg)?;
    assert_eq!(desk.rooms().len(), 33);
    assert_eq!(desk.available_rooms().len(), 33);
    assert_eq!(desk.available_rooms_of(RoomType::Suite).len(), 3);
    desk.close()?;

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
