//! mirror — best-effort relational copy of the registry.
//!
//! One row per room in a `rooms` table. INSERT on check-in, UPDATE on
//! check-out and at reconciliation, DELETE on archival. The registry is
//! always the authority: every mirror call is fire-and-forget, a failure is
//! logged and never propagates into the operation that triggered it. No
//! retries, no rollback.
//!
//! A mirror that fails to open degrades to disabled instead of failing the
//! session.

use anyhow::{Context, Result};
use log::{info, warn};
use rusqlite::{params, Connection};

use crate::room::Room;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS rooms (
    room_number    INTEGER PRIMARY KEY,
    room_type      INTEGER NOT NULL,
    status         INTEGER NOT NULL,
    price_per_night REAL NOT NULL,
    guest_name     TEXT NOT NULL DEFAULT '',
    id_card        TEXT NOT NULL DEFAULT '',
    phone          TEXT NOT NULL DEFAULT '',
    address        TEXT NOT NULL DEFAULT '',
    check_in_time  INTEGER NOT NULL DEFAULT 0,
    check_out_time INTEGER NOT NULL DEFAULT 0,
    is_checked_out INTEGER NOT NULL DEFAULT 0
)";

pub struct Mirror {
    conn: Option<Connection>,
}

impl Mirror {
    /// Open the mirror at `path`; `None` disables it. An open/schema failure
    /// is downgraded to a disabled mirror with a warning.
    pub fn open(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };
        match Self::try_open(path) {
            Ok(conn) => {
                info!("mirror attached at {}", path);
                Self { conn: Some(conn) }
            }
            Err(e) => {
                warn!("mirror unavailable at {}: {:#}; continuing without it", path, e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { conn: None }
    }

    fn try_open(path: &str) -> Result<Connection> {
        let conn = Connection::open(path).with_context(|| format!("open mirror db {}", path))?;
        conn.execute(SCHEMA, [])
            .context("create rooms table in mirror")?;
        Ok(conn)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.conn.is_some()
    }

    /// Full-row insert, issued on check-in and at initial seeding.
    pub fn insert(&self, room: &Room) {
        if let Some(conn) = &self.conn {
            if let Err(e) = try_insert(conn, room) {
                warn!("mirror insert failed for room {}: {:#}", room.number, e);
            }
        }
    }

    /// State update, issued on check-out and for every live room at
    /// reconciliation.
    pub fn update(&self, room: &Room) {
        if let Some(conn) = &self.conn {
            if let Err(e) = try_update(conn, room) {
                warn!("mirror update failed for room {}: {:#}", room.number, e);
            }
        }
    }

    /// Row removal, issued when a room is archived.
    pub fn delete(&self, number: u32) {
        if let Some(conn) = &self.conn {
            if let Err(e) = try_delete(conn, number) {
                warn!("mirror delete failed for room {}: {:#}", number, e);
            }
        }
    }
}

fn try_insert(conn: &Connection, room: &Room) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO rooms (room_number, room_type, status, price_per_night,
             guest_name, id_card, phone, address, check_in_time, check_out_time, is_checked_out)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            room.number,
            room.kind.code(),
            room.status.code(),
            room.price_per_night,
            room.guest.name,
            room.guest.id_card,
            room.guest.phone,
            room.guest.address,
            room.check_in_time,
            room.check_out_time,
            room.checked_out as i64,
        ],
    )?;
    Ok(())
}

fn try_update(conn: &Connection, room: &Room) -> Result<()> {
    let n = conn.execute(
        "UPDATE rooms SET status = ?2, check_out_time = ?3, is_checked_out = ?4
         WHERE room_number = ?1",
        params![
            room.number,
            room.status.code(),
            room.check_out_time,
            room.checked_out as i64,
        ],
    )?;
    if n == 0 {
        // row may never have made it in (mirror was down at check-in time);
        // upsert keeps the secondary index usable
        try_insert(conn, room)?;
    }
    Ok(())
}

fn try_delete(conn: &Connection, number: u32) -> Result<()> {
    conn.execute("DELETE FROM rooms WHERE room_number = ?1", params![number])?;
    Ok(())
}
