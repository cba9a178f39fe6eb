//! snapshot — on-disk room records and the shutdown reconciler.
//!
//! File format (LE), shared by the snapshot and the archive:
//!   MAGIC8 = "FDROOMS1"
//!   u32 version = 1
//!   then fixed-size records, back to back:
//!     u32  room_number
//!     u8   kind           (RoomType code, 1..=5)
//!     u8   status         (RoomStatus code, 0..=3)
//!     u8   checked_out    (0/1)
//!     u8   pad            (0)
//!     f64  price_per_night
//!     i64  check_in_time  (unix seconds, 0 = unset)
//!     i64  check_out_time (unix seconds, 0 = unset)
//!     [u8; 50]  guest name     (zero-padded UTF-8)
//!     [u8; 20]  guest id card
//!     [u8; 15]  guest phone
//!     [u8; 100] guest address
//!     u32  crc32 of the preceding 217 bytes
//!
//! Policy:
//! - Snapshot rewrite is atomic: tmp + rename, then fsync of the parent dir
//!   (best-effort on non-unix).
//! - The archive is strictly append-only; its header is written once, when
//!   the file is created.
//! - Loading stops at the first short or corrupt record and keeps whatever
//!   decoded cleanly before it (surfaced in the log, not as an error). A
//!   missing snapshot is "no prior data".

use anyhow::{anyhow, Context, Result};
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use crate::mirror::Mirror;
use crate::registry::Registry;
use crate::room::{Guest, Room, RoomStatus, RoomType};

// ---- Format constants ----

pub const SNAP_MAGIC: &[u8; 8] = b"FDROOMS1";
pub const SNAP_VERSION: u32 = 1;
pub const HEADER_SIZE: usize = 12;

const NAME_LEN: usize = 50;
const ID_CARD_LEN: usize = 20;
const PHONE_LEN: usize = 15;
const ADDRESS_LEN: usize = 100;

/// Record payload without the trailing crc32.
const PAYLOAD_SIZE: usize = 4 + 1 + 1 + 1 + 1 + 8 + 8 + 8 + NAME_LEN + ID_CARD_LEN + PHONE_LEN + ADDRESS_LEN;
pub const RECORD_SIZE: usize = PAYLOAD_SIZE + 4;

// ---- Record codec ----

fn put_text(dst: &mut [u8], s: &str) {
    let mut end = s.len().min(dst.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    dst[..end].copy_from_slice(&s.as_bytes()[..end]);
}

fn take_text(src: &[u8]) -> String {
    let end = src.iter().position(|&b| b == 0).unwrap_or(src.len());
    String::from_utf8_lossy(&src[..end]).into_owned()
}

/// Encode one room into a fixed-size record, crc32 included.
pub fn encode_record(room: &Room) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    {
        let mut c = Cursor::new(&mut buf[..]);
        // the cursor never runs past the buffer: layout adds up to RECORD_SIZE
        c.write_u32::<LittleEndian>(room.number).unwrap();
        c.write_u8(room.kind.code()).unwrap();
        c.write_u8(room.status.code()).unwrap();
        c.write_u8(room.checked_out as u8).unwrap();
        c.write_u8(0).unwrap(); // pad
        c.write_f64::<LittleEndian>(room.price_per_night).unwrap();
        c.write_i64::<LittleEndian>(room.check_in_time).unwrap();
        c.write_i64::<LittleEndian>(room.check_out_time).unwrap();
    }
    let mut off = 32;
    put_text(&mut buf[off..off + NAME_LEN], &room.guest.name);
    off += NAME_LEN;
    put_text(&mut buf[off..off + ID_CARD_LEN], &room.guest.id_card);
    off += ID_CARD_LEN;
    put_text(&mut buf[off..off + PHONE_LEN], &room.guest.phone);
    off += PHONE_LEN;
    put_text(&mut buf[off..off + ADDRESS_LEN], &room.guest.address);

    let crc = crc32fast::hash(&buf[..PAYLOAD_SIZE]);
    LittleEndian::write_u32(&mut buf[PAYLOAD_SIZE..], crc);
    buf
}

/// Decode one record. Fails on crc mismatch or out-of-range enum codes.
pub fn decode_record(buf: &[u8]) -> Result<Room> {
    if buf.len() < RECORD_SIZE {
        return Err(anyhow!(
            "short record: {} bytes (expected {})",
            buf.len(),
            RECORD_SIZE
        ));
    }
    let stored = LittleEndian::read_u32(&buf[PAYLOAD_SIZE..RECORD_SIZE]);
    let actual = crc32fast::hash(&buf[..PAYLOAD_SIZE]);
    if stored != actual {
        return Err(anyhow!(
            "record crc mismatch (stored {:#010x}, actual {:#010x})",
            stored,
            actual
        ));
    }

    let mut c = Cursor::new(buf);
    let number = c.read_u32::<LittleEndian>()?;
    let kind_code = c.read_u8()?;
    let status_code = c.read_u8()?;
    let checked_out = c.read_u8()? != 0;
    let _pad = c.read_u8()?;
    let price_per_night = c.read_f64::<LittleEndian>()?;
    let check_in_time = c.read_i64::<LittleEndian>()?;
    let check_out_time = c.read_i64::<LittleEndian>()?;

    let kind = RoomType::from_code(kind_code)
        .ok_or_else(|| anyhow!("bad room type code {} in record for room {}", kind_code, number))?;
    let status = RoomStatus::from_code(status_code).ok_or_else(|| {
        anyhow!("bad status code {} in record for room {}", status_code, number)
    })?;

    let mut off = 32;
    let name = take_text(&buf[off..off + NAME_LEN]);
    off += NAME_LEN;
    let id_card = take_text(&buf[off..off + ID_CARD_LEN]);
    off += ID_CARD_LEN;
    let phone = take_text(&buf[off..off + PHONE_LEN]);
    off += PHONE_LEN;
    let address = take_text(&buf[off..off + ADDRESS_LEN]);

    Ok(Room {
        number,
        kind,
        status,
        price_per_night,
        guest: Guest {
            name,
            id_card,
            phone,
            address,
        },
        check_in_time,
        check_out_time,
        checked_out,
    })
}

// ---- Internal helpers ----

#[cfg(unix)]
fn fsync_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let dir = File::open(parent)?;
            dir.sync_all()?;
        }
    }
    Ok(())
}
#[cfg(not(unix))]
fn fsync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

fn write_header<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SNAP_MAGIC)?;
    w.write_u32::<LittleEndian>(SNAP_VERSION)?;
    Ok(())
}

/// Fill `buf` as far as the stream allows; returns bytes actually read.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

// ---- Load / save ----

/// Read a snapshot (or archive) file into a fresh registry, preserving file
/// order. A missing file yields an empty registry. A bad header or a
/// short/corrupt record truncates the load at that point, keeping the intact
/// prefix; both cases are warnings, not errors.
pub fn load(path: &Path) -> Result<Registry> {
    let mut f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("no snapshot at {}, starting empty", path.display());
            return Ok(Registry::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("open snapshot {}", path.display()));
        }
    };

    let mut hdr = [0u8; HEADER_SIZE];
    let n = read_full(&mut f, &mut hdr)
        .with_context(|| format!("read snapshot header {}", path.display()))?;
    if n < HEADER_SIZE || &hdr[..8] != SNAP_MAGIC {
        warn!("bad snapshot header at {}, starting empty", path.display());
        return Ok(Registry::new());
    }
    let version = LittleEndian::read_u32(&hdr[8..12]);
    if version != SNAP_VERSION {
        warn!(
            "unsupported snapshot version {} at {} (expected {}), starting empty",
            version,
            path.display(),
            SNAP_VERSION
        );
        return Ok(Registry::new());
    }

    let mut reg = Registry::new();
    let mut buf = [0u8; RECORD_SIZE];
    loop {
        let n = read_full(&mut f, &mut buf)
            .with_context(|| format!("read snapshot record {}", path.display()))?;
        if n == 0 {
            break;
        }
        if n < RECORD_SIZE {
            warn!(
                "short trailing record ({} bytes) in {}, keeping {} rooms",
                n,
                path.display(),
                reg.len()
            );
            break;
        }
        match decode_record(&buf) {
            Ok(room) => reg.add(room),
            Err(e) => {
                warn!(
                    "corrupt record in {}: {:#}; keeping {} rooms",
                    path.display(),
                    e,
                    reg.len()
                );
                break;
            }
        }
    }

    info!("loaded {} rooms from {}", reg.len(), path.display());
    Ok(reg)
}

/// Create a new snapshot file. Errors if one already exists.
pub fn write_snapshot_new(path: &Path, rooms: &[Room]) -> Result<()> {
    if path.exists() {
        return Err(anyhow!("snapshot already exists at {}", path.display()));
    }
    write_snapshot_overwrite(path, rooms)
}

/// Rewrite the snapshot file via tmp + rename.
pub fn write_snapshot_overwrite(path: &Path, rooms: &[Room]) -> Result<()> {
    let tmp = tmp_path(path);
    let _ = fs::remove_file(&tmp); // best-effort

    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp)
        .with_context(|| format!("open snapshot tmp {}", tmp.display()))?;
    write_header(&mut f)?;
    for room in rooms {
        f.write_all(&encode_record(room))?;
    }
    f.sync_all()?; // flush tmp to disk

    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    let _ = fsync_dir(path);
    Ok(())
}

fn tmp_path(path: &Path) -> std::path::PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    os.into()
}

// ---- Shutdown reconciliation ----

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Rooms kept live: rewritten into the snapshot, UPDATEd in the mirror.
    pub kept: usize,
    /// Rooms finalized: appended to the archive, DELETEd from the mirror and
    /// removed from the registry.
    pub archived: usize,
}

/// Partition the registry by the checked_out flag and flush both streams in
/// traversal order. Checked-out rooms go to the append-only archive and are
/// removed from the registry; the rest are rewritten into the snapshot.
///
/// Both destinations are opened before anything is written: if either open
/// fails, neither file changes on this run. Mirror calls are best-effort and
/// never abort the pass.
///
/// Note: archived room numbers never return to the bookable registry in a
/// later run, and guest data stays on the room after check-out. Both match
/// the historical behavior of this system and are kept on purpose.
pub fn reconcile(
    registry: &mut Registry,
    snapshot_path: &Path,
    archive_path: &Path,
    mirror: &Mirror,
) -> Result<ReconcileReport> {
    // Validate both destinations up front.
    let tmp = tmp_path(snapshot_path);
    let _ = fs::remove_file(&tmp);
    let mut snap = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp)
        .with_context(|| format!("open snapshot tmp {}", tmp.display()))?;

    let mut archive = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(archive_path)
        .with_context(|| format!("open archive {}", archive_path.display()))
    {
        Ok(f) => f,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
    };

    write_header(&mut snap)?;
    if archive.metadata()?.len() == 0 {
        // fresh archive: header goes in once, records only from here on
        write_header(&mut archive)?;
    }

    let mut report = ReconcileReport::default();
    for room in registry.iter() {
        if room.checked_out {
            archive.write_all(&encode_record(room))?;
            mirror.delete(room.number);
            report.archived += 1;
        } else {
            snap.write_all(&encode_record(room))?;
            mirror.update(room);
            report.kept += 1;
        }
    }

    archive.sync_all()?;
    snap.sync_all()?;
    fs::rename(&tmp, snapshot_path).with_context(|| {
        format!("rename {} -> {}", tmp.display(), snapshot_path.display())
    })?;
    let _ = fsync_dir(snapshot_path);

    registry.retain(|r| !r.checked_out);

    info!(
        "reconciled: {} rooms kept in {}, {} archived to {}",
        report.kept,
        snapshot_path.display(),
        report.archived,
        archive_path.display()
    );
    Ok(report)
}
