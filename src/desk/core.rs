//! desk/core — the Desk session object: open/init/close lifecycle.
//!
//! One Desk per process: an exclusive LOCK file under the data root keeps a
//! second front desk out. open() loads the snapshot into the registry and
//! attaches the mirror; close() runs the shutdown reconciliation exactly
//! once. Drop runs it best-effort if close() was never reached, so every
//! exit path flushes state.

use anyhow::{Context, Result};
use fs2::FileExt;
use log::warn;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::config::DeskConfig;
use crate::inventory::default_inventory;
use crate::mirror::Mirror;
use crate::registry::Registry;
use crate::room::Room;
use crate::snapshot::{self, ReconcileReport};

pub(crate) const LOCK_FILE: &str = "LOCK";

pub(crate) fn open_lock_file(root: &Path) -> Result<std::fs::File> {
    let p = root.join(LOCK_FILE);
    let f = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .open(&p)
        .with_context(|| format!("open lock file {}", p.display()))?;
    Ok(f)
}

pub struct Desk {
    pub root: PathBuf,
    pub registry: Registry,
    pub mirror: Mirror,
    cfg: DeskConfig,
    _lock: std::fs::File,
    reconciled: bool,
}

impl Desk {
    /// Seed a fresh data root with the stock floor plan. Errors if a
    /// snapshot already exists there. Each room is also INSERTed into the
    /// mirror (best-effort).
    pub fn init(root: &Path, cfg: &DeskConfig) -> Result<usize> {
        fs::create_dir_all(root)
            .with_context(|| format!("create data root {}", root.display()))?;
        // same single-writer rule as open(): seeding must not race a live
        // session on the same root
        let lock = open_lock_file(root)?;
        lock.try_lock_exclusive()
            .with_context(|| format!("lock_exclusive {}", root.join(LOCK_FILE).display()))?;

        let rooms = default_inventory();
        snapshot::write_snapshot_new(&root.join(&cfg.snapshot_file), &rooms)?;

        let mirror = Mirror::open(cfg.mirror_path.as_deref());
        for room in &rooms {
            mirror.insert(room);
        }
        Ok(rooms.len())
    }

    /// Open a session: take the lock, load the snapshot, attach the mirror.
    pub fn open(root: &Path, cfg: DeskConfig) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("create data root {}", root.display()))?;
        let lock = open_lock_file(root)?;
        lock.try_lock_exclusive()
            .with_context(|| format!("lock_exclusive {}", root.join(LOCK_FILE).display()))?;

        // a snapshot that cannot be read only costs the prior inventory,
        // never the session
        let registry = match snapshot::load(&root.join(&cfg.snapshot_file)) {
            Ok(reg) => reg,
            Err(e) => {
                warn!("snapshot load failed: {:#}; starting with empty inventory", e);
                Registry::new()
            }
        };
        let mirror = Mirror::open(cfg.mirror_path.as_deref());

        Ok(Self {
            root: root.to_path_buf(),
            registry,
            mirror,
            cfg,
            _lock: lock,
            reconciled: false,
        })
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(&self.cfg.snapshot_file)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root.join(&self.cfg.archive_file)
    }

    /// All rooms in current registry order.
    pub fn rooms(&self) -> &[Room] {
        self.registry.as_slice()
    }

    /// Run the shutdown reconciliation now. Idempotent per session: close()
    /// and Drop will not run it again.
    pub fn reconcile_now(&mut self) -> Result<ReconcileReport> {
        let snapshot_path = self.snapshot_path();
        let archive_path = self.archive_path();
        let report = snapshot::reconcile(
            &mut self.registry,
            &snapshot_path,
            &archive_path,
            &self.mirror,
        )?;
        self.reconciled = true;
        Ok(report)
    }

    /// Finish the session: reconcile and release the lock.
    pub fn close(mut self) -> Result<ReconcileReport> {
        self.reconcile_now()
    }
}

impl Drop for Desk {
    fn drop(&mut self) {
        if !self.reconciled {
            if let Err(e) = self.reconcile_now() {
                warn!("reconciliation on drop failed: {:#}", e);
            }
        }
    }
}
