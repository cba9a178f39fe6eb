//! desk — the session object and the front-desk operations on it.

pub mod checkin;
pub mod checkout;
pub mod core;
pub mod query;
pub mod sort;
pub mod stats;

pub use core::Desk;
