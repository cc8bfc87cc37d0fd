//! Screen content — mock catalogs and the personalization functions.
//!
//! Everything here is static or per-session sample data; selection logic is
//! pure so the API layer stays a thin transport.

pub mod actions;
pub mod analytics;
pub mod energy;
pub mod microgrid;
pub mod schedule;
