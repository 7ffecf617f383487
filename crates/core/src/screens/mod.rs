//! Per-screen controllers.
//!
//! Each controller owns its own state for the lifetime of one screen
//! activation. Nothing here is shared between screens: every screen fetches
//! its own snapshot.

pub mod auth;
pub mod coin_detail;
pub mod market_list;
pub mod navigation;
pub mod portfolio;
pub mod session;
pub mod state;
