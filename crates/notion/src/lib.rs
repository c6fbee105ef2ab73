//! Notion-backed [`dit_contact::RecordStore`].
//!
//! Each contact submission becomes one page in a preconfigured Notion
//! database.

mod client;
mod config;

pub use client::*;
pub use config::*;
