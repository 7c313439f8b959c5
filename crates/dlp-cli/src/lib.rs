//! Library half of the `dlp-cli` binary: logging setup, spreadsheet
//! reading, profile store loading and report rendering.

pub mod logging;
pub mod read;
pub mod render;
pub mod store;
