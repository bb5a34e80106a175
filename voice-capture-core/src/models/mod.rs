pub mod config;
pub mod diagnostics;
pub mod error;
pub mod recording_chunk;
pub mod state;
