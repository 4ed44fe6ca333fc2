//! Playlist module: exposes the queue/playback engine.
//!
//! The engine itself lives in `playlist::engine` and owns the ordered track
//! list, the cursor and the currently timed track.

mod engine;

pub use engine::{DeleteResult, Playlist, PlaylistError};
