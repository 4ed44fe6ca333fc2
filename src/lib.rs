//! Playback-queue management for a track player.
//!
//! The crate is built around one stateful object, [`Playlist`]: an ordered
//! list of queued [`Track`]s, a cursor marking the next entry to serve, the
//! track currently considered "now playing" and its pause/elapsed timing.
//! Callers (typically a chat-command layer) drive it synchronously with
//! `add`, `advance`, `pause`, `stop` and friends, and poll the timing
//! queries; the engine never spawns timers or performs I/O.
//!
//! Wall-clock access goes through the [`Clock`] seam so timing behavior can
//! be tested with a manual clock.

pub mod clock;
pub mod config;
pub mod playlist;
pub mod track;

pub use clock::{Clock, WallClock};
pub use config::Settings;
pub use playlist::{DeleteResult, Playlist, PlaylistError};
pub use track::Track;
