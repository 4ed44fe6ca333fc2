//! The queued/playable media item and its timing fields.

use serde::{Deserialize, Serialize};

/// A queued or playable media item.
///
/// `id`, `title` and `time` come from whatever service the track was looked
/// up on; `owner`, `start` and `pause` are written by the playlist engine
/// while the track is queued or active. A `start` of `0.0` means the track
/// is not being timed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Service identity of the track. An empty id marks the track as
    /// invalid and the queue will refuse it.
    pub id: String,
    pub title: String,
    /// Nick of the user who queued or started the track.
    #[serde(default)]
    pub owner: String,
    /// Nominal duration in seconds.
    pub time: f64,
    /// Epoch seconds when playback began, `0.0` when not timed.
    #[serde(default)]
    pub start: f64,
    /// Elapsed-time snapshot taken when the track was paused, in seconds.
    #[serde(default)]
    pub pause: f64,
}

impl Track {
    /// Create an untimed, unowned track.
    pub fn new(id: impl Into<String>, title: impl Into<String>, time: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            owner: String::new(),
            time,
            start: 0.0,
            pause: 0.0,
        }
    }

    /// Whether the track carries a usable identity.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_track_starts_untimed_and_unowned() {
        let t = Track::new("abc123", "Some Song", 240.0);
        assert_eq!(t.id, "abc123");
        assert_eq!(t.title, "Some Song");
        assert_eq!(t.time, 240.0);
        assert!(t.owner.is_empty());
        assert_eq!(t.start, 0.0);
        assert_eq!(t.pause, 0.0);
    }

    #[test]
    fn has_id_rejects_empty_identity() {
        assert!(Track::new("x", "T", 1.0).has_id());
        assert!(!Track::new("", "T", 1.0).has_id());
    }
}
