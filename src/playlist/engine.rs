//! The playlist engine: one linear queue and one "now playing" cursor.
//!
//! `Playlist` owns an ordered list of tracks, an index marking the next
//! entry to serve, and the track currently being timed. Entries are never
//! removed when played; the cursor just moves past them. The current track
//! is an owned copy of whatever was started, so external holds on queue
//! entries never see timing fields change underneath them.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::clock::{Clock, WallClock};
use crate::track::Track;

/// Errors from the transport operations (`play`, `replay`, `pause`, `stop`).
///
/// Everything else on the engine signals absence with `Option`/`bool`
/// instead of failing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistError {
    /// A transport operation was called while no track was current.
    #[error("no active track")]
    NoActiveTrack,
}

/// Outcome of a [`Playlist::delete`] call, shaped for user-facing messages.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    /// First deleted index, set only for range deletions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<usize>,
    /// Last deleted index, set only for range deletions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<usize>,
    /// Title of the removed track when exactly one entry was deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_title: Option<String>,
    /// Every index actually removed, ascending.
    pub deleted_indexes: Vec<usize>,
}

impl DeleteResult {
    /// Number of entries that were removed.
    pub fn deleted_len(&self) -> usize {
        self.deleted_indexes.len()
    }
}

/// Ordered playback queue with a monotonically advancing cursor and a
/// single timed "current" track.
///
/// Invariants: `cursor <= tracks.len()` at all times, and a paused engine
/// always has a current track. The engine is synchronous and does no I/O;
/// a multi-threaded host must wrap it in its own lock.
pub struct Playlist<C: Clock = WallClock> {
    tracks: Vec<Track>,
    /// Boundary between already-served and not-yet-served entries.
    cursor: usize,
    /// Owned copy of the track being timed, if any.
    current: Option<Track>,
    paused: bool,
    clock: C,
}

impl Playlist<WallClock> {
    /// Create an empty playlist timed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(WallClock)
    }
}

impl Default for Playlist<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Playlist<C> {
    /// Create an empty playlist with a caller-provided time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tracks: Vec::new(),
            cursor: 0,
            current: None,
            paused: false,
            clock,
        }
    }

    // ---- queue mutation ----

    /// Queue a track, stamping `owner` onto it.
    ///
    /// Tracks without an id are refused and the queue is left untouched;
    /// the caller must check the return value.
    pub fn add(&mut self, owner: &str, mut track: Track) -> Option<&Track> {
        if !track.has_id() {
            return None;
        }
        track.owner = owner.to_string();
        debug!(id = %track.id, title = %track.title, "queued track");
        self.tracks.push(track);
        self.tracks.last()
    }

    /// Queue several tracks in order, applying the per-track id check.
    ///
    /// Returns how many tracks were actually accepted.
    pub fn add_all(&mut self, owner: &str, tracks: Vec<Track>) -> usize {
        let mut accepted = 0;
        for track in tracks {
            if self.add(owner, track).is_some() {
                accepted += 1;
            }
        }
        accepted
    }

    /// Drop every queued entry and reset the cursor.
    ///
    /// Returns `true` if there was anything to drop. The current track and
    /// pause state are untouched.
    pub fn clear(&mut self) -> bool {
        if self.tracks.is_empty() {
            return false;
        }
        debug!(dropped = self.tracks.len(), "cleared queue");
        self.tracks.clear();
        self.cursor = 0;
        true
    }

    /// Delete queued entries by index.
    ///
    /// Only indexes at or past the cursor qualify; entries already served
    /// are protected. Deletion runs in descending index order so earlier
    /// removals cannot shift later ones. Duplicate indexes are ignored.
    ///
    /// With `by_range` the result records the first and last deleted index;
    /// otherwise a single deletion records that track's title. `None` when
    /// no index qualified.
    pub fn delete(&mut self, indexes: &[usize], by_range: bool) -> Option<DeleteResult> {
        let mut wanted = indexes.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        let mut removed: Vec<(usize, String)> = Vec::new();
        for &i in wanted.iter().rev() {
            if self.cursor <= i && i < self.tracks.len() {
                let track = self.tracks.remove(i);
                removed.push((i, track.title));
            }
        }
        removed.reverse();

        if removed.is_empty() {
            return None;
        }

        let deleted_indexes: Vec<usize> = removed.iter().map(|&(i, _)| i).collect();
        let mut result = DeleteResult {
            from: None,
            to: None,
            track_title: None,
            deleted_indexes,
        };
        if by_range {
            result.from = result.deleted_indexes.first().copied();
            result.to = result.deleted_indexes.last().copied();
        } else if removed.len() == 1 {
            result.track_title = removed.pop().map(|(_, title)| title);
        }
        debug!(deleted = result.deleted_len(), "deleted queue entries");
        Some(result)
    }

    // ---- playback sequencing ----

    /// Serve the next queued track: make it current, stamp its start time
    /// and move the cursor past it. `None` once the queue is exhausted.
    ///
    /// Entries stay in the list after being served; only the cursor moves.
    pub fn advance(&mut self) -> Option<Track> {
        let now = self.clock.now();
        // Out-of-range cursor (queue exhausted) falls out of `get` as None.
        let mut next = self.tracks.get(self.cursor)?.clone();
        next.start = now;
        self.current = Some(next.clone());
        self.cursor += 1;
        debug!(id = %next.id, cursor = self.cursor, "advanced to next track");
        Some(next)
    }

    /// Whether the cursor sits at or past the last entry.
    /// `None` when the queue is empty.
    pub fn is_last_track(&self) -> Option<bool> {
        if self.tracks.is_empty() {
            return None;
        }
        Some(self.cursor >= self.tracks.len())
    }

    /// Total queued entries and how many have not yet been served.
    /// `None` when the queue is empty.
    pub fn queue_info(&self) -> Option<(usize, usize)> {
        if self.tracks.is_empty() {
            return None;
        }
        Some((self.tracks.len(), self.tracks.len() - self.cursor))
    }

    /// Up to `amount` `(index, track)` pairs, starting at the cursor or at
    /// the head of the queue.
    pub fn peek(&self, amount: usize, from_cursor: bool) -> Vec<(usize, &Track)> {
        let start = if from_cursor { self.cursor } else { 0 };
        self.tracks
            .iter()
            .enumerate()
            .skip(start)
            .take(amount)
            .collect()
    }

    /// Look at the entry `jump` positions relative to the cursor, or at the
    /// cursor itself when `jump` is zero. Out-of-bounds in either direction
    /// yields `None`.
    pub fn peek_at(&self, jump: isize) -> Option<(usize, &Track)> {
        let index = if jump != 0 {
            usize::try_from(self.cursor as isize + jump).ok()?
        } else {
            self.cursor
        };
        self.tracks.get(index).map(|track| (index, track))
    }

    // ---- timing & transport ----

    /// Unconditionally make `track` the current track and start timing it.
    ///
    /// The queue and cursor are untouched; this is how the host plays a
    /// track that was never queued.
    pub fn start(&mut self, owner: &str, track: Track) -> &Track {
        let now = self.clock.now();
        self.paused = false;
        debug!(id = %track.id, owner, "started track");
        let current = self.current.insert(track);
        current.owner = owner.to_string();
        current.start = now;
        &*current
    }

    /// Resume or seek the current track to `offset` seconds in.
    /// Returns the remaining play time.
    pub fn play(&mut self, offset: f64) -> Result<f64, PlaylistError> {
        let now = self.clock.now();
        let current = self.current.as_mut().ok_or(PlaylistError::NoActiveTrack)?;
        current.start = now - offset;
        self.paused = false;
        Ok(self.remaining())
    }

    /// Restart the current track from zero.
    pub fn replay(&mut self) -> Result<&Track, PlaylistError> {
        let now = self.clock.now();
        let current = self.current.as_mut().ok_or(PlaylistError::NoActiveTrack)?;
        current.start = now;
        self.paused = false;
        Ok(&*current)
    }

    /// Pause the current track, snapshotting the elapsed time so it holds
    /// steady while paused. A nonzero `offset` pins the pause point
    /// explicitly instead. Returns the stored pause point.
    pub fn pause(&mut self, offset: f64) -> Result<f64, PlaylistError> {
        let now = self.clock.now();
        let current = self.current.as_mut().ok_or(PlaylistError::NoActiveTrack)?;
        current.pause = if offset != 0.0 {
            offset
        } else {
            now - current.start
        };
        self.paused = true;
        Ok(current.pause)
    }

    /// Stop timing the current track: clears the pause flag and zeroes its
    /// start and pause fields. The track itself stays current.
    pub fn stop(&mut self) -> Result<(), PlaylistError> {
        let current = self.current.as_mut().ok_or(PlaylistError::NoActiveTrack)?;
        current.start = 0.0;
        current.pause = 0.0;
        self.paused = false;
        debug!("stopped track");
        Ok(())
    }

    // ---- timing queries ----

    /// Elapsed play time of the current track, in seconds.
    ///
    /// Zero with no current track. While paused this is the stored pause
    /// point, frozen regardless of the clock. A reading past the nominal
    /// duration reads as zero: the track is over, not "very elapsed".
    pub fn elapsed(&self) -> f64 {
        let Some(current) = self.current.as_ref() else {
            return 0.0;
        };
        if self.paused {
            return current.pause;
        }
        let elapsed = self.clock.now() - current.start;
        if elapsed > current.time { 0.0 } else { elapsed }
    }

    /// Remaining play time of the current track, zero with no current track.
    pub fn remaining(&self) -> f64 {
        match self.current.as_ref() {
            Some(current) => current.time - self.elapsed(),
            None => 0.0,
        }
    }

    /// Whether a track is actively playing or paused.
    pub fn has_active_track(&self) -> bool {
        if self.paused {
            return true;
        }
        self.elapsed() > 0.0
    }

    // ---- accessors ----

    /// The track currently being timed, if any.
    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Index of the next entry to serve.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the last queued entry, zero when the queue is empty.
    pub fn last_index(&self) -> usize {
        self.tracks.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
