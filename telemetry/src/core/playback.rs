/// Nominal frame rate of the recorded sequence during replay.
pub const REPLAY_FPS: f64 = 30.0;

/// Fixed wall-clock period of one live-mode frame advance.
pub const LIVE_TICK_MS: f64 = 100.0;

/// Number of frames to rewind from the newest frame when entering live mode.
pub const LIVE_EDGE_REWIND_FRAMES: usize = 200;

/// Speed multipliers exposed by the transport controls.
pub const PLAYBACK_SPEEDS: [f64; 3] = [1.0, 2.0, 4.0];

/// The Playback controller owns the current frame index, play/pause state, speed multiplier, and
/// the live/replay mode flag, and advances the frame index from an injected time source.
///
/// Two mutually exclusive advance paths exist, selected by the `live` flag:
/// * `Replay` -> variable-rate advance driven by the display-refresh callback; the index wraps to
/// 0 at the end of the sequence (loop).
/// * `Live` -> one frame per fixed wall-clock tick, speed forced to 1; the index clamps at the
/// newest frame instead of wrapping.
///
/// All methods take the current time as milliseconds on a caller-owned monotonic clock, so the
/// controller itself holds no timers and can be driven deterministically in tests.
#[derive(Debug)]
pub struct Playback {
    frame_idx: usize,
    playing: bool,
    speed: f64,
    live: bool,
    // anchor of the last whole-frame advance in replay mode (sub-frame deltas accumulate
    // implicitly via this timestamp and are dropped on advance, not carried over)
    replay_anchor_ms: Option<f64>,
    // anchor of the live-mode tick raster
    live_anchor_ms: Option<f64>,
}

impl Playback {
    pub fn frame_idx(&self) -> usize {
        self.frame_idx
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// reset returns the controller to frame 0, paused, replay mode. Must be called whenever new
    /// race data is loaded.
    pub fn reset(&mut self) {
        *self = Playback::default();
    }

    /// tick advances the frame index according to the active mode. It is called once per GUI
    /// update; `frame_count` is the length of the loaded frame sequence.
    pub fn tick(&mut self, now_ms: f64, frame_count: usize) {
        if frame_count == 0 {
            self.frame_idx = 0;
            return;
        }

        if self.live {
            self.tick_live(now_ms, frame_count)
        } else {
            self.tick_replay(now_ms, frame_count)
        }
    }

    fn tick_replay(&mut self, now_ms: f64, frame_count: usize) {
        if !self.playing {
            self.replay_anchor_ms = None;
            return;
        }

        let anchor_ms = match self.replay_anchor_ms {
            Some(x) => x,
            None => {
                // first tick after (re)starting playback only sets the anchor
                self.replay_anchor_ms = Some(now_ms);
                return;
            }
        };

        // convert the wall-clock delta into a frame count under the speed multiplier
        let frames_to_advance = (now_ms - anchor_ms) / 1000.0 * REPLAY_FPS * self.speed;

        if frames_to_advance >= 1.0 {
            let next = self.frame_idx + frames_to_advance as usize;

            // wrap to 0 when the end of the recorded sequence is reached (loop)
            if next >= frame_count - 1 {
                self.frame_idx = 0;
            } else {
                self.frame_idx = next;
            }

            self.replay_anchor_ms = Some(now_ms);
        }
    }

    fn tick_live(&mut self, now_ms: f64, frame_count: usize) {
        self.playing = true;
        self.speed = 1.0;

        let anchor_ms = match self.live_anchor_ms {
            Some(x) => x,
            None => {
                self.live_anchor_ms = Some(now_ms);
                return;
            }
        };

        let ticks = ((now_ms - anchor_ms) / LIVE_TICK_MS) as usize;

        if ticks > 0 {
            // advance one frame per elapsed tick and clamp at the newest frame (no wrap - live
            // mode stalls at the end rather than looping)
            self.frame_idx = (self.frame_idx + ticks).min(frame_count - 1);

            // advance the anchor by whole ticks such that the remainder carries over
            self.live_anchor_ms = Some(anchor_ms + ticks as f64 * LIVE_TICK_MS);
        }
    }

    /// toggle_play flips play/pause. Disallowed while live (play is forced true in live mode).
    pub fn toggle_play(&mut self) {
        if self.live {
            return;
        }

        self.playing = !self.playing;

        if !self.playing {
            self.replay_anchor_ms = None;
        }
    }

    /// set_speed sets the replay speed multiplier. Ignored while live (forced to 1).
    pub fn set_speed(&mut self, speed: f64) {
        if self.live || speed <= 0.0 {
            return;
        }
        self.speed = speed;
    }

    /// toggle_live switches between replay and live mode. Entering live mode snaps the frame
    /// index near the live edge and forces play; leaving live mode forces pause.
    pub fn toggle_live(&mut self, frame_count: usize) {
        self.live = !self.live;
        self.replay_anchor_ms = None;
        self.live_anchor_ms = None;

        if self.live {
            if frame_count > 0 {
                self.frame_idx = frame_count.saturating_sub(LIVE_EDGE_REWIND_FRAMES);
            } else {
                self.frame_idx = 0;
            }
            self.playing = true;
            self.speed = 1.0;
        } else {
            self.playing = false;
        }
    }

    /// seek jumps to the frame at the given fraction [0, 1] of the sequence. Usable only outside
    /// live mode.
    pub fn seek(&mut self, fraction: f64, frame_count: usize) {
        if self.live || frame_count == 0 {
            return;
        }

        let fraction = fraction.max(0.0).min(1.0);
        self.frame_idx = (fraction * (frame_count - 1) as f64) as usize;
        self.replay_anchor_ms = None;
    }

    /// jump_to_lap jumps to the first frame in which the race leader has reached the given lap,
    /// and forces pause. A no-op if no such frame exists.
    pub fn jump_to_lap(&mut self, lap: u32, leader_laps: &[u32]) {
        if leader_laps.is_empty() {
            return;
        }

        if let Some(idx) = leader_laps
            .iter()
            .position(|&leader_lap| leader_lap + 1 >= lap)
        {
            self.frame_idx = idx;
        }

        self.playing = false;
        self.replay_anchor_ms = None;
    }

    /// progress returns the played fraction of the sequence in [0, 1] (0 for sequences with less
    /// than two frames).
    pub fn progress(&self, frame_count: usize) -> f64 {
        if frame_count > 1 {
            self.frame_idx as f64 / (frame_count - 1) as f64
        } else {
            0.0
        }
    }
}

impl Default for Playback {
    fn default() -> Self {
        Playback {
            frame_idx: 0,
            playing: false,
            speed: 1.0,
            live: false,
            replay_anchor_ms: None,
            live_anchor_ms: None,
        }
    }
}
