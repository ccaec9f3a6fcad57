use crate::core::track::TrackShape;

/// Padding added around the track bounding box during auto-fit, as a fraction of the larger box
/// dimension.
pub const AUTO_FIT_PADDING: f64 = 0.35;

/// Multiplicative width change of one zoom step.
pub const ZOOM_STEP: f64 = 1.15;

/// Narrowest allowed viewport width in world units (zoom-in limit).
pub const MIN_ZOOM_WIDTH: f64 = 500.0;

/// Widest allowed viewport width in world units (zoom-out limit).
pub const MAX_ZOOM_WIDTH: f64 = 50000.0;

/// Half extent of the fallback view used when no track shape is available.
const FALLBACK_HALF_EXTENT: f64 = 1000.0;

/// The Viewport controller owns the world-coordinate window that is mapped onto the track map
/// canvas. It starts in auto-camera mode (window follows the track bounding box) and drops to
/// manual mode permanently on the first pan or zoom gesture, until auto-camera is re-enabled
/// explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    auto_camera: bool,
}

impl Viewport {
    pub fn is_auto_camera(&self) -> bool {
        self.auto_camera
    }

    /// fit_to_track sets the window to the track bounding box plus a fixed relative padding on
    /// every side. Deterministic in the track shape alone, i.e. repeated calls with an unchanged
    /// track leave the window unchanged.
    pub fn fit_to_track(&mut self, track: &TrackShape) {
        let (x_min, x_max, y_min, y_max) = match track.bounding_box() {
            Some(bbox) => (bbox.x_min, bbox.x_max, bbox.y_min, bbox.y_max),
            None => (
                -FALLBACK_HALF_EXTENT,
                FALLBACK_HALF_EXTENT,
                -FALLBACK_HALF_EXTENT,
                FALLBACK_HALF_EXTENT,
            ),
        };

        let pad = helpers::general::max(&[x_max - x_min, y_max - y_min]) * AUTO_FIT_PADDING;

        self.x = x_min - pad;
        self.y = y_min - pad;
        self.width = (x_max - x_min) + 2.0 * pad;
        self.height = (y_max - y_min) + 2.0 * pad;
    }

    /// zoom applies one zoom step anchored at the given fractional position within the window
    /// (0.5/0.5 is the window center), i.e. the world point under the anchor stays under it. The
    /// resulting width is clamped to [MIN_ZOOM_WIDTH, MAX_ZOOM_WIDTH] and the height follows the
    /// clamped width such that the aspect ratio is preserved; a step whose clamped width equals
    /// the current width changes nothing. Any wheel gesture leaves auto-camera mode, clamped
    /// no-ops included.
    pub fn zoom(&mut self, anchor_frac_x: f64, anchor_frac_y: f64, zoom_in: bool) {
        self.auto_camera = false;

        let factor = if zoom_in {
            1.0 / ZOOM_STEP
        } else {
            ZOOM_STEP
        };

        let new_width = (self.width * factor)
            .max(MIN_ZOOM_WIDTH)
            .min(MAX_ZOOM_WIDTH);

        if new_width == self.width {
            return;
        }

        let new_height = self.height * new_width / self.width;

        // keep the world point under the anchor fixed
        self.x += anchor_frac_x * (self.width - new_width);
        self.y += anchor_frac_y * (self.height - new_height);
        self.width = new_width;
        self.height = new_height;
    }

    /// pan shifts the window by a screen-space drag delta (in pixels), scaled into world units via
    /// the current window-to-canvas ratio. The content follows the pointer, so the window moves
    /// against the drag direction. Any pan leaves auto-camera mode.
    pub fn pan(&mut self, drag_dx: f64, drag_dy: f64, canvas_width: f64, canvas_height: f64) {
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return;
        }

        self.x -= drag_dx * self.width / canvas_width;
        self.y -= drag_dy * self.height / canvas_height;
        self.auto_camera = false;
    }

    /// set_auto_camera enables or disables the auto camera. Enabling immediately refits the
    /// window to the track.
    pub fn set_auto_camera(&mut self, enabled: bool, track: &TrackShape) {
        self.auto_camera = enabled;

        if enabled {
            self.fit_to_track(track);
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            x: -FALLBACK_HALF_EXTENT,
            y: -FALLBACK_HALF_EXTENT,
            width: 2.0 * FALLBACK_HALF_EXTENT,
            height: 2.0 * FALLBACK_HALF_EXTENT,
            auto_camera: true,
        }
    }
}
