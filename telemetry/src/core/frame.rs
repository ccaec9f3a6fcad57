use crate::core::track::TrackShape;
use crate::interfaces::gui_interface::RgbColor;
use helpers::geometry::Point2d;
use serde::Deserialize;

/// Fallback marker color if a team color string cannot be parsed.
pub const FALLBACK_COLOR: RgbColor = RgbColor {
    r: 0x33,
    g: 0x33,
    b: 0x33,
};

/// parse_team_color converts a CSS color string (e.g. "#3671C6") into an RGB color, falling back
/// to a neutral grey for unparsable input.
pub fn parse_team_color(color: &str) -> RgbColor {
    match color.parse::<css_color_parser::Color>() {
        Ok(c) => RgbColor {
            r: c.r,
            g: c.g,
            b: c.b,
        },
        Err(_) => FALLBACK_COLOR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TyreCompound {
    Soft,
    Medium,
    Hard,
    Inter,
    Wet,
    Unknown,
}

impl TyreCompound {
    /// from_label classifies a free-form compound label by case-insensitive substring match, such
    /// that e.g. "SOFT" and "SuperSoft" both map to Soft.
    pub fn from_label(label: &str) -> TyreCompound {
        let upper = label.to_uppercase();

        if upper.contains("SOFT") {
            TyreCompound::Soft
        } else if upper.contains("MEDIUM") {
            TyreCompound::Medium
        } else if upper.contains("HARD") {
            TyreCompound::Hard
        } else if upper.contains("INTER") {
            TyreCompound::Inter
        } else if upper.contains("WET") {
            TyreCompound::Wet
        } else {
            TyreCompound::Unknown
        }
    }

    /// letter returns the single-letter abbreviation shown in the standings list.
    pub fn letter(&self) -> &'static str {
        match self {
            TyreCompound::Soft => "S",
            TyreCompound::Medium => "M",
            TyreCompound::Hard => "H",
            TyreCompound::Inter => "I",
            TyreCompound::Wet => "W",
            TyreCompound::Unknown => "?",
        }
    }
}

/// DriverState is an immutable snapshot of one driver at one instant. It is owned exclusively by
/// the RaceFrame that contains it and never mutated after normalization.
#[derive(Debug, Clone)]
pub struct DriverState {
    pub id: String,
    pub name: String,
    pub team: String,
    pub color: RgbColor,
    pub pos: Point2d,
    pub speed: f64,
    pub rpm: f64,
    pub gear: u32,
    pub throttle: f64,
    pub brake: f64,
    pub drs: bool,
    pub tyre_compound: TyreCompound,
    pub tyre_age: u32,
    pub lap: u32,
    pub lap_distance: f64,
    pub total_distance: f64,
    pub is_pitting: bool,
    pub current_sector: u8,
}

/// RaceFrame is one snapshot of all drivers at one instant, the unit of playback. Frames are
/// produced once by the data load and held as a finite ordered sequence.
#[derive(Debug, Clone)]
pub struct RaceFrame {
    pub timestamp: u64,
    pub drivers: Vec<DriverState>,
    pub leader_lap: u32,
    pub sector_owners: [Option<String>; 3],
    pub pitting_drivers: Vec<String>,
}

impl Default for RaceFrame {
    fn default() -> Self {
        RaceFrame {
            timestamp: 0,
            drivers: vec![],
            leader_lap: 0,
            sector_owners: [None, None, None],
            pitting_drivers: vec![],
        }
    }
}

impl RaceFrame {
    /// driver returns the driver state with the given id, if present in this frame.
    pub fn driver(&self, id: &str) -> Option<&DriverState> {
        self.drivers.iter().find(|d| d.id == id)
    }
}

/// RaceData is the complete result of one data load (backend fetch or demo generation). An empty
/// frame list is the sole failure signal propagated to the UI layer.
#[derive(Debug, Default)]
pub struct RaceData {
    pub track: TrackShape,
    pub frames: Vec<RaceFrame>,
}

impl RaceData {
    pub fn empty() -> RaceData {
        RaceData::default()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn from_raw(raw: RawRaceData) -> RaceData {
        RaceData {
            track: TrackShape::new(raw.track_path),
            frames: raw.frames.iter().map(|f| f.normalize()).collect(),
        }
    }
}

// RAW PAYLOAD MIRRORS -----------------------------------------------------------------------------
// The collaborator payload may omit individual fields, which are therefore defaulted during
// deserialization and normalized afterward (throttle/brake clamped, sector clamped to 1..=3).

fn default_compound() -> String {
    String::from("SOFT")
}

fn default_sector() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDriverState {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub rpm: f64,
    #[serde(default)]
    pub gear: u32,
    #[serde(default)]
    pub throttle: f64,
    #[serde(default)]
    pub brake: f64,
    #[serde(default)]
    pub drs: bool,
    #[serde(default = "default_compound")]
    pub tyre_compound: String,
    #[serde(default)]
    pub tyre_age: u32,
    #[serde(default)]
    pub lap: u32,
    #[serde(default)]
    pub lap_distance: f64,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub is_pitting: bool,
    #[serde(default = "default_sector")]
    pub current_sector: u8,
}

impl RawDriverState {
    pub fn normalize(&self) -> DriverState {
        let compound = if self.tyre_compound.is_empty() {
            TyreCompound::Soft
        } else {
            TyreCompound::from_label(&self.tyre_compound)
        };

        DriverState {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            team: self.team.to_owned(),
            color: parse_team_color(&self.color),
            pos: Point2d {
                x: self.x,
                y: self.y,
            },
            speed: self.speed,
            rpm: self.rpm,
            gear: self.gear,
            throttle: self.throttle.max(0.0).min(100.0),
            brake: self.brake.max(0.0).min(100.0),
            drs: self.drs,
            tyre_compound: compound,
            tyre_age: self.tyre_age,
            lap: self.lap,
            lap_distance: self.lap_distance,
            total_distance: self.total_distance,
            is_pitting: self.is_pitting,
            current_sector: self.current_sector.max(1).min(3),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSectorOwners {
    #[serde(rename = "1", default)]
    pub s1: Option<String>,
    #[serde(rename = "2", default)]
    pub s2: Option<String>,
    #[serde(rename = "3", default)]
    pub s3: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrame {
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub drivers: Vec<RawDriverState>,
    #[serde(default)]
    pub leader_lap: u32,
    #[serde(default)]
    pub sector_owners: RawSectorOwners,
    #[serde(default)]
    pub pitting_drivers: Vec<String>,
}

impl RawFrame {
    pub fn normalize(&self) -> RaceFrame {
        RaceFrame {
            timestamp: self.timestamp,
            drivers: self.drivers.iter().map(|d| d.normalize()).collect(),
            leader_lap: self.leader_lap,
            sector_owners: [
                self.sector_owners.s1.to_owned(),
                self.sector_owners.s2.to_owned(),
                self.sector_owners.s3.to_owned(),
            ],
            pitting_drivers: self.pitting_drivers.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRaceData {
    #[serde(default)]
    pub track_path: Vec<Point2d>,
    #[serde(default)]
    pub frames: Vec<RawFrame>,
    #[serde(default)]
    pub error: Option<String>,
}
