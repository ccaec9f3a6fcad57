use crate::core::frame::{DriverState, RaceData, RaceFrame, TyreCompound};
use crate::core::track::TrackShape;
use crate::pre::roster::ALL_DRIVERS;
use helpers::geometry::Point2d;
use rand::Rng;

/// Number of centerline segments of the synthetic demo track.
pub const DEMO_TRACK_POINTS: usize = 800;

/// Number of frames of the synthetic demo session (100 ms raster, i.e. 100 s of data).
pub const DEMO_FRAME_COUNT: usize = 1000;

// lookahead and threshold of the corner heuristic (a point whose 10-points-ahead neighbor is
// close by lies on a tightly curved part of the centerline)
const CORNER_LOOKAHEAD: usize = 10;
const CORNER_DIST_THRESHOLD: f64 = 20.0;

/// demo_track generates the closed figure-eight centerline of the demo session.
pub fn demo_track() -> TrackShape {
    let mut centerline = Vec::with_capacity(DEMO_TRACK_POINTS + 1);

    for i in 0..=DEMO_TRACK_POINTS {
        let t = i as f64 / DEMO_TRACK_POINTS as f64 * 2.0 * std::f64::consts::PI;

        centerline.push(Point2d {
            x: 1200.0 * t.sin() + 1500.0,
            y: 800.0 * (2.0 * t).sin() + 1000.0,
        });
    }

    TrackShape::new(centerline)
}

/// is_corner_point checks whether the given centerline index lies within a corner section.
fn is_corner_point(track: &TrackShape, idx: usize) -> bool {
    let n = track.len();

    if n == 0 {
        return false;
    }

    let ahead = (idx + CORNER_LOOKAHEAD) % n;
    track.centerline[idx].dist(&track.centerline[ahead]) < CORNER_DIST_THRESHOLD
}

/// generate_demo_data creates a complete synthetic race session with a figure-eight track and the
/// full driver field. The drivers run staggered around the centerline with slightly different
/// paces, such that the running order, gaps, and battles evolve over the session.
pub fn generate_demo_data() -> RaceData {
    let mut rng = rand::thread_rng();
    let track = demo_track();
    let n_points = DEMO_TRACK_POINTS;

    // cumulative arc length along the centerline, used for the distance channels
    let mut arc_lengths = Vec::with_capacity(n_points + 1);
    arc_lengths.push(0.0);

    for i in 1..track.len() {
        let segment = track.centerline[i - 1].dist(&track.centerline[i]);
        arc_lengths.push(arc_lengths[i - 1] + segment);
    }

    let track_length = arc_lengths[n_points];

    // per-driver running state (fractional centerline index and completed laps)
    let spacing = n_points as f64 / ALL_DRIVERS.len() as f64 * 0.8;
    let mut point_pos: Vec<f64> = (0..ALL_DRIVERS.len())
        .map(|idx| n_points as f64 - idx as f64 * spacing)
        .collect();
    let mut laps = vec![0u32; ALL_DRIVERS.len()];

    let mut frames = Vec::with_capacity(DEMO_FRAME_COUNT);

    for frame_idx in 0..DEMO_FRAME_COUNT {
        let mut drivers = Vec::with_capacity(ALL_DRIVERS.len());

        for (idx, info) in ALL_DRIVERS.iter().enumerate() {
            let point_idx = point_pos[idx] as usize % n_points;
            let corner = is_corner_point(&track, point_idx);

            // speed band by track section plus noise, slightly faster for drivers ahead in the
            // roster so that the field spreads out over the session
            let pace = 1.0 - idx as f64 * 0.004;
            let speed = if corner {
                rng.gen_range(80.0..140.0) * pace
            } else {
                rng.gen_range(250.0..330.0) * pace
            };

            let throttle = if corner {
                rng.gen_range(20.0..55.0)
            } else {
                rng.gen_range(85.0..100.0)
            };
            let brake = if corner {
                rng.gen_range(40.0..90.0)
            } else {
                0.0
            };

            let lap_distance = arc_lengths[point_idx];
            let total_distance = laps[idx] as f64 * track_length + lap_distance;
            let sector_frac = point_idx as f64 / n_points as f64;
            let current_sector = if sector_frac < 1.0 / 3.0 {
                1
            } else if sector_frac < 2.0 / 3.0 {
                2
            } else {
                3
            };

            drivers.push(DriverState {
                id: info.id.to_owned(),
                name: info.name.to_owned(),
                team: info.team.to_owned(),
                color: crate::core::frame::parse_team_color(info.color),
                pos: track.centerline[point_idx].to_owned(),
                speed,
                rpm: 10000.0 + 20.0 * speed,
                gear: ((speed / 40.0) as u32).max(1).min(8),
                throttle,
                brake,
                drs: !corner && idx != 0 && rng.gen_bool(0.3),
                tyre_compound: match idx % 3 {
                    0 => TyreCompound::Soft,
                    1 => TyreCompound::Medium,
                    _ => TyreCompound::Hard,
                },
                tyre_age: laps[idx],
                lap: laps[idx] + 1,
                lap_distance,
                total_distance,
                is_pitting: false,
                current_sector,
            });

            // advance the driver along the centerline (faster in corners would be wrong, so the
            // step follows the speed channel)
            let step = speed / 330.0 * 2.5 * pace;
            point_pos[idx] += step;

            if point_pos[idx] >= n_points as f64 {
                point_pos[idx] -= n_points as f64;
                laps[idx] += 1;
            }
        }

        let leader_lap = drivers.iter().map(|d| d.lap).max().unwrap_or(1);

        frames.push(RaceFrame {
            timestamp: frame_idx as u64 * 100,
            drivers,
            leader_lap,
            sector_owners: [
                Some(String::from("VER")),
                Some(String::from("LEC")),
                Some(String::from("HAM")),
            ],
            pitting_drivers: vec![],
        });
    }

    RaceData { track, frames }
}
