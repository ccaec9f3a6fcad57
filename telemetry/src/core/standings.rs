use crate::core::frame::DriverState;
use helpers::general::{argsort, SortOrder};

/// race_order derives the running order of a frame as driver indices sorted by covered race
/// distance, leader first. Drivers with equal distance keep their source order (stable sort).
pub fn race_order(drivers: &[DriverState]) -> Vec<usize> {
    let distances: Vec<f64> = drivers.iter().map(|d| d.total_distance).collect();
    argsort(&distances, SortOrder::Descending)
}

/// gap_to_leader_secs estimates the time gap of a driver to the leader as the distance deficit
/// divided by the driver's current speed (0.0 for the leader himself or at standstill).
pub fn gap_to_leader_secs(driver: &DriverState, leader: &DriverState) -> f64 {
    if driver.speed <= 0.0 {
        return 0.0;
    }

    (leader.total_distance - driver.total_distance) / driver.speed
}

/// battle_gap returns the absolute distance gap between two drivers in world units.
pub fn battle_gap(a: &DriverState, b: &DriverState) -> f64 {
    (a.total_distance - b.total_distance).abs()
}

/// find_rival determines the on-track rival of the selected driver, i.e. the closer one of the
/// drivers directly ahead of and directly behind it in the running order (the driver behind wins
/// an exact tie). The returned value is an index into `drivers`. None if the driver is unknown or
/// runs alone.
pub fn find_rival(drivers: &[DriverState], order: &[usize], selected_id: &str) -> Option<usize> {
    let rank = order
        .iter()
        .position(|&idx| drivers[idx].id == selected_id)?;

    let ahead = if rank > 0 {
        Some(order[rank - 1])
    } else {
        None
    };
    let behind = order.get(rank + 1).copied();

    match (ahead, behind) {
        (Some(a), Some(b)) => {
            let gap_ahead = battle_gap(&drivers[order[rank]], &drivers[a]);
            let gap_behind = battle_gap(&drivers[order[rank]], &drivers[b]);

            if gap_ahead < gap_behind {
                Some(a)
            } else {
                Some(b)
            }
        }
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
