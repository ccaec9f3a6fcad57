pub mod core;
pub mod interfaces;
pub mod pre;

#[cfg(test)]
mod playback_tests {
    use crate::core::playback::Playback;

    #[test]
    fn test_default_state() {
        let playback = Playback::default();

        assert_eq!(playback.frame_idx(), 0);
        assert!(!playback.is_playing());
        assert!(!playback.is_live());
        assert_eq!(playback.speed(), 1.0);
    }

    #[test]
    fn test_replay_advance_at_nominal_rate() {
        let mut playback = Playback::default();
        playback.toggle_play();

        // first tick only anchors the clock
        playback.tick(0.0, 1000);
        assert_eq!(playback.frame_idx(), 0);

        // 100 ms at 30 fps and speed 1 are three frames
        playback.tick(100.0, 1000);
        assert_eq!(playback.frame_idx(), 3);
    }

    #[test]
    fn test_replay_subframe_delta_does_not_advance() {
        let mut playback = Playback::default();
        playback.toggle_play();

        playback.tick(0.0, 1000);
        playback.tick(20.0, 1000);

        // 20 ms are 0.6 frames, below the advance threshold
        assert_eq!(playback.frame_idx(), 0);

        // the anchor was kept, so the accumulated 40 ms now advance one frame
        playback.tick(40.0, 1000);
        assert_eq!(playback.frame_idx(), 1);
    }

    #[test]
    fn test_replay_fractional_remainder_dropped() {
        let mut playback = Playback::default();
        playback.toggle_play();

        playback.tick(0.0, 1000);

        // 50 ms are 1.5 frames; the advance re-anchors and drops the half frame
        playback.tick(50.0, 1000);
        assert_eq!(playback.frame_idx(), 1);

        playback.tick(100.0, 1000);
        assert_eq!(playback.frame_idx(), 2);
    }

    #[test]
    fn test_replay_speed_multiplier() {
        let mut playback = Playback::default();
        playback.set_speed(4.0);
        playback.toggle_play();

        playback.tick(0.0, 1000);
        playback.tick(100.0, 1000);

        assert_eq!(playback.speed(), 4.0);
        assert_eq!(playback.frame_idx(), 12);
    }

    #[test]
    fn test_replay_wraps_to_start() {
        let mut playback = Playback::default();
        playback.seek(1.0, 10);
        assert_eq!(playback.frame_idx(), 9);

        playback.toggle_play();
        playback.tick(0.0, 10);
        playback.tick(100.0, 10);

        assert_eq!(playback.frame_idx(), 0);
    }

    #[test]
    fn test_paused_does_not_advance() {
        let mut playback = Playback::default();

        playback.tick(0.0, 1000);
        playback.tick(1000.0, 1000);

        assert_eq!(playback.frame_idx(), 0);
    }

    #[test]
    fn test_pause_resets_clock_anchor() {
        let mut playback = Playback::default();
        playback.toggle_play();

        playback.tick(0.0, 1000);
        playback.tick(100.0, 1000);
        assert_eq!(playback.frame_idx(), 3);

        playback.toggle_play();
        playback.tick(200.0, 1000);
        assert_eq!(playback.frame_idx(), 3);

        // the paused interval must not be counted after resuming
        playback.toggle_play();
        playback.tick(5000.0, 1000);
        playback.tick(5100.0, 1000);
        assert_eq!(playback.frame_idx(), 6);
    }

    #[test]
    fn test_enter_live_snaps_near_live_edge() {
        let mut playback = Playback::default();
        playback.toggle_live(1000);

        assert!(playback.is_live());
        assert!(playback.is_playing());
        assert_eq!(playback.speed(), 1.0);
        assert_eq!(playback.frame_idx(), 800);
    }

    #[test]
    fn test_enter_live_short_sequence_snaps_to_start() {
        let mut playback = Playback::default();
        playback.toggle_live(100);

        assert_eq!(playback.frame_idx(), 0);
    }

    #[test]
    fn test_live_advances_one_frame_per_tick() {
        let mut playback = Playback::default();
        playback.toggle_live(1000);

        playback.tick(0.0, 1000);
        playback.tick(250.0, 1000);

        // two whole ticks elapsed, the 50 ms remainder carries over
        assert_eq!(playback.frame_idx(), 802);

        playback.tick(450.0, 1000);
        assert_eq!(playback.frame_idx(), 804);
    }

    #[test]
    fn test_live_clamps_at_newest_frame() {
        let mut playback = Playback::default();
        playback.toggle_live(1000);

        playback.tick(0.0, 1000);
        playback.tick(100_000.0, 1000);

        assert_eq!(playback.frame_idx(), 999);
    }

    #[test]
    fn test_live_ignores_pause_and_speed() {
        let mut playback = Playback::default();
        playback.toggle_live(1000);

        playback.toggle_play();
        assert!(playback.is_playing());

        playback.set_speed(4.0);
        assert_eq!(playback.speed(), 1.0);

        playback.seek(0.0, 1000);
        assert_eq!(playback.frame_idx(), 800);
    }

    #[test]
    fn test_leave_live_pauses() {
        let mut playback = Playback::default();
        playback.toggle_live(1000);
        playback.toggle_live(1000);

        assert!(!playback.is_live());
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_seek_by_fraction() {
        let mut playback = Playback::default();

        playback.seek(0.5, 1001);
        assert_eq!(playback.frame_idx(), 500);

        playback.seek(2.0, 1001);
        assert_eq!(playback.frame_idx(), 1000);

        playback.seek(-1.0, 1001);
        assert_eq!(playback.frame_idx(), 0);
    }

    #[test]
    fn test_jump_to_lap() {
        let mut playback = Playback::default();
        playback.toggle_play();

        let leader_laps = [0, 0, 1, 1, 2, 3];
        playback.jump_to_lap(2, &leader_laps);

        assert_eq!(playback.frame_idx(), 2);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_jump_to_unreached_lap_only_pauses() {
        let mut playback = Playback::default();
        playback.seek(0.5, 11);
        playback.toggle_play();

        let leader_laps = [0, 0, 1];
        playback.jump_to_lap(50, &leader_laps);

        assert_eq!(playback.frame_idx(), 5);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_progress() {
        let mut playback = Playback::default();

        assert_eq!(playback.progress(0), 0.0);
        assert_eq!(playback.progress(1), 0.0);

        playback.seek(0.5, 11);
        assert_eq!(playback.progress(11), 0.5);
    }

    #[test]
    fn test_tick_without_frames_stays_at_zero() {
        let mut playback = Playback::default();
        playback.toggle_play();

        playback.tick(0.0, 0);
        playback.tick(1000.0, 0);

        assert_eq!(playback.frame_idx(), 0);
    }

    #[test]
    fn test_reset() {
        let mut playback = Playback::default();
        playback.toggle_live(1000);
        playback.reset();

        assert_eq!(playback.frame_idx(), 0);
        assert!(!playback.is_playing());
        assert!(!playback.is_live());
        assert_eq!(playback.speed(), 1.0);
    }
}


#[cfg(test)]
mod standings_tests {
    use crate::core::frame::{DriverState, TyreCompound};
    use crate::core::standings::{battle_gap, find_rival, gap_to_leader_secs, race_order};
    use crate::interfaces::gui_interface::RgbColor;
    use approx::assert_ulps_eq;
    use helpers::geometry::Point2d;

    fn test_driver(id: &str, total_distance: f64, speed: f64) -> DriverState {
        DriverState {
            id: id.to_owned(),
            name: id.to_owned(),
            team: String::new(),
            color: RgbColor::default(),
            pos: Point2d { x: 0.0, y: 0.0 },
            speed,
            rpm: 0.0,
            gear: 1,
            throttle: 0.0,
            brake: 0.0,
            drs: false,
            tyre_compound: TyreCompound::Soft,
            tyre_age: 0,
            lap: 1,
            lap_distance: 0.0,
            total_distance,
            is_pitting: false,
            current_sector: 1,
        }
    }

    #[test]
    fn test_race_order_leader_first() {
        let drivers = vec![
            test_driver("HAM", 5000.0, 200.0),
            test_driver("VER", 5400.0, 200.0),
            test_driver("LEC", 5200.0, 200.0),
        ];

        assert_eq!(race_order(&drivers), vec![1, 2, 0]);
    }

    #[test]
    fn test_race_order_ties_keep_source_order() {
        let drivers = vec![
            test_driver("HAM", 5000.0, 200.0),
            test_driver("VER", 5000.0, 200.0),
            test_driver("LEC", 5200.0, 200.0),
        ];

        assert_eq!(race_order(&drivers), vec![2, 0, 1]);
    }

    #[test]
    fn test_find_rival_prefers_closer_neighbor() {
        let drivers = vec![
            test_driver("VER", 5400.0, 200.0),
            test_driver("LEC", 5200.0, 200.0),
            test_driver("HAM", 5150.0, 200.0),
        ];
        let order = race_order(&drivers);

        // HAM is 50 m behind LEC, VER is 200 m ahead
        assert_eq!(find_rival(&drivers, &order, "LEC"), Some(2));
    }

    #[test]
    fn test_find_rival_tie_goes_to_driver_behind() {
        let drivers = vec![
            test_driver("VER", 5300.0, 200.0),
            test_driver("LEC", 5200.0, 200.0),
            test_driver("HAM", 5100.0, 200.0),
        ];
        let order = race_order(&drivers);

        // 100 m to either side, the driver behind wins the tie
        assert_eq!(find_rival(&drivers, &order, "LEC"), Some(2));
    }

    #[test]
    fn test_find_rival_at_field_edges() {
        let drivers = vec![
            test_driver("VER", 5400.0, 200.0),
            test_driver("LEC", 5200.0, 200.0),
        ];
        let order = race_order(&drivers);

        // the leader's rival is the driver behind, the last driver's rival the one ahead
        assert_eq!(find_rival(&drivers, &order, "VER"), Some(1));
        assert_eq!(find_rival(&drivers, &order, "LEC"), Some(0));
    }

    #[test]
    fn test_find_rival_alone_or_unknown() {
        let drivers = vec![test_driver("VER", 5400.0, 200.0)];
        let order = race_order(&drivers);

        assert_eq!(find_rival(&drivers, &order, "VER"), None);
        assert_eq!(find_rival(&drivers, &order, "XXX"), None);
    }

    #[test]
    fn test_gap_to_leader_secs() {
        let leader = test_driver("VER", 5400.0, 200.0);
        let chaser = test_driver("LEC", 5300.0, 50.0);

        assert_ulps_eq!(gap_to_leader_secs(&chaser, &leader), 2.0);
    }

    #[test]
    fn test_gap_to_leader_at_standstill_is_zero() {
        let leader = test_driver("VER", 5400.0, 200.0);
        let stopped = test_driver("LEC", 5300.0, 0.0);

        assert_ulps_eq!(gap_to_leader_secs(&stopped, &leader), 0.0);
    }

    #[test]
    fn test_battle_gap_is_absolute() {
        let a = test_driver("VER", 5400.0, 200.0);
        let b = test_driver("LEC", 5300.0, 200.0);

        assert_ulps_eq!(battle_gap(&a, &b), 100.0);
        assert_ulps_eq!(battle_gap(&b, &a), 100.0);
    }
}


#[cfg(test)]
mod frame_tests {
    use crate::core::frame::{
        parse_team_color, RawDriverState, RawFrame, RawRaceData, RaceData, TyreCompound,
        FALLBACK_COLOR,
    };
    use crate::interfaces::gui_interface::RgbColor;

    #[test]
    fn test_parse_team_color() {
        assert_eq!(
            parse_team_color("#3671C6"),
            RgbColor {
                r: 0x36,
                g: 0x71,
                b: 0xC6
            }
        );
        assert_eq!(parse_team_color("not a color"), FALLBACK_COLOR);
        assert_eq!(parse_team_color(""), FALLBACK_COLOR);
    }

    #[test]
    fn test_tyre_compound_classification() {
        assert_eq!(TyreCompound::from_label("SOFT"), TyreCompound::Soft);
        assert_eq!(TyreCompound::from_label("supersoft"), TyreCompound::Soft);
        assert_eq!(TyreCompound::from_label("Medium"), TyreCompound::Medium);
        assert_eq!(TyreCompound::from_label("HARD"), TyreCompound::Hard);
        assert_eq!(
            TyreCompound::from_label("INTERMEDIATE"),
            TyreCompound::Inter
        );
        assert_eq!(TyreCompound::from_label("WET"), TyreCompound::Wet);
        assert_eq!(TyreCompound::from_label("slick"), TyreCompound::Unknown);

        assert_eq!(TyreCompound::Soft.letter(), "S");
        assert_eq!(TyreCompound::Unknown.letter(), "?");
    }

    #[test]
    fn test_sparse_driver_payload_gets_defaults() {
        let raw: RawDriverState = serde_json::from_str(r#"{"id": "VER"}"#).unwrap();
        let driver = raw.normalize();

        assert_eq!(driver.id, "VER");
        assert_eq!(driver.tyre_compound, TyreCompound::Soft);
        assert_eq!(driver.current_sector, 1);
        assert_eq!(driver.lap, 0);
        assert_eq!(driver.total_distance, 0.0);
        assert!(!driver.is_pitting);
    }

    #[test]
    fn test_normalization_clamps_channels() {
        let raw: RawDriverState = serde_json::from_str(
            r#"{"id": "VER", "throttle": 150.0, "brake": -5.0, "currentSector": 7}"#,
        )
        .unwrap();
        let driver = raw.normalize();

        assert_eq!(driver.throttle, 100.0);
        assert_eq!(driver.brake, 0.0);
        assert_eq!(driver.current_sector, 3);
    }

    #[test]
    fn test_sector_owners_keyed_by_sector_number() {
        let raw: RawFrame = serde_json::from_str(
            r#"{"timestamp": 100, "sectorOwners": {"1": "VER", "3": "HAM"}}"#,
        )
        .unwrap();
        let frame = raw.normalize();

        assert_eq!(frame.sector_owners[0].as_deref(), Some("VER"));
        assert_eq!(frame.sector_owners[1], None);
        assert_eq!(frame.sector_owners[2].as_deref(), Some("HAM"));
    }

    #[test]
    fn test_race_data_from_raw_payload() {
        let raw: RawRaceData = serde_json::from_str(
            r#"{
                "trackPath": [{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 5.0}],
                "frames": [
                    {"timestamp": 0, "drivers": [{"id": "VER", "x": 1.0, "y": 2.0}],
                     "leaderLap": 1}
                ]
            }"#,
        )
        .unwrap();

        let data = RaceData::from_raw(raw);
        assert!(!data.is_empty());
        assert_eq!(data.track.len(), 2);
        assert_eq!(data.frames.len(), 1);
        assert_eq!(data.frames[0].leader_lap, 1);
        assert!(data.frames[0].driver("VER").is_some());
        assert!(data.frames[0].driver("HAM").is_none());
    }
}


#[cfg(test)]
mod check_session_opts_tests {
    use crate::pre::check_session_opts::check_session_opts;
    use crate::pre::session_opts::SessionOpts;

    fn test_opts() -> SessionOpts {
        SessionOpts {
            demo: false,
            year: 2024,
            track: String::from("bahrain"),
            backend_url: String::from("http://localhost:5000/api/race-data"),
        }
    }

    #[test]
    fn test_valid_opts_pass() {
        assert!(check_session_opts(&test_opts()).is_ok());
    }

    #[test]
    fn test_unknown_year_is_rejected() {
        let mut session_opts = test_opts();
        session_opts.year = 1950;

        assert!(check_session_opts(&session_opts).is_err());
    }

    #[test]
    fn test_unknown_track_is_rejected() {
        let mut session_opts = test_opts();
        session_opts.track = String::from("nordschleife");

        assert!(check_session_opts(&session_opts).is_err());
    }

    #[test]
    fn test_demo_skips_roster_checks() {
        let mut session_opts = test_opts();
        session_opts.demo = true;
        session_opts.year = 1950;
        session_opts.track = String::from("nordschleife");

        assert!(check_session_opts(&session_opts).is_ok());
    }
}
