use crate::interfaces::loader_interface::LoaderInterface;
use eframe::{egui, epi};
use helpers::buffer::RingBuffer;
use std::thread;
use std::time::Instant;
use telemetry::core::frame::{RaceData, RaceFrame};
use telemetry::core::playback::Playback;
use telemetry::core::viewport::Viewport;
use telemetry::interfaces::gui_interface::SessionLoad;
use telemetry::pre::demo::generate_demo_data;
use telemetry::pre::fetch::{fetch_race_data, HttpRaceDataApi};
use telemetry::pre::roster::TRACKS;
use telemetry::pre::session_opts::{SessionConfig, SessionOpts};

/// The screen currently shown by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Setup,
    Loading,
    Dashboard,
    Error,
}

/// DashboardApp is the egui application of the telemetry dashboard. It owns the loaded race data
/// together with the playback and viewport controllers and renders one of four screens (setup,
/// loading, dashboard, error) per UI update.
#[derive(Debug)]
pub struct DashboardApp {
    pub view: ViewState,
    pub backend_url: String,
    pub sel_year: u32,
    pub sel_track_idx: usize,
    pub config: SessionConfig,
    pub data: RaceData,
    pub playback: Playback,
    pub viewport: Viewport,
    pub selected_driver: Option<String>,
    pub loader: LoaderInterface,
    pub error_msg: String,
    pub epoch: Instant,
    pub prev_update: Instant,
    pub prev_update_durations: RingBuffer<u32>,
}

impl DashboardApp {
    pub fn new(session_opts: &SessionOpts) -> DashboardApp {
        let sel_track_idx = TRACKS
            .iter()
            .position(|t| t.id == session_opts.track)
            .unwrap_or(0);

        let mut app = DashboardApp {
            view: ViewState::Setup,
            backend_url: session_opts.backend_url.to_owned(),
            sel_year: session_opts.year,
            sel_track_idx,
            config: SessionConfig::from_opts(session_opts),
            data: RaceData::empty(),
            playback: Playback::default(),
            viewport: Viewport::default(),
            selected_driver: None,
            loader: LoaderInterface::default(),
            error_msg: String::new(),
            epoch: Instant::now(),
            prev_update: Instant::now(),
            prev_update_durations: RingBuffer::new(10),
        };

        if session_opts.demo {
            app.start_demo_load();
        }

        app
    }

    /// start_backend_load spawns a loader thread that fetches the race data of the currently
    /// selected session from the backend, and switches to the loading screen.
    pub fn start_backend_load(&mut self) {
        let config = SessionConfig {
            year: self.sel_year,
            track_id: TRACKS[self.sel_track_idx].id.to_owned(),
        };

        let (tx, rx) = flume::bounded(1);
        let url = self.backend_url.to_owned();
        let thread_config = config.clone();

        thread::spawn(move || {
            let api = HttpRaceDataApi::new(&url);
            let data = fetch_race_data(&api, thread_config.year, &thread_config.track_id);

            // the receiver may be gone if the app was closed meanwhile
            tx.send(SessionLoad {
                config: thread_config,
                data,
            })
            .ok();
        });

        self.config = config;
        self.loader = LoaderInterface::waiting(rx);
        self.view = ViewState::Loading;
    }

    /// start_demo_load spawns a loader thread that generates a synthetic demo session, and
    /// switches to the loading screen.
    pub fn start_demo_load(&mut self) {
        let config = SessionConfig {
            year: self.sel_year,
            track_id: String::from("demo"),
        };

        let (tx, rx) = flume::bounded(1);
        let thread_config = config.clone();

        thread::spawn(move || {
            tx.send(SessionLoad {
                config: thread_config,
                data: generate_demo_data(),
            })
            .ok();
        });

        self.config = config;
        self.loader = LoaderInterface::waiting(rx);
        self.view = ViewState::Loading;
    }

    /// apply_load installs the result of a finished data load. Empty race data switches to the
    /// error screen, everything else resets the controllers and enters the dashboard.
    pub fn apply_load(&mut self, load: SessionLoad) {
        self.config = load.config;

        if load.data.is_empty() {
            self.error_msg = format!(
                "No race data available for {} {}!",
                self.config.track_id, self.config.year
            );
            self.view = ViewState::Error;
            return;
        }

        self.data = load.data;
        self.playback.reset();
        self.viewport.set_auto_camera(true, &self.data.track);
        self.selected_driver = self.data.frames[0].drivers.first().map(|d| d.id.to_owned());
        self.view = ViewState::Dashboard;
    }

    /// current_frame returns the frame at the playback position.
    pub fn current_frame(&self) -> &RaceFrame {
        let frame_idx = self
            .playback
            .frame_idx()
            .min(self.data.frames.len().saturating_sub(1));

        &self.data.frames[frame_idx]
    }

    /// leader_laps collects the leader lap channel over all frames (used by the lap jump).
    pub fn leader_laps(&self) -> Vec<u32> {
        self.data.frames.iter().map(|f| f.leader_lap).collect()
    }
}

impl epi::App for DashboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame) {
        // check the loader channel for finished data loads
        if self.view == ViewState::Loading {
            if let Some(load) = self.loader.poll() {
                self.apply_load(load);
            }
        }

        // calculate current UI update duration, append it to the buffer, and set update time
        self.prev_update_durations
            .push(self.prev_update.elapsed().as_millis() as u32);
        self.prev_update = Instant::now();

        match self.view {
            ViewState::Setup => self.show_setup_screen(ctx),
            ViewState::Loading => self.show_loading_screen(ctx),
            ViewState::Error => self.show_error_screen(ctx),
            ViewState::Dashboard => {
                // advance the playback on the app-lifetime clock
                let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
                self.playback.tick(now_ms, self.data.frames.len());

                // spacebar toggles play/pause
                if ctx.input().key_pressed(egui::Key::Space) {
                    self.playback.toggle_play();
                }

                self.show_dashboard(ctx);
            }
        }

        // request repaint of the UI
        ctx.request_repaint();
    }

    fn name(&self) -> &str {
        "Race Telemetry"
    }
}
