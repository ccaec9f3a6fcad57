use crate::core::gui::{DashboardApp, ViewState};
use crate::core::trackmap::to_color32;
use eframe::egui;
use telemetry::core::frame::TyreCompound;
use telemetry::core::playback::PLAYBACK_SPEEDS;
use telemetry::core::standings::{battle_gap, find_rival, gap_to_leader_secs, race_order};
use telemetry::pre::roster::{TRACKS, YEARS};

/// compound_color returns the display color of a tyre compound.
pub fn compound_color(compound: TyreCompound) -> egui::Color32 {
    match compound {
        TyreCompound::Soft => egui::Color32::from_rgb(255, 60, 60),
        TyreCompound::Medium => egui::Color32::from_rgb(255, 210, 50),
        TyreCompound::Hard => egui::Color32::from_gray(230),
        TyreCompound::Inter => egui::Color32::from_rgb(60, 200, 60),
        TyreCompound::Wet => egui::Color32::from_rgb(60, 120, 255),
        TyreCompound::Unknown => egui::Color32::GRAY,
    }
}

struct StandingsRow {
    id: String,
    label: String,
    tyre_letter: &'static str,
    tyre_color: egui::Color32,
    team_color: egui::Color32,
    is_selected: bool,
}

impl DashboardApp {
    // SCREENS -------------------------------------------------------------------------------------

    pub fn show_setup_screen(&mut self, ctx: &egui::CtxRef) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Race Telemetry");
                ui.add_space(20.0);
            });

            egui::Grid::new("setup_grid").num_columns(2).show(ui, |ui| {
                ui.label("Season:");
                egui::ComboBox::from_id_source("year_select")
                    .selected_text(format!("{}", self.sel_year))
                    .show_ui(ui, |ui| {
                        for &year in YEARS.iter() {
                            ui.selectable_value(&mut self.sel_year, year, format!("{}", year));
                        }
                    });
                ui.end_row();

                ui.label("Track:");
                egui::ComboBox::from_id_source("track_select")
                    .selected_text(TRACKS[self.sel_track_idx].name)
                    .show_ui(ui, |ui| {
                        for (i, track) in TRACKS.iter().enumerate() {
                            ui.selectable_value(
                                &mut self.sel_track_idx,
                                i,
                                format!("{} ({})", track.name, track.country),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Backend:");
                ui.text_edit_singleline(&mut self.backend_url);
                ui.end_row();
            });

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                if ui.button("Load race").clicked() {
                    self.start_backend_load();
                }
                if ui.button("Demo session").clicked() {
                    self.start_demo_load();
                }
            });
        });
    }

    pub fn show_loading_screen(&mut self, ctx: &egui::CtxRef) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("Loading race data...");
                ui.add_space(10.0);
                ui.label(format!(
                    "{} {}",
                    self.config.track_id, self.config.year
                ));
            });
        });
    }

    pub fn show_error_screen(&mut self, ctx: &egui::CtxRef) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.add(egui::Label::new("Data load failed").heading().text_color(egui::Color32::RED));
                ui.add_space(10.0);
                ui.label(&self.error_msg);
                ui.add_space(20.0);

                ui.horizontal(|ui| {
                    if ui.button("Retry").clicked() {
                        if self.config.track_id == "demo" {
                            self.start_demo_load();
                        } else {
                            self.start_backend_load();
                        }
                    }
                    if ui.button("Back to setup").clicked() {
                        self.view = ViewState::Setup;
                    }
                });
            });
        });
    }

    pub fn show_dashboard(&mut self, ctx: &egui::CtxRef) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} {}", self.config.track_id, self.config.year));
                ui.separator();
                ui.label(format!("Lap {}", self.current_frame().leader_lap.max(1)));
                ui.separator();

                if self.playback.is_live() {
                    ui.add(egui::Label::new("LIVE").text_color(egui::Color32::RED));
                } else {
                    ui.add(egui::Label::new("REPLAY").text_color(egui::Color32::GRAY));
                }
            });
        });

        egui::SidePanel::left("standings_panel")
            .default_width(230.0)
            .show(ctx, |ui| {
                self.set_standings_content(ui);
            });

        egui::TopBottomPanel::bottom("controls_panel").show(ctx, |ui| {
            self.set_controls_content(ui);
        });

        egui::TopBottomPanel::bottom("telemetry_panel").show(ctx, |ui| {
            self.set_telemetry_content(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
                self.set_track_map_content(ui);
            });
        });
    }

    // STANDINGS PANEL -----------------------------------------------------------------------------

    pub fn set_standings_content(&mut self, ui: &mut egui::Ui) {
        ui.heading("Standings");
        ui.separator();

        // collect the rows up front, the rendering loop below must not borrow the race data
        let frame = self.current_frame();

        if frame.drivers.is_empty() {
            ui.label("No drivers in this frame");
            return;
        }

        let order = race_order(&frame.drivers);
        let leader = &frame.drivers[order[0]];

        let rows: Vec<StandingsRow> = order
            .iter()
            .enumerate()
            .map(|(rank, &driver_idx)| {
                let driver = &frame.drivers[driver_idx];
                let gap_text = if rank == 0 {
                    String::from("Leader")
                } else {
                    format!("+{:.1}s", gap_to_leader_secs(driver, leader))
                };

                StandingsRow {
                    id: driver.id.to_owned(),
                    label: format!("{:>2}  {}  {}", rank + 1, driver.id, gap_text),
                    tyre_letter: driver.tyre_compound.letter(),
                    tyre_color: compound_color(driver.tyre_compound),
                    team_color: to_color32(&driver.color),
                    is_selected: self.selected_driver.as_deref() == Some(driver.id.as_str()),
                }
            })
            .collect();

        egui::ScrollArea::auto_sized().show(ui, |ui| {
            for row in rows.iter() {
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new("●").text_color(row.team_color));

                    if ui
                        .selectable_label(row.is_selected, &row.label)
                        .clicked()
                    {
                        self.selected_driver = Some(row.id.to_owned());
                    }

                    ui.add(
                        egui::Label::new(row.tyre_letter)
                            .monospace()
                            .text_color(row.tyre_color),
                    );
                });
            }
        });
    }

    // TELEMETRY PANEL -----------------------------------------------------------------------------

    pub fn set_telemetry_content(&mut self, ui: &mut egui::Ui) {
        let frame = self.current_frame();
        let selected = self
            .selected_driver
            .as_ref()
            .and_then(|id| frame.driver(id));

        let driver = match selected {
            Some(x) => x,
            None => {
                // selected driver not present in this frame (e.g. dropped out of the feed)
                ui.add(
                    egui::Label::new("No signal")
                        .heading()
                        .text_color(egui::Color32::GRAY),
                );
                return;
            }
        };

        ui.horizontal(|ui| {
            // identity and gearbox channels
            ui.vertical(|ui| {
                ui.add(egui::Label::new(&driver.name).heading().text_color(to_color32(&driver.color)));
                ui.label(&driver.team);
                ui.monospace(format!(
                    "{:>3.0} km/h   {:>5.0} rpm   gear {}",
                    driver.speed, driver.rpm, driver.gear
                ));
                ui.monospace(format!(
                    "lap {}   sector {}",
                    driver.lap, driver.current_sector
                ));
            });

            ui.separator();

            // pedal channels
            ui.vertical(|ui| {
                ui.add(
                    egui::ProgressBar::new((driver.throttle / 100.0) as f32)
                        .text(format!("throttle {:.0}%", driver.throttle)),
                );
                ui.add(
                    egui::ProgressBar::new((driver.brake / 100.0) as f32)
                        .text(format!("brake {:.0}%", driver.brake)),
                );
            });

            ui.separator();

            // tyre and status
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(format!(
                        "{} ({} laps)",
                        driver.tyre_compound.letter(),
                        driver.tyre_age
                    ))
                    .monospace()
                    .text_color(compound_color(driver.tyre_compound)),
                );

                if driver.drs {
                    ui.add(egui::Label::new("DRS").text_color(egui::Color32::GREEN));
                }
                if driver.is_pitting {
                    ui.add(egui::Label::new("PIT").text_color(egui::Color32::LIGHT_BLUE));
                }
            });

            ui.separator();

            // rival intel
            ui.vertical(|ui| {
                let order = race_order(&frame.drivers);

                match find_rival(&frame.drivers, &order, &driver.id) {
                    Some(rival_idx) => {
                        let rival = &frame.drivers[rival_idx];

                        ui.add(
                            egui::Label::new(format!("Rival: {}", rival.id))
                                .text_color(to_color32(&rival.color)),
                        );
                        ui.monospace(format!("gap {:.0} m", battle_gap(driver, rival)));
                        ui.monospace(format!(
                            "{:>3.0} km/h   gear {}   tyre {} lap(s)",
                            rival.speed, rival.gear, rival.tyre_age
                        ));
                    }
                    None => {
                        ui.label("No rival in range");
                    }
                }
            });
        });
    }

    // CONTROLS PANEL ------------------------------------------------------------------------------

    pub fn set_controls_content(&mut self, ui: &mut egui::Ui) {
        let frame_count = self.data.frames.len();
        let leader_laps = self.leader_laps();
        let max_lap = leader_laps.iter().max().copied().unwrap_or(1).max(1);

        ui.horizontal(|ui| {
            // play/pause (locked while live)
            if self.playback.is_live() {
                ui.add(egui::Label::new("⏵ LIVE").text_color(egui::Color32::RED));
            } else {
                let play_text = if self.playback.is_playing() {
                    "⏸"
                } else {
                    "⏵"
                };

                if ui.button(play_text).clicked() {
                    self.playback.toggle_play();
                }
            }

            // replay speed
            for &speed in PLAYBACK_SPEEDS.iter() {
                let active = !self.playback.is_live() && self.playback.speed() == speed;

                if ui
                    .selectable_label(active, format!("{:.0}x", speed))
                    .clicked()
                {
                    self.playback.set_speed(speed);
                }
            }

            ui.separator();

            // scrub slider (hidden while live, the live edge is not seekable)
            if !self.playback.is_live() {
                let mut progress = self.playback.progress(frame_count);

                if ui
                    .add(
                        egui::Slider::new(&mut progress, 0.0..=1.0)
                            .show_value(false),
                    )
                    .changed()
                {
                    self.playback.seek(progress, frame_count);
                }
            }

            // live mode toggle
            if ui
                .selectable_label(self.playback.is_live(), "GO LIVE")
                .clicked()
            {
                self.playback.toggle_live(frame_count);
            }

            ui.separator();

            // lap jump
            egui::ComboBox::from_id_source("lap_jump")
                .selected_text(format!("Lap {}", self.current_frame().leader_lap.max(1)))
                .show_ui(ui, |ui| {
                    for lap in 1..=max_lap {
                        if ui.selectable_label(false, format!("Lap {}", lap)).clicked() {
                            self.playback.jump_to_lap(lap, &leader_laps);
                        }
                    }
                });

            // auto camera toggle
            let auto_camera = self.viewport.is_auto_camera();

            if ui.selectable_label(auto_camera, "AUTO CAM").clicked() {
                self.viewport.set_auto_camera(!auto_camera, &self.data.track);
            }

            ui.separator();

            // status readout
            ui.monospace(format!(
                "frame {}/{}",
                self.playback.frame_idx() + 1,
                frame_count
            ));

            if let Some(avg_ms) = self.prev_update_durations.get_avg() {
                if avg_ms > 0.0 {
                    ui.monospace(format!("{:.0} Hz", 1000.0 / avg_ms));
                }
            }
        });
    }
}
