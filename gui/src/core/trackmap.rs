use crate::core::gui::DashboardApp;
use eframe::egui;
use telemetry::core::standings::{battle_gap, find_rival, race_order};
use telemetry::interfaces::gui_interface::RgbColor;
use telemetry::pre::roster::team_color;

const MARKER_RADIUS: f32 = 6.0;
const SELECT_HIT_RADIUS: f32 = 12.0;
const BATTLE_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 128, 0);

pub fn to_color32(color: &RgbColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl DashboardApp {
    /// viewport_to_screen builds the transformation from the world-coordinate window onto the
    /// canvas. The window is mapped with a uniform scale and centered, i.e. the unused canvas
    /// strip is letterboxed instead of stretching the track geometry.
    fn viewport_to_screen(&self, screen_rect: egui::Rect) -> egui::emath::RectTransform {
        let view_width = self.viewport.width as f32;
        let view_height = self.viewport.height as f32;
        let view_aspect = if view_height != 0.0 {
            view_width / view_height
        } else {
            1.0
        };

        let screen_width = screen_rect.width();
        let screen_height = screen_rect.height();
        let screen_aspect = screen_width / screen_height;

        let dest_rect = if screen_aspect > view_aspect {
            // screen is wider -> fit height
            let new_width = screen_height * view_aspect;
            let offset_x = (screen_width - new_width) / 2.0;
            egui::Rect::from_min_size(
                egui::Pos2::new(screen_rect.min.x + offset_x, screen_rect.min.y),
                egui::Vec2::new(new_width, screen_height),
            )
        } else {
            // screen is taller -> fit width
            let new_height = screen_width / view_aspect;
            let offset_y = (screen_height - new_height) / 2.0;
            egui::Rect::from_min_size(
                egui::Pos2::new(screen_rect.min.x, screen_rect.min.y + offset_y),
                egui::Vec2::new(screen_width, new_height),
            )
        };

        egui::emath::RectTransform::from_to(
            egui::emath::Rect::from_min_max(
                egui::Pos2 {
                    x: self.viewport.x as f32,
                    y: self.viewport.y as f32,
                },
                egui::Pos2 {
                    x: (self.viewport.x + self.viewport.width) as f32,
                    y: (self.viewport.y + self.viewport.height) as f32,
                },
            ),
            dest_rect,
        )
    }

    pub fn set_track_map_content(&mut self, ui: &mut egui::Ui) -> egui::Response {
        // PREPARATIONS ----------------------------------------------------------------------------
        // get UI handles
        let (response, painter) = ui.allocate_painter(
            ui.available_size_before_wrap_finite(),
            egui::Sense::click_and_drag(),
        );

        if self.viewport.is_auto_camera() {
            self.viewport.fit_to_track(&self.data.track);
        }

        // INPUT HANDLING --------------------------------------------------------------------------
        // wheel zoom anchored at the pointer
        let scroll_y = ui.input().scroll_delta.y;

        if scroll_y != 0.0 && response.hovered() {
            if let Some(hover_pos) = response.hover_pos() {
                let to_screen = self.viewport_to_screen(response.rect);
                let world_pos = to_screen.inverse() * hover_pos;
                let frac_x = (world_pos.x as f64 - self.viewport.x) / self.viewport.width;
                let frac_y = (world_pos.y as f64 - self.viewport.y) / self.viewport.height;

                self.viewport.zoom(frac_x, frac_y, scroll_y > 0.0);
            }
        }

        // drag pan
        if response.dragged() {
            let drag_delta = response.drag_delta();

            if drag_delta != egui::Vec2::ZERO {
                let to_screen = self.viewport_to_screen(response.rect);
                let dest_rect = *to_screen.to();

                self.viewport.pan(
                    drag_delta.x as f64,
                    drag_delta.y as f64,
                    dest_rect.width() as f64,
                    dest_rect.height() as f64,
                );
            }
        }

        // get transformation from world coordinates to pixels in the window (recalculated such
        // that the gestures above already apply to the current repaint)
        let to_screen = self.viewport_to_screen(response.rect);

        // create vector for drawn shapes
        let mut shapes = vec![];

        // TRACK DRAWING ---------------------------------------------------------------------------
        let frame = self.current_frame();

        if self.data.track.len() >= 2 {
            // track ribbon (wide dark base line with a brighter centerline on top)
            let centerline_px: Vec<egui::Pos2> = self
                .data
                .track
                .centerline
                .iter()
                .map(|p| {
                    to_screen
                        * egui::Pos2 {
                            x: p.x as f32,
                            y: p.y as f32,
                        }
                })
                .collect();

            shapes.push(egui::Shape::line(
                centerline_px.to_owned(),
                egui::Stroke::new(9.0, egui::Color32::from_gray(60)),
            ));
            shapes.push(egui::Shape::line(
                centerline_px,
                egui::Stroke::new(4.0, egui::Color32::from_gray(160)),
            ));

            // sector overlays colored by the team of the fastest driver of the sector
            for sector in 1..=3u8 {
                let owner = match &frame.sector_owners[(sector - 1) as usize] {
                    Some(x) => x,
                    None => continue,
                };

                let owner_color = match frame.driver(owner) {
                    Some(d) => d.color.to_owned(),
                    None => team_color(owner),
                };
                let overlay_color = egui::Color32::from_rgba_unmultiplied(
                    owner_color.r,
                    owner_color.g,
                    owner_color.b,
                    140,
                );

                let sector_px: Vec<egui::Pos2> = self
                    .data
                    .track
                    .sector_slice(sector)
                    .iter()
                    .map(|p| {
                        to_screen
                            * egui::Pos2 {
                                x: p.x as f32,
                                y: p.y as f32,
                            }
                    })
                    .collect();

                if sector_px.len() >= 2 {
                    shapes.push(egui::Shape::line(
                        sector_px,
                        egui::Stroke::new(6.0, overlay_color),
                    ));
                }
            }

            // start/finish line perpendicular to the first centerline segment
            if let Some((sf_coords, sf_normvec)) = self.data.track.start_finish() {
                let bound_length = 40.0;
                let text_offset = 60.0;

                let tmp_p1 = sf_coords
                    .as_vector2d()
                    .add(&sf_normvec.mult(0.5 * bound_length))
                    .as_point2d();
                let tmp_p2 = sf_coords
                    .as_vector2d()
                    .sub(&sf_normvec.mult(0.5 * bound_length))
                    .as_point2d();
                let tmp_text_coords = sf_coords
                    .as_vector2d()
                    .add(&sf_normvec.mult(text_offset))
                    .as_point2d();

                let tmp_line = vec![
                    to_screen
                        * egui::Pos2 {
                            x: tmp_p1.x as f32,
                            y: tmp_p1.y as f32,
                        },
                    to_screen
                        * egui::Pos2 {
                            x: tmp_p2.x as f32,
                            y: tmp_p2.y as f32,
                        },
                ];

                shapes.push(egui::Shape::line(
                    tmp_line,
                    egui::Stroke::new(3.0, egui::Color32::WHITE),
                ));
                shapes.push(egui::Shape::text(
                    ui.fonts(),
                    to_screen
                        * egui::Pos2 {
                            x: tmp_text_coords.x as f32,
                            y: tmp_text_coords.y as f32,
                        },
                    egui::Align2::CENTER_CENTER,
                    "SF",
                    egui::TextStyle::Small,
                    egui::Color32::WHITE,
                ));
            }
        }

        // BATTLE LINE -----------------------------------------------------------------------------
        // dashed connection between the selected driver and its on-track rival
        let order = race_order(&frame.drivers);
        let rival_id = match &self.selected_driver {
            Some(sel_id) => {
                find_rival(&frame.drivers, &order, sel_id).map(|idx| frame.drivers[idx].id.to_owned())
            }
            None => None,
        };

        if let (Some(sel_id), Some(riv_id)) = (&self.selected_driver, &rival_id) {
            if let (Some(sel), Some(riv)) = (frame.driver(sel_id), frame.driver(riv_id)) {
                let sel_pos = to_screen
                    * egui::Pos2 {
                        x: sel.pos.x as f32,
                        y: sel.pos.y as f32,
                    };
                let riv_pos = to_screen
                    * egui::Pos2 {
                        x: riv.pos.x as f32,
                        y: riv.pos.y as f32,
                    };

                shapes.extend(egui::Shape::dashed_line(
                    &[sel_pos, riv_pos],
                    egui::Stroke::new(2.0, BATTLE_COLOR),
                    8.0,
                    6.0,
                ));

                shapes.push(egui::Shape::text(
                    ui.fonts(),
                    egui::Pos2 {
                        x: (sel_pos.x + riv_pos.x) / 2.0,
                        y: (sel_pos.y + riv_pos.y) / 2.0 - 8.0,
                    },
                    egui::Align2::CENTER_BOTTOM,
                    format!("{:.0} m", battle_gap(sel, riv)),
                    egui::TextStyle::Body,
                    BATTLE_COLOR,
                ));
            }
        }

        // DRIVERS DRAWING -------------------------------------------------------------------------
        let mut marker_positions: Vec<(String, egui::Pos2)> = Vec::with_capacity(frame.drivers.len());

        for driver in frame.drivers.iter() {
            let pos = to_screen
                * egui::Pos2 {
                    x: driver.pos.x as f32,
                    y: driver.pos.y as f32,
                };
            let color = to_color32(&driver.color);
            let is_selected = self.selected_driver.as_deref() == Some(driver.id.as_str());
            let is_rival = rival_id.as_deref() == Some(driver.id.as_str());
            let radius = if is_selected {
                MARKER_RADIUS + 2.0
            } else {
                MARKER_RADIUS
            };

            // status rings (open DRS and pit service)
            if driver.drs {
                shapes.push(egui::Shape::circle_stroke(
                    pos,
                    radius + 5.0,
                    egui::Stroke::new(2.0, egui::Color32::GREEN),
                ));
            }
            if driver.is_pitting {
                shapes.push(egui::Shape::circle_stroke(
                    pos,
                    radius + 5.0,
                    egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE),
                ));
            }

            shapes.push(egui::Shape::circle_filled(pos, radius, color));

            if is_selected {
                shapes.push(egui::Shape::circle_stroke(
                    pos,
                    radius + 2.5,
                    egui::Stroke::new(2.0, egui::Color32::WHITE),
                ));
            } else if is_rival {
                shapes.push(egui::Shape::circle_stroke(
                    pos,
                    radius + 2.5,
                    egui::Stroke::new(2.0, BATTLE_COLOR),
                ));
            }

            shapes.push(egui::Shape::text(
                ui.fonts(),
                egui::Pos2 {
                    x: pos.x,
                    y: pos.y - radius - 4.0,
                },
                egui::Align2::CENTER_BOTTOM,
                &driver.id,
                egui::TextStyle::Small,
                color,
            ));

            marker_positions.push((driver.id.to_owned(), pos));
        }

        // CLICK SELECTION -------------------------------------------------------------------------
        // a click on (or near) a marker selects that driver
        if response.clicked() {
            if let Some(click_pos) = response.interact_pointer_pos() {
                let clicked_driver = marker_positions
                    .iter()
                    .map(|(id, pos)| (id, pos.distance(click_pos)))
                    .filter(|(_, dist)| *dist <= SELECT_HIT_RADIUS)
                    .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|(id, _)| id.to_owned());

                if clicked_driver.is_some() {
                    self.selected_driver = clicked_driver;
                }
            }
        }

        // DRAWING ---------------------------------------------------------------------------------
        // update shapes in UI painter and return response
        painter.extend(shapes);
        response
    }
}
