use helpers::geometry::{Point2d, Vector2d};

/// Axis-aligned bounding box of a track shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// TrackShape is the ordered centerline of the track in track-local coordinates. It is static for
/// the session lifetime once loaded; at least two points are required for rendering.
#[derive(Debug, Default)]
pub struct TrackShape {
    pub centerline: Vec<Point2d>,
}

impl TrackShape {
    pub fn new(centerline: Vec<Point2d>) -> TrackShape {
        TrackShape { centerline }
    }

    pub fn len(&self) -> usize {
        self.centerline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centerline.is_empty()
    }

    /// bounding_box determines the min and max x and y values over all centerline points.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if self.centerline.is_empty() {
            return None;
        }

        let bbox = self.centerline.iter().fold(
            BoundingBox {
                x_min: self.centerline[0].x,
                x_max: self.centerline[0].x,
                y_min: self.centerline[0].y,
                y_max: self.centerline[0].y,
            },
            |bbox, p| BoundingBox {
                x_min: if p.x < bbox.x_min { p.x } else { bbox.x_min },
                x_max: if p.x > bbox.x_max { p.x } else { bbox.x_max },
                y_min: if p.y < bbox.y_min { p.y } else { bbox.y_min },
                y_max: if p.y > bbox.y_max { p.y } else { bbox.y_max },
            },
        );

        Some(bbox)
    }

    /// sector_slice returns the part of the centerline attributed to the given sector (1-3). The
    /// track is split into thirds by point index, matching the sector-ownership display.
    pub fn sector_slice(&self, sector: u8) -> &[Point2d] {
        let total = self.centerline.len();

        if total < 3 || !(1..=3).contains(&sector) {
            return &[];
        }

        let (start, end) = match sector {
            1 => (0, total / 3),
            2 => (total / 3, 2 * total / 3),
            _ => (2 * total / 3, total),
        };

        &self.centerline[start..end]
    }

    /// start_finish returns the start/finish location and the normalized normal vector of the
    /// first centerline segment, used to draw the perpendicular start line.
    pub fn start_finish(&self) -> Option<(Point2d, Vector2d)> {
        if self.centerline.len() < 2 {
            return None;
        }

        let tan_vec = self.centerline[1]
            .as_vector2d()
            .sub(&self.centerline[0].as_vector2d());

        if tan_vec.abs() == 0.0 {
            return None;
        }

        Some((
            self.centerline[0].to_owned(),
            tan_vec.normalized().normal_vector(),
        ))
    }
}
