pub mod buffer;
pub mod general;
pub mod geometry;



#[cfg(test)]
mod geometry_tests {
    use crate::geometry::{Point2d, Vector2d};
    use approx::assert_ulps_eq;

    #[test]
    fn test_vector2d_sub() {
        let v1: Vector2d = Vector2d { dx: 5.0, dy: 5.0 };
        let v2: Vector2d = Vector2d { dx: 2.0, dy: -1.0 };
        assert_eq!(v1.sub(&v2), Vector2d { dx: 3.0, dy: 6.0 });
    }
    #[test]
    fn test_vector2d_add() {
        let v1: Vector2d = Vector2d { dx: 5.0, dy: 5.0 };
        let v2: Vector2d = Vector2d { dx: 2.0, dy: -1.0 };
        assert_eq!(v1.add(&v2), Vector2d { dx: 7.0, dy: 4.0 });
    }
    #[test]
    fn test_vector2d_mult() {
        let v1: Vector2d = Vector2d { dx: 5.0, dy: 5.0 };
        assert_eq!(v1.mult(3.0), Vector2d { dx: 15.0, dy: 15.0 });
    }
    #[test]
    fn test_vector2d_cross() {
        let v1: Vector2d = Vector2d { dx: 5.0, dy: 5.0 };
        let v2: Vector2d = Vector2d { dx: 2.0, dy: -1.0 };
        assert_ulps_eq!(v1.cross(&v2), -15.0);
    }
    #[test]
    fn test_vector2d_abs() {
        let v1: Vector2d = Vector2d { dx: 5.0, dy: 5.0 };
        assert_ulps_eq!(v1.abs(), 50.0_f64.sqrt());
    }
    #[test]
    fn test_vector2d_normal_vector() {
        let v1: Vector2d = Vector2d { dx: 5.0, dy: 5.0 };
        assert_eq!(v1.normal_vector(), Vector2d { dx: -5.0, dy: 5.0 });
    }
    #[test]
    fn test_vector2d_normalized() {
        let v1: Vector2d = Vector2d { dx: 5.0, dy: 5.0 };
        assert_eq!(
            v1.normalized(),
            Vector2d {
                dx: 5.0 / 50.0_f64.sqrt(),
                dy: 5.0 / 50.0_f64.sqrt()
            }
        );
    }
    #[test]
    fn test_point2d_dist() {
        let p1 = Point2d { x: 1.0, y: 2.0 };
        let p2 = Point2d { x: 4.0, y: 6.0 };
        assert_ulps_eq!(p1.dist(&p2), 5.0);
    }
}
