//! Search traces for visualising how a route was found.
//! Shapes are only recorded with the `debug` feature enabled.

use crate::math::Point2d;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records a line between two points, such as a relaxed hop.
#[allow(unused)]
pub fn debug_line(name: &str, p1: Point2d, p2: Point2d) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "line",
            "name": name,
            "p1": [p1.x, p1.y],
            "p2": [p2.x, p2.y],
        }))
    })
}

/// Records a point with its distance from the search origin.
#[allow(unused)]
pub fn debug_point(name: &str, pos: Point2d, dist: f64) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "point",
            "name": name,
            "pos": [pos.x, pos.y],
            "dist": dist
        }))
    })
}

/// Takes the shapes recorded by searches on this thread since the last call.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}

#[cfg(all(test, feature = "debug"))]
mod test {
    use super::*;

    #[test]
    fn frame_is_drained() {
        debug_line("relax", Point2d::new(0.0, 0.0), Point2d::new(1.0, 0.0));
        debug_point("settle", Point2d::new(1.0, 0.0), 1.0);
        assert_eq!(take_debug_frame().as_array().map(Vec::len), Some(2));
        assert_eq!(take_debug_frame().as_array().map(Vec::len), Some(0));
    }
}
