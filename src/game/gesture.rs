/// Displacement (in pixels) separating a tap from a drag. The boundary
/// value itself counts as a drag: strictly-below is a tap, at-or-above is
/// a drag.
pub const DRAG_THRESHOLD: f64 = 8.0;

/// Terminal classification of one press-to-release session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    Tap(usize),
    Drag { origin: usize, target: usize },
    /// Drag released outside any slot or back onto its own origin.
    NoDropTarget,
}

/// Ephemeral record of the gesture in flight: origin slot and start
/// coordinates. Lives only between press and release/cancel; which input
/// device produced the events is irrelevant here, the adapter already
/// unified them.
#[derive(Clone, Copy, Debug)]
pub struct GestureSession {
    origin: usize,
    start_x: f64,
    start_y: f64,
}

impl GestureSession {
    pub fn new(origin: usize, x: f64, y: f64) -> Self {
        GestureSession {
            origin,
            start_x: x,
            start_y: y,
        }
    }

    /// Euclidean displacement from the press point. Move handlers use this
    /// for drag-follow feedback only; it never decides the classification
    /// early.
    pub fn displacement(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        dx.hypot(dy)
    }

    /// Classifies the finished session. `drop_target` is the slot under the
    /// release point, resolved by the adapter that owns the geometry.
    pub fn classify(&self, x: f64, y: f64, drop_target: Option<usize>) -> GestureOutcome {
        if self.displacement(x, y) < DRAG_THRESHOLD {
            return GestureOutcome::Tap(self.origin);
        }
        match drop_target {
            Some(target) if target != self.origin => GestureOutcome::Drag {
                origin: self.origin,
                target,
            },
            _ => GestureOutcome::NoDropTarget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_release_is_a_tap() {
        let session = GestureSession::new(3, 100.0, 100.0);
        assert_eq!(
            session.classify(104.0, 103.0, Some(7)),
            GestureOutcome::Tap(3)
        );
    }

    #[test]
    fn threshold_boundary_counts_as_drag() {
        let session = GestureSession::new(3, 100.0, 100.0);
        // Exactly 8.0 pixels of displacement.
        assert_eq!(
            session.classify(108.0, 100.0, Some(7)),
            GestureOutcome::Drag { origin: 3, target: 7 }
        );
        // A hair under stays a tap.
        assert_eq!(
            session.classify(107.999, 100.0, Some(7)),
            GestureOutcome::Tap(3)
        );
    }

    #[test]
    fn drag_without_target_is_a_no_op() {
        let session = GestureSession::new(3, 100.0, 100.0);
        assert_eq!(
            session.classify(150.0, 100.0, None),
            GestureOutcome::NoDropTarget
        );
    }

    #[test]
    fn drag_back_onto_origin_is_a_no_op() {
        let session = GestureSession::new(3, 100.0, 100.0);
        assert_eq!(
            session.classify(150.0, 100.0, Some(3)),
            GestureOutcome::NoDropTarget
        );
    }

    #[test]
    fn displacement_is_euclidean() {
        let session = GestureSession::new(0, 0.0, 0.0);
        assert!((session.displacement(3.0, 4.0) - 5.0).abs() < f64::EPSILON);
    }
}
