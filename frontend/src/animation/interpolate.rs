//! Piecewise-linear range tables used by the scroll-linked decorations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("range table needs at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("range table contains a non-finite value")]
    NonFinite,
    #[error("input stops must be strictly increasing (stop {0})")]
    NotIncreasing(usize),
}

/// Maps an input range onto an output range, clamping at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeMap {
    stops: Vec<(f64, f64)>,
}

impl RangeMap {
    pub fn new(input: [f64; 2], output: [f64; 2]) -> Result<Self, RangeError> {
        Self::piecewise(&[(input[0], output[0]), (input[1], output[1])])
    }

    pub fn piecewise(stops: &[(f64, f64)]) -> Result<Self, RangeError> {
        if stops.len() < 2 {
            return Err(RangeError::TooFewStops(stops.len()));
        }
        if stops.iter().any(|(i, o)| !i.is_finite() || !o.is_finite()) {
            return Err(RangeError::NonFinite);
        }
        if let Some(pos) = stops.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(RangeError::NotIncreasing(pos + 1));
        }
        Ok(Self { stops: stops.to_vec() })
    }

    pub fn map(&self, x: f64) -> f64 {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if x.is_nan() || x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }
        for w in self.stops.windows(2) {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            if x <= x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        last.1
    }
}

/// Builds a table from literal constants that are known to be well formed.
macro_rules! range {
    ([$i0:expr, $i1:expr] => [$o0:expr, $o1:expr]) => {
        $crate::animation::interpolate::RangeMap::new([$i0, $i1], [$o0, $o1])
    };
}

/// Every decorative value of the hero illustration for one scroll offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IllustrationFrame {
    pub layer_offsets: [f64; 3],
    pub scale: f64,
    pub rotate: f64,
    pub counter_rotate: f64,
    pub opacity: f64,
    pub line_height: f64,
    pub line_opacity: f64,
    pub circle_y: f64,
    pub circle_opacity: f64,
    pub particles: [(f64, f64); 3],
}

/// Range tables for the hero illustration, built once per component.
#[derive(Clone, Debug, PartialEq)]
pub struct IllustrationTables {
    main_progress: RangeMap,
    line_progress: RangeMap,
    layers: [RangeMap; 3],
    scale: RangeMap,
    rotate: RangeMap,
    counter_rotate: RangeMap,
    opacity: RangeMap,
    line_height: RangeMap,
    line_opacity: RangeMap,
    circle_y: RangeMap,
    circle_opacity: RangeMap,
    particle_opacity: [RangeMap; 3],
    particle_scale: [RangeMap; 3],
}

impl IllustrationTables {
    pub fn new() -> Result<Self, RangeError> {
        Ok(Self {
            main_progress: range!([0.0, 500.0] => [0.0, 1.0])?,
            line_progress: range!([0.0, 1000.0] => [0.0, 1.0])?,
            layers: [
                range!([0.0, 1.0] => [0.0, -50.0])?,
                range!([0.0, 1.0] => [0.0, 50.0])?,
                range!([0.0, 1.0] => [0.0, -75.0])?,
            ],
            scale: range!([0.0, 1.0] => [1.0, 0.9])?,
            rotate: range!([0.0, 1.0] => [0.0, 180.0])?,
            counter_rotate: range!([0.0, 360.0] => [0.0, -180.0])?,
            opacity: range!([0.0, 300.0] => [1.0, 0.5])?,
            line_height: range!([0.0, 1.0] => [0.0, 800.0])?,
            line_opacity: range!([0.0, 1.0] => [0.0, 0.6])?,
            circle_y: range!([0.0, 1.0] => [0.0, 600.0])?,
            circle_opacity: range!([0.0, 500.0] => [0.0, 0.8])?,
            particle_opacity: [
                range!([0.0, 0.33] => [0.0, 0.8])?,
                range!([0.0, 0.5] => [0.0, 0.6])?,
                range!([0.0, 0.67] => [0.0, 0.7])?,
            ],
            particle_scale: [
                range!([0.0, 0.33] => [0.0, 1.0])?,
                range!([0.0, 0.5] => [0.0, 1.0])?,
                range!([0.0, 0.67] => [0.0, 1.0])?,
            ],
        })
    }

    pub fn frame(&self, scroll_y: f64) -> IllustrationFrame {
        let scroll_y = scroll_y.max(0.0);
        let main = self.main_progress.map(scroll_y);
        let line = self.line_progress.map(scroll_y);
        let rotate = self.rotate.map(main);
        let particle = |i: usize| {
            (
                self.particle_opacity[i].map(main),
                self.particle_scale[i].map(main),
            )
        };

        IllustrationFrame {
            layer_offsets: [
                self.layers[0].map(main),
                self.layers[1].map(main),
                self.layers[2].map(main),
            ],
            scale: self.scale.map(main),
            rotate,
            counter_rotate: self.counter_rotate.map(rotate),
            opacity: self.opacity.map(scroll_y),
            line_height: self.line_height.map(line),
            line_opacity: self.line_opacity.map(main),
            circle_y: self.circle_y.map(line),
            circle_opacity: self.circle_opacity.map(scroll_y),
            particles: [particle(0), particle(1), particle(2)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interpolates_inside_range() {
        let map = RangeMap::new([0.0, 500.0], [0.0, 1.0]).unwrap();
        assert!(approx(map.map(250.0), 0.5));
        assert!(approx(map.map(125.0), 0.25));
    }

    #[test]
    fn clamps_instead_of_extrapolating() {
        let map = RangeMap::new([0.0, 300.0], [1.0, 0.5]).unwrap();
        assert!(approx(map.map(-40.0), 1.0));
        assert!(approx(map.map(10_000.0), 0.5));
        assert!(approx(map.map(f64::NAN), 1.0));
    }

    #[test]
    fn piecewise_follows_each_segment() {
        let map = RangeMap::piecewise(&[(0.0, 0.0), (10.0, 100.0), (20.0, 0.0)]).unwrap();
        assert!(approx(map.map(5.0), 50.0));
        assert!(approx(map.map(10.0), 100.0));
        assert!(approx(map.map(15.0), 50.0));
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(RangeMap::piecewise(&[(0.0, 1.0)]), Err(RangeError::TooFewStops(1)));
        assert_eq!(
            RangeMap::new([5.0, 5.0], [0.0, 1.0]),
            Err(RangeError::NotIncreasing(1))
        );
        assert_eq!(
            RangeMap::new([0.0, f64::INFINITY], [0.0, 1.0]),
            Err(RangeError::NonFinite)
        );
    }

    #[test]
    fn chained_maps_compose() {
        let progress = RangeMap::new([0.0, 500.0], [0.0, 1.0]).unwrap();
        let rotate = RangeMap::new([0.0, 1.0], [0.0, 180.0]).unwrap();
        assert!(approx(rotate.map(progress.map(250.0)), 90.0));
        assert!(approx(rotate.map(progress.map(900.0)), 180.0));
    }

    #[test]
    fn illustration_frame_at_rest_and_fully_scrolled() {
        let tables = IllustrationTables::new().unwrap();

        let rest = tables.frame(0.0);
        assert!(approx(rest.scale, 1.0));
        assert!(approx(rest.opacity, 1.0));
        assert!(approx(rest.circle_opacity, 0.0));
        assert_eq!(rest.particles, [(0.0, 0.0); 3]);

        let end = tables.frame(2_000.0);
        assert!(approx(end.layer_offsets[2], -75.0));
        assert!(approx(end.rotate, 180.0));
        assert!(approx(end.counter_rotate, -90.0));
        assert!(approx(end.line_height, 800.0));
        assert!(approx(end.opacity, 0.5));
        assert!(approx(end.particles[0].1, 1.0));
    }

    #[test]
    fn negative_scroll_is_treated_as_top() {
        let tables = IllustrationTables::new().unwrap();
        assert_eq!(tables.frame(-120.0), tables.frame(0.0));
    }
}
