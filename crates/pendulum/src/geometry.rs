/// Cartesian position of the pendulum bob, with the pivot at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Position of a bob on an arm of `length` at angle `theta`.
    ///
    /// `theta = 0` points straight up; positive angles swing toward `-x`.
    #[must_use]
    pub fn from_angle(theta: f64, length: f64) -> Self {
        Self {
            x: -length * theta.sin(),
            y: length * theta.cos(),
        }
    }
}

/// A square plot window centred on the pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Margin applied around the arm's reach.
    pub const MARGIN: f64 = 1.1;

    /// The window `[-1.1 l, 1.1 l]` on both axes.
    #[must_use]
    pub fn around(length: f64) -> Self {
        let reach = Self::MARGIN * length;
        Self {
            min: -reach,
            max: reach,
        }
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        (self.min..=self.max).contains(&position.x) && (self.min..=self.max).contains(&position.y)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn upright_and_hanging() {
        assert_eq!(Position::from_angle(0.0, 0.5), Position { x: -0.0, y: 0.5 });

        let hanging = Position::from_angle(PI, 0.5);
        assert_relative_eq!(hanging.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(hanging.y, -0.5);
    }

    #[test]
    fn quarter_turn_points_left() {
        let p = Position::from_angle(FRAC_PI_2, 2.0);
        assert_relative_eq!(p.x, -2.0);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn bounds_hold_every_angle() {
        let bounds = Bounds::around(0.5);
        assert_relative_eq!(bounds.max, 0.55);
        assert_relative_eq!(bounds.min, -0.55);

        for i in 0_u32..64 {
            let theta = f64::from(i) * 0.3 - 9.0;
            assert!(bounds.contains(Position::from_angle(theta, 0.5)));
        }
        assert!(!bounds.contains(Position { x: 0.6, y: 0.0 }));
    }
}
