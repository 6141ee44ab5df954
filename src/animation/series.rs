use nalgebra::Vector2;

use super::error::{AnimationError, Result};

/// Time series of a two-bob pendulum, as produced by an external simulation.
///
/// `p1` is the first bob (attached to the origin), `p2` the second bob
/// (attached to `p1`). All three series are index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    t: Vec<f64>,
    p1: Vec<Vector2<f64>>,
    p2: Vec<Vector2<f64>>,
}

impl Trajectory {
    pub fn new(t: Vec<f64>, p1: Vec<Vector2<f64>>, p2: Vec<Vector2<f64>>) -> Result<Trajectory> {
        if t.is_empty() {
            return Err(AnimationError::EmptySeries);
        }
        let n = t.len();
        check_len("p1", n, p1.len())?;
        check_len("p2", n, p2.len())?;

        if let Some(index) = t.iter().position(|v| !v.is_finite()) {
            return Err(AnimationError::NonFinite { series: "t", index });
        }
        if let Some(index) = t.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AnimationError::NonMonotonicTime { index: index + 1 });
        }
        check_finite("p1", &p1)?;
        check_finite("p2", &p2)?;

        Ok(Trajectory { t, p1, p2 })
    }

    /// Builds a trajectory from the flat `x1, y1, x2, y2` columns.
    pub fn from_columns(
        t: Vec<f64>,
        x1: &[f64],
        y1: &[f64],
        x2: &[f64],
        y2: &[f64],
    ) -> Result<Trajectory> {
        if t.is_empty() {
            return Err(AnimationError::EmptySeries);
        }
        let n = t.len();
        check_len("x1", n, x1.len())?;
        check_len("y1", n, y1.len())?;
        check_len("x2", n, x2.len())?;
        check_len("y2", n, y2.len())?;

        let p1 = zip_points(x1, y1);
        let p2 = zip_points(x2, y2);
        Trajectory::new(t, p1, p2)
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.t
    }

    pub fn p1(&self) -> &[Vector2<f64>] {
        &self.p1
    }

    pub fn p2(&self) -> &[Vector2<f64>] {
        &self.p2
    }
}

fn check_len(series: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(AnimationError::LengthMismatch {
            series,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_finite(series: &'static str, points: &[Vector2<f64>]) -> Result<()> {
    match points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        Some(index) => Err(AnimationError::NonFinite { series, index }),
        None => Ok(()),
    }
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<Vector2<f64>> {
    x.iter()
        .zip(y.iter())
        .map(|(&x, &y)| Vector2::new(x, y))
        .collect()
}
