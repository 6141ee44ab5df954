use std::ops::Range;

use super::config::{AnimationConfig, Padding};
use super::series::Trajectory;

/// Plot window in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Bounds {
    /// Window around the second bob's path, padded per `config`.
    /// Explicit limits in `config` replace the computed range of their axis.
    pub fn from_trajectory(trajectory: &Trajectory, config: &AnimationConfig) -> Bounds {
        let p2 = trajectory.p2();
        let (x_min, x_max) = min_max(p2.iter().map(|p| p.x));
        let (y_min, y_max) = min_max(p2.iter().map(|p| p.y));

        let xpad = config
            .xpad
            .unwrap_or_else(|| default_pad(config.padding, x_min, x_max));
        let ypad = config
            .ypad
            .unwrap_or_else(|| default_pad(config.padding, y_min, y_max));

        let x = match config.xlim {
            Some((lo, hi)) => lo..hi,
            None => (x_min - xpad)..(x_max + xpad),
        };
        let y = match config.ylim {
            Some((lo, hi)) => lo..hi,
            None => (y_min - ypad)..(y_max + ypad),
        };
        Bounds { x, y }
    }
}

fn default_pad(padding: Padding, min: f64, max: f64) -> f64 {
    let span = max - min;
    match padding {
        Padding::LegacyMinMagnitude if span > 0.0 || min != 0.0 => 0.1 * min.abs(),
        Padding::LegacyMinMagnitude => 0.1,
        Padding::RangeFraction(f) if span > 0.0 => f * span,
        Padding::RangeFraction(f) => f * min.abs().max(1.0),
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
