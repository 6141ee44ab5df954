use super::error::{AnimationError, Result};

/// How the auto-computed plot window is widened around the second bob's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Padding {
    /// Pad both sides by this fraction of the data range.
    RangeFraction(f64),
    /// Pad both sides by 10% of the magnitude of the axis minimum.
    /// Asymmetric with respect to the data, only kept to reproduce older renders.
    LegacyMinMagnitude,
}

impl Default for Padding {
    fn default() -> Self {
        Padding::RangeFraction(0.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Frames per second of the output animation
    pub fps: u32,
    /// Length of the output animation [s]
    pub n_seconds: f64,
    /// Number of strides of history kept in each trace, 0 disables traces
    pub decay_length: usize,
    pub padding: Padding,
    pub xpad: Option<f64>,
    pub ypad: Option<f64>,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    /// Reference circle centered at the origin
    pub circle_radius: Option<f64>,
    /// Output image size in pixels
    pub size: (u32, u32),
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            fps: 50,
            n_seconds: 20.0,
            decay_length: 250,
            padding: Padding::default(),
            xpad: None,
            ypad: None,
            xlim: None,
            ylim: None,
            circle_radius: None,
            size: (800, 800),
        }
    }
}

impl AnimationConfig {
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_duration(mut self, n_seconds: f64) -> Self {
        self.n_seconds = n_seconds;
        self
    }

    pub fn with_decay_length(mut self, decay_length: usize) -> Self {
        self.decay_length = decay_length;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_pad(mut self, xpad: Option<f64>, ypad: Option<f64>) -> Self {
        self.xpad = xpad;
        self.ypad = ypad;
        self
    }

    pub fn with_limits(mut self, xlim: Option<(f64, f64)>, ylim: Option<(f64, f64)>) -> Self {
        self.xlim = xlim;
        self.ylim = ylim;
        self
    }

    pub fn with_circle(mut self, radius: f64) -> Self {
        self.circle_radius = Some(radius);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Number of frames in the output, `fps * n_seconds` truncated.
    pub fn n_frames(&self) -> usize {
        (self.fps as f64 * self.n_seconds).floor() as usize
    }

    /// GIF frame delay [ms]
    pub fn frame_delay_ms(&self) -> u32 {
        (1000 / self.fps.max(1)).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(invalid("fps must be positive"));
        }
        if !(self.n_seconds.is_finite() && self.n_seconds > 0.0) {
            return Err(invalid(format!(
                "n_seconds must be positive, got {}",
                self.n_seconds
            )));
        }
        if self.n_frames() == 0 {
            return Err(invalid("fps * n_seconds yields zero frames"));
        }
        if let Padding::RangeFraction(f) = self.padding {
            if !(f.is_finite() && f >= 0.0) {
                return Err(invalid(format!("padding fraction must be >= 0, got {f}")));
            }
        }
        for (name, pad) in [("xpad", self.xpad), ("ypad", self.ypad)] {
            if let Some(pad) = pad {
                if !(pad.is_finite() && pad >= 0.0) {
                    return Err(invalid(format!("{name} must be >= 0, got {pad}")));
                }
            }
        }
        for (name, lim) in [("xlim", self.xlim), ("ylim", self.ylim)] {
            if let Some((lo, hi)) = lim {
                if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                    return Err(invalid(format!("{name} must satisfy lo < hi, got ({lo}, {hi})")));
                }
            }
        }
        if let Some(r) = self.circle_radius {
            if !(r.is_finite() && r > 0.0) {
                return Err(invalid(format!("circle radius must be positive, got {r}")));
            }
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(invalid("image size must be non-zero"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> AnimationError {
    AnimationError::InvalidConfig(msg.into())
}
