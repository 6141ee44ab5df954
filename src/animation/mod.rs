mod bounds;
mod config;
mod embed;
mod error;
mod render;
mod sampler;
mod series;

pub use bounds::Bounds;
pub use config::{AnimationConfig, Padding};
pub use embed::img_tag;
pub use error::{AnimationError, Result};
pub use render::{FrameRenderer, GifRenderer};
pub use sampler::{stride, trace_start, Frame, FrameSampler};
pub use series::Trajectory;

use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Renders `trajectory` as an animated GIF at `path`.
///
/// Nothing is written if the trajectory or configuration is rejected, and a
/// partially written file is removed if rendering fails.
pub fn make_animation(
    trajectory: &Trajectory,
    config: &AnimationConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    config.validate()?;
    let sampler = FrameSampler::new(trajectory, config.n_frames(), config.decay_length)?;
    let bounds = Bounds::from_trajectory(trajectory, config);
    info!(
        "rendering {} frames from {} samples to {}",
        sampler.n_frames(),
        trajectory.len(),
        path.display()
    );
    debug!("stride = {}, bounds = {:?}", sampler.stride(), bounds);

    let renderer = GifRenderer::new(path, bounds, config)?;
    render_to_file(path, sampler, renderer)?;
    info!("saved animation to {}", path.display());
    Ok(())
}

/// Runs `render_frames` for a renderer that already opened `path`, removing
/// the partial output if a frame fails. The render error is returned as is.
fn render_to_file<R: FrameRenderer>(
    path: &Path,
    frames: impl Iterator<Item = Frame>,
    renderer: R,
) -> Result<()> {
    if let Err(err) = render_frames(frames, renderer) {
        warn!("rendering {} failed: {}", path.display(), err);
        if let Err(rm) = std::fs::remove_file(path) {
            warn!("could not remove partial {}: {}", path.display(), rm);
        }
        return Err(err);
    }
    Ok(())
}

/// Feeds every frame of `frames` to `renderer`, in order, then finishes it.
pub fn render_frames<R: FrameRenderer>(
    frames: impl Iterator<Item = Frame>,
    mut renderer: R,
) -> Result<()> {
    for frame in frames {
        trace!("frame {} (sample {})", frame.number, frame.index);
        renderer.render(&frame)?;
    }
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[derive(Default)]
    struct Recorder {
        indices: Vec<usize>,
        finished: bool,
    }

    impl FrameRenderer for &mut Recorder {
        fn render(&mut self, frame: &Frame) -> Result<()> {
            self.indices.push(frame.index);
            Ok(())
        }

        fn finish(self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    struct Failing;

    impl FrameRenderer for Failing {
        fn render(&mut self, frame: &Frame) -> Result<()> {
            if frame.number == 2 {
                return Err(AnimationError::Render("disk full".into()));
            }
            Ok(())
        }

        fn finish(self) -> Result<()> {
            panic!("finish must not run after a failed frame");
        }
    }

    fn pendulum(n: usize) -> Trajectory {
        let dt = 0.01;
        let t: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
        let theta: Vec<f64> = t.iter().map(|t| 0.5 * (3.0 * t).cos()).collect();
        let p1 = theta
            .iter()
            .map(|a| Vector2::new(a.sin(), -a.cos()))
            .collect::<Vec<_>>();
        let p2 = theta
            .iter()
            .zip(p1.iter())
            .map(|(a, p)| p + Vector2::new((2.0 * a).sin(), -(2.0 * a).cos()))
            .collect();
        Trajectory::new(t, p1, p2).unwrap()
    }

    #[test]
    fn driver_visits_frames_in_order() -> Result<()> {
        let traj = pendulum(100);
        let mut recorder = Recorder::default();
        render_frames(FrameSampler::new(&traj, 10, 3)?, &mut recorder)?;
        assert_eq!(recorder.indices, (0..100).step_by(10).collect::<Vec<_>>());
        assert!(recorder.finished);
        Ok(())
    }

    #[test]
    fn driver_stops_at_first_error() {
        let traj = pendulum(100);
        let err = render_frames(FrameSampler::new(&traj, 10, 3).unwrap(), Failing).unwrap_err();
        assert!(matches!(err, AnimationError::Render(_)));
    }

    #[test]
    fn degenerate_config_writes_nothing() {
        let path = std::env::temp_dir().join("pendulum_degenerate_test.gif");
        let _ = std::fs::remove_file(&path);
        let err = make_animation(&pendulum(100), &AnimationConfig::default(), &path).unwrap_err();
        assert!(matches!(
            err,
            AnimationError::DegenerateStride {
                requested: 1000,
                available: 100
            }
        ));
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let path = std::env::temp_dir()
            .join("pendulum_missing_dir")
            .join("nested")
            .join("out.gif");
        let config = AnimationConfig::default().with_fps(5).with_duration(1.0);
        let err = make_animation(&pendulum(50), &config, &path).unwrap_err();
        assert!(matches!(err, AnimationError::Render(_)));
    }

    #[test]
    fn directory_output_keeps_encoder_error() -> Result<()> {
        let path = std::env::temp_dir().join("pendulum_dir_output.gif");
        std::fs::create_dir_all(&path)?;
        let config = AnimationConfig::default().with_fps(5).with_duration(1.0);
        let err = make_animation(&pendulum(50), &config, &path).unwrap_err();
        assert!(matches!(err, AnimationError::Render(_)));
        assert!(path.is_dir());
        std::fs::remove_dir(&path)?;
        Ok(())
    }

    #[test]
    fn failed_render_removes_partial_file() -> Result<()> {
        let path = std::env::temp_dir().join("pendulum_partial_test.gif");
        std::fs::write(&path, b"partial")?;
        let traj = pendulum(100);
        let err = render_to_file(&path, FrameSampler::new(&traj, 10, 3)?, Failing).unwrap_err();
        assert!(matches!(err, AnimationError::Render(_)));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn failed_cleanup_keeps_render_error() -> Result<()> {
        let path = std::env::temp_dir().join("pendulum_never_created.gif");
        let _ = std::fs::remove_file(&path);
        let traj = pendulum(100);
        let err = render_to_file(&path, FrameSampler::new(&traj, 10, 3)?, Failing).unwrap_err();
        assert!(matches!(err, AnimationError::Render(_)));
        Ok(())
    }

    #[test]
    fn writes_gif() -> Result<()> {
        let path = std::env::temp_dir().join("pendulum_smoke_test.gif");
        let config = AnimationConfig::default()
            .with_fps(10)
            .with_duration(1.0)
            .with_decay_length(5)
            .with_circle(3.0)
            .with_size(120, 120);
        make_animation(&pendulum(200), &config, &path)?;

        let bytes = std::fs::read(&path)?;
        assert!(bytes.starts_with(b"GIF89a"));
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
