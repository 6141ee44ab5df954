use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::bounds::Bounds;
use super::config::AnimationConfig;
use super::error::{AnimationError, Result};
use super::sampler::Frame;

const PURPLE: RGBColor = RGBColor(128, 0, 128);
const CIRCLE_POINTS: usize = 1000;

/// Consumer of a frame sequence. Frames are handed over in increasing order.
pub trait FrameRenderer {
    fn render(&mut self, frame: &Frame) -> Result<()>;

    /// Flushes the output once every frame has been rendered.
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}

/// Writes frames into an animated GIF through the plotters bitmap backend.
pub struct GifRenderer<'a> {
    root: DrawingArea<BitMapBackend<'a>, Shift>,
    bounds: Bounds,
    circle: Vec<(f64, f64)>,
}

impl<'a> GifRenderer<'a> {
    pub fn new(path: &'a Path, bounds: Bounds, config: &AnimationConfig) -> Result<GifRenderer<'a>> {
        let backend = BitMapBackend::gif(path, config.size, config.frame_delay_ms())
            .map_err(|e| AnimationError::Render(Box::new(e)))?;
        let circle = config
            .circle_radius
            .map(circle_series)
            .unwrap_or_default();
        Ok(GifRenderer {
            root: backend.into_drawing_area(),
            bounds,
            circle,
        })
    }
}

impl<'a> FrameRenderer for GifRenderer<'a> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        self.root.fill(&WHITE)?;
        {
            let mut chart = ChartBuilder::on(&self.root)
                .margin(10)
                .build_cartesian_2d(self.bounds.x.clone(), self.bounds.y.clone())?;

            chart.configure_mesh().draw()?;

            if !self.circle.is_empty() {
                chart.draw_series(
                    self.circle
                        .iter()
                        .map(|&p| Circle::new(p, 1, BLUE.filled())),
                )?;
            }

            chart.draw_series(
                frame
                    .trace1
                    .iter()
                    .map(|p| Circle::new((p.x, p.y), 1, GREEN.filled())),
            )?;
            chart.draw_series(
                frame
                    .trace2
                    .iter()
                    .map(|p| Circle::new((p.x, p.y), 1, PURPLE.filled())),
            )?;

            for (a, b) in frame.segments() {
                chart.draw_series(LineSeries::new(
                    [(a.x, a.y), (b.x, b.y)],
                    RED.stroke_width(3),
                ))?;
                chart.draw_series(
                    [a, b]
                        .iter()
                        .map(|p| Circle::new((p.x, p.y), 5, RED.filled())),
                )?;
            }
        }
        self.root.present()?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        // frames are flushed by render(); the GIF trailer is written on drop
        // and plotters discards any error from that last write
        drop(self.root);
        Ok(())
    }
}

fn circle_series(radius: f64) -> Vec<(f64, f64)> {
    (0..CIRCLE_POINTS)
        .map(|i| i as f64 / (CIRCLE_POINTS - 1) as f64 * std::f64::consts::TAU) // [0..1000) -> [0..2pi]
        .map(|a| (radius * a.cos(), radius * a.sin()))
        .collect()
}
