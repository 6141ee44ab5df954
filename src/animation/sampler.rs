//! Downsampling of a trajectory into animation frames.
//!
//! Frame `k` shows sample `k * stride`, where `stride = floor(N / n_frames)`.
//! Each bob also carries a trace of its positions over the previous
//! `decay_length` strides, sampled every `stride` samples and excluding the
//! current one.

use nalgebra::Vector2;

use super::error::{AnimationError, Result};
use super::series::Trajectory;

/// A single snapshot of the pendulum, independent of any renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Output frame number
    pub number: usize,
    /// Sample index in the trajectory
    pub index: usize,
    pub time: f64,
    /// First bob, linked to the origin
    pub bob1: Vector2<f64>,
    /// Second bob, linked to `bob1`
    pub bob2: Vector2<f64>,
    pub trace1: Vec<Vector2<f64>>,
    pub trace2: Vec<Vector2<f64>>,
}

impl Frame {
    /// Line segments of the two arms, `origin -> bob1` and `bob1 -> bob2`.
    pub fn segments(&self) -> [(Vector2<f64>, Vector2<f64>); 2] {
        [(Vector2::zeros(), self.bob1), (self.bob1, self.bob2)]
    }
}

/// Number of samples skipped between two consecutive frames.
pub fn stride(n_samples: usize, n_frames: usize) -> Result<usize> {
    if n_frames == 0 {
        return Err(AnimationError::InvalidConfig(
            "requested frame count must be positive".to_owned(),
        ));
    }
    match n_samples / n_frames {
        0 => Err(AnimationError::DegenerateStride {
            requested: n_frames,
            available: n_samples,
        }),
        s => Ok(s),
    }
}

/// First sample index of the trace window ending at `index`.
pub fn trace_start(index: usize, decay_length: usize, stride: usize) -> usize {
    index.saturating_sub(decay_length.saturating_mul(stride))
}

/// Iterator over the frames of an animation. Frames come out once, in order.
#[derive(Debug)]
pub struct FrameSampler<'a> {
    trajectory: &'a Trajectory,
    stride: usize,
    decay_length: usize,
    n_frames: usize,
    next: usize,
}

impl<'a> FrameSampler<'a> {
    pub fn new(
        trajectory: &'a Trajectory,
        n_frames: usize,
        decay_length: usize,
    ) -> Result<FrameSampler<'a>> {
        let stride = stride(trajectory.len(), n_frames)?;
        Ok(FrameSampler {
            trajectory,
            stride,
            decay_length,
            n_frames,
            next: 0,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn n_frames(&self) -> usize {
        self.n_frames
    }

    fn frame(&self, number: usize) -> Frame {
        let i = number * self.stride;
        let start = trace_start(i, self.decay_length, self.stride);
        let p1 = self.trajectory.p1();
        let p2 = self.trajectory.p2();

        Frame {
            number,
            index: i,
            time: self.trajectory.time()[i],
            bob1: p1[i],
            bob2: p2[i],
            trace1: p1[start..i].iter().step_by(self.stride).copied().collect(),
            trace2: p2[start..i].iter().step_by(self.stride).copied().collect(),
        }
    }
}

impl<'a> Iterator for FrameSampler<'a> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next >= self.n_frames {
            return None;
        }
        let frame = self.frame(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n_frames - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for FrameSampler<'a> {}
