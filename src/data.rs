use nalgebra::Vector2;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::animation::{Result, Trajectory};

/// One row of a trajectory CSV file, header `t,x1,y1,x2,y2`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct TrajectoryRecord {
    pub t: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

pub fn load_trajectory_csv(path: impl AsRef<Path>) -> Result<Trajectory> {
    let reader = csv::Reader::from_path(path)?;
    collect_records(reader)
}

pub fn read_trajectory<R: Read>(reader: R) -> Result<Trajectory> {
    collect_records(csv::Reader::from_reader(reader))
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Trajectory> {
    let mut t = Vec::new();
    let mut p1 = Vec::new();
    let mut p2 = Vec::new();
    for record in reader.deserialize() {
        let record: TrajectoryRecord = record?;
        t.push(record.t);
        p1.push(Vector2::new(record.x1, record.y1));
        p2.push(Vector2::new(record.x2, record.y2));
    }
    Trajectory::new(t, p1, p2)
}
