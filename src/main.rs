use std::error::Error;

use pendulum::animation::{img_tag, make_animation, AnimationConfig};
use pendulum::data::load_trajectory_csv;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: pendulum <trajectory.csv> <output.gif> [fps] [n_seconds] [decay_length]";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output) = match (args.first(), args.get(1)) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err(USAGE.into()),
    };

    let mut config = AnimationConfig::default();
    if let Some(fps) = args.get(2) {
        config = config.with_fps(fps.parse()?);
    }
    if let Some(n_seconds) = args.get(3) {
        config = config.with_duration(n_seconds.parse()?);
    }
    if let Some(decay) = args.get(4) {
        config = config.with_decay_length(decay.parse()?);
    }

    let trajectory = load_trajectory_csv(input)?;
    make_animation(&trajectory, &config, output)?;
    println!("{}", img_tag(output));
    Ok(())
}
