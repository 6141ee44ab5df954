// Double pendulum animation sample
// Integrates the ideal double pendulum with RK4 and renders the bobs with decaying traces.

use nalgebra::{Vector2, Vector4};
use std::error::Error;
use tracing_subscriber::EnvFilter;

extern crate pendulum;
use pendulum::animation::{img_tag, make_animation, AnimationConfig, Trajectory};
use pendulum::utils::deg2rad;

/// [theta1, theta2, omega1, omega2]
struct DoublePendulum {
    m1: f64,
    m2: f64,
    l1: f64,
    l2: f64,
    g: f64,
}

impl DoublePendulum {
    fn derivative(&self, s: &Vector4<f64>) -> Vector4<f64> {
        let (m1, m2, l1, l2, g) = (self.m1, self.m2, self.l1, self.l2, self.g);
        let (th1, th2, w1, w2) = (s[0], s[1], s[2], s[3]);
        let delta = th1 - th2;
        let den = 2.0 * m1 + m2 - m2 * (2.0 * delta).cos();

        let a1 = (-g * (2.0 * m1 + m2) * th1.sin()
            - m2 * g * (th1 - 2.0 * th2).sin()
            - 2.0 * delta.sin() * m2 * (w2 * w2 * l2 + w1 * w1 * l1 * delta.cos()))
            / (l1 * den);
        let a2 = (2.0
            * delta.sin()
            * (w1 * w1 * l1 * (m1 + m2)
                + g * (m1 + m2) * th1.cos()
                + w2 * w2 * l2 * m2 * delta.cos()))
            / (l2 * den);

        Vector4::new(w1, w2, a1, a2)
    }

    fn step(&self, s: &Vector4<f64>, dt: f64) -> Vector4<f64> {
        let k1 = self.derivative(s);
        let k2 = self.derivative(&(s + k1 * (dt / 2.0)));
        let k3 = self.derivative(&(s + k2 * (dt / 2.0)));
        let k4 = self.derivative(&(s + k3 * dt));
        s + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }

    fn positions(&self, s: &Vector4<f64>) -> (Vector2<f64>, Vector2<f64>) {
        let p1 = Vector2::new(self.l1 * s[0].sin(), -self.l1 * s[0].cos());
        let p2 = p1 + Vector2::new(self.l2 * s[1].sin(), -self.l2 * s[1].cos());
        (p1, p2)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sim_time = 20.0;
    let dt = 0.005;

    let model = DoublePendulum {
        m1: 1.0,  // [kg]
        m2: 1.0,  // [kg]
        l1: 1.0,  // [m]
        l2: 1.0,  // [m]
        g: 9.81, // [m/s^2]
    };
    let mut state = Vector4::new(deg2rad(120.0), deg2rad(-10.0), 0.0, 0.0);

    let mut t = Vec::new();
    let mut p1 = Vec::new();
    let mut p2 = Vec::new();
    let mut time = 0.0;
    while time < sim_time {
        let (a, b) = model.positions(&state);
        t.push(time);
        p1.push(a);
        p2.push(b);
        state = model.step(&state, dt);
        time += dt;
    }

    let trajectory = Trajectory::new(t, p1, p2)?;
    let config = AnimationConfig::default()
        .with_fps(25)
        .with_duration(sim_time)
        .with_decay_length(50)
        .with_circle(model.l1 + model.l2);

    // Create output directory if it didnt exist
    std::fs::create_dir_all("./img")?;
    let path = "img/double_pendulum.gif";
    make_animation(&trajectory, &config, path)?;
    println!("{}", img_tag(path));
    Ok(())
}
