//! Headless game loop: a scripted player, loose balls and a handful of zombies.

use std::io::Write;

use anyhow::{Context, Result};
use horde_agent::{BoundingBox, RenderSnapshot, Zombie, ZombieConfig, BALL_COLLISION_GROUP};
use horde_core::{PlayerSnapshot, TickContext, Vec2};
use serde::Serialize;
use tracing::{debug, info};

/// Half the side of a ball's collision box, in pixels.
const BALL_HALF_EXTENT: f32 = 10.0;

#[derive(Debug, Clone, Copy)]
pub enum PlayerScript {
    Fixed(Vec2),
    /// Circle around `center`; `speed` in radians per second.
    Orbit { center: Vec2, radius: f32, speed: f32 },
}

impl PlayerScript {
    fn position_at(&self, elapsed: f32) -> Vec2 {
        match *self {
            PlayerScript::Fixed(p) => p,
            PlayerScript::Orbit {
                center,
                radius,
                speed,
            } => center + Vec2::from_angle(elapsed * speed) * radius,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    pub zombies: u64,
    pub ticks: u64,
    pub dt: f32,
    /// Snapshot period in frames; 0 emits the final frame only.
    pub every: u64,
}

/// One JSON line of output.
#[derive(Serialize)]
struct FrameRecord {
    tick: u64,
    zombie: u64,
    status: String,
    mirrored: bool,
    #[serde(flatten)]
    snapshot: RenderSnapshot,
}

pub struct Simulation {
    zombies: Vec<Zombie>,
    script: PlayerScript,
    player_score: u32,
    balls: Vec<Vec2>,
    options: SimOptions,
}

impl Simulation {
    pub fn new(
        config: &ZombieConfig,
        script: PlayerScript,
        player_score: u32,
        balls: Vec<Vec2>,
        options: SimOptions,
    ) -> Result<Self> {
        let zombies = (0..options.zombies)
            .map(|id| Zombie::new(id, config))
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid zombie config")?;
        Ok(Self {
            zombies,
            script,
            player_score,
            balls,
            options,
        })
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        info!(
            zombies = self.zombies.len(),
            ticks = self.options.ticks,
            balls = self.balls.len(),
            "simulation started"
        );

        let mut ctx = TickContext::new(0, self.options.dt);
        for _ in 0..self.options.ticks {
            let elapsed = ctx.tick as f32 * ctx.dt_seconds;
            let player = PlayerSnapshot::new(self.script.position_at(elapsed), self.player_score);

            for zombie in &mut self.zombies {
                zombie
                    .update(&ctx, &player)
                    .with_context(|| format!("zombie {} failed at tick {}", zombie.id(), ctx.tick))?;
                collect_balls(zombie, &mut self.balls);
            }

            let last = ctx.tick + 1 == self.options.ticks;
            let periodic = self.options.every > 0 && ctx.tick % self.options.every == 0;
            if periodic || last {
                self.emit(ctx.tick, out)?;
            }
            ctx = ctx.next();
        }

        let scores: Vec<u32> = self.zombies.iter().map(|z| z.state().score()).collect();
        info!(?scores, balls_left = self.balls.len(), "simulation finished");
        Ok(())
    }

    fn emit<W: Write>(&self, tick: u64, out: &mut W) -> Result<()> {
        for zombie in &self.zombies {
            let snapshot = zombie.snapshot();
            let record = FrameRecord {
                tick,
                zombie: zombie.id(),
                status: zombie
                    .last_status()
                    .map(|s| format!("{s:?}"))
                    .unwrap_or_default(),
                mirrored: snapshot.mirrored(),
                snapshot,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Hand every ball overlapping the zombie to its collision handler and
/// remove it from the field.
fn collect_balls(zombie: &mut Zombie, balls: &mut Vec<Vec2>) {
    let bbox = zombie.state().bounding_box();
    balls.retain(|ball| {
        let hit = bbox.overlaps(&BoundingBox::around(*ball, BALL_HALF_EXTENT));
        if hit {
            debug!(id = zombie.id(), x = ball.x, y = ball.y, "ball hit");
            zombie.handle_collision(BALL_COLLISION_GROUP, ball);
        }
        !hit
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(ticks: u64, every: u64) -> SimOptions {
        SimOptions {
            zombies: 1,
            ticks,
            dt: 0.1,
            every,
        }
    }

    fn seeded_at(spawn: Vec2) -> ZombieConfig {
        ZombieConfig {
            spawn: Some(spawn),
            seed: Some(3),
            ..ZombieConfig::default()
        }
    }

    #[test]
    fn orbit_starts_on_positive_x_axis() {
        let script = PlayerScript::Orbit {
            center: Vec2::new(100.0, 100.0),
            radius: 50.0,
            speed: 1.0,
        };
        let p = script.position_at(0.0);
        assert!((p.x - 150.0).abs() < 1e-4);
        assert!((p.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn ball_under_zombie_is_collected_once() {
        let config = seeded_at(Vec2::new(500.0, 500.0));
        let balls = vec![Vec2::new(520.0, 480.0), Vec2::new(1000.0, 1000.0)];
        let mut sim = Simulation::new(
            &config,
            PlayerScript::Fixed(Vec2::new(100.0, 100.0)),
            0,
            balls,
            options(1, 0),
        )
        .unwrap();

        let mut out = Vec::new();
        sim.run(&mut out).unwrap();

        assert_eq!(sim.zombies[0].state().score(), 1);
        assert_eq!(sim.balls, vec![Vec2::new(1000.0, 1000.0)]);
    }

    #[test]
    fn emits_periodic_and_final_frames() {
        let config = seeded_at(Vec2::new(500.0, 500.0));
        let mut sim = Simulation::new(
            &config,
            PlayerScript::Fixed(Vec2::new(100.0, 100.0)),
            0,
            Vec::new(),
            options(5, 2),
        )
        .unwrap();

        let mut out = Vec::new();
        sim.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let ticks: Vec<u64> = text
            .lines()
            .map(|line| {
                let v: serde_json::Value = serde_json::from_str(line).unwrap();
                v["tick"].as_u64().unwrap()
            })
            .collect();
        assert_eq!(ticks, vec![0, 2, 4]);

        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["zombie"], 0);
        assert_eq!(first["animation"], "Walk");
        assert!(first["bounding_box"]["left"].is_number());
    }
}
