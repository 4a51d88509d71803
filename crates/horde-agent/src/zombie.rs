use horde_bt::{BehaviorTree, Status};
use horde_core::{AgentRng, Error, Result, TickContext, Vec2};
use horde_steer::{kmph_to_pps, move_slightly_toward, within_distance};
use tracing::{debug, info};

use crate::behavior::{build_tree, World};
use crate::config::{Bounds, ConfigError, ZombieConfig};
use crate::render::{AnimationState, BoundingBox, RenderSnapshot};

/// Collision category that counts as picking up a ball.
pub const BALL_COLLISION_GROUP: &str = "zombie:ball";

const FRAMES_PER_ACTION: f32 = 10.0;
const TIME_PER_ACTION: f32 = 0.5;
const ACTION_PER_TIME: f32 = 1.0 / TIME_PER_ACTION;
const HALF_EXTENT: f32 = 50.0;

/// Everything the behavior callbacks read and write.
///
/// Owned by [`Zombie`] and lent to the tree for the duration of a frame.
#[derive(Debug, Clone)]
pub struct ZombieState {
    position: Vec2,
    facing: f32,
    speed: f32,
    run_speed: f32,
    target: Vec2,
    patrol: Vec<Vec2>,
    patrol_index: usize,
    score: u32,
    animation: AnimationState,
    frame: f32,
    wander_bounds: Bounds,
    rng: AgentRng,
}

impl ZombieState {
    pub fn new(config: &ZombieConfig, mut rng: AgentRng) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let position = match config.spawn {
            Some(spawn) => spawn,
            None => config.spawn_bounds.sample(&mut rng),
        };
        let frame = rng.gen_range(0..FRAMES_PER_ACTION as u32) as f32;
        Ok(Self {
            position,
            facing: 0.0,
            speed: 0.0,
            run_speed: kmph_to_pps(config.speed_kmph),
            target: config.initial_target,
            patrol: config.patrol.clone(),
            patrol_index: 0,
            score: 0,
            animation: AnimationState::Idle,
            frame,
            wander_bounds: config.wander_bounds,
            rng,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Current linear speed; zero until the first move.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Configured running speed in scene units per second.
    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn patrol_index(&self) -> usize {
        self.patrol_index
    }

    pub fn patrol_len(&self) -> usize {
        self.patrol.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn frame(&self) -> u32 {
        self.frame as u32
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.position, HALF_EXTENT)
    }

    pub fn set_target(&mut self, x: Option<f32>, y: Option<f32>) -> Result<Status> {
        let (Some(x), Some(y)) = (x, y) else {
            return Err(Error::invalid_argument(
                "set_target",
                "both x and y coordinates are required",
            ));
        };
        self.target = Vec2::new(x, y);
        debug!(x, y, "target set");
        Ok(Status::Success)
    }

    pub fn move_toward_target(&mut self, ctx: &TickContext, arrival_radius_m: f32) -> Status {
        let target = self.target;
        self.step_toward(target, ctx.dt_seconds);
        arrived_or_running(within_distance(target, self.position, arrival_radius_m))
    }

    pub fn set_random_target(&mut self) -> Status {
        self.target = self.wander_bounds.sample(&mut self.rng);
        debug!(x = self.target.x, y = self.target.y, "random target picked");
        Status::Success
    }

    pub fn is_player_nearby(&self, world: &World, radius_m: f32) -> Status {
        Status::from_bool(within_distance(world.player_position(), self.position, radius_m))
    }

    /// Like [`Self::move_toward_target`], but chases the player's live position.
    pub fn move_toward_player(
        &mut self,
        world: &World,
        ctx: &TickContext,
        arrival_radius_m: f32,
    ) -> Status {
        let player = world.player_position();
        self.step_toward(player, ctx.dt_seconds);
        arrived_or_running(within_distance(player, self.position, arrival_radius_m))
    }

    pub fn get_next_patrol_point(&mut self) -> Status {
        self.target = self.patrol[self.patrol_index];
        self.patrol_index = (self.patrol_index + 1) % self.patrol.len();
        debug!(
            x = self.target.x,
            y = self.target.y,
            next = self.patrol_index,
            "patrol point"
        );
        Status::Success
    }

    /// Ties favor the zombie.
    pub fn has_more_score_than_player(&self, world: &World) -> Status {
        Status::from_bool(self.score >= world.player_score())
    }

    fn step_toward(&mut self, target: Vec2, dt: f32) {
        self.animation = AnimationState::Walk;
        self.speed = self.run_speed;
        let step = move_slightly_toward(self.position, target, self.speed, dt);
        self.position = step.position;
        self.facing = step.facing;
    }

    fn advance_frame(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.frame = (self.frame + FRAMES_PER_ACTION * ACTION_PER_TIME * dt) % FRAMES_PER_ACTION;
    }
}

/// Movement never fails: not there yet means still running.
fn arrived_or_running(arrived: bool) -> Status {
    if arrived {
        Status::Success
    } else {
        Status::Running
    }
}

/// A zombie: its state plus the behavior tree that drives it.
pub struct Zombie {
    id: u64,
    state: ZombieState,
    tree: BehaviorTree<ZombieState, World>,
}

impl Zombie {
    /// Spawn a zombie. `id` keeps seeded runs reproducible per agent.
    pub fn new(id: u64, config: &ZombieConfig) -> std::result::Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => AgentRng::new(seed, id),
            None => AgentRng::from_entropy(),
        };
        Self::with_rng(id, config, rng)
    }

    pub fn with_rng(
        id: u64,
        config: &ZombieConfig,
        rng: AgentRng,
    ) -> std::result::Result<Self, ConfigError> {
        let state = ZombieState::new(config, rng)?;
        let tree = build_tree(config);
        info!(
            id,
            x = state.position.x,
            y = state.position.y,
            roaming = config.roaming.label(),
            "zombie spawned"
        );
        Ok(Self { id, state, tree })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &ZombieState {
        &self.state
    }

    /// Status of the most recent tree run.
    pub fn last_status(&self) -> Option<Status> {
        self.tree.last_status()
    }

    /// Advance animation and run the behavior tree once.
    ///
    /// The returned status is informational; all effects are already applied.
    /// An error means the tree is misconfigured.
    pub fn update(&mut self, ctx: &TickContext, world: &World) -> Result<Status> {
        self.state.advance_frame(ctx.dt_seconds);
        self.tree.run(ctx, &mut self.state, world)
    }

    /// Inbound collision notification. Only [`BALL_COLLISION_GROUP`] is
    /// recognized; it adds one to the score.
    pub fn handle_collision<O: ?Sized>(&mut self, group: &str, _other: &O) {
        if group == BALL_COLLISION_GROUP {
            self.state.score += 1;
            debug!(id = self.id, score = self.state.score, "ball collected");
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            position: self.state.position,
            facing: self.state.facing,
            animation: self.state.animation,
            frame: self.state.frame(),
            score: self.state.score,
            target: self.state.target,
            bounding_box: self.state.bounding_box(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(position: Vec2) -> ZombieState {
        let config = ZombieConfig {
            spawn: Some(position),
            ..ZombieConfig::default()
        };
        ZombieState::new(&config, AgentRng::new(7, 1)).unwrap()
    }

    #[test]
    fn spawns_idle_with_initial_target() {
        let state = state_at(Vec2::new(300.0, 400.0));
        assert_eq!(state.animation(), AnimationState::Idle);
        assert_eq!(state.target(), Vec2::new(900.0, 900.0));
        assert_eq!(state.speed(), 0.0);
        assert!(state.frame() < 10);
    }

    #[test]
    fn frame_wraps_within_action_frames() {
        let mut state = state_at(Vec2::ZERO);
        for _ in 0..1000 {
            state.advance_frame(0.037);
            assert!(state.frame >= 0.0 && state.frame < FRAMES_PER_ACTION);
        }
    }

    #[test]
    fn negative_dt_leaves_frame_unchanged() {
        let mut state = state_at(Vec2::ZERO);
        let before = state.frame;
        state.advance_frame(-0.25);
        assert_eq!(state.frame, before);
        assert!(state.frame >= 0.0);
    }

    #[test]
    fn moving_switches_to_walk_at_run_speed() {
        let mut state = state_at(Vec2::ZERO);
        state.set_target(Some(1000.0), Some(0.0)).unwrap();
        let status = state.move_toward_target(&TickContext::new(0, 0.5), 0.5);
        assert_eq!(status, Status::Running);
        assert_eq!(state.animation(), AnimationState::Walk);
        assert_eq!(state.speed(), state.run_speed());
        assert!((state.position().x - state.run_speed() * 0.5).abs() < 1e-3);
    }

    #[test]
    fn bounding_box_is_hundred_units_wide() {
        let state = state_at(Vec2::new(200.0, 300.0));
        let bb = state.bounding_box();
        assert_eq!((bb.left, bb.bottom, bb.right, bb.top), (150.0, 250.0, 250.0, 350.0));
    }
}
