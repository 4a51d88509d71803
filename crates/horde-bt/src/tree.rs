use horde_core::{Result, TickContext};
use tracing::trace;

use crate::bt::{BtNode, Status};

/// Owns the root node and runs it once per frame.
pub struct BehaviorTree<A, W: ?Sized> {
    root: Box<dyn BtNode<A, W>>,
    last: Option<Status>,
}

impl<A, W: ?Sized> BehaviorTree<A, W> {
    pub fn new(root: Box<dyn BtNode<A, W>>) -> Self {
        Self { root, last: None }
    }

    /// Status returned by the most recent successful `run`, if any.
    pub fn last_status(&self) -> Option<Status> {
        self.last
    }

    pub fn root_name(&self) -> &str {
        self.root.name()
    }

    /// Evaluate the root once.
    ///
    /// Callers in a game loop usually ignore the returned status: the effects
    /// have already been applied to `agent`.
    pub fn run(&mut self, ctx: &TickContext, agent: &mut A, world: &W) -> Result<Status> {
        let status = self.root.tick(ctx, agent, world)?;
        trace!(tick = ctx.tick, root = self.root.name(), ?status, "tree ran");
        self.last = Some(status);
        if status != Status::Running {
            self.root.reset();
        }
        Ok(status)
    }

    pub fn reset(&mut self) {
        self.root.reset();
        self.last = None;
    }
}
