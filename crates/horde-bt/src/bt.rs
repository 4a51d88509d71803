use horde_core::{Result, TickContext};

/// Outcome of evaluating a node for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Not finished yet; the node wants to be ticked again next frame.
    Running,
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// `Success` when `value` holds, `Failure` otherwise.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

pub trait BtNode<A, W: ?Sized> {
    /// Human-readable label, used in traces.
    fn name(&self) -> &str;

    /// Evaluate the node once.
    ///
    /// An `Err` is reserved for contract violations (for example a callback
    /// invoked with missing arguments). Unmet conditions are `Ok(Status::Failure)`.
    fn tick(&mut self, ctx: &TickContext, agent: &mut A, world: &W) -> Result<Status>;

    /// Forget any resume bookkeeping held by this node and its children.
    fn reset(&mut self);
}

impl<A, W: ?Sized> BtNode<A, W> for Box<dyn BtNode<A, W>> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn tick(&mut self, ctx: &TickContext, agent: &mut A, world: &W) -> Result<Status> {
        (**self).tick(ctx, agent, world)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
