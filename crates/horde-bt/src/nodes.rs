use std::borrow::Cow;

use horde_core::{Result, TickContext};
use tracing::trace;

use crate::bt::{BtNode, Status};

/// Runs children in order until one fails.
///
/// The sequence remembers which child returned `Running` and resumes there on
/// the next tick, so children that already succeeded are not re-evaluated.
/// Any `Failure` aborts the sequence and the next tick starts from the first
/// child again; so does completing every child.
pub struct Sequence<A, W: ?Sized> {
    name: Cow<'static, str>,
    children: Vec<Box<dyn BtNode<A, W>>>,
    index: usize,
}

impl<A, W: ?Sized> Sequence<A, W> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(name: impl Into<Cow<'static, str>>, children: Vec<Box<dyn BtNode<A, W>>>) -> Self {
        let name = name.into();
        assert!(!children.is_empty(), "sequence `{name}` must have at least one child");
        Self {
            name,
            children,
            index: 0,
        }
    }

    /// Index of the child that will be ticked first on the next frame.
    pub fn running_index(&self) -> usize {
        self.index
    }
}

impl<A, W: ?Sized> BtNode<A, W> for Sequence<A, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &TickContext, agent: &mut A, world: &W) -> Result<Status> {
        while self.index < self.children.len() {
            let status = match self.children[self.index].tick(ctx, agent, world) {
                Ok(status) => status,
                Err(err) => {
                    self.reset();
                    return Err(err);
                }
            };
            match status {
                Status::Running => {
                    trace!(node = %self.name, child = self.index, "sequence running");
                    return Ok(Status::Running);
                }
                Status::Failure => {
                    trace!(node = %self.name, child = self.index, "sequence failed");
                    self.reset();
                    return Ok(Status::Failure);
                }
                Status::Success => self.index += 1,
            }
        }

        trace!(node = %self.name, "sequence succeeded");
        self.reset();
        Ok(Status::Success)
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Tries children in priority order until one succeeds.
///
/// Once a child returns `Running` the selector commits to it: later ticks
/// resume at that child and do not re-evaluate the higher-priority children
/// before it until the committed child resolves. If the committed child
/// fails, the remaining lower-priority children are tried in the same tick.
pub struct Selector<A, W: ?Sized> {
    name: Cow<'static, str>,
    children: Vec<Box<dyn BtNode<A, W>>>,
    index: usize,
}

impl<A, W: ?Sized> Selector<A, W> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(name: impl Into<Cow<'static, str>>, children: Vec<Box<dyn BtNode<A, W>>>) -> Self {
        let name = name.into();
        assert!(!children.is_empty(), "selector `{name}` must have at least one child");
        Self {
            name,
            children,
            index: 0,
        }
    }

    /// Index of the child that will be ticked first on the next frame.
    pub fn running_index(&self) -> usize {
        self.index
    }
}

impl<A, W: ?Sized> BtNode<A, W> for Selector<A, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &TickContext, agent: &mut A, world: &W) -> Result<Status> {
        while self.index < self.children.len() {
            let status = match self.children[self.index].tick(ctx, agent, world) {
                Ok(status) => status,
                Err(err) => {
                    self.reset();
                    return Err(err);
                }
            };
            match status {
                Status::Running => {
                    trace!(node = %self.name, child = self.index, "selector running");
                    return Ok(Status::Running);
                }
                Status::Success => {
                    trace!(node = %self.name, child = self.index, "selector succeeded");
                    self.reset();
                    return Ok(Status::Success);
                }
                Status::Failure => self.index += 1,
            }
        }

        trace!(node = %self.name, "selector failed");
        self.reset();
        Ok(Status::Failure)
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Side-effect-free predicate leaf.
///
/// The predicate only gets a shared borrow of the agent, so it cannot mutate
/// it. Never returns `Running`.
pub struct Condition<F> {
    name: Cow<'static, str>,
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, cond: F) -> Self {
        Self {
            name: name.into(),
            cond,
        }
    }
}

impl<A, W, F> BtNode<A, W> for Condition<F>
where
    W: ?Sized,
    F: FnMut(&A, &W, &TickContext) -> bool,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &TickContext, agent: &mut A, world: &W) -> Result<Status> {
        let status = Status::from_bool((self.cond)(&*agent, world, ctx));
        trace!(node = %self.name, ?status, "condition");
        Ok(status)
    }

    fn reset(&mut self) {}
}

/// Leaf that runs a callback against the agent.
///
/// The callback may mutate the agent and may return `Running` to be resumed on
/// the next frame. Arguments are bound by capturing them in the closure.
pub struct Action<F> {
    name: Cow<'static, str>,
    run: F,
}

impl<F> Action<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, run: F) -> Self {
        Self {
            name: name.into(),
            run,
        }
    }
}

impl<A, W, F> BtNode<A, W> for Action<F>
where
    W: ?Sized,
    F: FnMut(&mut A, &W, &TickContext) -> Result<Status>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &TickContext, agent: &mut A, world: &W) -> Result<Status> {
        let status = (self.run)(agent, world, ctx)?;
        trace!(node = %self.name, ?status, "action");
        Ok(status)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::Error;

    #[derive(Default)]
    struct Counter {
        value: i32,
        log: Vec<&'static str>,
    }

    type Node = Box<dyn BtNode<Counter, ()>>;

    fn ctx() -> TickContext {
        TickContext::new(0, 0.1)
    }

    fn succeed(tag: &'static str) -> Node {
        Box::new(Action::new(tag, move |c: &mut Counter, _: &(), _: &TickContext| {
            c.log.push(tag);
            c.value += 1;
            Ok(Status::Success)
        }))
    }

    fn fail(tag: &'static str) -> Node {
        Box::new(Action::new(tag, move |c: &mut Counter, _: &(), _: &TickContext| {
            c.log.push(tag);
            Ok(Status::Failure)
        }))
    }

    fn run_for(tag: &'static str, frames: i32) -> Node {
        let mut left = frames;
        Box::new(Action::new(tag, move |c: &mut Counter, _: &(), _: &TickContext| {
            c.log.push(tag);
            left -= 1;
            if left > 0 {
                Ok(Status::Running)
            } else {
                left = frames;
                Ok(Status::Success)
            }
        }))
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new("seq", vec![succeed("a"), succeed("b")]);
        let mut c = Counter::default();
        assert_eq!(seq.tick(&ctx(), &mut c, &()).unwrap(), Status::Success);
        assert_eq!(c.value, 2);
        assert_eq!(seq.running_index(), 0);
    }

    #[test]
    fn sequence_stops_at_first_failure() {
        let mut seq = Sequence::new("seq", vec![succeed("a"), fail("b"), succeed("c")]);
        let mut c = Counter::default();
        assert_eq!(seq.tick(&ctx(), &mut c, &()).unwrap(), Status::Failure);
        assert_eq!(c.log, vec!["a", "b"]);
        assert_eq!(seq.running_index(), 0);
    }

    #[test]
    fn sequence_resumes_running_child() {
        let mut seq = Sequence::new("seq", vec![succeed("a"), run_for("walk", 3), succeed("c")]);
        let mut c = Counter::default();

        assert_eq!(seq.tick(&ctx(), &mut c, &()).unwrap(), Status::Running);
        assert_eq!(seq.running_index(), 1);
        assert_eq!(seq.tick(&ctx(), &mut c, &()).unwrap(), Status::Running);
        assert_eq!(seq.tick(&ctx(), &mut c, &()).unwrap(), Status::Success);

        assert_eq!(c.log, vec!["a", "walk", "walk", "walk", "c"]);
        assert_eq!(seq.running_index(), 0);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new("sel", vec![fail("a"), succeed("b"), succeed("c")]);
        let mut c = Counter::default();
        assert_eq!(sel.tick(&ctx(), &mut c, &()).unwrap(), Status::Success);
        assert_eq!(c.log, vec!["a", "b"]);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new("sel", vec![fail("a"), fail("b")]);
        let mut c = Counter::default();
        assert_eq!(sel.tick(&ctx(), &mut c, &()).unwrap(), Status::Failure);
        assert_eq!(sel.running_index(), 0);
    }

    #[test]
    fn selector_commits_to_running_child() {
        let mut sel = Selector::new("sel", vec![fail("guard"), run_for("walk", 2)]);
        let mut c = Counter::default();

        assert_eq!(sel.tick(&ctx(), &mut c, &()).unwrap(), Status::Running);
        assert_eq!(sel.running_index(), 1);
        assert_eq!(sel.tick(&ctx(), &mut c, &()).unwrap(), Status::Success);
        assert_eq!(c.log, vec!["guard", "walk", "walk"]);
    }

    #[test]
    fn condition_maps_bool_to_status() {
        let mut yes = Condition::new("yes", |c: &Counter, _: &(), _: &TickContext| c.value >= 0);
        let mut no = Condition::new("no", |c: &Counter, _: &(), _: &TickContext| c.value > 0);
        let mut c = Counter::default();
        assert_eq!(BtNode::<Counter, ()>::tick(&mut yes, &ctx(), &mut c, &()).unwrap(), Status::Success);
        assert_eq!(BtNode::<Counter, ()>::tick(&mut no, &ctx(), &mut c, &()).unwrap(), Status::Failure);
    }

    #[test]
    fn errors_propagate_and_reset_composites() {
        let boom: Node = Box::new(Action::new("boom", |_: &mut Counter, _: &(), _: &TickContext| {
            Err(Error::invalid_argument("boom", "always"))
        }));
        let mut seq = Sequence::new("seq", vec![run_for("walk", 2), boom]);
        let mut c = Counter::default();

        assert_eq!(seq.tick(&ctx(), &mut c, &()).unwrap(), Status::Running);
        assert_eq!(seq.running_index(), 0);
        let err = seq.tick(&ctx(), &mut c, &()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { callback: "boom", .. }));
        assert_eq!(seq.running_index(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one child")]
    fn empty_sequence_panics() {
        let _ = Sequence::<Counter, ()>::new("empty", Vec::new());
    }
}
