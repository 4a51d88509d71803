//! Shorthands for building trees without spelling out `Box::new(...)`.
//!
//! Each helper returns a boxed node so composites can hold a mix of conditions,
//! actions and nested composites.

use std::borrow::Cow;

use horde_core::{Result, TickContext};

use crate::{Action, BtNode, Condition, Selector, Sequence, Status};

#[inline]
pub fn sequence<A: 'static, W: ?Sized + 'static>(
    name: impl Into<Cow<'static, str>>,
    children: Vec<Box<dyn BtNode<A, W>>>,
) -> Box<dyn BtNode<A, W>> {
    Box::new(Sequence::new(name, children))
}

#[inline]
pub fn selector<A: 'static, W: ?Sized + 'static>(
    name: impl Into<Cow<'static, str>>,
    children: Vec<Box<dyn BtNode<A, W>>>,
) -> Box<dyn BtNode<A, W>> {
    Box::new(Selector::new(name, children))
}

#[inline]
pub fn condition<A, W, F>(name: impl Into<Cow<'static, str>>, cond: F) -> Box<dyn BtNode<A, W>>
where
    A: 'static,
    W: ?Sized + 'static,
    F: FnMut(&A, &W, &TickContext) -> bool + 'static,
{
    Box::new(Condition::new(name, cond))
}

#[inline]
pub fn action<A, W, F>(name: impl Into<Cow<'static, str>>, run: F) -> Box<dyn BtNode<A, W>>
where
    A: 'static,
    W: ?Sized + 'static,
    F: FnMut(&mut A, &W, &TickContext) -> Result<Status> + 'static,
{
    Box::new(Action::new(name, run))
}
