//! Behavior tree runtime for frame-driven agents.
//!
//! Nodes are generic over the agent state `A` they act on and the read-only
//! world `W` they observe. The tree never stores the agent: the owner lends
//! its state to [`BehaviorTree::run`] once per frame.
//!
//! Composites keep the index of the child that returned `Running`, so a
//! multi-frame action is resumed on the next frame instead of re-running the
//! siblings before it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod builder;
pub mod nodes;
pub mod tree;

pub use bt::{BtNode, Status};
pub use builder::{action, condition, selector, sequence};
pub use nodes::{Action, Condition, Selector, Sequence};
pub use tree::BehaviorTree;
