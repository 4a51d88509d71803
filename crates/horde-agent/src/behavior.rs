//! Composition of the zombie's behavior tree.
//!
//! ```text
//! Selector("pursue-or-wander")
//!  ├─ Sequence("pursue")
//!  │   ├─ Condition: is player nearby (detect radius)
//!  │   ├─ Condition: has more score than player
//!  │   └─ Action:    move toward player (arrival radius)
//!  └─ Sequence(<roaming>)
//!      ├─ Action: pick target (random / next patrol point / fixed point)
//!      └─ Action: move toward target (arrival radius)
//! ```

use horde_bt::{action, condition, selector, sequence, BehaviorTree, BtNode};
use horde_core::{TickContext, WorldView};

use crate::config::{Roaming, ZombieConfig};
use crate::zombie::ZombieState;

/// The world as seen by zombie callbacks.
pub type World = dyn WorldView;

type Node = Box<dyn BtNode<ZombieState, World>>;

pub fn build_tree(config: &ZombieConfig) -> BehaviorTree<ZombieState, World> {
    let detect = config.detect_radius_m;
    let arrival = config.arrival_radius_m;

    let pursue = sequence(
        "pursue",
        vec![
            condition(
                "is player nearby",
                move |z: &ZombieState, w: &World, _: &TickContext| {
                    z.is_player_nearby(w, detect).is_success()
                },
            ),
            condition(
                "has more score than player",
                |z: &ZombieState, w: &World, _: &TickContext| {
                    z.has_more_score_than_player(w).is_success()
                },
            ),
            action(
                "move toward player",
                move |z: &mut ZombieState, w: &World, ctx: &TickContext| {
                    Ok(z.move_toward_player(w, ctx, arrival))
                },
            ),
        ],
    );

    let roam = sequence(
        config.roaming.label(),
        vec![pick_target(config.roaming), move_toward_target(arrival)],
    );

    BehaviorTree::new(selector("pursue-or-wander", vec![pursue, roam]))
}

fn pick_target(roaming: Roaming) -> Node {
    match roaming {
        Roaming::Wander => action(
            "set random target",
            |z: &mut ZombieState, _: &World, _: &TickContext| Ok(z.set_random_target()),
        ),
        Roaming::Patrol => action(
            "get next patrol point",
            |z: &mut ZombieState, _: &World, _: &TickContext| Ok(z.get_next_patrol_point()),
        ),
        Roaming::Goto { x, y } => action(
            "set target location",
            move |z: &mut ZombieState, _: &World, _: &TickContext| z.set_target(x, y),
        ),
    }
}

fn move_toward_target(arrival: f32) -> Node {
    action(
        "move toward target",
        move |z: &mut ZombieState, _: &World, ctx: &TickContext| {
            Ok(z.move_toward_target(ctx, arrival))
        },
    )
}
