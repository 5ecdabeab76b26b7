//! A small walled courtyard: a lattice of nav nodes, a few wall segments and
//! four guards.

use anyhow::Result;

use npc_agent::{AgentStore, AgentStoreBuilder};
use npc_core::{NodeId, Vec2};
use npc_nav::{NavGraph, NavGraphBuilder};
use npc_perception::{LayerMask, Wall, WallSet};

/// Layer the courtyard walls live on; matches `BehaviorConfig::default`.
pub const WALLS: LayerMask = LayerMask::layer(0);

const COLS: u32 = 6;
const ROWS: u32 = 4;
const SPACING: f32 = 5.0;

pub struct Scene {
    pub graph:  NavGraph,
    pub walls:  WallSet,
    pub agents: AgentStore,
    /// Axis-aligned bounds the target wanders in.
    pub min:    Vec2,
    pub max:    Vec2,
}

fn node(col: u32, row: u32) -> NodeId {
    NodeId(row * COLS + col)
}

fn lattice() -> Result<NavGraph> {
    let mut b = NavGraphBuilder::with_capacity((COLS * ROWS) as usize, (4 * COLS * ROWS) as usize);
    for row in 0..ROWS {
        for col in 0..COLS {
            b.add_node(Vec2::new(col as f32 * SPACING, row as f32 * SPACING));
        }
    }
    for row in 0..ROWS {
        for col in 0..COLS {
            if col + 1 < COLS {
                b.add_link(node(col, row), node(col + 1, row))?;
            }
            if row + 1 < ROWS {
                b.add_link(node(col, row), node(col, row + 1))?;
            }
        }
    }
    Ok(b.build())
}

/// Two pillars between lattice lines; they block sight, not movement.
fn pillars() -> WallSet {
    WallSet::with_walls(vec![
        Wall::new(Vec2::new(7.5, 3.0), Vec2::new(7.5, 7.0), WALLS),
        Wall::new(Vec2::new(17.5, 8.0), Vec2::new(17.5, 12.0), WALLS),
    ])
}

pub fn courtyard() -> Result<Scene> {
    let graph = lattice()?;

    let mut agents = AgentStoreBuilder::with_capacity(4);
    // South wall walker.
    agents.spawn(Vec2::new(0.0, 0.0), Vec2::X, vec![node(0, 0), node(5, 0)]);
    // North wall walker, opposite direction.
    agents.spawn(Vec2::new(25.0, 15.0), -Vec2::X, vec![node(5, 3), node(0, 3)]);
    // Diagonal loop through the middle.
    agents.spawn(
        Vec2::new(0.0, 5.0),
        Vec2::X,
        vec![node(0, 1), node(3, 2), node(5, 1), node(2, 1)],
    );
    // Sentry with no route: stays idle until it sees the target itself.
    agents.spawn(Vec2::new(12.5, 7.5), Vec2::Y, vec![]);

    let max = Vec2::new((COLS - 1) as f32 * SPACING, (ROWS - 1) as f32 * SPACING);
    Ok(Scene { graph, walls: pillars(), agents: agents.build(), min: Vec2::ZERO, max })
}
