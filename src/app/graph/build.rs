use anatomy_atlas::graph::AtlasGraph;
use anatomy_atlas::layout::Positions;
use eframe::egui::Vec2;

use super::super::render_utils::{edge_style, node_color, node_radius};
use super::super::{RenderEdge, RenderGraph, RenderNode, ViewScratch};

/// Fraction of the remaining distance covered per second while easing.
const EASE_RATE: f32 = 7.5;
const SETTLED_DISTANCE: f32 = 0.05;

impl RenderGraph {
    pub(in crate::app) fn build(graph: &AtlasGraph) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| RenderNode {
                world_pos: Vec2::ZERO,
                target_pos: Vec2::ZERO,
                base_radius: node_radius(node.kind, node.degree),
                color: node_color(node.kind),
            })
            .collect::<Vec<_>>();

        // Pruning in the graph builder guarantees both endpoints resolve.
        let edges = graph
            .edges
            .iter()
            .filter_map(|edge| {
                let source = graph.node_index(&edge.source)?;
                let target = graph.node_index(&edge.target)?;
                let style = edge_style(edge.kind);
                Some(RenderEdge {
                    source,
                    target,
                    color: style.color,
                    width: style.width,
                    line: style.line,
                    arrow: style.arrow,
                })
            })
            .collect::<Vec<_>>();

        Self {
            nodes,
            edges,
            view_scratch: ViewScratch {
                screen_positions: Vec::new(),
                screen_radii: Vec::new(),
                visible_indices: Vec::new(),
            },
        }
    }

    /// Sets new targets for the nodes named in `positions`. Without
    /// animation the nodes jump there immediately.
    pub(in crate::app) fn apply_positions(
        &mut self,
        graph: &AtlasGraph,
        positions: &Positions,
        animate: bool,
    ) {
        for (id, position) in positions {
            let Some(node) = graph
                .node_index(id)
                .and_then(|index| self.nodes.get_mut(index))
            else {
                continue;
            };
            node.target_pos = position.to_vec2();
            if !animate {
                node.world_pos = node.target_pos;
            }
        }
    }

    /// Eases every node toward its target. Returns true while any node is
    /// still moving.
    pub(in crate::app) fn step_transition(&mut self, delta_seconds: f32) -> bool {
        let t = (delta_seconds * EASE_RATE).clamp(0.0, 1.0);
        let mut moving = false;
        for node in &mut self.nodes {
            let remaining = node.target_pos - node.world_pos;
            if remaining.length_sq() <= SETTLED_DISTANCE * SETTLED_DISTANCE {
                node.world_pos = node.target_pos;
                continue;
            }
            node.world_pos += remaining * t;
            moving = true;
        }
        moving
    }
}
