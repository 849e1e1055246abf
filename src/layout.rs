use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Pos2, Vec2, pos2, vec2};
use tracing::debug;

use crate::anatomy::{NodeKind, Region};
use crate::graph::GraphNode;

pub type Positions = HashMap<String, Pos2>;

const RING_NODE_SPACING: f32 = 22.0;
const MIN_NODES_PER_RING: usize = 6;
// radians
const RING_ROTATION: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutMode {
    Cluster,
    Grid,
    Concentric,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [Self::Cluster, Self::Grid, Self::Concentric];

    pub fn key(self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::Grid => "grid",
            Self::Concentric => "concentric",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Layer {
    Bone,
    Joint,
    Ligament,
    Muscle,
    Nerve,
    Skin,
}

impl Layer {
    const ALL: [Layer; 6] = [
        Self::Bone,
        Self::Joint,
        Self::Ligament,
        Self::Muscle,
        Self::Nerve,
        Self::Skin,
    ];

    fn of(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Bone | NodeKind::SoftTissue => Self::Bone,
            NodeKind::Joint => Self::Joint,
            NodeKind::Ligament => Self::Ligament,
            NodeKind::Muscle => Self::Muscle,
            NodeKind::Nerve => Self::Nerve,
            NodeKind::Skin => Self::Skin,
        }
    }

    /// Band as fractions of the region's base radius. Neighbouring bands overlap.
    fn band(self) -> (f32, f32) {
        match self {
            Self::Bone => (0.25, 0.55),
            Self::Joint => (0.55, 0.75),
            Self::Ligament => (0.65, 0.85),
            Self::Muscle => (0.70, 1.00),
            Self::Nerve => (0.95, 1.15),
            Self::Skin => (1.10, 1.30),
        }
    }
}

pub fn region_anchor(region: Region, viewport: Vec2) -> Pos2 {
    let (w, h) = (viewport.x, viewport.y);
    let center = pos2(w / 2.0, h / 2.0);
    let offset = match region {
        Region::HeadNeck => vec2(0.0, -h * 0.34),
        Region::Trunk => vec2(-w * 0.12, -h * 0.05),
        Region::Back => vec2(w * 0.12, -h * 0.05),
        Region::UpperLimb => vec2(-w * 0.32, -h * 0.08),
        Region::LowerLimb => vec2(0.0, h * 0.28),
        Region::Pelvis => vec2(w * 0.32, h * 0.08),
    };
    center + offset
}

fn region_base_radius(node_count: usize) -> f32 {
    ((node_count as f32).sqrt() * 18.0).max(40.0)
}

pub fn cluster_layout<'a>(
    nodes: impl IntoIterator<Item = &'a GraphNode>,
    viewport: Vec2,
) -> Positions {
    let mut groups: HashMap<Region, HashMap<Layer, Vec<&GraphNode>>> = HashMap::new();
    for node in nodes {
        groups
            .entry(node.region)
            .or_default()
            .entry(Layer::of(node.kind))
            .or_default()
            .push(node);
    }

    let mut positions = Positions::new();
    for region in Region::ALL {
        let Some(mut layers) = groups.remove(&region) else {
            continue;
        };

        let anchor = region_anchor(region, viewport);
        let total = layers.values().map(Vec::len).sum::<usize>();
        let base_radius = region_base_radius(total);

        for layer in Layer::ALL {
            let Some(mut members) = layers.remove(&layer) else {
                continue;
            };
            let (inner, outer) = layer.band();
            place_in_band(
                &mut members,
                anchor,
                base_radius * inner,
                base_radius * outer,
                &mut positions,
            );
        }
    }

    debug!(nodes = positions.len(), "cluster layout computed");
    positions
}

fn place_in_band(
    members: &mut [&GraphNode],
    anchor: Pos2,
    inner_radius: f32,
    outer_radius: f32,
    positions: &mut Positions,
) {
    let count = members.len();
    if count == 0 {
        return;
    }

    if count == 1 {
        positions.insert(
            members[0].id.clone(),
            anchor + vec2(0.0, -inner_radius * 0.5),
        );
        return;
    }

    // Stable: equal degrees keep their input order.
    members.sort_by(|a, b| b.degree.cmp(&a.degree));

    let max_per_ring = ((TAU * outer_radius) / RING_NODE_SPACING)
        .floor()
        .max(MIN_NODES_PER_RING as f32) as usize;
    let rings = count.div_ceil(max_per_ring);

    let mut placed = 0usize;
    for ring in 0..rings {
        let t = ring as f32 / (rings.saturating_sub(1).max(1)) as f32;
        let radius = inner_radius + (outer_radius - inner_radius) * t;
        let in_ring = max_per_ring.min(count - placed);
        let angle_step = TAU / in_ring as f32;
        let start_angle = ring as f32 * RING_ROTATION;

        for slot in 0..in_ring {
            let angle = start_angle + slot as f32 * angle_step - FRAC_PI_2;
            positions.insert(
                members[placed].id.clone(),
                anchor + vec2(radius * angle.cos(), radius * angle.sin()),
            );
            placed += 1;
        }
    }
}

pub fn grid_layout<'a>(nodes: impl IntoIterator<Item = &'a GraphNode>, viewport: Vec2) -> Positions {
    let nodes = nodes.into_iter().collect::<Vec<_>>();
    let count = nodes.len();
    if count == 0 {
        return Positions::new();
    }

    let aspect = if viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    };
    let columns = ((count as f32 * aspect).sqrt().ceil() as usize).clamp(1, count);
    let rows = count.div_ceil(columns);
    let cell = vec2(
        viewport.x / columns as f32,
        viewport.y / rows as f32,
    );

    nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            let column = index % columns;
            let row = index / columns;
            let position = pos2(
                (column as f32 + 0.5) * cell.x,
                (row as f32 + 0.5) * cell.y,
            );
            (node.id.clone(), position)
        })
        .collect()
}

// Highest degree innermost.
pub fn concentric_layout<'a>(
    nodes: impl IntoIterator<Item = &'a GraphNode>,
    viewport: Vec2,
) -> Positions {
    const NODE_SPACING: f32 = 26.0;
    const LEVEL_GAP: f32 = 30.0;

    let mut nodes = nodes.into_iter().collect::<Vec<_>>();
    nodes.sort_by(|a, b| b.degree.cmp(&a.degree));

    let center = pos2(viewport.x / 2.0, viewport.y / 2.0);
    let mut positions = Positions::new();
    let mut radius = 0.0f32;
    let mut first_level = true;

    for level in nodes.chunk_by(|a, b| a.degree == b.degree) {
        let count = level.len();
        let fit_radius = (count as f32 * NODE_SPACING) / TAU;
        radius = if first_level && count == 1 {
            0.0
        } else {
            (radius + LEVEL_GAP).max(fit_radius)
        };
        first_level = false;

        let angle_step = TAU / count as f32;
        for (slot, node) in level.iter().enumerate() {
            let angle = slot as f32 * angle_step - FRAC_PI_2;
            positions.insert(
                node.id.clone(),
                center + vec2(radius * angle.cos(), radius * angle.sin()),
            );
        }
    }

    positions
}

pub fn run_layout<'a>(
    mode: LayoutMode,
    nodes: impl IntoIterator<Item = &'a GraphNode>,
    viewport: Vec2,
) -> Positions {
    match mode {
        LayoutMode::Cluster => cluster_layout(nodes, viewport),
        LayoutMode::Grid => grid_layout(nodes, viewport),
        LayoutMode::Concentric => concentric_layout(nodes, viewport),
    }
}
