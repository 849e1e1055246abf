use crate::anatomy::{NodeKind, Region};
use crate::graph::{AtlasGraph, EdgeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    pub show_muscles: bool,
    pub show_bones: bool,
    pub show_soft_tissue: bool,
    pub show_nerves: bool,
    pub show_joints: bool,
    pub show_skin: bool,
    pub show_ligaments: bool,
    pub show_origin: bool,
    pub show_insertion: bool,
    pub show_innervation: bool,
    pub show_articulation: bool,
    pub show_ligament_attach: bool,
    pub show_sensory_innervation: bool,
    pub region: Option<Region>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            show_muscles: true,
            show_bones: true,
            show_soft_tissue: true,
            show_nerves: true,
            show_joints: true,
            show_skin: true,
            show_ligaments: true,
            show_origin: true,
            show_insertion: true,
            show_innervation: true,
            show_articulation: true,
            show_ligament_attach: true,
            show_sensory_innervation: true,
            region: None,
        }
    }
}

impl FilterConfig {
    pub fn shows_node_kind(&self, kind: NodeKind) -> bool {
        match kind {
            NodeKind::Muscle => self.show_muscles,
            NodeKind::Bone => self.show_bones,
            NodeKind::SoftTissue => self.show_soft_tissue,
            NodeKind::Nerve => self.show_nerves,
            NodeKind::Joint => self.show_joints,
            NodeKind::Skin => self.show_skin,
            NodeKind::Ligament => self.show_ligaments,
        }
    }

    pub fn node_toggle_mut(&mut self, kind: NodeKind) -> &mut bool {
        match kind {
            NodeKind::Muscle => &mut self.show_muscles,
            NodeKind::Bone => &mut self.show_bones,
            NodeKind::SoftTissue => &mut self.show_soft_tissue,
            NodeKind::Nerve => &mut self.show_nerves,
            NodeKind::Joint => &mut self.show_joints,
            NodeKind::Skin => &mut self.show_skin,
            NodeKind::Ligament => &mut self.show_ligaments,
        }
    }

    pub fn shows_edge_kind(&self, kind: EdgeKind) -> bool {
        match kind {
            EdgeKind::Origin => self.show_origin,
            EdgeKind::Insertion => self.show_insertion,
            EdgeKind::Innervation => self.show_innervation,
            EdgeKind::Articulation => self.show_articulation,
            EdgeKind::LigamentAttach => self.show_ligament_attach,
            EdgeKind::SensoryInnervation => self.show_sensory_innervation,
        }
    }

    pub fn edge_toggle_mut(&mut self, kind: EdgeKind) -> &mut bool {
        match kind {
            EdgeKind::Origin => &mut self.show_origin,
            EdgeKind::Insertion => &mut self.show_insertion,
            EdgeKind::Innervation => &mut self.show_innervation,
            EdgeKind::Articulation => &mut self.show_articulation,
            EdgeKind::LigamentAttach => &mut self.show_ligament_attach,
            EdgeKind::SensoryInnervation => &mut self.show_sensory_innervation,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub nodes: Vec<bool>,
    pub edges: Vec<bool>,
}

impl Visibility {
    pub fn node(&self, index: usize) -> bool {
        self.nodes.get(index).copied().unwrap_or(false)
    }

    pub fn edge(&self, index: usize) -> bool {
        self.edges.get(index).copied().unwrap_or(false)
    }

    pub fn visible_node_count(&self) -> usize {
        self.nodes.iter().filter(|visible| **visible).count()
    }

    pub fn visible_edge_count(&self) -> usize {
        self.edges.iter().filter(|visible| **visible).count()
    }
}

/// A node shows when its kind is on and it sits in the selected region (if
/// any). An edge shows when its kind is on and both endpoints show.
pub fn apply_filter(graph: &AtlasGraph, config: &FilterConfig) -> Visibility {
    let nodes = graph
        .nodes
        .iter()
        .map(|node| {
            config.shows_node_kind(node.kind)
                && config.region.is_none_or(|region| node.region == region)
        })
        .collect::<Vec<_>>();

    let endpoint_visible = |id: &str| {
        graph
            .node_index(id)
            .and_then(|index| nodes.get(index).copied())
            .unwrap_or(false)
    };
    let edges = graph
        .edges
        .iter()
        .map(|edge| {
            config.shows_edge_kind(edge.kind)
                && endpoint_visible(&edge.source)
                && endpoint_visible(&edge.target)
        })
        .collect();

    Visibility { nodes, edges }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleStats {
    pub per_kind: Vec<(NodeKind, usize)>,
    pub edges: usize,
}

impl VisibleStats {
    pub fn collect(graph: &AtlasGraph, visibility: &Visibility) -> Self {
        let per_kind = NodeKind::ALL
            .into_iter()
            .map(|kind| {
                let count = graph
                    .nodes
                    .iter()
                    .enumerate()
                    .filter(|(index, node)| node.kind == kind && visibility.node(*index))
                    .count();
                (kind, count)
            })
            .collect();

        Self {
            per_kind,
            edges: visibility.visible_edge_count(),
        }
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.per_kind
            .iter()
            .find(|(entry, _)| *entry == kind)
            .map_or(0, |(_, count)| *count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::fixtures::{attach, bone, joint, muscle};
    use crate::anatomy::{Dataset, EntityStore};

    fn graph() -> AtlasGraph {
        let mut biceps = muscle("biceps");
        biceps.origins = vec![attach("scapula")];
        biceps.insertions = vec![attach("radius")];
        let mut elbow = joint("elbow");
        elbow.bones = vec!["humerus".to_owned(), "radius".to_owned()];
        let mut femur = bone("femur");
        femur.region = Region::LowerLimb;

        AtlasGraph::build(&EntityStore::new(Dataset {
            muscles: vec![biceps],
            bones: vec![bone("scapula"), bone("humerus"), bone("radius"), femur],
            joints: vec![elbow],
            ..Default::default()
        }))
    }

    #[test]
    fn default_config_shows_everything() {
        let graph = graph();
        let visibility = apply_filter(&graph, &FilterConfig::default());
        assert_eq!(visibility.nodes, vec![true; graph.nodes.len()]);
        assert_eq!(visibility.edges, vec![true; graph.edges.len()]);
    }

    #[test]
    fn region_filter_hides_other_regions_and_their_edges() {
        let graph = graph();
        let config = FilterConfig {
            region: Some(Region::LowerLimb),
            ..Default::default()
        };
        let visibility = apply_filter(&graph, &config);

        assert_eq!(visibility.visible_node_count(), 1);
        assert!(visibility.node(graph.node_index("femur").unwrap()));
        assert_eq!(visibility.visible_edge_count(), 0);
    }

    #[test]
    fn edge_toggle_hides_only_its_kind() {
        let graph = graph();
        let config = FilterConfig {
            show_articulation: false,
            ..Default::default()
        };
        let visibility = apply_filter(&graph, &config);
        for (index, edge) in graph.edges.iter().enumerate() {
            assert_eq!(visibility.edge(index), edge.kind != EdgeKind::Articulation);
        }
    }

    #[test]
    fn stats_count_visible_nodes_per_kind() {
        let graph = graph();
        let config = FilterConfig {
            show_joints: false,
            ..Default::default()
        };
        let stats = VisibleStats::collect(&graph, &apply_filter(&graph, &config));
        assert_eq!(stats.count(NodeKind::Bone), 4);
        assert_eq!(stats.count(NodeKind::Joint), 0);
        assert_eq!(stats.edges, 2);
    }
}
