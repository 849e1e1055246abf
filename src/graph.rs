use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::anatomy::{EntityKind, EntityRef, EntityStore, NodeKind, Region};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Origin,
    Insertion,
    Innervation,
    Articulation,
    LigamentAttach,
    SensoryInnervation,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 6] = [
        Self::Origin,
        Self::Insertion,
        Self::Innervation,
        Self::Articulation,
        Self::LigamentAttach,
        Self::SensoryInnervation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Insertion => "insertion",
            Self::Innervation => "innervation",
            Self::Articulation => "articulation",
            Self::LigamentAttach => "ligament_attach",
            Self::SensoryInnervation => "sensory_innervation",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub region: Region,
    pub degree: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub kind: EdgeKind,
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AtlasGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    index_by_id: HashMap<String, usize>,
    dropped_edges: usize,
    skipped_nodes: usize,
}

fn kept<'a, T>(records: &'a [T], flags: &'a [bool]) -> impl Iterator<Item = &'a T> {
    records
        .iter()
        .zip(flags)
        .filter(|(_, keep)| **keep)
        .map(|(record, _)| record)
}

impl AtlasGraph {
    /// A repeated id yields a single node: the record [`EntityStore::find`]
    /// returns for it. Repeats are skipped along with their own references.
    pub fn build(store: &EntityStore) -> Self {
        let mut claimed = HashSet::new();
        let mut claim = |id: &str, kind: EntityKind| {
            store.find(id).map(EntityRef::entity_kind) == Some(kind)
                && claimed.insert(id.to_owned())
        };
        let bones_kept = store
            .bones()
            .iter()
            .map(|bone| claim(&bone.id, EntityKind::Bone))
            .collect::<Vec<_>>();
        let nerves_kept = store
            .nerves()
            .iter()
            .map(|nerve| claim(&nerve.id, EntityKind::Nerve))
            .collect::<Vec<_>>();
        let joints_kept = store
            .joints()
            .iter()
            .map(|joint| claim(&joint.id, EntityKind::Joint))
            .collect::<Vec<_>>();
        let muscles_kept = store
            .muscles()
            .iter()
            .map(|muscle| claim(&muscle.id, EntityKind::Muscle))
            .collect::<Vec<_>>();
        let ligaments_kept = store
            .ligaments()
            .iter()
            .map(|ligament| claim(&ligament.id, EntityKind::Ligament))
            .collect::<Vec<_>>();
        let skin_kept = store
            .skin()
            .iter()
            .map(|skin| claim(&skin.id, EntityKind::Skin))
            .collect::<Vec<_>>();

        let mut nodes = Vec::with_capacity(store.record_count());
        let mut edges = Vec::new();

        let mut push_node = |id: &str, kind: NodeKind, label: &str, region: Region| {
            nodes.push(GraphNode {
                id: id.to_owned(),
                kind,
                label: label.to_owned(),
                region,
                degree: 0,
            });
        };

        for bone in kept(store.bones(), &bones_kept) {
            push_node(&bone.id, bone.node_kind(), &bone.names.name_ja, bone.region);
        }
        for nerve in kept(store.nerves(), &nerves_kept) {
            push_node(&nerve.id, NodeKind::Nerve, &nerve.names.name_ja, nerve.region);
        }
        for joint in kept(store.joints(), &joints_kept) {
            push_node(&joint.id, NodeKind::Joint, &joint.names.name_ja, joint.region);
        }
        for muscle in kept(store.muscles(), &muscles_kept) {
            push_node(&muscle.id, NodeKind::Muscle, &muscle.names.name_ja, muscle.region);
        }
        for ligament in kept(store.ligaments(), &ligaments_kept) {
            push_node(
                &ligament.id,
                NodeKind::Ligament,
                &ligament.names.name_ja,
                ligament.region,
            );
        }
        for skin in kept(store.skin(), &skin_kept) {
            push_node(&skin.id, NodeKind::Skin, &skin.names.name_ja, skin.region);
        }
        let skipped_nodes = store.record_count() - nodes.len();

        let mut edge = |id: String, kind: EdgeKind, source: &str, target: &str, label: Option<&String>| {
            edges.push(GraphEdge {
                id,
                kind,
                source: source.to_owned(),
                target: target.to_owned(),
                label: label.filter(|text| !text.is_empty()).cloned(),
            });
        };

        for joint in kept(store.joints(), &joints_kept) {
            for (position, bone) in joint.bones.iter().enumerate() {
                edge(
                    format!("{}_articulation_{position}", joint.id),
                    EdgeKind::Articulation,
                    &joint.id,
                    bone,
                    None,
                );
            }
        }
        for muscle in kept(store.muscles(), &muscles_kept) {
            for (position, origin) in muscle.origins.iter().enumerate() {
                edge(
                    format!("{}_origin_{position}", muscle.id),
                    EdgeKind::Origin,
                    &muscle.id,
                    &origin.bone,
                    origin.landmark.as_ref(),
                );
            }
            for (position, insertion) in muscle.insertions.iter().enumerate() {
                edge(
                    format!("{}_insertion_{position}", muscle.id),
                    EdgeKind::Insertion,
                    &muscle.id,
                    &insertion.bone,
                    insertion.landmark.as_ref(),
                );
            }
            for (position, entry) in muscle.innervation.iter().enumerate() {
                edge(
                    format!("{}_innerv_{position}", muscle.id),
                    EdgeKind::Innervation,
                    &entry.nerve,
                    &muscle.id,
                    None,
                );
            }
        }
        for ligament in kept(store.ligaments(), &ligaments_kept) {
            for (position, bone) in ligament.bones.iter().enumerate() {
                edge(
                    format!("{}_attach_{position}", ligament.id),
                    EdgeKind::LigamentAttach,
                    &ligament.id,
                    bone,
                    None,
                );
            }
        }
        for skin in kept(store.skin(), &skin_kept) {
            for (position, nerve) in skin.nerves.iter().enumerate() {
                edge(
                    format!("{}_sensory_{position}", skin.id),
                    EdgeKind::SensoryInnervation,
                    nerve,
                    &skin.id,
                    None,
                );
            }
        }

        Self::from_parts(nodes, edges, skipped_nodes)
    }

    fn from_parts(mut nodes: Vec<GraphNode>, mut edges: Vec<GraphEdge>, skipped_nodes: usize) -> Self {
        let mut index_by_id = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            index_by_id.entry(node.id.clone()).or_insert(index);
        }

        let total_edges = edges.len();
        edges.retain(|edge| {
            index_by_id.contains_key(&edge.source) && index_by_id.contains_key(&edge.target)
        });
        let dropped_edges = total_edges - edges.len();
        if dropped_edges > 0 {
            debug!(dropped_edges, "dropped edges with missing endpoints");
        }
        if skipped_nodes > 0 {
            debug!(skipped_nodes, "skipped records with a repeated id");
        }

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if let Some(&index) = index_by_id.get(endpoint) {
                    nodes[index].degree += 1;
                }
            }
        }

        Self {
            nodes,
            edges,
            index_by_id,
            dropped_edges,
            skipped_nodes,
        }
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index(id).and_then(|index| self.nodes.get(index))
    }

    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    /// Records left out because another record already owns their id.
    pub fn skipped_nodes(&self) -> usize {
        self.skipped_nodes
    }

    pub fn incident_edges(&self, id: &str) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.source == id || edge.target == id)
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::fixtures::{attach, bone, innervated_by, joint, muscle, nerve, skin};
    use crate::anatomy::{Dataset, StructureType};

    #[test]
    fn repeated_references_yield_repeated_edges() {
        let mut deltoid = muscle("deltoid");
        deltoid.origins = vec![attach("scapula"), attach("scapula")];
        deltoid.insertions = vec![attach("humerus")];
        let graph = AtlasGraph::build(&EntityStore::new(Dataset {
            muscles: vec![deltoid],
            bones: vec![bone("scapula"), bone("humerus")],
            ..Default::default()
        }));

        let origins = graph
            .edges
            .iter()
            .filter(|edge| edge.kind == EdgeKind::Origin)
            .count();
        assert_eq!(origins, 2);
        assert_eq!(graph.node("scapula").map(|node| node.degree), Some(2));
        assert_eq!(graph.node("deltoid").map(|node| node.degree), Some(3));
    }

    #[test]
    fn edge_directions_follow_relationship() {
        let mut biceps = muscle("biceps");
        biceps.innervation = vec![innervated_by("musculocutaneous", &["C5", "C6"])];
        let mut elbow = joint("elbow");
        elbow.bones = vec!["humerus".to_owned()];
        let mut forearm = skin("lateral_forearm");
        forearm.nerves = vec!["musculocutaneous".to_owned()];

        let graph = AtlasGraph::build(&EntityStore::new(Dataset {
            muscles: vec![biceps],
            bones: vec![bone("humerus")],
            nerves: vec![nerve("musculocutaneous")],
            joints: vec![elbow],
            skin: vec![forearm],
            ..Default::default()
        }));

        let find = |kind| graph.edges.iter().find(|edge| edge.kind == kind);
        let innervation = find(EdgeKind::Innervation).unwrap();
        assert_eq!(
            (innervation.source.as_str(), innervation.target.as_str()),
            ("musculocutaneous", "biceps")
        );
        let articulation = find(EdgeKind::Articulation).unwrap();
        assert_eq!(
            (articulation.source.as_str(), articulation.target.as_str()),
            ("elbow", "humerus")
        );
        let sensory = find(EdgeKind::SensoryInnervation).unwrap();
        assert_eq!(sensory.target, "lateral_forearm");
    }

    #[test]
    fn soft_tissue_keeps_bone_record_but_own_kind() {
        let mut fascia = bone("plantar_fascia");
        fascia.structure_type = Some(StructureType::SoftTissue);
        let graph = AtlasGraph::build(&EntityStore::new(Dataset {
            bones: vec![fascia],
            ..Default::default()
        }));
        assert_eq!(graph.nodes[0].kind, NodeKind::SoftTissue);
    }

    #[test]
    fn dangling_edges_are_dropped_and_counted() {
        let mut biceps = muscle("biceps");
        biceps.insertions = vec![attach("radius_MISSING")];
        let graph = AtlasGraph::build(&EntityStore::new(Dataset {
            muscles: vec![biceps],
            ..Default::default()
        }));

        assert!(graph.edges.is_empty());
        assert_eq!(graph.dropped_edges(), 1);
        assert_eq!(graph.node("biceps").map(|node| node.degree), Some(0));
    }

    #[test]
    fn repeated_ids_keep_one_node_per_id() {
        let mut shared_muscle = muscle("shared");
        shared_muscle.origins = vec![attach("humerus")];
        let mut second_humerus = bone("humerus");
        second_humerus.region = Region::LowerLimb;
        let mut second_biceps = muscle("biceps");
        second_biceps.insertions = vec![attach("humerus")];

        let graph = AtlasGraph::build(&EntityStore::new(Dataset {
            muscles: vec![shared_muscle, muscle("biceps"), second_biceps],
            bones: vec![bone("shared"), bone("humerus"), second_humerus],
            ..Default::default()
        }));

        let ids = graph.nodes.iter().map(|node| node.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["humerus", "shared", "biceps"]);
        assert_eq!(graph.skipped_nodes(), 3);
        assert_eq!(graph.node("shared").map(|node| node.kind), Some(NodeKind::Muscle));
        assert_eq!(
            graph.node("humerus").map(|node| node.region),
            Some(Region::UpperLimb)
        );
        // Only the kept muscle's origin survives; the repeat's insertion is skipped.
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, "shared");
        assert_eq!(graph.node("humerus").map(|node| node.degree), Some(1));
        for (index, node) in graph.nodes.iter().enumerate() {
            assert_eq!(graph.node_index(&node.id), Some(index));
        }
    }
}
