use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use eframe::egui::Vec2;
use tracing::{debug, info};

use crate::anatomy::{self, Dataset, EntityStore, NodeKind};
use crate::detail::{self, Detail};
use crate::filter::{self, FilterConfig, Visibility, VisibleStats};
use crate::graph::{AtlasGraph, GraphNode};
use crate::layout::{self, LayoutMode, Positions};
use crate::lookup::{self, LevelGroup, MotionLookupGroup, NerveGroup};
use crate::search::{SearchIndex, SearchRecord};

pub struct Atlas {
    store: EntityStore,
    diagnostics: Vec<String>,
    index: SearchIndex,
    graph: AtlasGraph,
    filter: FilterConfig,
    visibility: Visibility,
}

impl Atlas {
    pub fn initialize(data_dir: &Path) -> Result<Self> {
        let dataset = anatomy::load_dataset(data_dir)?;
        Ok(Self::from_dataset(dataset))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let store = EntityStore::new(dataset);
        let diagnostics = anatomy::validate(&store);
        anatomy::log_diagnostics(&diagnostics);

        let index = SearchIndex::build(&store);
        let graph = AtlasGraph::build(&store);
        let filter = FilterConfig::default();
        let visibility = filter::apply_filter(&graph, &filter);

        info!(
            records = store.record_count(),
            indexed = index.records().len(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            dropped_edges = graph.dropped_edges(),
            skipped_nodes = graph.skipped_nodes(),
            "atlas ready"
        );

        Self {
            store,
            diagnostics,
            index,
            graph,
            filter,
            visibility,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn graph(&self) -> &AtlasGraph {
        &self.graph
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<&SearchRecord> {
        self.index.search(query, limit)
    }

    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&SearchRecord> {
        self.index.suggest(query, limit)
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn apply_filter(&mut self, config: FilterConfig) {
        self.visibility = filter::apply_filter(&self.graph, &config);
        self.filter = config;
        debug!(
            nodes = self.visibility.visible_node_count(),
            edges = self.visibility.visible_edge_count(),
            "filter applied"
        );
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn stats(&self) -> VisibleStats {
        VisibleStats::collect(&self.graph, &self.visibility)
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph
            .nodes
            .iter()
            .enumerate()
            .filter(|(index, _)| self.visibility.node(*index))
            .map(|(_, node)| node)
    }

    pub fn resolve_detail(&self, kind: NodeKind, id: &str) -> Option<Detail<'_>> {
        detail::resolve_detail(&self.store, kind, id)
    }

    /// Cluster positions for the named nodes. Unknown ids are skipped, and
    /// nodes are taken in graph order so the caller's ordering never matters.
    pub fn run_cluster_layout<'a>(
        &self,
        active_ids: impl IntoIterator<Item = &'a str>,
        viewport: Vec2,
    ) -> Positions {
        let active = active_ids.into_iter().collect::<HashSet<_>>();
        layout::cluster_layout(
            self.graph
                .nodes
                .iter()
                .filter(|node| active.contains(node.id.as_str())),
            viewport,
        )
    }

    pub fn run_layout(&self, mode: LayoutMode, viewport: Vec2) -> Positions {
        layout::run_layout(mode, self.visible_nodes(), viewport)
    }

    pub fn lookup_by_spinal_level(&self) -> Vec<LevelGroup> {
        lookup::by_spinal_level(&self.store)
    }

    pub fn lookup_by_motion(&self) -> Vec<MotionLookupGroup> {
        lookup::by_motion(&self.store)
    }

    pub fn lookup_by_nerve(&self) -> Vec<NerveGroup> {
        lookup::by_nerve(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::Region;
    use crate::anatomy::fixtures::{attach, bone, muscle};
    use eframe::egui::vec2;

    fn atlas() -> Atlas {
        let mut biceps = muscle("biceps");
        biceps.origins = vec![attach("scapula")];
        biceps.insertions = vec![attach("radius_MISSING")];
        let mut femur = bone("femur");
        femur.region = Region::LowerLimb;
        Atlas::from_dataset(Dataset {
            muscles: vec![biceps],
            bones: vec![bone("scapula"), femur],
            ..Default::default()
        })
    }

    #[test]
    fn diagnostics_and_dropped_edges_are_reported_side_by_side() {
        let atlas = atlas();
        assert_eq!(
            atlas.diagnostics(),
            ["Muscle biceps: insertion bone radius_MISSING not found"]
        );
        assert_eq!(atlas.graph().dropped_edges(), 1);
    }

    #[test]
    fn layout_follows_filter() {
        let mut atlas = atlas();
        atlas.apply_filter(FilterConfig {
            region: Some(Region::LowerLimb),
            ..Default::default()
        });
        let positions = atlas.run_layout(LayoutMode::Cluster, vec2(800.0, 600.0));
        assert_eq!(positions.keys().collect::<Vec<_>>(), vec!["femur"]);
        assert_eq!(atlas.stats().count(NodeKind::Bone), 1);
    }

    #[test]
    fn cluster_layout_ignores_id_order_and_unknown_ids() {
        let atlas = atlas();
        let viewport = vec2(800.0, 600.0);
        let forward = atlas.run_cluster_layout(["biceps", "scapula", "ghost"], viewport);
        let reverse = atlas.run_cluster_layout(["scapula", "biceps"], viewport);
        assert_eq!(forward, reverse);
        assert_eq!(forward.len(), 2);
    }
}
