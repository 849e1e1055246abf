use eframe::egui::{self, Pos2, Rect, Ui, Vec2};

use super::super::render_utils::{circle_visible, screen_to_world};
use super::super::ViewModel;

pub(in crate::app) const MIN_ZOOM: f32 = 0.1;
pub(in crate::app) const MAX_ZOOM: f32 = 5.0;
const FOCUS_ZOOM: f32 = 2.0;
const FIT_PADDING: f32 = 30.0;

impl ViewModel {
    pub(in crate::app) fn handle_graph_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = pointer - rect.center() - (world_before * self.zoom);
    }

    pub(in crate::app) fn handle_graph_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    /// Zooms about the canvas centre.
    pub(in crate::app) fn zoom_by(&mut self, factor: f32) {
        let zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan *= zoom / self.zoom;
        self.zoom = zoom;
    }

    /// Fits the camera to the visible nodes' target positions.
    pub(in crate::app) fn fit_to_visible(&mut self, rect: Rect) {
        let visibility = self.atlas.visibility();
        let mut bounds = Rect::NOTHING;
        for (index, node) in self.graph_cache.nodes.iter().enumerate() {
            if visibility.node(index) {
                let radius = Vec2::splat(node.base_radius);
                let center = node.target_pos.to_pos2();
                bounds = bounds.union(Rect::from_min_max(center - radius, center + radius));
            }
        }
        if !bounds.is_positive() {
            return;
        }

        let available = (rect.size() - Vec2::splat(FIT_PADDING * 2.0)).max(Vec2::splat(1.0));
        let zoom = (available.x / bounds.width())
            .min(available.y / bounds.height())
            .clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom = zoom;
        self.pan = -bounds.center().to_vec2() * zoom;
    }

    /// Centres the camera on a node at a fixed zoom.
    pub(in crate::app) fn center_on(&mut self, index: usize) {
        let Some(node) = self.graph_cache.nodes.get(index) else {
            return;
        };
        self.zoom = FOCUS_ZOOM;
        self.pan = -node.target_pos * FOCUS_ZOOM;
    }

    pub(in crate::app) fn visible_indices_into(
        rect: Rect,
        node_visible: impl Fn(usize) -> bool,
        screen_positions: &[Pos2],
        screen_radii: &[f32],
        out: &mut Vec<usize>,
    ) {
        out.clear();
        out.extend((0..screen_positions.len()).filter(|&index| {
            node_visible(index)
                && circle_visible(rect, screen_positions[index], screen_radii[index])
        }));
    }

    pub(in crate::app) fn hovered_index(
        ui: &Ui,
        visible_indices: &[usize],
        screen_positions: &[Pos2],
        screen_radii: &[f32],
    ) -> Option<(usize, f32)> {
        let pointer_pos = ui.input(|input| input.pointer.hover_pos());
        pointer_pos.and_then(|pointer| {
            visible_indices
                .iter()
                .filter_map(|index| {
                    let distance = screen_positions[*index].distance(pointer);
                    if distance <= screen_radii[*index] {
                        Some((*index, distance))
                    } else {
                        None
                    }
                })
                .min_by(|a, b| a.1.total_cmp(&b.1))
        })
    }
}
