use anatomy_atlas::anatomy::node_kind_ja;
use anatomy_atlas::layout::LayoutMode;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, vec2};
use tracing::debug;

use super::super::highlight::build_highlight_state;
use super::super::render_utils::{
    HIGHLIGHT_COLOR, LABEL_COLOR, blend_color, draw_background, edge_visible, fade_color,
    world_to_screen,
};
use super::super::{EdgeLine, LayoutRequest, RenderGraph, ViewModel};

const LABEL_FONT_SIZE: f32 = 13.0;
const MIN_LABEL_SCREEN_SIZE: f32 = 8.0;
const ARROW_LENGTH: f32 = 7.0;

fn draw_edge_line(painter: &egui::Painter, start: Pos2, end: Pos2, stroke: Stroke, line: EdgeLine) {
    match line {
        EdgeLine::Solid => {
            painter.line_segment([start, end], stroke);
        }
        EdgeLine::Dashed => {
            painter.extend(Shape::dashed_line(&[start, end], stroke, 4.0, 3.0));
        }
        EdgeLine::Dotted => {
            painter.extend(Shape::dotted_line(
                &[start, end],
                stroke.color,
                4.0,
                stroke.width * 0.6,
            ));
        }
    }
}

fn draw_arrow_head(painter: &egui::Painter, start: Pos2, end: Pos2, target_radius: f32, color: Color32) {
    let along = end - start;
    if along.length() <= target_radius + ARROW_LENGTH {
        return;
    }
    let direction = along.normalized();
    let normal = direction.rot90() * (ARROW_LENGTH * 0.5);
    let tip = end - direction * target_radius;
    let base = tip - direction * ARROW_LENGTH;
    painter.add(Shape::convex_polygon(
        vec![tip, base + normal, base - normal],
        color,
        Stroke::NONE,
    ));
}

impl ViewModel {
    fn update_screen_space(rect: Rect, pan: Vec2, zoom: f32, cache: &mut RenderGraph) {
        cache.view_scratch.screen_positions.clear();
        cache.view_scratch.screen_radii.clear();
        for render_node in &cache.nodes {
            cache
                .view_scratch
                .screen_positions
                .push(world_to_screen(rect, pan, zoom, render_node.world_pos));
            cache
                .view_scratch
                .screen_radii
                .push((render_node.base_radius * zoom).max(1.5));
        }
    }

    fn run_pending_layout(&mut self, request: LayoutRequest, rect: Rect) {
        let viewport = rect.size();
        let graph = self.atlas.graph();

        if request.place_hidden {
            let everything = self
                .atlas
                .run_cluster_layout(graph.nodes.iter().map(|node| node.id.as_str()), viewport);
            self.graph_cache.apply_positions(graph, &everything, false);
        }

        let positions = match request.mode {
            LayoutMode::Cluster => self.atlas.run_cluster_layout(
                self.atlas.visible_nodes().map(|node| node.id.as_str()),
                viewport,
            ),
            mode => self.atlas.run_layout(mode, viewport),
        };
        debug!(mode = request.mode.key(), nodes = positions.len(), "layout applied");

        self.graph_cache
            .apply_positions(graph, &positions, request.animate);
        self.fit_requested = true;
    }

    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        if let Some(request) = self.layout_request.take() {
            self.run_pending_layout(request, rect);
        }
        if std::mem::take(&mut self.fit_requested) {
            self.fit_to_visible(rect);
        }
        if let Some(id) = self.focus_request.take()
            && let Some(index) = self.atlas.graph().node_index(&id)
        {
            self.center_on(index);
        }

        draw_background(&painter, rect, self.pan, self.zoom);

        self.handle_graph_zoom(ui, rect, &response);
        self.handle_graph_pan(&response);

        let frame_delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let transition_moving = self.graph_cache.step_transition(frame_delta_seconds);
        if transition_moving || response.dragged() {
            ui.ctx().request_repaint();
        }

        let pan = self.pan;
        let zoom = self.zoom;
        let highlight = self
            .selected
            .as_deref()
            .and_then(|id| build_highlight_state(&self.atlas, id));
        let graph = self.atlas.graph();
        let visibility = self.atlas.visibility();
        let cache = &mut self.graph_cache;

        Self::update_screen_space(rect, pan, zoom, cache);
        Self::visible_indices_into(
            rect,
            |index| visibility.node(index),
            &cache.view_scratch.screen_positions,
            &cache.view_scratch.screen_radii,
            &mut cache.view_scratch.visible_indices,
        );

        if visibility.visible_node_count() == 0 {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No nodes match the current filters.",
                FontId::proportional(15.0),
                LABEL_COLOR,
            );
        }

        let hovered = Self::hovered_index(
            ui,
            &cache.view_scratch.visible_indices,
            &cache.view_scratch.screen_positions,
            &cache.view_scratch.screen_radii,
        );
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let pending_selection = if response.clicked_by(egui::PointerButton::Primary) {
            Some(hovered.and_then(|(index, _distance)| {
                graph.nodes.get(index).map(|node| node.id.clone())
            }))
        } else {
            None
        };

        let zoom_sqrt = zoom.sqrt();
        for (index, edge) in cache.edges.iter().enumerate() {
            if !visibility.edge(index) {
                continue;
            }

            let start = cache.view_scratch.screen_positions[edge.source];
            let end = cache.view_scratch.screen_positions[edge.target];
            if !edge_visible(rect, start, end, 2.5) {
                continue;
            }

            let (width, color) = match &highlight {
                Some(state) if state.related_edges.contains(&index) => {
                    ((2.0 * zoom_sqrt).clamp(1.2, 4.4), edge.color)
                }
                Some(_) => ((edge.width * zoom_sqrt).clamp(0.4, 3.0), fade_color(edge.color, 0.82)),
                None => ((edge.width * zoom_sqrt).clamp(0.5, 3.4), edge.color),
            };

            draw_edge_line(&painter, start, end, Stroke::new(width, color), edge.line);
            if edge.arrow {
                let target_radius = cache.view_scratch.screen_radii[edge.target];
                draw_arrow_head(&painter, start, end, target_radius, color);
            }
        }

        let hovered_index = hovered.map(|(index, _)| index);
        let mut selection_animating = false;
        let label_size = LABEL_FONT_SIZE * zoom;

        for &index in &cache.view_scratch.visible_indices {
            let Some(node) = graph.nodes.get(index) else {
                continue;
            };
            let render_node = &cache.nodes[index];
            let position = cache.view_scratch.screen_positions[index];
            let radius = cache.view_scratch.screen_radii[index];

            let is_selected = self.selected.as_deref() == Some(node.id.as_str());
            let is_hovered = hovered_index == Some(index);
            let is_related = highlight
                .as_ref()
                .is_some_and(|state| state.related_nodes.contains(&index));
            let faded = highlight.is_some() && !is_related;

            let base_color = if faded {
                fade_color(render_node.color, 0.75)
            } else if is_hovered {
                blend_color(render_node.color, Color32::WHITE, 0.25)
            } else {
                render_node.color
            };

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("node-selection", node.id.as_str())),
                is_selected,
            );
            if selection_mix > 0.0 && selection_mix < 1.0 {
                selection_animating = true;
            }

            painter.circle_filled(position, radius, base_color);
            if selection_mix > 0.0 {
                let halo_strength = (selection_mix * (1.0 - selection_mix) * 4.0).clamp(0.0, 1.0);
                let halo_alpha = (30.0 + (halo_strength * 145.0)) as u8;
                painter.circle_stroke(
                    position,
                    radius + 4.0 + ((1.0 - selection_mix) * 6.0),
                    Stroke::new(
                        1.0 + (halo_strength * 1.6),
                        Color32::from_rgba_unmultiplied(90, 138, 181, halo_alpha),
                    ),
                );
                painter.circle_stroke(
                    position,
                    radius,
                    Stroke::new(3.0 * selection_mix, HIGHLIGHT_COLOR),
                );
            } else if is_related {
                painter.circle_stroke(position, radius, Stroke::new(2.0, HIGHLIGHT_COLOR));
            }

            let should_draw_label =
                is_selected || is_hovered || is_related || label_size >= MIN_LABEL_SCREEN_SIZE;
            if should_draw_label {
                let text_color = if faded {
                    fade_color(LABEL_COLOR, 0.7)
                } else {
                    LABEL_COLOR
                };
                painter.text(
                    position + vec2(0.0, radius + 2.0),
                    Align2::CENTER_TOP,
                    &node.label,
                    FontId::proportional(label_size.clamp(MIN_LABEL_SCREEN_SIZE, 26.0)),
                    text_color,
                );
            }
        }

        if selection_animating {
            ui.ctx().request_repaint();
        }

        if let Some((hovered_index, _)) = hovered
            && let Some(node) = graph.nodes.get(hovered_index)
        {
            let panel_text = format!(
                "{}  |  {}  |  {}  |  degree {}",
                node.label,
                node_kind_ja(node.kind),
                node.id,
                node.degree
            );
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                panel_text,
                FontId::proportional(13.0),
                LABEL_COLOR,
            );
        }

        if let Some(selected) = pending_selection {
            self.set_selected(selected);
        }
    }
}
