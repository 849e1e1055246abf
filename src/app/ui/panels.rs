use std::path::Path;

use anatomy_atlas::Atlas;
use anatomy_atlas::anatomy::{NodeKind, node_kind_ja};
use eframe::egui::{self, Align, Context, Key, Layout, RichText, Vec2};

use super::super::{LayoutRequest, RenderGraph, ViewModel, ViewState};

impl ViewModel {
    pub(in crate::app) fn new(mut atlas: Atlas, view: ViewState) -> Self {
        atlas.apply_filter(view.filter);
        let graph_cache = RenderGraph::build(atlas.graph());
        let stats = atlas.stats();

        let mut model = Self {
            atlas,
            filter: view.filter,
            layout_mode: view.layout,
            search: String::new(),
            selected: None,
            pan: Vec2::ZERO,
            zoom: 1.0,
            graph_cache,
            stats,
            layout_request: Some(LayoutRequest {
                mode: view.layout,
                animate: false,
                place_hidden: true,
            }),
            fit_requested: false,
            focus_request: None,
            lookup_window: None,
        };
        model.set_selected(view.selected);
        model
    }

    pub(in crate::app) fn view_state(&self) -> ViewState {
        ViewState {
            filter: self.filter,
            layout: self.layout_mode,
            selected: self.selected.clone(),
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        data_dir: &Path,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        if ctx.input(|input| input.key_pressed(Key::Escape)) {
            self.set_selected(None);
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("anatomy-atlas");
                    ui.separator();
                    ui.label(format!("data: {}", data_dir.display()));
                    ui.label(format!("records: {}", self.atlas.store().record_count()));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload data"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    self.draw_diagnostics_badge(ui);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.stats_text());
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("controls_scroll")
                    .show(ui, |ui| self.draw_controls(ui));
            });

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("details_scroll")
                    .show(ui, |ui| self.draw_details(ui));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if is_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Reloading anatomy dataset...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                } else {
                    self.draw_graph(ui);
                }
            });

        self.draw_lookup_window(ctx);
    }

    fn draw_diagnostics_badge(&self, ui: &mut egui::Ui) {
        let diagnostics = self.atlas.diagnostics();
        if diagnostics.is_empty() {
            return;
        }

        let dropped = self.atlas.graph().dropped_edges();
        let skipped = self.atlas.graph().skipped_nodes();
        ui.label(
            RichText::new(format!("{} integrity issues", diagnostics.len()))
                .color(egui::Color32::from_rgb(184, 128, 64)),
        )
        .on_hover_ui(|ui| {
            ui.label(format!("{dropped} relationships not drawn"));
            if skipped > 0 {
                ui.label(format!("{skipped} records with a repeated id not drawn"));
            }
            ui.separator();
            for diagnostic in diagnostics.iter().take(40) {
                ui.label(diagnostic.as_str());
            }
            if diagnostics.len() > 40 {
                ui.label(format!("... and {} more", diagnostics.len() - 40));
            }
        });
    }

    fn stats_text(&self) -> String {
        let counts = NodeKind::ALL
            .into_iter()
            .map(|kind| format!("{}{}", node_kind_ja(kind), self.stats.count(kind)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{counts} 関係{}", self.stats.edges)
    }

    pub(in crate::app) fn commit_filter(&mut self) {
        if self.filter == *self.atlas.filter() {
            return;
        }
        self.atlas.apply_filter(self.filter);
        self.stats = self.atlas.stats();
    }

    pub(in crate::app) fn request_layout(&mut self) {
        self.layout_request = Some(LayoutRequest {
            mode: self.layout_mode,
            animate: true,
            place_hidden: false,
        });
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        self.selected = selected.filter(|id| self.atlas.graph().node(id).is_some());
    }

    /// Selects a node and centres the view on it.
    pub(in crate::app) fn focus_node(&mut self, id: &str) {
        if self.atlas.graph().node(id).is_none() {
            return;
        }
        self.set_selected(Some(id.to_owned()));
        self.focus_request = Some(id.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use anatomy_atlas::Atlas;
    use anatomy_atlas::anatomy::Region;
    use anatomy_atlas::layout::LayoutMode;

    use super::super::super::{StartupOptions, ViewModel};

    fn bundled_atlas() -> Atlas {
        let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
        Atlas::initialize(&data_dir).expect("bundled dataset loads")
    }

    fn startup() -> StartupOptions {
        StartupOptions {
            region: None,
            layout: LayoutMode::Cluster,
        }
    }

    #[test]
    fn reload_keeps_filter_layout_and_selection() {
        let mut model = ViewModel::new(bundled_atlas(), startup().view_state());
        model.filter.show_nerves = false;
        model.filter.region = Some(Region::UpperLimb);
        model.layout_mode = LayoutMode::Grid;
        model.set_selected(Some("biceps_brachii".to_owned()));

        let reloaded = ViewModel::new(bundled_atlas(), model.view_state());
        assert_eq!(reloaded.view_state(), model.view_state());
        assert_eq!(reloaded.selected.as_deref(), Some("biceps_brachii"));
        assert_eq!(*reloaded.atlas.filter(), model.filter);
        assert_eq!(
            reloaded.layout_request.map(|request| request.mode),
            Some(LayoutMode::Grid)
        );
    }

    #[test]
    fn reload_drops_selection_of_a_vanished_record() {
        let mut view = startup().view_state();
        view.selected = Some("no_such_record".to_owned());
        let model = ViewModel::new(bundled_atlas(), view);
        assert_eq!(model.selected, None);
    }
}
