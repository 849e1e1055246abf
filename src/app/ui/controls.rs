use anatomy_atlas::anatomy::{NodeKind, Region, node_kind_ja, region_en, region_ja};
use anatomy_atlas::graph::EdgeKind;
use anatomy_atlas::layout::LayoutMode;
use anatomy_atlas::search::DEFAULT_RESULT_LIMIT;
use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::super::render_utils::{edge_style, node_color};
use super::super::{LookupKind, ViewModel};

const SUGGESTION_LIMIT: usize = 5;
const ZOOM_STEP: f32 = 1.3;

fn node_kind_en(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Muscle => "Muscles",
        NodeKind::Bone => "Bones",
        NodeKind::SoftTissue => "Soft tissue",
        NodeKind::Nerve => "Nerves",
        NodeKind::Joint => "Joints",
        NodeKind::Ligament => "Ligaments",
        NodeKind::Skin => "Skin regions",
    }
}

fn edge_kind_label(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::Origin => "起始 (origin)",
        EdgeKind::Insertion => "停止 (insertion)",
        EdgeKind::Innervation => "神経支配 (innervation)",
        EdgeKind::Articulation => "関節構成 (articulation)",
        EdgeKind::LigamentAttach => "靱帯付着 (ligament attachment)",
        EdgeKind::SensoryInnervation => "皮膚感覚 (sensory innervation)",
    }
}

fn layout_label(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::Cluster => "Cluster",
        LayoutMode::Grid => "Grid",
        LayoutMode::Concentric => "Concentric",
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Atlas Controls");
        ui.separator();
        ui.add_space(4.0);

        self.draw_search(ui);
        ui.separator();
        self.draw_filters(ui);
        ui.separator();
        self.draw_layout_controls(ui);
        ui.separator();

        ui.label(RichText::new("Reverse lookups").strong());
        ui.horizontal_wrapped(|ui| {
            for (kind, label, hint) in [
                (LookupKind::SpinalLevel, "脊髄レベル", "Spinal level → muscles"),
                (LookupKind::Motion, "運動", "Joint motion → muscles"),
                (LookupKind::Nerve, "神経", "Nerve → muscles"),
            ] {
                if ui.button(label).on_hover_text(hint).clicked() {
                    self.lookup_window = Some(kind);
                }
            }
        });
    }

    fn draw_search(&mut self, ui: &mut Ui) {
        ui.label("Search (Japanese, English or Latin name)")
            .on_hover_text("Case-insensitive substring match over all three names.");
        ui.add(
            egui::TextEdit::singleline(&mut self.search)
                .hint_text("例: 上腕二頭筋 / biceps")
                .desired_width(f32::INFINITY),
        );

        if self.search.trim().is_empty() {
            return;
        }

        let mut focus_id = None;
        let results = self.atlas.search(&self.search, DEFAULT_RESULT_LIMIT);
        if results.is_empty() {
            ui.label("No matches.");
            let suggestions = self.atlas.suggest(&self.search, SUGGESTION_LIMIT);
            if !suggestions.is_empty() {
                ui.label(RichText::new("Did you mean").weak());
                for record in suggestions {
                    if ui.link(record.name_ja.as_str()).clicked() {
                        focus_id = Some(record.id.clone());
                    }
                }
            }
        } else {
            egui::ScrollArea::vertical()
                .id_salt("search_results_scroll")
                .max_height(220.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for record in &results {
                        let is_selected = self.selected.as_deref() == Some(record.id.as_str());
                        let clicked = ui
                            .horizontal(|ui| {
                                ui.colored_label(node_color(record.kind), "●");
                                let clicked = ui
                                    .selectable_label(is_selected, record.name_ja.as_str())
                                    .on_hover_text(record.id.as_str())
                                    .clicked();
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.small(record.name_en.as_str());
                                });
                                clicked
                            })
                            .inner;
                        if clicked {
                            focus_id = Some(record.id.clone());
                        }
                    }
                });
        }

        if let Some(id) = focus_id {
            self.focus_node(&id);
        }
    }

    fn draw_filters(&mut self, ui: &mut Ui) {
        let mut changed = false;

        egui::CollapsingHeader::new("Structures")
            .default_open(true)
            .show(ui, |ui| {
                for kind in NodeKind::ALL {
                    ui.horizontal(|ui| {
                        changed |= ui
                            .checkbox(self.filter.node_toggle_mut(kind), node_kind_ja(kind))
                            .changed();
                        ui.colored_label(node_color(kind), "●");
                        ui.small(node_kind_en(kind));
                    });
                }
            });

        egui::CollapsingHeader::new("Relationships")
            .default_open(true)
            .show(ui, |ui| {
                for kind in EdgeKind::ALL {
                    ui.horizontal(|ui| {
                        changed |= ui
                            .checkbox(self.filter.edge_toggle_mut(kind), edge_kind_label(kind))
                            .changed();
                        ui.colored_label(edge_style(kind).color, "━");
                    });
                }
            });

        let selected_text = self
            .filter
            .region
            .map_or_else(|| "全領域 (all regions)".to_owned(), |region| {
                format!("{} ({})", region_ja(region), region_en(region))
            });
        egui::ComboBox::from_label("Region")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                changed |= ui
                    .selectable_value(&mut self.filter.region, None, "全領域 (all regions)")
                    .changed();
                for region in Region::ALL {
                    changed |= ui
                        .selectable_value(
                            &mut self.filter.region,
                            Some(region),
                            format!("{} ({})", region_ja(region), region_en(region)),
                        )
                        .changed();
                }
            });

        if changed {
            self.commit_filter();
        }
    }

    fn draw_layout_controls(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Layout").strong());

        let mut relayout = false;
        ui.horizontal(|ui| {
            for mode in LayoutMode::ALL {
                relayout |= ui
                    .selectable_value(&mut self.layout_mode, mode, layout_label(mode))
                    .changed();
            }
        });

        ui.horizontal_wrapped(|ui| {
            relayout |= ui
                .button("Re-run layout")
                .on_hover_text("Lay out the currently visible nodes again.")
                .clicked();
            if ui.button("Fit").on_hover_text("Fit the view to visible nodes.").clicked() {
                self.fit_requested = true;
            }
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                self.zoom_by(ZOOM_STEP);
            }
            if ui.button("−").on_hover_text("Zoom out").clicked() {
                self.zoom_by(1.0 / ZOOM_STEP);
            }
        });

        if relayout {
            self.request_layout();
        }
    }
}
