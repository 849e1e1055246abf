use anatomy_atlas::anatomy::{Role, role_marker};
use anatomy_atlas::detail::Link;
use eframe::egui::{self, Context, RichText, Ui};

use super::super::{LookupKind, ViewModel};

fn lookup_title(kind: LookupKind) -> &'static str {
    match kind {
        LookupKind::SpinalLevel => "脊髄レベル → 支配筋",
        LookupKind::Motion => "運動 → 関与筋",
        LookupKind::Nerve => "神経 → 支配筋",
    }
}

fn muscle_links(ui: &mut Ui, marker: Option<&str>, links: &[Link], clicked: &mut Option<String>) {
    for link in links {
        ui.horizontal(|ui| {
            if let Some(marker) = marker {
                ui.label(marker);
            }
            if ui.link(link.label.as_str()).on_hover_text(link.id.as_str()).clicked() {
                *clicked = Some(link.id.clone());
            }
        });
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_lookup_window(&mut self, ctx: &Context) {
        let Some(kind) = self.lookup_window else {
            return;
        };

        let mut open = true;
        let mut clicked = None;
        egui::Window::new(lookup_title(kind))
            .id(egui::Id::new("reverse_lookup"))
            .open(&mut open)
            .resizable(true)
            .vscroll(true)
            .default_width(380.0)
            .min_height(240.0)
            .show(ctx, |ui| match kind {
                LookupKind::SpinalLevel => self.draw_level_lookup(ui, &mut clicked),
                LookupKind::Motion => self.draw_motion_lookup(ui, &mut clicked),
                LookupKind::Nerve => self.draw_nerve_lookup(ui, &mut clicked),
            });

        if let Some(id) = clicked {
            self.lookup_window = None;
            self.focus_node(&id);
        } else if !open {
            self.lookup_window = None;
        }
    }

    fn draw_level_lookup(&self, ui: &mut Ui, clicked: &mut Option<String>) {
        let groups = self.atlas.lookup_by_spinal_level();
        if groups.is_empty() {
            ui.label("No muscle lists spinal levels.");
            return;
        }
        for group in &groups {
            egui::CollapsingHeader::new(format!("{} ({})", group.level, group.muscles.len()))
                .id_salt(("level", group.level))
                .show(ui, |ui| muscle_links(ui, None, &group.muscles, clicked));
        }
    }

    fn draw_motion_lookup(&self, ui: &mut Ui, clicked: &mut Option<String>) {
        let groups = self.atlas.lookup_by_motion();
        if groups.is_empty() {
            ui.label("No muscle lists joint actions.");
            return;
        }
        ui.label(RichText::new("● 主動筋 / ○ 補助筋").weak());
        for group in &groups {
            let count = group.prime.len() + group.assist.len();
            egui::CollapsingHeader::new(format!("{} ({count})", group.key))
                .id_salt(("motion", group.key.as_str()))
                .show(ui, |ui| {
                    muscle_links(ui, Some(role_marker(Role::Prime)), &group.prime, clicked);
                    muscle_links(ui, Some(role_marker(Role::Assist)), &group.assist, clicked);
                });
        }
    }

    fn draw_nerve_lookup(&self, ui: &mut Ui, clicked: &mut Option<String>) {
        let groups = self.atlas.lookup_by_nerve();
        if groups.is_empty() {
            ui.label("No muscle lists innervation.");
            return;
        }
        for group in &groups {
            egui::CollapsingHeader::new(format!("{} ({})", group.nerve.label, group.muscles.len()))
                .id_salt(("nerve", group.nerve.id.as_str()))
                .show(ui, |ui| muscle_links(ui, None, &group.muscles, clicked));
        }
    }
}
