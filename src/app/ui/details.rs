use anatomy_atlas::anatomy::{
    Names, NodeKind, Role, joint_type_en, joint_type_ja, motion_en, motion_ja, node_kind_ja, region_ja,
    role_ja, role_marker,
};
use anatomy_atlas::detail::{
    BoneDetail, Detail, JointDetail, LigamentDetail, Link, MuscleDetail, NerveDetail, SkinDetail,
};
use eframe::egui::{self, RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::node_color;

/// Draws a cross-reference. Unresolved references show the raw id and are
/// not clickable.
fn link_row(ui: &mut Ui, link: &Link, clicked: &mut Option<String>) {
    if link.resolved {
        if ui.link(link.label.as_str()).on_hover_text(link.id.as_str()).clicked() {
            *clicked = Some(link.id.clone());
        }
    } else {
        ui.label(RichText::new(link.label.as_str()).weak().italics())
            .on_hover_text("not found in the dataset");
    }
}

fn link_section(ui: &mut Ui, title: &str, links: &[Link], clicked: &mut Option<String>) {
    ui.add_space(6.0);
    ui.label(RichText::new(format!("{title} ({})", links.len())).strong());
    if links.is_empty() {
        ui.label("-");
        return;
    }
    for link in links {
        link_row(ui, link, clicked);
    }
}

fn header(ui: &mut Ui, kind: NodeKind, names: &Names, id: &str) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(node_kind_ja(kind))
                .background_color(node_color(kind))
                .color(egui::Color32::WHITE),
        );
        ui.label(RichText::new(names.name_ja.as_str()).heading());
    });
    if !names.en().is_empty() {
        ui.label(names.en());
    }
    if !names.latin().is_empty() {
        ui.label(RichText::new(names.latin()).italics().weak());
    }
    ui.small(id);
}

fn prose(ui: &mut Ui, trivia: Option<&str>, description: Option<&str>) {
    if let Some(trivia) = trivia.filter(|text| !text.is_empty()) {
        ui.add_space(6.0);
        ui.label(RichText::new("豆知識").strong());
        ui.label(trivia);
    }
    if let Some(description) = description.filter(|text| !text.is_empty()) {
        ui.add_space(6.0);
        ui.label(RichText::new("解説").strong());
        ui.label(description);
    }
}

fn level_tags(ui: &mut Ui, levels: &[String]) {
    for level in levels {
        ui.label(RichText::new(level.as_str()).small().monospace());
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Selection Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Select a node from the graph, search or lookups.");
            return;
        };
        let Some(kind) = self.atlas.graph().node(&selected_id).map(|node| node.kind) else {
            ui.label("Selected node no longer exists in the graph.");
            return;
        };

        let mut clicked = None;
        match self.atlas.resolve_detail(kind, &selected_id) {
            Some(Detail::Muscle(detail)) => draw_muscle(ui, &detail, &mut clicked),
            Some(Detail::Bone(detail)) => draw_bone(ui, &detail, &mut clicked),
            Some(Detail::Nerve(detail)) => draw_nerve(ui, &detail, &mut clicked),
            Some(Detail::Joint(detail)) => draw_joint(ui, &detail, &mut clicked),
            Some(Detail::Ligament(detail)) => draw_ligament(ui, &detail, &mut clicked),
            Some(Detail::Skin(detail)) => draw_skin(ui, &detail, &mut clicked),
            None => {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("No {} record found for `{selected_id}`.", node_kind_ja(kind)),
                );
            }
        }

        if let Some(id) = clicked {
            self.focus_node(&id);
        }
    }
}

fn draw_muscle(ui: &mut Ui, detail: &MuscleDetail<'_>, clicked: &mut Option<String>) {
    let muscle = detail.muscle;
    header(ui, NodeKind::Muscle, &muscle.names, &muscle.id);
    ui.small(region_ja(muscle.region));
    prose(ui, muscle.trivia.as_deref(), muscle.description.as_deref());

    for (title, attachments) in [("起始", &detail.origins), ("停止", &detail.insertions)] {
        ui.add_space(6.0);
        ui.label(RichText::new(title).strong());
        if attachments.is_empty() {
            ui.label("-");
        }
        for attachment in attachments.iter() {
            ui.horizontal_wrapped(|ui| {
                link_row(ui, &attachment.bone, clicked);
                if let Some(landmark) = &attachment.landmark {
                    ui.label(format!("({landmark})"));
                }
            });
        }
    }

    ui.add_space(6.0);
    ui.label(RichText::new("作用").strong());
    if detail.actions.is_empty() {
        ui.label("-");
    }
    for action in &detail.actions {
        ui.horizontal_wrapped(|ui| {
            link_row(ui, &action.joint, clicked);
            ui.label(motion_ja(&action.motion))
                .on_hover_text(motion_en(&action.motion));
            ui.label(format!("({})", role_ja(action.role)));
        });
    }

    ui.add_space(6.0);
    ui.label(RichText::new("神経支配").strong());
    if detail.innervation.is_empty() {
        ui.label("-");
    }
    for entry in &detail.innervation {
        ui.horizontal_wrapped(|ui| {
            link_row(ui, &entry.nerve, clicked);
            level_tags(ui, &entry.levels);
        });
    }
}

fn draw_bone(ui: &mut Ui, detail: &BoneDetail<'_>, clicked: &mut Option<String>) {
    let bone = detail.bone;
    header(ui, detail.category, &bone.names, &bone.id);
    ui.small(region_ja(bone.region));
    prose(ui, bone.trivia.as_deref(), bone.description.as_deref());

    if !bone.landmarks.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new("ランドマーク").strong());
        ui.horizontal_wrapped(|ui| {
            for landmark in &bone.landmarks {
                ui.label(RichText::new(landmark.as_str()).small());
            }
        });
    }

    link_section(ui, "関節", &detail.joints, clicked);
    if !detail.ligaments.is_empty() {
        link_section(ui, "靱帯", &detail.ligaments, clicked);
    }
    link_section(ui, "起始する筋", &detail.originating_muscles, clicked);
    link_section(ui, "停止する筋", &detail.inserting_muscles, clicked);
}

fn draw_nerve(ui: &mut Ui, detail: &NerveDetail<'_>, clicked: &mut Option<String>) {
    let nerve = detail.nerve;
    header(ui, NodeKind::Nerve, &nerve.names, &nerve.id);
    ui.small(region_ja(nerve.region));
    prose(ui, nerve.trivia.as_deref(), nerve.description.as_deref());

    if !nerve.root_levels.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new("脊髄レベル").strong());
        ui.horizontal_wrapped(|ui| level_tags(ui, &nerve.root_levels));
    }

    if let Some(parent) = &detail.parent {
        ui.add_space(6.0);
        ui.label(RichText::new("親神経").strong());
        link_row(ui, parent, clicked);
    }
    if !detail.children.is_empty() {
        link_section(ui, "分枝", &detail.children, clicked);
    }
    link_section(ui, "支配筋", &detail.muscles, clicked);
    if !detail.skin_regions.is_empty() {
        link_section(ui, "感覚支配領域", &detail.skin_regions, clicked);
    }
}

fn draw_joint(ui: &mut Ui, detail: &JointDetail<'_>, clicked: &mut Option<String>) {
    let joint = detail.joint;
    header(ui, NodeKind::Joint, &joint.names, &joint.id);
    ui.label(joint_type_ja(joint.joint_type))
        .on_hover_text(joint_type_en(joint.joint_type));
    ui.small(region_ja(joint.region));
    prose(ui, joint.trivia.as_deref(), joint.description.as_deref());

    link_section(ui, "構成骨", &detail.bones, clicked);
    if !detail.ligaments.is_empty() {
        link_section(ui, "靱帯", &detail.ligaments, clicked);
    }

    ui.add_space(6.0);
    ui.label(RichText::new("運動と筋 (● 主動筋 / ○ 補助筋)").strong());
    if detail.motions.is_empty() {
        ui.label("-");
    }
    for group in &detail.motions {
        ui.add_space(4.0);
        ui.label(motion_ja(&group.motion))
            .on_hover_text(motion_en(&group.motion));
        ui.indent(("motion", group.motion.as_str()), |ui| {
            for (role, muscles) in [
                (Role::Prime, &group.prime),
                (Role::Assist, &group.assist),
            ] {
                for muscle in muscles.iter() {
                    ui.horizontal(|ui| {
                        ui.label(role_marker(role));
                        link_row(ui, muscle, clicked);
                    });
                }
            }
        });
    }
}

fn draw_ligament(ui: &mut Ui, detail: &LigamentDetail<'_>, clicked: &mut Option<String>) {
    let ligament = detail.ligament;
    header(ui, NodeKind::Ligament, &ligament.names, &ligament.id);
    ui.small(region_ja(ligament.region));
    prose(ui, ligament.trivia.as_deref(), ligament.description.as_deref());

    link_section(ui, "付着骨", &detail.bones, clicked);
    link_section(ui, "関連関節", &detail.joints, clicked);
}

fn draw_skin(ui: &mut Ui, detail: &SkinDetail<'_>, clicked: &mut Option<String>) {
    let skin = detail.skin;
    header(ui, NodeKind::Skin, &skin.names, &skin.id);
    ui.small(region_ja(skin.region));
    if !skin.area.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new("領域").strong());
        ui.label(skin.area.as_str());
    }
    prose(ui, skin.trivia.as_deref(), skin.description.as_deref());

    link_section(ui, "感覚神経", &detail.nerves, clicked);
}
