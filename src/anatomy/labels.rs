use super::model::{JointType, MotionTag, NodeKind, Region, Role};

const MOTION_LABELS: &[(&str, &str, &str)] = &[
    ("flexion", "屈曲", "Flexion"),
    ("extension", "伸展", "Extension"),
    ("abduction", "外転", "Abduction"),
    ("adduction", "内転", "Adduction"),
    ("internal_rotation", "内旋", "Internal rotation"),
    ("external_rotation", "外旋", "External rotation"),
    ("medial_rotation", "内旋", "Medial rotation"),
    ("lateral_rotation", "外旋", "Lateral rotation"),
    ("pronation", "回内", "Pronation"),
    ("supination", "回外", "Supination"),
    ("elevation", "挙上", "Elevation"),
    ("depression", "下制", "Depression"),
    ("protraction", "前突", "Protraction"),
    ("retraction", "後退", "Retraction"),
    ("lateral_flexion", "側屈", "Lateral flexion"),
    ("rotation", "回旋", "Rotation"),
    ("dorsiflexion", "背屈", "Dorsiflexion"),
    ("plantarflexion", "底屈", "Plantarflexion"),
    ("inversion", "内反", "Inversion"),
    ("eversion", "外反", "Eversion"),
    ("horizontal_adduction", "水平内転", "Horizontal adduction"),
    ("horizontal_abduction", "水平外転", "Horizontal abduction"),
    ("upward_rotation", "上方回旋", "Upward rotation"),
    ("downward_rotation", "下方回旋", "Downward rotation"),
    ("opposition", "対立", "Opposition"),
    ("reposition", "復位", "Reposition"),
    ("radial_deviation", "橈屈", "Radial deviation"),
    ("ulnar_deviation", "尺屈", "Ulnar deviation"),
    ("circumduction", "分回し", "Circumduction"),
    ("anterior_tilt", "前傾", "Anterior tilt"),
    ("posterior_tilt", "後傾", "Posterior tilt"),
];

fn motion_entry(motion: &MotionTag) -> Option<&'static (&'static str, &'static str, &'static str)> {
    MOTION_LABELS
        .iter()
        .find(|(tag, _, _)| *tag == motion.as_str())
}

/// Japanese label for a motion tag, or the raw tag when unknown.
pub fn motion_ja(motion: &MotionTag) -> &str {
    motion_entry(motion).map_or(motion.as_str(), |(_, ja, _)| *ja)
}

pub fn motion_en(motion: &MotionTag) -> &str {
    motion_entry(motion).map_or(motion.as_str(), |(_, _, en)| *en)
}

pub fn joint_type_ja(joint_type: JointType) -> &'static str {
    match joint_type {
        JointType::BallAndSocket => "球関節",
        JointType::Hinge => "蝶番関節",
        JointType::Pivot => "車軸関節",
        JointType::Condyloid => "顆状関節",
        JointType::Saddle => "鞍関節",
        JointType::Plane => "平面関節",
        JointType::Ellipsoid => "楕円関節",
        JointType::Bicondylar => "二顆関節",
        JointType::Symphysis => "結合",
        JointType::Synarthrosis => "不動関節",
        JointType::Gomphosis => "釘植関節",
        JointType::Suture => "縫合",
        JointType::Synchondrosis => "軟骨結合",
        JointType::Syndesmosis => "靱帯結合",
    }
}

pub fn joint_type_en(joint_type: JointType) -> &'static str {
    match joint_type {
        JointType::BallAndSocket => "Ball and socket",
        JointType::Hinge => "Hinge",
        JointType::Pivot => "Pivot",
        JointType::Condyloid => "Condyloid",
        JointType::Saddle => "Saddle",
        JointType::Plane => "Plane/Gliding",
        JointType::Ellipsoid => "Ellipsoid",
        JointType::Bicondylar => "Bicondylar",
        JointType::Symphysis => "Symphysis",
        JointType::Synarthrosis => "Synarthrosis",
        JointType::Gomphosis => "Gomphosis",
        JointType::Suture => "Suture",
        JointType::Synchondrosis => "Synchondrosis",
        JointType::Syndesmosis => "Syndesmosis",
    }
}

pub fn region_ja(region: Region) -> &'static str {
    match region {
        Region::HeadNeck => "頭頸部",
        Region::UpperLimb => "上肢",
        Region::LowerLimb => "下肢",
        Region::Trunk => "体幹",
        Region::Back => "背部",
        Region::Pelvis => "骨盤・会陰",
    }
}

pub fn region_en(region: Region) -> &'static str {
    match region {
        Region::HeadNeck => "Head & Neck",
        Region::UpperLimb => "Upper Limb",
        Region::LowerLimb => "Lower Limb",
        Region::Trunk => "Trunk",
        Region::Back => "Back",
        Region::Pelvis => "Pelvis & Perineum",
    }
}

pub fn node_kind_ja(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Muscle => "筋",
        NodeKind::Bone => "骨",
        NodeKind::SoftTissue => "組織",
        NodeKind::Nerve => "神経",
        NodeKind::Joint => "関節",
        NodeKind::Ligament => "靱帯",
        NodeKind::Skin => "皮膚",
    }
}

pub fn role_ja(role: Role) -> &'static str {
    match role {
        Role::Prime => "主動筋",
        Role::Assist => "補助筋",
    }
}

/// Compact marker used in motion listings.
pub fn role_marker(role: Role) -> &'static str {
    match role {
        Role::Prime => "●",
        Role::Assist => "○",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_motion_falls_back_to_tag() {
        let motion = MotionTag("wiggle".to_owned());
        assert_eq!(motion_ja(&motion), "wiggle");
        assert_eq!(motion_en(&motion), "wiggle");
    }

    #[test]
    fn known_motion_has_both_labels() {
        let motion = MotionTag("flexion".to_owned());
        assert_eq!(motion_ja(&motion), "屈曲");
        assert_eq!(motion_en(&motion), "Flexion");
    }
}
