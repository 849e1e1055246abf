use super::model::{
    Action, Attachment, Bone, Innervation, Joint, JointType, Ligament, MotionTag, Muscle, Names,
    Nerve, Region, Role, SkinRegion,
};

pub(crate) fn names(name_ja: &str) -> Names {
    Names {
        name_ja: name_ja.to_owned(),
        name_en: None,
        name_latin: None,
    }
}

pub(crate) fn attach(bone: &str) -> Attachment {
    Attachment {
        bone: bone.to_owned(),
        landmark: None,
    }
}

pub(crate) fn innervated_by(nerve: &str, levels: &[&str]) -> Innervation {
    Innervation {
        nerve: nerve.to_owned(),
        levels: levels.iter().map(|level| (*level).to_owned()).collect(),
    }
}

pub(crate) fn acts_on(joint: &str, motion: &str, role: Role) -> Action {
    Action {
        joint: joint.to_owned(),
        motion: MotionTag(motion.to_owned()),
        role,
    }
}

pub(crate) fn muscle(id: &str) -> Muscle {
    Muscle {
        id: id.to_owned(),
        names: names(id),
        region: Region::UpperLimb,
        origins: Vec::new(),
        insertions: Vec::new(),
        innervation: Vec::new(),
        actions: Vec::new(),
        description: None,
        trivia: None,
    }
}

pub(crate) fn bone(id: &str) -> Bone {
    Bone {
        id: id.to_owned(),
        names: names(id),
        region: Region::UpperLimb,
        structure_type: None,
        landmarks: Vec::new(),
        description: None,
        trivia: None,
    }
}

pub(crate) fn nerve(id: &str) -> Nerve {
    Nerve {
        id: id.to_owned(),
        names: names(id),
        region: Region::UpperLimb,
        parent: None,
        root_levels: Vec::new(),
        description: None,
        trivia: None,
    }
}

pub(crate) fn joint(id: &str) -> Joint {
    Joint {
        id: id.to_owned(),
        names: names(id),
        region: Region::UpperLimb,
        joint_type: JointType::Hinge,
        bones: Vec::new(),
        description: None,
        trivia: None,
    }
}

pub(crate) fn ligament(id: &str) -> Ligament {
    Ligament {
        id: id.to_owned(),
        names: names(id),
        region: Region::UpperLimb,
        bones: Vec::new(),
        joints: Vec::new(),
        description: None,
        trivia: None,
    }
}

pub(crate) fn skin(id: &str) -> SkinRegion {
    SkinRegion {
        id: id.to_owned(),
        names: names(id),
        region: Region::UpperLimb,
        area: String::new(),
        nerves: Vec::new(),
        description: None,
        trivia: None,
    }
}
