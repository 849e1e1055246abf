use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    HeadNeck,
    Trunk,
    Back,
    UpperLimb,
    LowerLimb,
    Pelvis,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Self::HeadNeck,
        Self::UpperLimb,
        Self::LowerLimb,
        Self::Trunk,
        Self::Back,
        Self::Pelvis,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::HeadNeck => "head_neck",
            Self::Trunk => "trunk",
            Self::Back => "back",
            Self::UpperLimb => "upper_limb",
            Self::LowerLimb => "lower_limb",
            Self::Pelvis => "pelvis",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Muscle,
    Bone,
    Nerve,
    Joint,
    Ligament,
    Skin,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        Self::Muscle,
        Self::Bone,
        Self::Nerve,
        Self::Joint,
        Self::Ligament,
        Self::Skin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Muscle => "Muscle",
            Self::Bone => "Bone",
            Self::Nerve => "Nerve",
            Self::Joint => "Joint",
            Self::Ligament => "Ligament",
            Self::Skin => "Skin",
        }
    }
}

/// Display category of a graph node. Soft tissue is stored as a bone record
/// but shown, filtered and counted on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Muscle,
    Bone,
    SoftTissue,
    Nerve,
    Joint,
    Ligament,
    Skin,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        Self::Muscle,
        Self::Bone,
        Self::SoftTissue,
        Self::Nerve,
        Self::Joint,
        Self::Ligament,
        Self::Skin,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Muscle => "muscle",
            Self::Bone => "bone",
            Self::SoftTissue => "soft_tissue",
            Self::Nerve => "nerve",
            Self::Joint => "joint",
            Self::Ligament => "ligament",
            Self::Skin => "skin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Names {
    pub name_ja: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_latin: Option<String>,
}

impl Names {
    pub fn en(&self) -> &str {
        self.name_en.as_deref().unwrap_or_default()
    }

    pub fn latin(&self) -> &str {
        self.name_latin.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Prime,
    Assist,
}

/// Motion tags are open-ended; known tags have labels in [`super::labels`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MotionTag(pub String);

impl MotionTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointType {
    BallAndSocket,
    Hinge,
    Pivot,
    Condyloid,
    Saddle,
    Plane,
    Ellipsoid,
    Bicondylar,
    Symphysis,
    Synarthrosis,
    Gomphosis,
    Suture,
    Synchondrosis,
    Syndesmosis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    SoftTissue,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Attachment {
    pub bone: String,
    #[serde(default)]
    pub landmark: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Innervation {
    pub nerve: String,
    #[serde(default)]
    pub levels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Action {
    pub joint: String,
    pub motion: MotionTag,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Muscle {
    pub id: String,
    #[serde(flatten)]
    pub names: Names,
    pub region: Region,
    #[serde(default)]
    pub origins: Vec<Attachment>,
    #[serde(default)]
    pub insertions: Vec<Attachment>,
    #[serde(default)]
    pub innervation: Vec<Innervation>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trivia: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Bone {
    pub id: String,
    #[serde(flatten)]
    pub names: Names,
    pub region: Region,
    #[serde(default)]
    pub structure_type: Option<StructureType>,
    #[serde(default)]
    pub landmarks: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trivia: Option<String>,
}

impl Bone {
    pub fn node_kind(&self) -> NodeKind {
        match self.structure_type {
            Some(StructureType::SoftTissue) => NodeKind::SoftTissue,
            None => NodeKind::Bone,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Nerve {
    pub id: String,
    #[serde(flatten)]
    pub names: Names,
    pub region: Region,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub root_levels: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trivia: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Joint {
    pub id: String,
    #[serde(flatten)]
    pub names: Names,
    pub region: Region,
    #[serde(rename = "type")]
    pub joint_type: JointType,
    #[serde(default)]
    pub bones: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trivia: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ligament {
    pub id: String,
    #[serde(flatten)]
    pub names: Names,
    pub region: Region,
    #[serde(default)]
    pub bones: Vec<String>,
    #[serde(default)]
    pub joints: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trivia: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkinRegion {
    pub id: String,
    #[serde(flatten)]
    pub names: Names,
    pub region: Region,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub nerves: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trivia: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub muscles: Vec<Muscle>,
    pub bones: Vec<Bone>,
    pub nerves: Vec<Nerve>,
    pub joints: Vec<Joint>,
    pub skin: Vec<SkinRegion>,
    pub ligaments: Vec<Ligament>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityRef<'a> {
    Muscle(&'a Muscle),
    Bone(&'a Bone),
    Nerve(&'a Nerve),
    Joint(&'a Joint),
    Ligament(&'a Ligament),
    Skin(&'a SkinRegion),
}

impl<'a> EntityRef<'a> {
    pub fn id(self) -> &'a str {
        match self {
            Self::Muscle(record) => &record.id,
            Self::Bone(record) => &record.id,
            Self::Nerve(record) => &record.id,
            Self::Joint(record) => &record.id,
            Self::Ligament(record) => &record.id,
            Self::Skin(record) => &record.id,
        }
    }

    pub fn names(self) -> &'a Names {
        match self {
            Self::Muscle(record) => &record.names,
            Self::Bone(record) => &record.names,
            Self::Nerve(record) => &record.names,
            Self::Joint(record) => &record.names,
            Self::Ligament(record) => &record.names,
            Self::Skin(record) => &record.names,
        }
    }

    pub fn entity_kind(self) -> EntityKind {
        match self {
            Self::Muscle(_) => EntityKind::Muscle,
            Self::Bone(_) => EntityKind::Bone,
            Self::Nerve(_) => EntityKind::Nerve,
            Self::Joint(_) => EntityKind::Joint,
            Self::Ligament(_) => EntityKind::Ligament,
            Self::Skin(_) => EntityKind::Skin,
        }
    }

    pub fn node_kind(self) -> NodeKind {
        match self {
            Self::Muscle(_) => NodeKind::Muscle,
            Self::Bone(bone) => bone.node_kind(),
            Self::Nerve(_) => NodeKind::Nerve,
            Self::Joint(_) => NodeKind::Joint,
            Self::Ligament(_) => NodeKind::Ligament,
            Self::Skin(_) => NodeKind::Skin,
        }
    }
}
