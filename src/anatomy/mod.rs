mod labels;
mod load;
mod model;
mod store;
mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use labels::{
    joint_type_en, joint_type_ja, motion_en, motion_ja, node_kind_ja, region_en, region_ja,
    role_ja, role_marker,
};
pub use load::load_dataset;
pub use model::{
    Action, Attachment, Bone, Dataset, EntityKind, EntityRef, Innervation, Joint, JointType,
    Ligament, MotionTag, Muscle, Names, Nerve, NodeKind, Region, Role, SkinRegion, StructureType,
};
pub use store::EntityStore;
pub use validate::{log_diagnostics, validate};
