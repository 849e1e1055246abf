use crate::anatomy::{
    Attachment, Bone, EntityStore, Joint, Ligament, MotionTag, Muscle, Nerve, NodeKind, Role, SkinRegion,
};

/// Unresolved targets keep the raw id as their label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub label: String,
    pub resolved: bool,
}

impl Link {
    fn new(id: &str, label: Option<&str>) -> Self {
        Self {
            id: id.to_owned(),
            label: label.unwrap_or(id).to_owned(),
            resolved: label.is_some(),
        }
    }
}

fn bone_link(store: &EntityStore, id: &str) -> Link {
    Link::new(id, store.bone(id).map(|bone| bone.names.name_ja.as_str()))
}

fn nerve_link(store: &EntityStore, id: &str) -> Link {
    Link::new(id, store.nerve(id).map(|nerve| nerve.names.name_ja.as_str()))
}

fn joint_link(store: &EntityStore, id: &str) -> Link {
    Link::new(id, store.joint(id).map(|joint| joint.names.name_ja.as_str()))
}

fn muscle_link(muscle: &Muscle) -> Link {
    Link::new(&muscle.id, Some(&muscle.names.name_ja))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentLink {
    pub bone: Link,
    pub landmark: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLink {
    pub joint: Link,
    pub motion: MotionTag,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnervationLink {
    pub nerve: Link,
    pub levels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MuscleDetail<'a> {
    pub muscle: &'a Muscle,
    pub origins: Vec<AttachmentLink>,
    pub insertions: Vec<AttachmentLink>,
    pub actions: Vec<ActionLink>,
    pub innervation: Vec<InnervationLink>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoneDetail<'a> {
    pub bone: &'a Bone,
    pub category: NodeKind,
    pub joints: Vec<Link>,
    pub ligaments: Vec<Link>,
    pub originating_muscles: Vec<Link>,
    pub inserting_muscles: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NerveDetail<'a> {
    pub nerve: &'a Nerve,
    pub parent: Option<Link>,
    pub children: Vec<Link>,
    pub muscles: Vec<Link>,
    pub skin_regions: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotionGroup {
    pub motion: MotionTag,
    pub prime: Vec<Link>,
    pub assist: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JointDetail<'a> {
    pub joint: &'a Joint,
    pub bones: Vec<Link>,
    pub ligaments: Vec<Link>,
    pub motions: Vec<MotionGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigamentDetail<'a> {
    pub ligament: &'a Ligament,
    pub bones: Vec<Link>,
    pub joints: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkinDetail<'a> {
    pub skin: &'a SkinRegion,
    pub nerves: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Detail<'a> {
    Muscle(MuscleDetail<'a>),
    Bone(BoneDetail<'a>),
    Nerve(NerveDetail<'a>),
    Joint(JointDetail<'a>),
    Ligament(LigamentDetail<'a>),
    Skin(SkinDetail<'a>),
}

/// Returns `None` only when the record itself is absent.
pub fn resolve_detail<'a>(store: &'a EntityStore, kind: NodeKind, id: &str) -> Option<Detail<'a>> {
    let detail = match kind {
        NodeKind::Muscle => Detail::Muscle(muscle_detail(store, store.muscle(id)?)),
        NodeKind::Bone | NodeKind::SoftTissue => Detail::Bone(bone_detail(store, store.bone(id)?)),
        NodeKind::Nerve => Detail::Nerve(nerve_detail(store, store.nerve(id)?)),
        NodeKind::Joint => Detail::Joint(joint_detail(store, store.joint(id)?)),
        NodeKind::Ligament => Detail::Ligament(ligament_detail(store, store.ligament(id)?)),
        NodeKind::Skin => {
            let skin = store.skin_region(id)?;
            Detail::Skin(SkinDetail {
                skin,
                nerves: skin.nerves.iter().map(|nerve| nerve_link(store, nerve)).collect(),
            })
        }
    };
    Some(detail)
}

fn muscle_detail<'a>(store: &EntityStore, muscle: &'a Muscle) -> MuscleDetail<'a> {
    let attachments = |entries: &[Attachment]| {
        entries
            .iter()
            .map(|entry| AttachmentLink {
                bone: bone_link(store, &entry.bone),
                landmark: entry.landmark.clone(),
            })
            .collect::<Vec<_>>()
    };

    MuscleDetail {
        muscle,
        origins: attachments(&muscle.origins),
        insertions: attachments(&muscle.insertions),
        actions: muscle
            .actions
            .iter()
            .map(|action| ActionLink {
                joint: joint_link(store, &action.joint),
                motion: action.motion.clone(),
                role: action.role,
            })
            .collect(),
        innervation: muscle
            .innervation
            .iter()
            .map(|entry| InnervationLink {
                nerve: nerve_link(store, &entry.nerve),
                levels: entry.levels.clone(),
            })
            .collect(),
    }
}

fn bone_detail<'a>(store: &EntityStore, bone: &'a Bone) -> BoneDetail<'a> {
    let id = bone.id.as_str();
    BoneDetail {
        bone,
        category: bone.node_kind(),
        joints: store
            .joints()
            .iter()
            .filter(|joint| joint.bones.iter().any(|member| member == id))
            .map(|joint| Link::new(&joint.id, Some(&joint.names.name_ja)))
            .collect(),
        ligaments: store
            .ligaments()
            .iter()
            .filter(|ligament| ligament.bones.iter().any(|attached| attached == id))
            .map(|ligament| Link::new(&ligament.id, Some(&ligament.names.name_ja)))
            .collect(),
        originating_muscles: store
            .muscles()
            .iter()
            .filter(|muscle| muscle.origins.iter().any(|origin| origin.bone == id))
            .map(muscle_link)
            .collect(),
        inserting_muscles: store
            .muscles()
            .iter()
            .filter(|muscle| muscle.insertions.iter().any(|insertion| insertion.bone == id))
            .map(muscle_link)
            .collect(),
    }
}

fn nerve_detail<'a>(store: &EntityStore, nerve: &'a Nerve) -> NerveDetail<'a> {
    let id = nerve.id.as_str();
    NerveDetail {
        nerve,
        parent: nerve.parent.as_deref().map(|parent| nerve_link(store, parent)),
        children: store
            .nerves()
            .iter()
            .filter(|child| child.parent.as_deref() == Some(id))
            .map(|child| Link::new(&child.id, Some(&child.names.name_ja)))
            .collect(),
        muscles: store
            .muscles()
            .iter()
            .filter(|muscle| muscle.innervation.iter().any(|entry| entry.nerve == id))
            .map(muscle_link)
            .collect(),
        skin_regions: store
            .skin()
            .iter()
            .filter(|skin| skin.nerves.iter().any(|supplier| supplier == id))
            .map(|skin| Link::new(&skin.id, Some(&skin.names.name_ja)))
            .collect(),
    }
}

fn joint_detail<'a>(store: &EntityStore, joint: &'a Joint) -> JointDetail<'a> {
    let id = joint.id.as_str();
    let mut motions: Vec<MotionGroup> = Vec::new();

    for muscle in store.muscles() {
        for action in muscle.actions.iter().filter(|action| action.joint == id) {
            let position = match motions.iter().position(|group| group.motion == action.motion) {
                Some(position) => position,
                None => {
                    motions.push(MotionGroup {
                        motion: action.motion.clone(),
                        prime: Vec::new(),
                        assist: Vec::new(),
                    });
                    motions.len() - 1
                }
            };
            let group = &mut motions[position];
            match action.role {
                Role::Prime => group.prime.push(muscle_link(muscle)),
                Role::Assist => group.assist.push(muscle_link(muscle)),
            }
        }
    }

    JointDetail {
        joint,
        bones: joint.bones.iter().map(|bone| bone_link(store, bone)).collect(),
        ligaments: store
            .ligaments()
            .iter()
            .filter(|ligament| ligament.joints.iter().any(|member| member == id))
            .map(|ligament| Link::new(&ligament.id, Some(&ligament.names.name_ja)))
            .collect(),
        motions,
    }
}

fn ligament_detail<'a>(store: &EntityStore, ligament: &'a Ligament) -> LigamentDetail<'a> {
    LigamentDetail {
        ligament,
        bones: ligament.bones.iter().map(|bone| bone_link(store, bone)).collect(),
        joints: ligament
            .joints
            .iter()
            .map(|joint| joint_link(store, joint))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::fixtures::{
        acts_on, attach, bone, innervated_by, joint, ligament, muscle, nerve, skin,
    };
    use crate::anatomy::Dataset;

    fn store() -> EntityStore {
        let mut biceps = muscle("biceps");
        biceps.origins = vec![attach("scapula")];
        biceps.insertions = vec![attach("radius")];
        biceps.innervation = vec![innervated_by("musculocutaneous", &["C5", "C6"])];
        biceps.actions = vec![
            acts_on("elbow", "flexion", Role::Prime),
            acts_on("elbow", "supination", Role::Assist),
        ];
        let mut brachialis = muscle("brachialis");
        brachialis.origins = vec![attach("humerus")];
        brachialis.insertions = vec![attach("ulna_MISSING")];
        brachialis.actions = vec![acts_on("elbow", "flexion", Role::Prime)];
        let mut brachioradialis = muscle("brachioradialis");
        brachioradialis.actions = vec![acts_on("elbow", "flexion", Role::Assist)];

        let mut elbow = joint("elbow");
        elbow.bones = vec!["humerus".to_owned(), "radius".to_owned()];
        let mut annular = ligament("annular");
        annular.bones = vec!["radius".to_owned()];
        annular.joints = vec!["elbow".to_owned(), "pru_MISSING".to_owned()];

        let mut musculocutaneous = nerve("musculocutaneous");
        musculocutaneous.parent = Some("brachial_plexus".to_owned());
        let mut lateral_cutaneous = nerve("lateral_antebrachial_cutaneous");
        lateral_cutaneous.parent = Some("musculocutaneous".to_owned());
        let mut forearm = skin("lateral_forearm");
        forearm.nerves = vec!["lateral_antebrachial_cutaneous".to_owned()];

        EntityStore::new(Dataset {
            muscles: vec![biceps, brachialis, brachioradialis],
            bones: vec![bone("scapula"), bone("humerus"), bone("radius")],
            nerves: vec![nerve("brachial_plexus"), musculocutaneous, lateral_cutaneous],
            joints: vec![elbow],
            skin: vec![forearm],
            ligaments: vec![annular],
        })
    }

    fn ids(links: &[Link]) -> Vec<&str> {
        links.iter().map(|link| link.id.as_str()).collect()
    }

    #[test]
    fn muscle_detail_falls_back_to_raw_ids() {
        let store = store();
        let Some(Detail::Muscle(detail)) = resolve_detail(&store, NodeKind::Muscle, "brachialis")
        else {
            panic!("expected muscle detail");
        };
        assert!(detail.origins[0].bone.resolved);
        assert_eq!(
            detail.insertions[0].bone,
            Link {
                id: "ulna_MISSING".to_owned(),
                label: "ulna_MISSING".to_owned(),
                resolved: false,
            }
        );
    }

    #[test]
    fn bone_detail_scans_reverse_relationships() {
        let store = store();
        let Some(Detail::Bone(detail)) = resolve_detail(&store, NodeKind::Bone, "radius") else {
            panic!("expected bone detail");
        };
        assert_eq!(ids(&detail.joints), vec!["elbow"]);
        assert_eq!(ids(&detail.ligaments), vec!["annular"]);
        assert!(detail.originating_muscles.is_empty());
        assert_eq!(ids(&detail.inserting_muscles), vec!["biceps"]);
    }

    #[test]
    fn nerve_detail_walks_the_hierarchy() {
        let store = store();
        let Some(Detail::Nerve(detail)) =
            resolve_detail(&store, NodeKind::Nerve, "musculocutaneous")
        else {
            panic!("expected nerve detail");
        };
        assert_eq!(detail.parent.map(|link| link.id), Some("brachial_plexus".to_owned()));
        assert_eq!(ids(&detail.children), vec!["lateral_antebrachial_cutaneous"]);
        assert_eq!(ids(&detail.muscles), vec!["biceps"]);
        assert!(detail.skin_regions.is_empty());
    }

    #[test]
    fn joint_detail_groups_motions_by_role() {
        let store = store();
        let Some(Detail::Joint(detail)) = resolve_detail(&store, NodeKind::Joint, "elbow") else {
            panic!("expected joint detail");
        };
        assert_eq!(detail.motions.len(), 2);
        let flexion = &detail.motions[0];
        assert_eq!(flexion.motion.as_str(), "flexion");
        assert_eq!(ids(&flexion.prime), vec!["biceps", "brachialis"]);
        assert_eq!(ids(&flexion.assist), vec!["brachioradialis"]);
        assert_eq!(ids(&detail.ligaments), vec!["annular"]);
    }

    #[test]
    fn ligament_and_skin_resolve_their_references() {
        let store = store();
        let Some(Detail::Ligament(detail)) = resolve_detail(&store, NodeKind::Ligament, "annular")
        else {
            panic!("expected ligament detail");
        };
        assert!(detail.joints[0].resolved);
        assert!(!detail.joints[1].resolved);

        let Some(Detail::Skin(detail)) = resolve_detail(&store, NodeKind::Skin, "lateral_forearm")
        else {
            panic!("expected skin detail");
        };
        assert_eq!(detail.nerves[0].label, "lateral_antebrachial_cutaneous");
    }

    #[test]
    fn missing_record_is_absent() {
        let store = store();
        assert!(resolve_detail(&store, NodeKind::Muscle, "nobody").is_none());
        assert!(resolve_detail(&store, NodeKind::Joint, "biceps").is_none());
    }
}
