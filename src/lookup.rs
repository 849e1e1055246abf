use std::collections::BTreeMap;

use crate::anatomy::{EntityStore, Muscle, Nerve, Role, motion_ja};
use crate::detail::Link;

pub const SPINAL_LEVELS: [&str; 31] = [
    "C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "T1", "T2", "T3", "T4", "T5", "T6", "T7",
    "T8", "T9", "T10", "T11", "T12", "L1", "L2", "L3", "L4", "L5", "S1", "S2", "S3", "S4", "S5",
    "Co1",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGroup {
    pub level: &'static str,
    pub muscles: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotionLookupGroup {
    pub key: String,
    pub joint: Link,
    pub motion: String,
    pub prime: Vec<Link>,
    pub assist: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NerveGroup {
    pub nerve: Link,
    pub muscles: Vec<Link>,
}

fn muscle_link(muscle: &Muscle) -> Link {
    Link {
        id: muscle.id.clone(),
        label: muscle.names.name_ja.clone(),
        resolved: true,
    }
}

/// Empty levels are omitted and labels outside [`SPINAL_LEVELS`] are ignored.
pub fn by_spinal_level(store: &EntityStore) -> Vec<LevelGroup> {
    SPINAL_LEVELS
        .into_iter()
        .filter_map(|level| {
            let muscles = store
                .muscles()
                .iter()
                .filter(|muscle| {
                    muscle
                        .innervation
                        .iter()
                        .any(|entry| entry.levels.iter().any(|listed| listed == level))
                })
                .map(muscle_link)
                .collect::<Vec<_>>();
            (!muscles.is_empty()).then_some(LevelGroup { level, muscles })
        })
        .collect()
}

pub fn by_motion(store: &EntityStore) -> Vec<MotionLookupGroup> {
    let mut groups: BTreeMap<String, MotionLookupGroup> = BTreeMap::new();

    for muscle in store.muscles() {
        for action in &muscle.actions {
            let joint_label = store.joint_label(&action.joint);
            let motion = motion_ja(&action.motion);
            let key = format!("{joint_label} - {motion}");

            let group = groups.entry(key.clone()).or_insert_with(|| MotionLookupGroup {
                key,
                joint: Link {
                    id: action.joint.clone(),
                    label: joint_label.to_owned(),
                    resolved: store.joint(&action.joint).is_some(),
                },
                motion: motion.to_owned(),
                prime: Vec::new(),
                assist: Vec::new(),
            });
            match action.role {
                Role::Prime => group.prime.push(muscle_link(muscle)),
                Role::Assist => group.assist.push(muscle_link(muscle)),
            }
        }
    }

    groups.into_values().collect()
}

// Nerves without muscles are left out.
pub fn by_nerve(store: &EntityStore) -> Vec<NerveGroup> {
    let mut nerves = store.nerves().iter().collect::<Vec<&Nerve>>();
    nerves.sort_by(|a, b| {
        a.names
            .name_ja
            .cmp(&b.names.name_ja)
            .then_with(|| a.id.cmp(&b.id))
    });

    nerves
        .into_iter()
        .filter_map(|nerve| {
            let muscles = store
                .muscles()
                .iter()
                .filter(|muscle| {
                    muscle
                        .innervation
                        .iter()
                        .any(|entry| entry.nerve == nerve.id)
                })
                .map(muscle_link)
                .collect::<Vec<_>>();
            (!muscles.is_empty()).then(|| NerveGroup {
                nerve: Link {
                    id: nerve.id.clone(),
                    label: nerve.names.name_ja.clone(),
                    resolved: true,
                },
                muscles,
            })
        })
        .collect()
}
