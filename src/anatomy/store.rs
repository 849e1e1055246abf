use std::collections::HashMap;

use super::model::{
    Bone, Dataset, EntityKind, EntityRef, Joint, Ligament, Muscle, Nerve, SkinRegion,
};

/// The first record wins when an id repeats inside one collection; the
/// validator reports the repeat.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    data: Dataset,
    muscle_index: HashMap<String, usize>,
    bone_index: HashMap<String, usize>,
    nerve_index: HashMap<String, usize>,
    joint_index: HashMap<String, usize>,
    ligament_index: HashMap<String, usize>,
    skin_index: HashMap<String, usize>,
}

fn index_ids<'a>(ids: impl ExactSizeIterator<Item = &'a String>) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(ids.len());
    for (position, id) in ids.enumerate() {
        index.entry(id.clone()).or_insert(position);
    }
    index
}

impl EntityStore {
    pub fn new(data: Dataset) -> Self {
        Self {
            muscle_index: index_ids(data.muscles.iter().map(|record| &record.id)),
            bone_index: index_ids(data.bones.iter().map(|record| &record.id)),
            nerve_index: index_ids(data.nerves.iter().map(|record| &record.id)),
            joint_index: index_ids(data.joints.iter().map(|record| &record.id)),
            ligament_index: index_ids(data.ligaments.iter().map(|record| &record.id)),
            skin_index: index_ids(data.skin.iter().map(|record| &record.id)),
            data,
        }
    }

    pub fn muscles(&self) -> &[Muscle] {
        &self.data.muscles
    }

    pub fn bones(&self) -> &[Bone] {
        &self.data.bones
    }

    pub fn nerves(&self) -> &[Nerve] {
        &self.data.nerves
    }

    pub fn joints(&self) -> &[Joint] {
        &self.data.joints
    }

    pub fn ligaments(&self) -> &[Ligament] {
        &self.data.ligaments
    }

    pub fn skin(&self) -> &[SkinRegion] {
        &self.data.skin
    }

    pub fn muscle(&self, id: &str) -> Option<&Muscle> {
        self.muscle_index
            .get(id)
            .and_then(|&index| self.data.muscles.get(index))
    }

    pub fn bone(&self, id: &str) -> Option<&Bone> {
        self.bone_index
            .get(id)
            .and_then(|&index| self.data.bones.get(index))
    }

    pub fn nerve(&self, id: &str) -> Option<&Nerve> {
        self.nerve_index
            .get(id)
            .and_then(|&index| self.data.nerves.get(index))
    }

    pub fn joint(&self, id: &str) -> Option<&Joint> {
        self.joint_index
            .get(id)
            .and_then(|&index| self.data.joints.get(index))
    }

    pub fn ligament(&self, id: &str) -> Option<&Ligament> {
        self.ligament_index
            .get(id)
            .and_then(|&index| self.data.ligaments.get(index))
    }

    pub fn skin_region(&self, id: &str) -> Option<&SkinRegion> {
        self.skin_index
            .get(id)
            .and_then(|&index| self.data.skin.get(index))
    }

    pub fn get(&self, kind: EntityKind, id: &str) -> Option<EntityRef<'_>> {
        match kind {
            EntityKind::Muscle => self.muscle(id).map(EntityRef::Muscle),
            EntityKind::Bone => self.bone(id).map(EntityRef::Bone),
            EntityKind::Nerve => self.nerve(id).map(EntityRef::Nerve),
            EntityKind::Joint => self.joint(id).map(EntityRef::Joint),
            EntityKind::Ligament => self.ligament(id).map(EntityRef::Ligament),
            EntityKind::Skin => self.skin_region(id).map(EntityRef::Skin),
        }
    }

    pub fn all(&self, kind: EntityKind) -> Vec<EntityRef<'_>> {
        match kind {
            EntityKind::Muscle => self.data.muscles.iter().map(EntityRef::Muscle).collect(),
            EntityKind::Bone => self.data.bones.iter().map(EntityRef::Bone).collect(),
            EntityKind::Nerve => self.data.nerves.iter().map(EntityRef::Nerve).collect(),
            EntityKind::Joint => self.data.joints.iter().map(EntityRef::Joint).collect(),
            EntityKind::Ligament => self
                .data
                .ligaments
                .iter()
                .map(EntityRef::Ligament)
                .collect(),
            EntityKind::Skin => self.data.skin.iter().map(EntityRef::Skin).collect(),
        }
    }

    /// Looks an id up across every kind, in [`EntityKind::ALL`] order.
    pub fn find(&self, id: &str) -> Option<EntityRef<'_>> {
        EntityKind::ALL
            .into_iter()
            .find_map(|kind| self.get(kind, id))
    }

    pub fn record_count(&self) -> usize {
        self.data.muscles.len()
            + self.data.bones.len()
            + self.data.nerves.len()
            + self.data.joints.len()
            + self.data.ligaments.len()
            + self.data.skin.len()
    }

    pub fn joint_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.joint(id).map_or(id, |joint| joint.names.name_ja.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::fixtures::{bone, names};

    #[test]
    fn get_round_trips_every_record() {
        let store = EntityStore::new(Dataset {
            bones: vec![bone("humerus"), bone("radius")],
            ..Default::default()
        });

        for record in store.all(EntityKind::Bone) {
            assert_eq!(store.get(EntityKind::Bone, record.id()), Some(record));
        }
        assert!(store.get(EntityKind::Muscle, "humerus").is_none());
        assert_eq!(store.find("radius").map(EntityRef::id), Some("radius"));
    }

    #[test]
    fn first_duplicate_wins() {
        let mut second = bone("humerus");
        second.names = names("second");
        let store = EntityStore::new(Dataset {
            bones: vec![bone("humerus"), second],
            ..Default::default()
        });

        assert_eq!(
            store.bone("humerus").map(|bone| bone.names.name_ja.as_str()),
            Some("humerus")
        );
        assert_eq!(store.joint_label("missing"), "missing");
    }
}
