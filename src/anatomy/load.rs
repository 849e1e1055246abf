use std::fs;
use std::path::Path;
use std::thread::{self, ScopedJoinHandle};

use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::model::Dataset;

pub(super) fn parse_collection<T: DeserializeOwned>(raw: &str, name: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).with_context(|| format!("invalid {name} JSON"))
}

fn read_collection<T: DeserializeOwned>(data_dir: &Path, name: &str) -> Result<Vec<T>> {
    let path = data_dir.join(format!("{name}.json"));
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records = parse_collection(&raw, name)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(resource = name, count = records.len(), "loaded collection");
    Ok(records)
}

fn join_collection<T>(handle: ScopedJoinHandle<'_, Result<Vec<T>>>, name: &str) -> Result<Vec<T>> {
    handle
        .join()
        .map_err(|_| anyhow!("loader thread for {name} panicked"))?
}

/// Reads all six collections in parallel. Any single failure fails the whole
/// load; a partial dataset is never returned.
pub fn load_dataset(data_dir: &Path) -> Result<Dataset> {
    if !data_dir.is_dir() {
        return Err(anyhow!(
            "data directory {} does not exist",
            data_dir.display()
        ));
    }

    let dataset = thread::scope(|scope| -> Result<Dataset> {
        let muscles = scope.spawn(|| read_collection(data_dir, "muscles"));
        let bones = scope.spawn(|| read_collection(data_dir, "bones"));
        let nerves = scope.spawn(|| read_collection(data_dir, "nerves"));
        let joints = scope.spawn(|| read_collection(data_dir, "joints"));
        let skin = scope.spawn(|| read_collection(data_dir, "skin"));
        let ligaments = scope.spawn(|| read_collection(data_dir, "ligaments"));

        Ok(Dataset {
            muscles: join_collection(muscles, "muscles")?,
            bones: join_collection(bones, "bones")?,
            nerves: join_collection(nerves, "nerves")?,
            joints: join_collection(joints, "joints")?,
            skin: join_collection(skin, "skin")?,
            ligaments: join_collection(ligaments, "ligaments")?,
        })
    })?;

    info!(
        muscles = dataset.muscles.len(),
        bones = dataset.bones.len(),
        nerves = dataset.nerves.len(),
        joints = dataset.joints.len(),
        skin = dataset.skin.len(),
        ligaments = dataset.ligaments.len(),
        "dataset loaded from {}",
        data_dir.display()
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::model::{Bone, Joint, JointType, Muscle, Region, Role, StructureType};

    #[test]
    fn parses_muscle_with_optional_fields_missing() {
        let raw = r#"[{
            "id": "biceps",
            "name_ja": "上腕二頭筋",
            "region": "upper_limb",
            "origins": [{"bone": "scapula", "landmark": "supraglenoid tubercle"}],
            "actions": [{"joint": "elbow", "motion": "flexion", "role": "prime"}]
        }]"#;

        let muscles: Vec<Muscle> = parse_collection(raw, "muscles").unwrap();
        assert_eq!(muscles.len(), 1);
        let biceps = &muscles[0];
        assert_eq!(biceps.names.name_en, None);
        assert_eq!(biceps.region, Region::UpperLimb);
        assert!(biceps.insertions.is_empty());
        assert_eq!(biceps.actions[0].role, Role::Prime);
        assert_eq!(biceps.actions[0].motion.as_str(), "flexion");
    }

    #[test]
    fn parses_soft_tissue_and_joint_type() {
        let bones: Vec<Bone> = parse_collection(
            r#"[{"id": "it_band", "name_ja": "腸脛靱帯", "region": "lower_limb", "structure_type": "soft_tissue"}]"#,
            "bones",
        )
        .unwrap();
        assert_eq!(bones[0].structure_type, Some(StructureType::SoftTissue));

        let joints: Vec<Joint> = parse_collection(
            r#"[{"id": "elbow", "name_ja": "肘関節", "region": "upper_limb", "type": "hinge", "bones": ["humerus", "ulna"]}]"#,
            "joints",
        )
        .unwrap();
        assert_eq!(joints[0].joint_type, JointType::Hinge);
    }

    #[test]
    fn rejects_unknown_region() {
        let error = parse_collection::<Bone>(
            r#"[{"id": "x", "name_ja": "x", "region": "tail"}]"#,
            "bones",
        )
        .unwrap_err();
        assert!(format!("{error:#}").contains("invalid bones JSON"));
    }

    #[test]
    fn rejects_missing_required_name() {
        assert!(parse_collection::<Bone>(r#"[{"id": "x", "region": "trunk"}]"#, "bones").is_err());
    }
}
