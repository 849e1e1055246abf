use std::collections::HashMap;

use tracing::warn;

use super::model::EntityKind;
use super::store::EntityStore;

const LOGGED_DIAGNOSTIC_LIMIT: usize = 20;

fn missing(kind: EntityKind, id: &str, field: &str, reference: &str) -> String {
    format!("{} {id}: {field} {reference} not found", kind.label())
}

/// Output order is collection order, then field order within a record, then
/// id collisions. The list is advisory: callers log it and carry on.
pub fn validate(store: &EntityStore) -> Vec<String> {
    let mut diagnostics = Vec::new();

    for muscle in store.muscles() {
        for origin in &muscle.origins {
            if store.bone(&origin.bone).is_none() {
                diagnostics.push(missing(
                    EntityKind::Muscle,
                    &muscle.id,
                    "origin bone",
                    &origin.bone,
                ));
            }
        }
        for insertion in &muscle.insertions {
            if store.bone(&insertion.bone).is_none() {
                diagnostics.push(missing(
                    EntityKind::Muscle,
                    &muscle.id,
                    "insertion bone",
                    &insertion.bone,
                ));
            }
        }
        for entry in &muscle.innervation {
            if store.nerve(&entry.nerve).is_none() {
                diagnostics.push(missing(EntityKind::Muscle, &muscle.id, "nerve", &entry.nerve));
            }
        }
        for action in &muscle.actions {
            if store.joint(&action.joint).is_none() {
                diagnostics.push(missing(EntityKind::Muscle, &muscle.id, "joint", &action.joint));
            }
        }
    }

    for nerve in store.nerves() {
        if let Some(parent) = &nerve.parent
            && store.nerve(parent).is_none()
        {
            diagnostics.push(missing(EntityKind::Nerve, &nerve.id, "parent", parent));
        }
    }

    for joint in store.joints() {
        for bone in &joint.bones {
            if store.bone(bone).is_none() {
                diagnostics.push(missing(EntityKind::Joint, &joint.id, "bone", bone));
            }
        }
    }

    for skin in store.skin() {
        for nerve in &skin.nerves {
            if store.nerve(nerve).is_none() {
                diagnostics.push(missing(EntityKind::Skin, &skin.id, "nerve", nerve));
            }
        }
    }

    for ligament in store.ligaments() {
        for bone in &ligament.bones {
            if store.bone(bone).is_none() {
                diagnostics.push(missing(EntityKind::Ligament, &ligament.id, "bone", bone));
            }
        }
        for joint in &ligament.joints {
            if store.joint(joint).is_none() {
                diagnostics.push(missing(EntityKind::Ligament, &ligament.id, "joint", joint));
            }
        }
    }

    diagnostics.extend(id_collisions(store));
    diagnostics
}

fn id_collisions(store: &EntityStore) -> Vec<String> {
    let mut owners: HashMap<&str, EntityKind> = HashMap::new();
    let mut collisions = Vec::new();

    for kind in EntityKind::ALL {
        for record in store.all(kind) {
            let id = record.id();
            if let Some(owner) = owners.get(id) {
                collisions.push(format!(
                    "{} {id}: id already used by {}",
                    kind.label(),
                    owner.label()
                ));
            } else {
                owners.insert(id, kind);
            }
        }
    }

    collisions
}

/// Emits the diagnostics as warnings, listing at most the first twenty.
pub fn log_diagnostics(diagnostics: &[String]) {
    if diagnostics.is_empty() {
        return;
    }

    warn!("data validation: {} issues found", diagnostics.len());
    for diagnostic in diagnostics.iter().take(LOGGED_DIAGNOSTIC_LIMIT) {
        warn!("  {diagnostic}");
    }
    if diagnostics.len() > LOGGED_DIAGNOSTIC_LIMIT {
        warn!(
            "  ... and {} more",
            diagnostics.len() - LOGGED_DIAGNOSTIC_LIMIT
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::fixtures::{
        acts_on, attach, bone, innervated_by, joint, ligament, muscle, nerve, skin,
    };
    use crate::anatomy::model::{Dataset, Role};

    #[test]
    fn clean_dataset_has_no_diagnostics() {
        let mut biceps = muscle("biceps");
        biceps.origins.push(attach("humerus"));
        let store = EntityStore::new(Dataset {
            muscles: vec![biceps],
            bones: vec![bone("humerus")],
            ..Default::default()
        });

        assert!(validate(&store).is_empty());
    }

    #[test]
    fn reports_each_dangling_reference_in_field_order() {
        let mut biceps = muscle("biceps");
        biceps.origins.push(attach("scapula_MISSING"));
        biceps.insertions.push(attach("radius_MISSING"));
        biceps.innervation = vec![
            innervated_by("ulnar", &["C8"]),
            innervated_by("musculocutaneous_MISSING", &["C5"]),
        ];
        biceps.actions = vec![
            acts_on("elbow", "flexion", Role::Prime),
            acts_on("shoulder_MISSING", "flexion", Role::Assist),
        ];
        let mut ulnar = nerve("ulnar");
        ulnar.parent = Some("brachial_MISSING".to_owned());
        let mut elbow = joint("elbow");
        elbow.bones = vec!["humerus".to_owned(), "ulna_MISSING".to_owned()];
        let mut palm = skin("palm");
        palm.nerves = vec!["median_MISSING".to_owned()];
        let mut collateral = ligament("ucl");
        collateral.bones = vec!["humerus".to_owned(), "ulna_MISSING".to_owned()];
        collateral.joints = vec!["wrist_MISSING".to_owned()];

        let store = EntityStore::new(Dataset {
            muscles: vec![biceps],
            bones: vec![bone("humerus")],
            nerves: vec![ulnar],
            joints: vec![elbow],
            skin: vec![palm],
            ligaments: vec![collateral],
        });

        assert_eq!(
            validate(&store),
            vec![
                "Muscle biceps: origin bone scapula_MISSING not found",
                "Muscle biceps: insertion bone radius_MISSING not found",
                "Muscle biceps: nerve musculocutaneous_MISSING not found",
                "Muscle biceps: joint shoulder_MISSING not found",
                "Nerve ulnar: parent brachial_MISSING not found",
                "Joint elbow: bone ulna_MISSING not found",
                "Skin palm: nerve median_MISSING not found",
                "Ligament ucl: bone ulna_MISSING not found",
                "Ligament ucl: joint wrist_MISSING not found",
            ]
        );
    }

    #[test]
    fn reports_ids_shared_between_kinds() {
        let store = EntityStore::new(Dataset {
            muscles: vec![muscle("shared")],
            bones: vec![bone("shared")],
            ..Default::default()
        });

        assert_eq!(
            validate(&store),
            vec!["Bone shared: id already used by Muscle"]
        );
    }

    #[test]
    fn every_reference_instance_is_reported_once() {
        let mut deltoid = muscle("deltoid");
        deltoid.origins = vec![attach("clavicle_MISSING"), attach("clavicle_MISSING")];
        deltoid.innervation = vec![innervated_by("axillary_MISSING", &["C5", "C6"])];
        let store = EntityStore::new(Dataset {
            muscles: vec![deltoid],
            ..Default::default()
        });

        let diagnostics = validate(&store);
        let count = |needle: &str| {
            diagnostics
                .iter()
                .filter(|diagnostic| diagnostic.contains(needle))
                .count()
        };
        assert_eq!(count("clavicle_MISSING"), 2);
        assert_eq!(count("axillary_MISSING"), 1);
        assert_eq!(diagnostics.len(), 3);
    }

    #[test]
    fn reports_ids_repeated_within_a_kind() {
        let store = EntityStore::new(Dataset {
            nerves: vec![nerve("radial"), nerve("radial")],
            ..Default::default()
        });

        assert_eq!(
            validate(&store),
            vec!["Nerve radial: id already used by Nerve"]
        );
    }
}
