//! Discriminator comparison.

use crate::diff::checks::{
    check_for_object_addition_or_removal, check_properties, flatten_low_level_map, PropertyCheck,
};
use crate::diff::{count_breaking_changes, Change, Changed, PropertyChanges};
use crate::model::base::Discriminator;
use crate::model::labels::PROPERTY_NAME_LABEL;
use serde::Serialize;

/// Changes to a Discriminator and its mapping.
#[derive(Debug, Clone, Serialize)]
pub struct DiscriminatorChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    /// Entries of `mapping` that were added, removed or repointed.
    pub mapping_changes: Vec<Change>,
}

impl Changed for DiscriminatorChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes() + self.mapping_changes.len()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
            + count_breaking_changes(&self.mapping_changes)
    }
}

/// Compare two discriminators.
///
/// Renaming the property is breaking. In the mapping, a new value is not
/// breaking, while a removed or repointed one is.
#[must_use]
pub fn compare_discriminator(
    left: &Discriminator,
    right: &Discriminator,
) -> Option<DiscriminatorChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[PropertyCheck::fields(
            PROPERTY_NAME_LABEL,
            &left.property_name,
            &right.property_name,
            true,
        )],
        &mut changes,
    );

    let l = flatten_low_level_map(&left.mapping);
    let r = flatten_low_level_map(&right.mapping);
    let mut mapping_changes = Vec::new();
    for (key, lv) in &l {
        check_for_object_addition_or_removal(&l, &r, key, &mut mapping_changes, false, true);
        if let Some(rv) = r.get(key) {
            check_properties(
                &[PropertyCheck::new(key, Some(&lv.value_node), Some(&rv.value_node), true)],
                &mut mapping_changes,
            );
        }
    }
    for key in r.keys().filter(|k| !l.contains_key(*k)) {
        check_for_object_addition_or_removal(&l, &r, key, &mut mapping_changes, false, true);
    }

    let report = DiscriminatorChanges {
        property_changes: PropertyChanges::new(changes),
        mapping_changes,
    };
    (report.total_changes() > 0).then_some(report)
}
