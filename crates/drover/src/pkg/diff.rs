//! Snapshot diffing: the observable effect of a mutating operation.
//!
//! The two diffs are deliberately asymmetric. Install and upgrade report
//! additions and version changes through [`changes`]; remove reports
//! disappearances through [`removed`]. Neither folds the other's result
//! into its own.

use std::collections::BTreeMap;

use serde::Serialize;

use super::snapshot::InstalledSnapshot;

/// Version transition of one package. An empty `old` means the package was
/// freshly installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub old: String,
    pub new: String,
}

/// Package name → version transition, as reported by install/upgrade.
pub type ChangeSet = BTreeMap<String, Change>;

/// Names present in `before` whose key is absent from `after`, in
/// `before`'s iteration order.
#[must_use]
pub fn removed(before: &InstalledSnapshot, after: &InstalledSnapshot) -> Vec<String> {
    before
        .names()
        .filter(|name| !after.contains(name))
        .map(str::to_string)
        .collect()
}

/// Version transitions from `before` to `after`.
///
/// For every name in `after`: unchanged versions are omitted, changed
/// versions are reported as old→new, and names absent from `before` are
/// reported with an empty `old`. Names present only in `before` are NOT
/// reported here; removals belong to [`removed`].
#[must_use]
pub fn changes(before: &InstalledSnapshot, after: &InstalledSnapshot) -> ChangeSet {
    let mut changeset = ChangeSet::new();

    for (name, _) in after.iter() {
        let new = after.version(name).unwrap_or_default();
        match before.version(name) {
            Some(old) if old == new => {}
            Some(old) => {
                changeset.insert(name.to_string(), Change { old, new });
            }
            None => {
                changeset.insert(
                    name.to_string(),
                    Change {
                        old: String::new(),
                        new,
                    },
                );
            }
        }
    }

    changeset
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn snapshot(records: &[(&str, &str)]) -> InstalledSnapshot {
        let raw: String = records
            .iter()
            .map(|(name, version)| format!("{name}_|-{version}_|-_|-x86_64\n"))
            .collect();
        InstalledSnapshot::parse(&raw, "x86_64")
    }

    #[test]
    fn self_diff_is_empty() {
        let snap = snapshot(&[("bash", "3.2"), ("zlib", "1.2.3")]);
        assert!(changes(&snap, &snap).is_empty());
        assert!(removed(&snap, &snap).is_empty());
    }

    #[test]
    fn fresh_install_has_empty_old() {
        let before = snapshot(&[("bash", "3.2")]);
        let after = snapshot(&[("bash", "3.2"), ("zlib", "1.2.3")]);

        let changeset = changes(&before, &after);
        assert_eq!(changeset.len(), 1);
        assert_eq!(
            changeset["zlib"],
            Change {
                old: String::new(),
                new: "1.2.3".into()
            }
        );
        assert!(removed(&before, &after).is_empty());
    }

    #[test]
    fn version_change_reports_old_and_new() {
        let before = snapshot(&[("bash", "3.2")]);
        let after = snapshot(&[("bash", "4.0")]);

        assert_eq!(
            changes(&before, &after)["bash"],
            Change {
                old: "3.2".into(),
                new: "4.0".into()
            }
        );
    }

    #[test]
    fn removal_is_reported_only_by_removed() {
        let before = snapshot(&[("bash", "3.2"), ("zlib", "1.2.3")]);
        let after = snapshot(&[("bash", "3.2")]);

        assert_eq!(removed(&before, &after), vec!["zlib".to_string()]);
        assert!(!changes(&before, &after).contains_key("zlib"));
    }

    #[test]
    fn removed_preserves_before_iteration_order() {
        let before = snapshot(&[("zlib", "1"), ("bash", "2"), ("acl", "3")]);
        let after = snapshot(&[]);

        assert_eq!(removed(&before, &after), vec!["acl", "bash", "zlib"]);
    }
}
