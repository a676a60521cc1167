//! Point-in-time view of the installed package set.
//!
//! A snapshot is built from the raw records of an rpm database query and is
//! immutable once taken. Mutating operations take one snapshot before and
//! one after running the tool and diff the pair; nothing here is ever
//! persisted.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field separator of the fixed-format database query records.
pub const RECORD_DELIMITER: &str = "_|-";

/// Installed package name → ordered list of installed versions.
///
/// Most names carry exactly one version; installonly packages (kernels)
/// legitimately carry several. On x86_64 hosts, 32-bit compatibility
/// packages are keyed as `<name>.i686`, distinct from the native package
/// of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledSnapshot {
    pkgs: BTreeMap<String, Vec<String>>,
}

impl InstalledSnapshot {
    /// Build a snapshot from `name_|-version_|-release_|-arch` records,
    /// one per line.
    ///
    /// Records that do not split into exactly four fields are skipped;
    /// with the fixed query format that should never happen, but a
    /// malformed line must not poison the rest of the snapshot. Version
    /// lists are sorted before the snapshot is returned.
    #[must_use]
    pub fn parse(records: &str, cpu_arch: &str) -> Self {
        let mut snapshot = Self::default();

        for line in records.lines() {
            let fields: Vec<&str> = line.split(RECORD_DELIMITER).collect();
            let &[name, version, release, arch] = fields.as_slice() else {
                continue;
            };

            // Keep 32-bit compatibility packages distinct from the native
            // 64-bit package of the same name
            let mut key = name.to_string();
            if cpu_arch == "x86_64" && arch == "i686" {
                key.push_str(".i686");
            }

            let mut pkgver = version.to_string();
            if !release.is_empty() {
                pkgver.push('-');
                pkgver.push_str(release);
            }

            snapshot.pkgs.entry(key).or_default().push(pkgver);
        }

        for versions in snapshot.pkgs.values_mut() {
            versions.sort();
        }
        snapshot
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pkgs.contains_key(name)
    }

    /// The display version for `name`: the sole version, or all installed
    /// versions joined with commas.
    #[must_use]
    pub fn version(&self, name: &str) -> Option<String> {
        self.pkgs.get(name).map(|versions| versions.join(","))
    }

    /// All installed versions of `name`, oldest-sorting first.
    #[must_use]
    pub fn versions(&self, name: &str) -> Option<&[String]> {
        self.pkgs.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pkgs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.pkgs
            .iter()
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pkgs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pkgs.is_empty()
    }

    /// Shape the snapshot for consumers: one joined display string per
    /// name, or the explicit version lists.
    #[must_use]
    pub fn into_listing(self, versions_as_list: bool) -> PackageListing {
        if versions_as_list {
            PackageListing::Lists(self.pkgs)
        } else {
            PackageListing::Joined(
                self.pkgs
                    .into_iter()
                    .map(|(name, versions)| (name, versions.join(",")))
                    .collect(),
            )
        }
    }
}

/// Consumer-facing shape of an installed listing, selected by the
/// `versions_as_list` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PackageListing {
    Joined(BTreeMap<String, String>),
    Lists(BTreeMap<String, Vec<String>>),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RECORDS: &str = "\
bash_|-3.2_|-32.el5_|-x86_64
kernel_|-2.6.18_|-128.el5_|-x86_64
kernel_|-2.6.18_|-164.el5_|-x86_64
glibc_|-2.5_|-42_|-i686
zlib_|-1.2.3_|-_|-x86_64
";

    #[test]
    fn joins_version_and_release() {
        let snapshot = InstalledSnapshot::parse(RECORDS, "x86_64");
        assert_eq!(snapshot.version("bash"), Some("3.2-32.el5".into()));
    }

    #[test]
    fn empty_release_leaves_bare_version() {
        let snapshot = InstalledSnapshot::parse(RECORDS, "x86_64");
        assert_eq!(snapshot.version("zlib"), Some("1.2.3".into()));
    }

    #[test]
    fn multiple_installs_accumulate_sorted() {
        let snapshot = InstalledSnapshot::parse(RECORDS, "x86_64");
        assert_eq!(
            snapshot.versions("kernel").unwrap(),
            &["2.6.18-128.el5".to_string(), "2.6.18-164.el5".to_string()]
        );
        assert_eq!(
            snapshot.version("kernel"),
            Some("2.6.18-128.el5,2.6.18-164.el5".into())
        );
    }

    #[test]
    fn i686_keys_are_suffixed_on_x86_64_only() {
        let on_64 = InstalledSnapshot::parse(RECORDS, "x86_64");
        assert!(on_64.contains("glibc.i686"));
        assert!(!on_64.contains("glibc"));

        let on_32 = InstalledSnapshot::parse(RECORDS, "i686");
        assert!(on_32.contains("glibc"));
        assert!(!on_32.contains("glibc.i686"));
    }

    #[test]
    fn malformed_records_are_skipped() {
        let snapshot = InstalledSnapshot::parse("junk line\nbash_|-3.2_|-1_|-x86_64\n", "x86_64");
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn listing_shapes() {
        let snapshot = InstalledSnapshot::parse(RECORDS, "x86_64");

        match snapshot.clone().into_listing(false) {
            PackageListing::Joined(map) => {
                assert_eq!(map["kernel"], "2.6.18-128.el5,2.6.18-164.el5");
            }
            PackageListing::Lists(_) => panic!("expected joined shape"),
        }

        match snapshot.into_listing(true) {
            PackageListing::Lists(map) => assert_eq!(map["kernel"].len(), 2),
            PackageListing::Joined(_) => panic!("expected list shape"),
        }
    }
}
