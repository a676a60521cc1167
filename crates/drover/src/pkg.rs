//! Package-state domain: command composition, output parsing, snapshots,
//! diffing, version comparison, and the operation service.

pub mod cmdline;
pub mod diff;
pub mod parse;
pub mod port;
pub mod service;
pub mod snapshot;
pub mod version;

pub use diff::{Change, ChangeSet};
pub use parse::PackageRecord;
pub use service::{PkgError, PkgService, YumService};
pub use snapshot::{InstalledSnapshot, PackageListing};

/// Repository scoping for a single operation.
///
/// `from_repo` (or its legacy alias `repo`) restricts the operation to one
/// repository by disabling all others; otherwise `enable_repo` and
/// `disable_repo` apply independently and may both be present. Unknown
/// repository names are passed through untouched; the package tool is the
/// authority on their validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoOptions {
    pub from_repo: Option<String>,

    /// Legacy spelling of `from_repo`, honored only when `from_repo` is
    /// unset.
    pub repo: Option<String>,

    pub enable_repo: Option<String>,
    pub disable_repo: Option<String>,
}

impl RepoOptions {
    /// Restrict the operation to a single repository.
    #[must_use]
    pub fn from_repo(repo: impl Into<String>) -> Self {
        Self {
            from_repo: Some(repo.into()),
            ..Self::default()
        }
    }

    /// `from_repo` with the legacy `repo` fallback applied.
    #[must_use]
    pub fn effective_from_repo(&self) -> Option<&str> {
        self.from_repo
            .as_deref()
            .filter(|r| !r.is_empty())
            .or_else(|| self.repo.as_deref().filter(|r| !r.is_empty()))
    }
}

/// One requested package: a bare name, or a name pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub name: String,
    pub version: Option<String>,
}

impl InstallTarget {
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    #[must_use]
    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }
}

/// A package file to install directly, named so its effect can be reported.
/// The source is an opaque path or URI; the package tool resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePackage {
    pub name: String,
    pub source: String,
}

/// Everything an `install` call can carry.
///
/// `name`/`version` describe a single scalar target; `pkgs` and `sources`
/// are the multi-target forms and take precedence over `name` when
/// non-empty. Supplying `version` together with `pkgs` or `sources` is
/// accepted, but the pin is ignored with a warning.
#[derive(Debug, Clone, Default)]
pub struct InstallRequest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub refresh: bool,
    pub skip_verify: bool,
    pub repos: RepoOptions,
    pub pkgs: Vec<InstallTarget>,
    pub sources: Vec<SourcePackage>,
}

impl InstallRequest {
    /// Request installation of a single package by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
