//! Host applicability predicate.
//!
//! The consuming agent decides at load time whether this adapter manages a
//! given host. The rule is the classic yum territory: older Fedora (before
//! the tooling switchover in 11) and RedHat-family releases up to 5.

use crate::pkg::port::HostFacts;

/// Whether this adapter should manage the described host.
///
/// Pure function of the supplied facts; holds no state and is expected to
/// be called once by the host agent's module loader.
#[must_use]
pub fn manages_host(facts: &dyn HostFacts) -> bool {
    let Some(major) = facts
        .os_release()
        .split('.')
        .next()
        .and_then(|major| major.parse::<u32>().ok())
    else {
        return false;
    };

    if facts.os() == "Fedora" {
        return major < 11;
    }
    facts.os_family() == "RedHat" && major <= 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::port::MockHostFacts;

    fn facts(os: &str, family: &str, release: &str) -> MockHostFacts {
        let mut facts = MockHostFacts::new();
        let (os, family, release) = (os.to_string(), family.to_string(), release.to_string());
        facts.expect_os().return_const(os);
        facts.expect_os_family().return_const(family);
        facts.expect_os_release().return_const(release);
        facts
    }

    #[test]
    fn old_fedora_is_managed() {
        assert!(manages_host(&facts("Fedora", "RedHat", "10")));
        assert!(!manages_host(&facts("Fedora", "RedHat", "11")));
    }

    #[test]
    fn redhat_family_up_to_five_is_managed() {
        assert!(manages_host(&facts("CentOS", "RedHat", "5.11")));
        assert!(!manages_host(&facts("CentOS", "RedHat", "6.2")));
    }

    #[test]
    fn other_families_are_not_managed() {
        assert!(!manages_host(&facts("debian", "", "4")));
    }

    #[test]
    fn unparseable_release_is_not_managed() {
        assert!(!manages_host(&facts("CentOS", "RedHat", "")));
        assert!(!manages_host(&facts("CentOS", "RedHat", "rawhide")));
    }
}
