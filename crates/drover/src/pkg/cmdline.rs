//! Composition of the package tool's command lines.
//!
//! Nothing here is validated locally; malformed repository names or target
//! specs are passed through for the tool itself to reject.

use tracing::info;

use super::RepoOptions;

/// Render repository scoping options into tool arguments.
///
/// When a single-repo restriction is in effect it wins outright: all repos
/// are disabled and the named one enabled, regardless of any enable/disable
/// options also supplied. Otherwise disable comes before enable so that a
/// glob disable cannot clobber the enable that follows it.
#[must_use]
pub fn repo_args(options: &RepoOptions) -> String {
    if let Some(from_repo) = options.effective_from_repo() {
        info!(repo = from_repo, "restricting operation to repo");
        return format!("--disablerepo=\"*\" --enablerepo=\"{from_repo}\"");
    }

    let mut args = Vec::new();
    if let Some(disable) = options.disable_repo.as_deref().filter(|r| !r.is_empty()) {
        info!(repo = disable, "disabling repo");
        args.push(format!("--disablerepo=\"{disable}\""));
    }
    if let Some(enable) = options.enable_repo.as_deref().filter(|r| !r.is_empty()) {
        info!(repo = enable, "enabling repo");
        args.push(format!("--enablerepo=\"{enable}\""));
    }
    args.join(" ")
}

/// Quoted `"name-version"` spec for a version-pinned target.
///
/// On x86_64 hosts a `.i686` suffix moves from the name to the tail of the
/// spec: the tool addresses 32-bit compatibility packages as
/// `name-version.i686`, not `name.i686-version`. Bare-name targets keep
/// their suffix untouched.
#[must_use]
pub fn pinned_spec(name: &str, version: &str, cpu_arch: &str) -> String {
    match name.strip_suffix(".i686") {
        Some(stripped) if cpu_arch == "x86_64" => format!("\"{stripped}-{version}.i686\""),
        _ => format!("\"{name}-{version}\""),
    }
}

/// `<tool> -y [repo args] [--nogpgcheck] install <targets>`
#[must_use]
pub fn install(tool: &str, repo_args: &str, skip_verify: bool, targets: &[String]) -> String {
    transaction(tool, repo_args, skip_verify, "install", targets)
}

/// `<tool> -y [repo args] [--nogpgcheck] downgrade <targets>`
#[must_use]
pub fn downgrade(tool: &str, repo_args: &str, skip_verify: bool, targets: &[String]) -> String {
    transaction(tool, repo_args, skip_verify, "downgrade", targets)
}

fn transaction(
    tool: &str,
    repo_args: &str,
    skip_verify: bool,
    subcommand: &str,
    targets: &[String],
) -> String {
    let targets = targets.join(" ");
    let mut pieces = vec![tool, "-y"];
    if !repo_args.is_empty() {
        pieces.push(repo_args);
    }
    if skip_verify {
        pieces.push("--nogpgcheck");
    }
    pieces.push(subcommand);
    pieces.push(&targets);
    pieces.join(" ")
}

/// `<tool> -q [repo args] list available <names>`
#[must_use]
pub fn list_available(tool: &str, repo_args: &str, names: &[String]) -> String {
    let names = names.join(" ");
    let mut pieces = vec![tool, "-q"];
    if !repo_args.is_empty() {
        pieces.push(repo_args);
    }
    pieces.push("list");
    pieces.push("available");
    pieces.push(&names);
    pieces.join(" ")
}

/// `<tool> -q check-update`
#[must_use]
pub fn check_update(tool: &str) -> String {
    format!("{tool} -q check-update")
}

/// `<tool> -q clean dbcache`
#[must_use]
pub fn clean_dbcache(tool: &str) -> String {
    format!("{tool} -q clean dbcache")
}

/// `<tool> -q -y remove "<name>"`
#[must_use]
pub fn remove(tool: &str, name: &str) -> String {
    format!("{tool} -q -y remove \"{name}\"")
}

/// `<tool> -q -y upgrade`
#[must_use]
pub fn upgrade_all(tool: &str) -> String {
    format!("{tool} -q -y upgrade")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_repo_disables_everything_else() {
        let args = repo_args(&RepoOptions::from_repo("epel-testing"));
        assert_eq!(args, "--disablerepo=\"*\" --enablerepo=\"epel-testing\"");
    }

    #[test]
    fn from_repo_overrides_enable_and_disable() {
        let options = RepoOptions {
            from_repo: Some("epel-testing".into()),
            enable_repo: Some("r1".into()),
            disable_repo: Some("r2".into()),
            ..RepoOptions::default()
        };
        assert_eq!(
            repo_args(&options),
            "--disablerepo=\"*\" --enablerepo=\"epel-testing\""
        );
    }

    #[test]
    fn disable_comes_before_enable() {
        let options = RepoOptions {
            enable_repo: Some("r1".into()),
            disable_repo: Some("r2".into()),
            ..RepoOptions::default()
        };
        assert_eq!(
            repo_args(&options),
            "--disablerepo=\"r2\" --enablerepo=\"r1\""
        );
    }

    #[test]
    fn no_options_yield_no_args() {
        assert_eq!(repo_args(&RepoOptions::default()), "");
    }

    #[test]
    fn install_command_shape() {
        let cmd = install(
            "yum",
            "--enablerepo=\"r1\"",
            true,
            &["\"foo-1.0-1\"".to_string(), "bar".to_string()],
        );
        assert_eq!(
            cmd,
            "yum -y --enablerepo=\"r1\" --nogpgcheck install \"foo-1.0-1\" bar"
        );
    }

    #[test]
    fn install_command_without_options() {
        let cmd = install("yum", "", false, &["foo".to_string()]);
        assert_eq!(cmd, "yum -y install foo");
    }

    #[test]
    fn downgrade_uses_its_own_subcommand() {
        let cmd = downgrade("yum", "", false, &["\"foo-1.0-1\"".to_string()]);
        assert_eq!(cmd, "yum -y downgrade \"foo-1.0-1\"");
    }

    #[test]
    fn pinned_spec_reattaches_i686_after_version() {
        assert_eq!(
            pinned_spec("glibc.i686", "2.5-42", "x86_64"),
            "\"glibc-2.5-42.i686\""
        );
    }

    #[test]
    fn pinned_spec_leaves_suffix_alone_off_x86_64() {
        assert_eq!(
            pinned_spec("glibc.i686", "2.5-42", "i686"),
            "\"glibc.i686-2.5-42\""
        );
        assert_eq!(pinned_spec("bash", "3.2-32", "x86_64"), "\"bash-3.2-32\"");
    }

    #[test]
    fn query_commands() {
        assert_eq!(
            list_available("yum", "", &["foo".to_string(), "bar".to_string()]),
            "yum -q list available foo bar"
        );
        assert_eq!(check_update("yum"), "yum -q check-update");
        assert_eq!(clean_dbcache("yum"), "yum -q clean dbcache");
        assert_eq!(remove("yum", "foo"), "yum -q -y remove \"foo\"");
        assert_eq!(upgrade_all("yum"), "yum -q -y upgrade");
    }
}
