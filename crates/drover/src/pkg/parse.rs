//! Lenient parsing of the package tool's listing output.
//!
//! The tool's list/query output is not machine-readable: it mixes headers,
//! plugin chatter, and wrapped lines in with the records. The contract here
//! is best-effort extraction — a line either matches the three-token record
//! shape exactly or it is skipped without complaint. Do not tighten this;
//! the exact output grammar is not specified upstream.

/// Cosmetic chatter emitted by the tool before its actual output.
const PLUGIN_NOTICE_PREFIX: &str = "Loaded plugin";

/// One accepted line of listing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub status: String,
}

/// Extract `(name, version, status)` records from raw listing output.
///
/// Lines starting with the plugin notice are dropped; every remaining line
/// must split into exactly three whitespace-separated tokens to be
/// accepted. The name token carries a trailing dot-delimited architecture
/// tag which is stripped; a token without any dot is taken whole.
#[must_use]
pub fn parse_listing(raw: &str) -> Vec<PackageRecord> {
    let mut records = Vec::new();

    for line in raw.lines() {
        if line.starts_with(PLUGIN_NOTICE_PREFIX) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(name_arch), Some(version), Some(status), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            continue;
        };

        let name = match name_arch.rsplit_once('.') {
            Some((name, _arch)) => name,
            None => name_arch,
        };

        records.push(PackageRecord {
            name: name.to_string(),
            version: version.to_string(),
            status: status.to_string(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_three_token_lines_and_skips_plugin_notice() {
        let raw = "foo.x86_64  1.2.3  installed\nLoaded plugins: fastestmirror\n";
        let records = parse_listing(raw);

        assert_eq!(
            records,
            vec![PackageRecord {
                name: "foo".into(),
                version: "1.2.3".into(),
                status: "installed".into(),
            }]
        );
    }

    #[test]
    fn skips_headers_blanks_and_wrapped_lines() {
        let raw = "\
Available Packages
bar.noarch 2.0-1.el5 epel
baz.i686 0.9 installed from local filesystem

single-token-line
";
        let records = parse_listing(raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "bar");
        assert_eq!(records[0].version, "2.0-1.el5");
        assert_eq!(records[0].status, "epel");
    }

    #[test]
    fn strips_only_the_trailing_arch_segment() {
        let records = parse_listing("gpg-pubkey.not.an.arch 1.0 installed");
        assert_eq!(records[0].name, "gpg-pubkey.not.an");
    }

    #[test]
    fn name_without_dot_is_taken_whole() {
        let records = parse_listing("kernel 2.6.18 installed");
        assert_eq!(records[0].name, "kernel");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("Loaded plugins: security\n").is_empty());
    }
}
