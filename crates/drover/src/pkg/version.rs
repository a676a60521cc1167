//! rpm-style version comparison.
//!
//! Replicates the comparison the host package tool itself uses, so that
//! install/downgrade decisions here agree with what the tool would do.
//! A full version string is treated as `[epoch:]version[-release]`; the
//! epoch is compared numerically, then version and release are compared
//! with the segment-wise rpm algorithm (digit runs numerically, alpha runs
//! lexically, `~` sorts before everything, `^` sorts after the bare
//! prefix but before any longer suffix).
//!
//! Malformed input yields `None`, never a silent `Equal`; callers must
//! treat `None` as "cannot decide".

use std::{cmp::Ordering, fmt, str::FromStr};

use thiserror::Error;

/// Compare two full version strings the way rpm would.
///
/// Returns `None` when either input is malformed (empty, or carrying a
/// non-numeric epoch).
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let (epoch_a, version_a, release_a) = split_evr(a.trim())?;
    let (epoch_b, version_b, release_b) = split_evr(b.trim())?;

    let ordering = epoch_a.cmp(&epoch_b);
    if ordering != Ordering::Equal {
        return Some(ordering);
    }

    let ordering = rpmvercmp(version_a, version_b);
    if ordering != Ordering::Equal {
        return Some(ordering);
    }

    // A missing release matches any release, per the tool's own EVR rules.
    if release_a.is_empty() || release_b.is_empty() {
        return Some(Ordering::Equal);
    }
    Some(rpmvercmp(release_a, release_b))
}

/// Evaluate `a <op> b` over [`compare_versions`].
///
/// `None` propagates from an undecidable comparison.
#[must_use]
pub fn compare(a: &str, op: Operator, b: &str) -> Option<bool> {
    let ordering = compare_versions(a, b)?;
    Some(match op {
        Operator::Eq => ordering == Ordering::Equal,
        Operator::Ne => ordering != Ordering::Equal,
        Operator::Lt => ordering == Ordering::Less,
        Operator::Le => ordering != Ordering::Greater,
        Operator::Gt => ordering == Ordering::Greater,
        Operator::Ge => ordering != Ordering::Less,
    })
}

/// The comparison operators accepted by [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            other => Err(OperatorParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown comparison operator `{0}`, expected one of ==, !=, <, <=, >, >=")]
pub struct OperatorParseError(String);

/// Split `[epoch:]version[-release]`. Epoch defaults to 0; the release is
/// everything after the LAST dash so that versions like `1.2-rc1-3.el5`
/// keep their inner dash on the version side of the split.
fn split_evr(evr: &str) -> Option<(u64, &str, &str)> {
    if evr.is_empty() {
        return None;
    }

    let (epoch, rest) = match evr.split_once(':') {
        Some((epoch, rest)) => (epoch.parse::<u64>().ok()?, rest),
        None => (0, evr),
    };

    let (version, release) = match rest.rsplit_once('-') {
        Some((version, release)) => (version, release),
        None => (rest, ""),
    };

    Some((epoch, version, release))
}

/// Segment-wise comparison of a single version (or release) component,
/// mirroring the tool's native algorithm.
fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() || j < b.len() {
        // Separators carry no meaning of their own
        while i < a.len() && !is_segment_byte(a[i]) {
            i += 1;
        }
        while j < b.len() && !is_segment_byte(b[j]) {
            j += 1;
        }

        let ca = a.get(i).copied();
        let cb = b.get(j).copied();

        // Tilde sorts before everything, including the end of the string
        if ca == Some(b'~') || cb == Some(b'~') {
            match (ca, cb) {
                (Some(b'~'), Some(b'~')) => {
                    i += 1;
                    j += 1;
                    continue;
                }
                (Some(b'~'), _) => return Ordering::Less,
                _ => return Ordering::Greater,
            }
        }

        // Caret sorts after the bare prefix but before any longer suffix
        if ca == Some(b'^') || cb == Some(b'^') {
            match (ca, cb) {
                (Some(b'^'), Some(b'^')) => {
                    i += 1;
                    j += 1;
                    continue;
                }
                (Some(b'^'), None) => return Ordering::Greater,
                (None, Some(b'^')) => return Ordering::Less,
                (Some(b'^'), _) => return Ordering::Less,
                _ => return Ordering::Greater,
            }
        }

        if ca.is_none() || cb.is_none() {
            break;
        }

        let numeric = a[i].is_ascii_digit();
        let seg_a = take_segment(a, &mut i, numeric);
        let seg_b = take_segment(b, &mut j, numeric);

        // Type mismatch: a numeric segment is newer than an alpha one
        if seg_b.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ordering = if numeric {
            let seg_a = trim_leading_zeros(seg_a);
            let seg_b = trim_leading_zeros(seg_b);
            seg_a.len().cmp(&seg_b.len()).then_with(|| seg_a.cmp(seg_b))
        } else {
            seg_a.cmp(seg_b)
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    // Whichever side still has content is the newer one
    match (i >= a.len(), j >= b.len()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, _) => Ordering::Greater,
    }
}

fn is_segment_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'~' || c == b'^'
}

fn take_segment<'a>(s: &'a [u8], pos: &mut usize, numeric: bool) -> &'a [u8] {
    let start = *pos;
    while *pos < s.len() {
        let c = s[*pos];
        let same_kind = if numeric {
            c.is_ascii_digit()
        } else {
            c.is_ascii_alphabetic()
        };
        if !same_kind {
            break;
        }
        *pos += 1;
    }
    &s[start..*pos]
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let first_nonzero = s.iter().position(|&c| c != b'0').unwrap_or(s.len());
    &s[first_nonzero..]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cmp(a: &str, b: &str) -> Ordering {
        compare_versions(a, b).unwrap()
    }

    #[test]
    fn equal_versions() {
        assert_eq!(cmp("1.0", "1.0"), Ordering::Equal);
        assert_eq!(cmp("1.0-1", "1.0-1"), Ordering::Equal);
        assert_eq!(cmp("1.0.", "1.0"), Ordering::Equal);
    }

    #[test]
    fn simple_ordering() {
        assert_eq!(cmp("1.0", "2.0"), Ordering::Less);
        assert_eq!(cmp("2.0.1", "2.0"), Ordering::Greater);
        assert_eq!(cmp("5.5p1", "5.5p2"), Ordering::Less);
        assert_eq!(cmp("10.0", "9.0"), Ordering::Greater);
    }

    #[test]
    fn numeric_beats_alpha_segment() {
        assert_eq!(cmp("1.1", "1.a"), Ordering::Greater);
        assert_eq!(cmp("xyz", "1"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_are_insignificant() {
        assert_eq!(cmp("1.05", "1.5"), Ordering::Equal);
        assert_eq!(cmp("1.010", "1.9"), Ordering::Greater);
    }

    #[test]
    fn longer_version_wins_on_shared_prefix() {
        assert_eq!(cmp("1.0.1", "1.0"), Ordering::Greater);
        assert_eq!(cmp("5.5p1", "5.5"), Ordering::Greater);
    }

    #[test]
    fn epoch_dominates() {
        assert_eq!(cmp("1:1.0", "2.0"), Ordering::Greater);
        assert_eq!(cmp("0:2.0", "2.0"), Ordering::Equal);
        assert_eq!(cmp("1:1.0", "2:0.1"), Ordering::Less);
    }

    #[test]
    fn release_breaks_version_ties() {
        assert_eq!(cmp("1.0-1", "1.0-2"), Ordering::Less);
        assert_eq!(cmp("1.0-2.el5", "1.0-2.el6"), Ordering::Less);
    }

    #[test]
    fn missing_release_matches_any() {
        assert_eq!(cmp("1.0", "1.0-4"), Ordering::Equal);
        assert_eq!(cmp("1.0-4", "1.0"), Ordering::Equal);
    }

    #[test]
    fn tilde_sorts_before_everything() {
        assert_eq!(cmp("1.0~rc1", "1.0"), Ordering::Less);
        assert_eq!(cmp("1.0~rc1", "1.0~rc2"), Ordering::Less);
        assert_eq!(cmp("1.0~rc1~git1", "1.0~rc1"), Ordering::Less);
    }

    #[test]
    fn caret_sorts_between_prefix_and_suffix() {
        assert_eq!(cmp("1.0^", "1.0"), Ordering::Greater);
        assert_eq!(cmp("1.0^git1", "1.0.1"), Ordering::Less);
        assert_eq!(cmp("1.0^git1", "1.0^git2"), Ordering::Less);
    }

    #[test]
    fn separators_are_interchangeable() {
        assert_eq!(cmp("1.0.2", "1_0_2"), Ordering::Equal);
        assert_eq!(cmp("2.0.1a", "2.0.1.a"), Ordering::Equal);
    }

    #[test]
    fn malformed_input_is_undecidable() {
        assert_eq!(compare_versions("", "1.0"), None);
        assert_eq!(compare_versions("1.0", ""), None);
        assert_eq!(compare_versions("x:1.0", "1.0"), None);
    }

    #[test]
    fn operator_evaluation() {
        assert_eq!(compare("0.2.4-0", Operator::Lt, "0.2.4.1-0"), Some(true));
        assert_eq!(compare("1.0-1", Operator::Ge, "1.0-1"), Some(true));
        assert_eq!(compare("1.0-1", Operator::Ne, "1.0-1"), Some(false));
        assert_eq!(compare("2.0", Operator::Le, "1.0"), Some(false));
        assert_eq!(compare("", Operator::Eq, "1.0"), None);
    }

    #[test]
    fn operator_parsing() {
        assert_eq!("<=".parse::<Operator>().unwrap(), Operator::Le);
        assert_eq!("==".parse::<Operator>().unwrap(), Operator::Eq);
        assert!("~=".parse::<Operator>().is_err());
    }
}
