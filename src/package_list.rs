//! Parsing of the `Package-List` field.
//!
//! Each non-empty line of the field describes one binary package:
//!
//! ```text
//! name style section priority [extra ...]
//! alien-arena deb contrib/games optional arch=any
//! ```
//!
//! Columns are separated by single spaces and each column is trimmed. The
//! first four columns are mandatory; any further columns are kept verbatim,
//! in order, as extras. The priority column must be a recognized
//! [`Priority`](crate::Priority) token.

use crate::document::BinaryPackage;
use crate::enumerations::Priority;
use crate::error::{Result, TranscodeError};
use tracing::trace;

/// Number of mandatory columns on a `Package-List` line
const MANDATORY_COLUMNS: usize = 4;

/// Parse a whole `Package-List` body into binary package descriptors.
///
/// Blank lines (including the empty first line of a multi-line field) are
/// skipped. An empty body yields an empty list.
///
/// # Errors
///
/// Returns [`TranscodeError::MalformedPackageListEntry`] for a line with fewer
/// than four columns and [`TranscodeError::UnrecognizedEnumValue`] for an
/// unknown priority.
///
/// # Examples
///
/// ```
/// use debsrc::package_list::parse_package_list;
///
/// let binaries = parse_package_list(
///     "\n hello deb devel optional arch=any\n hello-dbg deb debug extra arch=any",
/// )?;
/// assert_eq!(binaries.len(), 2);
/// assert_eq!(binaries[1].name, "hello-dbg");
/// # Ok::<(), debsrc::TranscodeError>(())
/// ```
pub fn parse_package_list(body: &str) -> Result<Vec<BinaryPackage>> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_package_list_line)
        .collect()
}

/// Parse a single `Package-List` line.
///
/// # Errors
///
/// See [`parse_package_list`].
pub fn parse_package_list_line(line: &str) -> Result<BinaryPackage> {
    let line = line.trim();
    trace!(line = %line, "parsing Package-List entry");

    let columns: Vec<&str> = line.split(' ').map(str::trim).collect();
    if columns.len() < MANDATORY_COLUMNS {
        return Err(TranscodeError::MalformedPackageListEntry(line.to_string()));
    }

    Ok(BinaryPackage {
        name: columns[0].to_string(),
        style: Some(columns[1].to_string()),
        section: Some(columns[2].to_string()),
        priority: Some(Priority::from_token(columns[3])?),
        extras: columns[MANDATORY_COLUMNS..]
            .iter()
            .map(|extra| (*extra).to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_extras() {
        let binary = parse_package_list_line("libfoo libfoo0 libs optional extra1 extra2").unwrap();
        assert_eq!(binary.name, "libfoo");
        assert_eq!(binary.style.as_deref(), Some("libfoo0"));
        assert_eq!(binary.section.as_deref(), Some("libs"));
        assert_eq!(binary.priority, Some(Priority::Optional));
        assert_eq!(binary.extras, vec!["extra1", "extra2"]);
    }

    #[test]
    fn test_line_without_extras() {
        let binary = parse_package_list_line("hello deb devel optional").unwrap();
        assert!(binary.extras.is_empty());
    }

    #[test]
    fn test_three_columns_is_malformed() {
        match parse_package_list_line("libfoo libs optional") {
            Err(TranscodeError::MalformedPackageListEntry(line)) => {
                assert_eq!(line, "libfoo libs optional");
            },
            other => panic!("expected MalformedPackageListEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        assert!(matches!(
            parse_package_list_line("hello deb devel urgent"),
            Err(TranscodeError::UnrecognizedEnumValue { field: "Priority", .. })
        ));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let binary = parse_package_list_line("  hello deb devel optional arch=any\t").unwrap();
        assert_eq!(binary.name, "hello");
        assert_eq!(binary.extras, vec!["arch=any"]);
    }

    #[test]
    fn test_body_skips_blank_lines_and_keeps_order() {
        let body = "\n alien-arena deb contrib/games optional arch=any\n\n alien-arena-server deb contrib/games optional arch=any\n";
        let binaries = parse_package_list(body).unwrap();
        let names: Vec<&str> = binaries.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["alien-arena", "alien-arena-server"]);
    }

    #[test]
    fn test_empty_body() {
        assert!(parse_package_list("").unwrap().is_empty());
        assert!(parse_package_list("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_one_bad_line_fails_the_list() {
        let body = "hello deb devel optional\nbroken line";
        assert!(parse_package_list(body).is_err());
    }
}
