//! Line parsers for pyenv output.
//!
//! Well-formed pyenv output always ends with a newline; the original slicing
//! rules ("drop the trailing blank line", "drop the header line") silently
//! ate a real line when that invariant did not hold, so both are validated
//! here and fail descriptively instead.

use pyvm_backend::PyenvError;

/// Split multi-line output into trimmed identifiers, dropping the blank
/// artifact of the trailing newline.
///
/// # Errors
/// Fails when non-empty output does not end with a newline.
pub(crate) fn parse_lines(raw: &str) -> Result<Vec<String>, PyenvError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let body = raw.strip_suffix('\n').ok_or_else(|| {
        PyenvError::unexpected_output("output does not end with a newline")
    })?;

    Ok(body.split('\n').map(|line| line.trim().to_string()).collect())
}

/// Parse `pyenv install --list` output: one fixed header line, then one
/// installable version per line.
///
/// # Errors
/// Fails when the trailing-newline invariant does not hold or the header
/// line is missing.
pub(crate) fn parse_install_list(raw: &str) -> Result<Vec<String>, PyenvError> {
    let mut lines = parse_lines(raw)?;
    if lines.is_empty() {
        return Err(PyenvError::unexpected_output(
            "install --list output is missing its header line",
        ));
    }
    lines.remove(0);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use pyvm_backend::PyenvError;

    use super::{parse_install_list, parse_lines};

    #[test]
    fn parse_lines_drops_trailing_blank_and_trims() {
        let parsed = parse_lines("2.7.13\n3.6.1\n").expect("well-formed output should parse");
        assert_eq!(parsed, ["2.7.13", "3.6.1"]);
    }

    #[test]
    fn parse_lines_trims_indented_entries() {
        let parsed = parse_lines("  2.7.13\n  3.6.1 (set by /opt/pyenv/version)\n")
            .expect("well-formed output should parse");
        assert_eq!(parsed, ["2.7.13", "3.6.1 (set by /opt/pyenv/version)"]);
    }

    #[test]
    fn parse_lines_accepts_empty_output() {
        let parsed = parse_lines("").expect("empty output should parse");
        assert!(parsed.is_empty());
    }

    #[test]
    fn parse_lines_rejects_missing_trailing_newline() {
        let result = parse_lines("2.7.13\n3.6.1");
        assert!(matches!(result, Err(PyenvError::UnexpectedOutput { .. })));
    }

    #[test]
    fn install_list_drops_header_and_trailing_blank() {
        let parsed = parse_install_list("Available versions:\n2.7.13\n3.6.1\n")
            .expect("well-formed listing should parse");
        assert_eq!(parsed, ["2.7.13", "3.6.1"]);
    }

    #[test]
    fn install_list_rejects_empty_output() {
        let result = parse_install_list("");
        assert!(matches!(result, Err(PyenvError::UnexpectedOutput { .. })));
    }

    #[test]
    fn install_list_with_only_a_header_yields_nothing() {
        let parsed =
            parse_install_list("Available versions:\n").expect("header-only listing should parse");
        assert!(parsed.is_empty());
    }
}
