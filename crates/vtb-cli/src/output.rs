use std::borrow::Cow;

/// Render the backend's report for display.
///
/// The report text is presented exactly as received — line breaks and
/// whitespace preserved, no markdown reinterpretation, no truncation. The
/// only adjustment is a terminating newline so the shell prompt does not
/// land mid-line.
#[must_use]
pub fn render_report(report: &str) -> Cow<'_, str> {
    if report.ends_with('\n') {
        Cow::Borrowed(report)
    } else {
        Cow::Owned(format!("{report}\n"))
    }
}

/// Print the report verbatim to stdout.
pub fn print_report(report: &str) {
    print!("{}", render_report(report));
}
