//! # vtb-prompt
//!
//! Audit request construction: embeds two normalized documents into the fixed
//! instruction template that defines the comparison taxonomy the reasoning
//! backend must follow.
//!
//! The template is versioned ([`AUDIT_PROMPT_VERSION`]) so downstream result
//! handling can account for instruction changes. When the backend finds zero
//! discrepancies in every category it is instructed to return
//! [`CLEAN_AUDIT_SENTINEL`] verbatim, enabling exact-match clean-audit
//! detection.
//!
//! The builder never truncates. Documents exceeding the backend's input
//! limit fail at dispatch time rather than being silently cut, which would
//! corrupt audit correctness.

use vtb_core::NormalizedDocument;

/// Version tag of the instruction template, embedded in the rendered prompt's
/// trailing marker line.
pub const AUDIT_PROMPT_VERSION: &str = "1";

/// Literal text the backend is instructed to return for a clean audit.
pub const CLEAN_AUDIT_SENTINEL: &str = "No discrepancies found between the two documents.";

const MASTER_START: &str = "--- MASTER DOCUMENT START ---";
const MASTER_END: &str = "--- MASTER DOCUMENT END ---";
const CANDIDATE_START: &str = "--- DOCUMENT TO AUDIT START ---";
const CANDIDATE_END: &str = "--- DOCUMENT TO AUDIT END ---";

/// One audit request: the two assembled documents plus the fixed instruction
/// template. Built fresh per audit call, never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    master_document: String,
    candidate_document: String,
}

impl AuditRequest {
    #[must_use]
    pub fn new(master: &NormalizedDocument, candidate: &NormalizedDocument) -> Self {
        Self {
            master_document: master.to_text(),
            candidate_document: candidate.to_text(),
        }
    }

    /// Render the full prompt text sent to the backend.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "You are an expert document auditor specializing in spreadsheet data. \
Your task is to compare two documents extracted from spreadsheet files and identify all discrepancies.

Here is the MASTER DOCUMENT, which serves as the correct template or source of truth.
{MASTER_START}
{master}
{MASTER_END}

Here is the DOCUMENT TO AUDIT, which needs to be checked against the master.
{CANDIDATE_START}
{candidate}
{CANDIDATE_END}

Please perform a detailed, cell-by-cell comparison if necessary. \
Your analysis should cover the following points for each sheet present in both documents:
1. **Missing Rows:** Rows present in the MASTER DOCUMENT but not in the DOCUMENT TO AUDIT.
2. **Extra Rows:** Rows present in the DOCUMENT TO AUDIT but not in the MASTER DOCUMENT.
3. **Data Mismatches:** Rows that exist in both documents but have different values in one or more columns. \
Clearly state the row identifier (e.g., ID or first column value), the column name, the value in the master, \
and the value in the audited document.
4. **Structural Differences:** Mention if entire sheets are missing or have been added.

Present your findings in a clear, organized, and easy-to-read format. Use headings and bullet points. \
Start with a summary of findings. If no discrepancies are found across all sheets, state clearly: \
\"{CLEAN_AUDIT_SENTINEL}\"

[audit instruction template v{AUDIT_PROMPT_VERSION}]",
            master = self.master_document,
            candidate = self.candidate_document,
        )
    }

    #[must_use]
    pub fn master_document(&self) -> &str {
        &self.master_document
    }

    #[must_use]
    pub fn candidate_document(&self) -> &str {
        &self.candidate_document
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vtb_core::{NormalizedDocument, SheetTable};

    use super::*;

    fn doc(name: &str, table: &str) -> NormalizedDocument {
        NormalizedDocument::new("book.xlsx", vec![SheetTable::new(name, table)])
    }

    #[test]
    fn prompt_embeds_both_documents_between_their_markers() {
        let master = doc("Orders", "id,name,qty\n1,A,10\n2,B,20");
        let candidate = doc("Orders", "id,name,qty\n1,A,10\n2,B,25\n3,C,5");
        let prompt = AuditRequest::new(&master, &candidate).prompt();

        let master_section = section(&prompt, MASTER_START, MASTER_END);
        let candidate_section = section(&prompt, CANDIDATE_START, CANDIDATE_END);

        assert!(master_section.contains("Sheet: Orders"));
        assert!(master_section.contains("2,B,20"));
        assert!(candidate_section.contains("Sheet: Orders"));
        assert!(candidate_section.contains("2,B,25"));
        assert!(candidate_section.contains("3,C,5"));
        assert!(!master_section.contains("3,C,5"));
    }

    #[test]
    fn prompt_states_the_four_category_taxonomy_and_sentinel() {
        let prompt = AuditRequest::new(&doc("S", "a"), &doc("S", "a")).prompt();
        assert!(prompt.contains("Missing Rows"));
        assert!(prompt.contains("Extra Rows"));
        assert!(prompt.contains("Data Mismatches"));
        assert!(prompt.contains("Structural Differences"));
        assert!(prompt.contains(CLEAN_AUDIT_SENTINEL));
    }

    #[test]
    fn prompt_carries_the_template_version_tag() {
        let prompt = AuditRequest::new(&doc("S", "a"), &doc("S", "a")).prompt();
        assert!(prompt.ends_with(&format!("[audit instruction template v{AUDIT_PROMPT_VERSION}]")));
    }

    #[test]
    fn identical_documents_differ_only_in_section_markers() {
        let master = doc("Orders", "id\n1");
        let candidate = doc("Orders", "id\n1");
        let request = AuditRequest::new(&master, &candidate);

        assert_eq!(request.master_document(), request.candidate_document());

        let prompt = request.prompt();
        assert_eq!(
            section(&prompt, MASTER_START, MASTER_END),
            section(&prompt, CANDIDATE_START, CANDIDATE_END)
        );
    }

    #[test]
    fn builder_never_truncates() {
        let big_table = "x,y\n".repeat(50_000);
        let master = doc("Big", &big_table);
        let request = AuditRequest::new(&master, &doc("S", "a"));
        assert!(request.prompt().contains(&big_table));
    }

    fn section<'a>(prompt: &'a str, start: &str, end: &str) -> &'a str {
        let from = prompt.find(start).expect("start marker") + start.len();
        let to = prompt.find(end).expect("end marker");
        prompt[from..to].trim_matches('\n')
    }
}
