//! Parse model replies into review sections

use redliner_domain::{AnalysisResult, Section};
use tracing::debug;

/// Separator between bullet sections in a model reply
pub const SECTION_DELIMITER: &str = "\n- ";

/// Section texts extracted from a reply, empty where no section matched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    /// Conflicts text
    pub conflicts: String,

    /// Gaps text
    pub gaps: String,

    /// Irrelevant content text
    pub irrelevant: String,
}

impl ParsedSections {
    /// Text parsed for a section
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Conflicts => &self.conflicts,
            Section::Gaps => &self.gaps,
            Section::Irrelevant => &self.irrelevant,
        }
    }

    /// Whether no section produced any text
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.get(*s).is_empty())
    }

    /// Convert to a result, substituting sentinels for empty sections
    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult::new(self.conflicts, self.gaps, self.irrelevant)
    }

    fn set(&mut self, section: Section, value: String) {
        match section {
            Section::Conflicts => self.conflicts = value,
            Section::Gaps => self.gaps = value,
            Section::Irrelevant => self.irrelevant = value,
        }
    }
}

/// Parse a model reply into sections
///
/// The reply is split on `"\n- "`. Each segment is assigned to the first
/// section whose label it contains, case-insensitively, checking conflicts,
/// then gaps, then irrelevant. Its value is the text after the first colon,
/// or the whole segment when there is none. A later segment for the same
/// section replaces an earlier one. Segments naming no label are ignored.
///
/// Never fails: unparseable replies yield empty sections.
///
/// # Examples
///
/// ```
/// use redliner_analyzer::parse_response;
///
/// let sections = parse_response("- Conflicts: A\n- Gaps: B\n- Irrelevant: C");
/// assert_eq!(sections.conflicts, "A");
/// assert_eq!(sections.gaps, "B");
/// assert_eq!(sections.irrelevant, "C");
/// ```
pub fn parse_response(raw: &str) -> ParsedSections {
    let normalized = raw.replace("\r\n", "\n");
    let mut sections = ParsedSections::default();

    for segment in normalized.split(SECTION_DELIMITER) {
        if let Some(section) = classify(segment) {
            sections.set(section, section_value(segment).to_string());
        }
    }

    sections
}

/// Assign a segment to a section by label, first match wins
fn classify(segment: &str) -> Option<Section> {
    let lower = segment.to_lowercase();
    let mut matches = Section::ALL
        .iter()
        .copied()
        .filter(|s| lower.contains(s.label()));

    let first = matches.next()?;
    let others: Vec<Section> = matches.collect();
    if !others.is_empty() {
        debug!(
            "Ambiguous reply segment matches {} and {:?}; using {}",
            first, others, first
        );
    }
    Some(first)
}

fn section_value(segment: &str) -> &str {
    segment
        .split_once(':')
        .map_or(segment, |(_, value)| value)
        .trim()
}
