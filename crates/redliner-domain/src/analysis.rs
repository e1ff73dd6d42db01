//! Analysis results and the three review sections

use std::fmt;

/// Sentinel reported when the model found no conflicts
pub const NO_CONFLICTS: &str = "No conflicts found";

/// Sentinel reported when the model found no gaps
pub const NO_GAPS: &str = "No gaps found";

/// Sentinel reported when the model found no irrelevant content
pub const NO_IRRELEVANT: &str = "No irrelevant content found";

/// One of the three labelled sections of a review
///
/// The declaration order is the label priority used when a piece of model
/// output mentions more than one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// Places where the document contradicts the playbook
    Conflicts,
    /// Playbook requirements the document does not address
    Gaps,
    /// Document content with no bearing on the playbook
    Irrelevant,
}

impl Section {
    /// All sections in label priority order
    pub const ALL: [Section; 3] = [Section::Conflicts, Section::Gaps, Section::Irrelevant];

    /// Lowercase label as it appears in model output
    pub fn label(&self) -> &'static str {
        match self {
            Section::Conflicts => "conflicts",
            Section::Gaps => "gaps",
            Section::Irrelevant => "irrelevant",
        }
    }

    /// Placeholder used when the section is empty
    pub fn sentinel(&self) -> &'static str {
        match self {
            Section::Conflicts => NO_CONFLICTS,
            Section::Gaps => NO_GAPS,
            Section::Irrelevant => NO_IRRELEVANT,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Conflicts => "Conflicts",
            Section::Gaps => "Gaps",
            Section::Irrelevant => "Irrelevant",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of reviewing a document against a playbook
///
/// Every field always holds displayable text: empty findings are replaced by
/// the section sentinel when the result is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Conflicts between the document and the playbook
    pub conflicts: String,

    /// Playbook requirements left unaddressed
    pub gaps: String,

    /// Document content irrelevant to the playbook
    pub irrelevant: String,
}

impl AnalysisResult {
    /// Build a result, substituting sentinels for blank fields
    ///
    /// # Examples
    ///
    /// ```
    /// use redliner_domain::AnalysisResult;
    ///
    /// let result = AnalysisResult::new("", "missing NDA clause", "  ");
    /// assert_eq!(result.conflicts, "No conflicts found");
    /// assert_eq!(result.gaps, "missing NDA clause");
    /// assert_eq!(result.irrelevant, "No irrelevant content found");
    /// ```
    pub fn new(
        conflicts: impl Into<String>,
        gaps: impl Into<String>,
        irrelevant: impl Into<String>,
    ) -> Self {
        Self {
            conflicts: or_sentinel(conflicts.into(), Section::Conflicts),
            gaps: or_sentinel(gaps.into(), Section::Gaps),
            irrelevant: or_sentinel(irrelevant.into(), Section::Irrelevant),
        }
    }

    /// A result where every section reports nothing found
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    /// Get the text of a section
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Conflicts => &self.conflicts,
            Section::Gaps => &self.gaps,
            Section::Irrelevant => &self.irrelevant,
        }
    }

    /// Whether the given section holds its sentinel
    pub fn is_sentinel(&self, section: Section) -> bool {
        self.section(section) == section.sentinel()
    }

    /// Whether every section holds its sentinel
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.is_sentinel(*s))
    }
}

fn or_sentinel(value: String, section: Section) -> String {
    if value.trim().is_empty() {
        section.sentinel().to_string()
    } else {
        value
    }
}
