//! Navigation views of the studio page

/// The five navigation choices shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Static landing view
    Welcome,
    /// Standard/reference document upload slots
    UploadDocuments,
    /// Prompt selection and model request
    GenerateScenario,
    /// Echo chat log
    ChatWithDocument,
    /// Download of the last generated record
    ExportJson,
}

impl View {
    /// All views, in sidebar order
    pub const ALL: [View; 5] = [
        View::Welcome,
        View::UploadDocuments,
        View::GenerateScenario,
        View::ChatWithDocument,
        View::ExportJson,
    ];

    /// User-facing label for this view
    pub fn label(&self) -> &'static str {
        match self {
            View::Welcome => "Welcome",
            View::UploadDocuments => "Upload Documents",
            View::GenerateScenario => "Generate Scenario",
            View::ChatWithDocument => "Chat with Document",
            View::ExportJson => "Export JSON",
        }
    }

    /// Resolve a sidebar label back to its view
    ///
    /// Unrecognized labels resolve to `None` rather than a fallback view.
    pub fn parse(label: &str) -> Option<Self> {
        View::ALL.iter().copied().find(|v| v.label() == label)
    }

    /// Sidebar labels, in order
    pub fn labels() -> Vec<&'static str> {
        View::ALL.iter().map(|v| v.label()).collect()
    }
}
