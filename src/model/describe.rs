//! Element state data model (cleartool describe)

/// Version-control state of the active file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileState {
    /// Checked-in version, read-only in the view
    Locked,
    /// Checked out to the current view
    CheckedOut,
    /// View-private file, not under version control
    Private,
    /// Describe failed or nothing described yet
    #[default]
    Unknown,
}

impl FileState {
    /// Status bar label
    pub fn label(self) -> &'static str {
        match self {
            FileState::Locked => "Locked",
            FileState::CheckedOut => "Checked Out",
            FileState::Private => "Private File",
            FileState::Unknown => "Error",
        }
    }

    /// Whether `action` makes sense for a file in this state
    pub fn allows(self, action: ElementAction) -> bool {
        matches!(
            (self, action),
            (FileState::Locked, ElementAction::Checkout)
                | (FileState::CheckedOut, ElementAction::Checkin)
                | (FileState::CheckedOut, ElementAction::UndoCheckout)
                | (FileState::Private, ElementAction::MakeElement)
        )
    }
}

/// Parsed `cleartool describe` report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Describe {
    pub state: FileState,

    /// Branch/version path, e.g. `main\3`
    pub version: Option<String>,

    /// Owner of the version or checkout
    pub user: Option<String>,

    /// Checkout, creation, or modification time depending on `state`
    pub since: Option<String>,
}

impl Describe {
    /// State after a failed describe
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// Operations that change the state of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementAction {
    Checkout,
    Checkin,
    UndoCheckout,
    MakeElement,
}

impl ElementAction {
    /// Whether cleartool records a comment for this action
    pub fn takes_comment(self) -> bool {
        !matches!(self, ElementAction::UndoCheckout)
    }

    /// Progress text while the action runs
    pub fn progress_label(self) -> &'static str {
        match self {
            ElementAction::Checkout => "Checking Out...",
            ElementAction::Checkin => "Checking In...",
            ElementAction::UndoCheckout => "Undo Check Out...",
            ElementAction::MakeElement => "Creating Element...",
        }
    }

    /// Title of the comment dialog
    pub fn title(self) -> &'static str {
        match self {
            ElementAction::Checkout => "Check Out",
            ElementAction::Checkin => "Check In",
            ElementAction::UndoCheckout => "Undo Check Out",
            ElementAction::MakeElement => "Make Element",
        }
    }
}
