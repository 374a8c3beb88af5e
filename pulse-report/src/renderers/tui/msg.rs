/// Terminal-level messages produced from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    Quit,
    FocusNext,
    FocusPrev,
    /// Character typed into the focused date field
    Type(char),
    Backspace,
    NextStream,
    PrevStream,
    /// Press the focused button
    Activate,
    ScrollUp,
    ScrollDown,
    SaveSnapshot,
}
