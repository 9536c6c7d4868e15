/// Actions that can be performed in the chart view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // View
    ToggleLayout,

    // Modals
    ShowHelp,
    CloseModal,

    // App control
    Quit,
    Tick, // Timer tick for effects

    // No action
    None,
}
