// Side effects requested by key handlers that the main loop carries out.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Persist the current view toggles to the config file.
    SaveConfig,
}
