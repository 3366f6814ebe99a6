/// What a `pause` job command should do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PauseAction {
    /// Pause; no effect if already paused.
    Pause,
    /// Resume; no effect if not paused.
    Resume,
    /// Switch between paused and printing.
    #[default]
    Toggle,
}

impl PauseAction {
    /// The `action` value sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseAction::Pause => "pause",
            PauseAction::Resume => "resume",
            PauseAction::Toggle => "toggle",
        }
    }
}
