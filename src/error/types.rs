use thiserror::Error;

/// Unified result type for the screen facade crate.
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Errors surfaced while creating or driving a screen.
///
/// Expected runtime conditions (feature negotiation refusals, absent command
/// bar) are reported through boolean or `Option` returns, never through this
/// type. `ScreenError` covers the fatal configuration class: a screen that
/// fails creation is unusable.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("host capability level unreadable: {0}")]
    CapabilityUnreadable(String),
    #[error("window style lookup failed: {0}")]
    StyleUnreadable(String),
    #[error("host backend error: {0}")]
    Backend(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
