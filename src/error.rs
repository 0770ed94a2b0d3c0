use thiserror::Error;

/// Error types raised by a [`Prompter`](crate::prompter::Prompter) front end.
///
/// These are the only failures a setup step lets escape; network problems are
/// absorbed by the reachability probe.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user closed the input stream or otherwise cancelled the wizard
    #[error("setup cancelled")]
    Cancelled,
    /// Terminal read/write failure
    #[error("prompt IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A scripted prompter received a prompt it has no matching answer for
    #[error("script error: {0}")]
    Script(String),
    /// A select prompt was issued without any options
    #[error("no options to select from: {0}")]
    NoOptions(String),
}
