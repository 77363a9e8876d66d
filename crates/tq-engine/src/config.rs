//! Configuration for the context loop.

/// Tokens and messages used by [`crate::context::run`].
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Input that leaves the current context.
    pub back_token: char,
    /// Label shown next to the back token.
    pub back_label: String,
    /// Printed when the input matches no choice.
    pub unrecognized_message: String,
    /// Shown under a popup while waiting for the player.
    pub continue_prompt: String,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            back_token: 'b',
            back_label: "Back".to_string(),
            unrecognized_message: "Input not recognized.".to_string(),
            continue_prompt: "Press enter to continue.".to_string(),
        }
    }
}

impl LoopConfig {
    /// Set the back token (stored lower-case).
    pub fn with_back_token(mut self, token: char) -> Self {
        self.back_token = token.to_ascii_lowercase();
        self
    }

    /// Set the label shown for the back token.
    pub fn with_back_label(mut self, label: impl Into<String>) -> Self {
        self.back_label = label.into();
        self
    }

    /// Set the message printed for unrecognized input.
    pub fn with_unrecognized_message(mut self, message: impl Into<String>) -> Self {
        self.unrecognized_message = message.into();
        self
    }

    /// Set the prompt shown under popups.
    pub fn with_continue_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.continue_prompt = prompt.into();
        self
    }
}
