use anyhow::Context;
use inquire::Text;

pub const DEFAULT_PROJECT_NAME: &str = "my-next-app";
pub const PROJECT_NAME_MESSAGE: &str = "What would you like to name your project?";

/// Where the project name comes from.
pub trait NameSource {
    /// # Errors
    ///
    /// Returns an [`Err`] if no name could be obtained, e.g. the prompt was
    /// cancelled or there is no terminal to prompt on.
    fn project_name(&self) -> anyhow::Result<String>;
}

/// Asks for the name on the terminal, offering a default.
pub struct Prompt {
    pub message: &'static str,
    pub default: &'static str,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            message: PROJECT_NAME_MESSAGE,
            default: DEFAULT_PROJECT_NAME,
        }
    }
}

impl NameSource for Prompt {
    fn project_name(&self) -> anyhow::Result<String> {
        let answer = Text::new(self.message)
            .with_default(self.default)
            .prompt()
            .context("Failed to read project name")?;

        Ok(resolve_answer(answer, self.default))
    }
}

/// A name known ahead of time, from the command line or a test.
pub struct FixedName(pub String);

impl FixedName {
    /// The name an empty answer would have produced.
    #[must_use]
    pub fn default_name() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl NameSource for FixedName {
    fn project_name(&self) -> anyhow::Result<String> {
        Ok(resolve_answer(self.0.clone(), DEFAULT_PROJECT_NAME))
    }
}

/// An empty answer means the default. Anything else is used verbatim.
#[must_use]
pub fn resolve_answer(answer: String, default: &str) -> String {
    if answer.is_empty() {
        default.to_string()
    } else {
        answer
    }
}
