use crate::error::Error;
use crate::result::Result;
use std::collections::HashMap;
use std::io::IsTerminal;

pub const AUTHOR_PROMPT: &str = "Enter name of author";
pub const DESCRIPTION_PROMPT: &str = "Enter description";

/// Source of the free-text answers the packager needs
pub trait InputProvider {
    fn ask_string(&mut self, prompt: &str) -> Result<String>;
}

/// Asks on the terminal
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl InputProvider for ConsolePrompter {
    fn ask_string(&mut self, prompt: &str) -> Result<String> {
        if !std::io::stdin().is_terminal() {
            return Err(Error::Input(format!(
                "{prompt}: no terminal available, pass the value as a flag or in Robocode.toml"
            )));
        }
        cliclack::input(prompt)
            .validate(|value: &String| {
                if value.trim().is_empty() {
                    Err("A value is required")
                } else {
                    Ok(())
                }
            })
            .interact()
            .map_err(|e| Error::Input(format!("{prompt}: {e}")))
    }
}

/// Answers known up front (flags, configuration); anything else is asked
/// through `fallback`.
pub struct PresetInput<P> {
    answers: HashMap<String, String>,
    fallback: P,
}

impl<P: InputProvider> PresetInput<P> {
    pub fn new(fallback: P) -> Self {
        Self {
            answers: HashMap::new(),
            fallback,
        }
    }

    pub fn answer(mut self, prompt: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.answers.insert(prompt.to_string(), value);
        }
        self
    }
}

impl<P: InputProvider> InputProvider for PresetInput<P> {
    fn ask_string(&mut self, prompt: &str) -> Result<String> {
        match self.answers.get(prompt) {
            Some(value) => {
                log::debug!("using preset answer for '{prompt}'");
                Ok(value.clone())
            }
            None => self.fallback.ask_string(prompt),
        }
    }
}

/// Fails every prompt
#[cfg(test)]
#[derive(Debug, Default)]
pub struct NoInput;

#[cfg(test)]
impl InputProvider for NoInput {
    fn ask_string(&mut self, prompt: &str) -> Result<String> {
        Err(Error::Input(format!("no answer available for '{prompt}'")))
    }
}
