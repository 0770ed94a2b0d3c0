use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ConfirmPrompt, Prompter, SelectPrompt, TextPrompt};
use crate::error::PromptError;

/// A queued reply for a [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Take the prompt's initial value, whatever its kind.
    Default,
    Text(String),
    Confirm(bool),
    Select(String),
}

/// One prompter call, as observed by a [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Note {
        title: Option<String>,
        message: String,
    },
    Text {
        message: String,
    },
    Confirm {
        message: String,
    },
    Select {
        message: String,
    },
}

/// Non-interactive prompter that replays queued answers.
///
/// Prompts with no queued answer take their initial value, so an empty script is an
/// "accept every default" run. Every call is recorded.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<ScriptedAnswer>>,
    events: Mutex<Vec<PromptEvent>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<PromptEvent> {
        self.events.lock().clone()
    }

    /// Answers that were queued but never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.lock().len()
    }

    fn record(&self, event: PromptEvent) {
        self.events.lock().push(event);
    }

    /// Pops the next answer when `accept` recognises it.
    ///
    /// `Ok(None)` means "use the initial value": the queue is empty or held
    /// [`ScriptedAnswer::Default`].
    fn next_answer<T>(
        &self,
        kind: &str,
        accept: impl FnOnce(&ScriptedAnswer) -> Option<T>,
    ) -> Result<Option<T>, PromptError> {
        let mut answers = self.answers.lock();
        let Some(front) = answers.front() else {
            return Ok(None);
        };
        if *front == ScriptedAnswer::Default {
            answers.pop_front();
            return Ok(None);
        }
        match accept(front) {
            Some(value) => {
                answers.pop_front();
                Ok(Some(value))
            }
            None => Err(PromptError::Script(format!(
                "expected a {kind} answer, found {front:?}"
            ))),
        }
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn note(&self, message: &str, title: Option<&str>) -> Result<(), PromptError> {
        self.record(PromptEvent::Note {
            title: title.map(str::to_string),
            message: message.to_string(),
        });
        Ok(())
    }

    async fn text(&self, prompt: TextPrompt) -> Result<String, PromptError> {
        self.record(PromptEvent::Text {
            message: prompt.message.clone(),
        });
        let answer = self.next_answer("text", |answer| match answer {
            ScriptedAnswer::Text(value) => Some(value.clone()),
            _ => None,
        })?;
        Ok(answer.unwrap_or_else(|| prompt.initial_value.unwrap_or_default()))
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool, PromptError> {
        self.record(PromptEvent::Confirm {
            message: prompt.message.clone(),
        });
        let answer = self.next_answer("confirm", |answer| match answer {
            ScriptedAnswer::Confirm(value) => Some(*value),
            _ => None,
        })?;
        Ok(answer.unwrap_or(prompt.initial_value))
    }

    async fn select(&self, prompt: SelectPrompt) -> Result<String, PromptError> {
        self.record(PromptEvent::Select {
            message: prompt.message.clone(),
        });
        let answer = self.next_answer("select", |answer| match answer {
            ScriptedAnswer::Select(value) => Some(value.clone()),
            _ => None,
        })?;
        match answer {
            Some(value) => Ok(value),
            None => prompt
                .default_value()
                .map(str::to_string)
                .ok_or(PromptError::NoOptions(prompt.message)),
        }
    }
}
