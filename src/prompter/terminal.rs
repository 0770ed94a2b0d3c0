use async_trait::async_trait;
use crossterm::style::Stylize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;

use super::{ConfirmPrompt, Prompter, SelectPrompt, TextPrompt};
use crate::error::PromptError;

/// Line-oriented prompter over an async reader/writer pair.
///
/// A blank answer takes the prompt's default; end of input cancels the wizard.
pub struct TerminalPrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl TerminalPrompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }

    async fn write(&self, text: &str) -> Result<(), PromptError> {
        let mut guard = self.io.lock().await;
        let (_, writer) = &mut *guard;
        writer.write_all(text.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Writes `question` and reads one line, without its line terminator.
    async fn ask(&self, question: &str) -> Result<String, PromptError> {
        let mut guard = self.io.lock().await;
        let (reader, writer) = &mut *guard;
        writer.write_all(question.as_bytes()).await?;
        writer.flush().await?;
        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            return Err(PromptError::Cancelled);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn question(message: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{} {}: ", "?".cyan().bold(), message.bold())
    } else {
        format!("{} {} {}: ", "?".cyan().bold(), message.bold(), suffix.dark_grey())
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn parse_selection<'a>(prompt: &'a SelectPrompt, answer: &str) -> Option<&'a str> {
    let answer = answer.trim();
    if let Ok(index) = answer.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| prompt.options.get(i))
            .map(|opt| opt.value.as_str());
    }
    prompt
        .options
        .iter()
        .find(|opt| opt.value == answer)
        .map(|opt| opt.value.as_str())
}

#[async_trait]
impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn note(&self, message: &str, title: Option<&str>) -> Result<(), PromptError> {
        let mut out = String::new();
        if let Some(title) = title {
            out.push_str(&format!("{} {}\n", "┌".dark_grey(), title.bold()));
        }
        for line in message.lines() {
            out.push_str(&format!("{} {}\n", "│".dark_grey(), line));
        }
        if title.is_some() {
            out.push_str(&format!("{}\n", "└".dark_grey()));
        }
        self.write(&out).await
    }

    async fn text(&self, prompt: TextPrompt) -> Result<String, PromptError> {
        let suffix = prompt
            .initial_value
            .as_deref()
            .or(prompt.placeholder.as_deref())
            .map(|hint| format!("({hint})"))
            .unwrap_or_default();
        let answer = self.ask(&question(&prompt.message, &suffix)).await?;
        if answer.trim().is_empty() {
            return Ok(prompt.initial_value.unwrap_or_default());
        }
        Ok(answer)
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> Result<bool, PromptError> {
        let suffix = if prompt.initial_value { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&question(&prompt.message, suffix)).await?;
            if answer.trim().is_empty() {
                return Ok(prompt.initial_value);
            }
            match parse_yes_no(&answer) {
                Some(value) => return Ok(value),
                None => self.write("  Please answer y or n.\n").await?,
            }
        }
    }

    async fn select(&self, prompt: SelectPrompt) -> Result<String, PromptError> {
        let Some(default) = prompt.default_value().map(str::to_string) else {
            return Err(PromptError::NoOptions(prompt.message));
        };
        let mut listing = String::new();
        for (i, opt) in prompt.options.iter().enumerate() {
            let marker = if opt.value == default { "*" } else { " " };
            listing.push_str(&format!("{marker} {:>2}) {}", i + 1, opt.label));
            if let Some(hint) = &opt.hint {
                listing.push_str(&format!(" {}", format!("- {hint}").dark_grey()));
            }
            listing.push('\n');
        }
        self.write(&listing).await?;
        let range = format!("[1-{}]", prompt.options.len());
        loop {
            let answer = self.ask(&question(&prompt.message, &range)).await?;
            if answer.trim().is_empty() {
                return Ok(default);
            }
            match parse_selection(&prompt, &answer) {
                Some(value) => return Ok(value.to_string()),
                None => self.write("  Unknown option, try again.\n").await?,
            }
        }
    }
}
