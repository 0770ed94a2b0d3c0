use std::collections::BTreeMap;
use std::io::IsTerminal;

use llm_setup::config::{save_config, LoadedConfig};
use llm_setup::{
    ApplyAuthChoiceParams, AuthChoice, AuthChoiceDispatcher, ProviderDescriptor, Prompter,
    ScriptedAnswer, ScriptedPrompter, SelectOption, SelectPrompt, TerminalPrompter,
    WizardConfig,
};

use crate::args::ConfigureArgs;

/// Prompts only when asked to and stdin is a terminal.
pub fn is_interactive(opts: &ConfigureArgs) -> bool {
    opts.is_interactive() && std::io::stdin().is_terminal()
}

pub async fn configure(
    opts: &ConfigureArgs,
    loaded: LoadedConfig,
    dispatcher: &AuthChoiceDispatcher,
) -> anyhow::Result<()> {
    if is_interactive(opts) {
        let prompter = TerminalPrompter::stdio();
        prompter.intro("llm-setup").await?;
        let summary = run_configure(opts, &loaded, dispatcher, &prompter).await?;
        prompter.outro(&summary).await?;
    } else {
        let prompter = scripted_prompter(opts);
        let summary = run_configure(opts, &loaded, dispatcher, &prompter).await?;
        println!("{summary}");
    }
    Ok(())
}

/// Applies the chosen step and saves on change; returns the closing summary.
async fn run_configure(
    opts: &ConfigureArgs,
    loaded: &LoadedConfig,
    dispatcher: &AuthChoiceDispatcher,
    prompter: &dyn Prompter,
) -> anyhow::Result<String> {
    let choice = match opts.auth_choice.as_deref() {
        Some(tag) => AuthChoice::from(tag.trim()),
        None => select_choice(prompter, dispatcher).await?,
    };
    log::info!("running setup for auth choice {choice}");

    let result = dispatcher
        .apply(ApplyAuthChoiceParams {
            auth_choice: &choice,
            config: &loaded.config,
            prompter,
        })
        .await?;

    let summary = match result {
        None => format!("No setup step for auth choice '{choice}'. Configuration unchanged."),
        Some(result) if result.config == loaded.config => "Configuration unchanged.".to_string(),
        Some(result) => {
            save_config(&result.config, &loaded.paths)?;
            log::info!("saved {}", loaded.paths.config_file.display());
            format!("Saved {}", loaded.paths.config_file.display())
        }
    };
    Ok(summary)
}

/// Answers for a run without a terminal: the base URL (if given), then the
/// continue-anyway decision.
fn scripted_prompter(opts: &ConfigureArgs) -> ScriptedPrompter {
    let url = match &opts.base_url {
        Some(url) => ScriptedAnswer::Text(url.clone()),
        None => ScriptedAnswer::Default,
    };
    let proceed = if opts.abort_if_unreachable {
        ScriptedAnswer::Confirm(false)
    } else {
        ScriptedAnswer::Default
    };
    let mut answers = Vec::new();
    if opts.auth_choice.is_none() {
        answers.push(ScriptedAnswer::Default);
    }
    answers.extend([url, proceed]);
    ScriptedPrompter::new(answers)
}

async fn select_choice(
    prompter: &dyn Prompter,
    dispatcher: &AuthChoiceDispatcher,
) -> anyhow::Result<AuthChoice> {
    let mut options: Vec<SelectOption> = dispatcher
        .choices()
        .into_iter()
        .map(|(choice, label)| SelectOption::new(choice.as_str(), label))
        .collect();
    options.push(SelectOption::new(AuthChoice::Skip.as_str(), "Skip for now"));
    let picked = prompter
        .select(SelectPrompt::new("Model provider", options))
        .await?;
    Ok(AuthChoice::from(picked.as_str()))
}

pub fn show(config: &WizardConfig, json: bool) -> anyhow::Result<()> {
    let providers: BTreeMap<&String, &ProviderDescriptor> = config.providers().collect();
    if providers.is_empty() {
        println!("No providers configured");
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&providers)?);
    } else {
        print!("{}", toml::to_string_pretty(&providers)?);
    }
    Ok(())
}

pub fn list_choices(dispatcher: &AuthChoiceDispatcher) {
    for (choice, label) in dispatcher.choices() {
        println!("{choice}\t{label}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_setup::PromptEvent;

    fn configure_args() -> ConfigureArgs {
        ConfigureArgs {
            auth_choice: Some("ollama-api".to_string()),
            non_interactive: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn scripted_prompter_feeds_base_url_and_abort() {
        let mut opts = configure_args();
        opts.base_url = Some("http://box:11434".to_string());
        opts.abort_if_unreachable = true;
        let prompter = scripted_prompter(&opts);
        let url = prompter
            .text(llm_setup::TextPrompt::new("URL").initial_value("default"))
            .await
            .unwrap();
        let proceed = prompter
            .confirm(llm_setup::ConfirmPrompt::new("Continue?", true))
            .await
            .unwrap();
        assert_eq!(url, "http://box:11434");
        assert!(!proceed);
    }

    #[tokio::test]
    async fn select_choice_offers_registered_handlers_and_skip() {
        let dispatcher = AuthChoiceDispatcher::with_defaults();
        let prompter = ScriptedPrompter::new([ScriptedAnswer::Select("skip".to_string())]);
        let choice = select_choice(&prompter, &dispatcher).await.unwrap();
        assert_eq!(choice, AuthChoice::Skip);
        assert_eq!(
            prompter.events(),
            vec![PromptEvent::Select {
                message: "Model provider".to_string()
            }]
        );
    }

    fn load(path: &std::path::Path) -> LoadedConfig {
        llm_setup::config::load_config(Some(path.to_path_buf())).unwrap()
    }

    #[tokio::test]
    async fn configure_saves_new_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut opts = configure_args();
        // nothing listens on port 9 of the loopback; the scripted default continues anyway
        opts.base_url = Some("http://127.0.0.1:9".to_string());

        configure(&opts, load(&path), &AuthChoiceDispatcher::with_defaults())
            .await
            .unwrap();

        let reloaded = load(&path);
        assert!(reloaded.config_exists);
        assert_eq!(
            reloaded.config.provider("ollama").unwrap().base_url,
            "http://127.0.0.1:9/v1"
        );
    }

    #[tokio::test]
    async fn scripted_run_reports_the_saved_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut opts = configure_args();
        opts.base_url = Some("http://127.0.0.1:9".to_string());
        let prompter = scripted_prompter(&opts);

        let summary = run_configure(
            &opts,
            &load(&path),
            &AuthChoiceDispatcher::with_defaults(),
            &prompter,
        )
        .await
        .unwrap();

        assert_eq!(summary, format!("Saved {}", path.display()));
        // the summary goes to stdout, not through the scripted prompter
        assert!(!prompter.events().iter().any(
            |event| matches!(event, PromptEvent::Note { message, .. } if *message == summary)
        ));
    }

    #[tokio::test]
    async fn configure_abort_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut opts = configure_args();
        opts.base_url = Some("http://127.0.0.1:9".to_string());
        opts.abort_if_unreachable = true;
        let prompter = scripted_prompter(&opts);

        let summary = run_configure(
            &opts,
            &load(&path),
            &AuthChoiceDispatcher::with_defaults(),
            &prompter,
        )
        .await
        .unwrap();

        assert_eq!(summary, "Configuration unchanged.");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn configure_unknown_choice_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut opts = configure_args();
        opts.auth_choice = Some("anthropic-api".to_string());
        let prompter = scripted_prompter(&opts);

        let summary = run_configure(
            &opts,
            &load(&path),
            &AuthChoiceDispatcher::with_defaults(),
            &prompter,
        )
        .await
        .unwrap();

        assert_eq!(
            summary,
            "No setup step for auth choice 'anthropic-api'. Configuration unchanged."
        );
        assert!(prompter.events().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn padded_choice_flag_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut opts = configure_args();
        opts.auth_choice = Some(" ollama-api\n".to_string());
        opts.base_url = Some("http://127.0.0.1:9".to_string());
        let prompter = scripted_prompter(&opts);

        let summary = run_configure(
            &opts,
            &load(&path),
            &AuthChoiceDispatcher::with_defaults(),
            &prompter,
        )
        .await
        .unwrap();

        assert!(summary.starts_with("Saved "));
        assert!(load(&path).config.provider("ollama").is_some());
    }
}
