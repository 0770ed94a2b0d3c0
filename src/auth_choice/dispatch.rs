use std::collections::HashMap;
use std::sync::Arc;

use super::{
    ApplyAuthChoiceParams, ApplyAuthChoiceResult, AuthChoice, AuthChoiceHandler,
    OllamaAuthChoice,
};
use crate::error::PromptError;
use crate::health::HttpProbe;

/// Routes an [`AuthChoice`] to the handler registered for it.
#[derive(Default)]
pub struct AuthChoiceDispatcher {
    handlers: HashMap<AuthChoice, Arc<dyn AuthChoiceHandler>>,
    order: Vec<AuthChoice>,
}

impl AuthChoiceDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher with every built-in handler registered.
    pub fn with_defaults() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(OllamaAuthChoice::new(HttpProbe::default()));
        dispatcher
    }

    /// Registers `handler` under its own choice, replacing any previous handler.
    pub fn register(&mut self, handler: impl AuthChoiceHandler + 'static) {
        self.register_arc(Arc::new(handler));
    }

    pub fn register_arc(&mut self, handler: Arc<dyn AuthChoiceHandler>) {
        let choice = handler.choice();
        if self.handlers.insert(choice.clone(), handler).is_some() {
            log::warn!("replacing handler for auth choice {choice}");
        } else {
            self.order.push(choice);
        }
    }

    /// Registered choices with their labels, in registration order.
    pub fn choices(&self) -> Vec<(AuthChoice, String)> {
        self.order
            .iter()
            .filter_map(|choice| {
                self.handlers
                    .get(choice)
                    .map(|handler| (choice.clone(), handler.label().to_string()))
            })
            .collect()
    }

    pub fn get(&self, choice: &AuthChoice) -> Option<&dyn AuthChoiceHandler> {
        self.handlers.get(choice).map(|h| h.as_ref())
    }

    /// Runs the handler for `params.auth_choice`; `Ok(None)` when none is registered.
    pub async fn apply(
        &self,
        params: ApplyAuthChoiceParams<'_>,
    ) -> Result<Option<ApplyAuthChoiceResult>, PromptError> {
        let Some(handler) = self.handlers.get(params.auth_choice) else {
            log::debug!("no setup step for auth choice {}", params.auth_choice);
            return Ok(None);
        };
        handler.apply(params).await
    }
}
