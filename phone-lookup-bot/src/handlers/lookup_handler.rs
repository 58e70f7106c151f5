//! Terminal handler: treats message text as a phone number and replies with the lookup result.

use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};
use twilio_lookup::LookupService;

use crate::i18n::Locale;
use crate::pipeline::resolve;
use crate::presenter::render_outcome;

/// Every text message reaching this handler gets exactly one reply.
pub struct LookupHandler {
    service: Arc<dyn LookupService>,
    locale: Locale,
}

impl LookupHandler {
    pub fn new(service: Arc<dyn LookupService>, locale: Locale) -> Self {
        Self { service, locale }
    }
}

#[async_trait]
impl Handler for LookupHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Ignore);
        }

        let outcome = resolve(self.service.as_ref(), &message.content).await;
        info!(outcome = outcome.kind(), "Lookup finished");
        Ok(HandlerResponse::Reply(render_outcome(&outcome, self.locale)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bot_core::{Chat, User};
    use twilio_lookup::{CanonicalNumber, LookupError, LookupResult};

    struct NotFoundService;

    #[async_trait]
    impl LookupService for NotFoundService {
        async fn lookup(&self, _number: &CanonicalNumber) -> std::result::Result<LookupResult, LookupError> {
            Ok(LookupResult::NotFound)
        }
    }

    fn message(content: &str) -> Message {
        Message::text(
            "1",
            User::new(1),
            Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            content,
        )
    }

    #[tokio::test]
    async fn test_replies_for_number_and_garbage() {
        let h = LookupHandler::new(Arc::new(NotFoundService), Locale::English);

        let reply = h.handle(&message("+1 (415) 555-2671")).await.unwrap();
        assert_eq!(
            reply,
            HandlerResponse::Reply(
                "❌ Number not found in the lookup service (+14155552671)".to_string()
            )
        );

        let reply = h.handle(&message("hello")).await.unwrap();
        assert_eq!(
            reply,
            HandlerResponse::Reply(Locale::English.messages().invalid_number.to_string())
        );
    }

    #[tokio::test]
    async fn test_non_text_is_ignored() {
        let h = LookupHandler::new(Arc::new(NotFoundService), Locale::Arabic);
        let mut photo = message("");
        photo.message_type = "other".to_string();
        assert_eq!(h.handle(&photo).await.unwrap(), HandlerResponse::Ignore);
    }
}
