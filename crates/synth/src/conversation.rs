use pantry_shared::{ChatMessage, ChatRole, Synthesis};
use rand::Rng;

use crate::synthesize;

/// Running exchange between the user and the recipe generator.
#[derive(Debug, Default, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn generate<S: AsRef<str>, R: Rng>(
        &mut self,
        rng: &mut R,
        ingredients: &[S],
        preference: Option<&str>,
    ) -> Synthesis {
        let preference = preference.map(str::trim).filter(|p| !p.is_empty());

        if let Some(preference) = preference {
            self.push(ChatRole::User, preference);
        }

        let synthesis = synthesize(rng, ingredients, preference);
        self.push(ChatRole::Assistant, &synthesis.acknowledgment);

        synthesis
    }

    fn push(&mut self, role: ChatRole, message: &str) {
        self.messages.push(ChatMessage {
            role,
            message: message.to_owned(),
        });
    }
}
