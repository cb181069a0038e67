use chrono::Local;

use crate::games::SessionRng;
use super::category::Category;
use super::classifier::Classifier;
use super::error::ChatbotError;
use super::responses::{Persona, canned_replies, time_replies};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub category: Category,
    pub text: String,
}

impl Reply {
    pub fn ends_conversation(&self) -> bool {
        self.category == Category::Goodbye
    }
}

pub struct Chatbot {
    persona: Persona,
    classifier: Classifier,
    rng: SessionRng,
}

impl Chatbot {
    pub fn new(persona: Persona, rng: SessionRng) -> Result<Self, ChatbotError> {
        let classifier = Classifier::new(&[persona.name.as_str(), persona.organization.as_str()])?;
        Ok(Self {
            persona,
            classifier,
            rng,
        })
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Opening line shown before the user types anything.
    pub fn welcome(&mut self) -> String {
        self.pick(Category::Greeting)
    }

    pub fn respond(&mut self, input: &str) -> Reply {
        let category = self.classifier.classify(input);
        Reply {
            category,
            text: self.pick(category),
        }
    }

    fn pick(&mut self, category: Category) -> String {
        let replies = match category {
            Category::Time => time_replies(Local::now()),
            _ => canned_replies(category, &self.persona),
        };
        self.rng.choose(&replies).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chatbot(seed: u64) -> Chatbot {
        Chatbot::new(Persona::default(), SessionRng::new(seed)).unwrap()
    }

    #[test]
    fn test_reply_comes_from_matching_table() {
        let mut bot = chatbot(3);
        let reply = bot.respond("hi!");
        assert_eq!(reply.category, Category::Greeting);
        assert!(canned_replies(Category::Greeting, bot.persona()).contains(&reply.text));
    }

    #[test]
    fn test_goodbye_ends_conversation() {
        let mut bot = chatbot(3);
        assert!(bot.respond("ok bye").ends_conversation());
        assert!(!bot.respond("how are you").ends_conversation());
    }

    #[test]
    fn test_unknown_input_gets_fallback() {
        let mut bot = chatbot(11);
        let reply = bot.respond("zxcv");
        assert_eq!(reply.category, Category::Unknown);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_time_reply_is_rendered() {
        let mut bot = chatbot(5);
        let reply = bot.respond("what time is it");
        assert_eq!(reply.category, Category::Time);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_same_seed_same_replies() {
        let mut first = chatbot(21);
        let mut second = chatbot(21);
        assert_eq!(first.welcome(), second.welcome());
        for input in ["hello", "tell me about yourself", "you're great", "???"] {
            assert_eq!(first.respond(input), second.respond(input));
        }
    }
}
