use chrono::{DateTime, Local};

use super::category::Category;

/// Who the bot says it is in greetings and "about" replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub creator: String,
    pub organization: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Bolt".to_string(),
            creator: "the Mini Games team".to_string(),
            organization: "Mini Games".to_string(),
        }
    }
}

pub fn canned_replies(category: Category, persona: &Persona) -> Vec<String> {
    let Persona {
        name,
        creator,
        organization,
    } = persona;

    match category {
        Category::Greeting => vec![
            format!("Hello! I'm {name}, a small rule-based assistant. What's on your mind?"),
            "Hi there! Good to see you. Ask me anything, or just say hello.".to_string(),
            format!("Hey! {name} here, ready to chat."),
            format!("Greetings! {creator} put me together to keep you company."),
        ],
        Category::Goodbye => vec![
            "Goodbye! Thanks for stopping by.".to_string(),
            "See you later! Come back any time.".to_string(),
            "Farewell! It was nice talking to you.".to_string(),
            "Bye for now!".to_string(),
        ],
        Category::HowAreYou => vec![
            "I'm doing great, thanks for asking! How about you?".to_string(),
            "All circuits nominal. How is your day going?".to_string(),
            "Pretty good! Every new message keeps me busy.".to_string(),
        ],
        Category::Weather => vec![
            "I can't see outside, so a weather app will serve you better than I can.".to_string(),
            "No live weather data here, but I hope it's pleasant where you are.".to_string(),
            "Weather is beyond my reach. Try asking me the time instead!".to_string(),
        ],
        Category::About => vec![
            format!("I'm {name}, built by {creator} at {organization}. I match your words against a list of patterns."),
            format!("{name} is a rule-based chatbot from {organization}: no learning, just regular expressions."),
            format!("My name is {name}. {creator} wrote me as part of the {organization} demos."),
        ],
        Category::Help => vec![
            "You can greet me, ask how I'm doing, ask for the time, ask about me, or say bye to leave.".to_string(),
            "Try: 'hello', 'what time is it', 'who are you', or 'bye'.".to_string(),
        ],
        Category::Compliment => vec![
            "Thank you, that's kind of you!".to_string(),
            format!("You're too nice. I'll pass that on to {creator}."),
            "Glad you think so!".to_string(),
        ],
        Category::Time => Vec::new(),
        Category::Unknown => vec![
            "I'm not sure I follow. Could you rephrase that?".to_string(),
            "That one is new to me. Type 'help' to see what I understand.".to_string(),
            "Hmm, I don't have a rule for that yet. Ask me something else?".to_string(),
        ],
    }
}

/// Time replies are rendered on demand so they show the moment of asking.
pub fn time_replies(now: DateTime<Local>) -> Vec<String> {
    vec![
        format!(
            "It's {} on {}.",
            now.format("%I:%M %p"),
            now.format("%B %d, %Y")
        ),
        format!("Right now it's {}.", now.format("%H:%M")),
        format!("The clock says {}.", now.format("%I:%M %p")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_every_category_has_replies() {
        let persona = Persona::default();
        for category in Category::PRECEDENCE {
            if category == Category::Time {
                continue;
            }
            assert!(!canned_replies(category, &persona).is_empty(), "{category}");
        }
        assert!(!canned_replies(Category::Unknown, &persona).is_empty());
    }

    #[test]
    fn test_persona_is_filled_in() {
        let persona = Persona {
            name: "Pip".to_string(),
            creator: "Ada".to_string(),
            organization: "Acme".to_string(),
        };
        let about = canned_replies(Category::About, &persona);
        assert!(about.iter().all(|reply| reply.contains("Pip")));
        assert!(about.iter().any(|reply| reply.contains("Acme")));
    }

    #[test]
    fn test_time_replies_use_given_time() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let replies = time_replies(now);
        assert_eq!(replies[0], "It's 02:05 PM on March 09, 2024.");
        assert_eq!(replies[1], "Right now it's 14:05.");
    }
}
