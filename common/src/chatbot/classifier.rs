use regex::{Regex, RegexBuilder};

use super::category::Category;
use super::error::ChatbotError;

struct Rule {
    category: Category,
    patterns: Vec<Regex>,
}

/// Ordered pattern list. The first category with any matching pattern wins.
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// `extra_about` adds literal keywords (e.g. the bot's own name) that
    /// route to [`Category::About`].
    pub fn new(extra_about: &[&str]) -> Result<Self, ChatbotError> {
        let mut rules = Vec::with_capacity(Category::PRECEDENCE.len());
        for category in Category::PRECEDENCE {
            let mut patterns = category
                .patterns()
                .iter()
                .map(|pattern| compile(pattern))
                .collect::<Result<Vec<_>, _>>()?;

            if category == Category::About {
                for keyword in extra_about.iter().filter(|k| !k.trim().is_empty()) {
                    patterns.push(compile(&keyword_pattern(keyword.trim()))?);
                }
            }

            rules.push(Rule { category, patterns });
        }
        Ok(Self { rules })
    }

    pub fn classify(&self, input: &str) -> Category {
        let input = preprocess(input);
        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|re| re.is_match(&input)))
            .map_or(Category::Unknown, |rule| rule.category)
    }
}

pub fn preprocess(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Matches `keyword` as a standalone word. `\b` only holds next to a word
/// character, so an edge such as the `+` in `C++` is bounded by a non-word
/// character or the end of input instead.
fn keyword_pattern(keyword: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = match keyword.chars().next() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let end = match keyword.chars().next_back() {
        Some(c) if is_word(c) => r"\b",
        _ => r"(?:\W|$)",
    };
    format!("{}{}{}", start, regex::escape(keyword), end)
}

fn compile(pattern: &str) -> Result<Regex, ChatbotError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ChatbotError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&["Bolt", "Mini Games"]).unwrap()
    }

    #[test]
    fn test_each_category_matches() {
        let c = classifier();
        assert_eq!(c.classify("Goodbye!"), Category::Goodbye);
        assert_eq!(c.classify("hello there"), Category::Greeting);
        assert_eq!(c.classify("Good morning"), Category::Greeting);
        assert_eq!(c.classify("how are you?"), Category::HowAreYou);
        assert_eq!(c.classify("is it sunny outside"), Category::Weather);
        assert_eq!(c.classify("what time is it"), Category::Time);
        assert_eq!(c.classify("who made you"), Category::About);
        assert_eq!(c.classify("what can you do"), Category::Help);
        assert_eq!(c.classify("you are awesome"), Category::Compliment);
        assert_eq!(c.classify("qwerty"), Category::Unknown);
    }

    #[test]
    fn test_precedence_first_match_wins() {
        let c = classifier();
        assert_eq!(c.classify("hello, bye"), Category::Goodbye);
        assert_eq!(c.classify("hey, what time is it?"), Category::Greeting);
        assert_eq!(c.classify("nice weather today"), Category::Weather);
        assert_eq!(c.classify("help, what time is it"), Category::Time);
    }

    #[test]
    fn test_input_is_normalised() {
        let c = classifier();
        assert_eq!(c.classify("   HELLO   "), Category::Greeting);
        assert_eq!(preprocess("  MiXeD Case \n"), "mixed case");
    }

    #[test]
    fn test_persona_keywords_route_to_about() {
        let c = classifier();
        assert_eq!(c.classify("tell me about mini games"), Category::About);
        assert_eq!(c.classify("is bolt your name"), Category::About);
    }

    #[test]
    fn test_punctuated_persona_keywords_route_to_about() {
        let c = Classifier::new(&["C++", "Yahoo!", ".NET"]).unwrap();
        assert_eq!(c.classify("do you know c++"), Category::About);
        assert_eq!(c.classify("is this Yahoo!"), Category::About);
        assert_eq!(c.classify("yahoo! is it you"), Category::About);
        assert_eq!(c.classify("ever used .net?"), Category::About);
        assert_eq!(c.classify("c++x"), Category::Unknown);
        assert_eq!(c.classify("x.net"), Category::Unknown);
    }

    #[test]
    fn test_keyword_pattern_edges() {
        assert_eq!(keyword_pattern("Bolt"), r"\bBolt\b");
        assert_eq!(keyword_pattern("C++"), r"\bC\+\+(?:\W|$)");
    }

    #[test]
    fn test_original_phrasings() {
        let c = classifier();
        assert_eq!(c.classify("what's up"), Category::Greeting);
        assert_eq!(c.classify("how's it going"), Category::HowAreYou);
        assert_eq!(c.classify("who created you"), Category::About);
        assert_eq!(c.classify("whats up"), Category::Unknown);
    }

    #[test]
    fn test_word_boundaries() {
        let c = classifier();
        assert_eq!(c.classify("this"), Category::Unknown);
        assert_eq!(c.classify("helpful"), Category::Unknown);
    }
}
