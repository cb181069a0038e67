use std::fmt;

/// Reply categories, listed in matching precedence. `Unknown` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Goodbye,
    Greeting,
    HowAreYou,
    Weather,
    Time,
    About,
    Help,
    Compliment,
    Unknown,
}

impl Category {
    pub const PRECEDENCE: [Category; 8] = [
        Category::Goodbye,
        Category::Greeting,
        Category::HowAreYou,
        Category::Weather,
        Category::Time,
        Category::About,
        Category::Help,
        Category::Compliment,
    ];

    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Category::Goodbye => &[
                r"\b(bye|goodbye|see\s+you|farewell|exit|quit)\b",
                r"talk\s+to\s+you\s+later",
                r"catch\s+you\s+later",
            ],
            Category::Greeting => &[
                r"\b(hi|hello|hey|greetings|good\s+(morning|afternoon|evening))\b",
                r"\bhowdy\b",
                r"what's\s+up",
                r"\bsup\b",
            ],
            Category::HowAreYou => &[
                r"how\s+are\s+you",
                r"how\s+are\s+things",
                r"how's\s+it\s+going",
            ],
            Category::Weather => &[
                r"\bweather\b",
                r"(sunny|rainy|cloudy|hot|cold|temperature)",
            ],
            Category::Time => &[
                r"\b(time|clock)\b",
                r"what\s+time\s+is\s+it",
            ],
            Category::About => &[
                r"(who\s+are\s+you|what\s+are\s+you|about\s+you)",
                r"tell\s+me\s+about\s+yourself",
                r"who\s+created\s+you",
                r"who\s+made\s+you",
            ],
            Category::Help => &[
                r"\bhelp\b",
                r"what\s+can\s+you\s+do",
                r"\bcommands\b",
                r"\boptions\b",
            ],
            Category::Compliment => &[
                r"\b(good|great|awesome|amazing|wonderful|fantastic|cool|nice|smart|clever)\b",
                r"i\s+like\s+you",
                r"you're\s+(good|great|awesome|amazing|wonderful|fantastic|cool|nice|smart|clever)",
            ],
            Category::Unknown => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Goodbye => "goodbye",
            Category::Greeting => "greeting",
            Category::HowAreYou => "how_are_you",
            Category::Weather => "weather",
            Category::Time => "time",
            Category::About => "about",
            Category::Help => "help",
            Category::Compliment => "compliment",
            Category::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
