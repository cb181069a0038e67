mod bot;
mod category;
mod classifier;
mod error;
mod responses;

pub use bot::{Chatbot, Reply};
pub use category::Category;
pub use classifier::{Classifier, preprocess};
pub use error::ChatbotError;
pub use responses::{Persona, canned_replies, time_replies};
