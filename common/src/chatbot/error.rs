use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatbotError {
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
