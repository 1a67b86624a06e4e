pub mod colors;
pub mod messages;
pub mod prompt;
