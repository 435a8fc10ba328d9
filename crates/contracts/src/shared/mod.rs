pub mod anchor;
pub mod content;
pub mod language;
pub mod messages;
