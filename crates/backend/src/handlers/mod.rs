pub mod content;
pub mod shell;
