pub mod commands;
pub mod error;
pub mod history;
pub mod process;
pub mod shell;
pub mod tokenizer;
