pub mod config;
pub mod engine;
pub mod llm_client;
pub mod prompt_builder;
pub mod reply_parser;
