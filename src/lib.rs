pub mod commands;
pub mod comments;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod sentiment;
pub mod source;
pub mod uploads;
pub mod youtube;
