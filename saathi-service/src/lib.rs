pub mod config;
pub mod dtos;
pub mod handlers;
pub mod ingest;
pub mod models;
pub mod prompts;
pub mod services;
pub mod startup;
