pub mod catalog;
pub mod consts;
pub mod engine;
pub mod matcher;
pub mod prompts;
pub mod web;
