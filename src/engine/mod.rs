pub mod api;
pub mod consumer;
mod pipeline;
pub mod processing_engine;
pub mod producer; // ProcessingEngine内部でのみ使用

pub use api::{
    create_default_processing_engine, create_quiet_processing_engine, process,
    process_directory_with_engine,
};
pub use processing_engine::ProcessingEngine;
