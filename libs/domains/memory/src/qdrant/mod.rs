mod client;
mod config;

pub use client::QdrantChunkRepository;
pub use config::QdrantConfig;
