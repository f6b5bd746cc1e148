//! Demonstration binary: inserts one document, then prints its id and the full export.

use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use leafdb::{memory::InMemoryStore, prelude::*};

fn setup_logging() {
    // stdout carries the program output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let mut store = DocumentStore::new(InMemoryStore::builder().build()?);

    let mut data = Fields::new();
    data.insert("key1".to_string(), json!("value1"));
    let doc = store.insert(data);
    info!(id = doc.id, "inserted demo document");

    println!("{}", doc.id);
    println!("{}", store.export_to_json()?);

    Ok(())
}
