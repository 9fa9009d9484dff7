//! Simple Search Example
//!
//! Indexes two entries, searches them and walks the index page by page.
//!
//! Run with:
//! DEVBOOK_EXTENSION_ID=... DEVBOOK_API_KEY=... cargo run --example simple_search

use devbook_rs::{Client, EntriesOptions, Entry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Simple Devbook Search Example\n");

    let extension_id = std::env::var("DEVBOOK_EXTENSION_ID")?;
    let api_key = std::env::var("DEVBOOK_API_KEY")?;
    let client = Client::new(extension_id, api_key)?;

    let index_name = "example-docs";

    client
        .index(
            index_name,
            &[
                Entry::new("Ownership", "Each value in Rust has a single owner."),
                Entry::new("Borrowing", "References let you use a value without owning it."),
            ],
        )
        .await?;
    println!("📝 Indexed 2 entries into '{}'", index_name);

    let results = client.search(index_name, "owner").await?;
    println!("🔍 Search results for 'owner':");
    for (i, entry) in results.iter().enumerate() {
        println!("   {}. {}", i + 1, entry.title);
    }

    let mut options = EntriesOptions {
        page_size: 1,
        page_id: None,
    };
    let mut page_number = 1;
    loop {
        let page = client.entries_with_options(index_name, options.clone()).await?;
        println!("\n📄 Page {}: {} entries", page_number, page.entries.len());
        match page.page_id {
            Some(next) => options.page_id = Some(next),
            None => break,
        }
        page_number += 1;
    }

    let info = client.info().await?;
    println!("\nℹ️  Extension {} has indexes: {:?}", info.extension_id, info.indexes);

    client.delete(index_name).await?;
    println!("🗑️  Deleted '{}'", index_name);

    Ok(())
}
