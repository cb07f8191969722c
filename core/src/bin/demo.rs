//! Demonstration entry point: runs sample calls against a locally running
//! server and prints each outcome. Not a stable interface; always exits 0.
//!
//! Start the backend first (`cargo run -p mock-server`), optionally point
//! `POLLY_BASE_URL` somewhere else, then `cargo run -p polly-core`.

use polly_core::{Outcome, Page, PollyClient};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("POLLY_BASE_URL").unwrap_or_else(|_| polly_core::DEFAULT_BASE_URL.to_string());
    let client = PollyClient::new(&base_url);

    println!("=== registering a user ===");
    match client.register_user("test_user_123", "secure_password456") {
        Outcome::Success { data, status } => {
            println!("registration succeeded (HTTP {status})");
            println!("user data: {data}");
        }
        Outcome::Failure { error, status } => {
            println!("registration failed: {error}");
            if let Some(status) = status {
                println!("status code: {status}");
            }
        }
    }

    println!("\n=== fetching polls (default page) ===");
    print_polls(&client, Page::default());

    println!("\n=== fetching polls (skip=5, limit=3) ===");
    print_polls(&client, Page::new(5, 3));
}

fn print_polls(client: &PollyClient, page: Page) {
    match client.get_polls(page) {
        Outcome::Success { data, status } => {
            let p = data.pagination;
            println!(
                "retrieved {} polls (HTTP {status}, skip={}, limit={})",
                p.returned_count, p.skip, p.limit
            );
            for poll in &data.polls {
                println!(
                    "  - [{}] {} (by {}, at {})",
                    poll["id"], poll["question"], poll["created_by"], poll["created_at"]
                );
                if let Some(options) = poll["options"].as_array() {
                    for option in options {
                        println!("      * {} (votes: {})", option["text"], option["vote_count"]);
                    }
                }
            }
        }
        Outcome::Failure { error, status } => {
            println!("poll fetch failed: {error}");
            if let Some(status) = status {
                println!("status code: {status}");
            }
        }
    }
}
