use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use shoprec_client::{
    error::ClientError,
    session::{entry_url, resolve_session, session_view_url},
    Config, HttpBackend, Page, RecommendationBackend,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let http = HttpBackend::new(config.backend_url);
    let base_url = http.base_url().to_string();
    let backend: Arc<dyn RecommendationBackend> = Arc::new(http);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("Customer ID (or /quit):");
        let Some(input) = lines.next_line().await? else {
            break;
        };
        let input = input.trim().to_string();
        if input == "/quit" {
            break;
        }

        match resolve_session(backend.as_ref(), &input).await {
            Ok(session) => {
                let view_url = session_view_url(&base_url, &session.customer_id)?;
                println!("-> {}", view_url);

                let mut page = Page::new(Arc::clone(&backend), session);
                page.load().await;
                print_panels(&page);

                if !run_session(&mut page, &mut lines).await? {
                    break;
                }
                println!("-> {}", entry_url(&base_url)?);
            }
            Err(ClientError::LoginRejected(_)) | Err(ClientError::InvalidInput(_)) => {
                println!("Invalid Customer ID. Please try again.");
            }
            Err(e) => {
                tracing::error!(error = %e, "Login failed");
                println!("An error occurred. Please make sure the server is running and try again.");
            }
        }
    }

    Ok(())
}

/// Command loop for one session. Returns false when the user quits outright
/// rather than logging out.
async fn run_session(page: &mut Page, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<bool> {
    println!("Type to search; /pick <n>, /click <product_id>, /refresh, /logout, /quit");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line.split_once(' ') {
            _ if line == "/quit" => return Ok(false),
            _ if line == "/logout" => return Ok(true),
            _ if line == "/refresh" => {
                page.refresh_recommendations().await;
                print_panels(page);
            }
            Some(("/pick", index)) => {
                let picked = index
                    .trim()
                    .parse::<usize>()
                    .is_ok_and(|i| page.select_search_result(i));
                if picked {
                    print_panels(page);
                } else {
                    println!("No search result at that position.");
                }
            }
            Some(("/click", product_id)) => {
                page.click_card(product_id.trim()).await;
                print_panels(page);
            }
            _ => {
                page.search_input(line).await;
                println!("--- Search results ---");
                println!("{}", page.search.content());
            }
        }
    }

    Ok(false)
}

fn print_panels(page: &Page) {
    println!("=== Preferences ({}) ===", page.customer_id());
    println!("{}", page.preferences.content());
    println!("=== Recommendations ===");
    if let Some(at) = page.recommendations.fetched_at() {
        println!("(fetched {})", at.format("%H:%M:%S"));
    }
    println!("{}", page.recommendations.content());
}
