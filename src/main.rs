use gh_fetch::http_handler::http_request::rate_limit_get::RateLimitRequest;
use gh_fetch::{ClientConfig, HTTPClient, UiContext, error, info, log, warn};
use std::{env, sync::Arc};

const DEFAULT_PATH: &str = "/rate_limit";
const PAGE_TITLE: &str = "gh-fetch";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = ClientConfig::from_env();
    info!("Using API at {} (token: {})", config.base_url(), config.token().is_some());
    let ui = Arc::new(UiContext::console(&config, PAGE_TITLE));
    let client = match HTTPClient::new(&config, &ui) {
        Ok(c) => c,
        Err(e) => {
            error!("Could not build HTTP client: {e:?}");
            std::process::exit(2);
        }
    };

    let path = env::args().nth(1).unwrap_or_else(|| String::from(DEFAULT_PATH));
    if path == DEFAULT_PATH {
        report_rate_limit(&client).await;
        return;
    }
    match client.get(&path, None).await {
        Ok(resp) => {
            info!("GET {path} -> {}", resp.status_code());
            println!("{}", resp.text());
        }
        Err(e) => {
            error!("GET {path} failed: {e}");
            std::process::exit(1);
        }
    }
}

async fn report_rate_limit(client: &HTTPClient) {
    let envelope = match client.send_typed(&RateLimitRequest::default()).await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Rate limit query failed: {e}");
            std::process::exit(1);
        }
    };
    match envelope.into_result() {
        Ok(Some(limits)) => {
            let core = limits.core();
            log!("Core quota: {}/{} used", core.used(), core.limit());
            if let Some(reset) = core.reset_at() {
                log!("Resets at {}", reset.format("%H:%M:%S"));
            }
            if core.is_exhausted() {
                warn!("Core quota exhausted");
            }
        }
        Ok(None) => warn!("Empty rate limit response"),
        Err(e) => {
            error!("Rate limit query rejected: {e:?}");
            std::process::exit(1);
        }
    }
}
