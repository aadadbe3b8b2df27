//! CLI command implementations
//!
//! Commands own their tokio runtime so `main` stays synchronous.

use std::path::Path;
use std::time::Duration;

use crate::client::{SearchClient, SearchRequest};
use crate::observability::{Logger, Severity};
use crate::server::{SearchServer, ServerConfig};
use crate::store::load_dataset;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Dispatch a parsed CLI invocation.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve {
            dataset,
            host,
            port,
            token,
        } => serve(&dataset, host, port, token),
        Command::Find {
            addr,
            query,
            limit,
            offset,
            order_field,
            order_by,
            token,
            timeout_ms,
        } => find(
            &addr,
            SearchRequest {
                limit,
                offset,
                query,
                order_field,
                order_by,
            },
            token,
            Duration::from_millis(timeout_ms),
        ),
    }
}

/// Load the dataset and serve `/search` until stopped.
pub fn serve(dataset: &Path, host: String, port: u16, token: Option<String>) -> CliResult<()> {
    let store = load_dataset(dataset)?;
    Logger::log(
        Severity::Info,
        "dataset_loaded",
        &[
            ("path", &dataset.display().to_string()),
            ("records", &store.len().to_string()),
        ],
    );

    let config = ServerConfig {
        host,
        port,
        access_token: token,
    };
    let server = SearchServer::new(store, config);

    runtime()?.block_on(server.start())?;
    Ok(())
}

/// Run one search against a remote server and print the page as JSON.
pub fn find(
    addr: &str,
    request: SearchRequest,
    token: Option<String>,
    timeout: Duration,
) -> CliResult<()> {
    let client = SearchClient::with_timeout(addr, token, timeout);
    let page = runtime()?.block_on(client.find_users(&request))?;

    println!("{}", serde_json::to_string_pretty(&page.users)?);
    if page.next_page {
        Logger::log(
            Severity::Info,
            "next_page_available",
            &[("offset", &(request.offset + page.users.len() as i64).to_string())],
        );
    }
    Ok(())
}

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}
