use anyhow::Context as _;
use decision_client::{
    DecisionService, HttpDecisionService, RequestCoordinator, ResponseView, ServiceConfig,
    Settlement, project,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Instrument, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize structured tracing based on environment variables
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "decision_console=info,decision_client=info".into());

    match log_format.as_str() {
        "pretty" => {
            // Human-readable logging for development
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        _ => {
            // Structured JSON logging for production
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // The service endpoint is required up front; the client itself never
    // reads the environment.
    let base_url = match std::env::var("DECISION_SERVICE_URL") {
        Ok(value) => value,
        Err(_) => {
            error!("DECISION_SERVICE_URL not set");
            std::process::exit(1);
        }
    };

    let service = HttpDecisionService::new(ServiceConfig::new(&base_url));
    let coordinator = RequestCoordinator::new(service);

    info!(base_url = %base_url, "decision console ready");
    println!("Commands:");
    println!("  ingest <comma-separated document URLs>");
    println!("  ask <question>");
    println!("  quit");

    run_loop(&coordinator).await
}

async fn run_loop<S: DecisionService>(coordinator: &RequestCoordinator<S>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(line) = lines
            .next_line()
            .await
            .context("failed to read from stdin")?
        else {
            return Ok(());
        };

        let (command, rest) = split_command(&line);

        match command {
            "ingest" => {
                println!("Ingesting...");
                let span =
                    tracing::info_span!("ingest", correlation_id = %Uuid::new_v4().to_string());
                let settlement = coordinator.submit_ingest(rest).instrument(span).await;
                if settlement == Settlement::Acknowledged {
                    println!("Documents ingested successfully!");
                }
                print_response(&project(&coordinator.state().await));
            }
            "ask" => {
                println!("Thinking...");
                let span =
                    tracing::info_span!("query", correlation_id = %Uuid::new_v4().to_string());
                coordinator.submit_query(rest).instrument(span).await;
                print_response(&project(&coordinator.state().await));
            }
            "quit" | "exit" => return Ok(()),
            "" => {}
            other => println!("Unknown command: {}", other),
        }
    }
}

/// Split an input line into the command word and its argument. Any
/// whitespace separates them, not just a single space.
fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim_start();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed.trim_end(), ""),
    }
}

fn print_response(view: &ResponseView) {
    match view {
        ResponseView::Nothing => {}
        ResponseView::Loading => println!("Loading..."),
        ResponseView::Error(message) => println!("{}", message),
        ResponseView::Decision(decision) => {
            println!("Decision: {}", decision.decision);
            println!("Amount: {}", decision.amount);
            println!("Justification: {}", decision.justification);
            println!("Clauses Used:");
            for clause in &decision.clauses {
                println!("  - {}", clause);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::split_command;

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(split_command("ingest a.pdf, b.pdf"), ("ingest", "a.pdf, b.pdf"));
        assert_eq!(split_command("ingest\ta.pdf"), ("ingest", "a.pdf"));
        assert_eq!(split_command("  ask \t how much?"), ("ask", "how much?"));
    }

    #[test]
    fn bare_command_has_empty_argument() {
        assert_eq!(split_command("quit"), ("quit", ""));
        assert_eq!(split_command("quit  "), ("quit", ""));
        assert_eq!(split_command(""), ("", ""));
    }
}
