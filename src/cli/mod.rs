//! CLI Module - client-side commands against a running server

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::Value;

/// Questions sent on `ask` startup so a fresh install shows real output
/// before the interactive prompt appears.
const EXAMPLE_QUERIES: &[&str] = &[
    "How much did I spend on drinks last month?",
    "Show me all my shopping transactions from Amazon this month",
    "What's my total food spending in last year?",
    "When did I last use my credit card for entertainment?",
    "Show me all transactions above 1000 rupees from last month",
];

fn normalize_host(host: &str) -> String {
    if host.starts_with("http") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

/// Send one question to `/convert` and print the outcome.
async fn send_query(client: &reqwest::Client, base_url: &str, text: &str) {
    let response = client
        .post(format!("{}/convert", base_url))
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await;

    let res = match response {
        Ok(res) => res,
        Err(e) if e.is_connect() => {
            println!("Error: Could not connect to the server. Is it running?");
            return;
        }
        Err(e) => {
            println!("Error sending request: {}", e);
            return;
        }
    };

    let status = res.status();
    let body: Value = match res.json().await {
        Ok(v) => v,
        Err(e) => {
            println!("Error: Invalid response from server: {}", e);
            return;
        }
    };

    if !status.is_success() {
        println!();
        println!("Error Status Code: {}", status.as_u16());
        println!(
            "Error Details: {}",
            body.get("error").and_then(|v| v.as_str()).unwrap_or("Unknown error")
        );
        return;
    }

    println!();
    println!(
        "Input Query: {}",
        body.get("natural_language").and_then(|v| v.as_str()).unwrap_or("")
    );
    println!();
    println!(
        "Generated SQL: {}",
        body.get("sql_query").and_then(|v| v.as_str()).unwrap_or("")
    );
    println!();
    println!("{}", "=".repeat(50));
}

pub async fn run_ask(host: String, question: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = normalize_host(&host);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    // One-shot mode: single question, no banner, no loop.
    if let Some(question) = question {
        send_query(&client, &base_url, &question).await;
        return Ok(());
    }

    println!("Connecting to nl2sql at {}...", base_url);
    println!();
    println!("Running example queries...");
    for query in EXAMPLE_QUERIES {
        send_query(&client, &base_url, query).await;
    }

    let mut rl = DefaultEditor::new()?;
    rl.load_history("history.txt").ok();

    println!();
    println!("Enter your own questions below.");
    println!("Type 'quit', 'exit' or 'q' to leave.");

    loop {
        let readline = rl.readline("nl2sql> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit")
                    || line.eq_ignore_ascii_case("exit")
                    || line.eq_ignore_ascii_case("q")
                {
                    break;
                }
                rl.add_history_entry(line)?;
                send_query(&client, &base_url, line).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history("history.txt")?;
    Ok(())
}

pub async fn run_status(host: String) -> Result<(), Box<dyn std::error::Error>> {
    let base_url = normalize_host(&host);
    println!("Checking status of {}...", base_url);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .build()?;

    match client.get(format!("{}/health", base_url)).send().await {
        Ok(res) => {
            if res.status().is_success() {
                println!("SUCCESS: Server is UP and responding.");
                println!("Status: {}", res.status());
            } else {
                println!("WARNING: Server responded with error status: {}", res.status());
            }
        }
        Err(e) => {
            println!("ERROR: Could not connect to server: {}", e);
            println!("Is the server running?");
        }
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# nl2sql Configuration
# The Groq credential is never read from this file; set GROQ_API_KEY instead.

[server]
host = "0.0.0.0"
port = 8080

[groq]
base_url = "https://api.groq.com/openai/v1"
model = "llama3-70b-8192"
temperature = 0.1
max_tokens = 500

[logging]
level = "info"
"#;

pub async fn run_init(output: String) -> Result<(), Box<dyn std::error::Error>> {
    println!("Initializing configuration file at {}...", output);
    use std::fs::File;
    use std::io::Write;
    let mut file = File::create(&output)?;
    file.write_all(DEFAULT_CONFIG.as_bytes())?;
    println!("Configuration file created successfully.");
    Ok(())
}
