#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    nl2sql::run().await
}
