//! Server command implementation

use anyhow::Result;

use pronos_server::ServerConfig;

pub async fn cmd_serve(host: &str, port: u16, mut allowed_origins: Vec<String>) -> Result<()> {
    // Origins can also come from the environment (comma-separated)
    let env_origins = std::env::var("PRONOS_ALLOWED_ORIGINS").unwrap_or_default();
    allowed_origins.extend(
        env_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    );

    println!("🚀 Starting Pronos forecast server...");
    println!("   Listening: http://{}:{}", host, port);
    if allowed_origins.is_empty() {
        println!("   CORS: any origin");
    } else {
        println!("   CORS: {}", allowed_origins.join(", "));
    }

    let config = ServerConfig { allowed_origins };
    pronos_server::serve(host, port, config).await
}
