use clap::Parser;
use undirected_sssp::web::{start_server, ServerConfig};

/// HTTP server answering shortest path queries
#[derive(Debug, Parser)]
#[command(name = "web_server", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3005)]
    port: u16,

    /// Disable permissive CORS headers
    #[arg(long)]
    no_cors: bool,

    /// Maximum number of stored graphs
    #[arg(long, default_value_t = 100)]
    max_graphs: usize,

    /// Maximum vertex count for dense (matrix) graphs
    #[arg(long, default_value_t = 2048)]
    max_dense_vertices: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        enable_cors: !args.no_cors,
        max_graphs: args.max_graphs,
        max_dense_vertices: args.max_dense_vertices,
    };

    println!("🔧 Starting shortest path web server...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}:{}", config.host, config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   🗂️  Max stored graphs: {}", config.max_graphs);
    println!("   🧮 Max dense vertices: {}", config.max_dense_vertices);
    println!();

    start_server(config).await?;

    Ok(())
}
