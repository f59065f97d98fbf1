//! ec2-hostname CLI.

use clap::Parser;
use ec2_hostname::cli::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = ec2_hostname::cli::run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
