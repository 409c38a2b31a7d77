use clap::Parser;
use wiki_phrase::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cli::lookup::run(cli).await
}
