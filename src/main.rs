use clap::Parser;
use getcookin::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(err) => {
            eprintln!("getcookin: {}", err);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            std::process::exit(1);
        }
    }
}
