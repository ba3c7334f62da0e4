use mini_gc::config::Config;
use mini_gc::repl::repl;
use mini_gc::{run, SymbolStore};

use std::error::Error;
use std::fs;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match &config.source {
        Some(path) => {
            info!(path = %path.display(), "running source file");
            let source = fs::read_to_string(path)?;
            let mut store = SymbolStore::new();
            let report = run(&source, &mut store);
            println!("{}", report.render(config.show_tree));
        }
        None => {
            println!("Mini compiler with a reference counting GC simulator.");
            println!("Enter statements like `x = 5 + 3;`, `:reset` or `quit`.");

            repl(config.show_tree)?;
        }
    }

    Ok(())
}
