use crate::pipeline::run;
use crate::symbol::SymbolStore;

use std::io::{self, BufRead, Write};

use tracing::info;

const PROMPT: &str = ">> ";
const QUIT: &str = "quit";
const RESET: &str = ":reset";

/// Line-oriented REPL. Bindings accumulate across lines until `:reset`.
pub fn repl(show_tree: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    session(stdin.lock(), stdout.lock(), show_tree)
}

pub fn session<R, W>(mut input: R, mut output: W, show_tree: bool) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut store = SymbolStore::new();
    let mut buffer = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        if input.read_line(&mut buffer)? == 0 {
            return Ok(());
        }

        match buffer.as_str().trim() {
            QUIT => return Ok(()),
            RESET => {
                store.reset();
                info!("symbol store reset");
                writeln!(output, "Symbol table cleared.")?;
            }
            "" => {}
            line => {
                let report = run(line, &mut store);
                writeln!(output, "{}", report.render(show_tree))?;
            }
        }

        buffer.clear();
    }
}
