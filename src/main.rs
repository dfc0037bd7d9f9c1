//! draftmark CLI - convert Markdown drafts into editor markup

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use draftmark::{to_html_with_options, Options};

#[derive(Parser, Debug)]
#[command(name = "draftmark", version, about = "Convert Markdown drafts into editor markup")]
struct Cli {
    /// Markdown file to read; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Write markup to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Escape `<`, `>`, `&` and `"` in the source text
    #[arg(long, env = "DRAFTMARK_ESCAPE_HTML")]
    escape_html: bool,
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = Options {
        escape_html: cli.escape_html,
    };

    let input = read_input(cli.input.as_ref())?;
    log::debug!("read {} bytes of Markdown", input.len());

    let html = to_html_with_options(&input, &options);

    match &cli.output {
        Some(path) => {
            fs::write(path, html.as_bytes())?;
            log::debug!("wrote markup to {}", path.display());
        }
        None => io::stdout().write_all(html.as_bytes())?,
    }

    Ok(())
}
