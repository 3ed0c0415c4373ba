//! selkit CLI - build CSS selectors from component parts
//!
//! Usage:
//!   selkit element=div id=main + element=table     Print the selector
//!   selkit --json element=a class=external         Print selector and fragments as JSON
//!
//! Each part is `<kind>=<text>` or a combinator (`>`, `+`, `~`, `descendant`).

mod parts;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use parts::{Part, build};

/// selkit - order-checked CSS selector builder
#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    selkit element=input id=email class=field pseudo-class=focus

    # Attribute text is passed through verbatim
    selkit element=a 'attribute=href$=".png"'

    # Complex selector
    selkit element=div id=main + element=table id=data

    # JSON output with per-compound fragments
    selkit --json element=ul '>' element=li
"#)]
struct Cli {
    /// Components (`<kind>=<text>`) and combinators, in selector order
    #[arg(value_name = "PART", required = true, allow_hyphen_values = true)]
    parts: Vec<String>,

    /// Print the selector and its fragments as JSON
    #[arg(short, long)]
    json: bool,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.no_color {
                eprintln!("error: {err:#}");
            } else {
                eprintln!("{} {err:#}", "error:".red().bold());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let parts = cli
        .parts
        .iter()
        .map(|arg| Part::parse(arg))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let built = build(&parts)?;

    if cli.json {
        println!("{}", selkit_value::encode_pretty(&built)?);
    } else {
        println!("{}", built.selector);
    }
    Ok(())
}
