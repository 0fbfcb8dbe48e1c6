//! leap_table_tool: converts the leap-second catalog between its binary,
//! text, JSON, and debug renderings.
//!
//! Exit codes: 0 on success, 1 on I/O or parse failures, 2 on usage
//! errors (clap's own convention).

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, InputFormat, OutputFormat};
use prost::Message;
use smeartime_table::{codec, LeapTable, LeapTableProto};
use std::fs;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let name = cli.filename.display();
    let proto = match cli.input {
        InputFormat::Proto => {
            let bytes =
                fs::read(&cli.filename).with_context(|| format!("couldn't open {name}"))?;
            LeapTableProto::decode(bytes.as_slice())
                .with_context(|| format!("couldn't parse proto from {name}"))?
        }
        InputFormat::Textproto => {
            let text = fs::read_to_string(&cli.filename)
                .with_context(|| format!("couldn't open {name}"))?;
            codec::from_text(&text)
                .with_context(|| format!("couldn't parse text proto from {name}"))?
        }
    };

    match cli.output {
        OutputFormat::Proto => std::io::stdout().write_all(&proto.encode_to_vec())?,
        OutputFormat::Textproto => print!("{}", codec::to_text(&proto)),
        OutputFormat::Json => println!("{}", codec::to_json(&proto)?),
        OutputFormat::Debug => {
            let table = LeapTable::from_proto(&proto)
                .context("failed to construct leap table from catalog")?;
            print!("{}", table.debug_string());
        }
    }
    Ok(())
}
