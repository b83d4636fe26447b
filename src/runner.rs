use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::{self, ProcessorConfig};
use crate::processor::Processor;

#[derive(Serialize)]
struct StatusOutput<'a> {
    status: &'a str,
    data_dir: &'a str,
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => ProcessorConfig::load(path)?,
        None => ProcessorConfig::default(),
    };
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref(), &file_config);
    let processor = Processor::new(data_dir.as_deref())?;
    tracing::info!(path = %processor.data_dir(), "processor ready");

    match cli.command.unwrap_or(Command::Process) {
        Command::Process => {
            let report = processor.produce_report();
            tracing::info!(timestamp = %report.timestamp, "report produced");
            if cli.json {
                let rendered =
                    serde_json::to_string_pretty(&report).context("serializing report")?;
                writeln!(out, "{rendered}")?;
            } else {
                writeln!(out, "{}", report.summary_line())?;
            }
        }
        Command::Status => {
            if cli.json {
                let rendered = serde_json::to_string(&StatusOutput {
                    status: processor.status(),
                    data_dir: processor.data_dir().as_str(),
                })
                .context("serializing status")?;
                writeln!(out, "{rendered}")?;
            } else {
                writeln!(out, "{}", processor.status())?;
            }
        }
    }

    Ok(())
}
