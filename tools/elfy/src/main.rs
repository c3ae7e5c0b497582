//! elfy: display the contents of ELF object files.
//!
//! Pipeline: parse flags → read the file → decode the header → render each
//! selected report section → print.

mod cli;
mod render;
mod report;
mod verbose;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use elfy_elf::{ElfError, ElfFile};

use cli::{Cli, Report};
use render::ReportConfig;
use verbose::{Timer, vprintln};

fn main() -> ExitCode {
    let cli = Cli::parse();
    verbose::init(cli.verbose);

    let reports = cli.reports();
    if reports.is_empty() {
        eprint!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    match run(&cli, &reports) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("elfy: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, reports: &[Report]) -> Result<()> {
    let Some(path) = cli.file.as_deref() else {
        bail!("ELF file missing");
    };

    let elf = ElfFile::open(path).map_err(|e| {
        let what = match e {
            ElfError::Io(_) => "cannot open",
            _ => "cannot parse",
        };
        anyhow::Error::new(e).context(format!("{what} {}", path.display()))
    })?;
    vprintln!("read {} bytes from {}", elf.reader().len(), path.display());
    vprintln!("{:?}, {:?}", elf.class(), elf.encoding());

    let config = ReportConfig { color: cli.color };
    let mut stdout = io::stdout().lock();
    for (i, &report) in reports.iter().enumerate() {
        let text = {
            let _t = Timer::start(report.title());
            report::render(&elf, report, config)?
        };
        if i > 0 {
            writeln!(stdout)?;
        }
        stdout.write_all(text.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
