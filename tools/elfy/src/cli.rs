//! Command-line interface definitions for elfy.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Display information about the contents of ELF object files.
///
/// `-h` selects the file header report, so help is only available as
/// `--help`.
#[derive(Parser)]
#[command(name = "elfy", version, disable_help_flag = true)]
pub struct Cli {
    /// Display the ELF file header.
    #[arg(long, short = 'h')]
    pub file_header: bool,

    /// Display the program headers.
    #[arg(long, short = 'p')]
    pub program_headers: bool,

    /// Display the section headers.
    #[arg(long, short = 's')]
    pub section_headers: bool,

    /// Display the dynamic section.
    #[arg(long, short = 'd')]
    pub dynamic: bool,

    /// Display the symbol table.
    #[arg(long)]
    pub symtab: bool,

    /// Display the dynamic symbol table.
    #[arg(long = "dyn-syms")]
    pub dyn_syms: bool,

    /// Equivalent to -h -p -s -d --symtab --dyn-syms.
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Colored output.
    #[arg(long, short = 'c')]
    pub color: bool,

    /// Log parsing steps and timings to stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// ELF file to inspect.
    pub file: Option<PathBuf>,
}

/// One report section, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// `-h`
    FileHeader,
    /// `-p`
    ProgramHeaders,
    /// `-s`
    SectionHeaders,
    /// `-d`
    Dynamic,
    /// `--symtab`
    Symtab,
    /// `--dyn-syms`
    DynSyms,
}

impl Cli {
    /// Selected reports in the fixed output order.
    pub fn reports(&self) -> Vec<Report> {
        [
            (self.file_header, Report::FileHeader),
            (self.program_headers, Report::ProgramHeaders),
            (self.section_headers, Report::SectionHeaders),
            (self.dynamic, Report::Dynamic),
            (self.symtab, Report::Symtab),
            (self.dyn_syms, Report::DynSyms),
        ]
        .into_iter()
        .filter(|&(selected, _)| selected || self.all)
        .map(|(_, report)| report)
        .collect()
    }
}
