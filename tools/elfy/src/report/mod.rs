//! One renderer per report section.
//!
//! Each renderer parses everything it needs first and only then lays out
//! text, so a parse error never leaves half a section on stdout.

mod dynamic;
mod header;
mod sections;
mod segments;
mod symbols;

use anyhow::Result;
use elfy_elf::{ElfFile, SymbolKind};

use crate::cli::Report;
use crate::render::ReportConfig;

impl Report {
    /// Heading printed at the top of the section.
    pub fn title(self) -> &'static str {
        match self {
            Self::FileHeader => "File Header",
            Self::ProgramHeaders => "Program Headers",
            Self::SectionHeaders => "Section Headers",
            Self::Dynamic => "Dynamic Section",
            Self::Symtab => "Symbol Table",
            Self::DynSyms => "Dynamic Symbol Table",
        }
    }
}

/// Render one report section of `elf`.
pub fn render(elf: &ElfFile, report: Report, config: ReportConfig) -> Result<String> {
    match report {
        Report::FileHeader => header::render(elf, config),
        Report::ProgramHeaders => segments::render(elf, config),
        Report::SectionHeaders => sections::render(elf, config),
        Report::Dynamic => dynamic::render(elf, config),
        Report::Symtab => symbols::render(elf, config, SymbolKind::Symtab),
        Report::DynSyms => symbols::render(elf, config, SymbolKind::Dynsym),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use elfy_elf::fixtures::sample_executable;
    use elfy_elf::{DataEncoding, ObjectClass};

    /// The 64-bit little-endian sample image.
    pub(crate) fn sample() -> ElfFile {
        ElfFile::from_bytes(sample_executable(
            ObjectClass::SixtyFourBit,
            DataEncoding::LittleEndian,
        ))
        .expect("sample parses")
    }

    #[test]
    fn every_report_starts_with_its_title() {
        let elf = sample();
        for report in [
            Report::FileHeader,
            Report::ProgramHeaders,
            Report::SectionHeaders,
            Report::Dynamic,
            Report::Symtab,
            Report::DynSyms,
        ] {
            let text = render(&elf, report, ReportConfig::default()).unwrap();
            assert!(
                text.starts_with(&format!("{}\n\n", report.title())),
                "{report:?}: {text}"
            );
            assert!(text.ends_with('\n') && !text.ends_with("\n\n"));
        }
    }
}
