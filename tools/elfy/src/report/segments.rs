//! `-p`: one record per program header.

use anyhow::{Context, Result};
use elfy_elf::ElfFile;
use elfy_elf::classify::segment::{segment_flags, segment_type};

use crate::cli::Report;
use crate::render::{Printer, ReportConfig, hex};

const LABELS: &[&str] = &[
    "p_type", "p_flags", "p_offset", "p_vaddr", "p_paddr", "p_filesz", "p_memsz", "p_align",
];

pub fn render(elf: &ElfFile, config: ReportConfig) -> Result<String> {
    let phdrs = elf
        .program_headers()
        .context("failed to read program headers")?;
    crate::verbose::vprintln!("{} program headers", phdrs.len());

    let mut p = Printer::new(config, LABELS);
    p.title(Report::ProgramHeaders.title());
    p.blank();

    for (i, ph) in phdrs.iter().enumerate() {
        if i > 0 {
            p.blank();
        }
        p.title(format_args!("Elf_Phdr {i}"));
        p.classified("p_type", u64::from(ph.p_type), segment_type(ph.p_type));
        p.classified("p_flags", u64::from(ph.p_flags), segment_flags(ph.p_flags));
        p.field("p_offset", hex(ph.p_offset));
        p.field("p_vaddr", hex(ph.p_vaddr));
        p.field("p_paddr", hex(ph.p_paddr));
        p.field("p_filesz", hex(ph.p_filesz));
        p.field("p_memsz", hex(ph.p_memsz));
        p.field("p_align", hex(ph.p_align));
    }

    Ok(p.finish())
}
