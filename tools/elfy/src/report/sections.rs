//! `-s`: one record per section header.

use anyhow::{Context, Result};
use elfy_elf::ElfFile;
use elfy_elf::classify::section::{SECTION_FLAGS, section_type};

use crate::cli::Report;
use crate::render::{Printer, ReportConfig, flag_list, hex};

const LABELS: &[&str] = &[
    "sh_name",
    "sh_type",
    "sh_flags",
    "sh_addr",
    "sh_offset",
    "sh_size",
    "sh_link",
    "sh_info",
    "sh_addralign",
    "sh_entsize",
];

pub fn render(elf: &ElfFile, config: ReportConfig) -> Result<String> {
    let sections = elf
        .section_headers()
        .context("failed to read section headers")?;
    crate::verbose::vprintln!("{} section headers", sections.len());

    let mut p = Printer::new(config, LABELS);
    p.title(Report::SectionHeaders.title());
    p.blank();

    for (i, sh) in sections.iter().enumerate() {
        if i > 0 {
            p.blank();
        }
        p.title(format_args!("Elf_Shdr {}", sh.index));
        p.named("sh_name", sh.sh_name, sh.name.as_deref());
        p.classified("sh_type", u64::from(sh.sh_type), section_type(sh.sh_type));
        p.field("sh_flags", flag_list(sh.sh_flags, SECTION_FLAGS));
        p.field("sh_addr", hex(sh.sh_addr));
        p.field("sh_offset", hex(sh.sh_offset));
        p.field("sh_size", hex(sh.sh_size));
        p.field("sh_link", hex(sh.sh_link));
        p.field("sh_info", hex(sh.sh_info));
        p.field("sh_addralign", hex(sh.sh_addralign));
        p.field("sh_entsize", hex(sh.sh_entsize));
    }

    Ok(p.finish())
}
