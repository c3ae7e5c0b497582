//! `-d`: entries of every dynamic section up to their terminating `DT_NULL`.

use anyhow::{Context, Result};
use elfy_elf::classify::dynamic::dynamic_tag;
use elfy_elf::{DynamicValue, ElfFile};

use crate::cli::Report;
use crate::render::{Printer, ReportConfig, flag_list, hex};

const LABELS: &[&str] = &["d_tag", "d_val"];

pub fn render(elf: &ElfFile, config: ReportConfig) -> Result<String> {
    let entries = elf
        .dynamic_entries()
        .context("failed to read the dynamic section")?;
    crate::verbose::vprintln!("{} dynamic entries", entries.len());

    let mut p = Printer::new(config, LABELS);
    p.title(Report::Dynamic.title());
    p.blank();

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            p.blank();
        }
        p.title(format_args!("Elf_Dyn {}", entry.index));
        p.classified("d_tag", entry.tag, dynamic_tag(entry.tag));
        match &entry.value {
            DynamicValue::Address(v) => p.field("d_val", hex(*v)),
            DynamicValue::Count(v) => p.field("d_val", v),
            DynamicValue::Flags { bits, table } => p.field("d_val", flag_list(*bits, *table)),
            DynamicValue::Name { offset, name } => p.named("d_val", hex(*offset), name.as_deref()),
        }
    }

    Ok(p.finish())
}
