//! `--symtab` and `--dyn-syms`: one record per symbol.

use anyhow::{Context, Result};
use elfy_elf::classify::Class;
use elfy_elf::classify::symbol::{
    SectionIndex, section_index, symbol_binding, symbol_type, visibility,
};
use elfy_elf::{ElfFile, Symbol, SymbolKind};

use crate::cli::Report;
use crate::render::{Printer, ReportConfig, hex, short_name};

const LABELS: &[&str] = &["st_name", "st_info", "st_other", "st_shndx", "st_value", "st_size"];

pub fn render(elf: &ElfFile, config: ReportConfig, kind: SymbolKind) -> Result<String> {
    let (report, what) = match kind {
        SymbolKind::Symtab => (Report::Symtab, "the symbol table"),
        SymbolKind::Dynsym => (Report::DynSyms, "the dynamic symbol table"),
    };
    let symbols = elf
        .symbols(kind)
        .with_context(|| format!("failed to read {what}"))?;
    crate::verbose::vprintln!("{} symbols in {what}", symbols.len());

    let mut p = Printer::new(config, LABELS);
    p.title(report.title());
    p.blank();

    for (i, sym) in symbols.iter().enumerate() {
        if i > 0 {
            p.blank();
        }
        symbol(&mut p, sym);
    }

    Ok(p.finish())
}

fn symbol(p: &mut Printer, sym: &Symbol) {
    p.title(format_args!("Elf_Sym {}", sym.index));
    p.named("st_name", sym.st_name, sym.name.as_deref());

    let ty = sym.symbol_type();
    let bind = sym.binding();
    let info = format!(
        "{}, {}",
        short_name(u64::from(ty), symbol_type(ty)),
        short_name(u64::from(bind), symbol_binding(bind))
    );
    p.field_info("st_info", hex(sym.st_info), Some(&info));

    let vis = sym.visibility();
    match visibility(vis) {
        Some(k) => p.constant("st_other", k),
        None => p.field_info("st_other", hex(vis), Class::Unknown.fallback_label()),
    }

    match section_index(sym.st_shndx) {
        SectionIndex::Special(Class::Named(k)) => p.constant("st_shndx", k),
        SectionIndex::Special(class) => {
            p.field_info("st_shndx", sym.st_shndx, class.fallback_label());
        }
        SectionIndex::Ordinary(index) => {
            p.named("st_shndx", index, sym.section_name.as_deref());
        }
    }

    p.field("st_value", hex(sym.st_value));
    p.field("st_size", sym.st_size);
}
