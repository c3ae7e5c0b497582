//! Symbol type, binding, visibility and special section indices.

use super::{Class, Constant, RangeKind, c};

/// Unspecified type.
pub const STT_NOTYPE: u8 = 0;
/// Data object.
pub const STT_OBJECT: u8 = 1;
/// Code object.
pub const STT_FUNC: u8 = 2;
/// Associated with a section.
pub const STT_SECTION: u8 = 3;
/// Source file name.
pub const STT_FILE: u8 = 4;
/// First OS-specific type or binding.
pub const STT_LOOS: u8 = 10;
/// Last OS-specific type or binding.
pub const STT_HIOS: u8 = 12;
/// First processor-specific type or binding.
pub const STT_LOPROC: u8 = 13;
/// Last processor-specific type or binding.
pub const STT_HIPROC: u8 = 15;

/// Local symbol.
pub const STB_LOCAL: u8 = 0;
/// Global symbol.
pub const STB_GLOBAL: u8 = 1;
/// Weak symbol.
pub const STB_WEAK: u8 = 2;

/// Undefined section.
pub const SHN_UNDEF: u16 = 0;
/// Start of the reserved index range.
pub const SHN_LORESERVE: u16 = 0xff00;
/// First processor-specific index.
pub const SHN_LOPROC: u16 = 0xff00;
/// Last processor-specific index.
pub const SHN_HIPROC: u16 = 0xff1f;
/// First OS-specific index.
pub const SHN_LOOS: u16 = 0xff20;
/// Last OS-specific index.
pub const SHN_HIOS: u16 = 0xff3f;
/// Absolute value.
pub const SHN_ABS: u16 = 0xfff1;
/// Common symbol.
pub const SHN_COMMON: u16 = 0xfff2;

/// Symbol types (`st_info & 0xf`).
pub static SYMBOL_TYPES: &[Constant] = &[
    c(0, "STT_NOTYPE", "symbol type is unspecified"),
    c(1, "STT_OBJECT", "symbol is a data object"),
    c(2, "STT_FUNC", "symbol is a code object"),
    c(3, "STT_SECTION", "symbol associated with a section"),
    c(4, "STT_FILE", "symbol's name is file name"),
    c(5, "STT_COMMON", "symbol is a common data object"),
    c(6, "STT_TLS", "symbol is thread-local data object"),
];

/// Symbol bindings (`st_info >> 4`).
pub static SYMBOL_BINDINGS: &[Constant] = &[
    c(0, "STB_LOCAL", "local symbol"),
    c(1, "STB_GLOBAL", "global symbol"),
    c(2, "STB_WEAK", "weak symbol"),
];

/// Symbol visibilities (`st_other & 0x3`).
pub static VISIBILITIES: &[Constant] = &[
    c(0, "STV_DEFAULT", "default symbol visibility rules"),
    c(1, "STV_INTERNAL", "processor specific hidden class"),
    c(2, "STV_HIDDEN", "sym unavailable in other modules"),
    c(3, "STV_PROTECTED", "not preemptible, not exported"),
];

/// Named pseudo section indices.
pub static SPECIAL_SECTIONS: &[Constant] = &[
    c(0, "SHN_UNDEF", "undefined section"),
    c(0xff00, "SHN_BEFORE", "order section before all others (Solaris)"),
    c(0xff01, "SHN_AFTER", "order section after all others (Solaris)"),
    c(0xfff1, "SHN_ABS", "associated symbol is absolute"),
    c(0xfff2, "SHN_COMMON", "associated symbol is common"),
    c(0xffff, "SHN_XINDEX", "index is in extra table"),
];

fn type_or_binding_range(value: u64) -> Option<RangeKind> {
    if (u64::from(STT_LOPROC)..=u64::from(STT_HIPROC)).contains(&value) {
        Some(RangeKind::Processor)
    } else if (u64::from(STT_LOOS)..=u64::from(STT_HIOS)).contains(&value) {
        Some(RangeKind::Os)
    } else {
        None
    }
}

/// Classify a symbol type (the low nibble of `st_info`).
#[must_use]
pub fn symbol_type(value: u8) -> Class {
    Class::of(SYMBOL_TYPES, u64::from(value), type_or_binding_range)
}

/// Classify a symbol binding (the high nibble of `st_info`).
#[must_use]
pub fn symbol_binding(value: u8) -> Class {
    Class::of(SYMBOL_BINDINGS, u64::from(value), type_or_binding_range)
}

/// Look up a visibility (the low two bits of `st_other`).
#[must_use]
pub fn visibility(value: u8) -> Option<&'static Constant> {
    super::lookup(VISIBILITIES, u64::from(value))
}

/// What an `st_shndx` value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionIndex {
    /// A named pseudo index or a reserved range.
    Special(Class),
    /// An index into the section header table.
    Ordinary(u16),
}

/// Classify `st_shndx`.
#[must_use]
pub fn section_index(value: u16) -> SectionIndex {
    if let Some(k) = super::lookup(SPECIAL_SECTIONS, u64::from(value)) {
        return SectionIndex::Special(Class::Named(k));
    }
    let range = if (SHN_LOPROC..=SHN_HIPROC).contains(&value) {
        RangeKind::Processor
    } else if (SHN_LOOS..=SHN_HIOS).contains(&value) {
        RangeKind::Os
    } else if value >= SHN_LORESERVE {
        RangeKind::ReservedIndices
    } else {
        return SectionIndex::Ordinary(value);
    };
    SectionIndex::Special(Class::Range(range))
}
