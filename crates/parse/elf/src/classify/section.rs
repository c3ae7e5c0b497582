//! Section header type and flag values.

use super::{Class, Constant, RangeKind, c};

/// Inactive section header.
pub const SHT_NULL: u32 = 0;
/// Program-defined contents.
pub const SHT_PROGBITS: u32 = 1;
/// Full symbol table.
pub const SHT_SYMTAB: u32 = 2;
/// String table.
pub const SHT_STRTAB: u32 = 3;
/// Relocations with addends.
pub const SHT_RELA: u32 = 4;
/// Symbol hash table.
pub const SHT_HASH: u32 = 5;
/// Dynamic linking table.
pub const SHT_DYNAMIC: u32 = 6;
/// Notes.
pub const SHT_NOTE: u32 = 7;
/// Occupies no file space (`.bss`).
pub const SHT_NOBITS: u32 = 8;
/// Relocations without addends.
pub const SHT_REL: u32 = 9;
/// Reserved.
pub const SHT_SHLIB: u32 = 10;
/// Dynamic linker symbol table.
pub const SHT_DYNSYM: u32 = 11;
/// Constructor array.
pub const SHT_INIT_ARRAY: u32 = 14;
/// Destructor array.
pub const SHT_FINI_ARRAY: u32 = 15;
/// Pre-constructor array.
pub const SHT_PREINIT_ARRAY: u32 = 16;
/// Section group.
pub const SHT_GROUP: u32 = 17;
/// Extended section indices.
pub const SHT_SYMTAB_SHNDX: u32 = 18;
/// First OS-specific section type.
pub const SHT_LOOS: u32 = 0x6000_0000;
/// Last OS-specific section type.
pub const SHT_HIOS: u32 = 0x6fff_ffff;
/// First processor-specific section type.
pub const SHT_LOPROC: u32 = 0x7000_0000;
/// Last processor-specific section type.
pub const SHT_HIPROC: u32 = 0x7fff_ffff;
/// First application-specific section type.
pub const SHT_LOUSER: u32 = 0x8000_0000;
/// Last application-specific section type.
pub const SHT_HIUSER: u32 = 0x8fff_ffff;

/// `sh_type` values.
pub static SECTION_TYPES: &[Constant] = &[
    c(0, "SHT_NULL", "section header table entry unused"),
    c(1, "SHT_PROGBITS", "program data"),
    c(2, "SHT_SYMTAB", "symbol table"),
    c(3, "SHT_STRTAB", "string table"),
    c(4, "SHT_RELA", "relocation entries with addends"),
    c(5, "SHT_HASH", "symbol hash table"),
    c(6, "SHT_DYNAMIC", "dynamic linking information"),
    c(7, "SHT_NOTE", "notes"),
    c(8, "SHT_NOBITS", "program space with no data (bss)"),
    c(9, "SHT_REL", "relocation entries, no addends"),
    c(10, "SHT_SHLIB", "reserved"),
    c(11, "SHT_DYNSYM", "dynamic linker symbol table"),
    c(14, "SHT_INIT_ARRAY", "array of constructors"),
    c(15, "SHT_FINI_ARRAY", "array of destructors"),
    c(16, "SHT_PREINIT_ARRAY", "array of pre-constructors"),
    c(17, "SHT_GROUP", "section group"),
    c(18, "SHT_SYMTAB_SHNDX", "extended section indices"),
    c(0x6fff_fff5, "SHT_GNU_ATTRIBUTES", "object attributes"),
    c(0x6fff_fff6, "SHT_GNU_HASH", "GNU-style hash table"),
    c(0x6fff_fff7, "SHT_GNU_LIBLIST", "prelink library list"),
    c(0x6fff_fff8, "SHT_CHECKSUM", "checksum for DSO content"),
    c(0x6fff_fffd, "SHT_GNU_verdef", "version definition section"),
    c(0x6fff_fffe, "SHT_GNU_verneed", "version needs section"),
    c(0x6fff_ffff, "SHT_GNU_versym", "version symbol table"),
];

/// Writable.
pub const SHF_WRITE: u64 = 0x1;
/// Occupies memory during execution.
pub const SHF_ALLOC: u64 = 0x2;
/// Executable.
pub const SHF_EXECINSTR: u64 = 0x4;

/// `sh_flags` bits.
pub static SECTION_FLAGS: &[Constant] = &[
    c(SHF_WRITE, "SHF_WRITE", "writable"),
    c(SHF_ALLOC, "SHF_ALLOC", "occupies memory during execution"),
    c(SHF_EXECINSTR, "SHF_EXECINSTR", "executable"),
    c(0x10, "SHF_MERGE", "might be merged"),
    c(0x20, "SHF_STRINGS", "contains nul-terminated strings"),
    c(0x40, "SHF_INFO_LINK", "`sh_info' contains SHT index"),
    c(0x80, "SHF_LINK_ORDER", "preserve order after combining"),
    c(0x100, "SHF_OS_NONCONFORMING", "non-standard OS specific handling required"),
    c(0x200, "SHF_GROUP", "section is member of a group"),
    c(0x400, "SHF_TLS", "section hold thread-local data"),
    c(0x800, "SHF_COMPRESSED", "section with compressed data"),
    c(0x0020_0000, "SHF_GNU_RETAIN", "not to be GCed by linker"),
    c(0x4000_0000, "SHF_ORDERED", "special ordering requirement"),
    c(0x8000_0000, "SHF_EXCLUDE", "section is excluded unless referenced or allocated"),
];

/// Classify `sh_type`.
#[must_use]
pub fn section_type(value: u32) -> Class {
    Class::of(SECTION_TYPES, u64::from(value), |_| {
        if (SHT_LOPROC..=SHT_HIPROC).contains(&value) {
            Some(RangeKind::Processor)
        } else if (SHT_LOOS..=SHT_HIOS).contains(&value) {
            Some(RangeKind::Os)
        } else if (SHT_LOUSER..=SHT_HIUSER).contains(&value) {
            Some(RangeKind::Application)
        } else {
            None
        }
    })
}
