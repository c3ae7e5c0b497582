//! Dynamic section tags and the flag words some of them carry.

use super::{Class, Constant, RangeKind, c};

/// Marks the end of the dynamic section.
pub const DT_NULL: u64 = 0;
/// Name of a needed library.
pub const DT_NEEDED: u64 = 1;
/// Size of the PLT relocations.
pub const DT_PLTRELSZ: u64 = 2;
/// Address of the string table.
pub const DT_STRTAB: u64 = 5;
/// Size of the string table.
pub const DT_STRSZ: u64 = 10;
/// Name of this shared object.
pub const DT_SONAME: u64 = 14;
/// Library search path (deprecated).
pub const DT_RPATH: u64 = 15;
/// Library search path.
pub const DT_RUNPATH: u64 = 29;
/// `DF_*` flags.
pub const DT_FLAGS: u64 = 30;
/// `DTF_1_*` flags.
pub const DT_FEATURE_1: u64 = 0x6fff_fdfc;
/// Configuration file name.
pub const DT_CONFIG: u64 = 0x6fff_fefa;
/// Dependency audit library name.
pub const DT_DEPAUDIT: u64 = 0x6fff_fefb;
/// Object audit library name.
pub const DT_AUDIT: u64 = 0x6fff_fefc;
/// `DF_1_*` flags.
pub const DT_FLAGS_1: u64 = 0x6fff_fffb;
/// Shared object to load before self.
pub const DT_AUXILIARY: u64 = 0x7fff_fffd;
/// Shared object to get values from.
pub const DT_FILTER: u64 = 0x7fff_ffff;

const DT_RELASZ: u64 = 8;
const DT_RELAENT: u64 = 9;
const DT_SYMENT: u64 = 11;
const DT_RELSZ: u64 = 18;
const DT_RELENT: u64 = 19;
const DT_INIT_ARRAYSZ: u64 = 27;
const DT_FINI_ARRAYSZ: u64 = 28;
const DT_PREINIT_ARRAYSZ: u64 = 33;
const DT_GNU_CONFLICTSZ: u64 = 0x6fff_fdf6;
const DT_GNU_LIBLISTSZ: u64 = 0x6fff_fdf7;
const DT_MOVEENT: u64 = 0x6fff_fdfa;
const DT_MOVESZ: u64 = 0x6fff_fdfb;
const DT_SYMINSZ: u64 = 0x6fff_fdfe;
const DT_SYMINENT: u64 = 0x6fff_fdff;
const DT_RELACOUNT: u64 = 0x6fff_fff9;
const DT_RELCOUNT: u64 = 0x6fff_fffa;
const DT_VERDEFNUM: u64 = 0x6fff_fffd;
const DT_VERNEEDNUM: u64 = 0x6fff_ffff;

/// First OS-specific tag.
pub const DT_LOOS: u64 = 0x6000_000d;
/// Last OS-specific tag.
pub const DT_HIOS: u64 = 0x6fff_f000;
/// First processor-specific tag.
pub const DT_LOPROC: u64 = 0x7000_0000;
/// Last processor-specific tag.
pub const DT_HIPROC: u64 = 0x7fff_ffff;

/// `d_tag` values.
pub static DYNAMIC_TAGS: &[Constant] = &[
    c(0, "DT_NULL", "marks end of dynamic section"),
    c(1, "DT_NEEDED", "name of needed library"),
    c(2, "DT_PLTRELSZ", "size in bytes of PLT relocs"),
    c(3, "DT_PLTGOT", "processor defined value"),
    c(4, "DT_HASH", "address of symbol hash table"),
    c(5, "DT_STRTAB", "address of string table"),
    c(6, "DT_SYMTAB", "address of symbol table"),
    c(7, "DT_RELA", "address of Rela relocs"),
    c(8, "DT_RELASZ", "total size of Rela relocs"),
    c(9, "DT_RELAENT", "size of one Rela reloc"),
    c(10, "DT_STRSZ", "size of string table"),
    c(11, "DT_SYMENT", "size of one symbol table entry"),
    c(12, "DT_INIT", "address of init function"),
    c(13, "DT_FINI", "address of termination function"),
    c(14, "DT_SONAME", "name of shared object"),
    c(15, "DT_RPATH", "library search path (deprecated)"),
    c(16, "DT_SYMBOLIC", "start symbol search here"),
    c(17, "DT_REL", "address of Rel relocs"),
    c(18, "DT_RELSZ", "total size of Rel relocs"),
    c(19, "DT_RELENT", "size of one Rel reloc"),
    c(20, "DT_PLTREL", "type of reloc in PLT"),
    c(21, "DT_DEBUG", "for debugging; unspecified"),
    c(22, "DT_TEXTREL", "Reloc might modify .text"),
    c(23, "DT_JMPREL", "address of PLT relocs"),
    c(24, "DT_BIND_NOW", "process relocations of object"),
    c(25, "DT_INIT_ARRAY", "array with addresses of init fct"),
    c(26, "DT_FINI_ARRAY", "array with addresses of fini fct"),
    c(27, "DT_INIT_ARRAYSZ", "size in bytes of DT_INIT_ARRAY"),
    c(28, "DT_FINI_ARRAYSZ", "size in bytes of DT_FINI_ARRAY"),
    c(29, "DT_RUNPATH", "library search path"),
    c(30, "DT_FLAGS", "flags for the object being loaded"),
    c(32, "DT_PREINIT_ARRAY", "array with addresses of preinit fct"),
    c(33, "DT_PREINIT_ARRAYSZ", "size in bytes of DT_PREINIT_ARRAY"),
    c(34, "DT_SYMTAB_SHNDX", "address of SYMTAB_SHNDX section"),
    c(0x6fff_fdf5, "DT_GNU_PRELINKED", "prelinking timestamp"),
    c(0x6fff_fdf6, "DT_GNU_CONFLICTSZ", "size of conflict section"),
    c(0x6fff_fdf7, "DT_GNU_LIBLISTSZ", "size of library list"),
    c(0x6fff_fdf8, "DT_CHECKSUM", ""),
    c(0x6fff_fdf9, "DT_PLTPADSZ", ""),
    c(0x6fff_fdfa, "DT_MOVEENT", "size in bytes of DT_MOVETAB"),
    c(0x6fff_fdfb, "DT_MOVESZ", "total size of DT_MOVETAB"),
    c(0x6fff_fdfc, "DT_FEATURE_1", "feature selection (DTF_*)"),
    c(0x6fff_fdfd, "DT_POSFLAG_1", "flags for DT_* entries, effecting the following DT_* entry"),
    c(0x6fff_fdfe, "DT_SYMINSZ", "size of syminfo table (in bytes)"),
    c(0x6fff_fdff, "DT_SYMINENT", "entry size of syminfo"),
    c(0x6fff_fef5, "DT_GNU_HASH", "GNU-style hash table"),
    c(0x6fff_fef6, "DT_TLSDESC_PLT", ""),
    c(0x6fff_fef7, "DT_TLSDESC_GOT", ""),
    c(0x6fff_fef8, "DT_GNU_CONFLICT", "start of conflict section"),
    c(0x6fff_fef9, "DT_GNU_LIBLIST", "library list"),
    c(0x6fff_fefa, "DT_CONFIG", "configuration information"),
    c(0x6fff_fefb, "DT_DEPAUDIT", "dependency auditing"),
    c(0x6fff_fefc, "DT_AUDIT", "object auditing"),
    c(0x6fff_fefd, "DT_PLTPAD", "PLT padding"),
    c(0x6fff_fefe, "DT_MOVETAB", "address of move table"),
    c(0x6fff_feff, "DT_SYMINFO", "address of syminfo table"),
    c(0x6fff_fff0, "DT_VERSYM", ""),
    c(0x6fff_fff9, "DT_RELACOUNT", "Rela reloc count"),
    c(0x6fff_fffa, "DT_RELCOUNT", "Rel reloc count"),
    c(0x6fff_fffb, "DT_FLAGS_1", "state flags"),
    c(0x6fff_fffc, "DT_VERDEF", "address of version definition"),
    c(0x6fff_fffd, "DT_VERDEFNUM", "number of version definitions"),
    c(0x6fff_fffe, "DT_VERNEED", "address of table with needed versions"),
    c(0x6fff_ffff, "DT_VERNEEDNUM", "number of needed versions"),
    c(0x7fff_fffd, "DT_AUXILIARY", "shared object to load before self"),
    c(0x7fff_ffff, "DT_FILTER", "shared object to get values from"),
];

/// `DT_FLAGS` bits.
pub static DF_FLAGS: &[Constant] = &[
    c(0x1, "DF_ORIGIN", "object may use DF_ORIGIN"),
    c(0x2, "DF_SYMBOLIC", "symbol resolutions starts here"),
    c(0x4, "DF_TEXTREL", "object contains text relocations"),
    c(0x8, "DF_BIND_NOW", "no lazy binding for this object"),
    c(0x10, "DF_STATIC_TLS", "module uses the static TLS model"),
];

/// `DT_FLAGS_1` bits.
pub static DF_1_FLAGS: &[Constant] = &[
    c(1 << 0, "DF_1_NOW", "set RTLD_NOW for this object"),
    c(1 << 1, "DF_1_GLOBAL", "set RTLD_GLOBAL for this object"),
    c(1 << 2, "DF_1_GROUP", "set RTLD_GROUP for this object"),
    c(1 << 3, "DF_1_NODELETE", "set RTLD_NODELETE for this object"),
    c(1 << 4, "DF_1_LOADFLTR", "trigger filtee loading at runtime"),
    c(1 << 5, "DF_1_INITFIRST", "set RTLD_INITFIRST for this object"),
    c(1 << 6, "DF_1_NOOPEN", "set RTLD_NOOPEN for this object"),
    c(1 << 7, "DF_1_ORIGIN", "$ORIGIN must be handled"),
    c(1 << 8, "DF_1_DIRECT", "direct binding enabled"),
    c(1 << 9, "DF_1_TRANS", ""),
    c(1 << 10, "DF_1_INTERPOSE", "object is used to interpose"),
    c(1 << 11, "DF_1_NODEFLIB", "ignore default lib search path"),
    c(1 << 12, "DF_1_NODUMP", "object can't be dldump'ed"),
    c(1 << 13, "DF_1_CONFALT", "configuration alternative created"),
    c(1 << 14, "DF_1_ENDFILTEE", "filtee terminates filters search"),
    c(1 << 15, "DF_1_DISPRELDNE", "disp reloc applied at build time"),
    c(1 << 16, "DF_1_DISPRELPND", "disp reloc applied at run-time"),
    c(1 << 17, "DF_1_NODIRECT", "object has no-direct binding"),
    c(1 << 18, "DF_1_IGNMULDEF", ""),
    c(1 << 19, "DF_1_NOKSYMS", ""),
    c(1 << 20, "DF_1_NOHDR", ""),
    c(1 << 21, "DF_1_EDITED", "object is modified after built"),
    c(1 << 22, "DF_1_NORELOC", ""),
    c(1 << 23, "DF_1_SYMINTPOSE", "object has individual interposers"),
    c(1 << 24, "DF_1_GLOBAUDIT", "global auditing required"),
    c(1 << 25, "DF_1_SINGLETON", "singleton symbols are used"),
    c(1 << 26, "DF_1_STUB", ""),
    c(1 << 27, "DF_1_PIE", ""),
    c(1 << 28, "DF_1_KMOD", ""),
    c(1 << 29, "DF_1_WEAKFILTER", ""),
    c(1 << 30, "DF_1_NOCOMMON", ""),
];

/// `DT_FEATURE_1` bits.
pub static DTF_1_FLAGS: &[Constant] = &[
    c(0x1, "DTF_1_PARINIT", ""),
    c(0x2, "DTF_1_CONFEXP", ""),
];

/// Tags whose value is a string table offset.
const NAME_TAGS: &[u64] = &[
    DT_NEEDED,
    DT_SONAME,
    DT_RPATH,
    DT_RUNPATH,
    DT_CONFIG,
    DT_DEPAUDIT,
    DT_AUDIT,
    DT_AUXILIARY,
    DT_FILTER,
];

/// Tags whose value is a byte size or an element count.
const COUNT_TAGS: &[u64] = &[
    DT_PLTRELSZ,
    DT_RELASZ,
    DT_RELAENT,
    DT_STRSZ,
    DT_SYMENT,
    DT_RELSZ,
    DT_RELENT,
    DT_INIT_ARRAYSZ,
    DT_FINI_ARRAYSZ,
    DT_PREINIT_ARRAYSZ,
    DT_GNU_CONFLICTSZ,
    DT_GNU_LIBLISTSZ,
    DT_MOVEENT,
    DT_MOVESZ,
    DT_SYMINSZ,
    DT_SYMINENT,
    DT_RELACOUNT,
    DT_RELCOUNT,
    DT_VERDEFNUM,
    DT_VERNEEDNUM,
];

/// How the value of a dynamic entry is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An address or otherwise opaque word, printed as hex.
    Address,
    /// A size or count, printed as decimal.
    Count,
    /// A flag word decomposed against the given table.
    Flags(&'static [Constant]),
    /// An offset into the string table linked from the dynamic section.
    Name,
}

/// Value interpretation for `tag`.
#[must_use]
pub fn value_kind(tag: u64) -> ValueKind {
    match tag {
        DT_FLAGS => ValueKind::Flags(DF_FLAGS),
        DT_FLAGS_1 => ValueKind::Flags(DF_1_FLAGS),
        DT_FEATURE_1 => ValueKind::Flags(DTF_1_FLAGS),
        t if NAME_TAGS.contains(&t) => ValueKind::Name,
        t if COUNT_TAGS.contains(&t) => ValueKind::Count,
        _ => ValueKind::Address,
    }
}

/// Classify `d_tag`. The processor range is checked before the OS range.
#[must_use]
pub fn dynamic_tag(tag: u64) -> Class {
    Class::of(DYNAMIC_TAGS, tag, |v| {
        if (DT_LOPROC..=DT_HIPROC).contains(&v) {
            Some(RangeKind::Processor)
        } else if (DT_LOOS..=DT_HIOS).contains(&v) {
            Some(RangeKind::Os)
        } else {
            None
        }
    })
}
