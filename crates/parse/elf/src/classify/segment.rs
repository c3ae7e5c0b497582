//! Program header type and flag values.

use super::{Class, Constant, RangeKind, c};

/// Unused entry.
pub const PT_NULL: u32 = 0;
/// Loadable segment.
pub const PT_LOAD: u32 = 1;
/// Dynamic linking information.
pub const PT_DYNAMIC: u32 = 2;
/// Program interpreter path.
pub const PT_INTERP: u32 = 3;
/// Auxiliary information.
pub const PT_NOTE: u32 = 4;
/// Reserved.
pub const PT_SHLIB: u32 = 5;
/// The program header table itself.
pub const PT_PHDR: u32 = 6;
/// Thread-local storage template.
pub const PT_TLS: u32 = 7;
/// First OS-specific segment type.
pub const PT_LOOS: u32 = 0x6000_0000;
/// `.eh_frame_hdr` location.
pub const PT_GNU_EH_FRAME: u32 = 0x6474_e550;
/// Stack executability.
pub const PT_GNU_STACK: u32 = 0x6474_e551;
/// Read-only after relocation.
pub const PT_GNU_RELRO: u32 = 0x6474_e552;
/// `.note.gnu.property` location.
pub const PT_GNU_PROPERTY: u32 = 0x6474_e553;
/// Last OS-specific segment type.
pub const PT_HIOS: u32 = 0x6fff_ffff;
/// First processor-specific segment type.
pub const PT_LOPROC: u32 = 0x7000_0000;

/// Executable.
pub const PF_X: u32 = 1;
/// Writable.
pub const PF_W: u32 = 2;
/// Readable.
pub const PF_R: u32 = 4;
/// OS-specific flag bits.
pub const PF_MASKOS: u32 = 0x0ff0_0000;
/// Processor-specific flag bits.
pub const PF_MASKPROC: u32 = 0xf000_0000;

/// `p_type` values.
pub static SEGMENT_TYPES: &[Constant] = &[
    c(PT_NULL as u64, "PT_NULL", "program header table entry unused"),
    c(PT_LOAD as u64, "PT_LOAD", "loadable program segment"),
    c(PT_DYNAMIC as u64, "PT_DYNAMIC", "dynamic linking information"),
    c(PT_INTERP as u64, "PT_INTERP", "program interpreter"),
    c(PT_NOTE as u64, "PT_NOTE", "auxiliary information"),
    c(PT_SHLIB as u64, "PT_SHLIB", "reserved"),
    c(PT_PHDR as u64, "PT_PHDR", "entry for the header table itself"),
    c(PT_TLS as u64, "PT_TLS", "thread-local storage segment"),
    c(PT_GNU_EH_FRAME as u64, "PT_GNU_EH_FRAME", "GCC .eh_frame_hdr segment"),
    c(PT_GNU_STACK as u64, "PT_GNU_STACK", "indicates stack executability"),
    c(PT_GNU_RELRO as u64, "PT_GNU_RELRO", "read-only after relocation"),
    c(PT_GNU_PROPERTY as u64, "PT_GNU_PROPERTY", "GNU property"),
];

/// Exact `p_flags` combinations of the R, W and X bits.
pub static SEGMENT_FLAGS: &[Constant] = &[
    c(1, "PF_X", "segment is executable"),
    c(2, "PF_W", "segment is writable"),
    c(3, "PF_W | PF_X", "segment is writable and executable"),
    c(4, "PF_R", "segment is readable"),
    c(5, "PF_R | PF_X", "segment is readable and executable"),
    c(6, "PF_R | PF_W", "segment is readable and writable"),
    c(7, "PF_R | PF_W | PF_X", "segment is readable, writable and executable"),
];

/// Classify `p_type`.
#[must_use]
pub fn segment_type(value: u32) -> Class {
    Class::of(SEGMENT_TYPES, u64::from(value), |v| {
        if (u64::from(PT_LOOS)..=u64::from(PT_HIOS)).contains(&v) {
            Some(RangeKind::Os)
        } else if v >= u64::from(PT_LOPROC) {
            Some(RangeKind::Processor)
        } else {
            None
        }
    })
}

/// Classify `p_flags` as a whole.
///
/// Only the seven pure R/W/X combinations have names. Any other word is
/// OS-specific if a `PF_MASKOS` bit is set, else processor-specific if a
/// `PF_MASKPROC` bit is set.
#[must_use]
pub fn segment_flags(value: u32) -> Class {
    Class::of(SEGMENT_FLAGS, u64::from(value), |_| {
        if value & PF_MASKOS != 0 {
            Some(RangeKind::Os)
        } else if value & PF_MASKPROC != 0 {
            Some(RangeKind::Processor)
        } else {
            None
        }
    })
}
