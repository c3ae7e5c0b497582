//! Identification bytes and object file type.

use super::{Class, Constant, RangeKind, c};

/// `ET_NONE`.
pub const ET_NONE: u16 = 0;
/// `ET_REL`.
pub const ET_REL: u16 = 1;
/// `ET_EXEC`.
pub const ET_EXEC: u16 = 2;
/// `ET_DYN`.
pub const ET_DYN: u16 = 3;
/// `ET_CORE`.
pub const ET_CORE: u16 = 4;
/// First OS-specific file type.
pub const ET_LOOS: u16 = 0xfe00;
/// Last OS-specific file type.
pub const ET_HIOS: u16 = 0xfeff;
/// First processor-specific file type.
pub const ET_LOPROC: u16 = 0xff00;

/// `EV_CURRENT`.
pub const EV_CURRENT: u8 = 1;

/// `EI_CLASS` values.
pub static CLASSES: &[Constant] = &[
    c(0, "ELFCLASSNONE", "invalid class"),
    c(1, "ELFCLASS32", "32-bit object"),
    c(2, "ELFCLASS64", "64-bit object"),
];

/// `EI_DATA` values.
pub static ENCODINGS: &[Constant] = &[
    c(0, "ELFDATANONE", "invalid data encoding"),
    c(1, "ELFDATA2LSB", "2's complement, little endian"),
    c(2, "ELFDATA2MSB", "2's complement, big endian"),
];

/// `EI_VERSION` values.
pub static VERSIONS: &[Constant] = &[
    c(0, "EV_NONE", "invalid ELF version"),
    c(1, "EV_CURRENT", "current version"),
];

/// `EI_OSABI` values.
pub static OS_ABIS: &[Constant] = &[
    c(0, "ELFOSABI_SYSV", "UNIX System V"),
    c(1, "ELFOSABI_HPUX", "HP-UX"),
    c(2, "ELFOSABI_NETBSD", "NetBSD"),
    c(3, "ELFOSABI_GNU", "object uses GNU ELF extensions"),
    c(6, "ELFOSABI_SOLARIS", "Sun Solaris"),
    c(7, "ELFOSABI_AIX", "IBM AIX"),
    c(8, "ELFOSABI_IRIX", "SGI Irix"),
    c(9, "ELFOSABI_FREEBSD", "FreeBSD"),
    c(10, "ELFOSABI_TRU64", "Compaq TRU64 UNIX"),
    c(11, "ELFOSABI_MODESTO", "Novell Modesto"),
    c(12, "ELFOSABI_OPENBSD", "OpenBSD"),
    c(64, "ELFOSABI_ARM_AEABI", "ARM EABI"),
    c(97, "ELFOSABI_ARM", "ARM"),
    c(255, "ELFOSABI_STANDALONE", "standalone (embedded) application"),
];

/// `e_type` values.
pub static FILE_TYPES: &[Constant] = &[
    c(ET_NONE as u64, "ET_NONE", "unknown type"),
    c(ET_REL as u64, "ET_REL", "relocatable file"),
    c(ET_EXEC as u64, "ET_EXEC", "executable file"),
    c(ET_DYN as u64, "ET_DYN", "shared object file"),
    c(ET_CORE as u64, "ET_CORE", "core file"),
];

/// Classify `e_ident[EI_CLASS]`.
#[must_use]
pub fn file_class(value: u8) -> Class {
    Class::of(CLASSES, u64::from(value), |_| None)
}

/// Classify `e_ident[EI_DATA]`.
#[must_use]
pub fn data_encoding(value: u8) -> Class {
    Class::of(ENCODINGS, u64::from(value), |_| None)
}

/// Classify `e_ident[EI_VERSION]`.
#[must_use]
pub fn version(value: u8) -> Class {
    Class::of(VERSIONS, u64::from(value), |_| None)
}

/// Classify `e_ident[EI_OSABI]`.
#[must_use]
pub fn os_abi(value: u8) -> Class {
    Class::of(OS_ABIS, u64::from(value), |_| None)
}

/// Classify `e_type`.
#[must_use]
pub fn file_type(value: u16) -> Class {
    Class::of(FILE_TYPES, u64::from(value), |v| {
        if (u64::from(ET_LOOS)..=u64::from(ET_HIOS)).contains(&v) {
            Some(RangeKind::Os)
        } else if v >= u64::from(ET_LOPROC) {
            Some(RangeKind::Processor)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_file_types() {
        assert_eq!(
            file_type(ET_DYN).constant().map(|k| (k.name, k.description)),
            Some(("ET_DYN", "shared object file"))
        );
    }

    #[test]
    fn file_type_ranges() {
        assert_eq!(file_type(5), Class::Unknown);
        assert_eq!(file_type(0xfe00), Class::Range(RangeKind::Os));
        assert_eq!(file_type(0xfeff), Class::Range(RangeKind::Os));
        assert_eq!(file_type(0xff00), Class::Range(RangeKind::Processor));
        assert_eq!(file_type(0xffff), Class::Range(RangeKind::Processor));
    }

    #[test]
    fn ident_bytes() {
        assert_eq!(file_class(2).constant().map(|k| k.name), Some("ELFCLASS64"));
        assert_eq!(file_class(3), Class::Unknown);
        assert_eq!(
            data_encoding(1).constant().map(|k| k.name),
            Some("ELFDATA2LSB")
        );
        assert_eq!(version(EV_CURRENT).constant().map(|k| k.name), Some("EV_CURRENT"));
        assert_eq!(os_abi(3).constant().map(|k| k.name), Some("ELFOSABI_GNU"));
        assert_eq!(os_abi(4), Class::Unknown);
    }
}
