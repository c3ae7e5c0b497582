//! `-h`: the file header and a breakdown of `e_ident`.

use anyhow::{Context, Result};
use elfy_elf::ElfFile;
use elfy_elf::classify::ident::{data_encoding, file_class, file_type, os_abi, version};
use elfy_elf::classify::machine::machine;
use elfy_elf::reader::{EI_ABIVERSION, EI_CLASS, EI_DATA, EI_OSABI, EI_PAD, EI_VERSION};

use crate::cli::Report;
use crate::render::{IdentBytes, Printer, ReportConfig, hex};

const LABELS: &[&str] = &[
    "e_ident",
    "e_type",
    "e_machine",
    "e_version",
    "e_entry",
    "e_phoff",
    "e_shoff",
    "e_flags",
    "e_ehsize",
    "e_phentsize",
    "e_phnum",
    "e_shentsize",
    "e_shnum",
    "e_shstrndx",
    "EI_MAG0",
    "EI_MAG1",
    "EI_MAG2",
    "EI_MAG3",
    "EI_CLASS",
    "EI_DATA",
    "EI_VERSION",
    "EI_OSABI",
    "EI_ABIVERSION",
    "EI_PAD",
];

pub fn render(elf: &ElfFile, config: ReportConfig) -> Result<String> {
    let h = elf.header();
    let phnum = elf
        .program_header_count()
        .context("failed to read the program header count")?;
    let ident = &h.e_ident;

    let mut p = Printer::new(config, LABELS);
    p.title(Report::FileHeader.title());
    p.blank();

    p.title("Elf_Ehdr");
    p.field("e_ident", IdentBytes(ident));
    p.classified("e_type", u64::from(h.e_type), file_type(h.e_type));
    p.classified("e_machine", u64::from(h.e_machine), machine(h.e_machine));
    p.field("e_version", format_args!("{:x}", h.e_version));
    p.field("e_entry", hex(h.e_entry));
    p.field("e_phoff", hex(h.e_phoff));
    p.field("e_shoff", hex(h.e_shoff));
    p.field("e_flags", hex(h.e_flags));
    p.field("e_ehsize", h.e_ehsize);
    p.field("e_phentsize", h.e_phentsize);
    p.field("e_phnum", phnum);
    p.field("e_shentsize", h.e_shentsize);
    p.field("e_shnum", h.e_shnum);
    p.field("e_shstrndx", h.e_shstrndx);
    p.blank();

    p.title("Elf_Ehdr.e_ident");
    p.field("EI_MAG0", hex(ident[0]));
    p.field("EI_MAG1", char::from(ident[1]));
    p.field("EI_MAG2", char::from(ident[2]));
    p.field("EI_MAG3", char::from(ident[3]));
    let byte = |i: usize| u64::from(ident[i]);
    p.classified("EI_CLASS", byte(EI_CLASS), file_class(ident[EI_CLASS]));
    p.classified("EI_DATA", byte(EI_DATA), data_encoding(ident[EI_DATA]));
    p.classified("EI_VERSION", byte(EI_VERSION), version(ident[EI_VERSION]));
    p.classified("EI_OSABI", byte(EI_OSABI), os_abi(ident[EI_OSABI]));
    p.field("EI_ABIVERSION", hex(ident[EI_ABIVERSION]));
    p.field("EI_PAD", hex(ident[EI_PAD]));

    Ok(p.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample;
    use elfy_elf::fixtures::{ElfBuilder, Section};
    use elfy_elf::{DataEncoding, ElfError, ObjectClass, PN_XNUM};

    fn plain(elf: &ElfFile) -> String {
        render(elf, ReportConfig::default()).unwrap()
    }

    #[test]
    fn sample_header() {
        let out = plain(&sample());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "File Header");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Elf_Ehdr");
        assert_eq!(
            lines[3],
            "e_ident          7f 45 4c 46 02 01 01 00 00 00 00 00 00 00 00 00"
        );
        assert_eq!(lines[4], "e_type           ET_EXEC (executable file)");
        assert!(lines[5].starts_with("e_machine        EM_X86_64 ("));
        assert_eq!(lines[6], "e_version        1");
        assert_eq!(lines[7], "e_entry          0x401000");
        assert_eq!(lines[8], "e_phoff          0x40");
        assert_eq!(lines[10], "e_flags          0");
        assert_eq!(lines[11], "e_ehsize         64");
        assert_eq!(lines[12], "e_phentsize      56");
        assert_eq!(lines[13], "e_phnum          1");
        assert_eq!(lines[15], "e_shnum          8");
        assert_eq!(lines[16], "e_shstrndx       7");
        assert_eq!(lines[17], "");
        assert_eq!(lines[18], "Elf_Ehdr.e_ident");
        assert_eq!(lines[19], "EI_MAG0          0x7f");
        assert_eq!(lines[20], "EI_MAG1          E");
        assert_eq!(lines[23], "EI_CLASS         ELFCLASS64 (64-bit object)");
        assert_eq!(lines[24], "EI_DATA          ELFDATA2LSB (2's complement, little endian)");
        assert_eq!(lines[25], "EI_VERSION       EV_CURRENT (current version)");
        assert_eq!(lines[26], "EI_OSABI         ELFOSABI_SYSV (UNIX System V)");
        assert_eq!(lines[27], "EI_ABIVERSION    0");
        assert_eq!(lines[28], "EI_PAD           0");
        assert_eq!(lines.len(), 29);
    }

    #[test]
    fn big_endian_32_bit() {
        let data = ElfBuilder::new(ObjectClass::ThirtyTwoBit, DataEncoding::BigEndian)
            .e_type(0xfe01)
            .machine(0x7777)
            .build();
        let out = plain(&ElfFile::from_bytes(data).unwrap());
        assert!(out.contains("e_type           0xfe01 (OS-specific)\n"));
        assert!(out.contains("e_machine        0x7777 (unknown)\n"));
        assert!(out.contains("e_ehsize         52\n"));
        assert!(out.contains("EI_CLASS         ELFCLASS32 (32-bit object)\n"));
        assert!(out.contains("EI_DATA          ELFDATA2MSB (2's complement, big endian)\n"));
    }

    #[test]
    fn extended_phnum_is_resolved() {
        let data = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian)
            .section(Section::new(".text", 1, vec![0; 4]))
            .null_section(0, 0, 70_000)
            .phnum(PN_XNUM)
            .build();
        let out = plain(&ElfFile::from_bytes(data).unwrap());
        assert!(out.contains("e_phnum          70000\n"));
    }

    #[test]
    fn extended_phnum_without_sections_fails() {
        let data = ElfBuilder::new(ObjectClass::SixtyFourBit, DataEncoding::LittleEndian)
            .phnum(PN_XNUM)
            .build();
        let err = render(&ElfFile::from_bytes(data).unwrap(), ReportConfig::default())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ElfError>(),
            Some(&ElfError::MissingExtendedCount)
        );
    }
}
