//! Byte-level ELF image builders for tests.
//!
//! Compiled for this crate's own tests and, through the `fixtures` feature,
//! for the tests of dependent crates. Every builder emits fields in the class
//! and byte order it was created with, so the same test can run across all
//! four class/encoding combinations.

use crate::reader::{
    DataEncoding, ELF_MAGIC, ELFCLASS32, ELFCLASS64, ELFDATA2LSB, ELFDATA2MSB, EI_NIDENT,
    ObjectClass,
};

/// Every class/encoding combination, for table-driven tests.
pub const ALL_LAYOUTS: [(ObjectClass, DataEncoding); 4] = [
    (ObjectClass::ThirtyTwoBit, DataEncoding::LittleEndian),
    (ObjectClass::ThirtyTwoBit, DataEncoding::BigEndian),
    (ObjectClass::SixtyFourBit, DataEncoding::LittleEndian),
    (ObjectClass::SixtyFourBit, DataEncoding::BigEndian),
];

/// Appends fields in a fixed class and byte order.
#[derive(Debug, Clone)]
pub struct Emitter {
    buf: Vec<u8>,
    class: ObjectClass,
    encoding: DataEncoding,
}

impl Emitter {
    /// Create an empty emitter.
    #[must_use]
    pub fn new(class: ObjectClass, encoding: DataEncoding) -> Self {
        Self {
            buf: Vec::new(),
            class,
            encoding,
        }
    }

    /// Append one byte.
    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    /// Append a `u16`.
    pub fn u16(&mut self, v: u16) -> &mut Self {
        match self.encoding {
            DataEncoding::LittleEndian => self.buf.extend_from_slice(&v.to_le_bytes()),
            DataEncoding::BigEndian => self.buf.extend_from_slice(&v.to_be_bytes()),
        }
        self
    }

    /// Append a `u32`.
    pub fn u32(&mut self, v: u32) -> &mut Self {
        match self.encoding {
            DataEncoding::LittleEndian => self.buf.extend_from_slice(&v.to_le_bytes()),
            DataEncoding::BigEndian => self.buf.extend_from_slice(&v.to_be_bytes()),
        }
        self
    }

    /// Append a `u64`.
    pub fn u64(&mut self, v: u64) -> &mut Self {
        match self.encoding {
            DataEncoding::LittleEndian => self.buf.extend_from_slice(&v.to_le_bytes()),
            DataEncoding::BigEndian => self.buf.extend_from_slice(&v.to_be_bytes()),
        }
        self
    }

    /// Append a class-sized word. 32-bit words are truncated.
    #[expect(clippy::cast_possible_truncation, reason = "32-bit fields hold 32-bit values")]
    pub fn word(&mut self, v: u64) -> &mut Self {
        match self.class {
            ObjectClass::ThirtyTwoBit => self.u32(v as u32),
            ObjectClass::SixtyFourBit => self.u64(v),
        }
    }

    /// Append raw bytes.
    pub fn bytes(&mut self, b: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(b);
        self
    }

    /// Number of bytes emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the emitter and return its bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Incrementally built string table (`\0`-prefixed, NUL-separated).
#[derive(Debug, Clone)]
pub struct StrtabBuilder {
    data: Vec<u8>,
}

impl Default for StrtabBuilder {
    fn default() -> Self {
        Self { data: vec![0] }
    }
}

impl StrtabBuilder {
    /// Create a table holding only the leading empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `s` and return its offset.
    #[expect(clippy::cast_possible_truncation, reason = "test tables are tiny")]
    pub fn add(&mut self, s: &str) -> u32 {
        let offset = self.data.len() as u32;
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(0);
        offset
    }

    /// The table contents.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

/// One program header to emit.
#[derive(Debug, Clone, Copy, Default)]
#[allow(missing_docs)]
pub struct Phdr {
    pub p_type: u32,
    pub p_flags: u32,
    pub p_offset: u64,
    pub p_vaddr: u64,
    pub p_paddr: u64,
    pub p_filesz: u64,
    pub p_memsz: u64,
    pub p_align: u64,
}

/// One section to emit. Its contents are laid out by [`ElfBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct Section {
    name: String,
    sh_type: u32,
    sh_flags: u64,
    sh_addr: u64,
    sh_link: u32,
    sh_info: u32,
    sh_addralign: u64,
    sh_entsize: u64,
    data: Vec<u8>,
    size_override: Option<u64>,
    name_override: Option<u32>,
}

impl Section {
    /// A section named `name` of type `sh_type` holding `data`.
    #[must_use]
    pub fn new(name: &str, sh_type: u32, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            sh_type,
            sh_addralign: 1,
            data,
            ..Self::default()
        }
    }

    /// Set `sh_flags`.
    #[must_use]
    pub fn flags(mut self, v: u64) -> Self {
        self.sh_flags = v;
        self
    }

    /// Set `sh_addr`.
    #[must_use]
    pub fn addr(mut self, v: u64) -> Self {
        self.sh_addr = v;
        self
    }

    /// Set `sh_link`.
    #[must_use]
    pub fn link(mut self, v: u32) -> Self {
        self.sh_link = v;
        self
    }

    /// Set `sh_info`.
    #[must_use]
    pub fn info(mut self, v: u32) -> Self {
        self.sh_info = v;
        self
    }

    /// Set `sh_addralign`.
    #[must_use]
    pub fn align(mut self, v: u64) -> Self {
        self.sh_addralign = v;
        self
    }

    /// Set `sh_entsize`.
    #[must_use]
    pub fn entsize(mut self, v: u64) -> Self {
        self.sh_entsize = v;
        self
    }

    /// Emit `v` as `sh_size` instead of the data length.
    #[must_use]
    pub fn size(mut self, v: u64) -> Self {
        self.size_override = Some(v);
        self
    }

    /// Emit `v` as `sh_name` instead of the real name offset.
    #[must_use]
    pub fn name_offset(mut self, v: u32) -> Self {
        self.name_override = Some(v);
        self
    }
}

/// Builds a complete ELF image: header, program headers, section contents,
/// a generated `.shstrtab`, and the section header table.
///
/// User sections get indices starting at 1 in insertion order; index 0 is
/// the null section and `.shstrtab` is always last.
#[derive(Debug, Clone)]
pub struct ElfBuilder {
    class: ObjectClass,
    encoding: DataEncoding,
    e_type: u16,
    e_machine: u16,
    e_entry: u64,
    e_flags: u32,
    os_abi: u8,
    phdrs: Vec<Phdr>,
    sections: Vec<Section>,
    null_section: (u64, u32, u32),
    phnum: Option<u16>,
    shnum: Option<u16>,
    shstrndx: Option<u16>,
}

impl ElfBuilder {
    /// An `ET_EXEC`/`EM_X86_64` image with entry point `0x401000`.
    #[must_use]
    pub fn new(class: ObjectClass, encoding: DataEncoding) -> Self {
        Self {
            class,
            encoding,
            e_type: 2,
            e_machine: 62,
            e_entry: 0x0040_1000,
            e_flags: 0,
            os_abi: 0,
            phdrs: Vec::new(),
            sections: Vec::new(),
            null_section: (0, 0, 0),
            phnum: None,
            shnum: None,
            shstrndx: None,
        }
    }

    /// Set `e_type`.
    #[must_use]
    pub fn e_type(mut self, v: u16) -> Self {
        self.e_type = v;
        self
    }

    /// Set `e_machine`.
    #[must_use]
    pub fn machine(mut self, v: u16) -> Self {
        self.e_machine = v;
        self
    }

    /// Set `e_entry`.
    #[must_use]
    pub fn entry(mut self, v: u64) -> Self {
        self.e_entry = v;
        self
    }

    /// Set `e_flags`.
    #[must_use]
    pub fn flags(mut self, v: u32) -> Self {
        self.e_flags = v;
        self
    }

    /// Set `e_ident[EI_OSABI]`.
    #[must_use]
    pub fn os_abi(mut self, v: u8) -> Self {
        self.os_abi = v;
        self
    }

    /// Append a program header.
    #[must_use]
    pub fn segment(mut self, phdr: Phdr) -> Self {
        self.phdrs.push(phdr);
        self
    }

    /// Append a section.
    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Set `sh_size`, `sh_link` and `sh_info` of the null section, which
    /// carry the extended header counts.
    #[must_use]
    pub fn null_section(mut self, sh_size: u64, sh_link: u32, sh_info: u32) -> Self {
        self.null_section = (sh_size, sh_link, sh_info);
        self
    }

    /// Emit `v` as `e_phnum` instead of the real count.
    #[must_use]
    pub fn phnum(mut self, v: u16) -> Self {
        self.phnum = Some(v);
        self
    }

    /// Emit `v` as `e_shnum` instead of the real count.
    #[must_use]
    pub fn shnum(mut self, v: u16) -> Self {
        self.shnum = Some(v);
        self
    }

    /// Emit `v` as `e_shstrndx` instead of the real index.
    #[must_use]
    pub fn shstrndx(mut self, v: u16) -> Self {
        self.shstrndx = Some(v);
        self
    }

    /// Encode one symbol table entry.
    #[must_use]
    pub fn symbol(
        &self,
        st_name: u32,
        st_info: u8,
        st_other: u8,
        st_shndx: u16,
        st_value: u64,
        st_size: u64,
    ) -> Vec<u8> {
        let mut e = Emitter::new(self.class, self.encoding);
        match self.class {
            ObjectClass::ThirtyTwoBit => {
                e.u32(st_name)
                    .word(st_value)
                    .word(st_size)
                    .u8(st_info)
                    .u8(st_other)
                    .u16(st_shndx);
            }
            ObjectClass::SixtyFourBit => {
                e.u32(st_name)
                    .u8(st_info)
                    .u8(st_other)
                    .u16(st_shndx)
                    .u64(st_value)
                    .u64(st_size);
            }
        }
        e.finish()
    }

    /// Encode one dynamic entry.
    #[must_use]
    pub fn dyn_entry(&self, tag: u64, val: u64) -> Vec<u8> {
        let mut e = Emitter::new(self.class, self.encoding);
        e.word(tag).word(val);
        e.finish()
    }

    /// Lay out and encode the whole image.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "test images are tiny")]
    pub fn build(&self) -> Vec<u8> {
        let class = self.class;
        let has_sections = !self.sections.is_empty();

        let mut shstrtab = StrtabBuilder::new();
        let name_offsets: Vec<u32> = self.sections.iter().map(|s| shstrtab.add(&s.name)).collect();
        let shstrtab_name = shstrtab.add(".shstrtab");
        let shstrtab = shstrtab.finish();

        let phoff = if self.phdrs.is_empty() {
            0
        } else {
            class.header_size()
        };
        let mut offset = class.header_size() + self.phdrs.len() as u64 * class.program_header_size();

        let mut data_offsets = Vec::with_capacity(self.sections.len());
        for s in &self.sections {
            data_offsets.push(offset);
            offset += s.data.len() as u64;
        }
        let shstrtab_offset = offset;
        offset += shstrtab.len() as u64;

        let shoff = if has_sections { offset } else { 0 };
        let shnum = if has_sections {
            self.sections.len() as u16 + 2
        } else {
            0
        };

        let mut e = Emitter::new(class, self.encoding);

        // e_ident
        let mut ident = [0u8; EI_NIDENT];
        ident[..4].copy_from_slice(&ELF_MAGIC);
        ident[4] = match class {
            ObjectClass::ThirtyTwoBit => ELFCLASS32,
            ObjectClass::SixtyFourBit => ELFCLASS64,
        };
        ident[5] = match self.encoding {
            DataEncoding::LittleEndian => ELFDATA2LSB,
            DataEncoding::BigEndian => ELFDATA2MSB,
        };
        ident[6] = 1;
        ident[7] = self.os_abi;
        e.bytes(&ident);

        e.u16(self.e_type)
            .u16(self.e_machine)
            .u32(1)
            .word(self.e_entry)
            .word(phoff)
            .word(shoff)
            .u32(self.e_flags)
            .u16(class.header_size() as u16)
            .u16(class.program_header_size() as u16)
            .u16(self.phnum.unwrap_or(self.phdrs.len() as u16))
            .u16(class.section_header_size() as u16)
            .u16(self.shnum.unwrap_or(shnum))
            .u16(self.shstrndx.unwrap_or(shnum.saturating_sub(1)));

        for p in &self.phdrs {
            match class {
                ObjectClass::ThirtyTwoBit => {
                    e.u32(p.p_type)
                        .word(p.p_offset)
                        .word(p.p_vaddr)
                        .word(p.p_paddr)
                        .word(p.p_filesz)
                        .word(p.p_memsz)
                        .u32(p.p_flags)
                        .word(p.p_align);
                }
                ObjectClass::SixtyFourBit => {
                    e.u32(p.p_type)
                        .u32(p.p_flags)
                        .word(p.p_offset)
                        .word(p.p_vaddr)
                        .word(p.p_paddr)
                        .word(p.p_filesz)
                        .word(p.p_memsz)
                        .word(p.p_align);
                }
            }
        }

        for s in &self.sections {
            e.bytes(&s.data);
        }
        e.bytes(&shstrtab);

        if has_sections {
            let (size0, link0, info0) = self.null_section;
            emit_shdr(&mut e, 0, 0, 0, 0, 0, size0, link0, info0, 0, 0);

            for ((s, name), data_offset) in self.sections.iter().zip(&name_offsets).zip(&data_offsets) {
                emit_shdr(
                    &mut e,
                    s.name_override.unwrap_or(*name),
                    s.sh_type,
                    s.sh_flags,
                    s.sh_addr,
                    *data_offset,
                    s.size_override.unwrap_or(s.data.len() as u64),
                    s.sh_link,
                    s.sh_info,
                    s.sh_addralign,
                    s.sh_entsize,
                );
            }

            emit_shdr(
                &mut e,
                shstrtab_name,
                3,
                0,
                0,
                shstrtab_offset,
                shstrtab.len() as u64,
                0,
                0,
                1,
                0,
            );
        }

        e.finish()
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_shdr(
    e: &mut Emitter,
    sh_name: u32,
    sh_type: u32,
    sh_flags: u64,
    sh_addr: u64,
    sh_offset: u64,
    sh_size: u64,
    sh_link: u32,
    sh_info: u32,
    sh_addralign: u64,
    sh_entsize: u64,
) {
    e.u32(sh_name)
        .u32(sh_type)
        .word(sh_flags)
        .word(sh_addr)
        .word(sh_offset)
        .word(sh_size)
        .u32(sh_link)
        .u32(sh_info)
        .word(sh_addralign)
        .word(sh_entsize);
}

/// Section indices used by [`sample_executable`].
pub mod sample {
    /// `.text`
    pub const TEXT: u16 = 1;
    /// `.dynstr`
    pub const DYNSTR: u16 = 2;
    /// `.dynamic`
    pub const DYNAMIC: u16 = 3;
    /// `.strtab`
    pub const STRTAB: u16 = 4;
    /// `.symtab`
    pub const SYMTAB: u16 = 5;
    /// `.dynsym`
    pub const DYNSYM: u16 = 6;
}

/// A small dynamically linked executable.
///
/// One `PT_LOAD` segment; a `.dynamic` section holding exactly
/// `[DT_NEEDED "libc.so", DT_NULL]`; a `.symtab` with the null symbol and a
/// defined global function `main` in `.text`; a `.dynsym` with the null
/// symbol and an undefined global function `puts`.
#[must_use]
pub fn sample_executable(class: ObjectClass, encoding: DataEncoding) -> Vec<u8> {
    let b = ElfBuilder::new(class, encoding);

    let mut dynstr = StrtabBuilder::new();
    let libc = dynstr.add("libc.so");
    let puts = dynstr.add("puts");

    let mut strtab = StrtabBuilder::new();
    let main = strtab.add("main");

    let mut dynamic = b.dyn_entry(1, u64::from(libc));
    dynamic.extend(b.dyn_entry(0, 0));

    let mut symtab = b.symbol(0, 0, 0, 0, 0, 0);
    symtab.extend(b.symbol(main, 0x12, 0, sample::TEXT, 0x0040_1000, 0x2a));

    let mut dynsym = b.symbol(0, 0, 0, 0, 0, 0);
    dynsym.extend(b.symbol(puts, 0x12, 0, 0, 0, 0));

    let sym_size = class.symbol_size();
    let dyn_size = class.dynamic_entry_size();

    b.segment(Phdr {
        p_type: 1,
        p_flags: 4 | 1,
        p_offset: 0,
        p_vaddr: 0x0040_0000,
        p_paddr: 0x0040_0000,
        p_filesz: 0x1000,
        p_memsz: 0x1000,
        p_align: 0x1000,
    })
    .section(
        Section::new(".text", 1, vec![0xc3; 0x2a])
            .flags(0x2 | 0x4)
            .addr(0x0040_1000)
            .align(16),
    )
    .section(Section::new(".dynstr", 3, dynstr.finish()).flags(0x2))
    .section(
        Section::new(".dynamic", 6, dynamic)
            .flags(0x1 | 0x2)
            .link(u32::from(sample::DYNSTR))
            .align(8)
            .entsize(dyn_size),
    )
    .section(Section::new(".strtab", 3, strtab.finish()))
    .section(
        Section::new(".symtab", 2, symtab)
            .link(u32::from(sample::STRTAB))
            .info(1)
            .align(8)
            .entsize(sym_size),
    )
    .section(
        Section::new(".dynsym", 11, dynsym)
            .flags(0x2)
            .link(u32::from(sample::DYNSTR))
            .info(1)
            .align(8)
            .entsize(sym_size),
    )
    .build()
}
