//! `e_machine` values.

use super::{Class, Constant, c};

/// `EM_X86_64`.
pub const EM_X86_64: u16 = 62;
/// `EM_AARCH64`.
pub const EM_AARCH64: u16 = 183;
/// `EM_RISCV`.
pub const EM_RISCV: u16 = 243;

/// Every machine type the file header report names.
pub static MACHINES: &[Constant] = &[
    c(0, "EM_NONE", "no machine"),
    c(1, "EM_M32", "AT&T WE 32100"),
    c(2, "EM_SPARC", "SUN SPARC"),
    c(3, "EM_386", "Intel 80386"),
    c(4, "EM_68K", "Motorola m68k family"),
    c(5, "EM_88K", "Motorola m88k family"),
    c(6, "EM_IAMCU", "Intel MCU"),
    c(7, "EM_860", "Intel 80860"),
    c(8, "EM_MIPS", "MIPS R3000 big-endian"),
    c(9, "EM_S370", "IBM System/370"),
    c(10, "EM_MIPS_RS3_LE", "MIPS R3000 little-endian"),
    c(15, "EM_PARISC", "HPPA"),
    c(17, "EM_VPP500", "Fujitsu VPP500"),
    c(18, "EM_SPARC32PLUS", "Sun's \"v8plus\""),
    c(19, "EM_960", "Intel 80960"),
    c(20, "EM_PPC", "PowerPC"),
    c(21, "EM_PPC64", "PowerPC 64-bit"),
    c(22, "EM_S390", "IBM S390"),
    c(23, "EM_SPU", "IBM SPU/SPC"),
    c(36, "EM_V800", "NEC V800 series"),
    c(37, "EM_FR20", "Fujitsu FR20"),
    c(38, "EM_RH32", "TRW RH-32"),
    c(39, "EM_RCE", "Motorola RCE"),
    c(40, "EM_ARM", "ARM"),
    c(41, "EM_FAKE_ALPHA", "Digital Alpha"),
    c(42, "EM_SH", "Hitachi SH"),
    c(43, "EM_SPARCV9", "SPARC v9 64-bit"),
    c(44, "EM_TRICORE", "Siemens Tricore"),
    c(45, "EM_ARC", "Argonaut RISC Core"),
    c(46, "EM_H8_300", "Hitachi H8/300"),
    c(47, "EM_H8_300H", "Hitachi H8/300H"),
    c(48, "EM_H8S", "Hitachi H8S"),
    c(49, "EM_H8_500", "Hitachi H8/500"),
    c(50, "EM_IA_64", "Intel Merced"),
    c(51, "EM_MIPS_X", "Stanford MIPS-X"),
    c(52, "EM_COLDFIRE", "Motorola Coldfire"),
    c(53, "EM_68HC12", "Motorola M68HC12"),
    c(54, "EM_MMA", "Fujitsu MMA Multimedia Accelerator"),
    c(55, "EM_PCP", "Siemens PCP"),
    c(56, "EM_NCPU", "Sony nCPU embeeded RISC"),
    c(57, "EM_NDR1", "Denso NDR1 microprocessor"),
    c(58, "EM_STARCORE", "Motorola Start*Core processor"),
    c(59, "EM_ME16", "Toyota ME16 processor"),
    c(60, "EM_ST100", "STMicroelectronic ST100 processor"),
    c(61, "EM_TINYJ", "Advanced Logic Corp. Tinyj emb.fam"),
    c(62, "EM_X86_64", "AMD x86-64 architecture"),
    c(63, "EM_PDSP", "Sony DSP Processor"),
    c(64, "EM_PDP10", "Digital PDP-10"),
    c(65, "EM_PDP11", "Digital PDP-11"),
    c(66, "EM_FX66", "Siemens FX66 microcontroller"),
    c(67, "EM_ST9PLUS", "STMicroelectronics ST9+ 8/16 mc"),
    c(68, "EM_ST7", "STmicroelectronics ST7 8 bit mc"),
    c(69, "EM_68HC16", "Motorola MC68HC16 microcontroller"),
    c(70, "EM_68HC11", "Motorola MC68HC11 microcontroller"),
    c(71, "EM_68HC08", "Motorola MC68HC08 microcontroller"),
    c(72, "EM_68HC05", "Motorola MC68HC05 microcontroller"),
    c(73, "EM_SVX", "Silicon Graphics SVx"),
    c(74, "EM_ST19", "STMicroelectronics ST19 8 bit mc"),
    c(75, "EM_VAX", "Digital VAX"),
    c(76, "EM_CRIS", "Axis Communications 32-bit emb.proc"),
    c(77, "EM_JAVELIN", "Infineon Technologies 32-bit emb.proc"),
    c(78, "EM_FIREPATH", "Element 14 64-bit DSP Processor"),
    c(79, "EM_ZSP", "LSI Logic 16-bit DSP Processor"),
    c(80, "EM_MMIX", "Donald Knuth's educational 64-bit proc"),
    c(81, "EM_HUANY", "Harvard University machine-independent object files"),
    c(82, "EM_PRISM", "SiTera Prism"),
    c(83, "EM_AVR", "Atmel AVR 8-bit microcontroller"),
    c(84, "EM_FR30", "Fujitsu FR30"),
    c(85, "EM_D10V", "Mitsubishi D10V"),
    c(86, "EM_D30V", "Mitsubishi D30V"),
    c(87, "EM_V850", "NEC v850"),
    c(88, "EM_M32R", "Mitsubishi M32R"),
    c(89, "EM_MN10300", "Matsushita MN10300"),
    c(90, "EM_MN10200", "Matsushita MN10200"),
    c(91, "EM_PJ", "picoJava"),
    c(92, "EM_OPENRISC", "OpenRISC 32-bit embedded processor"),
    c(93, "EM_ARC_COMPACT", "ARC International ARCompact"),
    c(94, "EM_XTENSA", "Tensilica Xtensa Architecture"),
    c(95, "EM_VIDEOCORE", "Alphamosaic VideoCore"),
    c(96, "EM_TMM_GPP", "Thompson Multimedia General Purpose Proc"),
    c(97, "EM_NS32K", "National Semi. 32000"),
    c(98, "EM_TPC", "Tenor Network TPC"),
    c(99, "EM_SNP1K", "Trebia SNP 1000"),
    c(100, "EM_ST200", "STMicroelectronics ST200"),
    c(101, "EM_IP2K", "Ubicom IP2xxx"),
    c(102, "EM_MAX", "MAX processor"),
    c(103, "EM_CR", "National Semi. CompactRISC"),
    c(104, "EM_F2MC16", "Fujitsu F2MC16"),
    c(105, "EM_MSP430", "Texas Instruments msp430"),
    c(106, "EM_BLACKFIN", "Analog Devices Blackfin DSP"),
    c(107, "EM_SE_C33", "Seiko Epson S1C33 family"),
    c(108, "EM_SEP", "Sharp embedded microprocessor"),
    c(109, "EM_ARCA", "Arca RISC"),
    c(110, "EM_UNICORE", "PKU-Unity & MPRC Peking Uni. mc series"),
    c(111, "EM_EXCESS", "eXcess configurable cpu"),
    c(112, "EM_DXP", "Icera Semi. Deep Execution Processor"),
    c(113, "EM_ALTERA_NIOS2", "Altera Nios II"),
    c(114, "EM_CRX", "National Semi. CompactRISC CRX"),
    c(115, "EM_XGATE", "Motorola XGATE"),
    c(116, "EM_C166", "Infineon C16x/XC16x"),
    c(117, "EM_M16C", "Renesas M16C"),
    c(118, "EM_DSPIC30F", "Microchip Technology dsPIC30F"),
    c(119, "EM_CE", "Freescale Communication Engine RISC"),
    c(120, "EM_M32C", "Renesas M32C"),
    c(131, "EM_TSK3000", "Altium TSK3000"),
    c(132, "EM_RS08", "Freescale RS08"),
    c(133, "EM_SHARC", "Analog Devices SHARC family"),
    c(134, "EM_ECOG2", "Cyan Technology eCOG2"),
    c(135, "EM_SCORE7", "Sunplus S+core7 RISC"),
    c(136, "EM_DSP24", "New Japan Radio (NJR) 24-bit DSP"),
    c(137, "EM_VIDEOCORE3", "Broadcom VideoCore III"),
    c(138, "EM_LATTICEMICO32", "RISC for Lattice FPGA"),
    c(139, "EM_SE_C17", "Seiko Epson C17"),
    c(140, "EM_TI_C6000", "Texas Instruments TMS320C6000 DSP"),
    c(141, "EM_TI_C2000", "Texas Instruments TMS320C2000 DSP"),
    c(142, "EM_TI_C5500", "Texas Instruments TMS320C55x DSP"),
    c(143, "EM_TI_ARP32", "Texas Instruments App. Specific RISC"),
    c(144, "EM_TI_PRU", "Texas Instruments Prog. Realtime Unit"),
    c(160, "EM_MMDSP_PLUS", "STMicroelectronics 64bit VLIW DSP"),
    c(161, "EM_CYPRESS_M8C", "Cypress M8C"),
    c(162, "EM_R32C", "Renesas R32C"),
    c(163, "EM_TRIMEDIA", "NXP Semi. TriMedia"),
    c(164, "EM_QDSP6", "QUALCOMM DSP6"),
    c(165, "EM_8051", "Intel 8051 and variants"),
    c(166, "EM_STXP7X", "STMicroelectronics STxP7x"),
    c(167, "EM_NDS32", "Andes Tech. compact code emb. RISC"),
    c(168, "EM_ECOG1X", "Cyan Technology eCOG1X"),
    c(169, "EM_MAXQ30", "Dallas Semi. MAXQ30 mc"),
    c(170, "EM_XIMO16", "New Japan Radio (NJR) 16-bit DSP"),
    c(171, "EM_MANIK", "M2000 Reconfigurable RISC"),
    c(172, "EM_CRAYNV2", "Cray NV2 vector architecture"),
    c(173, "EM_RX", "Renesas RX"),
    c(174, "EM_METAG", "Imagination Tech. META"),
    c(175, "EM_MCST_ELBRUS", "MCST Elbrus"),
    c(176, "EM_ECOG16", "Cyan Technology eCOG16"),
    c(177, "EM_CR16", "National Semi. CompactRISC CR16"),
    c(178, "EM_ETPU", "Freescale Extended Time Processing Unit"),
    c(179, "EM_SLE9X", "Infineon Tech. SLE9X"),
    c(180, "EM_L10M", "Intel L10M"),
    c(181, "EM_K10M", "Intel K10M"),
    c(183, "EM_AARCH64", "ARM AARCH64"),
    c(185, "EM_AVR32", "Amtel 32-bit microprocessor"),
    c(186, "EM_STM8", "STMicroelectronics STM8"),
    c(187, "EM_TILE64", "Tilera TILE64"),
    c(188, "EM_TILEPRO", "Tilera TILEPro"),
    c(189, "EM_MICROBLAZE", "Xilinx MicroBlaze"),
    c(190, "EM_CUDA", "NVIDIA CUDA"),
    c(191, "EM_TILEGX", "Tilera TILE-Gx"),
    c(192, "EM_CLOUDSHIELD", "CloudShield"),
    c(193, "EM_COREA_1ST", "KIPO-KAIST Core-A 1st gen"),
    c(194, "EM_COREA_2ND", "KIPO-KAIST Core-A 2nd gen"),
    c(195, "EM_ARCV2", "Synopsys ARCv2 ISA"),
    c(196, "EM_OPEN8", "Open8 RISC"),
    c(197, "EM_RL78", "Renesas RL78"),
    c(198, "EM_VIDEOCORE5", "Broadcom VideoCore V"),
    c(199, "EM_78KOR", "Renesas 78KOR"),
    c(200, "EM_56800EX", "Freescale 56800EX DSC"),
    c(201, "EM_BA1", "Beyond BA1"),
    c(202, "EM_BA2", "Beyond BA2"),
    c(203, "EM_XCORE", "XMOS xCORE"),
    c(204, "EM_MCHP_PIC", "Microchip 8-bit PIC(r)"),
    c(205, "EM_INTELGT", "Intel Graphics Technology"),
    c(210, "EM_KM32", "KM211 KM32"),
    c(211, "EM_KMX32", "KM211 KMX32"),
    c(212, "EM_EMX16", "KM211 KMX16"),
    c(213, "EM_EMX8", "KM211 KMX8"),
    c(214, "EM_KVARC", "KM211 KVARC"),
    c(215, "EM_CDP", "Paneve CDP"),
    c(216, "EM_COGE", "Cognitive Smart Memory Processor"),
    c(217, "EM_COOL", "Bluechip CoolEngine"),
    c(218, "EM_NORC", "Nanoradio Optimized RISC"),
    c(219, "EM_CSR_KALIMBA", "CSR Kalimba"),
    c(220, "EM_Z80", "Zilog Z80"),
    c(221, "EM_VISIUM", "Controls and Data Services VISIUMcore"),
    c(222, "EM_FT32", "FTDI Chip FT32"),
    c(223, "EM_MOXIE", "Moxie processor"),
    c(224, "EM_AMDGPU", "AMD GPU"),
    c(243, "EM_RISCV", "RISC-V"),
    c(247, "EM_BPF", "Linux BPF -- in-kernel virtual machine"),
    c(252, "EM_CSKY", "C-SKY"),
    c(0x9026, "EM_ALPHA", "Alpha"),
];

/// Classify `e_machine`. There are no reserved machine ranges.
#[must_use]
pub fn machine(value: u16) -> Class {
    Class::of(MACHINES, u64::from(value), |_| None)
}
