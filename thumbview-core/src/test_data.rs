//! Test data shared between benchmarks and unit tests: sample Thumb
//! encodings with their expected mnemonic and operand text.

#[derive(Debug, Clone)]
pub struct TestInstruction {
    pub raw: u32,
    pub mnemonic: &'static str,
    pub operands: &'static str,
    pub description: &'static str,
    pub addr: Option<u32>, // some encodings are PC-relative
}

/// Sample encodings covering every encoding class except `LoadPc`,
/// which needs a literal pool and is exercised by the walk scenarios.
pub const SAMPLE_INSTRUCTIONS: &[TestInstruction] = &[
    // Three-operand add/sub
    TestInstruction {
        raw: 0x1853,
        mnemonic: "add",
        operands: "r3, r2, r1",
        description: "ADD register",
        addr: None,
    },
    TestInstruction {
        raw: 0x1A53,
        mnemonic: "sub",
        operands: "r3, r2, r1",
        description: "SUB register",
        addr: None,
    },
    TestInstruction {
        raw: 0x1D4A,
        mnemonic: "add",
        operands: "r2, r1, #5",
        description: "ADD 3-bit immediate",
        addr: None,
    },
    TestInstruction {
        raw: 0x1C1C,
        mnemonic: "mov",
        operands: "r4, r3",
        description: "ADD #0 canonicalized to MOV",
        addr: None,
    },
    TestInstruction {
        raw: 0x1E40,
        mnemonic: "sub",
        operands: "r0, r0, #1",
        description: "SUB 3-bit immediate",
        addr: None,
    },
    // Shifts
    TestInstruction {
        raw: 0x0088,
        mnemonic: "lsl",
        operands: "r0, r1, #2",
        description: "LSL immediate",
        addr: None,
    },
    TestInstruction {
        raw: 0x0812,
        mnemonic: "lsr",
        operands: "r2, r2, #x20",
        description: "LSR by zero means 32",
        addr: None,
    },
    TestInstruction {
        raw: 0x17FF,
        mnemonic: "asr",
        operands: "r7, r7, #x1F",
        description: "ASR immediate",
        addr: None,
    },
    // 8-bit immediate
    TestInstruction {
        raw: 0x2000,
        mnemonic: "mov",
        operands: "r0, #0",
        description: "MOV immediate",
        addr: None,
    },
    TestInstruction {
        raw: 0x29FF,
        mnemonic: "cmp",
        operands: "r1, #xFF",
        description: "CMP immediate",
        addr: None,
    },
    TestInstruction {
        raw: 0x3001,
        mnemonic: "add",
        operands: "r0, #1",
        description: "ADD immediate",
        addr: None,
    },
    TestInstruction {
        raw: 0x3F10,
        mnemonic: "sub",
        operands: "r7, #x10",
        description: "SUB immediate",
        addr: None,
    },
    // ALU register-register
    TestInstruction {
        raw: 0x4008,
        mnemonic: "and",
        operands: "r0, r1",
        description: "AND register",
        addr: None,
    },
    TestInstruction {
        raw: 0x4249,
        mnemonic: "neg",
        operands: "r1, r1",
        description: "NEG register",
        addr: None,
    },
    TestInstruction {
        raw: 0x435A,
        mnemonic: "mul",
        operands: "r2, r3",
        description: "MUL register",
        addr: None,
    },
    TestInstruction {
        raw: 0x43C0,
        mnemonic: "mvn",
        operands: "r0, r0",
        description: "MVN register",
        addr: None,
    },
    // High-register ops
    TestInstruction {
        raw: 0x448C,
        mnemonic: "add",
        operands: "r12, r1",
        description: "ADD high register",
        addr: None,
    },
    TestInstruction {
        raw: 0x4596,
        mnemonic: "cmp",
        operands: "lr, r2",
        description: "CMP high register",
        addr: None,
    },
    TestInstruction {
        raw: 0x4687,
        mnemonic: "mov",
        operands: "pc, r0",
        description: "MOV to pc",
        addr: None,
    },
    TestInstruction {
        raw: 0x46C0,
        mnemonic: "nop",
        operands: "",
        description: "MOV r8, r8 is nop",
        addr: None,
    },
    // Branch-exchange
    TestInstruction {
        raw: 0x4770,
        mnemonic: "bx",
        operands: "lr",
        description: "BX lr",
        addr: None,
    },
    TestInstruction {
        raw: 0x4798,
        mnemonic: "blx",
        operands: "r3",
        description: "BLX register",
        addr: None,
    },
    // Load/store register offset
    TestInstruction {
        raw: 0x5088,
        mnemonic: "str",
        operands: "r0,[r1, r2]",
        description: "STR register offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x5D63,
        mnemonic: "ldrb",
        operands: "r3,[r4, r5]",
        description: "LDRB register offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x5B1A,
        mnemonic: "ldrh",
        operands: "r2,[r3, r4]",
        description: "LDRH register offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x5E88,
        mnemonic: "ldsh",
        operands: "r0,[r1, r2]",
        description: "LDSH register offset",
        addr: None,
    },
    // Load/store immediate offset
    TestInstruction {
        raw: 0x6008,
        mnemonic: "str",
        operands: "r0,[r1]",
        description: "STR zero offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x685A,
        mnemonic: "ldr",
        operands: "r2,[r3, #4]",
        description: "LDR word-scaled offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x70EC,
        mnemonic: "strb",
        operands: "r4,[r5, #3]",
        description: "STRB byte offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x7FC8,
        mnemonic: "ldrb",
        operands: "r0,[r1, #x1F]",
        description: "LDRB max offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x8048,
        mnemonic: "strh",
        operands: "r0,[r1, #2]",
        description: "STRH halfword-scaled offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x883E,
        mnemonic: "ldrh",
        operands: "r6,[r7]",
        description: "LDRH zero offset",
        addr: None,
    },
    // SP-relative load/store
    TestInstruction {
        raw: 0x9000,
        mnemonic: "str",
        operands: "r0,[sp]",
        description: "STR sp-relative zero offset",
        addr: None,
    },
    TestInstruction {
        raw: 0x9902,
        mnemonic: "ldr",
        operands: "r1,[sp, #8]",
        description: "LDR sp-relative",
        addr: None,
    },
    // Address generation
    TestInstruction {
        raw: 0xA001,
        mnemonic: "add",
        operands: "r0, pc, #4",
        description: "ADD pc-relative address",
        addr: None,
    },
    TestInstruction {
        raw: 0xAD10,
        mnemonic: "add",
        operands: "r5, sp, #x40",
        description: "ADD sp-relative address",
        addr: None,
    },
    TestInstruction {
        raw: 0xB001,
        mnemonic: "add",
        operands: "sp, #4",
        description: "ADD to sp",
        addr: None,
    },
    TestInstruction {
        raw: 0xB088,
        mnemonic: "sub",
        operands: "sp, #x20",
        description: "SUB from sp",
        addr: None,
    },
    // Push/pop
    TestInstruction {
        raw: 0xB401,
        mnemonic: "push",
        operands: "{r0}",
        description: "PUSH single register",
        addr: None,
    },
    TestInstruction {
        raw: 0xB580,
        mnemonic: "push",
        operands: "{r7,lr}",
        description: "PUSH with lr",
        addr: None,
    },
    TestInstruction {
        raw: 0xBC03,
        mnemonic: "pop",
        operands: "{r0,r1}",
        description: "POP registers",
        addr: None,
    },
    TestInstruction {
        raw: 0xBD80,
        mnemonic: "pop",
        operands: "{r7,pc}",
        description: "POP with pc",
        addr: None,
    },
    // Block load/store
    TestInstruction {
        raw: 0xC006,
        mnemonic: "stmia",
        operands: "r0!,{r1,r2}",
        description: "STMIA",
        addr: None,
    },
    TestInstruction {
        raw: 0xCB07,
        mnemonic: "ldmia",
        operands: "r3!,{r0,r1,r2}",
        description: "LDMIA",
        addr: None,
    },
    // Interrupts
    TestInstruction {
        raw: 0xBFAB,
        mnemonic: "bkpt",
        operands: "#xAB",
        description: "BKPT",
        addr: None,
    },
    TestInstruction {
        raw: 0xDF05,
        mnemonic: "swi",
        operands: "#5",
        description: "SWI",
        addr: None,
    },
    // Branches (numeric targets; the printer swaps in labels)
    TestInstruction {
        raw: 0xD001,
        mnemonic: "beq",
        operands: "08000006",
        description: "BEQ forward",
        addr: Some(0x0800_0000),
    },
    TestInstruction {
        raw: 0xD1FD,
        mnemonic: "bne",
        operands: "08000002",
        description: "BNE backward",
        addr: Some(0x0800_0004),
    },
    TestInstruction {
        raw: 0xE000,
        mnemonic: "b",
        operands: "08000004",
        description: "B forward",
        addr: Some(0x0800_0000),
    },
    TestInstruction {
        raw: 0xE7FE,
        mnemonic: "b",
        operands: "08000000",
        description: "B to self",
        addr: Some(0x0800_0000),
    },
    // Long branches
    TestInstruction {
        raw: 0xF000_F802,
        mnemonic: "bl",
        operands: "08000008",
        description: "BL forward pair",
        addr: Some(0x0800_0000),
    },
    TestInstruction {
        raw: 0xF7FF_FFFE,
        mnemonic: "bl",
        operands: "08000000",
        description: "BL backward pair",
        addr: Some(0x0800_0000),
    },
    // Undefined encodings
    TestInstruction {
        raw: 0xDE00,
        mnemonic: "undefined",
        operands: "",
        description: "undefined condition slot",
        addr: None,
    },
    TestInstruction {
        raw: 0xBEAB,
        mnemonic: "undefined",
        operands: "",
        description: "undefined misc slot",
        addr: None,
    },
];

/// Representative half-words for decoder benchmarks.
pub const PERF_TEST_OPCODES: &[(u32, &str)] = &[
    (0x1853, "add_register"),
    (0x0088, "shift_immediate"),
    (0x2000, "mov_immediate"),
    (0x4008, "alu_register"),
    (0x4687, "alu_high_register"),
    (0x4770, "bx"),
    (0x4801, "ldr_pc_relative"),
    (0x5088, "str_register_offset"),
    (0x685A, "ldr_immediate_offset"),
    (0x9902, "ldr_sp_relative"),
    (0xB580, "push"),
    (0xCB07, "ldmia"),
    (0xD1FD, "conditional_branch"),
    (0xE7FE, "unconditional_branch"),
    (0xF000, "bl_first_half"),
    (0xBEAB, "undefined"),
];
