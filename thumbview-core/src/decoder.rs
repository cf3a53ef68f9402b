//! Half-word classifier and branch target arithmetic.

use crate::bits::{extract, sign_extend};
use crate::opcode::{EncodingClass, Opcode};

/// Classifies one Thumb half-word into `(opcode, encoding class)`.
///
/// Only the low 16 bits of `v` are examined, so the combined 32-bit
/// encoding of a long-branch pair (second half-word in the low bits)
/// classifies the same as its halves. Patterns overlap on subsets of
/// bits; the rules below are ordered so an earlier match shadows a
/// later one. Unrecognized encodings yield `(Undef, Undefined)`.
pub fn decode(v: u32) -> (Opcode, EncodingClass) {
    use EncodingClass as C;
    use Opcode as Op;

    if extract(v, 11, 15) == 0b00011 {
        // Three-operand add/sub with register or 3-bit immediate.
        return match extract(v, 9, 10) {
            0 => (Op::Add, C::Add3),
            1 => (Op::Sub, C::Add3),
            // add rd, rs, #0 is the canonical flag-setting register move
            2 if extract(v, 6, 8) == 0 => (Op::Mov, C::Alu),
            2 => (Op::Add, C::Add3),
            _ => (Op::Sub, C::Add3),
        };
    }
    if extract(v, 13, 15) == 0b000 {
        // Shift by immediate; the 0b11 sub-code is add/sub above.
        return match extract(v, 11, 12) {
            0 => (Op::Lsl, C::Shift),
            1 => (Op::Lsr, C::Shift),
            _ => (Op::Asr, C::Shift),
        };
    }
    if extract(v, 13, 15) == 0b001 {
        // mov/cmp/add/sub with 8-bit immediate.
        return match extract(v, 11, 12) {
            0 => (Op::Mov, C::Immed8),
            1 => (Op::Cmp, C::Immed8),
            2 => (Op::Add, C::Immed8),
            _ => (Op::Sub, C::Immed8),
        };
    }
    if extract(v, 10, 15) == 0b010000 {
        // ALU register-register.
        return match extract(v, 6, 9) {
            0 => (Op::And, C::Alu),
            1 => (Op::Eor, C::Alu),
            2 => (Op::Lsl, C::Alu),
            3 => (Op::Lsr, C::Alu),
            4 => (Op::Asr, C::Alu),
            5 => (Op::Adc, C::Alu),
            6 => (Op::Sbc, C::Alu),
            7 => (Op::Ror, C::Alu),
            8 => (Op::Tst, C::Alu),
            9 => (Op::Neg, C::Alu),
            10 => (Op::Cmp, C::Alu),
            11 => (Op::Cmn, C::Alu),
            12 => (Op::Orr, C::Alu),
            13 => (Op::Mul, C::Alu),
            14 => (Op::Bic, C::Alu),
            _ => (Op::Mvn, C::Alu),
        };
    }
    if extract(v, 10, 15) == 0b010001 {
        // High-register ALU and branch-exchange.
        return match extract(v, 8, 9) {
            0 => (Op::Add, C::AluHi),
            1 => (Op::Cmp, C::AluHi),
            // mov r8, r8
            2 if extract(v, 0, 7) == 0xC0 => (Op::Nop, C::Nop),
            2 => (Op::Mov, C::AluHi),
            _ if extract(v, 7, 7) == 0 => (Op::Bx, C::BranchReg),
            _ => (Op::Blx, C::BranchReg),
        };
    }
    if extract(v, 11, 15) == 0b01001 {
        // PC-relative literal load.
        return (Op::Ldr, C::LoadPc);
    }
    if extract(v, 12, 15) == 0b0101 {
        // Load/store with register offset.
        return if extract(v, 9, 9) == 0 {
            match extract(v, 10, 11) {
                0 => (Op::Str, C::LoadReg),
                1 => (Op::Strb, C::LoadReg),
                2 => (Op::Ldr, C::LoadReg),
                _ => (Op::Ldrb, C::LoadReg),
            }
        } else {
            match extract(v, 10, 11) {
                0 => (Op::Strh, C::LoadReg),
                1 => (Op::Ldsb, C::LoadReg),
                2 => (Op::Ldrh, C::LoadReg),
                _ => (Op::Ldsh, C::LoadReg),
            }
        };
    }
    if extract(v, 13, 15) == 0b011 {
        // Load/store with 5-bit immediate offset.
        return match extract(v, 11, 12) {
            0 => (Op::Str, C::LoadImmed),
            1 => (Op::Ldr, C::LoadImmed),
            2 => (Op::Strb, C::LoadImmed),
            _ => (Op::Ldrb, C::LoadImmed),
        };
    }
    if extract(v, 12, 15) == 0b1000 {
        // Halfword load/store with immediate offset.
        return match extract(v, 11, 11) {
            0 => (Op::Strh, C::LoadImmed),
            _ => (Op::Ldrh, C::LoadImmed),
        };
    }
    if extract(v, 12, 15) == 0b1001 {
        // SP-relative load/store.
        return match extract(v, 11, 11) {
            0 => (Op::Str, C::LoadSp),
            _ => (Op::Ldr, C::LoadSp),
        };
    }
    if extract(v, 12, 15) == 0b1010 {
        // Address generation from pc or sp.
        return (Op::Add, C::AddPcSp);
    }
    if extract(v, 12, 15) == 0b1011 {
        return match extract(v, 8, 11) {
            0 if extract(v, 7, 7) == 0 => (Op::Add, C::AddSp),
            0 => (Op::Sub, C::AddSp),
            4 | 5 => (Op::Push, C::Push),
            12 | 13 => (Op::Pop, C::Push),
            15 => (Op::Bkpt, C::Interrupt),
            _ => (Op::Undef, C::Undefined),
        };
    }
    if extract(v, 12, 15) == 0b1100 {
        // Block load/store.
        return match extract(v, 11, 11) {
            0 => (Op::Stmia, C::LoadMultiple),
            _ => (Op::Ldmia, C::LoadMultiple),
        };
    }
    if extract(v, 12, 15) == 0b1101 {
        // Conditional branch, swi, or undefined.
        return match extract(v, 8, 11) {
            0 => (Op::Beq, C::Branch),
            1 => (Op::Bne, C::Branch),
            2 => (Op::Bhs, C::Branch),
            3 => (Op::Blo, C::Branch),
            4 => (Op::Bmi, C::Branch),
            5 => (Op::Bpl, C::Branch),
            6 => (Op::Bvs, C::Branch),
            7 => (Op::Bvc, C::Branch),
            8 => (Op::Bhi, C::Branch),
            9 => (Op::Bls, C::Branch),
            10 => (Op::Bge, C::Branch),
            11 => (Op::Blt, C::Branch),
            12 => (Op::Bgt, C::Branch),
            13 => (Op::Ble, C::Branch),
            14 => (Op::Undef, C::Undefined),
            _ => (Op::Swi, C::Interrupt),
        };
    }
    if extract(v, 11, 15) == 0b11100 {
        return (Op::B, C::Goto);
    }
    if extract(v, 11, 15) == 0b11110 || extract(v, 11, 15) == 0b11111 {
        // Either half of the long-branch pair.
        return (Op::Bl, C::Call);
    }
    if extract(v, 11, 15) == 0b11101 {
        return (Op::Blx, C::Call);
    }
    (Op::Undef, C::Undefined)
}

/// Reports whether execution cannot fall through past this instruction
/// within the current function.
pub fn is_return(opcode: Opcode, class: EncodingClass, raw: u32) -> bool {
    match opcode {
        Opcode::Bx => true,
        // add pc, ... / mov pc, ...
        Opcode::Add | Opcode::Mov => {
            class == EncodingClass::AluHi && (extract(raw, 0, 2) | extract(raw, 7, 7) << 3) == 15
        }
        // pop {..., pc}
        Opcode::Pop => extract(raw, 8, 8) == 1,
        _ => false,
    }
}

/// Target of a conditional branch at `addr`.
pub fn branch_target(raw: u32, addr: u32) -> u32 {
    addr.wrapping_add(4)
        .wrapping_add(sign_extend(extract(raw, 0, 7), 8).wrapping_mul(2))
}

/// Target of an unconditional 11-bit branch at `addr`.
pub fn goto_target(raw: u32, addr: u32) -> u32 {
    addr.wrapping_add(4)
        .wrapping_add(sign_extend(extract(raw, 0, 10), 11).wrapping_mul(2))
}

/// Target of a long branch-with-link at `addr`.
///
/// Expects the spliced layout: second half-word in the low 16 bits,
/// first half-word in the high 16 bits. A value holding only the low
/// half contributes only the low offset bits; a lone first half must be
/// shifted into the high position by the caller.
pub fn call_target(raw: u32, addr: u32) -> u32 {
    let offset = extract(raw, 0, 10) << 1 | extract(raw, 16, 26) << 12;
    addr.wrapping_add(4).wrapping_add(sign_extend(offset, 23))
}
