//! Operand rendering, dispatched on encoding class.

use std::fmt;

use crate::bits::extract;
use crate::decoder::{branch_target, call_target, goto_target};
use crate::image::Image;
use crate::opcode::{EncodingClass, Opcode};

pub const REG_NAMES: [&str; 16] = [
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "sp", "lr",
    "pc",
];

/// Register index 0..=15, printed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg(pub u32);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_assert!(self.0 <= 15, "invalid register number: {}", self.0);
        f.write_str(REG_NAMES[self.0 as usize & 0xF])
    }
}

/// Register bitmap, printed as a brace-enclosed ascending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regset(pub u32);

impl fmt::Display for Regset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut count = 0;
        for i in 0..16 {
            if self.0 >> i & 1 == 1 {
                if count > 0 {
                    f.write_str(",")?;
                }
                f.write_str(REG_NAMES[i])?;
                count += 1;
            }
        }
        f.write_str("}")
    }
}

/// Unsigned literal, printed in upper-case hex: a single digit for
/// values 0..=15, otherwise zero-padded to even length and prefixed
/// with `x` (`0`, `F`, `x10`, `x0100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Immed(pub u32);

impl fmt::Display for Immed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = format!("{:X}", self.0);
        if s.len() > 1 {
            if s.len() % 2 != 0 {
                s.insert(0, '0');
            }
            write!(f, "x{}", s)
        } else {
            f.write_str(&s)
        }
    }
}

/// Renders the operand text for one decoded instruction.
///
/// `addr` is the instruction's own address (PC-relative operands read
/// as `addr + 4`); the image is consulted only for literal-pool loads.
/// `Branch`, `Goto` and `Call` render the computed target address — the
/// printer substitutes labels for the first two where a link exists.
pub fn format_operands(
    opcode: Opcode,
    class: EncodingClass,
    raw: u32,
    addr: u32,
    image: &Image,
) -> String {
    match class {
        EncodingClass::Undefined | EncodingClass::Nop => String::new(),
        EncodingClass::Add3 => format_add3(raw),
        EncodingClass::AddPcSp => format_add_pc_sp(raw),
        EncodingClass::AddSp => format_add_sp(raw),
        EncodingClass::Alu => format_alu(raw),
        EncodingClass::AluHi => format_alu_hi(raw),
        EncodingClass::Branch => format!("{:08X}", branch_target(raw, addr)),
        EncodingClass::BranchReg => Reg(extract(raw, 3, 6)).to_string(),
        EncodingClass::Call => format!("{:08X}", call_target(raw, addr)),
        EncodingClass::Goto => format!("{:08X}", goto_target(raw, addr)),
        EncodingClass::Immed8 => format_immed8(raw),
        EncodingClass::Interrupt => format!("#{}", Immed(extract(raw, 0, 7))),
        EncodingClass::LoadImmed => format_load_immed(opcode, raw),
        EncodingClass::LoadMultiple => format_load_multiple(raw),
        EncodingClass::LoadPc => format_load_pc(raw, addr, image),
        EncodingClass::LoadReg => format_load_reg(raw),
        EncodingClass::LoadSp => format_load_sp(raw),
        EncodingClass::Push => format_push(opcode, raw),
        EncodingClass::Shift => format_shift(opcode, raw),
    }
}

fn format_add3(raw: u32) -> String {
    let d = Reg(extract(raw, 0, 2));
    let s = Reg(extract(raw, 3, 5));
    let n = extract(raw, 6, 8);
    if extract(raw, 10, 10) == 1 {
        format!("{}, {}, #{}", d, s, Immed(n))
    } else {
        format!("{}, {}, {}", d, s, Reg(n))
    }
}

fn format_alu(raw: u32) -> String {
    let d = Reg(extract(raw, 0, 2));
    let s = Reg(extract(raw, 3, 5));
    format!("{}, {}", d, s)
}

fn format_alu_hi(raw: u32) -> String {
    let d = Reg(extract(raw, 0, 2) | extract(raw, 7, 7) << 3);
    let s = Reg(extract(raw, 3, 6));
    format!("{}, {}", d, s)
}

fn format_immed8(raw: u32) -> String {
    let d = Reg(extract(raw, 8, 10));
    let n = Immed(extract(raw, 0, 7));
    format!("{}, #{}", d, n)
}

fn format_shift(opcode: Opcode, raw: u32) -> String {
    let d = Reg(extract(raw, 0, 2));
    let s = Reg(extract(raw, 3, 5));
    let mut shift = extract(raw, 6, 10);
    // lsr/asr by zero encode a full 32-bit shift
    if shift == 0 && opcode != Opcode::Lsl {
        shift = 32;
    }
    format!("{}, {}, #{}", d, s, Immed(shift))
}

fn format_load_pc(raw: u32, addr: u32, image: &Image) -> String {
    let d = Reg(extract(raw, 8, 10));
    let pool = addr.wrapping_add(4).wrapping_add(extract(raw, 0, 7) * 4) & !3;
    let literal = image.read_word(pool).unwrap_or(0);
    format!("{},=#{}", d, Immed(literal))
}

fn format_load_sp(raw: u32) -> String {
    let d = Reg(extract(raw, 8, 10));
    let n = extract(raw, 0, 7) * 4;
    if n == 0 {
        format!("{},[sp]", d)
    } else {
        format!("{},[sp, #{}]", d, Immed(n))
    }
}

fn format_add_pc_sp(raw: u32) -> String {
    let d = Reg(extract(raw, 8, 10));
    let n = Immed(extract(raw, 0, 7) * 4);
    let b = if extract(raw, 11, 11) == 1 {
        Reg(13)
    } else {
        Reg(15)
    };
    format!("{}, {}, #{}", d, b, n)
}

fn format_add_sp(raw: u32) -> String {
    let n = Immed(extract(raw, 0, 6) * 4);
    format!("sp, #{}", n)
}

fn format_load_reg(raw: u32) -> String {
    let d = Reg(extract(raw, 0, 2));
    let b = Reg(extract(raw, 3, 5));
    let o = Reg(extract(raw, 6, 8));
    format!("{},[{}, {}]", d, b, o)
}

fn format_load_immed(opcode: Opcode, raw: u32) -> String {
    let d = Reg(extract(raw, 0, 2));
    let b = Reg(extract(raw, 3, 5));
    let mut n = extract(raw, 6, 10);
    match opcode {
        Opcode::Ldr | Opcode::Str => n *= 4,
        Opcode::Ldrh | Opcode::Strh => n *= 2,
        _ => {}
    }
    if n == 0 {
        format!("{},[{}]", d, b)
    } else {
        format!("{},[{}, #{}]", d, b, Immed(n))
    }
}

fn format_load_multiple(raw: u32) -> String {
    let b = Reg(extract(raw, 8, 10));
    let r = Regset(extract(raw, 0, 7));
    format!("{}!,{}", b, r)
}

fn format_push(opcode: Opcode, raw: u32) -> String {
    let mut r = extract(raw, 0, 7);
    // the extra bit is lr for push, pc for pop
    match opcode {
        Opcode::Push => r |= extract(raw, 8, 8) << 14,
        Opcode::Pop => r |= extract(raw, 8, 8) << 15,
        _ => {}
    }
    Regset(r).to_string()
}
