//! 0xCB-prefixed table: rotate/shift/SWAP, BIT, RES, SET.
//!
//! Register encoding is shared with the primary table (0=B...7=A, 6=(HL)).
//! Op 6 of the rotate/shift row is SWAP on the SM83, where the Z80 this
//! table is otherwise identical to has an undocumented SLL.

use super::{Flag, GbBus, Sm83};

fn rotate_shift(cpu: &mut Sm83, which: u8, val: u8) -> u8 {
    let (result, carry) = match which {
        0 => {
            let c = val >> 7;
            ((val << 1) | c, c)
        }
        1 => {
            let c = val & 1;
            ((val >> 1) | (c << 7), c)
        }
        2 => {
            let old_c = cpu.flag(Flag::C) as u8;
            let c = val >> 7;
            ((val << 1) | old_c, c)
        }
        3 => {
            let old_c = (cpu.flag(Flag::C) as u8) << 7;
            let c = val & 1;
            ((val >> 1) | old_c, c)
        }
        4 => {
            let c = val >> 7;
            (val << 1, c)
        }
        5 => {
            let c = val & 1;
            (((val as i8) >> 1) as u8, c)
        }
        6 => ((val << 4) | (val >> 4), 0),
        7 => {
            let c = val & 1;
            (val >> 1, c)
        }
        _ => unreachable!(),
    };

    cpu.set_flag(Flag::Z, result == 0);
    cpu.set_flag(Flag::N, false);
    cpu.set_flag(Flag::H, false);
    cpu.set_flag(Flag::C, carry != 0);
    result
}

pub fn execute_cb(cpu: &mut Sm83, op: u8, bus: &mut GbBus) -> u8 {
    let xx = (op >> 6) & 0x03;
    let yyy = (op >> 3) & 0x07;
    let zzz = op & 0x07;

    let val = cpu.get_reg8(zzz, bus);
    let hl_operand = zzz == 6;

    match xx {
        0 => {
            let result = rotate_shift(cpu, yyy, val);
            cpu.set_reg8(zzz, result, bus);
            if hl_operand { 16 } else { 8 }
        }
        1 => {
            let tested = val & (1 << yyy);
            cpu.set_flag(Flag::Z, tested == 0);
            cpu.set_flag(Flag::N, false);
            cpu.set_flag(Flag::H, true);
            if hl_operand { 12 } else { 8 }
        }
        2 => {
            cpu.set_reg8(zzz, val & !(1 << yyy), bus);
            if hl_operand { 16 } else { 8 }
        }
        3 => {
            cpu.set_reg8(zzz, val | (1 << yyy), bus);
            if hl_operand { 16 } else { 8 }
        }
        _ => unreachable!(),
    }
}
