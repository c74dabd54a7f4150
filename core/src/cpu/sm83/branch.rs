//! Jumps, calls, returns and RST, including the four condition predicates.

use super::stack::{pop16, push16};
use super::{GbBus, Sm83};
use crate::core::bus::BusMaster;

/// NZ, Z, NC, C in condition-code order, as encoded in bits 3-4 of the
/// conditional jump/call/return opcodes.
fn condition_met(cpu: &Sm83, cc: u8) -> bool {
    match cc {
        0 => !cpu.flag(super::Flag::Z),
        1 => cpu.flag(super::Flag::Z),
        2 => !cpu.flag(super::Flag::C),
        3 => cpu.flag(super::Flag::C),
        _ => unreachable!(),
    }
}

fn fetch8(cpu: &mut Sm83, bus: &mut GbBus) -> u8 {
    let v = bus.read(BusMaster::Cpu(0), cpu.pc);
    cpu.pc = cpu.pc.wrapping_add(1);
    v
}

fn fetch16(cpu: &mut Sm83, bus: &mut GbBus) -> u16 {
    let lo = fetch8(cpu, bus) as u16;
    let hi = fetch8(cpu, bus) as u16;
    (hi << 8) | lo
}

/// Documented per-opcode cycle counts, independent of whether a
/// conditional branch is taken: JR=8, JP=12, CALL=12, RET=8, RST=32.
///
/// JR cc,e8 (0x20/0x28/0x30/0x38) and the unconditional JR e8 (0x18)
pub fn try_execute(cpu: &mut Sm83, op: u8, bus: &mut GbBus) -> Option<u8> {
    if op == 0x18 || (op & 0xE7) == 0x20 {
        let e8 = fetch8(cpu, bus) as i8;
        let taken = op == 0x18 || condition_met(cpu, (op >> 3) & 0x03);
        if taken {
            cpu.pc = cpu.pc.wrapping_add(e8 as i16 as u16);
        }
        return Some(8);
    }

    // JP cc,nn (0xC2/CA/D2/DA) and unconditional JP nn (0xC3)
    if op == 0xC3 || (op & 0xE7) == 0xC2 {
        let nn = fetch16(cpu, bus);
        let taken = op == 0xC3 || condition_met(cpu, (op >> 3) & 0x03);
        if taken {
            cpu.pc = nn;
        }
        return Some(12);
    }

    if op == 0xE9 {
        cpu.pc = cpu.get_hl();
        return Some(4);
    }

    // CALL cc,nn (0xC4/CC/D4/DC) and unconditional CALL nn (0xCD)
    if op == 0xCD || (op & 0xE7) == 0xC4 {
        let nn = fetch16(cpu, bus);
        let taken = op == 0xCD || condition_met(cpu, (op >> 3) & 0x03);
        if taken {
            push16(cpu, bus, cpu.pc);
            cpu.pc = nn;
        }
        return Some(12);
    }

    // RET cc (0xC0/C8/D0/D8) and unconditional RET (0xC9)
    if op == 0xC9 || (op & 0xE7) == 0xC0 {
        let taken = op == 0xC9 || condition_met(cpu, (op >> 3) & 0x03);
        if taken {
            cpu.pc = pop16(cpu, bus);
        }
        return Some(8);
    }

    if op == 0xD9 {
        cpu.pc = pop16(cpu, bus);
        cpu.ime = true;
        return Some(8);
    }

    // RST n: yyy*8 for yyy in 0..8
    if (op & 0xC7) == 0xC7 {
        let target = (((op >> 3) & 0x07) as u16) * 8;
        push16(cpu, bus, cpu.pc);
        cpu.pc = target;
        return Some(32);
    }

    None
}
