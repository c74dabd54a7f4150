//! The aggregate machine: owns the SM83 core and the memory bus, and
//! drives the scanline-paced frame loop described by the per-frame
//! entry point contract.
//!
//! CPU and bus are separate fields here rather than one struct
//! implementing `Bus` for itself, so `cpu.step(&mut bus)` is an ordinary
//! split borrow — no raw-pointer aliasing trick needed.

use crate::cartridge::Cartridge;
use crate::cpu::sm83::{Sm83, TrapInfo};
use crate::device::Ppu;
use crate::error::CoreError;
use crate::memory::MemoryBus;

const JOYP: usize = 0xFF00;
const IF_ADDR: usize = 0xFF0F;

#[derive(Debug)]
pub struct GameBoy {
    pub cpu: Sm83,
    pub bus: MemoryBus,
    prev_buttons: u8,
}

impl GameBoy {
    pub const CYCLES_PER_LINE: u32 = 456;
    pub const SCANLINES_PER_FRAME: u32 = 154;

    pub fn new(bootstrap: Vec<u8>, rom: Vec<u8>) -> Result<Self, CoreError> {
        if bootstrap.len() != 0x100 {
            return Err(CoreError::InvalidImage {
                expected_min: 0x100,
                got: bootstrap.len(),
            });
        }
        let mut boot = [0u8; 0x100];
        boot.copy_from_slice(&bootstrap);
        let cartridge = Cartridge::load(rom)?;
        let bus = MemoryBus::new(boot, cartridge);
        Ok(GameBoy {
            cpu: Sm83::new(),
            bus,
            prev_buttons: 0xFF,
        })
    }

    pub fn trap(&self) -> Option<TrapInfo> {
        self.cpu.trap
    }

    /// Advance by one frame: 154 scanlines, each paced to
    /// `CYCLES_PER_LINE` T-states of instruction execution before the
    /// PPU composes that row. Stops early (leaving the rest of `fb`
    /// untouched) if the CPU has trapped on an undecodable opcode.
    pub fn tick_frame(&mut self, buttons: u8, fb: &mut [u8]) {
        self.update_joypad(buttons);

        for _ in 0..Self::SCANLINES_PER_FRAME {
            let mut line_cycles = 0u32;
            while line_cycles < Self::CYCLES_PER_LINE {
                if self.cpu.trap.is_some() {
                    return;
                }
                let cycles = self.cpu.step(&mut self.bus);
                self.bus.timer.step(cycles, &mut self.bus.memory);
                line_cycles += cycles as u32;
            }
            let ly = self.bus.memory[0xFF44];
            Ppu::render_scanline(&self.bus.memory, ly, fb);
            Ppu::advance_ly(&mut self.bus.memory);
        }
    }

    fn update_joypad(&mut self, buttons: u8) {
        let pressed_edge = self.prev_buttons & !buttons;
        if pressed_edge != 0 {
            self.bus.memory[IF_ADDR] |= 1 << 4;
        }
        self.prev_buttons = buttons;

        let select = self.bus.memory[JOYP];
        let dir_nibble = if select & 0x10 == 0 { (buttons >> 4) & 0x0F } else { 0x0F };
        let btn_nibble = if select & 0x20 == 0 { buttons & 0x0F } else { 0x0F };
        self.bus.memory[JOYP] = (select & 0xF0) | (dir_nibble & btn_nibble);
    }
}
