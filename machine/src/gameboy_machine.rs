//! Wraps [`GameBoy`] behind the host-agnostic [`Machine`] trait, the way
//! each arcade wrapper in this framework hides its board-specific state
//! behind the same interface for the frontend.

use dmg_core::core::machine::{InputButton, Machine};
use dmg_core::device::ppu::{HEIGHT, WIDTH};
use dmg_core::{CoreError, GameBoy};

pub const BTN_A: u8 = 0;
pub const BTN_B: u8 = 1;
pub const BTN_SELECT: u8 = 2;
pub const BTN_START: u8 = 3;
pub const BTN_RIGHT: u8 = 4;
pub const BTN_LEFT: u8 = 5;
pub const BTN_UP: u8 = 6;
pub const BTN_DOWN: u8 = 7;

const INPUTS: &[InputButton] = &[
    InputButton { id: BTN_A, name: "A" },
    InputButton { id: BTN_B, name: "B" },
    InputButton { id: BTN_SELECT, name: "Select" },
    InputButton { id: BTN_START, name: "Start" },
    InputButton { id: BTN_RIGHT, name: "Right" },
    InputButton { id: BTN_LEFT, name: "Left" },
    InputButton { id: BTN_UP, name: "Up" },
    InputButton { id: BTN_DOWN, name: "Down" },
];

pub struct GameBoyMachine {
    gb: GameBoy,
    bootstrap: Vec<u8>,
    rom: Vec<u8>,
    buttons: u8,
    framebuffer: Vec<u8>,
}

impl GameBoyMachine {
    pub fn new(bootstrap: Vec<u8>, rom: Vec<u8>) -> Result<Self, CoreError> {
        let gb = GameBoy::new(bootstrap.clone(), rom.clone())?;
        Ok(GameBoyMachine {
            gb,
            bootstrap,
            rom,
            buttons: 0xFF,
            framebuffer: vec![0u8; WIDTH * HEIGHT * 3],
        })
    }

    pub fn gameboy(&self) -> &GameBoy {
        &self.gb
    }
}

impl Machine for GameBoyMachine {
    fn display_size(&self) -> (u32, u32) {
        (WIDTH as u32, HEIGHT as u32)
    }

    fn run_frame(&mut self) {
        let buttons = self.buttons;
        self.gb.tick_frame(buttons, &mut self.framebuffer);
    }

    fn render_frame(&self, buffer: &mut [u8]) {
        let len = buffer.len().min(self.framebuffer.len());
        buffer[..len].copy_from_slice(&self.framebuffer[..len]);
    }

    fn set_input(&mut self, button: u8, pressed: bool) {
        let mask = 1u8 << button;
        if pressed {
            self.buttons &= !mask;
        } else {
            self.buttons |= mask;
        }
    }

    fn input_map(&self) -> &[InputButton] {
        INPUTS
    }

    fn reset(&mut self) {
        // Re-create from the same images rather than re-zeroing piecemeal:
        // matches power-on behavior exactly and can't drift from `GameBoy::new`.
        if let Ok(gb) = GameBoy::new(self.bootstrap.clone(), self.rom.clone()) {
            self.gb = gb;
        }
        self.buttons = 0xFF;
        self.framebuffer.iter_mut().for_each(|b| *b = 0);
    }
}
