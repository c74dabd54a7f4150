pub mod cartridge;
pub mod core;
pub mod cpu;
pub mod device;
pub mod error;
pub mod gameboy;
pub mod mbc;
pub mod memory;

pub use cartridge::Cartridge;
pub use error::CoreError;
pub use gameboy::GameBoy;
pub use memory::MemoryBus;

pub mod prelude {
    pub use crate::core::machine::{InputButton, Machine};
    pub use crate::core::{Bus, BusMaster, BusMasterComponent, Component, bus::InterruptState};
    pub use crate::cpu::Cpu;
    pub use crate::{Cartridge, CoreError, GameBoy, MemoryBus};
}
