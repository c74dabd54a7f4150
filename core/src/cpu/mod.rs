use crate::core::component::BusMasterComponent;

/// Generic CPU interface.
pub trait Cpu: BusMasterComponent + CpuStateTrait {
    /// Reset to power-on state.
    fn reset(&mut self);

    /// Signal a pending interrupt line (implementation-defined decoding).
    fn signal_interrupt(&mut self, int: crate::core::bus::InterruptState);

    /// Query whether the CPU is halted (HALT/STOP) awaiting a wake event.
    fn is_sleeping(&self) -> bool;
}

pub mod state;
pub use state::{CpuStateTrait, Sm83State};

pub mod sm83;
pub use sm83::Sm83;
