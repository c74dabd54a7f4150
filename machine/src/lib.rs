pub mod gameboy_machine;

pub use gameboy_machine::GameBoyMachine;
