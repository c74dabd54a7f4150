/// Identifies who is accessing the bus (for multi-CPU/DMA arbitration)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BusMaster {
    Cpu(usize), // CPU 0, CPU 1, etc.
    Dma,        // OAM DMA reads through the bus (sees ROM banking overlays)
}

/// Generic bus interface supporting halt/arbitration (TSC, RDY, BUSREQ, etc.)
pub trait Bus {
    type Address: Copy + Into<u64>; // u16 for 8-bit, u32 for 16/32-bit
    type Data; // u8 or u16

    fn read(&mut self, master: BusMaster, addr: Self::Address) -> Self::Data;
    fn write(&mut self, master: BusMaster, addr: Self::Address, data: Self::Data);

    /// Read from a CPU-separate I/O port space. Default maps to memory read;
    /// override for CPUs with a distinct I/O bus.
    fn io_read(&mut self, master: BusMaster, addr: Self::Address) -> Self::Data {
        self.read(master, addr)
    }

    /// Write to a CPU-separate I/O port space. Default maps to memory write;
    /// override for CPUs with a distinct I/O bus.
    fn io_write(&mut self, master: BusMaster, addr: Self::Address, data: Self::Data) {
        self.write(master, addr, data)
    }

    /// True if the given master must pause before its next bus cycle.
    fn is_halted_for(&self, master: BusMaster) -> bool;

    /// Generic interrupt query. CPUs pick what they need out of the result.
    fn check_interrupts(&self, target: BusMaster) -> InterruptState;
}

/// Coarse interrupt-line summary used to wake a halted CPU. The SM83's own
/// five-source IE/IF/IME scheme is decoded separately by the CPU itself,
/// which reads those registers directly off the bus rather than through
/// this struct — `irq` here only answers "is anything pending at all".
#[derive(Default, Clone, Copy, Debug)]
pub struct InterruptState {
    pub irq: bool,
}
