//! Generates synthetic SM83 single-step test vectors: random initial
//! register/memory state, one `Sm83::step`, and the resulting state +
//! cycle count, serialized as JSON. Unlike an external fixture set this
//! can't catch a bug shared between the generator and the interpreter
//! under test, but it does pin down regressions and serves as the
//! harness `sm83_single_step_test.rs` replays against.
//!
//! Usage: gen_sm83_tests <opcode-hex> <count> > vectors.json

use dmg_cpu_validation::{Sm83CpuState, TracingBus};
use dmg_core::cpu::sm83::Sm83;
use rand::Rng;

const UNDEFINED_OPCODES: &[u8] = &[
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

fn random_state(rng: &mut impl Rng, pc: u16) -> Sm83CpuState {
    Sm83CpuState {
        pc,
        sp: rng.gen_range(0xC000..0xDFF0),
        a: rng.r#gen(),
        f: rng.r#gen::<u8>() & 0xF0,
        b: rng.r#gen(),
        c: rng.r#gen(),
        d: rng.r#gen(),
        e: rng.r#gen(),
        h: rng.r#gen(),
        l: rng.r#gen(),
        ime: false,
        ram: Vec::new(),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let opcode = u8::from_str_radix(args.get(1).map(String::as_str).unwrap_or("00"), 16)
        .expect("opcode must be a hex byte");
    let count: usize = args.get(2).map(|s| s.parse().unwrap()).unwrap_or(100);

    if UNDEFINED_OPCODES.contains(&opcode) || opcode == 0x10 || opcode == 0x76 {
        eprintln!("opcode {opcode:#04x} is undefined, STOP or HALT; skipping");
        return;
    }

    let mut rng = rand::thread_rng();
    let mut cases = Vec::with_capacity(count);

    for i in 0..count {
        let pc = 0xC000u16;
        let mut bus = TracingBus::new();
        let mut operand_bytes = [0u8; 3];
        operand_bytes[0] = opcode;
        operand_bytes[1] = rng.r#gen();
        operand_bytes[2] = rng.r#gen();
        bus.load(pc, &operand_bytes);

        let initial = random_state(&mut rng, pc);
        let mut cpu = Sm83::new();
        initial.apply_to(&mut cpu, &mut bus);
        bus.clear_cycles();

        let cycles = cpu.step(&mut bus);
        if cpu.trap.is_some() {
            eprintln!("opcode {opcode:#04x} trapped, aborting generation");
            return;
        }

        let touched: Vec<(u16, u8)> = bus
            .cycles
            .iter()
            .filter(|c| c.op == dmg_cpu_validation::BusOp::Write)
            .map(|c| (c.addr, c.data))
            .collect();

        let final_state = Sm83CpuState::from_cpu(&cpu, touched);
        cases.push(dmg_cpu_validation::Sm83TestCase {
            name: format!("{opcode:02x} {i}"),
            initial,
            final_state,
            cycles,
        });
    }

    println!("{}", serde_json::to_string_pretty(&cases).unwrap());
}
