use clap::Parser;
use dmg_core::core::machine::Machine;
use dmg_machine::GameBoyMachine;

mod config;
mod emulator;
mod input;
mod overlay;
mod screenshot;
mod video;

/// Minimal demo frontend driving a `GameBoyMachine` through SDL2.
#[derive(Parser)]
#[command(name = "dmg-frontend")]
struct Cli {
    /// Path to the 256-byte DMG bootstrap ROM image.
    #[arg(long)]
    boot: std::path::PathBuf,

    /// Path to the cartridge ROM image.
    rom: std::path::PathBuf,

    /// Window scale factor.
    #[arg(long, default_value_t = 0)]
    scale: u32,

    /// Path to a TOML config file; defaults to the platform config dir.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Run headlessly for N frames with no SDL window, then exit.
    #[arg(long)]
    frames: Option<u32>,
}

fn main() {
    let cli = Cli::parse();

    let bootstrap = std::fs::read(&cli.boot).unwrap_or_else(|e| {
        eprintln!("Failed to read bootstrap ROM {}: {e}", cli.boot.display());
        std::process::exit(1);
    });
    let rom = std::fs::read(&cli.rom).unwrap_or_else(|e| {
        eprintln!("Failed to read cartridge ROM {}: {e}", cli.rom.display());
        std::process::exit(1);
    });

    let mut machine = GameBoyMachine::new(bootstrap, rom).unwrap_or_else(|e| {
        eprintln!("Failed to initialize Game Boy: {e}");
        std::process::exit(1);
    });

    let config_path = cli.config.or_else(config::Config::default_path);
    let config = config_path
        .as_deref()
        .map(config::Config::load)
        .unwrap_or_default();

    machine.reset();

    if let Some(frames) = cli.frames {
        emulator::run_headless(&mut machine, frames);
        return;
    }

    let scale = if cli.scale != 0 { cli.scale } else { config.scale };
    let key_map = config.apply_overrides(input::default_key_map(machine.input_map()), machine.input_map());
    emulator::run(&mut machine, &key_map, scale);
}
