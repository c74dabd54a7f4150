//! Cartridge metadata decoded from the header, kept separate from the
//! mutable MBC bank-select state (`mbc::MbcState`) it configures.

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbcKind {
    None,
    Mbc1,
    Mbc2,
}

const TYPE_ADDR: usize = 0x147;
const ROM_SIZE_ADDR: usize = 0x148;
const TITLE_RANGE: std::ops::Range<usize> = 0x134..0x144;

#[derive(Debug, Clone)]
pub struct Cartridge {
    pub rom: Vec<u8>,
    pub kind: MbcKind,
    pub rom_bank_count: u32,
    pub title: String,
}

impl Cartridge {
    pub fn load(rom: Vec<u8>) -> Result<Self, CoreError> {
        if rom.len() < 0x4000 {
            return Err(CoreError::InvalidImage {
                expected_min: 0x4000,
                got: rom.len(),
            });
        }

        let kind = match rom[TYPE_ADDR] {
            0x00 => MbcKind::None,
            0x01..=0x03 => MbcKind::Mbc1,
            0x05 | 0x06 => MbcKind::Mbc2,
            other => return Err(CoreError::UnsupportedCartridge(other)),
        };

        let rom_bank_count = match rom[ROM_SIZE_ADDR] {
            n @ 0x00..=0x06 => 2u32 << n,
            0x52 => 72,
            0x53 => 80,
            0x54 => 96,
            other => return Err(CoreError::UnsupportedRomSize(other)),
        };

        let title = rom[TITLE_RANGE]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| b as char)
            .collect();

        Ok(Cartridge {
            rom,
            kind,
            rom_bank_count,
            title,
        })
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }
}
