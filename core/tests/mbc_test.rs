use dmg_core::mbc::{BankingMode, MbcState};

fn mbc1() -> MbcState {
    MbcState::new(dmg_core::cartridge::MbcKind::Mbc1)
}

#[test]
fn rom_bank_register_ignores_writes_below_0x2000() {
    let mut mbc = mbc1();
    mbc.write(0x1000, 0x05);
    assert_eq!(mbc.rom_bank(), 1); // unaffected, that range only gates RAM enable
}

#[test]
fn rom_bank_zero_is_remapped_to_one() {
    let mut mbc = mbc1();
    mbc.write(0x2000, 0x00);
    assert_eq!(mbc.rom_bank(), 1);
}

#[test]
fn rom_bank_select_masks_to_five_bits() {
    let mut mbc = mbc1();
    mbc.write(0x2000, 0xFF);
    assert_eq!(mbc.rom_bank(), 0x1F);
}

#[test]
fn ram_enable_requires_low_nibble_0xa() {
    let mut mbc = mbc1();
    mbc.write(0x0000, 0x0A);
    assert!(mbc.ram_writable);
    mbc.write(0x0000, 0x00);
    assert!(!mbc.ram_writable);
}

#[test]
fn upper_bits_in_rom_mode_extend_rom_bank() {
    let mut mbc = mbc1();
    mbc.write(0x2000, 0x01); // low 5 bits = 1
    mbc.write(0x4000, 0x02); // high 2 bits = 2 -> bank (2<<5)|1 = 0x41
    assert_eq!(mbc.rom_bank(), 0x41);
}

#[test]
fn banking_mode_switch_to_ram_redirects_4000_writes() {
    let mut mbc = mbc1();
    mbc.write(0x6000, 0x01); // switch to RAM banking mode
    assert_eq!(mbc.mode, BankingMode::Ram);
    mbc.write(0x4000, 0x03);
    assert_eq!(mbc.ram_bank(), 3);
    assert_eq!(mbc.rom_bank(), 1); // untouched
}

#[test]
fn switching_back_to_rom_mode_resets_ram_bank() {
    let mut mbc = mbc1();
    mbc.write(0x6000, 0x01);
    mbc.write(0x4000, 0x03);
    mbc.write(0x6000, 0x00);
    assert_eq!(mbc.ram_bank(), 0);
    assert_eq!(mbc.mode, BankingMode::Rom);
}

#[test]
fn mbc_none_ignores_all_writes() {
    let mut mbc = MbcState::new(dmg_core::cartridge::MbcKind::None);
    mbc.write(0x2000, 0x07);
    mbc.write(0x0000, 0x0A);
    assert_eq!(mbc.rom_bank(), 1);
    assert!(!mbc.ram_writable);
}

#[test]
fn mbc2_packs_rom_bank_into_low_nibble_in_the_0x2000_region() {
    let mut mbc = MbcState::new(dmg_core::cartridge::MbcKind::Mbc2);
    mbc.write(0x2100, 0x05);
    assert_eq!(mbc.rom_bank(), 5);
    mbc.write(0x2100, 0x00); // zero remaps to 1
    assert_eq!(mbc.rom_bank(), 1);
}

#[test]
fn mbc2_ram_enable_gated_by_address_bit4_below_0x2000() {
    let mut mbc = MbcState::new(dmg_core::cartridge::MbcKind::Mbc2);
    mbc.write(0x0000, 0x0A); // bit 4 clear -> ram enable honored
    assert!(mbc.ram_writable);
    mbc.write(0x0010, 0x00); // bit 4 set -> write ignored, not a disable
    assert!(mbc.ram_writable);
}
