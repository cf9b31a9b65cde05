use bitfield_struct::bitfield;

#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(4)]
    _padding: u8,

    /// Enable the CRC on transmitted packets.
    #[bits(1, default = true)]
    pub en_crc: bool,

    /// Use a 2-byte CRC instead of a 1-byte CRC.
    #[bits(1, default = true)]
    pub crco: bool,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub const fn crc_width(&self) -> u8 {
        self.crco() as u8 + 1
    }

    pub fn with_crc_width(self, width: u8) -> Self {
        self.with_crco(width == 2)
    }

    pub fn as_rx(self) -> Self {
        Self::from_bits(self.into_bits() | 1)
    }

    pub fn as_tx(self) -> Self {
        Self::from_bits(self.into_bits() & !1)
    }
}

// unit tests found in crate::radio::nrf24::crc::test and
// crate::radio::nrf24::mode::test
