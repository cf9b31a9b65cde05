//! This module defines types used by the driver traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps (the all-zero encoding in the RF setup register)
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The RF_DR_LOW and RF_DR_HIGH bits in the RF setup register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// How payload lengths are communicated between both ends of a link.
///
/// Both radios must use the same payload mode. A mismatch between a
/// transmitter's payload length and a receiver's expected fixed width
/// silently corrupts reception.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PayloadMode {
    /// Every packet carries exactly this many bytes (1 - 32).
    /// Shorter messages are padded, longer ones truncated.
    Fixed(u8),
    /// The chip encodes a per-packet length (1 - 32 bytes).
    Dynamic,
    /// Like [`PayloadMode::Dynamic`], but additionally allows data to be
    /// piggy-backed onto automatic acknowledgement replies.
    AckPayload,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PayloadMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PayloadMode::Fixed(n) => defmt::write!(fmt, "Fixed({=u8})", n),
            PayloadMode::Dynamic => defmt::write!(fmt, "Dynamic"),
            PayloadMode::AckPayload => defmt::write!(fmt, "AckPayload"),
        }
    }
}

impl Display for PayloadMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PayloadMode::Fixed(n) => write!(f, "Fixed({n})"),
            PayloadMode::Dynamic => write!(f, "Dynamic"),
            PayloadMode::AckPayload => write!(f, "AckPayload"),
        }
    }
}

/// The operating state the radio is currently driven into.
///
/// This is derived from the power bit, the primary-RX bit, the CE line
/// level, and whether a transmission is in flight. It is never re-read
/// from hardware.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperatingMode {
    /// The oscillator is stopped; only register access works.
    PowerDown,
    /// Powered, but neither listening nor transmitting.
    Standby,
    /// Actively listening on the open pipes.
    Receiving,
    /// A payload is being clocked out (possibly with retries).
    Transmitting,
}

#[cfg(feature = "defmt")]
impl defmt::Format for OperatingMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            OperatingMode::PowerDown => defmt::write!(fmt, "PowerDown"),
            OperatingMode::Standby => defmt::write!(fmt, "Standby"),
            OperatingMode::Receiving => defmt::write!(fmt, "Receiving"),
            OperatingMode::Transmitting => defmt::write!(fmt, "Transmitting"),
        }
    }
}

impl Display for OperatingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            OperatingMode::PowerDown => write!(f, "PowerDown"),
            OperatingMode::Standby => write!(f, "Standby"),
            OperatingMode::Receiving => write!(f, "Receiving"),
            OperatingMode::Transmitting => write!(f, "Transmitting"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

impl FifoState {
    /// Decodes the two FIFO_STATUS bits describing one FIFO.
    ///
    /// Returns [`None`] for the reserved encoding with both bits set.
    pub(crate) fn from_bits(bits: u8) -> Option<Self> {
        match bits & 3 {
            0 => Some(FifoState::Occupied),
            1 => Some(FifoState::Empty),
            2 => Some(FifoState::Full),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The status byte the radio shifts out on every bus exchange.
///
/// A snapshot of this is cached by the driver on every SPI transfer.
/// The `rx_dr`, `tx_ds` and `max_rt` flags are one-shot events that
/// stay latched until written back to the status register.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// Is there RX data ready to read?
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// Was TX data sent (and acknowledged, when auto-ack is active)?
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// Did a transmission exhaust its automatic retries?
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The number of the pipe that received the pending payload (7 if none).
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// Is the TX FIFO full?
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

impl StatusFlags {
    /// A mask to isolate only the one-shot event flags.
    /// Useful when writing the status register.
    pub(crate) const EVENT_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// the three one-shot event flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::EVENT_MASK)
    }

    /// Set the "RX data ready" flag.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// Set the "TX data sent" flag.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// Set the "max retries exceeded" flag.
    pub fn with_max_rt(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::MAX_RT_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::MAX_RT_OFFSET))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}
