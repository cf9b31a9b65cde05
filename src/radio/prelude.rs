//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24_radio::radio::prelude::*;
//! ```

use crate::types::{DataRate, FifoState, OperatingMode, PayloadMode, StatusFlags};

/// A trait to represent manipulation of a channel (aka frequency)
/// for an nRF24L01 transceiver.
pub trait RadioChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// Valid channels are in range [0, 125]; anything higher is rejected
    /// before touching the radio.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of the Data Rate
/// for an nRF24L01 transceiver.
pub trait RadioDataRate {
    type DataRateErrorType;

    /// Set the radio's Data Rate.
    ///
    /// Other bits in the RF setup register (like the PA level) are preserved.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;

    /// Get the currently configured Data Rate.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an nRF24L01 transceiver.
pub trait RadioCrc {
    type CrcErrorType;

    /// Set the radio's CRC (Cyclical Redundancy Checksum) width in bytes.
    ///
    /// Accepted values are 1 and 2. The new width is cached and takes effect
    /// on the next mode transition (like
    /// [`RadioMode::power_up_rx()`](fn@crate::radio::prelude::RadioMode::power_up_rx)),
    /// which is when the CONFIG register is rewritten.
    fn set_crc_width(&mut self, width: u8) -> Result<(), Self::CrcErrorType>;

    /// Get the cached CRC width in bytes.
    fn crc_width(&self) -> u8;
}

/// A trait to represent manipulation of addresses
/// for an nRF24L01 transceiver.
pub trait RadioAddressing {
    type AddressingErrorType;

    /// Set the address width (applies to all pipes).
    ///
    /// Accepted values are 3, 4, and 5 (bytes).
    fn set_address_width(&mut self, width: u8) -> Result<(), Self::AddressingErrorType>;

    /// Set the byte used to pad short addresses and short fixed-length payloads.
    fn set_padding(&mut self, padding: u8);

    /// Set the address this radio listens on (RX pipe 1).
    ///
    /// A shorter `address` is padded up to the configured address width;
    /// a longer one is truncated.
    fn set_local_address(&mut self, address: &[u8]) -> Result<(), Self::AddressingErrorType>;

    /// Set the address this radio transmits to.
    ///
    /// This writes both the TX address and the RX pipe 0 address so that
    /// auto-acknowledgement packets from the remote side are received.
    fn set_remote_address(&mut self, address: &[u8]) -> Result<(), Self::AddressingErrorType>;
}

/// A trait to represent manipulation of payload lengths (fixed or dynamic)
/// for an nRF24L01 transceiver.
pub trait RadioPayloadMode {
    type PayloadModeErrorType;

    /// Configure how payload lengths are negotiated.
    ///
    /// - [`PayloadMode::Fixed`] uses a static payload length on pipes 0 and 1
    ///   and disables the dynamic payload feature.
    /// - [`PayloadMode::Dynamic`] enables dynamic payload lengths on pipes 0 and 1.
    /// - [`PayloadMode::AckPayload`] additionally allows payloads to be attached
    ///   to automatic acknowledgement packets
    ///   (see [`RadioPayload::write_ack_payload()`]).
    fn set_payload_mode(&mut self, mode: PayloadMode) -> Result<(), Self::PayloadModeErrorType>;

    /// Get the cached payload mode.
    fn payload_mode(&self) -> PayloadMode;

    /// Get the dynamic length of the next available payload in the RX FIFO.
    ///
    /// If there is no payload in the RX FIFO, this function's
    /// returned value shall be considered invalid.
    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadModeErrorType>;
}

/// A trait to represent manipulation of the radio's operating mode
/// for an nRF24L01 transceiver.
pub trait RadioMode {
    type ModeErrorType;

    /// Put the radio into active RX mode.
    ///
    /// This powers the radio up, applies the cached CRC configuration,
    /// clears any pending interrupt events, and asserts the CE pin.
    fn power_up_rx(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Put the radio into TX mode.
    ///
    /// The radio starts transmitting once a payload is written to the TX FIFO
    /// (see [`RadioPayload::send()`]).
    fn power_up_tx(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Power down the radio.
    ///
    /// The nRF24L01 cannot receive nor transmit data when powered down.
    fn power_down(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Get the radio's current (cached) operating mode.
    fn mode(&self) -> OperatingMode;

    /// Is a previously started transmission still in flight?
    ///
    /// Once the radio reports the transmission finished (successfully or after
    /// exhausting all retries), the radio is put back into RX mode and this
    /// returns `false` from then on.
    fn is_transmitting(&mut self) -> Result<bool, Self::ModeErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an nRF24L01 transceiver.
pub trait RadioStatus {
    type StatusErrorType;

    /// Refresh the internal cache of the status byte
    /// (which is also saved from every SPI transaction).
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn status(&self) -> StatusFlags;

    /// Clear the radio's interrupt event flags.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// event. Setting a member to `false` leaves the corresponding flag untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an nRF24L01 transceiver.
pub trait RadioFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// A trait to represent payload transfer
/// for an nRF24L01 transceiver.
pub trait RadioPayload {
    type PayloadErrorType;

    /// Transmit a given payload.
    ///
    /// This puts the radio into TX mode, writes the payload to the TX FIFO,
    /// and pulses the CE pin to start the transmission. It does not wait for
    /// the transmission to finish; poll
    /// [`RadioMode::is_transmitting()`] for that.
    ///
    /// In fixed payload mode the payload is padded or truncated to the
    /// configured length. In dynamic modes the payload length must be
    /// in range [1, 32].
    fn send(&mut self, buf: &[u8]) -> Result<(), Self::PayloadErrorType>;

    /// Is there a payload ready to read?
    ///
    /// Returns `true` if a receive event is pending or the RX FIFO holds data.
    fn data_ready(&mut self) -> Result<bool, Self::PayloadErrorType>;

    /// Read one payload from the radio's RX FIFO into the specified `buf`.
    ///
    /// Returns the length of the payload that was read. If `buf` is shorter
    /// than the payload, the excess bytes are discarded.
    fn get_payload(&mut self, buf: &mut [u8]) -> Result<u8, Self::PayloadErrorType>;

    /// Write a `buf` to the radio's TX FIFO for use with automatic ACK packets.
    ///
    /// The given `buf` will be the outgoing payload added to an automatic ACK
    /// packet when acknowledging an incoming payload that was received on the
    /// specified `pipe`.
    ///
    /// This requires the [`PayloadMode::AckPayload`] mode
    /// (see [`RadioPayloadMode::set_payload_mode()`]), and the payload must be
    /// loaded into the TX FIFO _before_ the incoming payload is received.
    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8])
        -> Result<(), Self::PayloadErrorType>;
}

/// A trait to represent initialization
/// for an nRF24L01 transceiver.
pub trait RadioInit {
    type InitErrorType;

    /// Initialize the radio's hardware with library defaults.
    ///
    /// This function should only be called once after instantiating the radio
    /// object. It leaves the radio powered up in RX mode.
    fn init(&mut self) -> Result<(), Self::InitErrorType>;
}

/// A trait to represent debug output
/// for an nRF24L01 transceiver.
pub trait RadioDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
