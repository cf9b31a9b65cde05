use super::{commands, mnemonics, registers};
use crate::radio::{
    prelude::{RadioFifo, RadioMode, RadioPayload, RadioPayloadMode},
    Error, Nrf24,
};
use crate::PayloadMode;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioPayload for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type PayloadErrorType = Error<SPI::Error, DO::Error>;

    fn send(&mut self, buf: &[u8]) -> Result<(), Self::PayloadErrorType> {
        let mut payload = [0u8; 32];
        let length = match self._payload_mode {
            PayloadMode::Fixed(length) => {
                let length = length as usize;
                payload[..length].fill(self._padding);
                let used = buf.len().min(length);
                payload[..used].copy_from_slice(&buf[..used]);
                length
            }
            _ => {
                if buf.is_empty() || buf.len() > 32 {
                    return Err(Error::PayloadTooLong);
                }
                payload[..buf.len()].copy_from_slice(buf);
                buf.len()
            }
        };
        self.spi_read(0, commands::NOP)?;
        if self._status.tx_full() || self._status.max_rt() {
            // a stuck payload from a failed transmission would block this one
            self.flush_tx()?;
        }
        self.spi_write_buf(commands::W_TX_PAYLOAD, &payload[..length])?;
        self.power_up_tx()
    }

    fn data_ready(&mut self) -> Result<bool, Self::PayloadErrorType> {
        self.spi_read(0, commands::NOP)?;
        if self._status.rx_dr() {
            return Ok(true);
        }
        // the event flag may already be cleared while the FIFO still holds data
        self.spi_read(1, registers::FIFO_STATUS)?;
        Ok(self._buf[1] & mnemonics::FIFO_RX_EMPTY == 0)
    }

    fn get_payload(&mut self, buf: &mut [u8]) -> Result<u8, Self::PayloadErrorType> {
        let count = match self._payload_mode {
            PayloadMode::Fixed(length) => length,
            _ => self.get_dynamic_payload_length()?,
        };
        self.spi_read(count, commands::R_RX_PAYLOAD)?;
        let used = (count as usize).min(buf.len());
        buf[..used].copy_from_slice(&self._buf[1..used + 1]);
        self.with_ce_low(|radio| radio.spi_write_byte(registers::STATUS, mnemonics::MASK_RX_DR))?;
        Ok(count)
    }

    fn write_ack_payload(
        &mut self,
        pipe: u8,
        buf: &[u8],
    ) -> Result<(), Self::PayloadErrorType> {
        if pipe > 5 || self._payload_mode != PayloadMode::AckPayload {
            return Err(Error::InvalidConfiguration);
        }
        if buf.is_empty() || buf.len() > 32 {
            return Err(Error::PayloadTooLong);
        }
        self.spi_write_buf(commands::W_ACK_PAYLOAD | pipe, buf)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::prelude::RadioPayload;
    use crate::radio::nrf24::{commands, registers};
    use crate::radio::Error;
    use crate::{spi_test_expects, test::mk_radio, PayloadMode};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn send_fixed_pads_short_payload() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let mut payload = vec![b' '; 9];
        payload[0] = commands::W_TX_PAYLOAD;
        payload[1] = b'h';
        payload[2] = b'i';
        let spi_expectations = spi_test_expects![
            // status check first
            (vec![commands::NOP], vec![0xEu8]),
            (payload, vec![0u8; 9]),
            // power_up_tx()
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Eu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_mode = PayloadMode::Fixed(8);
        radio.send(b"hi").unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_fixed_truncates_long_payload() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            // status check first
            (vec![commands::NOP], vec![0xEu8]),
            // only the configured width goes out
            (
                vec![commands::W_TX_PAYLOAD, b'l', b'o', b'n', b'g'],
                vec![0u8; 5],
            ),
            // power_up_tx()
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Eu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_mode = PayloadMode::Fixed(4);
        radio.send(b"long message truncated!!").unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_flushes_stale_tx_fifo() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            // status byte carries MAX_RT from a failed transmission
            (vec![commands::NOP], vec![0x1Eu8]),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            (
                vec![commands::W_TX_PAYLOAD, 1u8, 2u8, 3u8],
                vec![0u8; 4],
            ),
            // power_up_tx()
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Eu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_mode = PayloadMode::Dynamic;
        radio.send(&[1, 2, 3]).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_rejects_bad_dynamic_length() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_mode = PayloadMode::Dynamic;
        assert_eq!(radio.send(&[]), Err(Error::PayloadTooLong));
        assert_eq!(radio.send(&[0u8; 33]), Err(Error::PayloadTooLong));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn data_ready() {
        let spi_expectations = spi_test_expects![
            // RX_DR asserted; no need to look at the FIFO
            (vec![commands::NOP], vec![0x4Eu8]),
            // RX_DR clear but the RX FIFO still holds a payload
            (vec![commands::NOP], vec![0xEu8]),
            (vec![registers::FIFO_STATUS, 0u8], vec![0xEu8, 0u8]),
            // nothing pending at all
            (vec![commands::NOP], vec![0xEu8]),
            (vec![registers::FIFO_STATUS, 0u8], vec![0xEu8, 1u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.data_ready().unwrap());
        assert!(radio.data_ready().unwrap());
        assert!(!radio.data_ready().unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_payload_fixed() {
        // clearing RX_DR is bracketed by CE LOW
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![
            (
                vec![commands::R_RX_PAYLOAD, 0u8, 0u8, 0u8, 0u8],
                vec![0x4Eu8, b'p', b'o', b'n', b'g'],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_mode = PayloadMode::Fixed(4);
        let mut buf = [0u8; 4];
        assert_eq!(radio.get_payload(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"pong");
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_payload_dynamic_truncates_to_buf() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![
            // probe the payload length
            (vec![commands::R_RX_PL_WID, 0u8], vec![0x4Eu8, 6u8]),
            (
                vec![commands::R_RX_PAYLOAD, 0u8, 0u8, 0u8, 0u8, 0u8, 0u8],
                vec![0x4Eu8, 1u8, 2u8, 3u8, 4u8, 5u8, 6u8],
            ),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_mode = PayloadMode::Dynamic;
        let mut buf = [0u8; 4];
        // the reported length is the payload's, not the buffer's
        assert_eq!(radio.get_payload(&mut buf).unwrap(), 6);
        assert_eq!(&buf, &[1, 2, 3, 4]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn write_ack_payload() {
        let spi_expectations = spi_test_expects![
            (
                vec![commands::W_ACK_PAYLOAD | 1u8, 0xAAu8, 0x55u8],
                vec![0u8; 3],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_mode = PayloadMode::AckPayload;
        radio.write_ack_payload(1, &[0xAA, 0x55]).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn write_ack_payload_rejected() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // wrong payload mode
        assert_eq!(
            radio.write_ack_payload(0, &[1]),
            Err(Error::InvalidConfiguration)
        );
        radio._payload_mode = PayloadMode::AckPayload;
        // invalid pipe
        assert_eq!(
            radio.write_ack_payload(6, &[1]),
            Err(Error::InvalidConfiguration)
        );
        // invalid length
        assert_eq!(
            radio.write_ack_payload(0, &[]),
            Err(Error::PayloadTooLong)
        );
        spi.done();
        ce_pin.done();
    }
}
