use super::{commands, mnemonics, registers};
use crate::radio::{prelude::RadioPayloadMode, Error, Nrf24};
use crate::PayloadMode;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioPayloadMode for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type PayloadModeErrorType = Error<SPI::Error, DO::Error>;

    fn set_payload_mode(&mut self, mode: PayloadMode) -> Result<(), Self::PayloadModeErrorType> {
        match mode {
            PayloadMode::Fixed(length) => {
                if length < 1 || length > 32 {
                    return Err(Error::InvalidConfiguration);
                }
                self.spi_write_byte(registers::RX_PW_P0, length)?;
                self.spi_write_byte(registers::RX_PW_P1, length)?;
                self.spi_write_byte(registers::DYNPD, 0)?;
                self.spi_write_byte(registers::FEATURE, 0)?;
            }
            PayloadMode::Dynamic => {
                self.spi_write_byte(registers::FEATURE, mnemonics::EN_DPL)?;
                self.spi_write_byte(registers::DYNPD, mnemonics::DPL_P0 | mnemonics::DPL_P1)?;
            }
            PayloadMode::AckPayload => {
                self.spi_write_byte(
                    registers::FEATURE,
                    mnemonics::EN_DPL | mnemonics::EN_ACK_PAY,
                )?;
                self.spi_write_byte(registers::DYNPD, mnemonics::DPL_P0 | mnemonics::DPL_P1)?;
            }
        }
        self._payload_mode = mode;
        Ok(())
    }

    fn payload_mode(&self) -> PayloadMode {
        self._payload_mode
    }

    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadModeErrorType> {
        self.spi_read(1, commands::R_RX_PL_WID)?;
        let length = self._buf[1];
        if length > 32 {
            // the chip never reports more than 32 bytes
            return Err(Error::BinaryCorruption);
        }
        Ok(length)
    }
}
