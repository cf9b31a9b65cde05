use super::registers;
use crate::radio::{prelude::RadioDataRate, Error, Nrf24};
use crate::DataRate;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioDataRate for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type DataRateErrorType = Error<SPI::Error, DO::Error>;

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        let out = self._buf[1] & !DataRate::MASK | data_rate.into_bits();
        self.spi_write_byte(registers::RF_SETUP, out)
    }

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        let bits = self._buf[1] & DataRate::MASK;
        if bits == DataRate::MASK {
            // both rate bits set is not a defined encoding
            return Err(Error::BinaryCorruption);
        }
        Ok(DataRate::from_bits(bits))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::prelude::RadioDataRate;
    use crate::radio::nrf24::{commands, registers};
    use crate::radio::Error;
    use crate::{spi_test_expects, test::mk_radio, DataRate};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_data_rate_preserves_other_bits() {
        let spi_expectations = spi_test_expects![
            // RF_SETUP holds 2 Mbps with the PA bits set
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x0Fu8]),
            // only the rate bits change
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x27u8],
                vec![0xEu8, 0u8],
            ),
            // a later change back to 2 Mbps still keeps the PA bits
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x27u8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x0Fu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_data_rate(DataRate::Kbps250).unwrap();
        radio.set_data_rate(DataRate::Mbps2).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_data_rate() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x21u8]),
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x08u8]),
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x07u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_data_rate().unwrap(), DataRate::Kbps250);
        assert_eq!(radio.get_data_rate().unwrap(), DataRate::Mbps2);
        assert_eq!(radio.get_data_rate().unwrap(), DataRate::Mbps1);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_data_rate_corrupted() {
        let spi_expectations = spi_test_expects![
            // both rate bits asserted
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x28u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_data_rate(), Err(Error::BinaryCorruption));
        spi.done();
        ce_pin.done();
    }
}
