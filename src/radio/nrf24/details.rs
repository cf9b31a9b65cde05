use super::{Error, Nrf24};
use crate::radio::prelude::RadioDetails;
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

#[cfg(any(feature = "defmt", feature = "std"))]
use super::registers;
#[cfg(any(feature = "defmt", feature = "std"))]
use crate::radio::prelude::{RadioChannel, RadioCrc, RadioDataRate, RadioPayloadMode};
#[cfg(any(feature = "defmt", feature = "std"))]
use crate::FifoState;

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO> RadioDetails for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type DetailsErrorType = Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("CRC Width_________________{=u8} bytes", self.crc_width());
        defmt::println!("Payload Mode______________{}", self.payload_mode());

        self.spi_read(1, registers::SETUP_AW)?;
        defmt::println!(
            "Address Width_____________{=u8} bytes",
            (self._buf[1] & 3) + 2
        );

        self.spi_read(1, registers::SETUP_RETR)?;
        let retry_setup = self._buf[1];
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            retry_setup & 0x0F
        );

        self.spi_read(1, registers::OBSERVE_TX)?;
        let observer = self._buf[1];
        defmt::println!("Packets lost______________{=u8}", observer >> 4);
        defmt::println!("Retries for last payload__{=u8}", observer & 0xF);

        self.spi_read(1, registers::RPD)?;
        defmt::println!("Carrier detected__________{=bool}", self._buf[1] & 1 > 0);

        // one FIFO_STATUS read covers both FIFOs
        self.spi_read(1, registers::FIFO_STATUS)?;
        let fifo_status = self._buf[1];
        let fifo = FifoState::from_bits(fifo_status >> 4).ok_or(Error::BinaryCorruption)?;
        defmt::println!("TX FIFO___________________{}", fifo);
        let fifo = FifoState::from_bits(fifo_status).ok_or(Error::BinaryCorruption)?;
        defmt::println!("RX FIFO___________________{}", fifo);

        self.spi_read(1, registers::CONFIG)?;
        let config = self._buf[1];
        defmt::println!("Powered Up________________{=bool}", config & 2 > 0);
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if config & 1 > 0 { rx } else { tx }
        );
        defmt::println!("{}", self._status);

        self.spi_read(1, registers::EN_AA)?;
        defmt::println!("Auto Acknowledgment_______0b{=0..8}", self._buf[1]);
        self.spi_read(1, registers::EN_RXADDR)?;
        defmt::println!("Open pipes________________0b{=0..8}", self._buf[1]);
        self.spi_read(1, registers::DYNPD)?;
        defmt::println!("Dynamic payload pipes_____0b{=0..8}", self._buf[1]);

        self.spi_read(5, registers::TX_ADDR)?;
        let mut address = [0u8; 5];
        address.copy_from_slice(&self._buf[1..6]);
        defmt::println!("TX address________________{=[u8; 5]:02X}", address);
        self.spi_read(5, registers::RX_ADDR_P0)?;
        address.copy_from_slice(&self._buf[1..6]);
        defmt::println!("RX pipe 0 address_________{=[u8; 5]:02X}", address);
        self.spi_read(5, registers::RX_ADDR_P1)?;
        address.copy_from_slice(&self._buf[1..6]);
        defmt::println!("RX pipe 1 address_________{=[u8; 5]:02X}", address);
        Ok(())
    }

    #[cfg(not(any(feature = "defmt", feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("CRC Width_________________{} bytes", self.crc_width());
        std::println!("Payload Mode______________{}", self.payload_mode());

        self.spi_read(1, registers::SETUP_AW)?;
        std::println!("Address Width_____________{} bytes", (self._buf[1] & 3) + 2);

        self.spi_read(1, registers::SETUP_RETR)?;
        let retry_setup = self._buf[1];
        std::println!(
            "Auto retry delay__________{} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        std::println!("Auto retry attempts_______{} maximum", retry_setup & 0x0F);

        self.spi_read(1, registers::OBSERVE_TX)?;
        let observer = self._buf[1];
        std::println!("Packets lost______________{}", observer >> 4);
        std::println!("Retries for last payload__{}", observer & 0xF);

        self.spi_read(1, registers::RPD)?;
        std::println!("Carrier detected__________{}", self._buf[1] & 1 > 0);

        // one FIFO_STATUS read covers both FIFOs
        self.spi_read(1, registers::FIFO_STATUS)?;
        let fifo_status = self._buf[1];
        let fifo = FifoState::from_bits(fifo_status >> 4).ok_or(Error::BinaryCorruption)?;
        std::println!("TX FIFO___________________{fifo}");
        let fifo = FifoState::from_bits(fifo_status).ok_or(Error::BinaryCorruption)?;
        std::println!("RX FIFO___________________{fifo}");

        self.spi_read(1, registers::CONFIG)?;
        let config = self._buf[1];
        std::println!("Powered Up________________{}", config & 2 > 0);
        std::println!(
            "Primary Mode______________{}X",
            if config & 1 > 0 { "R" } else { "T" }
        );
        std::println!("{}", self._status);

        self.spi_read(1, registers::EN_AA)?;
        std::println!("Auto Acknowledgment_______{:#010b}", self._buf[1]);
        self.spi_read(1, registers::EN_RXADDR)?;
        std::println!("Open pipes________________{:#010b}", self._buf[1]);
        self.spi_read(1, registers::DYNPD)?;
        std::println!("Dynamic payload pipes_____{:#010b}", self._buf[1]);

        self.spi_read(5, registers::TX_ADDR)?;
        std::println!("TX address________________{:02X?}", &self._buf[1..6]);
        self.spi_read(5, registers::RX_ADDR_P0)?;
        std::println!("RX pipe 0 address_________{:02X?}", &self._buf[1..6]);
        self.spi_read(5, registers::RX_ADDR_P1)?;
        std::println!("RX pipe 1 address_________{:02X?}", &self._buf[1..6]);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::RadioDetails;
    use crate::test::mk_radio;

    #[test]
    fn print_nothing() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.print_details().is_ok());
        spi.done();
        ce_pin.done();
    }
}
