use super::registers;
use crate::radio::{
    prelude::{
        RadioAddressing, RadioChannel, RadioCrc, RadioDataRate, RadioFifo, RadioInit, RadioMode,
        RadioPayloadMode,
    },
    Error, Nrf24,
};
use crate::{DataRate, PayloadMode};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

impl<SPI, DO> RadioInit for Nrf24<SPI, DO>
where
    SPI: SpiDevice,
    DO: OutputPin,
{
    type InitErrorType = Error<SPI::Error, DO::Error>;

    fn init(&mut self) -> Result<(), Self::InitErrorType> {
        self.set_data_rate(DataRate::Mbps1)?;
        self.set_channel(76)?;
        self.set_payload_mode(PayloadMode::Fixed(32))?;
        self.set_address_width(5)?;
        self.set_crc_width(2)?;
        self.power_down()?;
        // 15 retries, 250 us apart
        self.spi_write_byte(registers::SETUP_RETR, 0x1F)?;
        self.flush_rx()?;
        self.flush_tx()?;
        self.power_up_rx()
    }
}
