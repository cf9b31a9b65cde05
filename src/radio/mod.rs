//! This module defines the driver for the nRF24L01 transceiver and the
//! traits that make up its API surface.
mod nrf24;
pub mod prelude;
pub use nrf24::{Error, Nrf24};
