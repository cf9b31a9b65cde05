#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24::new()`](fn@crate::radio::Nrf24::new)
//! - [`Nrf24::init()`](radio/struct.Nrf24.html#method.init)
//! - [`Nrf24::send()`](radio/struct.Nrf24.html#method.send)
//! - [`Nrf24::data_ready()`](radio/struct.Nrf24.html#method.data_ready)
//! - [`Nrf24::get_payload()`](radio/struct.Nrf24.html#method.get_payload)
//! - [`Nrf24::is_transmitting()`](radio/struct.Nrf24.html#method.is_transmitting)
//! - [`Nrf24::power_up_rx()`](radio/struct.Nrf24.html#method.power_up_rx)
//! - [`Nrf24::power_up_tx()`](radio/struct.Nrf24.html#method.power_up_tx)
//! - [`Nrf24::power_down()`](radio/struct.Nrf24.html#method.power_down)
//!
//! ## Configuration API
//!
//! - [`Nrf24::set_channel()`](radio/struct.Nrf24.html#method.set_channel)
//! - [`Nrf24::get_channel()`](radio/struct.Nrf24.html#method.get_channel)
//! - [`Nrf24::set_data_rate()`](radio/struct.Nrf24.html#method.set_data_rate)
//! - [`Nrf24::get_data_rate()`](radio/struct.Nrf24.html#method.get_data_rate)
//! - [`Nrf24::set_crc_width()`](radio/struct.Nrf24.html#method.set_crc_width)
//! - [`Nrf24::set_address_width()`](radio/struct.Nrf24.html#method.set_address_width)
//! - [`Nrf24::set_padding()`](radio/struct.Nrf24.html#method.set_padding)
//! - [`Nrf24::set_local_address()`](radio/struct.Nrf24.html#method.set_local_address)
//! - [`Nrf24::set_remote_address()`](radio/struct.Nrf24.html#method.set_remote_address)
//! - [`Nrf24::set_payload_mode()`](radio/struct.Nrf24.html#method.set_payload_mode)
//!
//! ## Advanced API
//!
//! - [`Nrf24::mode()`](radio/struct.Nrf24.html#method.mode)
//! - [`Nrf24::write_ack_payload()`](radio/struct.Nrf24.html#method.write_ack_payload)
//! - [`Nrf24::get_dynamic_payload_length()`](radio/struct.Nrf24.html#method.get_dynamic_payload_length)
//! - [`Nrf24::update()`](radio/struct.Nrf24.html#method.update)
//! - [`Nrf24::status()`](radio/struct.Nrf24.html#method.status)
//! - [`Nrf24::clear_status_flags()`](radio/struct.Nrf24.html#method.clear_status_flags)
//! - [`Nrf24::flush_rx()`](radio/struct.Nrf24.html#method.flush_rx)
//! - [`Nrf24::flush_tx()`](radio/struct.Nrf24.html#method.flush_tx)
//! - [`Nrf24::fifo_state()`](radio/struct.Nrf24.html#method.fifo_state)
//! - [`Nrf24::print_details()`](radio/struct.Nrf24.html#method.print_details)
//!
#![no_std]

mod types;
pub use types::{DataRate, FifoState, OperatingMode, PayloadMode, StatusFlags};
pub mod radio;
