//! # Unofficial Rust Driver for ClimateGuard RadSens
//!
//! Geiger tube board with an onboard MCU that counts pulses and reports radiation intensity over
//! I2C.
//!
//! ## External Links
//!
//! - [Official Arduino Library]
//! - [Official Product Site]
//!
//! [Official Arduino Library]: https://github.com/climateguard/RadSens
//! [Official Product Site]: https://climateguard.info/

use crate::{Driver, SetAddressError};
use cast::f32;
use embedded_hal::i2c::I2c;

pub use pulses::CounterMode;
pub use register::Register;

use pulses::PulseAccumulator;

pub struct RadSens<I2C> {
    i2c: I2C,
    address: u8,
    chip_id: u8,
    firmware_version: u8,
    pulses: PulseAccumulator,
}

impl<I2C: I2c> Driver<I2C> for RadSens<I2C> {
    const DEFAULT_ADDRESS: u8 = 0x66;

    fn new_inner(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            chip_id: 0,
            firmware_version: 0,
            pulses: PulseAccumulator::new(),
        }
    }
}

/// Radiation intensity in µR/h from the 24 bit big endian register contents.
pub fn decode_intensity(data: [u8; 3]) -> f32 {
    let raw = u32::from_be_bytes([0, data[0], data[1], data[2]]);
    f32(raw) / 10.0
}

impl<I2C: I2c> RadSens<I2C> {
    /// Checks that something acknowledges on the configured address and caches the chip id and
    /// firmware version.
    ///
    /// Returns `Ok(false)` when the address is unusable or the device does not answer the probe,
    /// leaving [`RadSens::chip_id`] and [`RadSens::firmware_version`] at zero.  Treat the sensor
    /// as absent in that case.
    ///
    /// # Errors
    ///
    /// The identity read following a successful probe failed.
    pub fn init(&mut self) -> Result<bool, I2C::Error> {
        if Self::address_check(self.address).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("RadSens address {=u8:#x} is outside 0x08..=0x77", self.address);
            return Ok(false);
        }
        if self.i2c.write(self.address, &[0x00]).is_err() {
            #[cfg(feature = "defmt")]
            defmt::debug!("no RadSens acknowledged at {=u8:#x}", self.address);
            return Ok(false);
        }

        let mut data = [0; Register::DeviceId.width()];
        self.read_register(Register::DeviceId, &mut data)?;
        self.chip_id = data[0];
        self.firmware_version = data[1];

        #[cfg(feature = "defmt")]
        {
            defmt::debug!(
                "RadSens at {=u8:#x}: chip id {=u8:#x}, firmware {=u8}",
                self.address,
                self.chip_id,
                self.firmware_version
            );
            if self.chip_id != <Self as crate::WhoAmI<I2C, u8>>::EXPECTED_WHOAMI {
                defmt::warn!("unexpected RadSens chip id {=u8:#x}", self.chip_id);
            }
        }
        Ok(true)
    }

    /// One write-then-read transaction: the register address goes out, `data.len()` bytes come
    /// back in the order the device sends them.
    pub fn read_register(&mut self, register: Register, data: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c
            .write_read(self.address, &[u8::from(register)], data)
    }

    fn write_flag(&mut self, register: Register, on: bool) -> Result<(), I2C::Error> {
        self.i2c
            .write(self.address, &[u8::from(register), u8::from(on)])
    }

    fn read_flag(&mut self, register: Register) -> Result<bool, I2C::Error> {
        let mut data: [u8; 1] = [0; 1];
        self.read_register(register, &mut data)?;
        Ok(data[0] == 1)
    }

    /// Chip id cached by [`RadSens::init`].  Zero before a successful init.
    pub const fn chip_id(&self) -> u8 {
        self.chip_id
    }

    /// Firmware version cached by [`RadSens::init`].  Zero before a successful init.
    pub const fn firmware_version(&self) -> u8 {
        self.firmware_version
    }

    /// Address that the driver currently talks to.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Radiation intensity over a dynamic window (shorter than 123 s) in µR/h.
    pub fn rad_intensity_dynamic(&mut self) -> Result<f32, I2C::Error> {
        let mut data = [0; Register::RadIntensityDynamic.width()];
        self.read_register(Register::RadIntensityDynamic, &mut data)?;
        Ok(decode_intensity(data))
    }

    /// Radiation intensity over a static 500 s window in µR/h.
    pub fn rad_intensity_static(&mut self) -> Result<f32, I2C::Error> {
        let mut data = [0; Register::RadIntensityStatic.width()];
        self.read_register(Register::RadIntensityStatic, &mut data)?;
        Ok(decode_intensity(data))
    }

    /// Reads the pulses counted by the device since the previous reading, adds them to the
    /// running total and returns that total.  Every call advances the total, see
    /// [`CounterMode`] for how readings turn into deltas.
    pub fn number_of_pulses(&mut self) -> Result<u32, I2C::Error> {
        let mut data = [0; Register::PulseCounter.width()];
        self.read_register(Register::PulseCounter, &mut data)?;
        Ok(self.pulses.add(u16::from_be_bytes(data)))
    }

    pub const fn counter_mode(&self) -> CounterMode {
        self.pulses.mode()
    }

    pub fn set_counter_mode(&mut self, mode: CounterMode) {
        self.pulses.set_mode(mode);
    }

    /// Zeroes the host side pulse total.  The device is not touched.
    pub fn reset_pulses(&mut self) {
        self.pulses.reset();
    }

    /// Reads the address stored on the device and retargets this driver to it.
    ///
    /// This is not a pure getter: every transaction after this call goes to the address that was
    /// read, whatever the driver was constructed with.
    pub fn sensor_address(&mut self) -> Result<u8, I2C::Error> {
        let mut data: [u8; 1] = [0; 1];
        self.read_register(Register::DeviceAddress, &mut data)?;
        self.address = data[0];
        Ok(self.address)
    }

    /// Stores a new address on the device and retargets this driver to it.
    ///
    /// # Errors
    ///
    /// [`SetAddressError::ArgumentError`]: `new_address` is outside `0x08..=0x77`.  Nothing is
    /// written in that case.
    pub fn set_sensor_address(
        &mut self,
        new_address: u8,
    ) -> Result<(), SetAddressError<I2C::Error>> {
        if Self::address_check(new_address).is_err() {
            return Err(SetAddressError::ArgumentError);
        }
        self.i2c
            .write(self.address, &[u8::from(Register::DeviceAddress), new_address])?;
        self.address = new_address;
        Ok(())
    }

    /// Whether the high voltage converter feeding the tube is running.
    pub fn hv_generator_state(&mut self) -> Result<bool, I2C::Error> {
        self.read_flag(Register::HvGenerator)
    }

    pub fn set_hv_generator_state(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.write_flag(Register::HvGenerator, on)
    }

    pub fn led_state(&mut self) -> Result<bool, I2C::Error> {
        self.read_flag(Register::LedControl)
    }

    pub fn set_led_state(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.write_flag(Register::LedControl, on)
    }

    pub fn set_lp_mode(&mut self, on: bool) -> Result<(), I2C::Error> {
        self.write_flag(Register::LowPowerMode, on)
    }

    /// Sensitivity coefficient in Imp/µR used by the device to compute intensity.
    pub fn sensitivity(&mut self) -> Result<u16, I2C::Error> {
        let mut data = [0; Register::Sensitivity.width()];
        self.read_register(Register::Sensitivity, &mut data)?;
        // little endian, unlike the intensity and pulse registers
        Ok(u16::from_le_bytes(data))
    }

    pub fn set_sensitivity(&mut self, sensitivity: u16) -> Result<(), I2C::Error> {
        let bytes: [u8; 2] = u16::to_le_bytes(sensitivity);
        self.i2c.write(
            self.address,
            &[u8::from(Register::Sensitivity), bytes[0], bytes[1]],
        )
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}


mod pulses;
mod register;
pub mod whoami;
