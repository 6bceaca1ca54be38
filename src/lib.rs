#![no_std]
#![doc = include_str!("../README.md")]

use embedded_hal::i2c::I2c;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetAddressError<E> {
    I2cError(E),
    ArgumentError,
}

impl<E> From<E> for SetAddressError<E> {
    fn from(error: E) -> Self {
        Self::I2cError(error)
    }
}

pub trait WhoAmI<I2C: I2c, T: core::cmp::Eq> {
    const EXPECTED_WHOAMI: T;

    fn whoami(&mut self) -> Result<T, I2C::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

pub trait Driver<I2C: I2c> {
    /// Address the device answers on when it leaves the factory.
    const DEFAULT_ADDRESS: u8;

    fn address_check(address: u8) -> Result<(), OutOfRange> {
        if (0x08..=0x77).contains(&address) {
            Ok(())
        } else {
            Err(OutOfRange)
        }
    }
    fn new_inner(i2c: I2C, address: u8) -> Self;

    /// The entry point for a [`Driver`].  Expects [`I2c`] (obtainable from target platform HAL)
    /// and talks to the device on [`Driver::DEFAULT_ADDRESS`].  This provides a handle that does
    /// not touch the bus.  Probing the hardware is deferred to the driver's `init`.
    ///
    /// The bus is not owned exclusively: pass `&mut i2c` or a shared bus device from
    /// `embedded-hal-bus` to keep using the bus for other peripherals.
    fn new(i2c: I2C) -> Self
    where
        Self: Sized,
    {
        Self::new_inner(i2c, Self::DEFAULT_ADDRESS)
    }

    /// Like [`Driver::new`] but for a device that has been moved to another address.  The
    /// address is not validated here; an unusable address is reported by the driver's `init`.
    fn with_address(i2c: I2C, address: u8) -> Self
    where
        Self: Sized,
    {
        Self::new_inner(i2c, address)
    }
}

pub mod radsens;

#[cfg(all(test, not(all(target_arch = "arm", target_os = "none"))))]
mod test {
    use crate::radsens::RadSens;
    use crate::{Driver, OutOfRange};
    use embedded_hal_mock::eh1::i2c::Mock as I2cMock;

    #[test]
    pub fn address_check_bounds() {
        assert_eq!(
            <RadSens<I2cMock> as Driver<I2cMock>>::address_check(0x07),
            Err(OutOfRange)
        );
        assert_eq!(
            <RadSens<I2cMock> as Driver<I2cMock>>::address_check(0x08),
            Ok(())
        );
        assert_eq!(
            <RadSens<I2cMock> as Driver<I2cMock>>::address_check(0x77),
            Ok(())
        );
        assert_eq!(
            <RadSens<I2cMock> as Driver<I2cMock>>::address_check(0x78),
            Err(OutOfRange)
        );
    }
}
