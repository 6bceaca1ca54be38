use crate::{
    radsens::{RadSens, Register},
    WhoAmI,
};
use embedded_hal::i2c::I2c;

impl<I2C: I2c> WhoAmI<I2C, u8> for RadSens<I2C> {
    const EXPECTED_WHOAMI: u8 = 0x7D;

    /// Reads the chip id from the device rather than the value cached by `init`.
    fn whoami(&mut self) -> Result<u8, I2C::Error> {
        let mut data: [u8; 1] = [0];
        self.read_register(Register::DeviceId, &mut data)?;
        Ok(data[0])
    }
}
