use num_enum::IntoPrimitive;

/// RadSens register map.  Multi-byte registers are read starting at the listed address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Chip id followed by firmware version, 2 bytes.
    DeviceId = 0x00,
    FirmwareVersion = 0x01,
    /// Rolling window shorter than 123 s, 3 bytes big endian in tenths of µR/h.
    RadIntensityDynamic = 0x03,
    /// Rolling window of 500 s, 3 bytes big endian in tenths of µR/h.
    RadIntensityStatic = 0x06,
    /// Pulses since the last read, 2 bytes big endian.
    PulseCounter = 0x09,
    LowPowerMode = 0x0C,
    DeviceAddress = 0x10,
    HvGenerator = 0x11,
    /// Imp/µR, 2 bytes little endian.
    Sensitivity = 0x12,
    LedControl = 0x14,
}

impl Register {
    pub const fn width(self) -> usize {
        match self {
            Self::DeviceId | Self::Sensitivity | Self::PulseCounter => 2,
            Self::RadIntensityDynamic | Self::RadIntensityStatic => 3,
            Self::FirmwareVersion
            | Self::LowPowerMode
            | Self::DeviceAddress
            | Self::HvGenerator
            | Self::LedControl => 1,
        }
    }
}
