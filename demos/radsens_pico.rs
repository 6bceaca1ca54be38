#![no_std]
#![no_main]

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
mod other {
    extern crate std;
    use std::println;
    #[no_mangle]
    pub extern "C" fn main() {
        println!("unsupported target");
    }
}

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod arm {
    use defmt::*;
    use defmt_rtt as _;
    use fugit::RateExtU32;
    use panic_probe as _;
    use radsens::{radsens::RadSens, Driver};
    use rp2040_hal::{
        clocks::{init_clocks_and_plls, Clock},
        entry,
        i2c::I2C,
        pac,
        sio::Sio,
        watchdog::Watchdog,
    };

    #[link_section = ".boot2"]
    #[used]
    pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

    #[entry]
    fn main() -> ! {
        let mut pac = pac::Peripherals::take().unwrap();
        let core = pac::CorePeripherals::take().unwrap();
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

        let pins = rp2040_hal::gpio::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let i2c = I2C::i2c0(
            pac.I2C0,
            pins.gpio0.reconfigure(), // sda
            pins.gpio1.reconfigure(), // scl
            100.kHz(),
            &mut pac.RESETS,
            clocks.system_clock.freq(),
        );

        let mut radsens = RadSens::new(i2c);
        if radsens.init().unwrap() {
            info!("RadSens initialized");
        } else {
            error!("RadSens not found");
            loop {
                cortex_m::asm::wfi();
            }
        }

        loop {
            info!("chip id: {=u8:#x}", radsens.chip_id());
            info!("firmware version: {=u8}", radsens.firmware_version());
            info!(
                "intensity (dynamic): {} uR/h",
                radsens.rad_intensity_dynamic().unwrap()
            );
            info!(
                "intensity (static): {} uR/h",
                radsens.rad_intensity_static().unwrap()
            );
            info!("pulses: {}", radsens.number_of_pulses().unwrap());
            info!("address: {=u8:#x}", radsens.sensor_address().unwrap());
            info!(
                "hv generator: {}",
                if radsens.hv_generator_state().unwrap() { "ON" } else { "OFF" }
            );
            info!("sensitivity: {} Imp/uR", radsens.sensitivity().unwrap());
            info!(
                "led: {}",
                if radsens.led_state().unwrap() { "ON" } else { "OFF" }
            );
            delay.delay_ms(5_000);
        }
    }
}
