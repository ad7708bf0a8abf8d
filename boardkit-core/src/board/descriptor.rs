//! Validated peripheral factory
//!
//! [`BoardDescriptor`] gates every peripheral request through the check that
//! fits the peripheral's addressing scheme, then forwards to the injected
//! driver set:
//!
//! - GPIO, LED, button: any pin, no check
//! - PWM, ADC: pin must be listed in the capability table (usable pins are
//!   sparse, so a range check would accept pins between capable ones)
//! - I2C, SPI, UART: index must be below the declared bus count
//!
//! The onboard LED and button are constructed on first use and cached, so
//! every caller works on the same handle.

use boardkit_hal::driver::PeripheralDrivers;
use boardkit_hal::{Edge, I2cConfig, I2cMode, PinMode, Pull, SpiConfig, UartConfig};

use super::error::BoardError;
use super::role::{NamedPeripheral, PeripheralRole};
use super::spec::BoardSpec;

/// PWM frequency used when the caller does not give one (Hz)
pub const DEFAULT_PWM_FREQUENCY_HZ: f32 = 490.0;

/// PWM duty cycle used when the caller does not give one
///
/// Full duty: the line is driven continuously high until changed.
pub const DEFAULT_PWM_DUTY: f32 = 1.0;

/// I2C mode used when the caller does not give one
pub const DEFAULT_I2C_MODE: I2cMode = I2cMode::Controller;

/// I2C mode option (clock rate) used when the caller does not give one
pub const DEFAULT_I2C_MODE_OPTION: u32 = I2cConfig::STANDARD.frequency;

/// Trigger edge of the onboard button
pub const NAMED_BUTTON_EDGE: Edge = Edge::Falling;

/// Board capabilities plus the driver set that realises them
///
/// Construct one per board at startup and pass it to whatever needs
/// peripherals. Several descriptors (e.g. for different board variants in
/// tests) can coexist.
pub struct BoardDescriptor<'a, D: PeripheralDrivers> {
    spec: BoardSpec<'a>,
    drivers: D,
    /// Onboard LED, filled on first [`BoardDescriptor::named_led`]
    led0: Option<D::Led>,
    /// Onboard button, filled on first [`BoardDescriptor::named_button`]
    btn0: Option<D::Button>,
}

impl<'a, D: PeripheralDrivers> BoardDescriptor<'a, D> {
    /// Create a descriptor for `spec` backed by `drivers`
    ///
    /// The tables are taken as given; use [`BoardSpec::validate`] first for
    /// specs that come from outside the program.
    pub fn new(spec: BoardSpec<'a>, drivers: D) -> Self {
        Self {
            spec,
            drivers,
            led0: None,
            btn0: None,
        }
    }

    /// Board variant identifier
    pub fn name(&self) -> &'a str {
        self.spec.name
    }

    /// Capability tables of this board
    pub fn spec(&self) -> &BoardSpec<'a> {
        &self.spec
    }

    /// Declared count for a role
    pub fn count(&self, role: PeripheralRole) -> u8 {
        self.spec.counts.get(role)
    }

    /// Check if a request for `role` at pin or bus `id` would be accepted
    pub fn is_capable(&self, role: PeripheralRole, id: u8) -> bool {
        self.spec.is_capable(role, id)
    }

    /// Pin of a named peripheral
    pub fn named_pin(&self, which: NamedPeripheral) -> u8 {
        self.spec.named.get(which)
    }

    /// The injected driver set
    pub fn drivers(&self) -> &D {
        &self.drivers
    }

    /// Claim a GPIO line. Any pin is accepted.
    pub fn acquire_gpio(&mut self, pin: u8, mode: PinMode) -> D::Gpio {
        self.drivers.gpio(pin, mode)
    }

    /// Drive an LED on any pin
    ///
    /// This always constructs a new handle, even for the onboard LED pin;
    /// use [`BoardDescriptor::named_led`] for the shared one.
    pub fn acquire_led(&mut self, pin: u8) -> D::Led {
        self.drivers.led(pin)
    }

    /// Watch a button on any pin
    ///
    /// Arguments are forwarded as given; `None` leaves the choice to the
    /// driver.
    pub fn acquire_button(
        &mut self,
        pin: u8,
        event: Option<Edge>,
        debounce_ms: Option<u32>,
        pull: Option<Pull>,
    ) -> D::Button {
        self.drivers.button(pin, event, debounce_ms, pull)
    }

    /// Generate PWM on a PWM-capable pin
    ///
    /// Missing frequency and duty default to [`DEFAULT_PWM_FREQUENCY_HZ`]
    /// and [`DEFAULT_PWM_DUTY`].
    pub fn acquire_pwm(
        &mut self,
        pin: u8,
        frequency_hz: Option<f32>,
        duty: Option<f32>,
    ) -> Result<D::Pwm, BoardError> {
        self.require_capable(PeripheralRole::Pwm, pin)?;
        let frequency_hz = frequency_hz.unwrap_or(DEFAULT_PWM_FREQUENCY_HZ);
        let duty = duty.unwrap_or(DEFAULT_PWM_DUTY);
        Ok(self.drivers.pwm(pin, frequency_hz, duty))
    }

    /// Sample an ADC-capable pin
    pub fn acquire_adc(&mut self, pin: u8) -> Result<D::Adc, BoardError> {
        self.require_capable(PeripheralRole::Adc, pin)?;
        Ok(self.drivers.adc(pin))
    }

    /// Set up an I2C bus
    ///
    /// Missing mode and mode option default to [`DEFAULT_I2C_MODE`] and
    /// [`DEFAULT_I2C_MODE_OPTION`]. The default option is a clock rate and
    /// is applied whatever the mode.
    pub fn acquire_i2c(
        &mut self,
        bus: u8,
        mode: Option<I2cMode>,
        mode_option: Option<u32>,
    ) -> Result<D::I2c, BoardError> {
        self.require_bus(PeripheralRole::I2c, bus)?;
        let mode = mode.unwrap_or(DEFAULT_I2C_MODE);
        let mode_option = mode_option.unwrap_or(DEFAULT_I2C_MODE_OPTION);
        Ok(self.drivers.i2c(bus, mode, mode_option))
    }

    /// Set up an SPI bus
    ///
    /// `options` reaches the driver untouched: `None` means the driver's
    /// own defaults apply.
    pub fn acquire_spi(
        &mut self,
        bus: u8,
        options: Option<SpiConfig>,
    ) -> Result<D::Spi, BoardError> {
        self.require_bus(PeripheralRole::Spi, bus)?;
        Ok(self.drivers.spi(bus, options))
    }

    /// Open a UART port
    ///
    /// `options` reaches the driver untouched: `None` means the driver's
    /// own defaults apply.
    pub fn acquire_uart(
        &mut self,
        port: u8,
        options: Option<UartConfig>,
    ) -> Result<D::Uart, BoardError> {
        self.require_bus(PeripheralRole::Uart, port)?;
        Ok(self.drivers.uart(port, options))
    }

    /// The onboard LED
    ///
    /// Constructed on the first call; every later call returns the same
    /// handle.
    pub fn named_led(&mut self) -> &mut D::Led {
        let pin = self.spec.named.led0;
        let drivers = &mut self.drivers;
        self.led0.get_or_insert_with(|| drivers.led(pin))
    }

    /// The onboard button
    ///
    /// Constructed on the first call with a [`NAMED_BUTTON_EDGE`] trigger and
    /// driver-default debounce and pull; every later call returns the same
    /// handle.
    pub fn named_button(&mut self) -> &mut D::Button {
        let pin = self.spec.named.btn0;
        let drivers = &mut self.drivers;
        self.btn0
            .get_or_insert_with(|| drivers.button(pin, Some(NAMED_BUTTON_EDGE), None, None))
    }

    /// Check if the onboard LED has been constructed
    pub fn is_named_led_cached(&self) -> bool {
        self.led0.is_some()
    }

    /// Check if the onboard button has been constructed
    pub fn is_named_button_cached(&self) -> bool {
        self.btn0.is_some()
    }

    fn require_capable(&self, role: PeripheralRole, pin: u8) -> Result<(), BoardError> {
        if self.spec.is_capable(role, pin) {
            Ok(())
        } else {
            Err(BoardError::NotCapable { role, pin })
        }
    }

    fn require_bus(&self, role: PeripheralRole, index: u8) -> Result<(), BoardError> {
        let bound = self.spec.counts.get(role);
        if index < bound {
            Ok(())
        } else {
            Err(BoardError::OutOfRange { role, index, bound })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::mock::{Call, Handle, MockDrivers};
    use crate::board::spec::{NamedPins, PeripheralCounts};
    use crate::config::boards::KAMELEON_CORE;
    use proptest::prelude::*;
    use std::vec;

    fn board() -> BoardDescriptor<'static, MockDrivers> {
        BoardDescriptor::new(KAMELEON_CORE, MockDrivers::default())
    }

    #[test]
    fn test_pwm_capable_pin() {
        let mut board = board();
        let pwm = board.acquire_pwm(14, None, None).unwrap();
        assert_eq!(pwm.call, Call::Pwm(14, 490.0, 1.0));
    }

    #[test]
    fn test_pwm_not_capable_pin() {
        let mut board = board();
        let err = board.acquire_pwm(13, None, None).unwrap_err();
        assert_eq!(
            err,
            BoardError::NotCapable {
                role: PeripheralRole::Pwm,
                pin: 13,
            }
        );
        // Nothing constructed on failure
        assert!(board.drivers().calls.is_empty());
    }

    #[test]
    fn test_pwm_explicit_values() {
        let mut board = board();
        let pwm = board.acquire_pwm(1, Some(1000.0), Some(0.25)).unwrap();
        assert_eq!(pwm.call, Call::Pwm(1, 1000.0, 0.25));

        // Each argument defaults independently
        let pwm = board.acquire_pwm(2, None, Some(0.5)).unwrap();
        assert_eq!(pwm.call, Call::Pwm(2, 490.0, 0.5));
        let pwm = board.acquire_pwm(16, Some(50.0), None).unwrap();
        assert_eq!(pwm.call, Call::Pwm(16, 50.0, 1.0));
    }

    #[test]
    fn test_adc() {
        let mut board = board();
        let adc = board.acquire_adc(10).unwrap();
        assert_eq!(adc.call, Call::Adc(10));

        let err = board.acquire_adc(14).unwrap_err();
        assert_eq!(
            err,
            BoardError::NotCapable {
                role: PeripheralRole::Adc,
                pin: 14,
            }
        );
    }

    #[test]
    fn test_i2c_range() {
        let mut board = board();
        let i2c = board.acquire_i2c(1, None, None).unwrap();
        assert_eq!(i2c.call, Call::I2c(1, I2cMode::Controller, 100_000));

        let err = board.acquire_i2c(2, None, None).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfRange {
                role: PeripheralRole::I2c,
                index: 2,
                bound: 2,
            }
        );
        assert_eq!(board.drivers().calls.len(), 1);
    }

    #[test]
    fn test_i2c_target_mode() {
        let mut board = board();
        let i2c = board
            .acquire_i2c(0, Some(I2cMode::Target), Some(0x42))
            .unwrap();
        assert_eq!(i2c.call, Call::I2c(0, I2cMode::Target, 0x42));

        // Default option is the clock rate, even in target mode
        let i2c = board.acquire_i2c(0, Some(I2cMode::Target), None).unwrap();
        assert_eq!(i2c.call, Call::I2c(0, I2cMode::Target, 100_000));
    }

    #[test]
    fn test_spi_options_forwarding() {
        let mut board = board();

        let spi = board.acquire_spi(0, None).unwrap();
        assert_eq!(spi.call, Call::Spi(0, None));

        let config = SpiConfig {
            frequency: 8_000_000,
            ..SpiConfig::default()
        };
        let spi = board.acquire_spi(0, Some(config)).unwrap();
        assert_eq!(spi.call, Call::Spi(0, Some(config)));

        // A default config is still an explicit one
        let spi = board.acquire_spi(1, Some(SpiConfig::default())).unwrap();
        assert_eq!(spi.call, Call::Spi(1, Some(SpiConfig::default())));

        assert!(board.acquire_spi(2, None).is_err());
    }

    #[test]
    fn test_uart_options_forwarding() {
        let mut board = board();

        let uart = board.acquire_uart(1, None).unwrap();
        assert_eq!(uart.call, Call::Uart(1, None));

        let config = UartConfig::with_baudrate(9600);
        let uart = board.acquire_uart(0, Some(config)).unwrap();
        assert_eq!(uart.call, Call::Uart(0, Some(config)));

        let err = board.acquire_uart(2, Some(config)).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfRange {
                role: PeripheralRole::Uart,
                index: 2,
                bound: 2,
            }
        );
    }

    #[test]
    fn test_unvalidated_roles() {
        let mut board = board();

        let gpio = board.acquire_gpio(200, PinMode::Output);
        assert_eq!(gpio.call, Call::Gpio(200, PinMode::Output));

        let led = board.acquire_led(5);
        assert_eq!(led.call, Call::Led(5));

        let button = board.acquire_button(7, Some(Edge::Rising), Some(20), Some(Pull::Down));
        assert_eq!(
            button.call,
            Call::Button(7, Some(Edge::Rising), Some(20), Some(Pull::Down))
        );

        let button = board.acquire_button(8, None, None, None);
        assert_eq!(button.call, Call::Button(8, None, None, None));
    }

    #[test]
    fn test_named_led_is_singleton() {
        let mut board = board();
        assert!(!board.is_named_led_cached());

        let first: *const Handle = board.named_led();
        let second: *const Handle = board.named_led();
        assert!(core::ptr::eq(first, second));
        assert!(board.is_named_led_cached());

        assert_eq!(board.drivers().calls, vec![Call::Led(20)]);
    }

    #[test]
    fn test_named_led_separate_from_acquired() {
        let mut board = board();
        let serial = board.named_led().serial;

        // Acquiring the same pin explicitly builds a fresh handle
        let other = board.acquire_led(20);
        assert_ne!(other.serial, serial);
        assert_eq!(board.named_led().serial, serial);
        assert_eq!(board.drivers().count(|c| matches!(c, Call::Led(_))), 2);
    }

    #[test]
    fn test_named_button_is_singleton() {
        let mut board = board();
        assert!(!board.is_named_button_cached());

        let first: *const Handle = board.named_button();
        for _ in 0..3 {
            let again: *const Handle = board.named_button();
            assert!(core::ptr::eq(first, again));
        }

        assert_eq!(
            board.drivers().calls,
            vec![Call::Button(21, Some(Edge::Falling), None, None)]
        );
    }

    #[test]
    fn test_descriptors_are_independent() {
        const PINS: &[u8] = &[0, 1];
        let spec = BoardSpec {
            name: "test-board",
            counts: PeripheralCounts {
                gpio: 4,
                led: 1,
                button: 1,
                pwm: 2,
                adc: 0,
                i2c: 1,
                spi: 0,
                uart: 3,
            },
            pwm_pins: PINS,
            adc_pins: &[],
            named: NamedPins { led0: 2, btn0: 3 },
        };
        let mut small = BoardDescriptor::new(spec, MockDrivers::default());
        let mut kameleon = board();

        assert_eq!(small.name(), "test-board");
        assert!(small.acquire_i2c(1, None, None).is_err());
        assert!(kameleon.acquire_i2c(1, None, None).is_ok());
        assert!(small.acquire_spi(0, None).is_err());
        assert!(small.acquire_uart(2, None).is_ok());
        assert!(small.acquire_adc(3).is_err());

        assert_eq!(small.named_led().call, Call::Led(2));
        assert_eq!(kameleon.named_led().call, Call::Led(20));
    }

    #[test]
    fn test_queries() {
        let board = board();
        assert_eq!(board.name(), "kameleon-core");
        assert_eq!(board.count(PeripheralRole::Gpio), 22);
        assert_eq!(board.count(PeripheralRole::Uart), 2);
        assert_eq!(board.named_pin(NamedPeripheral::Led0), 20);
        assert_eq!(board.named_pin(NamedPeripheral::Btn0), 21);
        assert!(board.is_capable(PeripheralRole::Pwm, 15));
        assert!(!board.is_capable(PeripheralRole::Spi, 2));
    }

    proptest! {
        #[test]
        fn prop_pwm_membership(pin in any::<u8>()) {
            let mut board = board();
            let result = board.acquire_pwm(pin, None, None);
            if KAMELEON_CORE.pwm_pins.contains(&pin) {
                prop_assert_eq!(result.unwrap().call, Call::Pwm(pin, 490.0, 1.0));
            } else {
                prop_assert_eq!(
                    result.unwrap_err(),
                    BoardError::NotCapable { role: PeripheralRole::Pwm, pin }
                );
            }
        }

        #[test]
        fn prop_adc_membership(pin in any::<u8>()) {
            let mut board = board();
            let result = board.acquire_adc(pin);
            prop_assert_eq!(result.is_ok(), KAMELEON_CORE.adc_pins.contains(&pin));
        }

        #[test]
        fn prop_bus_range(index in any::<u8>()) {
            let mut board = board();
            prop_assert_eq!(board.acquire_i2c(index, None, None).is_ok(), index < 2);
            prop_assert_eq!(board.acquire_spi(index, None).is_ok(), index < 2);
            prop_assert_eq!(board.acquire_uart(index, None).is_ok(), index < 2);
        }

        #[test]
        fn prop_named_led_built_once(calls in 1usize..16) {
            let mut board = board();
            for _ in 0..calls {
                board.named_led();
            }
            prop_assert_eq!(board.drivers().calls.len(), 1);
        }
    }
}
