//! Built-in board definitions

use crate::board::{BoardSpec, NamedPins, PeripheralCounts};

/// Kameleon Core (STM32F411)
///
/// PWM and ADC are only available on scattered pins; all three bus kinds
/// have two controllers.
pub const KAMELEON_CORE: BoardSpec<'static> = BoardSpec {
    name: "kameleon-core",
    counts: PeripheralCounts {
        gpio: 22,
        led: 1,
        button: 1,
        pwm: 5,
        adc: 6,
        i2c: 2,
        spi: 2,
        uart: 2,
    },
    pwm_pins: &[1, 2, 14, 15, 16],
    adc_pins: &[3, 4, 5, 10, 11, 12],
    named: NamedPins { led0: 20, btn0: 21 },
};

/// Every built-in board
pub const BUILTIN: &[BoardSpec<'static>] = &[KAMELEON_CORE];

/// Look up a built-in board by name
pub fn by_name(name: &str) -> Option<BoardSpec<'static>> {
    BUILTIN.iter().find(|spec| spec.name == name).copied()
}
