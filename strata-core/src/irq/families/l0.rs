//! Cortex-M0+ ultra-low-power line (L07x/L08x superset)
//!
//! No SYSCFG interrupt-line registers. Only the EXTI groups can be told
//! apart; every other shared vector calls all of its candidates.

use strata_hal::Family;
use strata_hal::Peripheral::*;

use crate::irq::VectorTable;

pub static TABLE: VectorTable = VectorTable {
    family: Family::L0,
    entries: vectors![
        WWDG_IRQn = 0 => [Wwdg],
        PVD_IRQn = 1 => [Pvd],
        RTC_IRQn = 2 => [Rtc],
        FLASH_IRQn = 3 => [Flash],
        RCC_CRS_IRQn = 4 => [Rcc, Crs],
        EXTI0_1_IRQn = 5 => [Exti(0) => exti(0), Exti(1) => exti(1)],
        EXTI2_3_IRQn = 6 => [Exti(2) => exti(2), Exti(3) => exti(3)],
        EXTI4_15_IRQn = 7 => [
            Exti(4) => exti(4),
            Exti(5) => exti(5),
            Exti(6) => exti(6),
            Exti(7) => exti(7),
            Exti(8) => exti(8),
            Exti(9) => exti(9),
            Exti(10) => exti(10),
            Exti(11) => exti(11),
            Exti(12) => exti(12),
            Exti(13) => exti(13),
            Exti(14) => exti(14),
            Exti(15) => exti(15),
        ],
        TSC_IRQn = 8 => [Tsc],
        DMA1_Channel1_IRQn = 9 => [Dma(1, 1)],
        DMA1_Channel2_3_IRQn = 10 => [Dma(1, 2), Dma(1, 3)],
        DMA1_Channel4_5_6_7_IRQn = 11 => [Dma(1, 4), Dma(1, 5), Dma(1, 6), Dma(1, 7)],
        ADC1_COMP_IRQn = 12 => [Adc(1), Comp(1), Comp(2)],
        LPTIM1_IRQn = 13 => [Lptim(1)],
        USART4_5_IRQn = 14 => [Usart(4), Usart(5)],
        TIM2_IRQn = 15 => [Tim(2)],
        TIM3_IRQn = 16 => [Tim(3)],
        TIM6_DAC_IRQn = 17 => [Tim(6), Dac],
        TIM7_IRQn = 18 => [Tim(7)],
        TIM21_IRQn = 20 => [Tim(21)],
        I2C3_IRQn = 21 => [I2c(3)],
        TIM22_IRQn = 22 => [Tim(22)],
        I2C1_IRQn = 23 => [I2c(1)],
        I2C2_IRQn = 24 => [I2c(2)],
        SPI1_IRQn = 25 => [Spi(1)],
        SPI2_IRQn = 26 => [Spi(2)],
        USART1_IRQn = 27 => [Usart(1)],
        USART2_IRQn = 28 => [Usart(2)],
        AES_RNG_LPUART1_IRQn = 29 => [Aes, Rng, Lpuart(1)],
        LCD_IRQn = 30 => [Lcd],
        USB_IRQn = 31 => [Usb],
    ],
};
