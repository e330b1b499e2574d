//! Cortex-M0+ mainstream line (G0B1 superset)

use strata_hal::Family;
use strata_hal::Peripheral::*;

use crate::irq::VectorTable;

pub static TABLE: VectorTable = VectorTable {
    family: Family::G0,
    entries: vectors![
        WWDG_IRQn = 0 => [Wwdg],
        PVD_VDDIO2_IRQn = 1 => [Pvd],
        RTC_TAMP_IRQn = 2 => [Rtc],
        FLASH_IRQn = 3 => [Flash],
        RCC_CRS_IRQn = 4 => [Rcc => line(4, 0), Crs => line(4, 1)],
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
        USB_UCPD1_2_IRQn = 8 => [Ucpd(1) => line(8, 0), Ucpd(2) => line(8, 1), Usb => line(8, 2)],
        DMA1_Channel1_IRQn = 9 => [Dma(1, 1)],
        DMA1_Channel2_3_IRQn = 10 => [Dma(1, 2) => line(10, 0), Dma(1, 3) => line(10, 1)],
        DMA1_Ch4_7_DMA2_Ch1_5_DMAMUX1_OVR_IRQn = 11 => [
            Dmamux => line(11, 0),
            Dma(1, 4) => line(11, 1),
            Dma(1, 5) => line(11, 2),
            Dma(1, 6) => line(11, 3),
            Dma(1, 7) => line(11, 4),
            Dma(2, 1) => line(11, 5),
            Dma(2, 2) => line(11, 6),
            Dma(2, 3) => line(11, 7),
            Dma(2, 4) => line(11, 8),
            Dma(2, 5) => line(11, 9),
        ],
        ADC1_COMP_IRQn = 12 => [
            Adc(1) => line(12, 0),
            Comp(1) => line(12, 1),
            Comp(2) => line(12, 2),
            Comp(3) => line(12, 3),
        ],
        TIM1_BRK_UP_TRG_COM_IRQn = 13 => [Tim(1)],
        TIM1_CC_IRQn = 14 => [Tim(1)],
        TIM2_IRQn = 15 => [Tim(2)],
        TIM3_TIM4_IRQn = 16 => [Tim(3) => line(16, 0), Tim(4) => line(16, 1)],
        TIM6_DAC_LPTIM1_IRQn = 17 => [Tim(6) => line(17, 0), Dac => line(17, 1), Lptim(1) => line(17, 2)],
        TIM7_LPTIM2_IRQn = 18 => [Tim(7) => line(18, 0), Lptim(2) => line(18, 1)],
        TIM14_IRQn = 19 => [Tim(14)],
        TIM15_IRQn = 20 => [Tim(15)],
        TIM16_FDCAN_IT0_IRQn = 21 => [Tim(16) => line(21, 0), Fdcan(1) => line(21, 1), Fdcan(2) => line(21, 2)],
        TIM17_FDCAN_IT1_IRQn = 22 => [Tim(17) => line(22, 0), Fdcan(1) => line(22, 1), Fdcan(2) => line(22, 2)],
        I2C1_IRQn = 23 => [I2c(1)],
        I2C2_3_IRQn = 24 => [I2c(2) => line(24, 0), I2c(3) => line(24, 1)],
        SPI1_IRQn = 25 => [Spi(1)],
        SPI2_3_IRQn = 26 => [Spi(2) => line(26, 0), Spi(3) => line(26, 1)],
        USART1_IRQn = 27 => [Usart(1)],
        USART2_LPUART2_IRQn = 28 => [Usart(2) => line(28, 0), Lpuart(2) => line(28, 1)],
        USART3_4_5_6_LPUART1_IRQn = 29 => [
            Usart(3) => line(29, 0),
            Usart(4) => line(29, 1),
            Usart(5) => line(29, 2),
            Usart(6) => line(29, 3),
            Lpuart(1) => line(29, 4),
        ],
        CEC_IRQn = 30 => [Cec],
        AES_RNG_IRQn = 31 => [Aes => line(31, 0), Rng => line(31, 1)],
    ],
};
