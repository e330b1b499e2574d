//! Cortex-M0 mainstream line (F09x superset)

use strata_hal::Family;
use strata_hal::Peripheral::*;

use crate::irq::VectorTable;

pub static TABLE: VectorTable = VectorTable {
    family: Family::F0,
    entries: vectors![
        WWDG_IRQn = 0 => [Wwdg],
        PVD_VDDIO2_IRQn = 1 => [Pvd],
        RTC_IRQn = 2 => [Rtc],
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
        TSC_IRQn = 8 => [Tsc],
        DMA1_Ch1_IRQn = 9 => [Dma(1, 1)],
        DMA1_Ch2_3_DMA2_Ch1_2_IRQn = 10 => [
            Dma(1, 2) => line(10, 0),
            Dma(1, 3) => line(10, 1),
            Dma(2, 1) => line(10, 2),
            Dma(2, 2) => line(10, 3),
        ],
        DMA1_Ch4_7_DMA2_Ch3_5_IRQn = 11 => [
            Dma(1, 4) => line(11, 0),
            Dma(1, 5) => line(11, 1),
            Dma(1, 6) => line(11, 2),
            Dma(1, 7) => line(11, 3),
            Dma(2, 3) => line(11, 4),
            Dma(2, 4) => line(11, 5),
            Dma(2, 5) => line(11, 6),
        ],
        ADC1_COMP_IRQn = 12 => [Adc(1) => line(12, 0), Comp(1) => line(12, 1), Comp(2) => line(12, 2)],
        TIM1_BRK_UP_TRG_COM_IRQn = 13 => [Tim(1)],
        TIM1_CC_IRQn = 14 => [Tim(1)],
        TIM2_IRQn = 15 => [Tim(2)],
        TIM3_IRQn = 16 => [Tim(3)],
        TIM6_DAC_IRQn = 17 => [Tim(6) => line(17, 0), Dac => line(17, 1)],
        TIM7_IRQn = 18 => [Tim(7)],
        TIM14_IRQn = 19 => [Tim(14)],
        TIM15_IRQn = 20 => [Tim(15)],
        TIM16_IRQn = 21 => [Tim(16)],
        TIM17_IRQn = 22 => [Tim(17)],
        I2C1_IRQn = 23 => [I2c(1)],
        I2C2_IRQn = 24 => [I2c(2)],
        SPI1_IRQn = 25 => [Spi(1)],
        SPI2_IRQn = 26 => [Spi(2)],
        USART1_IRQn = 27 => [Usart(1)],
        USART2_IRQn = 28 => [Usart(2)],
        USART3_8_IRQn = 29 => [
            Usart(3) => line(29, 0),
            Usart(4) => line(29, 1),
            Usart(5) => line(29, 2),
            Usart(6) => line(29, 3),
            Usart(7) => line(29, 4),
            Usart(8) => line(29, 5),
        ],
        CEC_CAN_IRQn = 30 => [Cec => line(30, 0), Can(1) => line(30, 1)],
        USB_IRQn = 31 => [Usb],
    ],
};
