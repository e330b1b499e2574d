//! Cortex-M3 mainstream line (XL-density superset)
//!
//! No SYSCFG interrupt-line registers: shared timer, ADC and USB/CAN
//! vectors call every candidate handler.

use strata_hal::Family;
use strata_hal::Peripheral::*;

use crate::irq::VectorTable;

pub static TABLE: VectorTable = VectorTable {
    family: Family::F1,
    entries: vectors![
        WWDG_IRQn = 0 => [Wwdg],
        PVD_IRQn = 1 => [Pvd],
        TAMPER_IRQn = 2 => [Rtc],
        RTC_IRQn = 3 => [Rtc],
        FLASH_IRQn = 4 => [Flash],
        RCC_IRQn = 5 => [Rcc],
        EXTI0_IRQn = 6 => [Exti(0)],
        EXTI1_IRQn = 7 => [Exti(1)],
        EXTI2_IRQn = 8 => [Exti(2)],
        EXTI3_IRQn = 9 => [Exti(3)],
        EXTI4_IRQn = 10 => [Exti(4)],
        DMA1_Channel1_IRQn = 11 => [Dma(1, 1)],
        DMA1_Channel2_IRQn = 12 => [Dma(1, 2)],
        DMA1_Channel3_IRQn = 13 => [Dma(1, 3)],
        DMA1_Channel4_IRQn = 14 => [Dma(1, 4)],
        DMA1_Channel5_IRQn = 15 => [Dma(1, 5)],
        DMA1_Channel6_IRQn = 16 => [Dma(1, 6)],
        DMA1_Channel7_IRQn = 17 => [Dma(1, 7)],
        ADC1_2_IRQn = 18 => [Adc(1), Adc(2)],
        USB_HP_CAN1_TX_IRQn = 19 => [Usb, Can(1)],
        USB_LP_CAN1_RX0_IRQn = 20 => [Usb, Can(1)],
        CAN1_RX1_IRQn = 21 => [Can(1)],
        CAN1_SCE_IRQn = 22 => [Can(1)],
        EXTI9_5_IRQn = 23 => [
            Exti(5) => exti(5),
            Exti(6) => exti(6),
            Exti(7) => exti(7),
            Exti(8) => exti(8),
            Exti(9) => exti(9),
        ],
        TIM1_BRK_TIM9_IRQn = 24 => [Tim(1), Tim(9)],
        TIM1_UP_TIM10_IRQn = 25 => [Tim(1), Tim(10)],
        TIM1_TRG_COM_TIM11_IRQn = 26 => [Tim(1), Tim(11)],
        TIM1_CC_IRQn = 27 => [Tim(1)],
        TIM2_IRQn = 28 => [Tim(2)],
        TIM3_IRQn = 29 => [Tim(3)],
        TIM4_IRQn = 30 => [Tim(4)],
        I2C1_EV_IRQn = 31 => [I2c(1)],
        I2C1_ER_IRQn = 32 => [I2c(1)],
        I2C2_EV_IRQn = 33 => [I2c(2)],
        I2C2_ER_IRQn = 34 => [I2c(2)],
        SPI1_IRQn = 35 => [Spi(1)],
        SPI2_IRQn = 36 => [Spi(2)],
        USART1_IRQn = 37 => [Usart(1)],
        USART2_IRQn = 38 => [Usart(2)],
        USART3_IRQn = 39 => [Usart(3)],
        EXTI15_10_IRQn = 40 => [
            Exti(10) => exti(10),
            Exti(11) => exti(11),
            Exti(12) => exti(12),
            Exti(13) => exti(13),
            Exti(14) => exti(14),
            Exti(15) => exti(15),
        ],
        RTC_Alarm_IRQn = 41 => [Rtc],
        USBWakeUp_IRQn = 42 => [Usb],
        TIM8_BRK_TIM12_IRQn = 43 => [Tim(8), Tim(12)],
        TIM8_UP_TIM13_IRQn = 44 => [Tim(8), Tim(13)],
        TIM8_TRG_COM_TIM14_IRQn = 45 => [Tim(8), Tim(14)],
        TIM8_CC_IRQn = 46 => [Tim(8)],
        ADC3_IRQn = 47 => [Adc(3)],
        FSMC_IRQn = 48 => [Fsmc],
        SDIO_IRQn = 49 => [Sdio],
        TIM5_IRQn = 50 => [Tim(5)],
        SPI3_IRQn = 51 => [Spi(3)],
        UART4_IRQn = 52 => [Usart(4)],
        UART5_IRQn = 53 => [Usart(5)],
        TIM6_IRQn = 54 => [Tim(6)],
        TIM7_IRQn = 55 => [Tim(7)],
        DMA2_Channel1_IRQn = 56 => [Dma(2, 1)],
        DMA2_Channel2_IRQn = 57 => [Dma(2, 2)],
        DMA2_Channel3_IRQn = 58 => [Dma(2, 3)],
        DMA2_Channel4_5_IRQn = 59 => [Dma(2, 4), Dma(2, 5)],
    ],
};
