//! Cortex-M4 high-performance line (F42x/F43x superset)

use strata_hal::Family;
use strata_hal::Peripheral::*;

use crate::irq::VectorTable;

pub static TABLE: VectorTable = VectorTable {
    family: Family::F4,
    entries: vectors![
        WWDG_IRQn = 0 => [Wwdg],
        PVD_IRQn = 1 => [Pvd],
        TAMP_STAMP_IRQn = 2 => [Rtc],
        RTC_WKUP_IRQn = 3 => [Rtc],
        FLASH_IRQn = 4 => [Flash],
        RCC_IRQn = 5 => [Rcc],
        EXTI0_IRQn = 6 => [Exti(0)],
        EXTI1_IRQn = 7 => [Exti(1)],
        EXTI2_IRQn = 8 => [Exti(2)],
        EXTI3_IRQn = 9 => [Exti(3)],
        EXTI4_IRQn = 10 => [Exti(4)],
        DMA1_Stream0_IRQn = 11 => [Dma(1, 0)],
        DMA1_Stream1_IRQn = 12 => [Dma(1, 1)],
        DMA1_Stream2_IRQn = 13 => [Dma(1, 2)],
        DMA1_Stream3_IRQn = 14 => [Dma(1, 3)],
        DMA1_Stream4_IRQn = 15 => [Dma(1, 4)],
        DMA1_Stream5_IRQn = 16 => [Dma(1, 5)],
        DMA1_Stream6_IRQn = 17 => [Dma(1, 6)],
        ADC_IRQn = 18 => [Adc(1), Adc(2), Adc(3)],
        CAN1_TX_IRQn = 19 => [Can(1)],
        CAN1_RX0_IRQn = 20 => [Can(1)],
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
        OTG_FS_WKUP_IRQn = 42 => [OtgFs],
        TIM8_BRK_TIM12_IRQn = 43 => [Tim(8), Tim(12)],
        TIM8_UP_TIM13_IRQn = 44 => [Tim(8), Tim(13)],
        TIM8_TRG_COM_TIM14_IRQn = 45 => [Tim(8), Tim(14)],
        TIM8_CC_IRQn = 46 => [Tim(8)],
        DMA1_Stream7_IRQn = 47 => [Dma(1, 7)],
        FMC_IRQn = 48 => [Fsmc],
        SDIO_IRQn = 49 => [Sdio],
        TIM5_IRQn = 50 => [Tim(5)],
        SPI3_IRQn = 51 => [Spi(3)],
        UART4_IRQn = 52 => [Usart(4)],
        UART5_IRQn = 53 => [Usart(5)],
        TIM6_DAC_IRQn = 54 => [Tim(6), Dac],
        TIM7_IRQn = 55 => [Tim(7)],
        DMA2_Stream0_IRQn = 56 => [Dma(2, 0)],
        DMA2_Stream1_IRQn = 57 => [Dma(2, 1)],
        DMA2_Stream2_IRQn = 58 => [Dma(2, 2)],
        DMA2_Stream3_IRQn = 59 => [Dma(2, 3)],
        DMA2_Stream4_IRQn = 60 => [Dma(2, 4)],
        ETH_IRQn = 61 => [Eth],
        ETH_WKUP_IRQn = 62 => [Eth],
        CAN2_TX_IRQn = 63 => [Can(2)],
        CAN2_RX0_IRQn = 64 => [Can(2)],
        CAN2_RX1_IRQn = 65 => [Can(2)],
        CAN2_SCE_IRQn = 66 => [Can(2)],
        OTG_FS_IRQn = 67 => [OtgFs],
        DMA2_Stream5_IRQn = 68 => [Dma(2, 5)],
        DMA2_Stream6_IRQn = 69 => [Dma(2, 6)],
        DMA2_Stream7_IRQn = 70 => [Dma(2, 7)],
        USART6_IRQn = 71 => [Usart(6)],
        I2C3_EV_IRQn = 72 => [I2c(3)],
        I2C3_ER_IRQn = 73 => [I2c(3)],
        OTG_HS_EP1_OUT_IRQn = 74 => [OtgHs],
        OTG_HS_EP1_IN_IRQn = 75 => [OtgHs],
        OTG_HS_WKUP_IRQn = 76 => [OtgHs],
        OTG_HS_IRQn = 77 => [OtgHs],
        DCMI_IRQn = 78 => [Dcmi],
        HASH_RNG_IRQn = 80 => [Hash, Rng],
        FPU_IRQn = 81 => [Fpu],
        UART7_IRQn = 82 => [Usart(7)],
        UART8_IRQn = 83 => [Usart(8)],
        SPI4_IRQn = 84 => [Spi(4)],
        SPI5_IRQn = 85 => [Spi(5)],
        SPI6_IRQn = 86 => [Spi(6)],
    ],
};
