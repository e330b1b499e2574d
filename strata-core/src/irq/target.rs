//! Compile-time family selection
//!
//! Firmware builds enable exactly one `stm32*` feature; the matching table
//! is then available without naming the family at run time.

use strata_hal::Family;

use super::VectorTable;

#[cfg(any(
    all(feature = "stm32f0", any(feature = "stm32f1", feature = "stm32f4", feature = "stm32g0", feature = "stm32l0")),
    all(feature = "stm32f1", any(feature = "stm32f4", feature = "stm32g0", feature = "stm32l0")),
    all(feature = "stm32f4", any(feature = "stm32g0", feature = "stm32l0")),
    all(feature = "stm32g0", feature = "stm32l0"),
))]
compile_error!("enable at most one stm32 family feature");

/// Family selected by the enabled `stm32*` feature
pub const TARGET_FAMILY: Option<Family> = if cfg!(feature = "stm32f0") {
    Some(Family::F0)
} else if cfg!(feature = "stm32f1") {
    Some(Family::F1)
} else if cfg!(feature = "stm32f4") {
    Some(Family::F4)
} else if cfg!(feature = "stm32g0") {
    Some(Family::G0)
} else if cfg!(feature = "stm32l0") {
    Some(Family::L0)
} else {
    None
};

/// Vector table of the selected family
pub fn target() -> Option<&'static VectorTable> {
    TARGET_FAMILY.map(VectorTable::for_family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_matches_feature() {
        match TARGET_FAMILY {
            Some(family) => assert_eq!(target().map(|t| t.family), Some(family)),
            None => assert!(target().is_none()),
        }
    }
}
