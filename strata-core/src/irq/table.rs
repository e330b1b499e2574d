//! Vector table data model

use heapless::Vec;
use strata_hal::{Family, Irqn, PendingLines, PendingSource, Peripheral};

use super::families;

/// Most routes a single vector fans out to
pub const MAX_ROUTES: usize = 16;

/// One logical target of a physical vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Logical peripheral handler to invoke
    pub target: Peripheral,
    /// Pending bit gating the call, if the part exposes one
    pub pending: Option<PendingSource>,
}

/// A physical interrupt vector and its fan-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorEntry {
    /// Vendor name of the vector
    pub name: &'static str,
    /// Position in the vector table
    pub irqn: Irqn,
    /// Logical handlers served by this vector, in call order
    pub routes: &'static [Route],
}

impl VectorEntry {
    /// Check if more than one peripheral shares this vector
    pub fn is_shared(&self) -> bool {
        self.routes
            .iter()
            .skip(1)
            .any(|route| route.target != self.routes[0].target)
    }

    /// Targets to call for one firing of this vector, in route order
    ///
    /// Gated routes are kept only when `pending` reports their bit set.
    /// Without an accessor every route is kept.
    pub fn active_targets(&self, pending: Option<&dyn PendingLines>) -> Vec<Peripheral, MAX_ROUTES> {
        let mut targets = Vec::new();
        for route in self.routes {
            let raised = match (route.pending, pending) {
                (Some(source), Some(lines)) => lines.is_pending(source),
                _ => true,
            };
            if raised && targets.push(route.target).is_err() {
                break;
            }
        }
        targets
    }

    /// Check if this vector routes to `peripheral`
    pub fn serves(&self, peripheral: Peripheral) -> bool {
        self.routes.iter().any(|route| route.target == peripheral)
    }
}

/// Complete vector mapping of one chip family
#[derive(Debug)]
pub struct VectorTable {
    /// Family this table describes
    pub family: Family,
    /// Vectors ordered by interrupt number
    pub entries: &'static [VectorEntry],
}

impl VectorTable {
    /// Table for a family
    pub fn for_family(family: Family) -> &'static VectorTable {
        match family {
            Family::F0 => &families::f0::TABLE,
            Family::F1 => &families::f1::TABLE,
            Family::F4 => &families::f4::TABLE,
            Family::G0 => &families::g0::TABLE,
            Family::L0 => &families::l0::TABLE,
        }
    }

    /// Find the vector with the given interrupt number
    pub fn lookup(&self, irqn: Irqn) -> Option<&'static VectorEntry> {
        self.entries.iter().find(|entry| entry.irqn == irqn)
    }

    /// Find a vector by its vendor name
    pub fn by_name(&self, name: &str) -> Option<&'static VectorEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All vectors routing to `peripheral`
    pub fn vectors_for(
        &self,
        peripheral: Peripheral,
    ) -> impl Iterator<Item = &'static VectorEntry> + 'static {
        self.entries
            .iter()
            .filter(move |entry| entry.serves(peripheral))
    }

    /// Interrupt line of a peripheral with a single vector
    ///
    /// Returns the first matching vector, which for UARTs is the only one.
    pub fn irq_for(&self, peripheral: Peripheral) -> Option<Irqn> {
        self.vectors_for(peripheral).next().map(|entry| entry.irqn)
    }
}

/// Build a `&'static [VectorEntry]` from a compact description
///
/// ```text
/// vectors![
///     USART1_IRQn = 27 => [Usart(1)],
///     USART3_8_IRQn = 29 => [Usart(3) => line(29, 0), Usart(4) => line(29, 1)],
///     EXTI4_15_IRQn = 7 => [Exti(4) => exti(4)],
/// ]
/// ```
macro_rules! vectors {
    (@pending) => { None };
    (@pending line($line:literal, $bit:literal)) => {
        Some(::strata_hal::PendingSource::ItLine { line: $line, bit: $bit })
    };
    (@pending exti($n:literal)) => {
        Some(::strata_hal::PendingSource::Exti($n))
    };
    ($( $name:ident = $irqn:literal => [
        $( $target:expr $( => $kind:ident ( $($arg:literal),+ ) )? ),* $(,)?
    ] ),* $(,)?) => {
        &[ $( $crate::irq::VectorEntry {
            name: stringify!($name),
            irqn: ::strata_hal::Irqn($irqn),
            routes: &[ $( $crate::irq::Route {
                target: $target,
                pending: vectors!(@pending $( $kind ( $($arg),+ ) )?),
            } ),* ],
        } ),* ]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_hal::Peripheral::*;

    const ALL: [Family; 5] = [Family::F0, Family::F1, Family::F4, Family::G0, Family::L0];

    #[test]
    fn test_tables_match_family() {
        for family in ALL {
            assert_eq!(VectorTable::for_family(family).family, family);
        }
    }

    #[test]
    fn test_irqn_unique_and_sorted() {
        for family in ALL {
            let table = VectorTable::for_family(family);
            for pair in table.entries.windows(2) {
                assert!(
                    pair[0].irqn < pair[1].irqn,
                    "{:?}: {} must come before {}",
                    family,
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }

    #[test]
    fn test_names_are_vendor_style() {
        for family in ALL {
            for entry in VectorTable::for_family(family).entries {
                assert!(entry.name.ends_with("_IRQn"), "{}", entry.name);
                assert!(!entry.routes.is_empty(), "{} has no routes", entry.name);
            }
        }
    }

    #[test]
    fn test_itline_gates_match_vector() {
        // SYSCFG ITLINEx status registers are indexed by vector number
        for family in ALL {
            for entry in VectorTable::for_family(family).entries {
                for route in entry.routes {
                    if let Some(PendingSource::ItLine { line, .. }) = route.pending {
                        assert_eq!(u16::from(line), entry.irqn.0, "{}", entry.name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_gated_bits_unique_per_vector() {
        for family in ALL {
            for entry in VectorTable::for_family(family).entries {
                let gates: std::vec::Vec<_> =
                    entry.routes.iter().filter_map(|route| route.pending).collect();
                for (i, a) in gates.iter().enumerate() {
                    assert!(!gates[i + 1..].contains(a), "{} reuses {:?}", entry.name, a);
                }
            }
        }
    }

    #[test]
    fn test_routes_fit_scratch() {
        for family in ALL {
            for entry in VectorTable::for_family(family).entries {
                assert!(entry.routes.len() <= MAX_ROUTES, "{}", entry.name);
            }
        }
    }

    #[test]
    fn test_every_family_has_usart1_and_usart2() {
        for family in ALL {
            let table = VectorTable::for_family(family);
            assert!(table.irq_for(Usart(1)).is_some(), "{:?}", family);
            assert!(table.irq_for(Usart(2)).is_some(), "{:?}", family);
        }
    }

    #[test]
    fn test_shared_usart_vector_f0() {
        let table = VectorTable::for_family(Family::F0);
        let entry = table.lookup(Irqn(29)).unwrap();
        assert_eq!(entry.name, "USART3_8_IRQn");
        assert!(entry.is_shared());
        assert_eq!(table.irq_for(Usart(5)), Some(Irqn(29)));
        assert_eq!(table.irq_for(Usart(9)), None);
    }

    #[test]
    fn test_timer_fans_in_from_several_vectors() {
        let table = VectorTable::for_family(Family::F4);
        let names: std::vec::Vec<_> = table.vectors_for(Tim(1)).map(|e| e.name).collect();
        assert_eq!(
            names,
            [
                "TIM1_BRK_TIM9_IRQn",
                "TIM1_UP_TIM10_IRQn",
                "TIM1_TRG_COM_TIM11_IRQn",
                "TIM1_CC_IRQn"
            ]
        );
        // Same timer on every route is not a shared vector
        assert!(!table.by_name("TIM1_CC_IRQn").unwrap().is_shared());
    }
}
