//! Serial port binding registry
//!
//! Maps a UART instance to the one [`SerialInterrupt`] bound to it. Binding
//! a second port to an instance is rejected, which is how exclusive
//! ownership of a peripheral is enforced. The interrupt dispatcher resolves
//! serial interrupts through the registry, so an instance nobody bound is
//! silently ignored.
//!
//! The table sits behind an `embassy-sync` blocking mutex. Use
//! `CriticalSectionRawMutex` when binding can race with interrupts and
//! `NoopRawMutex` when everything runs in one context.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use strata_hal::Peripheral;

use crate::irq::LogicalHandler;
use crate::system::Fatal;

/// USART/UART instances 1-10
const USART_SLOTS: usize = 10;
/// LPUART instances 1-2
const LPUART_SLOTS: usize = 2;

/// Number of bindable instances
pub const SLOTS: usize = USART_SLOTS + LPUART_SLOTS;

/// Interrupt entry point of a bound serial port
pub trait SerialInterrupt {
    /// Service the port's UART interrupt
    fn on_interrupt(&self);
}

/// Registry slot of a serial instance
fn slot(peripheral: Peripheral) -> Option<usize> {
    match peripheral {
        Peripheral::Usart(n) if (1..=USART_SLOTS as u8).contains(&n) => Some(usize::from(n - 1)),
        Peripheral::Lpuart(n) if (1..=LPUART_SLOTS as u8).contains(&n) => {
            Some(USART_SLOTS + usize::from(n - 1))
        }
        _ => None,
    }
}

/// Serial port binding table
pub struct SerialRegistry<'a, M: RawMutex> {
    ports: Mutex<M, RefCell<[Option<&'a dyn SerialInterrupt>; SLOTS]>>,
}

impl<'a, M: RawMutex> Default for SerialRegistry<'a, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, M: RawMutex> SerialRegistry<'a, M> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            ports: Mutex::new(RefCell::new([None; SLOTS])),
        }
    }

    /// Bind `port` to `peripheral`
    pub fn bind(&self, peripheral: Peripheral, port: &'a dyn SerialInterrupt) -> Result<(), Fatal> {
        let index = slot(peripheral).ok_or(Fatal::UnmappedPeripheral(peripheral))?;
        self.ports.lock(|ports| {
            let mut ports = ports.borrow_mut();
            if ports[index].is_some() {
                error!("{:?} already bound", peripheral);
                return Err(Fatal::PeripheralInUse(peripheral));
            }
            ports[index] = Some(port);
            Ok(())
        })
    }

    /// Release the binding of `peripheral`
    ///
    /// Returns `false` if nothing was bound.
    pub fn unbind(&self, peripheral: Peripheral) -> bool {
        let Some(index) = slot(peripheral) else {
            return false;
        };
        self.ports.lock(|ports| ports.borrow_mut()[index].take().is_some())
    }

    /// Check if `peripheral` has a bound port
    pub fn is_bound(&self, peripheral: Peripheral) -> bool {
        self.lookup(peripheral).is_some()
    }

    fn lookup(&self, peripheral: Peripheral) -> Option<&'a dyn SerialInterrupt> {
        let index = slot(peripheral)?;
        self.ports.lock(|ports| ports.borrow()[index])
    }
}

impl<M: RawMutex> LogicalHandler for SerialRegistry<'_, M> {
    fn handles(&self, peripheral: Peripheral) -> bool {
        peripheral.is_serial()
    }

    fn on_interrupt(&self, peripheral: Peripheral) {
        // Call outside the lock so the port may touch the registry
        if let Some(port) = self.lookup(peripheral) {
            port.on_interrupt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    struct Counter(Cell<u32>);

    impl SerialInterrupt for Counter {
        fn on_interrupt(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_slot_mapping() {
        assert_eq!(slot(Peripheral::Usart(1)), Some(0));
        assert_eq!(slot(Peripheral::Usart(10)), Some(9));
        assert_eq!(slot(Peripheral::Lpuart(1)), Some(10));
        assert_eq!(slot(Peripheral::Usart(0)), None);
        assert_eq!(slot(Peripheral::Lpuart(3)), None);
        assert_eq!(slot(Peripheral::Spi(1)), None);
    }

    #[test]
    fn test_bind_is_exclusive() {
        let a = Counter(Cell::new(0));
        let b = Counter(Cell::new(0));
        let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();

        assert_eq!(registry.bind(Peripheral::Usart(2), &a), Ok(()));
        assert_eq!(
            registry.bind(Peripheral::Usart(2), &b),
            Err(Fatal::PeripheralInUse(Peripheral::Usart(2)))
        );

        assert!(registry.unbind(Peripheral::Usart(2)));
        assert!(!registry.unbind(Peripheral::Usart(2)));
        assert_eq!(registry.bind(Peripheral::Usart(2), &b), Ok(()));
    }

    #[test]
    fn test_unmapped_instance() {
        let a = Counter(Cell::new(0));
        let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
        assert_eq!(
            registry.bind(Peripheral::Usart(11), &a),
            Err(Fatal::UnmappedPeripheral(Peripheral::Usart(11)))
        );
    }

    #[test]
    fn test_dispatch_reaches_bound_port_only() {
        let a = Counter(Cell::new(0));
        let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
        registry.bind(Peripheral::Lpuart(1), &a).unwrap();

        registry.on_interrupt(Peripheral::Lpuart(1));
        registry.on_interrupt(Peripheral::Usart(3));
        assert_eq!(a.0.get(), 1);
        assert!(registry.handles(Peripheral::Usart(3)));
        assert!(!registry.handles(Peripheral::Tim(3)));
    }
}
