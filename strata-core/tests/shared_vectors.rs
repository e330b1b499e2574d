//! Ports sharing one physical vector, and fatal setup paths

mod common;

use common::{irq_of, usart1_pins, Bench};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use strata_core::config::SERIAL_8N1;
use strata_core::irq::{Dispatcher, VectorTable};
use strata_core::serial::{SerialError, SerialPins, SerialPort, SerialRegistry};
use strata_core::system::Fatal;
use strata_hal::{Family, Irqn, PendingSource, Peripheral, PinName, Port, SpinIdle};
use strata_hal_sim::{SimIdle, SimPending, SimUart};

fn pins(rx: u8, tx: u8) -> SerialPins {
    SerialPins {
        rx: PinName::new(Port::B, rx),
        tx: PinName::new(Port::B, tx),
        rx_af: 4,
        tx_af: 4,
    }
}

#[test]
fn test_pending_bits_route_shared_vector() {
    let bench = Bench::new();
    let pending = SimPending::new();
    let idle = SimIdle::new(&bench.nvic);
    let usart3: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F0, &idle),
        SimUart::new(),
        Peripheral::Usart(3),
        pins(11, 10),
    );
    let usart4: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F0, &idle),
        SimUart::new(),
        Peripheral::Usart(4),
        pins(1, 0),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    usart3.attach(&registry).unwrap();
    usart4.attach(&registry).unwrap();
    let mut dispatcher: Dispatcher<'_, 1> =
        Dispatcher::new(VectorTable::for_family(Family::F0), &bench.nvic, Some(&pending));
    dispatcher.register(&registry);
    idle.attach(&dispatcher);

    let irq = irq_of(Family::F0, Peripheral::Usart(3));
    assert_eq!(irq, Irqn(29));
    assert_eq!(irq_of(Family::F0, Peripheral::Usart(4)), irq);
    idle.watch(usart3.uart(), irq);
    idle.watch(usart4.uart(), irq);

    usart3.begin(115200, SERIAL_8N1).unwrap();
    usart4.begin(115200, SERIAL_8N1).unwrap();

    usart4.uart().inject_rx(b'4');
    pending.raise(PendingSource::ItLine { line: 29, bit: 1 });
    idle.settle(10);
    assert_eq!(usart4.read(), Some(b'4'));
    assert_eq!(usart3.available(), 0);
    assert!(!bench.nvic.is_pending(irq));

    // USART3's line status bit is clear, so the vector never reaches it
    usart3.uart().inject_rx(b'3');
    assert_eq!(idle.settle(5), 5);
    assert_eq!(usart3.available(), 0);

    pending.raise(PendingSource::ItLine { line: 29, bit: 0 });
    idle.settle(5);
    assert_eq!(usart3.read(), Some(b'3'));
    assert_eq!(usart4.available(), 0);
}

#[test]
fn test_shared_vector_without_pending_bits_calls_every_port() {
    let bench = Bench::new();
    let idle = SimIdle::new(&bench.nvic);
    let usart3: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F0, &idle),
        SimUart::new(),
        Peripheral::Usart(3),
        pins(11, 10),
    );
    let usart4: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F0, &idle),
        SimUart::new(),
        Peripheral::Usart(4),
        pins(1, 0),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    usart3.attach(&registry).unwrap();
    usart4.attach(&registry).unwrap();
    let mut dispatcher: Dispatcher<'_, 1> = Dispatcher::new(VectorTable::for_family(Family::F0), &bench.nvic, None);
    dispatcher.register(&registry);
    idle.attach(&dispatcher);

    usart3.begin(9600, SERIAL_8N1).unwrap();
    usart4.begin(9600, SERIAL_8N1).unwrap();

    // All six routes run on every firing; unbound and idle ones do nothing
    usart3.uart().inject_rx(b'a');
    usart4.uart().inject_rx(b'b');
    assert_eq!(dispatcher.dispatch(Irqn(29)), 6);
    assert_eq!(usart3.read(), Some(b'a'));
    assert_eq!(usart4.read(), Some(b'b'));
    assert_eq!(dispatcher.dispatch(Irqn(29)), 6);
    assert_eq!(usart3.available() + usart4.available(), 0);

    // Vectors with no table entry reach nobody
    assert_eq!(dispatcher.dispatch(Irqn(200)), 0);
}

#[test]
fn test_second_port_on_instance_is_fatal() {
    let bench = Bench::new();
    let first: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F4, &SpinIdle),
        SimUart::new(),
        Peripheral::Usart(2),
        usart1_pins(),
    );
    let second: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F4, &SpinIdle),
        SimUart::new(),
        Peripheral::Usart(2),
        usart1_pins(),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();

    first.attach(&registry).unwrap();
    assert_eq!(
        second.attach(&registry),
        Err(Fatal::PeripheralInUse(Peripheral::Usart(2)))
    );
    assert_eq!(bench.errors.count(), 1);
    assert_eq!(
        bench.errors.reported().as_slice(),
        &[Fatal::PeripheralInUse(Peripheral::Usart(2))]
    );

    first.detach(&registry);
    assert!(second.attach(&registry).is_ok());
    assert_eq!(bench.errors.count(), 1);
}

#[test]
fn test_second_port_cannot_start_on_owned_instance() {
    let bench = Bench::new();
    let owner: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F4, &SpinIdle),
        SimUart::new(),
        Peripheral::Usart(1),
        usart1_pins(),
    );
    let intruder: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::F4, &SpinIdle),
        SimUart::new(),
        Peripheral::Usart(1),
        usart1_pins(),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    owner.attach(&registry).unwrap();
    assert!(intruder.attach(&registry).is_err());

    owner.begin(115200, SERIAL_8N1).unwrap();
    assert_eq!(
        intruder.begin(9600, SERIAL_8N1),
        Err(SerialError::Fatal(Fatal::Unbound(Peripheral::Usart(1))))
    );
    assert_eq!(
        bench.errors.reported().as_slice(),
        &[
            Fatal::PeripheralInUse(Peripheral::Usart(1)),
            Fatal::Unbound(Peripheral::Usart(1)),
        ]
    );
    assert_eq!(bench.clocks.resets(Peripheral::Usart(1)), 1);
    assert!(intruder.uart().config().is_none());
    assert!(!intruder.is_configured());
    assert_eq!(intruder.write(b'x'), 0);

    // Detaching a port that never bound leaves the owner in place
    intruder.detach(&registry);
    assert!(owner.is_bound());
    assert!(owner.is_configured());

    // Once the owner lets go, the instance can change hands
    owner.detach(&registry);
    assert!(!owner.is_configured());
    intruder.attach(&registry).unwrap();
    intruder.begin(9600, SERIAL_8N1).unwrap();
    assert_eq!(intruder.uart().config().map(|c| c.baudrate), Some(9600));
    assert_eq!(bench.errors.count(), 2);
}

#[test]
fn test_invalid_pin_stops_before_any_gpio_write() {
    let bench = Bench::new();
    let pins = SerialPins {
        tx: PinName::from_raw(0xF3),
        ..usart1_pins()
    };
    let port: SerialPort<'_, SimUart> =
        SerialPort::new(bench.platform(Family::F4, &SpinIdle), SimUart::new(), Peripheral::Usart(1), pins);
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    port.attach(&registry).unwrap();

    assert_eq!(
        port.begin(115200, SERIAL_8N1),
        Err(SerialError::Fatal(Fatal::InvalidPin(PinName::from_raw(0xF3))))
    );
    assert_eq!(bench.errors.count(), 1);
    assert_eq!(bench.gpio.write_count(), 0);
    assert!(!port.is_configured());
    assert_eq!(port.write(b'x'), 0);
}

#[test]
fn test_vector_tables_serve_every_serial_instance_once() {
    for family in [Family::F0, Family::F1, Family::F4, Family::G0, Family::L0] {
        let table = VectorTable::for_family(family);
        for peripheral in [Peripheral::Usart(1), Peripheral::Usart(2)] {
            let irq = table.irq_for(peripheral);
            assert!(irq.is_some(), "{:?} {:?}", family, peripheral);
            assert_eq!(table.vectors_for(peripheral).count(), 1, "{:?} {:?}", family, peripheral);
        }
    }
}
