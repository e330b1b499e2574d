//! Serial ports driven end to end through the interrupt dispatcher
//!
//! Each test wires a port into a registry and dispatcher, and lets the
//! simulated idle hook deliver UART interrupts whenever the foreground
//! yields. A loopback UART hears every byte it sends.

mod common;

use common::{irq_of, pattern, usart1_pins, Bench};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use strata_core::config::{ConsoleConfig, SERIAL_8E1, SERIAL_8N1};
use strata_core::irq::{Dispatcher, VectorTable};
use strata_core::serial::{SerialPort, SerialRegistry};
use strata_core::system::{Board, Runtime, Sketch};
use strata_hal::{Family, Peripheral, PinName, Port};
use strata_hal_sim::{SimIdle, SimUart};

fn echo(family: Family, len: usize) {
    let bench = Bench::new();
    let idle = SimIdle::new(&bench.nvic);
    let port: SerialPort<'_, SimUart, 256, 64> = SerialPort::new(
        bench.platform(family, &idle),
        SimUart::loopback(),
        Peripheral::Usart(1),
        usart1_pins(),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    port.attach(&registry).unwrap();
    let mut dispatcher: Dispatcher<'_, 2> = Dispatcher::new(VectorTable::for_family(family), &bench.nvic, None);
    assert!(dispatcher.register(&registry));
    idle.attach(&dispatcher);
    idle.watch(port.uart(), irq_of(family, Peripheral::Usart(1)));

    port.begin(115200, SERIAL_8N1).unwrap();
    let data = pattern(len);
    assert_eq!(port.write_bytes(&data), len);
    port.flush();
    idle.settle(1000);

    let mut received = Vec::new();
    while let Some(byte) = port.read() {
        received.push(byte);
    }
    assert_eq!(received, data, "echo of {} bytes", len);
    assert_eq!(port.uart().wire(), data);
    for chunk in port.uart().submissions() {
        assert!(!chunk.is_empty() && chunk.len() <= 32, "chunk of {} bytes", chunk.len());
    }
    assert_eq!(port.error_counts().rx_dropped, 0);
    assert_eq!(bench.errors.count(), 0);
}

#[test]
fn test_echo_single_byte() {
    echo(Family::F4, 1);
}

#[test]
fn test_echo_two_bytes() {
    echo(Family::F0, 2);
}

#[test]
fn test_echo_just_under_half_queue() {
    echo(Family::G0, 31);
}

#[test]
fn test_echo_half_queue() {
    echo(Family::L0, 32);
}

#[test]
fn test_echo_three_queues() {
    echo(Family::F1, 192);
}

#[test]
fn test_reader_keeping_pace_loses_nothing() {
    let bench = Bench::new();
    let idle = SimIdle::new(&bench.nvic);
    let port: SerialPort<'_, SimUart, 128, 64> = SerialPort::new(
        bench.platform(Family::F4, &idle),
        SimUart::loopback(),
        Peripheral::Usart(1),
        usart1_pins(),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    port.attach(&registry).unwrap();
    let mut dispatcher: Dispatcher<'_, 2> = Dispatcher::new(VectorTable::for_family(Family::F4), &bench.nvic, None);
    dispatcher.register(&registry);
    idle.attach(&dispatcher);
    idle.watch(port.uart(), irq_of(Family::F4, Peripheral::Usart(1)));

    port.begin(115200, SERIAL_8E1).unwrap();
    let data = pattern(1000);
    let mut received = Vec::new();
    for &byte in &data {
        assert_eq!(port.write(byte), 1);
        while let Some(byte) = port.read() {
            received.push(byte);
        }
    }
    port.flush();
    idle.settle(100);
    while let Some(byte) = port.read() {
        received.push(byte);
    }

    assert_eq!(received, data);
    assert_eq!(port.error_counts().rx_dropped, 0);
    assert!(idle.yields() > 0);
}

#[test]
fn test_restart_after_end() {
    let bench = Bench::new();
    let idle = SimIdle::new(&bench.nvic);
    let port: SerialPort<'_, SimUart> = SerialPort::new(
        bench.platform(Family::L0, &idle),
        SimUart::loopback(),
        Peripheral::Usart(1),
        usart1_pins(),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    port.attach(&registry).unwrap();
    let mut dispatcher: Dispatcher<'_, 2> = Dispatcher::new(VectorTable::for_family(Family::L0), &bench.nvic, None);
    dispatcher.register(&registry);
    idle.attach(&dispatcher);
    let irq = irq_of(Family::L0, Peripheral::Usart(1));
    idle.watch(port.uart(), irq);

    port.begin(115200, SERIAL_8N1).unwrap();
    assert_eq!(port.write_bytes(b"one"), 3);
    port.flush();
    idle.settle(10);
    assert_eq!(port.available(), 3);

    // Unread input does not survive a restart
    port.end();
    assert!(!bench.clocks.is_enabled(Peripheral::Usart(1)));
    assert!(!bench.nvic.is_enabled(irq));
    assert_eq!(port.available(), 0);

    port.begin(57600, SERIAL_8N1).unwrap();
    assert!(bench.clocks.is_enabled(Peripheral::Usart(1)));
    assert_eq!(bench.clocks.resets(Peripheral::Usart(1)), 3);
    assert!(bench.nvic.is_enabled(irq));
    assert_eq!(port.uart().config().map(|c| c.baudrate), Some(57600));
    assert_eq!(port.available_for_write(), 63);

    assert_eq!(port.write_bytes(b"two"), 3);
    port.flush();
    idle.settle(10);
    let mut received = Vec::new();
    while let Some(byte) = port.read() {
        received.push(byte);
    }
    assert_eq!(received, b"two");
    assert_eq!(port.uart().wire(), b"onetwo");
    assert_eq!(bench.errors.count(), 0);
}

#[test]
fn test_byte_stream_traits() {
    use embedded_io::{Read, ReadReady, Write};

    let bench = Bench::new();
    let idle = SimIdle::new(&bench.nvic);
    let port: SerialPort<'_, SimUart, 64, 64> = SerialPort::new(
        bench.platform(Family::F4, &idle),
        SimUart::loopback(),
        Peripheral::Usart(1),
        usart1_pins(),
    );
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    port.attach(&registry).unwrap();
    let mut dispatcher: Dispatcher<'_, 2> = Dispatcher::new(VectorTable::for_family(Family::F4), &bench.nvic, None);
    dispatcher.register(&registry);
    idle.attach(&dispatcher);
    idle.watch(port.uart(), irq_of(Family::F4, Peripheral::Usart(1)));
    port.begin(9600, SERIAL_8N1).unwrap();

    // Inherent `read` and `flush` shadow the trait methods on `&SerialPort`
    let mut io = &port;
    io.write_all(b"hello").unwrap();
    Write::flush(&mut io).unwrap();
    assert!(io.read_ready().unwrap());

    let mut buf = [0u8; 8];
    let n = Read::read(&mut io, &mut buf).unwrap();
    assert_eq!(&buf[..n], b"hello");
    assert!(!io.read_ready().unwrap());

    // A read with nothing buffered yields until the receiver delivers
    port.uart().inject_rx(b'o');
    port.uart().inject_rx(b'k');
    let yields = idle.yields();
    let n = Read::read(&mut io, &mut buf).unwrap();
    assert_eq!(&buf[..n], b"ok");
    assert!(idle.yields() > yields);
}

struct ConsoleBoard<'a, 'p> {
    console: &'a SerialPort<'p, SimUart>,
    config: &'a ConsoleConfig,
}

impl Board for ConsoleBoard<'_, '_> {
    fn init(&self) {
        self.console.begin(self.config.baud, self.config.format).unwrap();
    }
}

struct Shout<'a, 'p> {
    console: &'a SerialPort<'p, SimUart>,
    ticks: usize,
}

impl Sketch for Shout<'_, '_> {
    fn setup(&mut self) {
        self.console.write_bytes(b"> ");
        self.console.flush();
    }

    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn serial_event(&mut self, port: usize) {
        assert_eq!(port, 0);
        while let Some(byte) = self.console.read() {
            self.console.write(byte.to_ascii_uppercase());
        }
    }
}

#[test]
fn test_super_loop_serial_event() {
    let bench = Bench::new();
    let idle = SimIdle::new(&bench.nvic);
    let config = ConsoleConfig::new(
        Peripheral::Usart(2),
        PinName::new(Port::A, 3),
        PinName::new(Port::A, 2),
        7,
    );
    let console: SerialPort<'_, SimUart> = SerialPort::console(bench.platform(Family::F4, &idle), SimUart::new(), &config);
    let registry: SerialRegistry<'_, NoopRawMutex> = SerialRegistry::new();
    console.attach(&registry).unwrap();
    let mut dispatcher: Dispatcher<'_, 2> = Dispatcher::new(VectorTable::for_family(Family::F4), &bench.nvic, None);
    dispatcher.register(&registry);
    idle.attach(&dispatcher);
    idle.watch(console.uart(), irq_of(Family::F4, Peripheral::Usart(2)));

    let mut runtime: Runtime<'_, 2> = Runtime::new();
    assert_eq!(runtime.add_event_source(&console), Some(0));
    let board = ConsoleBoard {
        console: &console,
        config: &config,
    };
    let mut sketch = Shout {
        console: &console,
        ticks: 0,
    };

    runtime.start(&board, &mut sketch);
    assert_eq!(console.uart().wire(), b"> ");

    // Nothing received: tick only
    runtime.poll(&mut sketch);
    assert_eq!(sketch.ticks, 1);

    console.uart().inject_rx(b'h');
    console.uart().inject_rx(b'i');
    idle.settle(10);
    runtime.poll(&mut sketch);
    console.flush();

    assert_eq!(sketch.ticks, 2);
    assert_eq!(console.uart().wire(), b"> HI");
    assert_eq!(console.available(), 0);
}
