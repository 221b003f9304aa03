//! UART serial communication abstractions
//!
//! The decoder is poll-driven: the host repeatedly drains whatever the
//! UART has buffered. [`ByteSource`] captures exactly that contract.

/// Errors reported by a byte source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    /// Read attempted with nothing buffered
    Empty,
    /// Receive FIFO overrun, bytes were lost
    Overrun,
    /// Line break detected
    Break,
    /// Parity check failed
    Parity,
    /// Stop bit missing
    Framing,
}

/// Polled byte source
///
/// Callers check [`available`](ByteSource::available) before each
/// [`read`](ByteSource::read) and stop once it reports zero.
pub trait ByteSource {
    /// Error type for read operations
    type Error;

    /// Number of bytes that can be read without waiting
    fn available(&self) -> usize;

    /// Read one buffered byte
    fn read(&mut self) -> Result<u8, Self::Error>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    type Error = T::Error;

    fn available(&self) -> usize {
        (**self).available()
    }

    fn read(&mut self) -> Result<u8, Self::Error> {
        (**self).read()
    }
}

/// Byte source over an already-received buffer
///
/// The firmware wraps each chunk it pulls off the UART in one of these.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a source that yields `data` front to back
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet read
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = UartError;

    fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read(&mut self) -> Result<u8, Self::Error> {
        let byte = *self.data.get(self.pos).ok_or(UartError::Empty)?;
        self.pos += 1;
        Ok(byte)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    /// Control box link settings: 9600 8N1
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
