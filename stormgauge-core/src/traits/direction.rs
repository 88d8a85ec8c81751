//! Wind vane abstraction
//!
//! Reading the vane means sampling a resistor ladder through an ADC and
//! mapping the voltage to one of sixteen headings. That is board-specific,
//! so the engine only asks for the finished heading.

/// Source of the instantaneous wind heading
///
/// Implementations must return degrees in `[0, 360)`, with 0 meaning wind
/// from the north. The engine trusts the value as given; a vane that cannot
/// be read should report its last good heading rather than a sentinel.
///
/// Any `FnMut() -> u16` closure is a direction source:
///
/// ```rust
/// use stormgauge_core::DirectionSource;
///
/// let mut heading = 0u16;
/// let mut vane = move || { heading = (heading + 45) % 360; heading };
/// assert_eq!(vane.read_direction(), 45);
/// assert_eq!(vane.read_direction(), 90);
/// ```
pub trait DirectionSource {
    /// Sample the vane, in degrees
    fn read_direction(&mut self) -> u16;
}

impl<F> DirectionSource for F
where
    F: FnMut() -> u16,
{
    fn read_direction(&mut self) -> u16 {
        self()
    }
}

/// Vane stuck at one heading, for tests and bench setups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDirection(pub u16);

impl DirectionSource for FixedDirection {
    fn read_direction(&mut self) -> u16 {
        self.0
    }
}
