//! ADC interface trait
//!
//! The turret's potentiometer feedback is read through this trait: select the
//! reference, start a conversion, block until complete, combine the result
//! bytes. Implementations own that whole sequence behind `read`.

use crate::platform::Result;

/// Analog input interface trait
pub trait AnalogInterface {
    /// Perform one blocking conversion and return the result.
    ///
    /// Results are 10-bit (0..=1023).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::ConversionFailed)` if the
    /// conversion does not complete.
    fn read(&mut self) -> Result<u16>;
}
