//! Mock ADC implementation for testing

use crate::platform::{traits::AnalogInterface, Result};

/// Mock analog input
///
/// Replays a scripted sequence of conversion results; once the script is
/// exhausted every further read returns the last scripted value. This models
/// a potentiometer sweeping toward a position and holding there.
#[derive(Debug)]
pub struct MockAnalog {
    script: heapless::Deque<u16, 64>,
    held: u16,
}

impl MockAnalog {
    /// Create a mock that always reads `value`
    pub fn constant(value: u16) -> Self {
        Self {
            script: heapless::Deque::new(),
            held: value,
        }
    }

    /// Create a mock that replays `readings` in order, then holds the last one
    pub fn scripted(readings: &[u16]) -> Self {
        let mut script = heapless::Deque::new();
        let mut held = 0;
        for &r in readings {
            let _ = script.push_back(r);
            held = r;
        }
        Self { script, held }
    }
}

impl AnalogInterface for MockAnalog {
    fn read(&mut self) -> Result<u16> {
        match self.script.pop_front() {
            Some(v) => Ok(v),
            None => Ok(self.held),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_adc_constant() {
        let mut adc = MockAnalog::constant(306);
        assert_eq!(adc.read().unwrap(), 306);
        assert_eq!(adc.read().unwrap(), 306);
    }

    #[test]
    fn test_mock_adc_scripted_then_holds() {
        let mut adc = MockAnalog::scripted(&[100, 200, 306]);
        assert_eq!(adc.read().unwrap(), 100);
        assert_eq!(adc.read().unwrap(), 200);
        assert_eq!(adc.read().unwrap(), 306);
        assert_eq!(adc.read().unwrap(), 306);
    }
}
