//! Register maps for the three boards.
//!
//! One closed set per peripheral so an encoder address can never be handed
//! to the counter board by accident. The numeric values mirror the firmware
//! register layout; the protocol layer treats them as opaque addresses.

/// ADC / digital-I/O board registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum AdcRegister {
    // 16 conversion-value channels
    Conversion0 = 1,
    Conversion1,
    Conversion2,
    Conversion3,
    Conversion4,
    Conversion5,
    Conversion6,
    Conversion7,
    Conversion8,
    Conversion9,
    Conversion10,
    Conversion11,
    Conversion12,
    Conversion13,
    Conversion14,
    Conversion15,
    // 16 offset channels
    Offset0 = 17,
    Offset1,
    Offset2,
    Offset3,
    Offset4,
    Offset5,
    Offset6,
    Offset7,
    Offset8,
    Offset9,
    Offset10,
    Offset11,
    Offset12,
    Offset13,
    Offset14,
    Offset15,
    DigitalOutput = 33,
    DigitalInput = 34,
}

impl AdcRegister {
    pub const CONVERSION: [AdcRegister; 16] = [
        AdcRegister::Conversion0,
        AdcRegister::Conversion1,
        AdcRegister::Conversion2,
        AdcRegister::Conversion3,
        AdcRegister::Conversion4,
        AdcRegister::Conversion5,
        AdcRegister::Conversion6,
        AdcRegister::Conversion7,
        AdcRegister::Conversion8,
        AdcRegister::Conversion9,
        AdcRegister::Conversion10,
        AdcRegister::Conversion11,
        AdcRegister::Conversion12,
        AdcRegister::Conversion13,
        AdcRegister::Conversion14,
        AdcRegister::Conversion15,
    ];

    pub const OFFSET: [AdcRegister; 16] = [
        AdcRegister::Offset0,
        AdcRegister::Offset1,
        AdcRegister::Offset2,
        AdcRegister::Offset3,
        AdcRegister::Offset4,
        AdcRegister::Offset5,
        AdcRegister::Offset6,
        AdcRegister::Offset7,
        AdcRegister::Offset8,
        AdcRegister::Offset9,
        AdcRegister::Offset10,
        AdcRegister::Offset11,
        AdcRegister::Offset12,
        AdcRegister::Offset13,
        AdcRegister::Offset14,
        AdcRegister::Offset15,
    ];

    pub fn address(self) -> u16 {
        self as u16
    }
}

/// Encoder board registers, one bank of six axes per quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum EncoderRegister {
    AbsolutePosition1 = 1,
    AbsolutePosition2,
    AbsolutePosition3,
    AbsolutePosition4,
    AbsolutePosition5,
    AbsolutePosition6,
    Velocity1 = 7,
    Velocity2,
    Velocity3,
    Velocity4,
    Velocity5,
    Velocity6,
    Acceleration1 = 13,
    Acceleration2,
    Acceleration3,
    Acceleration4,
    Acceleration5,
    Acceleration6,
    PulseWidth1 = 19,
    PulseWidth2,
    PulseWidth3,
    PulseWidth4,
    PulseWidth5,
    PulseWidth6,
    PositionOffset1 = 25,
    PositionOffset2,
    PositionOffset3,
    PositionOffset4,
    PositionOffset5,
    PositionOffset6,
    Control1 = 31,
    Control2,
    Control3,
    Control4,
    Control5,
    Control6,
    LastZPulse1 = 37,
    LastZPulse2,
    LastZPulse3,
    LastZPulse4,
    LastZPulse5,
    LastZPulse6,
}

impl EncoderRegister {
    pub const ABSOLUTE_POSITION: [EncoderRegister; 6] = [
        EncoderRegister::AbsolutePosition1,
        EncoderRegister::AbsolutePosition2,
        EncoderRegister::AbsolutePosition3,
        EncoderRegister::AbsolutePosition4,
        EncoderRegister::AbsolutePosition5,
        EncoderRegister::AbsolutePosition6,
    ];

    pub const VELOCITY: [EncoderRegister; 6] = [
        EncoderRegister::Velocity1,
        EncoderRegister::Velocity2,
        EncoderRegister::Velocity3,
        EncoderRegister::Velocity4,
        EncoderRegister::Velocity5,
        EncoderRegister::Velocity6,
    ];

    pub const ACCELERATION: [EncoderRegister; 6] = [
        EncoderRegister::Acceleration1,
        EncoderRegister::Acceleration2,
        EncoderRegister::Acceleration3,
        EncoderRegister::Acceleration4,
        EncoderRegister::Acceleration5,
        EncoderRegister::Acceleration6,
    ];

    pub const PULSE_WIDTH: [EncoderRegister; 6] = [
        EncoderRegister::PulseWidth1,
        EncoderRegister::PulseWidth2,
        EncoderRegister::PulseWidth3,
        EncoderRegister::PulseWidth4,
        EncoderRegister::PulseWidth5,
        EncoderRegister::PulseWidth6,
    ];

    pub const POSITION_OFFSET: [EncoderRegister; 6] = [
        EncoderRegister::PositionOffset1,
        EncoderRegister::PositionOffset2,
        EncoderRegister::PositionOffset3,
        EncoderRegister::PositionOffset4,
        EncoderRegister::PositionOffset5,
        EncoderRegister::PositionOffset6,
    ];

    pub const CONTROL: [EncoderRegister; 6] = [
        EncoderRegister::Control1,
        EncoderRegister::Control2,
        EncoderRegister::Control3,
        EncoderRegister::Control4,
        EncoderRegister::Control5,
        EncoderRegister::Control6,
    ];

    pub const LAST_Z_PULSE: [EncoderRegister; 6] = [
        EncoderRegister::LastZPulse1,
        EncoderRegister::LastZPulse2,
        EncoderRegister::LastZPulse3,
        EncoderRegister::LastZPulse4,
        EncoderRegister::LastZPulse5,
        EncoderRegister::LastZPulse6,
    ];

    pub fn address(self) -> u16 {
        self as u16
    }
}

/// PWM / counter board registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum CounterRegister {
    Y1Pwm = 1,
    Y2Pwm,
    AuxPwm1 = 3,
    AuxPwm2,
    AuxPwm3,
    AuxPwm4,
    AnalogOutPwm1 = 7,
    AnalogOutPwm2,
    AnalogOutPwm3,
    AnalogOutPwm4,
    FreqConst1 = 11,
    FreqConst2,
    FreqConst3,
    FreqConst4,
    FreqConst5,
    FreqConst6,
    FreqConst7,
    FreqConst8,
    FreqConst9,
    FreqConst10,
    Y1Control = 21,
    Y2Control,
    AuxControl1 = 23,
    AuxControl2,
    AuxControl3,
    AuxControl4,
    AnalogOutControl1 = 27,
    AnalogOutControl2,
    AnalogOutControl3,
    AnalogOutControl4,
    QValvePwm = 31,
    PValvePwm,
    QValveFreqConst = 33,
    PValveFreqConst,
    QPControl = 35,
}

impl CounterRegister {
    pub const AUX_PWM: [CounterRegister; 4] = [
        CounterRegister::AuxPwm1,
        CounterRegister::AuxPwm2,
        CounterRegister::AuxPwm3,
        CounterRegister::AuxPwm4,
    ];

    pub const ANALOG_OUT_PWM: [CounterRegister; 4] = [
        CounterRegister::AnalogOutPwm1,
        CounterRegister::AnalogOutPwm2,
        CounterRegister::AnalogOutPwm3,
        CounterRegister::AnalogOutPwm4,
    ];

    pub const FREQ_CONST: [CounterRegister; 10] = [
        CounterRegister::FreqConst1,
        CounterRegister::FreqConst2,
        CounterRegister::FreqConst3,
        CounterRegister::FreqConst4,
        CounterRegister::FreqConst5,
        CounterRegister::FreqConst6,
        CounterRegister::FreqConst7,
        CounterRegister::FreqConst8,
        CounterRegister::FreqConst9,
        CounterRegister::FreqConst10,
    ];

    pub const AUX_CONTROL: [CounterRegister; 4] = [
        CounterRegister::AuxControl1,
        CounterRegister::AuxControl2,
        CounterRegister::AuxControl3,
        CounterRegister::AuxControl4,
    ];

    pub const ANALOG_OUT_CONTROL: [CounterRegister; 4] = [
        CounterRegister::AnalogOutControl1,
        CounterRegister::AnalogOutControl2,
        CounterRegister::AnalogOutControl3,
        CounterRegister::AnalogOutControl4,
    ];

    pub fn address(self) -> u16 {
        self as u16
    }
}

impl From<AdcRegister> for u16 {
    fn from(reg: AdcRegister) -> u16 {
        reg.address()
    }
}

impl From<EncoderRegister> for u16 {
    fn from(reg: EncoderRegister) -> u16 {
        reg.address()
    }
}

impl From<CounterRegister> for u16 {
    fn from(reg: CounterRegister) -> u16 {
        reg.address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MAX_ADDRESS;

    #[test]
    fn adc_map_matches_firmware_layout() {
        assert_eq!(AdcRegister::Conversion0.address(), 1);
        assert_eq!(AdcRegister::Conversion15.address(), 16);
        assert_eq!(AdcRegister::Offset0.address(), 17);
        assert_eq!(AdcRegister::Offset15.address(), 32);
        assert_eq!(AdcRegister::DigitalOutput.address(), 33);
        assert_eq!(AdcRegister::DigitalInput.address(), 34);
    }

    #[test]
    fn encoder_map_matches_firmware_layout() {
        assert_eq!(EncoderRegister::AbsolutePosition1.address(), 1);
        assert_eq!(EncoderRegister::Velocity1.address(), 7);
        assert_eq!(EncoderRegister::Acceleration1.address(), 13);
        assert_eq!(EncoderRegister::PulseWidth1.address(), 19);
        assert_eq!(EncoderRegister::PositionOffset1.address(), 25);
        assert_eq!(EncoderRegister::Control1.address(), 31);
        assert_eq!(EncoderRegister::LastZPulse6.address(), 42);
    }

    #[test]
    fn counter_map_matches_firmware_layout() {
        assert_eq!(CounterRegister::Y1Pwm.address(), 1);
        assert_eq!(CounterRegister::FreqConst1.address(), 11);
        assert_eq!(CounterRegister::Y1Control.address(), 21);
        assert_eq!(CounterRegister::QValvePwm.address(), 31);
        assert_eq!(CounterRegister::QPControl.address(), 35);
    }

    #[test]
    fn register_banks_are_contiguous() {
        for (i, reg) in AdcRegister::CONVERSION.iter().enumerate() {
            assert_eq!(reg.address(), 1 + i as u16);
        }
        for (i, reg) in AdcRegister::OFFSET.iter().enumerate() {
            assert_eq!(reg.address(), 17 + i as u16);
        }
        for (i, reg) in EncoderRegister::VELOCITY.iter().enumerate() {
            assert_eq!(reg.address(), 7 + i as u16);
        }
        for (i, reg) in CounterRegister::FREQ_CONST.iter().enumerate() {
            assert_eq!(reg.address(), 11 + i as u16);
        }
    }

    #[test]
    fn all_registers_fit_the_command_word() {
        assert!(EncoderRegister::LastZPulse6.address() <= MAX_ADDRESS);
        assert!(AdcRegister::DigitalInput.address() <= MAX_ADDRESS);
        assert!(CounterRegister::QPControl.address() <= MAX_ADDRESS);
    }
}
