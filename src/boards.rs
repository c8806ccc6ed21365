//! The three machine I/O boards and their block transfer helpers.
//!
//! [`Boards`] is the single ownership context for the ADC/digital-I/O,
//! encoder and PWM/counter handles; call sites receive it by reference
//! instead of reaching for process-wide handles. The free functions below
//! move whole register banks in one call each, one transaction per register.

use crate::config::Config;
use crate::device::{initialize_all, SpiDevice, SpiTransport};
use crate::error::Result;
use crate::protocol::{read_register, write_register};
use crate::registers::{AdcRegister, CounterRegister, EncoderRegister};

pub const BOARD_NAMES: [&str; 3] = ["adc", "encoder", "counter"];

/// Owned handles for the three boards, in bus order.
pub struct Boards {
    pub adc: SpiDevice,
    pub encoder: SpiDevice,
    pub counter: SpiDevice,
}

impl Boards {
    pub fn from_config(config: &Config) -> Self {
        Boards {
            adc: SpiDevice::new(config.boards.adc.clone()),
            encoder: SpiDevice::new(config.boards.encoder.clone()),
            counter: SpiDevice::new(config.boards.counter.clone()),
        }
    }

    /// Open all three handles, reporting one named result per board. A
    /// board that fails to come up does not block the others.
    pub fn initialize(&mut self) -> Vec<(&'static str, Result<()>)> {
        let results = initialize_all([&mut self.adc, &mut self.encoder, &mut self.counter]);
        BOARD_NAMES.into_iter().zip(results).collect()
    }

    pub fn close_all(&mut self) {
        self.adc.close();
        self.encoder.close();
        self.counter.close();
    }
}

fn read_bank<T, R, const N: usize>(transport: &mut T, bank: [R; N]) -> Result<[u32; N]>
where
    T: SpiTransport,
    R: Into<u16> + Copy,
{
    let mut values = [0u32; N];
    for (slot, reg) in values.iter_mut().zip(bank) {
        *slot = read_register(transport, reg.into())?;
    }
    Ok(values)
}

fn write_bank<T, R, const N: usize>(
    transport: &mut T,
    bank: [R; N],
    values: &[u32; N],
) -> Result<()>
where
    T: SpiTransport,
    R: Into<u16> + Copy,
{
    for (reg, value) in bank.into_iter().zip(values) {
        write_register(transport, reg.into(), *value)?;
    }
    Ok(())
}

/// One full sample of the ADC board's conversion channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdcReadings {
    pub channels: [u32; 16],
}

pub fn read_adc_inputs<T: SpiTransport>(transport: &mut T) -> Result<AdcReadings> {
    Ok(AdcReadings {
        channels: read_bank(transport, AdcRegister::CONVERSION)?,
    })
}

pub fn write_adc_offsets<T: SpiTransport>(transport: &mut T, offsets: &[u32; 16]) -> Result<()> {
    write_bank(transport, AdcRegister::OFFSET, offsets)
}

pub fn write_digital_outputs<T: SpiTransport>(transport: &mut T, bits: u32) -> Result<()> {
    write_register(transport, AdcRegister::DigitalOutput.address(), bits)
}

pub fn read_digital_inputs<T: SpiTransport>(transport: &mut T) -> Result<u32> {
    read_register(transport, AdcRegister::DigitalInput.address())
}

/// Feedback from all six encoder axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderReadings {
    pub absolute_position: [u32; 6],
    pub velocity: [u32; 6],
    pub acceleration: [u32; 6],
    pub last_z_pulse: [u32; 6],
}

pub fn read_encoder_feedback<T: SpiTransport>(transport: &mut T) -> Result<EncoderReadings> {
    Ok(EncoderReadings {
        absolute_position: read_bank(transport, EncoderRegister::ABSOLUTE_POSITION)?,
        velocity: read_bank(transport, EncoderRegister::VELOCITY)?,
        acceleration: read_bank(transport, EncoderRegister::ACCELERATION)?,
        last_z_pulse: read_bank(transport, EncoderRegister::LAST_Z_PULSE)?,
    })
}

pub fn read_absolute_positions<T: SpiTransport>(transport: &mut T) -> Result<[u32; 6]> {
    read_bank(transport, EncoderRegister::ABSOLUTE_POSITION)
}

pub fn read_velocities<T: SpiTransport>(transport: &mut T) -> Result<[u32; 6]> {
    read_bank(transport, EncoderRegister::VELOCITY)
}

pub fn read_accelerations<T: SpiTransport>(transport: &mut T) -> Result<[u32; 6]> {
    read_bank(transport, EncoderRegister::ACCELERATION)
}

pub fn read_last_z_pulses<T: SpiTransport>(transport: &mut T) -> Result<[u32; 6]> {
    read_bank(transport, EncoderRegister::LAST_Z_PULSE)
}

pub fn write_pulse_widths<T: SpiTransport>(transport: &mut T, values: &[u32; 6]) -> Result<()> {
    write_bank(transport, EncoderRegister::PULSE_WIDTH, values)
}

pub fn write_position_offsets<T: SpiTransport>(transport: &mut T, values: &[u32; 6]) -> Result<()> {
    write_bank(transport, EncoderRegister::POSITION_OFFSET, values)
}

pub fn write_encoder_controls<T: SpiTransport>(transport: &mut T, values: &[u32; 6]) -> Result<()> {
    write_bank(transport, EncoderRegister::CONTROL, values)
}

/// Everything the PWM/counter board exposes, in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterReadings {
    pub y1_pwm: u32,
    pub y2_pwm: u32,
    pub aux_pwm: [u32; 4],
    pub analog_out_pwm: [u32; 4],
    pub freq_const: [u32; 10],
    pub y1_control: u32,
    pub y2_control: u32,
    pub aux_control: [u32; 4],
    pub analog_out_control: [u32; 4],
    pub q_valve_pwm: u32,
    pub p_valve_pwm: u32,
    pub q_valve_freq_const: u32,
    pub p_valve_freq_const: u32,
    pub qp_control: u32,
}

pub fn read_counter_state<T: SpiTransport>(transport: &mut T) -> Result<CounterReadings> {
    let single = |t: &mut T, reg: CounterRegister| read_register(t, reg.address());
    Ok(CounterReadings {
        y1_pwm: single(transport, CounterRegister::Y1Pwm)?,
        y2_pwm: single(transport, CounterRegister::Y2Pwm)?,
        aux_pwm: read_bank(transport, CounterRegister::AUX_PWM)?,
        analog_out_pwm: read_bank(transport, CounterRegister::ANALOG_OUT_PWM)?,
        freq_const: read_bank(transport, CounterRegister::FREQ_CONST)?,
        y1_control: single(transport, CounterRegister::Y1Control)?,
        y2_control: single(transport, CounterRegister::Y2Control)?,
        aux_control: read_bank(transport, CounterRegister::AUX_CONTROL)?,
        analog_out_control: read_bank(transport, CounterRegister::ANALOG_OUT_CONTROL)?,
        q_valve_pwm: single(transport, CounterRegister::QValvePwm)?,
        p_valve_pwm: single(transport, CounterRegister::PValvePwm)?,
        q_valve_freq_const: single(transport, CounterRegister::QValveFreqConst)?,
        p_valve_freq_const: single(transport, CounterRegister::PValveFreqConst)?,
        qp_control: single(transport, CounterRegister::QPControl)?,
    })
}

pub fn write_y1_pwm<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::Y1Pwm.address(), value)
}

pub fn write_y2_pwm<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::Y2Pwm.address(), value)
}

pub fn write_aux_pwm<T: SpiTransport>(transport: &mut T, values: &[u32; 4]) -> Result<()> {
    write_bank(transport, CounterRegister::AUX_PWM, values)
}

pub fn write_analog_out_pwm<T: SpiTransport>(transport: &mut T, values: &[u32; 4]) -> Result<()> {
    write_bank(transport, CounterRegister::ANALOG_OUT_PWM, values)
}

pub fn write_freq_consts<T: SpiTransport>(transport: &mut T, values: &[u32; 10]) -> Result<()> {
    write_bank(transport, CounterRegister::FREQ_CONST, values)
}

pub fn write_y1_control<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::Y1Control.address(), value)
}

pub fn write_y2_control<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::Y2Control.address(), value)
}

pub fn write_aux_controls<T: SpiTransport>(transport: &mut T, values: &[u32; 4]) -> Result<()> {
    write_bank(transport, CounterRegister::AUX_CONTROL, values)
}

pub fn write_analog_out_controls<T: SpiTransport>(
    transport: &mut T,
    values: &[u32; 4],
) -> Result<()> {
    write_bank(transport, CounterRegister::ANALOG_OUT_CONTROL, values)
}

pub fn write_q_valve_pwm<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::QValvePwm.address(), value)
}

pub fn write_p_valve_pwm<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::PValvePwm.address(), value)
}

pub fn write_q_valve_freq_const<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::QValveFreqConst.address(), value)
}

pub fn write_p_valve_freq_const<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::PValveFreqConst.address(), value)
}

pub fn write_qp_control<T: SpiTransport>(transport: &mut T, value: u32) -> Result<()> {
    write_register(transport, CounterRegister::QPControl.address(), value)
}
