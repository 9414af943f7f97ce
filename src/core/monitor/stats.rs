//! Sensor stat catalogue and the caller-owned buffers exchanged with backends.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

macro_rules! stat_catalogue {
    ($($variant:ident => $name:literal,)+) => {
        /// Stable slot identifier in the fixed sensor catalogue
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum StatId {
            $($variant,)+
        }

        impl StatId {
            pub const ALL: &'static [StatId] = &[$(StatId::$variant,)+];
            pub const COUNT: usize = Self::ALL.len();
        }

        #[cfg(feature = "names")]
        pub(super) const STAT_NAMES: &[&str] = &[$($name,)+];
    };
}

stat_catalogue! {
    Value2_5v => "value_2_5v",
    ValueVccp1 => "value_vccp1",
    ValueVcc => "value_vcc",
    Value5v => "value_5v",
    Value12v => "value_12v",
    ValueVccp2 => "value_vccp2",
    ValueExtTemp => "value_ext_temp",
    ValueIntTemp => "value_int_temp",
    ValueAin1 => "value_ain1",
    ValueAin2 => "value_ain2",
    ControllerCooling => "controller_cooling",
    ExtCooling => "ext_cooling",
    V1 => "1v",
    V1_2 => "1_2v",
    V1_8 => "1_8v",
    V3_3 => "3_3v",
    V1_2a => "1_2va",
    Vref => "vref",
    Vaoe => "vaoe",
    AoeTemperature => "aoe_temperature",
    PsuAoeTemperature => "psu_aoe_temperature",
    PsuTemperature => "psu_temperature",
    Fan0 => "fan0",
    Fan1 => "fan1",
    Fan2 => "fan2",
    Fan3 => "fan3",
    Fan4 => "fan4",
    VaoeIn => "vaoe_in",
    Iaoe => "iaoe",
    IaoeIn => "iaoe_in",
    NicPower => "nic_power",
    V0_9 => "0_9v",
    I0_9v => "i0_9v",
    I1_2v => "i1_2v",
    V0_9Adc => "0_9v_adc",
    ControllerTemperature2 => "controller_temperature2",
    VregTemperature => "vreg_temperature",
    Vreg0_9vTemperature => "vreg_0_9v_temperature",
    Vreg1_2vTemperature => "vreg_1_2v_temperature",
    IntVptat => "int_vptat",
    ControllerInternalAdcTemperature => "controller_internal_adc_temperature",
    ExtVptat => "ext_vptat",
    ControllerExternalAdcTemperature => "controller_external_adc_temperature",
    AmbientTemperature => "ambient_temperature",
    Airflow => "airflow",
    Vdd08dVss08dCsr => "vdd08d_vss08d_csr",
    Vdd08dVss08dCsrExtadc => "vdd08d_vss08d_csr_extadc",
    HotpointTemperature => "hotpoint_temperature",
    PhyPowerSwitchPort0 => "phy_power_switch_port0",
    PhyPowerSwitchPort1 => "phy_power_switch_port1",
    MumVcc => "mum_vcc",
    V0v9A => "0v9_a",
    I0v9A => "i0v9_a",
    V0v9ATemp => "0v9_a_temp",
    V0v9B => "0v9_b",
    I0v9B => "i0v9_b",
    V0v9BTemp => "0v9_b_temp",
    CcomAvreg1v2Supply => "ccom_avreg_1v2_supply",
    CcomAvreg1v2SupplyExtAdc => "ccom_avreg_1v2_supply_ext_adc",
    CcomAvreg1v8Supply => "ccom_avreg_1v8_supply",
    CcomAvreg1v8SupplyExtAdc => "ccom_avreg_1v8_supply_ext_adc",
    ControllerMasterVptat => "controller_master_vptat",
    ControllerMasterInternalTemp => "controller_master_internal_temp",
    ControllerMasterVptatExtAdc => "controller_master_vptat_ext_adc",
    ControllerMasterInternalTempExtAdc => "controller_master_internal_temp_ext_adc",
    ControllerSlaveVptat => "controller_slave_vptat",
    ControllerSlaveInternalTemp => "controller_slave_internal_temp",
    ControllerSlaveVptatExtAdc => "controller_slave_vptat_ext_adc",
    ControllerSlaveInternalTempExtAdc => "controller_slave_internal_temp_ext_adc",
}

impl StatId {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Health of a single reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatState {
    Ok,
    Warning,
    Fatal,
    Broken,
    /// Sensor not fitted on this board, or no reading available
    #[default]
    NotPresent,
}

/// One raw sensor reading; values pass through uninterpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub value: u16,
    pub state: StatState,
}

impl StatValue {
    pub const NOT_PRESENT: StatValue = StatValue {
        value: 0,
        state: StatState::NotPresent,
    };

    pub fn new(value: u16, state: StatState) -> Self {
        Self { value, state }
    }

    pub fn is_present(&self) -> bool {
        self.state != StatState::NotPresent
    }
}

/// Caller-owned buffer sized for the whole catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValues {
    values: [StatValue; StatId::COUNT],
}

impl StatValues {
    pub fn new() -> Self {
        Self {
            values: [StatValue::NOT_PRESENT; StatId::COUNT],
        }
    }

    /// Mark every slot as not present
    pub fn clear(&mut self) {
        self.values.fill(StatValue::NOT_PRESENT);
    }

    pub fn set(&mut self, id: StatId, value: u16, state: StatState) {
        self.values[id.index()] = StatValue::new(value, state);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[StatValue] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatId, &StatValue)> {
        StatId::ALL.iter().copied().zip(self.values.iter())
    }

    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_present()).count()
    }

    /// Present readings, in catalogue order, for diagnostics output
    #[cfg(feature = "names")]
    pub fn snapshot(&self) -> Vec<StatReading> {
        self.iter()
            .filter(|(_, v)| v.is_present())
            .map(|(id, v)| StatReading {
                name: id.name().to_string(),
                value: v.value,
                state: v.state,
            })
            .collect()
    }
}

impl Default for StatValues {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<StatId> for StatValues {
    type Output = StatValue;

    fn index(&self, id: StatId) -> &StatValue {
        &self.values[id.index()]
    }
}

impl IndexMut<StatId> for StatValues {
    fn index_mut(&mut self, id: StatId) -> &mut StatValue {
        &mut self.values[id.index()]
    }
}

/// Named reading as emitted in diagnostics snapshots
#[cfg(feature = "names")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatReading {
    pub name: String,
    pub value: u16,
    pub state: StatState,
}

/// Opaque DMA-capable staging buffer, layout owned by the backend
#[derive(Debug, Clone, Default)]
pub struct DmaRegion {
    bytes: Vec<u8>,
}

impl DmaRegion {
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}
