//! Structured vital-sign inputs.

use serde::{Deserialize, Serialize};

/// One patient's vital signs and symptom text for a single triage request.
///
/// Numeric fields other than `age` and `temperature` are optional; the triage
/// scorer degrades gracefully when they are absent. `blood_pressure` is the
/// raw `"systolic/diastolic"` string from the boundary and is only parsed if
/// well-formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Patient age in years.
    pub age: u32,
    /// Body temperature in degrees Celsius.
    pub temperature: f64,
    /// Free-text symptom description.
    pub symptoms: String,
    /// Free-text medical history.
    #[serde(default)]
    pub history: String,
    /// Previous temperature reading, if one exists, for trend analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_temperature: Option<f64>,
    /// Heart rate in beats per minute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// Blood pressure as a raw `"systolic/diastolic"` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    /// Peripheral oxygen saturation in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<u32>,
}

impl VitalSigns {
    /// Creates vital signs with only the required fields set.
    pub fn new(age: u32, temperature: f64, symptoms: impl Into<String>) -> Self {
        Self {
            age,
            temperature,
            symptoms: symptoms.into(),
            history: String::new(),
            previous_temperature: None,
            heart_rate: None,
            blood_pressure: None,
            spo2: None,
        }
    }

    /// Sets the medical history text.
    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        self.history = history.into();
        self
    }

    /// Sets the previous temperature reading.
    pub fn with_previous_temperature(mut self, temp: f64) -> Self {
        self.previous_temperature = Some(temp);
        self
    }

    /// Sets the heart rate.
    pub fn with_heart_rate(mut self, bpm: u32) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    /// Sets the raw blood-pressure string.
    pub fn with_blood_pressure(mut self, bp: impl Into<String>) -> Self {
        self.blood_pressure = Some(bp.into());
        self
    }

    /// Sets the oxygen saturation.
    pub fn with_spo2(mut self, spo2: u32) -> Self {
        self.spo2 = Some(spo2);
        self
    }
}
