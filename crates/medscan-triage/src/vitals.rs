//! Blood-pressure parsing and derived vitals.

/// Parsed blood pressure in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

/// Parse a `"systolic/diastolic"` string.
///
/// Accepts only a single `/` with both sides parsing as integers and a
/// positive systolic. Anything else yields `None` — the caller defaults the
/// derived vitals to zero instead of surfacing the failure. That silence is
/// inherited behavior, kept deliberately (see DESIGN.md).
pub fn parse_blood_pressure(raw: &str) -> Option<BloodPressure> {
    let mut parts = raw.split('/');
    let systolic = parts.next()?.trim().parse::<i32>().ok()?;
    let diastolic = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() || systolic <= 0 {
        return None;
    }
    Some(BloodPressure {
        systolic,
        diastolic,
    })
}

/// Pressure-derived vitals. All zero when blood pressure or heart rate is
/// unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureVitals {
    pub shock_index: f64,
    pub mean_arterial_pressure: f64,
    pub pulse_pressure: f64,
}

/// Compute shock index, MAP, and pulse pressure. A heart rate of zero is
/// treated as absent, like the other malformed partial-data paths.
pub fn derive_pressure_vitals(bp: Option<BloodPressure>, heart_rate: Option<u32>) -> PressureVitals {
    let (Some(bp), Some(heart_rate)) = (bp, heart_rate.filter(|&hr| hr > 0)) else {
        return PressureVitals::default();
    };
    PressureVitals {
        shock_index: heart_rate as f64 / bp.systolic as f64,
        mean_arterial_pressure: (bp.systolic as f64 + 2.0 * bp.diastolic as f64) / 3.0,
        pulse_pressure: (bp.systolic - bp.diastolic) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn well_formed_bp_parses() {
        assert_eq!(
            parse_blood_pressure("120/80"),
            Some(BloodPressure {
                systolic: 120,
                diastolic: 80
            })
        );
    }

    #[test]
    fn malformed_bp_yields_none() {
        assert_eq!(parse_blood_pressure("120"), None);
        assert_eq!(parse_blood_pressure("120/80/40"), None);
        assert_eq!(parse_blood_pressure("abc/80"), None);
        assert_eq!(parse_blood_pressure("120/xyz"), None);
        assert_eq!(parse_blood_pressure("0/80"), None);
        assert_eq!(parse_blood_pressure("-120/80"), None);
        assert_eq!(parse_blood_pressure(""), None);
    }

    #[test]
    fn reference_scenario_120_over_80_at_80_bpm() {
        let vitals =
            derive_pressure_vitals(parse_blood_pressure("120/80"), Some(80));
        assert!((vitals.shock_index - 0.667).abs() < 0.001);
        assert!((vitals.mean_arterial_pressure - 93.3).abs() < 0.05);
        assert_eq!(vitals.pulse_pressure, 40.0);
    }

    #[test]
    fn missing_inputs_default_to_zero() {
        let vitals = derive_pressure_vitals(None, Some(80));
        assert_eq!(vitals, PressureVitals::default());
        let vitals = derive_pressure_vitals(parse_blood_pressure("120/80"), None);
        assert_eq!(vitals, PressureVitals::default());
    }

    #[test]
    fn zero_heart_rate_counts_as_absent() {
        let vitals = derive_pressure_vitals(parse_blood_pressure("120/80"), Some(0));
        assert_eq!(vitals, PressureVitals::default());
    }
}
