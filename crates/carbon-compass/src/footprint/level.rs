use serde::Serialize;

const GOOD_THRESHOLD_KG: f64 = 5_000.0;
const AVERAGE_THRESHOLD_KG: f64 = 10_000.0;
const HIGH_THRESHOLD_KG: f64 = 20_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FootprintLevel {
    Excellent,
    Good,
    Average,
    High,
}

impl FootprintLevel {
    /// Bands are inclusive-lower, exclusive-upper. NaN falls through to `High`.
    pub fn for_emissions(total_emissions: f64) -> Self {
        if total_emissions < GOOD_THRESHOLD_KG {
            Self::Excellent
        } else if total_emissions < AVERAGE_THRESHOLD_KG {
            Self::Good
        } else if total_emissions < HIGH_THRESHOLD_KG {
            Self::Average
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::High => "High",
        }
    }

    pub const fn severity(self) -> LevelSeverity {
        match self {
            Self::Excellent => LevelSeverity::Best,
            Self::Good => LevelSeverity::BelowNational,
            Self::Average => LevelSeverity::NearNational,
            Self::High => LevelSeverity::Worst,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Your carbon footprint is well below the global average!",
            Self::Good => {
                "Your footprint is below the national average, but there's room for improvement."
            }
            Self::Average => {
                "Your footprint is around the national average. Consider reducing emissions."
            }
            Self::High => {
                "Your footprint is above average. Significant reduction strategies needed."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSeverity {
    Best,
    BelowNational,
    NearNational,
    Worst,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintClassification {
    pub level: FootprintLevel,
    pub severity: LevelSeverity,
    pub message: &'static str,
}

pub fn classify(total_emissions: f64) -> FootprintClassification {
    let level = FootprintLevel::for_emissions(total_emissions);
    FootprintClassification {
        level,
        severity: level.severity(),
        message: level.message(),
    }
}
