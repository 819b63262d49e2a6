use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One facility-year observation from the municipal energy dataset.
///
/// Numeric columns that are absent or `null` in the source decode to `0.0`.
/// The two name columns stay optional so that a missing key can be reported
/// by whoever groups on it instead of being replaced by a placeholder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    #[serde(rename = "Year", default, deserialize_with = "deserialize_year")]
    pub year: i32,

    #[serde(rename = "Operation Type", default)]
    pub operation_type: Option<String>,

    #[serde(rename = "Operation Name", default)]
    pub operation_name: Option<String>,

    #[serde(
        rename = "Electricity Quantity Purchased and Consumed",
        default,
        deserialize_with = "deserialize_quantity"
    )]
    pub electricity: f64,

    #[serde(
        rename = "Natural Gas Quantity Purchased and Consumed",
        default,
        deserialize_with = "deserialize_quantity"
    )]
    pub natural_gas: f64,

    #[serde(
        rename = "Total GHG Emissions (KG)",
        default,
        deserialize_with = "deserialize_quantity"
    )]
    pub ghg_emissions_kg: f64,

    #[serde(
        rename = "Total Energy Intensity (EkWh/SqFt)",
        default,
        deserialize_with = "deserialize_quantity"
    )]
    pub energy_intensity: f64,
}

impl Record {
    /// Reads one of the numeric measurement columns.
    pub fn value(&self, field: RecordField) -> f64 {
        match field {
            RecordField::Electricity => self.electricity,
            RecordField::NaturalGas => self.natural_gas,
            RecordField::GhgEmissions => self.ghg_emissions_kg,
            RecordField::EnergyIntensity => self.energy_intensity,
        }
    }

    /// Checks that every measurement is finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        for field in RecordField::ALL {
            let value = self.value(field);
            if !value.is_finite() {
                return Err(format!("{} is not a finite number", field));
            }
            if value < 0.0 {
                return Err(format!("{} is negative ({})", field, value));
            }
        }
        Ok(())
    }
}

/// The numeric measurement columns of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Electricity,
    NaturalGas,
    GhgEmissions,
    EnergyIntensity,
}

impl RecordField {
    pub const ALL: [RecordField; 4] = [
        RecordField::Electricity,
        RecordField::NaturalGas,
        RecordField::GhgEmissions,
        RecordField::EnergyIntensity,
    ];

    /// Column name as it appears in the source dataset.
    pub fn column_name(&self) -> &'static str {
        match self {
            RecordField::Electricity => "Electricity Quantity Purchased and Consumed",
            RecordField::NaturalGas => "Natural Gas Quantity Purchased and Consumed",
            RecordField::GhgEmissions => "Total GHG Emissions (KG)",
            RecordField::EnergyIntensity => "Total Energy Intensity (EkWh/SqFt)",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearValue {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = match Option::<YearValue>::deserialize(deserializer)? {
        Some(raw) => raw,
        None => return Ok(0),
    };
    let year = match raw {
        YearValue::Int(n) => n,
        YearValue::Float(f) if f.fract() == 0.0 && f.is_finite() => f as i64,
        YearValue::Float(f) => return Err(D::Error::custom(format!("year {} is not a whole number", f))),
        YearValue::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("year '{}' is not numeric", s)))?,
    };
    i32::try_from(year).map_err(|_| D::Error::custom(format!("year {} out of range", year)))
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
