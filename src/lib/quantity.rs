use std::fmt;

use serde::Serialize;

use crate::QuantityError;

/// Unit suffix the metrics API reports CPU usage in by default.
pub const NANOCORES: &str = "n";
/// Unit suffix the metrics API reports memory usage in by default.
pub const KIBIBYTES: &str = "Ki";
/// Canonical CPU unit label after normalization.
pub const CORES: &str = "cores";
/// Canonical memory unit label after normalization.
pub const MEBIBYTES: &str = "MiB";

/// Split a raw usage string like `"250000000n"` or `"2048Ki"` into its
/// magnitude and unit suffix.
///
/// The string must be one or more ASCII digits immediately followed by one
/// or more ASCII letters, with nothing else. The unit is not validated here;
/// unknown suffixes are rejected later, when a conversion is requested.
pub fn split_quantity(raw: &str) -> Result<(u64, &str), QuantityError> {
    let digits_end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(digits_end);

    if digits.is_empty() || unit.is_empty() || !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(QuantityError::Parse {
            input: raw.to_string(),
        });
    }

    let value = digits.parse::<u64>().map_err(|_| QuantityError::Parse {
        input: raw.to_string(),
    })?;

    Ok((value, unit))
}

/// CPU usage with its unit suffix, normalizable to whole cores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuQuantity {
    pub value: f64,
    pub unit: String,
}

impl Default for CpuQuantity {
    fn default() -> Self {
        Self {
            value: 0.0,
            unit: NANOCORES.to_string(),
        }
    }
}

impl CpuQuantity {
    pub fn new(value: u64, unit: impl Into<String>) -> Self {
        Self {
            value: value as f64,
            unit: unit.into(),
        }
    }

    /// Parse a raw CPU usage string such as `"500000000n"`.
    pub fn parse(raw: &str) -> Result<Self, QuantityError> {
        let (value, unit) = split_quantity(raw)?;
        Ok(Self::new(value, unit))
    }

    /// Normalize to whole cores. One-way; the current unit must have a
    /// known conversion factor (nanocores or millicores).
    pub fn to_cores(mut self) -> Result<Self, QuantityError> {
        let factor = match self.unit.as_str() {
            "n" => 1_000_000_000.0,
            "m" => 1_000.0,
            _ => {
                return Err(QuantityError::UnsupportedUnit { unit: self.unit });
            }
        };
        self.value /= factor;
        self.unit = CORES.to_string();
        Ok(self)
    }

    /// Sum with another quantity of the identical unit.
    pub fn add(&self, other: &Self) -> Result<Self, QuantityError> {
        if self.unit != other.unit {
            return Err(QuantityError::UnitMismatch {
                left: self.unit.clone(),
                right: other.unit.clone(),
            });
        }
        Ok(Self {
            value: self.value + other.value,
            unit: self.unit.clone(),
        })
    }

    /// In-place variant of [`CpuQuantity::add`].
    pub fn accumulate(&mut self, other: &Self) -> Result<(), QuantityError> {
        if self.unit != other.unit {
            return Err(QuantityError::UnitMismatch {
                left: self.unit.clone(),
                right: other.unit.clone(),
            });
        }
        self.value += other.value;
        Ok(())
    }
}

impl fmt::Display for CpuQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Memory usage with its unit suffix, normalizable to mebibytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryQuantity {
    pub value: f64,
    pub unit: String,
}

impl Default for MemoryQuantity {
    fn default() -> Self {
        Self {
            value: 0.0,
            unit: KIBIBYTES.to_string(),
        }
    }
}

impl MemoryQuantity {
    pub fn new(value: u64, unit: impl Into<String>) -> Self {
        Self {
            value: value as f64,
            unit: unit.into(),
        }
    }

    /// Parse a raw memory usage string such as `"2048Ki"`.
    pub fn parse(raw: &str) -> Result<Self, QuantityError> {
        let (value, unit) = split_quantity(raw)?;
        Ok(Self::new(value, unit))
    }

    /// Normalize to mebibytes. One-way; only kibibytes have a known factor.
    pub fn to_mebibytes(mut self) -> Result<Self, QuantityError> {
        let factor = match self.unit.as_str() {
            "Ki" => 1024.0,
            _ => {
                return Err(QuantityError::UnsupportedUnit { unit: self.unit });
            }
        };
        self.value /= factor;
        self.unit = MEBIBYTES.to_string();
        Ok(self)
    }

    /// Sum with another quantity of the identical unit.
    pub fn add(&self, other: &Self) -> Result<Self, QuantityError> {
        if self.unit != other.unit {
            return Err(QuantityError::UnitMismatch {
                left: self.unit.clone(),
                right: other.unit.clone(),
            });
        }
        Ok(Self {
            value: self.value + other.value,
            unit: self.unit.clone(),
        })
    }

    /// In-place variant of [`MemoryQuantity::add`].
    pub fn accumulate(&mut self, other: &Self) -> Result<(), QuantityError> {
        if self.unit != other.unit {
            return Err(QuantityError::UnitMismatch {
                left: self.unit.clone(),
                right: other.unit.clone(),
            });
        }
        self.value += other.value;
        Ok(())
    }
}

impl fmt::Display for MemoryQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_valid_quantities() {
        assert_eq!(split_quantity("250000000n").unwrap(), (250_000_000, "n"));
        assert_eq!(split_quantity("500m").unwrap(), (500, "m"));
        assert_eq!(split_quantity("2048Ki").unwrap(), (2048, "Ki"));
        assert_eq!(split_quantity("0n").unwrap(), (0, "n"));
    }

    #[test]
    fn test_split_rejects_malformed_input() {
        for raw in ["", "500", "Ki", "0.5n", "500 m", "12n3", "5n!"] {
            assert!(
                matches!(split_quantity(raw), Err(QuantityError::Parse { .. })),
                "expected parse failure for {raw:?}"
            );
        }
    }

    #[test]
    fn test_split_is_unit_agnostic() {
        assert_eq!(split_quantity("100x").unwrap(), (100, "x"));
    }

    #[test]
    fn test_nanocores_to_cores() {
        let cpu = CpuQuantity::new(750_000_000, "n").to_cores().unwrap();
        assert_eq!(cpu.value, 0.75);
        assert_eq!(cpu.unit, CORES);
    }

    #[test]
    fn test_millicores_to_cores() {
        let cpu = CpuQuantity::new(2500, "m").to_cores().unwrap();
        assert_eq!(cpu.value, 2.5);
        assert_eq!(cpu.unit, CORES);
    }

    #[test]
    fn test_kibibytes_to_mebibytes() {
        let memory = MemoryQuantity::new(3072, "Ki").to_mebibytes().unwrap();
        assert_eq!(memory.value, 3.0);
        assert_eq!(memory.unit, MEBIBYTES);
    }

    #[test]
    fn test_unknown_unit_is_unsupported() {
        let err = CpuQuantity::new(100, "x").to_cores().unwrap_err();
        assert_eq!(err, QuantityError::UnsupportedUnit { unit: "x".into() });

        // Already-canonical quantities have no factor either.
        let err = MemoryQuantity::new(1, MEBIBYTES).to_mebibytes().unwrap_err();
        assert_eq!(
            err,
            QuantityError::UnsupportedUnit {
                unit: MEBIBYTES.into()
            }
        );
    }

    #[test]
    fn test_add_same_unit_is_commutative() {
        let a = CpuQuantity::new(100, "n");
        let b = CpuQuantity::new(250, "n");
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.add(&b).unwrap(), CpuQuantity::new(350, "n"));
    }

    #[test]
    fn test_add_mismatched_units_fails() {
        let a = CpuQuantity::new(100, "n");
        let b = CpuQuantity::new(100, "m");
        assert_eq!(
            a.add(&b).unwrap_err(),
            QuantityError::UnitMismatch {
                left: "n".into(),
                right: "m".into()
            }
        );

        let mut total = MemoryQuantity::default();
        let err = total
            .accumulate(&MemoryQuantity::new(1, "Mi"))
            .unwrap_err();
        assert_eq!(
            err,
            QuantityError::UnitMismatch {
                left: "Ki".into(),
                right: "Mi".into()
            }
        );
    }

    #[test]
    fn test_accumulate_sums_in_place() {
        let mut total = CpuQuantity::default();
        total.accumulate(&CpuQuantity::new(500_000_000, "n")).unwrap();
        total.accumulate(&CpuQuantity::new(250_000_000, "n")).unwrap();
        assert_eq!(total, CpuQuantity::new(750_000_000, "n"));
    }

    #[test]
    fn test_display_concatenates_value_and_unit() {
        assert_eq!(
            CpuQuantity::new(750_000_000, "n").to_cores().unwrap().to_string(),
            "0.75cores"
        );
        assert_eq!(
            MemoryQuantity::new(3072, "Ki")
                .to_mebibytes()
                .unwrap()
                .to_string(),
            "3MiB"
        );
    }
}
