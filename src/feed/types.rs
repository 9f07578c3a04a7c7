use crate::models::{Price, PropertyType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive price bounds in whole dollars; no `max` means unbounded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Price) -> bool {
        let amount = price.amount();
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if self.min == 0 => write!(f, "Up to {}", Price(max)),
            Some(max) => write!(f, "{} - {}", Price(self.min), Price(max)),
            None => write!(f, "Above {}", Price(self.min)),
        }
    }
}

/// Accepts `min-max` or `min+`, digits with optional `,`, `_` or `$`
impl FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(min) = s.strip_suffix('+') {
            return Ok(Self::new(parse_amount(min)?, None));
        }
        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| format!("expected 'min-max' or 'min+', got '{}'", s))?;
        let (min, max) = (parse_amount(min)?, parse_amount(max)?);
        if min > max {
            return Err(format!("price range minimum {} exceeds maximum {}", min, max));
        }
        Ok(Self::new(min, Some(max)))
    }
}

fn parse_amount(raw: &str) -> Result<u64, String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | '$'))
        .collect();
    cleaned
        .parse()
        .map_err(|_| format!("invalid price '{}'", raw.trim()))
}

/// Structured filter; `None` leaves that dimension unconstrained
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub price_range: Option<PriceRange>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u32>,
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(range) = &self.price_range {
            parts.push(format!("price: {}", range));
        }
        if let Some(kind) = &self.property_type {
            parts.push(format!("type: {}", kind));
        }
        if let Some(beds) = self.bedrooms {
            parts.push(format!("bedrooms: {}", beds));
        }
        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Choices offered by the filter picker
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub price_ranges: Vec<PriceRange>,
    pub property_types: Vec<PropertyType>,
    pub bedrooms: Vec<u32>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            price_ranges: vec![
                PriceRange::new(0, Some(500_000)),
                PriceRange::new(500_000, Some(1_000_000)),
                PriceRange::new(1_000_000, None),
            ],
            property_types: PropertyType::ALL.to_vec(),
            bedrooms: (1..=5).collect(),
        }
    }
}
