//! Prospect list generation

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::digits::{DigitSource, ThreadRngDigits};
use super::tables::ProspectTables;

const STREET_NUMBERS: std::ops::RangeInclusive<u32> = 100..=999;
const PHONE_GROUP: std::ops::RangeInclusive<u32> = 0..=9999;

/// One fabricated business contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectRecord {
    pub name: String,
    pub category: String,
    pub phone_number: String,
    pub address: String,
}

pub struct ProspectGenerator<D = ThreadRngDigits> {
    tables: ProspectTables,
    digits: D,
}

impl ProspectGenerator<ThreadRngDigits> {
    pub fn new(tables: ProspectTables) -> Self {
        Self::with_digits(tables, ThreadRngDigits::thread())
    }
}

impl<D: DigitSource> ProspectGenerator<D> {
    pub fn with_digits(tables: ProspectTables, digits: D) -> Self {
        Self { tables, digits }
    }

    pub fn tables(&self) -> &ProspectTables {
        &self.tables
    }

    /// Fabricate `count` records for a city and niche
    ///
    /// Record `i` takes `names[i % len]` and `streets[i % len]`; once the
    /// name list is exhausted, names gain a cycle suffix (" 2", " 3", ...).
    /// Unknown cities and niches fall back to the default tables.
    pub fn generate(&mut self, city: &str, category: &str, count: usize) -> Vec<ProspectRecord> {
        let names = self.tables.names_for(category);
        let streets = self.tables.streets_for(city);
        let area_code = self.tables.area_code_for(city);
        debug!(
            city,
            category,
            names = names.len(),
            streets = streets.len(),
            area_code,
            "generating prospects"
        );

        let records: Vec<ProspectRecord> = (0..count)
            .map(|i| {
                let name = match i / names.len() {
                    0 => names[i % names.len()].clone(),
                    cycle => format!("{} {}", names[i % names.len()], cycle + 1),
                };
                let number = self.digits.next_in(STREET_NUMBERS);
                let phone_number = format!(
                    "({}) 9{:04}-{:04}",
                    area_code,
                    self.digits.next_in(PHONE_GROUP),
                    self.digits.next_in(PHONE_GROUP)
                );

                ProspectRecord {
                    name,
                    category: category.to_string(),
                    phone_number,
                    address: format!("{}, {} - {}", streets[i % streets.len()], number, city),
                }
            })
            .collect();

        info!(city, category, count = records.len(), "prospects generated");
        records
    }
}
