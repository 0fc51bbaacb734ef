use serde::{Deserialize, Serialize};

use crate::constants::ingestion::FIELD_COUNT;
use crate::constants::viewer::RECORD_DELIMITER;

pub use crate::types::{FieldValue, RecordLine};

/// One wildfire hotspot event, nine positional text fields in dataset order.
///
/// Fields are kept exactly as read (after trimming); nothing is parsed or
/// validated, so comparisons operate on the raw bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FireRecord {
    /// Row identifier.
    pub id: FieldValue,
    /// External unique id assigned by the publisher.
    pub uuid: FieldValue,
    /// Latitude as published.
    pub latitude: FieldValue,
    /// Longitude as published.
    pub longitude: FieldValue,
    /// Observation timestamp, compared as text.
    pub timestamp: FieldValue,
    /// Country name.
    pub country: FieldValue,
    /// Administrative region (state).
    pub region: FieldValue,
    /// Municipality name.
    pub municipality: FieldValue,
    /// Biome name.
    pub biome: FieldValue,
}

/// Positional field selector, in dataset column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    /// Column 1.
    Id,
    /// Column 2.
    Uuid,
    /// Column 3.
    Latitude,
    /// Column 4.
    Longitude,
    /// Column 5.
    Timestamp,
    /// Column 6.
    Country,
    /// Column 7.
    Region,
    /// Column 8.
    Municipality,
    /// Column 9.
    Biome,
}

impl RecordField {
    /// All fields in column order.
    pub const ALL: [RecordField; FIELD_COUNT] = [
        RecordField::Id,
        RecordField::Uuid,
        RecordField::Latitude,
        RecordField::Longitude,
        RecordField::Timestamp,
        RecordField::Country,
        RecordField::Region,
        RecordField::Municipality,
        RecordField::Biome,
    ];

    /// Zero-based column position of this field.
    pub fn position(self) -> usize {
        self as usize
    }
}

impl FireRecord {
    /// Build a record from exactly [`FIELD_COUNT`] values in column order.
    pub fn from_fields(fields: [FieldValue; FIELD_COUNT]) -> Self {
        let [
            id,
            uuid,
            latitude,
            longitude,
            timestamp,
            country,
            region,
            municipality,
            biome,
        ] = fields;
        Self {
            id,
            uuid,
            latitude,
            longitude,
            timestamp,
            country,
            region,
            municipality,
            biome,
        }
    }

    /// Borrow the value of `field`.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Id => &self.id,
            RecordField::Uuid => &self.uuid,
            RecordField::Latitude => &self.latitude,
            RecordField::Longitude => &self.longitude,
            RecordField::Timestamp => &self.timestamp,
            RecordField::Country => &self.country,
            RecordField::Region => &self.region,
            RecordField::Municipality => &self.municipality,
            RecordField::Biome => &self.biome,
        }
    }

    /// Render the record as a single presentation line.
    pub fn to_line(&self) -> RecordLine {
        RecordField::ALL
            .iter()
            .map(|field| self.field(*field))
            .collect::<Vec<_>>()
            .join(RECORD_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FireRecord {
        FireRecord::from_fields([
            "7".into(),
            "f3a9".into(),
            "-3.1".into(),
            "-52.2".into(),
            "2024-01-15 17:42:00".into(),
            "Brasil".into(),
            "PARÁ".into(),
            "ALTAMIRA".into(),
            "Amazônia".into(),
        ])
    }

    #[test]
    fn from_fields_keeps_column_order() {
        let record = sample();
        for (idx, field) in RecordField::ALL.iter().enumerate() {
            assert_eq!(field.position(), idx);
        }
        assert_eq!(record.field(RecordField::Id), "7");
        assert_eq!(record.field(RecordField::Timestamp), "2024-01-15 17:42:00");
        assert_eq!(record.field(RecordField::Municipality), "ALTAMIRA");
        assert_eq!(record.field(RecordField::Biome), "Amazônia");
    }

    #[test]
    fn to_line_joins_every_field() {
        let line = sample().to_line();
        assert_eq!(
            line,
            "7 ,f3a9 ,-3.1 ,-52.2 ,2024-01-15 17:42:00 ,Brasil ,PARÁ ,ALTAMIRA ,Amazônia"
        );
    }
}
