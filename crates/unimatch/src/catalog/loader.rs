use super::records::University;
use super::{CatalogError, MalformedRecord, SkippedRecord};
use serde_json::Value;
use std::collections::HashSet;
use std::io::Read;
use tracing::warn;

pub(crate) type IngestedRecords = (Vec<University>, Vec<SkippedRecord>);

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<IngestedRecords, CatalogError> {
    let raw: Vec<Value> = serde_json::from_reader(reader)?;

    let records = raw.into_iter().map(|value| {
        let id = value.get("id").and_then(Value::as_u64);
        let parsed = serde_json::from_value::<University>(value)
            .map_err(|err| MalformedRecord::Invalid(err.to_string()));
        (id, parsed)
    });

    Ok(ingest(records))
}

/// Keeps well-formed records in catalog order and reports the rest.
pub(crate) fn ingest<I>(records: I) -> IngestedRecords
where
    I: IntoIterator<Item = (Option<u64>, Result<University, MalformedRecord>)>,
{
    let mut universities = Vec::new();
    let mut skipped = Vec::new();
    let mut seen = HashSet::new();

    for (position, (id, parsed)) in records.into_iter().enumerate() {
        let checked = parsed.and_then(|university| {
            validate(&university)?;
            if !seen.insert(university.id) {
                return Err(MalformedRecord::DuplicateId(university.id));
            }
            Ok(university)
        });

        match checked {
            Ok(university) => universities.push(university),
            Err(reason) => {
                warn!(position, ?id, %reason, "skipping malformed catalog record");
                skipped.push(SkippedRecord {
                    position,
                    id,
                    reason,
                });
            }
        }
    }

    (universities, skipped)
}

fn validate(university: &University) -> Result<(), MalformedRecord> {
    if university.programs.is_empty() {
        return Err(MalformedRecord::NoPrograms);
    }

    if let Some(program) = university
        .programs
        .iter()
        .find(|program| program.grant_percent > 100)
    {
        return Err(MalformedRecord::GrantPercentOutOfRange {
            program: program.name.clone(),
            value: program.grant_percent,
        });
    }

    if university.rating.is_some_and(|rating| !rating.is_finite()) {
        return Err(MalformedRecord::InvalidRating);
    }

    if let Some(program) = university
        .programs
        .iter()
        .find(|program| program.cost_per_year.is_some_and(invalid_amount))
    {
        return Err(MalformedRecord::InvalidCost {
            field: format!("cost_per_year of '{}'", program.name),
        });
    }

    if university.dormitory.cost_per_month.is_some_and(invalid_amount) {
        return Err(MalformedRecord::InvalidCost {
            field: "dormitory.cost_per_month".to_string(),
        });
    }

    Ok(())
}

fn invalid_amount(amount: f64) -> bool {
    !amount.is_finite() || amount < 0.0
}
