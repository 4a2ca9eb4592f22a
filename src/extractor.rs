use serde_json::Value;
use crate::config::FIELDS;
use crate::search_engine::Record;

/// One output row: every exported field, in `FIELDS` order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    values: Vec<(&'static str, String)>,
}

impl FlatRow {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.iter().find(|(name, _)| *name == field).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn flatten_record(record: &Record) -> FlatRow {
    let values = FIELDS
        .iter()
        .map(|&field| (field, record.get(field).map(flatten_value).unwrap_or_default()))
        .collect();
    FlatRow { values }
}

/// Lists and objects become JSON text; `null` becomes an empty cell.
pub fn flatten_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_key_set_is_fixed_schema() {
        let rec = record(json!({
            "id": "42",
            "not_exported": "dropped",
            "another_extra": [1, 2, 3]
        }));
        let row = flatten_record(&rec);
        assert_eq!(row.keys().collect::<Vec<_>>(), FIELDS.to_vec());
        assert_eq!(row.get("not_exported"), None);
        assert_eq!(row.get("id"), Some("42"));
    }

    #[test]
    fn test_empty_record_gives_all_empty_cells() {
        let row = flatten_record(&Record::new());
        assert_eq!(row.len(), FIELDS.len());
        assert!(row.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_scalars_and_null() {
        let rec = record(json!({
            "fullname": "Mr John Smith",
            "bookable": true,
            "popularity": 17,
            "availabilityRank": 2.5,
            "image": null
        }));
        let row = flatten_record(&rec);
        assert_eq!(row.get("fullname"), Some("Mr John Smith"));
        assert_eq!(row.get("bookable"), Some("true"));
        assert_eq!(row.get("popularity"), Some("17"));
        assert_eq!(row.get("availabilityRank"), Some("2.5"));
        assert_eq!(row.get("image"), Some(""));
    }

    #[test]
    fn test_nested_values_round_trip() {
        let specialties = json!(["Orthopaedics", "Sports medicine"]);
        let hospitals = json!([{"name": "Leeds", "distance": null}, {"name": "York", "beds": 40}]);
        let locations = json!({"lat": 53.5, "lng": -1.25, "tags": ["north"]});
        let rec = record(json!({
            "specialties": specialties.clone(),
            "hospitals": hospitals.clone(),
            "locations": locations.clone()
        }));
        let row = flatten_record(&rec);

        for (field, expected) in [("specialties", specialties), ("hospitals", hospitals), ("locations", locations)] {
            let text = row.get(field).unwrap();
            let decoded: Value = serde_json::from_str(text).unwrap();
            assert_eq!(decoded, expected, "field {}", field);
        }
    }
}
