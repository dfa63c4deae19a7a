//! Form field extraction with typed numeric coercion.
//!
//! Forms collect raw text. Before a submission becomes a create/update
//! command, the known numeric fields are coerced: integer fields to JSON
//! integers, money/rating fields to JSON floats, and empty numeric input to
//! an explicit `null` - never a silent zero. Everything else stays text.
//! Stronger validation is the backend's job.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Fields coerced to integers on extraction.
const INT_FIELDS: [&str; 6] = [
    "floor",
    "capacity",
    "hotel_id",
    "user_id",
    "room_id",
    "number_of_guests",
];

/// Fields coerced to floating point on extraction.
const FLOAT_FIELDS: [&str; 3] = ["price_per_night", "rating", "total_price"];

/// A typed form value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    Int(i64),
    Float(f64),
    /// Empty (or unparseable) numeric input - serialized as `null`.
    Absent,
}

impl FormValue {
    /// JSON representation for request bodies.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Int(i) => Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Self::Absent => Value::Null,
        }
    }

    /// Integer view, when the value coerced to one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// An in-memory form: a named set of raw text fields, in declaration order.
///
/// The field set is declared up front (like inputs in a form) so that
/// [`set_values`] knows which entity fields it may populate.
#[derive(Debug, Clone)]
pub struct Form {
    id: String,
    fields: Vec<(String, String)>,
}

impl Form {
    /// Create an empty form with the given field names.
    #[must_use]
    pub fn with_fields(id: &str, names: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            fields: names.iter().map(|n| ((*n).to_string(), String::new())).collect(),
        }
    }

    /// Form identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set a field's raw text. Unknown names are ignored, mirroring input
    /// into a form that has no such control.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|(n, _)| n == name) {
            field.1 = value.to_string();
        }
    }

    /// Builder-style [`Form::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Raw text of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Extract a form into typed values, applying the numeric coercion table.
#[must_use]
pub fn extract_values(form: &Form) -> BTreeMap<String, FormValue> {
    form.fields
        .iter()
        .map(|(name, raw)| (name.clone(), coerce(name, raw)))
        .collect()
}

/// Extract a form straight into a JSON object for a create/update command.
#[must_use]
pub fn body(form: &Form) -> Map<String, Value> {
    extract_values(form)
        .into_iter()
        .map(|(name, value)| (name, value.to_json()))
        .collect()
}

/// Populate a form from a serialized entity, for editing. Only fields the
/// form declares are touched; `null` becomes empty text.
pub fn set_values(form: &mut Form, entity: &Value) {
    let Some(object) = entity.as_object() else {
        return;
    };

    for (name, value) in object {
        let raw = match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        form.set(name, &raw);
    }
}

fn coerce(name: &str, raw: &str) -> FormValue {
    if INT_FIELDS.contains(&name) {
        coerce_int(raw)
    } else if FLOAT_FIELDS.contains(&name) {
        coerce_float(raw)
    } else {
        FormValue::Text(raw.to_string())
    }
}

#[allow(clippy::cast_possible_truncation)] // truncation toward zero is the point
fn coerce_int(raw: &str) -> FormValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FormValue::Absent;
    }
    // Accept decimal text the way a lax parser would, truncating toward zero.
    trimmed.parse::<i64>().map_or_else(
        |_| {
            trimmed
                .parse::<f64>()
                .map_or(FormValue::Absent, |f| FormValue::Int(f.trunc() as i64))
        },
        FormValue::Int,
    )
}

fn coerce_float(raw: &str) -> FormValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FormValue::Absent;
    }
    trimmed
        .parse::<f64>()
        .map_or(FormValue::Absent, FormValue::Float)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn room_form() -> Form {
        Form::with_fields(
            "room-form",
            &[
                "hotel_id",
                "room_number",
                "floor",
                "room_type",
                "price_per_night",
                "capacity",
                "description",
                "amenities",
            ],
        )
    }

    #[test]
    fn test_numeric_coercion_types() {
        // floor="3", price_per_night="150.50", capacity="2" must go out as
        // numbers, not strings.
        let form = room_form()
            .with("hotel_id", "3")
            .with("room_number", "101")
            .with("floor", "3")
            .with("room_type", "standard")
            .with("price_per_night", "150.50")
            .with("capacity", "2");

        let body = body(&form);
        assert_eq!(body.get("floor"), Some(&Value::from(3)));
        assert_eq!(body.get("capacity"), Some(&Value::from(2)));
        assert_eq!(body.get("price_per_night"), Some(&Value::from(150.5)));
        assert_eq!(
            body.get("room_number"),
            Some(&Value::String("101".to_string()))
        );
    }

    #[test]
    fn test_empty_numeric_is_null_not_zero() {
        let form = room_form().with("room_number", "101");
        let body = body(&form);

        assert_eq!(body.get("floor"), Some(&Value::Null));
        assert_eq!(body.get("price_per_night"), Some(&Value::Null));
    }

    #[test]
    fn test_unparseable_numeric_is_null() {
        let form = room_form().with("floor", "ground").with("price_per_night", "cheap");
        let values = extract_values(&form);

        assert_eq!(values.get("floor"), Some(&FormValue::Absent));
        assert_eq!(values.get("price_per_night"), Some(&FormValue::Absent));
    }

    #[test]
    fn test_decimal_text_in_int_field_truncates() {
        let form = room_form().with("floor", "3.7");
        assert_eq!(
            extract_values(&form).get("floor"),
            Some(&FormValue::Int(3))
        );
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = room_form();
        form.set("no_such_field", "x");
        assert_eq!(form.get("no_such_field"), None);
    }

    #[test]
    fn test_set_values_round_trip() {
        let entity = serde_json::json!({
            "id": 12,
            "hotel_id": 3,
            "room_number": "101",
            "floor": 3,
            "room_type": "standard",
            "price_per_night": 150.5,
            "capacity": 2,
            "description": null,
            "amenities": "Wi-Fi"
        });

        let mut form = room_form();
        set_values(&mut form, &entity);

        let values = extract_values(&form);
        assert_eq!(values.get("floor"), Some(&FormValue::Int(3)));
        assert_eq!(values.get("capacity"), Some(&FormValue::Int(2)));
        assert_eq!(values.get("hotel_id"), Some(&FormValue::Int(3)));
        assert_eq!(
            values.get("price_per_night"),
            Some(&FormValue::Float(150.5))
        );
        assert_eq!(
            values.get("room_number"),
            Some(&FormValue::Text("101".to_string()))
        );
        // Null entity field stays an empty text field.
        assert_eq!(
            values.get("description"),
            Some(&FormValue::Text(String::new()))
        );
    }
}
