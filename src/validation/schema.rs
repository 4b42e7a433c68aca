use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use super::error::{ValidationErrors, ValidationIssue};

/// Wire type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    /// Calendar date as `YYYY-MM-DD`, kept as a string.
    Date,
    /// A string shaped like `local@domain`.
    Email,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    non_empty: bool,
    coerce: bool,
    default: Option<Value>,
    allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            non_empty: false,
            coerce: false,
            default: None,
            allowed: None,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    /// Accept string renditions (`"true"`, `"42"`) and convert them.
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    /// Value used when the field is absent. Only meaningful for optional fields.
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Restrict a string field to a fixed vocabulary.
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    /// Reject blank strings on an optional field when it is present.
    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    fn check(&self, value: &Value) -> Result<Value, String> {
        let name = self.name;
        let checked = match self.kind {
            FieldKind::String | FieldKind::Email => match value {
                Value::String(s) if (self.required || self.non_empty) && s.trim().is_empty() => {
                    return Err(format!("{} should not be empty", name))
                }
                Value::String(s) if self.kind == FieldKind::Email && !looks_like_email(s) => {
                    return Err(format!("{} must be an email", name))
                }
                Value::String(_) => value.clone(),
                _ => return Err(format!("{} must be a string", name)),
            },
            FieldKind::Number => match value {
                Value::Number(_) => value.clone(),
                Value::String(s) if self.coerce => s
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| format!("{} must be a number", name))?,
                _ => return Err(format!("{} must be a number", name)),
            },
            FieldKind::Integer => match value {
                Value::Number(n) => integer_from_number(n)
                    .map(Value::from)
                    .ok_or_else(|| format!("{} must be an integer", name))?,
                Value::String(s) if self.coerce => s
                    .trim()
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| format!("{} must be an integer", name))?,
                _ => return Err(format!("{} must be an integer", name)),
            },
            FieldKind::Boolean => match value {
                Value::Bool(_) => value.clone(),
                Value::String(s) if self.coerce => match s.trim().to_ascii_lowercase().as_str() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    _ => return Err(format!("{} must be a boolean value", name)),
                },
                _ => return Err(format!("{} must be a boolean value", name)),
            },
            FieldKind::Date => match value {
                Value::String(s) if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => value.clone(),
                _ => return Err(format!("{} must be a valid date (YYYY-MM-DD)", name)),
            },
        };

        if let (Some(allowed), Value::String(s)) = (self.allowed, &checked) {
            if !allowed.contains(&s.as_str()) {
                return Err(format!("{} must be one of: {}", name, allowed.join(", ")));
            }
        }

        Ok(checked)
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn integer_from_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Declared shape of a request payload.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check `payload` and return only the declared fields, defaults applied.
    ///
    /// Every violation is collected; nothing short-circuits after the first
    /// problem except a payload that is not an object at all.
    pub fn validate(&self, payload: &Value) -> Result<Map<String, Value>, ValidationErrors> {
        let object = match payload {
            Value::Object(map) => map,
            _ => {
                return Err(ValidationErrors::single(ValidationIssue::payload(
                    "request body must be a JSON object",
                )))
            }
        };

        let mut errors = ValidationErrors::new();
        let mut output = Map::new();

        for key in object.keys() {
            if self.spec(key).is_none() {
                errors.push(ValidationIssue::field(
                    key.clone(),
                    format!("property {} should not exist", key),
                ));
            }
        }

        for spec in &self.fields {
            match object.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        errors.push(ValidationIssue::field(
                            spec.name,
                            format!("{} is required", spec.name),
                        ));
                    } else if let Some(default) = &spec.default {
                        output.insert(spec.name.to_string(), default.clone());
                    }
                }
                Some(value) => match spec.check(value) {
                    Ok(checked) => {
                        output.insert(spec.name.to_string(), checked);
                    }
                    Err(message) => errors.push(ValidationIssue::field(spec.name, message)),
                },
            }
        }

        errors.into_result(output)
    }

    /// Validate and deserialize into a typed input struct.
    pub fn parse<T: DeserializeOwned>(&self, payload: &Value) -> Result<T, ValidationErrors> {
        let validated = self.validate(payload)?;
        serde_json::from_value(Value::Object(validated))
            .map_err(|e| ValidationErrors::single(ValidationIssue::payload(e.to_string())))
    }
}
