//! Order Model
//!
//! One customer flower order. Deserialization accepts untrusted store rows:
//! numeric fields may arrive as strings, `is_paid` may arrive as a native
//! boolean or the text "TRUE"/"true". Parse failures degrade to documented
//! defaults instead of failing the whole row.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Order entity (one spreadsheet row)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Opaque unique token, client-generated at creation time
    #[serde(default = "Order::fresh_id")]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    /// Display ordering only; 0 when absent or unparseable
    #[serde(default, deserialize_with = "de_queue_number")]
    pub queue_number: i64,
    /// Defaults to 1 when absent or unparseable
    #[serde(default = "default_flower_count", deserialize_with = "de_flower_count")]
    pub flower_count: i64,
    #[serde(default)]
    pub order_date: String,
    /// Amount in currency unit; 0 when absent or unparseable
    #[serde(default, deserialize_with = "de_price")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Comma-joined localized color names (see [`crate::color`])
    #[serde(default, deserialize_with = "de_text")]
    pub flower_colors: String,
    #[serde(default, deserialize_with = "de_text")]
    pub bouquet_colors: String,
    #[serde(default, deserialize_with = "de_paid_flag")]
    pub is_paid: bool,
}

impl Order {
    /// Generate a fresh session-unique order id
    pub fn fresh_id() -> String {
        format!("id_{}", Uuid::new_v4().simple())
    }
}

/// Minimal delta payload for the paid-flag update call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidUpdate {
    pub id: String,
    pub is_paid: bool,
}

fn default_flower_count() -> i64 {
    1
}

/// Integer from a number or numeric string; `None` otherwise
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn de_queue_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(&value).unwrap_or(0))
}

fn de_flower_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(&value).unwrap_or(1))
}

fn de_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_float(&value).unwrap_or(0.0))
}

/// Accepts a native bool or the text "TRUE"/"true" (any case)
fn de_paid_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// String field that may arrive as null
fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Order {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_row_parses() {
        let order = parse(json!({
            "id": "id_abc",
            "customer_name": "สมหญิง",
            "queue_number": 3,
            "flower_count": 12,
            "order_date": "2024-02-14",
            "price": 450.5,
            "notes": "wrap in paper",
            "flower_colors": "แดง, ขาว",
            "bouquet_colors": "ชมพู",
            "is_paid": true
        }));
        assert_eq!(order.id, "id_abc");
        assert_eq!(order.queue_number, 3);
        assert_eq!(order.flower_count, 12);
        assert_eq!(order.price, 450.5);
        assert_eq!(order.notes.as_deref(), Some("wrap in paper"));
        assert!(order.is_paid);
    }

    #[test]
    fn test_numeric_fields_accept_strings() {
        let order = parse(json!({
            "id": "x",
            "customer_name": "A",
            "queue_number": "7",
            "flower_count": "3",
            "price": "120.50"
        }));
        assert_eq!(order.queue_number, 7);
        assert_eq!(order.flower_count, 3);
        assert_eq!(order.price, 120.5);
    }

    #[test]
    fn test_bad_numeric_fields_fall_back() {
        let order = parse(json!({
            "id": "x",
            "customer_name": "A",
            "queue_number": "soon",
            "flower_count": null,
            "price": "free"
        }));
        assert_eq!(order.queue_number, 0);
        assert_eq!(order.flower_count, 1);
        assert_eq!(order.price, 0.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let order = parse(json!({ "id": "x" }));
        assert_eq!(order.queue_number, 0);
        assert_eq!(order.flower_count, 1);
        assert_eq!(order.price, 0.0);
        assert!(order.notes.is_none());
        assert_eq!(order.flower_colors, "");
        assert!(!order.is_paid);
    }

    #[test]
    fn test_is_paid_normalization() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!("TRUE"), true),
            (json!("true"), true),
            (json!("FALSE"), false),
            (json!("yes"), false),
            (json!(1), false),
            (json!(null), false),
        ] {
            let order = parse(json!({ "id": "x", "is_paid": raw }));
            assert_eq!(order.is_paid, expected, "is_paid normalization");
        }
    }

    #[test]
    fn test_null_color_strings_become_empty() {
        let order = parse(json!({ "id": "x", "flower_colors": null, "bouquet_colors": 5 }));
        assert_eq!(order.flower_colors, "");
        assert_eq!(order.bouquet_colors, "");
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Order::fresh_id();
        let b = Order::fresh_id();
        assert!(a.starts_with("id_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialize_skips_absent_notes() {
        let order = parse(json!({ "id": "x" }));
        let out = serde_json::to_value(&order).unwrap();
        assert!(out.get("notes").is_none());
    }
}
