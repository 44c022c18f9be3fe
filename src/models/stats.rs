use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Aggregates computed by the remote API; kept as display text.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "display_text")]
    pub total_amount: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub no_of_transaction: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub total_commission_paid: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub total_amount_paid: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub total_commission: Option<String>,
}

impl DashboardStats {
    /// Reads the stats from the envelope's `data` object, or from the body
    /// itself when the API returns them at the top level.
    pub fn from_body(body: Value) -> Result<Self, serde_json::Error> {
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data @ Value::Object(_)) => serde_json::from_value(data),
                _ => serde_json::from_value(Value::Object(map)),
            },
            other => serde_json::from_value(other),
        }
    }
}

// figures arrive as strings or bare numbers depending on the field
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Renders a stat, falling back to `0` like an empty card.
pub fn or_zero(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("0")
}
