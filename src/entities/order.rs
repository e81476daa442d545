//! Order entity type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};

/// An order linking a customer to a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: String,

    /// Soft reference to `Customer::id`
    pub customer_id: String,

    /// Soft reference to `Product::id`
    pub product_id: String,

    /// Wall-clock creation time, serialized as RFC 3339 with nanoseconds
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Entity for Order {
    const PREFIX: EntityPrefix = EntityPrefix::Ord;
    const COLLECTION: &'static str = "orders";
    const LABEL: &'static str = "order";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Order {
    /// Create a new order stamped with the current time
    pub fn new(customer_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(Self::PREFIX).into(),
            customer_id: customer_id.into(),
            product_id: product_id.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Fixed-width timestamp text
///
/// Always nine fractional digits and a `Z` suffix, so the text sorts in time
/// order. Offset-less ISO-8601 stamps (`2024-01-02T03:04:05.123456`) are
/// accepted on read and taken as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }

    fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(ts) => Ok(ts.with_timezone(&Utc)),
            Err(_) => NaiveDateTime::parse_from_str(s, NAIVE_FORMAT).map(|naive| naive.and_utc()),
        }
    }

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_timestamp_is_captured_at_creation() {
        let before = Utc::now();
        let order = Order::new("c1", "p1");
        let after = Utc::now();

        assert!(order.timestamp >= before && order.timestamp <= after);
    }

    #[test]
    fn test_order_timestamp_serializes_as_sortable_text() {
        let mut early = Order::new("c1", "p1");
        early.timestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        let mut late = early.clone();
        late.timestamp = "2024-11-02T03:04:05Z".parse().unwrap();

        let early_json = serde_json::to_value(&early).unwrap();
        let late_json = serde_json::to_value(&late).unwrap();
        let early_ts = early_json["timestamp"].as_str().unwrap();
        let late_ts = late_json["timestamp"].as_str().unwrap();

        assert_eq!(early_ts, "2024-01-02T03:04:05.000000000Z");
        assert!(early_ts < late_ts);
    }

    #[test]
    fn test_subsecond_timestamps_sort_as_text() {
        let mut earlier = Order::new("c1", "p1");
        earlier.timestamp = "2024-01-02T03:04:05.123456Z".parse().unwrap();
        let mut later = earlier.clone();
        later.timestamp = "2024-01-02T03:04:05.123456789Z".parse().unwrap();

        let earlier_json = serde_json::to_value(&earlier).unwrap();
        let later_json = serde_json::to_value(&later).unwrap();
        let earlier_ts = earlier_json["timestamp"].as_str().unwrap();
        let later_ts = later_json["timestamp"].as_str().unwrap();

        assert_eq!(earlier_ts, "2024-01-02T03:04:05.123456000Z");
        assert_eq!(later_ts, "2024-01-02T03:04:05.123456789Z");
        assert!(earlier_ts < later_ts);
    }

    #[test]
    fn test_offsetless_timestamp_loads_as_utc() {
        let json = r#"{"id":"6f1c2a","customer_id":"c","product_id":"p","timestamp":"2024-01-02T03:04:05.123456"}"#;
        let order: Order = serde_json::from_str(json).unwrap();

        let expected: DateTime<Utc> = "2024-01-02T03:04:05.123456Z".parse().unwrap();
        assert_eq!(order.timestamp, expected);
        assert_eq!(order.id, "6f1c2a");
    }

    #[test]
    fn test_offset_timestamp_converts_to_utc() {
        let json = r#"{"id":"o","customer_id":"c","product_id":"p","timestamp":"2024-01-02T05:04:05+02:00"}"#;
        let order: Order = serde_json::from_str(json).unwrap();

        let expected: DateTime<Utc> = "2024-01-02T03:04:05Z".parse().unwrap();
        assert_eq!(order.timestamp, expected);
    }

    #[test]
    fn test_garbage_timestamp_is_rejected() {
        let json = r#"{"id":"o","customer_id":"c","product_id":"p","timestamp":"yesterday"}"#;
        assert!(serde_json::from_str::<Order>(json).is_err());
    }
}
