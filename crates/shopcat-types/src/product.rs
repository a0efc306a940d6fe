use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Product identifier as issued by the catalog API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Ids the user marked as favorites
pub type FavoriteSet = BTreeSet<ProductId>;

/// Average score and number of votes.
///
/// The API sometimes omits the whole object and sometimes one of its members,
/// so both members are optional. A member of the wrong type reads as absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "lenient::rate")]
    pub rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: Option<u64>,
}

/// One catalog item.
///
/// Records come from an external service and are never modified after load.
/// Only `id`, `title`, `price` and `category` are required; the display-only
/// fields fall back to empty or absent when they are missing or unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient::rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Rating>,
}

impl Product {
    /// Average score, if the record carries one
    pub fn rating_rate(&self) -> Option<f64> {
        self.rating.and_then(|r| r.rate)
    }

    /// Vote count, if the record carries one
    pub fn rating_count(&self) -> Option<u64> {
        self.rating.and_then(|r| r.count)
    }
}

mod lenient {
    use super::Rating;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            _ => String::new(),
        })
    }

    pub fn rate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(to_rate(&Value::deserialize(deserializer)?))
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Ok(to_count(&Value::deserialize(deserializer)?))
    }

    /// Anything but an object is no rating at all
    pub fn rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Rating>, D::Error> {
        let Value::Object(members) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };

        Ok(Some(Rating {
            rate: members.get("rate").and_then(to_rate),
            count: members.get("count").and_then(to_count),
        }))
    }

    fn to_rate(value: &Value) -> Option<f64> {
        value.as_f64().filter(|rate| rate.is_finite())
    }

    // `12.0` is a count, `12.5` and `-1` are not
    fn to_count(value: &Value) -> Option<u64> {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
                .map(|n| n as u64)
        })
    }
}
