use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Envelope returned by the remote-jobs endpoint.
///
/// Items are kept as raw JSON so one malformed posting can't poison the
/// whole listing.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<Value>,
}

/// A single job posting as published by Remotive.
///
/// Scalars are cast leniently: a numeric string is accepted for `id`, and
/// numbers or booleans are accepted where text is expected.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RemoteJob {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_type: Option<String>,
    /// Upstream sends e.g. `2024-05-01T12:34:56` (no offset).
    #[serde(default, deserialize_with = "lenient::text")]
    pub publication_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub candidate_required_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

impl RemoteJob {
    /// Decode one item from the raw `jobs` array.
    pub fn from_value(value: Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Int(i64),
        Float(f64),
        Bool(bool),
        Text(String),
    }

    impl Scalar {
        fn into_text(self) -> String {
            match self {
                Scalar::Int(n) => n.to_string(),
                Scalar::Float(n) => n.to_string(),
                Scalar::Bool(b) => b.to_string(),
                Scalar::Text(s) => s,
            }
        }
    }

    fn whole_number(value: f64) -> Option<i64> {
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
    }

    pub fn id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(scalar) = Option::<Scalar>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let id = match scalar {
            Scalar::Int(n) => Some(n),
            Scalar::Float(n) => whole_number(n),
            Scalar::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
            }
            Scalar::Bool(_) => None,
        };

        id.map(Some)
            .ok_or_else(|| de::Error::custom("id is not an integer"))
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
    }

    /// A single scalar is read as a one-element list.
    pub fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Tags {
            Many(Vec<Scalar>),
            One(Scalar),
        }

        Ok(match Option::<Tags>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(Tags::Many(items)) => items.into_iter().map(Scalar::into_text).collect(),
            Some(Tags::One(item)) => vec![item.into_text()],
        })
    }
}
