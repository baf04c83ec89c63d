use chrono::NaiveTime;
use serde::{de, Deserializer};

const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

struct Visitor;

impl<'de> de::Visitor<'de> for Visitor {
    type Value = NaiveTime;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a time of day formatted as `HH:MM` or `HH:MM:SS`")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(v, format).ok())
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(v), &self))
    }
}

pub fn deserialize_match_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(Visitor)
}
