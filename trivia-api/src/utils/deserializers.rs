use serde::{de, Deserialize, Deserializer};

// clients send ids either as numbers or as the string keys of the categories object
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i32<E: de::Error>(self) -> Result<i32, E> {
        let wide = match self {
            IntOrString::Int(v) => v,
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("Wrong value {s}, can not parse to integer")))?,
        };
        i32::try_from(wide).map_err(|_| E::custom(format!("Value {wide} is out of range")))
    }
}

pub fn deserialize_i32_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i32()
}

pub fn deserialize_opt_i32_lenient<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i32)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "deserialize_i32_lenient")]
        id: i32,
        #[serde(default, deserialize_with = "deserialize_opt_i32_lenient")]
        extra: Option<i32>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Payload = serde_json::from_str(r#"{"id": 3, "extra": "5"}"#).unwrap();
        assert_eq!((p.id, p.extra), (3, Some(5)));
        let p: Payload = serde_json::from_str(r#"{"id": " 4 "}"#).unwrap();
        assert_eq!((p.id, p.extra), (4, None));
        let p: Payload = serde_json::from_str(r#"{"id": 1, "extra": null}"#).unwrap();
        assert_eq!(p.extra, None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Payload>(r#"{"id": "science"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"id": 99999999999}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"id": 1.5}"#).is_err());
    }
}
