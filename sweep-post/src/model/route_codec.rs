//! the route column holds an ordered list of order ids, stored in the CSV as a
//! JSON array inside a single text field, e.g. `"[0, 4, 2, 0]"`.
use serde::{Deserialize, Deserializer, Serializer};

/// decodes a route field. blank fields are empty routes.
pub fn decode(field: &str) -> Result<Vec<i64>, String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(vec![]);
    }
    serde_json::from_str::<Vec<i64>>(trimmed)
        .map_err(|e| format!("route '{trimmed}' is not a JSON list of integers: {e}"))
}

pub fn encode(route: &[i64]) -> Result<String, String> {
    serde_json::to_string(route).map_err(|e| format!("failure encoding route: {e}"))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = String::deserialize(deserializer)?;
    decode(&field).map_err(serde::de::Error::custom)
}

pub fn serialize<S>(route: &[i64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let field = encode(route).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&field)
}

#[cfg(test)]
mod test {
    use super::{decode, encode};

    #[test]
    fn test_decode_python_list_literal() {
        let route = decode("[0, 12, 7, 0]").expect("should decode");
        assert_eq!(route, vec![0, 12, 7, 0]);
    }

    #[test]
    fn test_decode_blank_is_empty_route() {
        assert_eq!(decode("").expect("should decode"), Vec::<i64>::new());
        assert_eq!(decode("  []  ").expect("should decode"), Vec::<i64>::new());
    }

    #[test]
    fn test_decode_rejects_code() {
        assert!(decode("__import__('os').system('ls')").is_err());
        assert!(decode("[1, 'a']").is_err());
    }

    #[test]
    fn test_encode_is_json() {
        assert_eq!(encode(&[3, 1, 2]).expect("should encode"), "[3,1,2]");
    }
}
