//! Wire model for the `/query` endpoint.

use serde::Deserialize;
use serde_json::Value;

/// The response returned from the `/query` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResponse {
    /// Names of the result columns, in order.
    pub columns: Vec<String>,
    /// Result rows; each row holds one value per column.
    ///
    /// Row length is not checked against the column count by this
    /// layer.
    pub values: Vec<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_columns_and_values() {
        let response: QueryResponse = serde_json::from_value(json!({
            "columns": ["id", "name"],
            "values": [[1, "Kit"], [2, null]],
        }))
        .unwrap();
        assert_eq!(response.columns, vec!["id", "name"]);
        assert_eq!(response.values[1], vec![json!(2), Value::Null]);
    }

    #[test]
    fn ragged_rows_are_not_rejected() {
        let response: QueryResponse = serde_json::from_value(json!({
            "columns": ["a", "b"],
            "values": [[1], [1, 2, 3]],
        }))
        .unwrap();
        assert_eq!(response.values[0].len(), 1);
        assert_eq!(response.values[1].len(), 3);
    }
}
