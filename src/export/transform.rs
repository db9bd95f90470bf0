//! Per-table post-processing.
//!
//! Ticket rows keep their line items as JSON text. When that text parses, the
//! export emits the parsed structure; otherwise the text is left as it was.

use log::debug;

use crate::config::{ITEMS_COLUMN, TICKETS_TABLE};
use crate::storage::{FieldValue, Row};

/// Applies the post-processing that `table` needs, in place.
pub fn post_process(table: &str, rows: &mut [Row]) {
    if table != TICKETS_TABLE {
        return;
    }
    for row in rows.iter_mut() {
        if let Some(field) = row.get_mut(ITEMS_COLUMN) {
            decode_json_text(field);
        }
    }
}

/// Replaces a `Text` value with its parsed JSON. Anything else is untouched.
fn decode_json_text(field: &mut FieldValue) {
    let FieldValue::Text(text) = &*field else {
        return;
    };
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(parsed) => *field = FieldValue::Json(parsed),
        Err(e) => debug!("Keeping {} as text: {}", ITEMS_COLUMN, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ticket(items: impl Into<FieldValue>) -> Row {
        Row::new().with("id", 1i64).with("items", items)
    }

    #[test]
    fn test_valid_items_text_becomes_structured() {
        let mut rows = vec![ticket(r#"[{"sku":"A1"}]"#)];
        post_process("tickets", &mut rows);
        assert_eq!(
            rows[0].get("items"),
            Some(&FieldValue::Json(json!([{"sku": "A1"}])))
        );
    }

    #[test]
    fn test_invalid_items_text_is_kept() {
        let mut rows = vec![ticket("not json")];
        post_process("tickets", &mut rows);
        assert_eq!(rows[0].get("items"), Some(&FieldValue::from("not json")));
    }

    #[test]
    fn test_scalar_json_text_is_parsed() {
        let mut rows = vec![ticket("42"), ticket("\"quoted\""), ticket("null")];
        post_process("tickets", &mut rows);
        assert_eq!(rows[0].get("items"), Some(&FieldValue::Json(json!(42))));
        assert_eq!(rows[1].get("items"), Some(&FieldValue::Json(json!("quoted"))));
        assert_eq!(
            rows[2].get("items"),
            Some(&FieldValue::Json(serde_json::Value::Null))
        );
    }

    #[test]
    fn test_empty_text_is_kept() {
        let mut rows = vec![ticket("")];
        post_process("tickets", &mut rows);
        assert_eq!(rows[0].get("items"), Some(&FieldValue::from("")));
    }

    #[test]
    fn test_non_text_items_untouched() {
        let mut rows = vec![
            ticket(FieldValue::Null),
            ticket(7i64),
            ticket(FieldValue::Blob(b"[1]".to_vec())),
        ];
        let before = rows.clone();
        post_process("tickets", &mut rows);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_rows_without_items_untouched() {
        let mut rows = vec![Row::new().with("id", 1i64).with("total", 9.5)];
        let before = rows.clone();
        post_process("tickets", &mut rows);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_other_tables_untouched() {
        let mut rows = vec![ticket("[1, 2, 3]")];
        post_process("users", &mut rows);
        assert_eq!(rows[0].get("items"), Some(&FieldValue::from("[1, 2, 3]")));
    }

    #[test]
    fn test_table_match_is_exact() {
        let mut rows = vec![ticket("[1]")];
        post_process("Tickets", &mut rows);
        assert_eq!(rows[0].get("items"), Some(&FieldValue::from("[1]")));
    }

    #[test]
    fn test_numbers_beyond_u64_keep_every_digit() {
        let text = r#"[{"sku":12345678901234567890123,"p":0.1,"neg":-98765432109876543210}]"#;
        let mut rows = vec![ticket(text)];
        post_process("tickets", &mut rows);

        let items = rows[0].get("items").expect("items present");
        assert!(matches!(items, FieldValue::Json(_)));
        assert_eq!(serde_json::to_string(items).unwrap(), text);
    }

    #[test]
    fn test_nested_object_key_order_is_preserved() {
        let mut rows = vec![ticket(r#"{"z":1,"a":{"y":2,"b":3}}"#)];
        post_process("tickets", &mut rows);
        let items = rows[0].get("items").expect("items present");
        assert_eq!(
            serde_json::to_string(items).unwrap(),
            r#"{"z":1,"a":{"y":2,"b":3}}"#
        );
    }
}
