//! Conversion between BSON documents and the JSON the API speaks.
//!
//! Documents are stored and returned verbatim, but raw BSON serializes
//! `ObjectId` as extended JSON (`{"$oid": "..."}`), which is not what
//! storefront clients expect. Responses therefore render `ObjectId` as its
//! plain 24-character hex string and datetimes as RFC 3339; everything else
//! follows the relaxed extended JSON mapping.

use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Convert a BSON document to a plain JSON object.
#[must_use]
pub fn document_to_json(doc: &Document) -> Value {
    Value::Object(
        doc.iter()
            .map(|(key, value)| (key.clone(), bson_to_json(value)))
            .collect(),
    )
}

/// Convert a list of BSON documents to a JSON array.
#[must_use]
pub fn documents_to_json(docs: &[Document]) -> Value {
    Value::Array(docs.iter().map(document_to_json).collect())
}

/// Convert a single BSON value to plain JSON.
#[must_use]
pub fn bson_to_json(bson: &Bson) -> Value {
    match bson {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map_or(Value::Null, Value::String),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}

/// JSON acknowledgement for an insert, mirroring the driver result.
#[must_use]
pub fn insert_response(result: &mongodb::results::InsertOneResult) -> Value {
    serde_json::json!({
        "acknowledged": true,
        "insertedId": bson_to_json(&result.inserted_id),
    })
}

/// JSON acknowledgement for a delete, mirroring the driver result.
#[must_use]
pub fn delete_response(result: &mongodb::results::DeleteResult) -> Value {
    serde_json::json!({
        "acknowledged": true,
        "deletedCount": result.deleted_count,
    })
}

/// JSON acknowledgement for an update, mirroring the driver result.
#[must_use]
pub fn update_response(result: &mongodb::results::UpdateResult) -> Value {
    serde_json::json!({
        "acknowledged": true,
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
    })
}

/// Convert a JSON request body to a BSON document.
///
/// # Errors
///
/// Returns a serialization error if the body is not a JSON object (BSON
/// documents are maps at the top level).
pub fn json_to_document(value: &Value) -> Result<Document, mongodb::bson::ser::Error> {
    mongodb::bson::to_document(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mongodb::bson::oid::ObjectId;
    use mongodb::bson::doc;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_id_renders_as_hex_string() {
        let oid = ObjectId::new();
        let doc = doc! { "_id": oid };

        let value = document_to_json(&doc);
        assert_eq!(value, json!({ "_id": oid.to_hex() }));
    }

    #[test]
    fn test_scalars_round_trip() {
        let doc = doc! {
            "name": "Syltherine Sofa",
            "totalPrice": 2500.0,
            "quantity": 3_i32,
            "inStock": true,
        };

        let value = document_to_json(&doc);
        assert_eq!(value["name"], json!("Syltherine Sofa"));
        assert_eq!(value["totalPrice"], json!(2500.0));
        assert_eq!(value["quantity"], json!(3));
        assert_eq!(value["inStock"], json!(true));
    }

    #[test]
    fn test_nested_documents_and_arrays() {
        let oid = ObjectId::new();
        let doc = doc! {
            "items": [
                { "productId": oid, "qty": 1_i32 },
            ],
            "shipping": { "city": "Dhaka" },
        };

        let value = document_to_json(&doc);
        assert_eq!(value["items"][0]["productId"], json!(oid.to_hex()));
        assert_eq!(value["items"][0]["qty"], json!(1));
        assert_eq!(value["shipping"]["city"], json!("Dhaka"));
    }

    #[test]
    fn test_documents_to_json_preserves_order() {
        let docs = vec![doc! { "n": 1_i32 }, doc! { "n": 2_i32 }];
        let value = documents_to_json(&docs);
        assert_eq!(value, json!([{ "n": 1 }, { "n": 2 }]));
    }

    #[test]
    fn test_json_to_document_accepts_free_form_objects() {
        let body = json!({
            "email": "a@b.com",
            "status": "pending",
            "totalPrice": 100,
        });

        let doc = json_to_document(&body).unwrap();
        assert_eq!(doc.get_str("email").unwrap(), "a@b.com");
        assert_eq!(doc.get_str("status").unwrap(), "pending");
    }

    #[test]
    fn test_json_to_document_rejects_non_objects() {
        assert!(json_to_document(&json!([1, 2, 3])).is_err());
        assert!(json_to_document(&json!("just a string")).is_err());
    }
}
