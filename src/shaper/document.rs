use serde_json::{json, Map, Value};

use crate::assets::AssetResolver;
use crate::entity::Document;
use crate::shaper::storage_url_value;

/// Convert a Document into the public wire format. Stored paths resolve to
/// absolute URLs under the storage root, or null when no path is stored.
pub fn document_to_api_value(doc: &Document, assets: &AssetResolver) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(doc.id));
    obj.insert("name".into(), json!(doc.name));
    obj.insert("description".into(), json!(doc.description));
    obj.insert(
        "thumbnail_url".into(),
        storage_url_value(doc.thumbnail_path.as_deref(), assets),
    );
    obj.insert(
        "file_url".into(),
        storage_url_value(doc.file_path.as_deref(), assets),
    );
    obj.insert("type".into(), json!(doc.doc_type));
    obj.insert("size".into(), json!(doc.size));
    obj.insert("extension".into(), json!(doc.extension));
    obj.insert("mime_type".into(), json!(doc.mime_type));
    obj.insert("status".into(), json!(doc.status));
    obj.insert("created_at".into(), json!(doc.created_at.to_rfc3339()));
    obj.insert("updated_at".into(), json!(doc.updated_at.to_rfc3339()));
    Value::Object(obj)
}

pub fn documents_to_api_values(docs: &[Document], assets: &AssetResolver) -> Vec<Value> {
    docs.iter().map(|d| document_to_api_value(d, assets)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn document() -> Document {
        Document {
            id: 5,
            name: "Supplier contract".into(),
            description: None,
            thumbnail_path: Some("docs/a.png".into()),
            file_path: Some("docs/a.pdf".into()),
            doc_type: "contract".into(),
            size: 48_213,
            extension: "pdf".into(),
            mime_type: "application/pdf".into(),
            status: "active".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
        }
    }

    fn assets() -> AssetResolver {
        AssetResolver::new("http://localhost:8000").unwrap()
    }

    #[test]
    fn stored_paths_resolve_under_storage_root() {
        let value = document_to_api_value(&document(), &assets());
        let thumb = value["thumbnail_url"].as_str().unwrap();
        let file = value["file_url"].as_str().unwrap();
        assert!(thumb.ends_with("storage/docs/a.png"), "got: {}", thumb);
        assert!(file.ends_with("storage/docs/a.pdf"), "got: {}", file);
    }

    #[test]
    fn missing_paths_shape_as_null_not_empty_string() {
        let mut doc = document();
        doc.thumbnail_path = None;
        doc.file_path = Some(String::new());
        let value = document_to_api_value(&doc, &assets());
        assert_eq!(value["thumbnail_url"], Value::Null);
        assert_eq!(value["file_url"], Value::Null);
    }

    #[test]
    fn type_field_uses_wire_name() {
        let value = document_to_api_value(&document(), &assets());
        assert_eq!(value["type"], json!("contract"));
        assert!(value.get("doc_type").is_none());
    }
}
