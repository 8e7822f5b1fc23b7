use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub timestamp: BsonDateTime,
    pub user_id: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AuditLog {
    pub const COLLECTION: &'static str = "audit_logs";
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_audit_log_field_names() {
        let entry = AuditLog {
            id: None,
            timestamp: BsonDateTime::now(),
            user_id: "u-1".into(),
            action: "LOGIN".into(),
            details: None,
        };
        let doc = bson::to_document(&entry).unwrap();
        assert!(doc.contains_key("timestamp"));
        assert_eq!(doc.get_str("userId").unwrap(), "u-1");
        assert!(!doc.contains_key("details"));
    }
}
