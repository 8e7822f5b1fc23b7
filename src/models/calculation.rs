use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// A calculation performed by a user, stored in `calculations`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Advisory reference to `users._id`, not enforced
    pub user_id: String,
    pub number1: f64,
    pub number2: f64,
    pub result: f64,
    pub operation: Operation,
    pub created_at: BsonDateTime,
}

impl Calculation {
    pub const COLLECTION: &'static str = "calculations";
}
