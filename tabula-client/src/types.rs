use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============ Resources ============

/// Upstream collection served by the demo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// `GET /posts`, `GET /posts/{id}`.
    Posts,
    /// `GET /users`, `GET /users/{id}`.
    Users,
}

impl Resource {
    /// Path segment relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Users => "users",
        }
    }

    /// Singular noun for messages ("post", "user").
    pub fn singular(self) -> &'static str {
        match self {
            Self::Posts => "post",
            Self::Users => "user",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// ============ Record ============

/// One item of an upstream collection.
///
/// The record is kept as the raw JSON object the API returned; the only field
/// the client interprets is the integer `id`, which is validated on
/// construction. Everything else is read through [`field`](Self::field) with a
/// dotted path such as `"address.city"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    id: u64,
    fields: Map<String, Value>,
}

impl Record {
    /// Record identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Raw field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a (possibly nested) field by dotted path.
    pub fn field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.fields.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Field rendered as display text. Missing and `null` fields render empty.
    pub fn text(&self, path: &str) -> String {
        match self.field(path) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Decode the record into a typed view such as [`User`] or [`Post`].
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = fields
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| "record is missing an integer `id` field".to_string())?;
        Ok(Self { id, fields })
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

// ============ Typed views ============

/// A blog post (`/posts`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A user (`/users`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

/// Postal address nested in [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

/// Employer nested in [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_json() -> Value {
        json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874"
            },
            "company": { "name": "Romaguera-Crona" }
        })
    }

    #[test]
    fn record_requires_integer_id() {
        let ok: Result<Record, _> = serde_json::from_value(json!({ "id": 3, "title": "x" }));
        assert!(matches!(ok, Ok(ref r) if r.id() == 3));

        let missing: Result<Record, _> = serde_json::from_value(json!({ "title": "x" }));
        assert!(missing.is_err());

        let stringly: Result<Record, _> = serde_json::from_value(json!({ "id": "3" }));
        assert!(stringly.is_err());
    }

    #[test]
    fn dotted_field_lookup() {
        let record: Record = serde_json::from_value(user_json()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(record.text("name"), "Leanne Graham");
        assert_eq!(record.text("address.city"), "Gwenborough");
        assert_eq!(record.text("company.name"), "Romaguera-Crona");
        assert_eq!(record.text("id"), "1");
        assert_eq!(record.text("address.nope"), "");
        assert_eq!(record.text("name.first"), "");
    }

    #[test]
    fn decode_typed_user() {
        let record: Record = serde_json::from_value(user_json()).unwrap_or_else(|e| panic!("{e}"));
        let user: User = record.decode().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.map(|a| a.zipcode).as_deref(), Some("92998-3874"));
    }

    #[test]
    fn decode_typed_post() {
        let record: Record = serde_json::from_value(json!({
            "userId": 1, "id": 7, "title": "magnam facilis", "body": "quo et expedita"
        }))
        .unwrap_or_else(|e| panic!("{e}"));
        let post: Post = record.decode().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "magnam facilis");
    }

    #[test]
    fn record_serializes_back_to_original_object() {
        let source = json!({ "id": 9, "title": "t" });
        let record: Record =
            serde_json::from_value(source.clone()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(serde_json::to_value(&record).unwrap_or_default(), source);
    }

    #[test]
    fn resource_paths() {
        assert_eq!(Resource::Posts.path(), "posts");
        assert_eq!(Resource::Users.to_string(), "users");
        assert_eq!(Resource::Users.singular(), "user");
    }
}
