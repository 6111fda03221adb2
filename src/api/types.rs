use serde::{Deserialize, Serialize};

/// Request body for POST /users and PUT /users/{id}
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload<'a> {
    pub name: &'a str,
    pub job: &'a str,
}

/// Body returned by a successful create (201)
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Body returned by a successful update (200)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Envelope returned by GET /users/{id}; the user fields sit under `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub data: UserData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_parses_id_and_job() {
        let body = r#"{"name":"A","job":"B","id":"417","createdAt":"2025-01-01T00:00:00.000Z"}"#;
        let parsed: CreatedUser = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("417"));
        assert_eq!(parsed.job.as_deref(), Some("B"));
    }

    #[test]
    fn envelope_exposes_nested_job() {
        let body = r#"{"data":{"id":2,"email":"x@example.com","job":"Senior QA Engineer"}}"#;
        let parsed: UserEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.job.as_deref(), Some("Senior QA Engineer"));
    }

    #[test]
    fn envelope_without_job_deserializes() {
        let body = r#"{"data":{"id":2,"first_name":"Janet","last_name":"Weaver"}}"#;
        let parsed: UserEnvelope = serde_json::from_str(body).unwrap();
        assert!(parsed.data.job.is_none());
    }
}
