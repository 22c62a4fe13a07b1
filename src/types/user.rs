use serde::Deserialize;

/// Personnel are password-less directory entries created by an admin so
/// tasks can be assigned to people who never log in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonnelReq {
    pub full_name: String,
    pub job_role: Option<String>,
}
