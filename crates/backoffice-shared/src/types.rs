use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_WILDCARD, STATUS_ALL, SUCCESS_CODE, SUCCESS_MSG};
use crate::error::EnvelopeError;

// Every endpoint answers with this wrapper. `code` is opaque apart from 200.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MSG.to_string(),
            data: Some(data),
        }
    }

    pub fn failure(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    /// Success envelope carrying `data: null`.
    pub fn ok() -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MSG.to_string(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwrap the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.is_success() {
            return Err(EnvelopeError::Failed {
                code: self.code,
                msg: self.msg,
            });
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub total: u64,
    pub records: Vec<T>,
}

impl<T> Page<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            total: records.len() as u64,
            records,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total: 0,
            records: Vec::new(),
        }
    }
}

/// Pagination and filter criteria for list calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            keyword: None,
            status: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }

    /// Keyword to filter on, exactly as entered. All-blank keywords do not
    /// filter.
    pub fn keyword_filter(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }

    /// Status to filter on; absent or [`STATUS_ALL`] does not filter.
    pub fn status_filter(&self) -> Option<i32> {
        self.status.filter(|s| *s != STATUS_ALL)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, crate::constants::DEFAULT_PAGE_SIZE)
    }
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            captcha: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginPayload {
    pub token: String,
    pub user: User,
}

/// Allow-list of roles gating a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSet {
    /// Any authenticated user.
    Any,
    OneOf(&'static [&'static str]),
}

impl RoleSet {
    pub fn from_slice(roles: &'static [&'static str]) -> Self {
        if roles.contains(&ROLE_WILDCARD) {
            Self::Any
        } else {
            Self::OneOf(roles)
        }
    }

    /// Flat membership test, no hierarchy.
    pub fn permits(&self, role: &str) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf(roles) => roles.contains(&role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_null_data_parses() {
        let resp: ApiResponse<Page<i32>> =
            serde_json::from_str(r#"{"code":500,"msg":"boom","data":null}"#).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.data, None);

        let missing: ApiResponse<serde_json::Value> = serde_json::from_str(r#"{"code":200}"#).unwrap();
        assert!(missing.is_success());
        assert_eq!(missing.msg, "");

        let created: ApiResponse<serde_json::Value> = serde_json::from_str(r#"{"code":200,"msg":"ok","data":17}"#).unwrap();
        assert_eq!(created.data, Some(serde_json::json!(17)));
    }

    #[test]
    fn into_data_reports_failure_code() {
        let resp: ApiResponse<u8> = ApiResponse::failure(403, "nope");
        assert_eq!(
            resp.into_data(),
            Err(EnvelopeError::Failed {
                code: 403,
                msg: "nope".into()
            })
        );
        let empty: ApiResponse<u8> = ApiResponse {
            code: 200,
            msg: String::new(),
            data: None,
        };
        assert_eq!(empty.into_data(), Err(EnvelopeError::MissingData));
    }

    #[test]
    fn status_sentinel_disables_filter() {
        assert_eq!(PageQuery::default().with_status(STATUS_ALL).status_filter(), None);
        assert_eq!(PageQuery::default().with_status(2).status_filter(), Some(2));
        assert_eq!(PageQuery::default().with_keyword("  ").keyword_filter(), None);
    }

    #[test]
    fn keyword_is_forwarded_untrimmed() {
        let query = PageQuery::default().with_keyword(" dev");
        assert_eq!(query.keyword_filter(), Some(" dev"));
        assert_eq!(PageQuery::default().keyword_filter(), None);
    }

    #[test]
    fn role_set_wildcard() {
        let any = RoleSet::from_slice(&["admin", "*"]);
        assert_eq!(any, RoleSet::Any);
        assert!(any.permits("anything"));

        let admins = RoleSet::from_slice(&["admin"]);
        assert!(admins.permits("admin"));
        assert!(!admins.permits("Admin"));
        assert!(!admins.permits("user"));
    }

    #[test]
    fn user_role_defaults_to_empty() {
        let user: User = serde_json::from_str(r#"{"id":3,"username":"x"}"#).unwrap();
        assert_eq!(user.role, "");
        assert_eq!(user.avatar, None);
    }
}
