use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mailing address, one-to-one with a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// User entity - matches the SQL schema, plus the left-joined address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, immutable once created
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    /// All-or-nothing: present iff all four address fields are non-null,
    /// and the key is omitted entirely otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Pagination metadata for a user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// One page of users plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub pagination: Pagination,
}

/// Payload of the count endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_without_address_omits_key() {
        let user = User {
            id: "user-001".to_string(),
            name: "Leanne".to_string(),
            username: "leanne".to_string(),
            email: "leanne@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(!value.as_object().unwrap().contains_key("address"));
    }

    #[test]
    fn test_user_with_address_serializes_all_fields() {
        let user = User {
            id: "user-001".to_string(),
            name: "Leanne".to_string(),
            username: "leanne".to_string(),
            email: "leanne@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: Some(Address {
                street: "101 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zipcode: "62701".to_string(),
            }),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["address"]["street"], "101 Main St");
        assert_eq!(value["address"]["zipcode"], "62701");
    }

    #[test]
    fn test_pagination_uses_camel_case_total_pages() {
        let pagination = Pagination {
            page: 2,
            limit: 10,
            total: 400,
            total_pages: 40,
        };

        let value = serde_json::to_value(&pagination).unwrap();
        assert_eq!(value["totalPages"], 40);
        assert!(value.get("total_pages").is_none());
    }
}
