use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};

/// A member as listed by `GET /members`.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Member {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    address: String,
    image: Option<String>,
    status: String,
}

impl Member {
    pub fn new(
        id: i32,
        first_name: String,
        last_name: String,
        email: String,
        address: String,
        image: Option<String>,
        status: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            address,
            image,
            status,
        }
    }
}

/// The single-record shape returned by `GET /members/<id>`.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MemberSummary {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
}

impl MemberSummary {
    pub fn new(id: i32, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct MembersList {
    members: Vec<Member>,
}

impl MembersList {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }
}

/// Body of `POST /members`, as sent by the client.
/// Every field is optional here so that missing ones can be reported together.
#[derive(Debug, Serialize, Deserialize, Getters, Dissolve, Default, PartialEq, Eq, Clone)]
pub struct MemberCreationRequest {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

impl MemberCreationRequest {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone,
            address,
        }
    }
}

/// Body of `PUT /members/<id>`.
#[derive(Debug, Serialize, Deserialize, Getters, Dissolve, Default, PartialEq, Eq, Clone)]
pub struct MemberUpdateRequest {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl MemberUpdateRequest {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
        }
    }
}

/// A validated member, ready to be inserted.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct NewMember {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: String,
}

impl NewMember {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
        address: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone,
            address,
        }
    }
}

/// Validated replacement values for an existing member.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct MemberChanges {
    first_name: String,
    last_name: String,
    email: String,
}

impl MemberChanges {
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn jon_doe_creation_request() -> MemberCreationRequest {
        MemberCreationRequest::new(
            Some("Jon".to_owned()),
            Some("Doe".to_owned()),
            Some("jon.doe@email.com".to_owned()),
            Some("0612345678".to_owned()),
            Some("1 rue de la Paix, Paris".to_owned()),
        )
    }

    pub fn jon_doe() -> NewMember {
        NewMember::new(
            "Jon".to_owned(),
            "Doe".to_owned(),
            "jon.doe@email.com".to_owned(),
            "0612345678".to_owned(),
            "1 rue de la Paix, Paris".to_owned(),
        )
    }

    pub fn jonette_snow() -> NewMember {
        NewMember::new(
            "Jonette".to_owned(),
            "Snow".to_owned(),
            "jonette.snow@email.com".to_owned(),
            "0698765432".to_owned(),
            "12 avenue du Nord, Lille".to_owned(),
        )
    }

    #[test]
    fn should_deserialize_partial_creation_request() {
        let request: MemberCreationRequest =
            serde_json::from_str(r#"{"first_name": "Jon", "email": "jon.doe@email.com"}"#)
                .unwrap();

        assert_eq!(
            MemberCreationRequest::new(
                Some("Jon".to_owned()),
                None,
                Some("jon.doe@email.com".to_owned()),
                None,
                None
            ),
            request
        );
    }

    #[test]
    fn should_serialize_member_without_image() {
        let member = Member::new(
            1,
            "Jon".to_owned(),
            "Doe".to_owned(),
            "jon.doe@email.com".to_owned(),
            "1 rue de la Paix, Paris".to_owned(),
            None,
            "Active".to_owned(),
        );

        let value = serde_json::to_value(&member).unwrap();

        assert_eq!(serde_json::Value::Null, value["image"]);
        assert_eq!("Active", value["status"]);
    }
}
