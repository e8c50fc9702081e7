use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};

/// A membership plan. `duration` is a number of whole days.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct MembershipPlan {
    id: i32,
    name: String,
    price: f64,
    duration: i32,
    description: String,
}

impl MembershipPlan {
    pub fn new(id: i32, name: String, price: f64, duration: i32, description: String) -> Self {
        Self {
            id,
            name,
            price,
            duration,
            description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct MembershipPlansList {
    membership_plans: Vec<MembershipPlan>,
}

impl MembershipPlansList {
    pub fn new(membership_plans: Vec<MembershipPlan>) -> Self {
        Self { membership_plans }
    }
}

/// Body of `POST /membership_plans` and `PUT /membership_plans/<id>`.
#[derive(Debug, Serialize, Deserialize, Getters, Dissolve, Default, PartialEq, Clone)]
pub struct MembershipPlanRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    duration: Option<i32>,
    #[serde(default)]
    description: Option<String>,
}

impl MembershipPlanRequest {
    pub fn new(
        name: Option<String>,
        price: Option<f64>,
        duration: Option<i32>,
        description: Option<String>,
    ) -> Self {
        Self {
            name,
            price,
            duration,
            description,
        }
    }
}

/// Validated plan values, used both for creation and full-record updates.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct MembershipPlanDetails {
    name: String,
    price: f64,
    duration: i32,
    description: String,
}

impl MembershipPlanDetails {
    pub fn new(name: String, price: f64, duration: i32, description: String) -> Self {
        Self {
            name,
            price,
            duration,
            description,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn monthly_plan() -> MembershipPlanDetails {
        MembershipPlanDetails::new(
            "Monthly".to_owned(),
            39.9,
            30,
            "Unlimited access for a month".to_owned(),
        )
    }

    pub fn yearly_plan() -> MembershipPlanDetails {
        MembershipPlanDetails::new("Yearly".to_owned(), 399.0, 365, String::new())
    }

    pub fn monthly_plan_request() -> MembershipPlanRequest {
        MembershipPlanRequest::new(
            Some("Monthly".to_owned()),
            Some(39.9),
            Some(30),
            Some("Unlimited access for a month".to_owned()),
        )
    }

    #[test]
    fn should_deserialize_request_without_description() {
        let request: MembershipPlanRequest =
            serde_json::from_str(r#"{"name": "Monthly", "price": 39.9, "duration": 30}"#).unwrap();

        assert_eq!(
            MembershipPlanRequest::new(Some("Monthly".to_owned()), Some(39.9), Some(30), None),
            request
        );
    }

    #[test]
    fn should_fail_to_deserialize_fractional_duration() {
        let result = serde_json::from_str::<MembershipPlanRequest>(
            r#"{"name": "Monthly", "price": 39.9, "duration": 30.5}"#,
        );

        assert!(result.is_err());
    }
}
