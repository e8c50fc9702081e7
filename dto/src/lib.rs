pub mod member;
pub mod membership_plan;
pub mod payment;
pub mod response;
