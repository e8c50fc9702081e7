use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Payment {
    id: i32,
    member_id: i32,
    amount: f64,
    payment_date: NaiveDateTime,
    payment_method: String,
    status: String,
    transaction_id: Option<String>,
}

impl Payment {
    pub fn new(
        id: i32,
        member_id: i32,
        amount: f64,
        payment_date: NaiveDateTime,
        payment_method: String,
        status: String,
        transaction_id: Option<String>,
    ) -> Self {
        Self {
            id,
            member_id,
            amount,
            payment_date,
            payment_method,
            status,
            transaction_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct PaymentsList {
    payments: Vec<Payment>,
}

impl PaymentsList {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self { payments }
    }
}
