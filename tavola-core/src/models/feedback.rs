//! Contact messages and reservation requests.
//!
//! Both are append-only writes to remote collections. The server
//! assigns the creation timestamp, so the payloads carry none.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
            status: MessageStatus::Unread,
        }
    }

    /// Required fields for submission.
    pub fn validate(&self) -> Vec<(&'static str, &'static str)> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(("name", "Name is required"));
        }
        if self.email.trim().is_empty() {
            errors.push(("email", "Email is required"));
        }
        if self.message.trim().is_empty() {
            errors.push(("message", "Message is required"));
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Declined,
}

/// A table reservation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Requested date (YYYY-MM-DD)
    pub date: String,
    /// Requested time (HH:MM)
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub special_requests: String,
    /// Reserved for authenticated visitors; always absent for guests
    pub user_id: Option<String>,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        guests: u32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            date: date.into(),
            time: time.into(),
            guests,
            special_requests: String::new(),
            user_id: None,
            status: ReservationStatus::Pending,
        }
    }

    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = requests.into();
        self
    }

    /// Required fields for submission.
    pub fn validate(&self) -> Vec<(&'static str, &'static str)> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(("name", "Name is required"));
        }
        if self.email.trim().is_empty() {
            errors.push(("email", "Email is required"));
        }
        if self.phone.trim().is_empty() {
            errors.push(("phone", "Phone number is required"));
        }
        if self.date.trim().is_empty() {
            errors.push(("date", "Date is required"));
        }
        if self.time.trim().is_empty() {
            errors.push(("time", "Time is required"));
        }
        if self.guests < 1 {
            errors.push(("guests", "At least one guest is required"));
        }
        errors
    }
}
