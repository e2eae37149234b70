//! Status enums for trains and bookings.
//!
//! Wire values are PascalCase ("OnTime", "Pending") to match the persisted
//! document layout.

use serde::{Deserialize, Serialize};

/// Operational status of a scheduled train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum TrainStatus {
    #[default]
    Scheduled,
    OnTime,
    Delayed,
    Cancelled,
}

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
}
