//! Booking domain types.

use serde::{Deserialize, Serialize};

use ironrail_core::{BookingId, Email, PaymentStatus, UserId};

/// A booking as stored in the `bookings` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: BookingId,
    /// Account that owns the booking; the `userId` query filter matches this.
    pub user_id: UserId,
    /// Passenger name (may differ from the account's display name).
    pub name: String,
    pub phone: String,
    pub email: Email,
    /// Name of the booked train.
    pub train_booked: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub payment_status: PaymentStatus,
}

/// Payload for `POST /bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub user_id: UserId,
    pub name: String,
    pub phone: String,
    pub email: Email,
    pub train_booked: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}

impl CreateBooking {
    /// Assign a fresh ID and produce the storable booking.
    #[must_use]
    pub fn into_booking(self) -> Booking {
        Booking {
            booking_id: BookingId::generate(),
            user_id: self.user_id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            train_booked: self.train_booked,
            destination: self.destination,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            payment_status: self.payment_status,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_booking_defaults_payment_pending() {
        let payload: CreateBooking = serde_json::from_value(serde_json::json!({
            "userId": "u-1",
            "name": "Ada",
            "phone": "555-0100",
            "email": "ada@example.com",
            "trainBooked": "Coastal Express",
            "destination": "Harborview",
            "departureTime": "08:15",
            "arrivalTime": "11:40"
        }))
        .unwrap();

        assert_eq!(payload.payment_status, PaymentStatus::Pending);

        let booking = payload.into_booking();
        assert!(!booking.booking_id.as_str().is_empty());
        assert_eq!(booking.user_id, UserId::new("u-1"));
    }

    #[test]
    fn test_booking_wire_format() {
        let booking = Booking {
            booking_id: BookingId::new("b-1"),
            user_id: UserId::new("u-1"),
            name: "Ada".to_owned(),
            phone: "555-0100".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
            train_booked: "Coastal Express".to_owned(),
            destination: "Harborview".to_owned(),
            departure_time: "08:15".to_owned(),
            arrival_time: "11:40".to_owned(),
            payment_status: PaymentStatus::Pending,
        };

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["bookingId"], "b-1");
        assert_eq!(json["trainBooked"], "Coastal Express");
        assert_eq!(json["paymentStatus"], "Pending");
    }
}
