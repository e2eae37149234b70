//! Train domain types.

use serde::{Deserialize, Serialize};

use ironrail_core::{TrainId, TrainStatus};

/// A scheduled train as stored in the `trains` collection.
///
/// Departure and arrival times are display strings supplied by the operator,
/// not parsed timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    pub train_id: TrainId,
    pub driver_name: String,
    pub train_name: String,
    pub train_number: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub status: TrainStatus,
}

/// Payload for `POST /trains`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrain {
    pub driver_name: String,
    pub train_name: String,
    pub train_number: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default)]
    pub status: TrainStatus,
}

impl CreateTrain {
    /// Assign a fresh ID and produce the storable train.
    #[must_use]
    pub fn into_train(self) -> Train {
        Train {
            train_id: TrainId::generate(),
            driver_name: self.driver_name,
            train_name: self.train_name,
            train_number: self.train_number,
            destination: self.destination,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            status: self.status,
        }
    }
}
