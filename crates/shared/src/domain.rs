use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(TripId);
id_newtype!(BrokerId);

/// Lifecycle of a trip as seen by the client. Only `NotStarted -> InTransit`
/// is gated server-side; every other move goes through `UPDATE_STATUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    NotStarted,
    ReachedOrigin,
    InTransit,
    ReachedDestination,
    Completed,
}

impl TripStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TripStatus::NotStarted => "not_started",
            TripStatus::ReachedOrigin => "reached_origin",
            TripStatus::InTransit => "in_transit",
            TripStatus::ReachedDestination => "reached_destination",
            TripStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TripStatus::ReachedDestination | TripStatus::Completed)
    }

    /// Accent color used when rendering the status.
    pub fn color(self) -> &'static str {
        match self {
            TripStatus::NotStarted => "#9E9E9E",
            TripStatus::ReachedOrigin => "#4CAF50",
            TripStatus::InTransit => "#2196F3",
            TripStatus::ReachedDestination => "#FF9800",
            TripStatus::Completed => "#9C27B0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripStatus::NotStarted => "Not Started",
            TripStatus::ReachedOrigin => "Reached Origin",
            TripStatus::InTransit => "In Transit",
            TripStatus::ReachedDestination => "Reached Destination",
            TripStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "not_started" => Ok(TripStatus::NotStarted),
            "reached_origin" => Ok(TripStatus::ReachedOrigin),
            "in_transit" => Ok(TripStatus::InTransit),
            "reached_destination" => Ok(TripStatus::ReachedDestination),
            "completed" => Ok(TripStatus::Completed),
            other => Err(format!("unknown trip status '{other}'")),
        }
    }
}

/// Trip documents the driver is asked to upload. Document maps on the wire are
/// keyed by [`DocumentKind::key`]; keys outside this set are still accepted and
/// rendered with [`document_name`] / [`document_icon`] fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    EWayBill,
    Invoice,
    VehicleRc,
    DriverLicense,
    Insurance,
    PollutionCert,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::EWayBill,
        DocumentKind::Invoice,
        DocumentKind::VehicleRc,
        DocumentKind::DriverLicense,
        DocumentKind::Insurance,
        DocumentKind::PollutionCert,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::EWayBill => "eWayBill",
            DocumentKind::Invoice => "invoice",
            DocumentKind::VehicleRc => "vehicleRC",
            DocumentKind::DriverLicense => "driverLicense",
            DocumentKind::Insurance => "insurance",
            DocumentKind::PollutionCert => "pollutionCert",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DocumentKind::EWayBill => "E-way Bill",
            DocumentKind::Invoice => "Invoice",
            DocumentKind::VehicleRc => "Vehicle RC",
            DocumentKind::DriverLicense => "Driver License",
            DocumentKind::Insurance => "Insurance",
            DocumentKind::PollutionCert => "Pollution Certificate",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DocumentKind::EWayBill => "document-text",
            DocumentKind::Invoice => "receipt",
            DocumentKind::VehicleRc => "car",
            DocumentKind::DriverLicense => "id-card",
            DocumentKind::Insurance => "shield-checkmark",
            DocumentKind::PollutionCert => "leaf",
        }
    }
}

pub fn document_name(key: &str) -> &str {
    DocumentKind::from_key(key).map_or(key, |kind| kind.display_name())
}

pub fn document_icon(key: &str) -> &'static str {
    DocumentKind::from_key(key).map_or("document", DocumentKind::icon)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
