use crate::error::ParseError;
use serde::Serialize;

/// Lifecycle stage of an order.
///
/// The paid path is linear and advances one rank at a time:
/// `NEW -> COOKING -> DELIVERING -> DELIVERED -> REFUNDED`. `CANCELED` sits
/// outside the chain and is reachable only from `NEW`, `COOKING` and
/// `DELIVERING`. The set of stages and their ranks is fixed at compile time.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    New,
    Cooking,
    Delivering,
    Delivered,
    Refunded,
    Canceled,
}

impl Status {
    /// All statuses, in reporting order.
    pub const ALL: [Status; 6] = [
        Status::New,
        Status::Cooking,
        Status::Delivering,
        Status::Delivered,
        Status::Refunded,
        Status::Canceled,
    ];

    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        match name {
            "NEW" => Ok(Status::New),
            "COOKING" => Ok(Status::Cooking),
            "DELIVERING" => Ok(Status::Delivering),
            "DELIVERED" => Ok(Status::Delivered),
            "REFUNDED" => Ok(Status::Refunded),
            "CANCELED" => Ok(Status::Canceled),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "NEW",
            Status::Cooking => "COOKING",
            Status::Delivering => "DELIVERING",
            Status::Delivered => "DELIVERED",
            Status::Refunded => "REFUNDED",
            Status::Canceled => "CANCELED",
        }
    }

    /// Human form used by the text report.
    pub fn title(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Cooking => "Cooking",
            Status::Delivering => "Delivering",
            Status::Delivered => "Delivered",
            Status::Refunded => "Refunded",
            Status::Canceled => "Canceled",
        }
    }

    /// Position in the linear chain. `CANCELED` is not part of the chain
    /// and ranks below `NEW`.
    pub fn rank(self) -> i8 {
        match self {
            Status::Canceled => -1,
            Status::New => 0,
            Status::Cooking => 1,
            Status::Delivering => 2,
            Status::Delivered => 3,
            Status::Refunded => 4,
        }
    }

    /// Whether an order may move from `old` to `new`.
    ///
    /// `CANCELED` is terminal; cancellation itself is allowed only before
    /// delivery completes. Everything else is a single forward step.
    pub fn is_transferrable(old: Status, new: Status) -> bool {
        if old == Status::Canceled {
            return false;
        }
        if new == Status::Canceled {
            return old.rank() >= Status::New.rank() && old.rank() <= Status::Delivering.rank();
        }
        new.rank() == old.rank() + 1
    }

    /// Charged only past `NEW`, and not refunded. `CANCELED` ranks below
    /// `NEW`, so canceled orders never count as paid.
    pub fn is_paid(self) -> bool {
        self.rank() > Status::New.rank() && self != Status::Refunded
    }

    pub fn is_new(self) -> bool {
        self == Status::New
    }
}
