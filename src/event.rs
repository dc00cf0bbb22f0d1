use crate::error::ParseError;
use crate::status::Status;
use serde_json::{Map, Value};

/// One normalized order status update, as produced by [`Event::parse`].
///
/// `amount` is present exactly when `status` is `NEW`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Event {
    pub order_id: u64,
    pub update_id: u64,
    pub status: Status,
    pub amount: Option<u64>,
}

// Exact type check: a numeric string, a float or a negative number is not
// a non-negative integer.
fn int_field(obj: &Map<String, Value>, field: &'static str) -> Result<u64, ParseError> {
    obj.get(field)
        .and_then(Value::as_u64)
        .ok_or(ParseError::InvalidType(field))
}

impl Event {
    /// Validates and normalizes one raw JSON record.
    ///
    /// Checks run in order and the first failure wins: well-formed object,
    /// required fields present, integer types, known status, amount on NEW
    /// records. Unrecognized keys are ignored.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let value: Value =
            serde_json::from_str(line).map_err(|e| ParseError::MalformedInput(e.to_string()))?;
        let obj = value
            .as_object()
            .ok_or_else(|| ParseError::MalformedInput("not a JSON object".to_string()))?;

        for field in ["orderId", "updateId", "status"] {
            if !obj.contains_key(field) {
                return Err(ParseError::MissingField(field));
            }
        }

        let order_id = int_field(obj, "orderId")?;
        let update_id = int_field(obj, "updateId")?;

        let status = match obj.get("status").and_then(Value::as_str) {
            Some(name) => Status::from_name(name)?,
            None => return Err(ParseError::UnknownStatus(obj["status"].to_string())),
        };

        // amount is meaningful only on the creating NEW event; on anything
        // else it is just another ignored extra key.
        let amount = if status.is_new() {
            if !obj.contains_key("amount") {
                return Err(ParseError::MissingAmount);
            }
            Some(int_field(obj, "amount")?)
        } else {
            None
        };

        Ok(Event {
            order_id,
            update_id,
            status,
            amount,
        })
    }
}
