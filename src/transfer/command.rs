//! Commands that drive the transfer scheduler.
//!
//! Each CSV row is one command. Create and update rows carry the editable
//! fields of a transfer; update and delete rows carry the record id. Missing
//! columns deserialize to `None` and are validated when the command is applied.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::transfer::types::RecordId;

/// Enum representing the kind of command.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Create,
    Update,
    Delete,
}

/// A single scheduling command read from the input stream.
#[derive(Deserialize, Debug, Clone)]
pub struct Command {
    /// The kind of command (create, update, or delete).
    #[serde(rename = "type")]
    cmd_type: CommandType,

    /// The target record id, required for update and delete.
    #[serde(rename = "id")]
    record_id: Option<RecordId>,

    /// Account number the money leaves from.
    origin: Option<String>,

    /// Account number the money goes to.
    destination: Option<String>,

    /// The scheduled execution date.
    #[serde(rename = "schedule")]
    schedule_date: Option<NaiveDate>,

    /// The amount to transfer, if applicable.
    amount: Option<Decimal>,
}

impl Command {
    /// Gets the kind of command.
    pub fn get_type(&self) -> &CommandType {
        &self.cmd_type
    }

    /// Gets the target record id, if present.
    pub fn get_record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    /// Gets the origin account number, if present.
    pub fn get_origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Gets the destination account number, if present.
    pub fn get_destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Gets the scheduled execution date, if present.
    pub fn get_schedule_date(&self) -> Option<NaiveDate> {
        self.schedule_date
    }

    /// Gets the transfer amount, if present.
    pub fn get_amount(&self) -> Option<Decimal> {
        self.amount
    }

    #[cfg(test)]
    pub fn new(
        cmd_type: CommandType,
        record_id: Option<RecordId>,
        origin: Option<String>,
        destination: Option<String>,
        schedule_date: Option<NaiveDate>,
        amount: Option<Decimal>,
    ) -> Self {
        Command {
            cmd_type,
            record_id,
            origin,
            destination,
            schedule_date,
            amount,
        }
    }
}
