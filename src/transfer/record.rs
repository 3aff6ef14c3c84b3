//! Persisted representation of a scheduled money transfer.
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::transfer::types::{FEE_SCALE, RecordId};

/// Rounds the fee to the persisted scale on the way out. The calculator keeps
/// full precision; only stored/displayed values are fixed to two digits.
fn serialize_fee<S>(fee: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    Serialize::serialize(
        &fee.round_dp_with_strategy(FEE_SCALE, RoundingStrategy::MidpointAwayFromZero),
        serializer,
    )
}

/// A scheduled money transfer between two accounts, with its computed fee.
#[derive(Serialize, Debug, Clone)]
pub struct TransferRecord {
    /// The identifier assigned by the store on creation.
    id: RecordId,

    /// Account number the money leaves from.
    #[serde(rename = "origin")]
    account_origin: String,

    /// Account number the money goes to.
    #[serde(rename = "destination")]
    account_destination: String,

    /// The date the record was created; set once, never overwritten by updates.
    #[serde(rename = "creation")]
    creation_date: NaiveDate,

    /// The date the transfer is scheduled to execute.
    #[serde(rename = "schedule")]
    schedule_date: NaiveDate,

    /// The amount to transfer, excluding the fee.
    amount: Decimal,

    /// The computed fee, kept at full precision in memory.
    #[serde(serialize_with = "serialize_fee")]
    fee: Decimal,
}

impl TransferRecord {
    /// Creates a record awaiting an id from the store.
    pub fn new(
        account_origin: String,
        account_destination: String,
        creation_date: NaiveDate,
        schedule_date: NaiveDate,
        amount: Decimal,
        fee: Decimal,
    ) -> Self {
        TransferRecord {
            id: 0,
            account_origin,
            account_destination,
            creation_date,
            schedule_date,
            amount,
            fee,
        }
    }

    /// Overwrites every user-editable field and the fee in one step, so a
    /// record never carries a fee computed from superseded values. The id and
    /// creation date are preserved.
    pub fn update(
        &mut self,
        account_origin: String,
        account_destination: String,
        schedule_date: NaiveDate,
        amount: Decimal,
        fee: Decimal,
    ) {
        self.account_origin = account_origin;
        self.account_destination = account_destination;
        self.schedule_date = schedule_date;
        self.amount = amount;
        self.fee = fee;
    }

    /// Stamps the store-assigned identifier.
    pub(crate) fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    /// Gets the store-assigned identifier.
    pub fn get_id(&self) -> RecordId {
        self.id
    }

    /// Gets the origin account number.
    pub fn get_origin(&self) -> &str {
        &self.account_origin
    }

    /// Gets the destination account number.
    pub fn get_destination(&self) -> &str {
        &self.account_destination
    }

    /// Gets the creation date.
    pub fn get_creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Gets the scheduled execution date.
    pub fn get_schedule_date(&self) -> NaiveDate {
        self.schedule_date
    }

    /// Gets the transfer amount.
    pub fn get_amount(&self) -> Decimal {
        self.amount
    }

    /// Gets the computed fee at full precision.
    pub fn get_fee(&self) -> Decimal {
        self.fee
    }
}
