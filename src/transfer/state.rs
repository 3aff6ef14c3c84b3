//! The `State` module owns the record store and applies incoming commands.
use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::transfer::{
    Command, CommandType, Store, TransferRecord, compute_fee, types::RecordId,
};

/// Represents the scheduler state: the record store, the date used as "today"
/// for creation dates and fee day spans, and the command channel.
pub struct State {
    /// The record store backing all commands.
    store: Store,
    /// The date new records are created on. Captured once so a long-running
    /// batch computes every fee against the same day.
    today: NaiveDate,
    /// A channel receiver for incoming commands.
    receiver: mpsc::Receiver<Command>,
}

impl State {
    /// Creates a new `State` with an empty store.
    pub fn new(receiver: mpsc::Receiver<Command>, today: NaiveDate) -> Self {
        State {
            store: Store::new(),
            today,
            receiver,
        }
    }

    /// Retrieves all records in the store.
    pub fn get_all_records(&self) -> &HashMap<RecordId, TransferRecord> {
        self.store.get_all()
    }

    /// Creates a record from the command. The creation date is set to today
    /// and the fee is computed from the amount and schedule date.
    fn create(&mut self, command: Command) -> Result<RecordId, TransferError> {
        let origin = command
            .get_origin()
            .ok_or(TransferError::MissingField("origin"))?
            .to_owned();
        let destination = command
            .get_destination()
            .ok_or(TransferError::MissingField("destination"))?
            .to_owned();
        let schedule_date = command
            .get_schedule_date()
            .ok_or(TransferError::MissingField("schedule"))?;
        let amount = command
            .get_amount()
            .ok_or(TransferError::MissingField("amount"))?;

        let fee = compute_fee(amount, self.today, schedule_date);
        let record = TransferRecord::new(
            origin,
            destination,
            self.today,
            schedule_date,
            amount,
            fee,
        );
        Ok(self.store.insert(record))
    }

    /// Updates an existing record, recomputing the fee from today and the new
    /// schedule date. The creation date is preserved.
    /// Returns an error if no record has the given id.
    fn update(&mut self, command: Command) -> Result<(), TransferError> {
        let id = command
            .get_record_id()
            .ok_or(TransferError::MissingField("id"))?;
        let origin = command
            .get_origin()
            .ok_or(TransferError::MissingField("origin"))?
            .to_owned();
        let destination = command
            .get_destination()
            .ok_or(TransferError::MissingField("destination"))?
            .to_owned();
        let schedule_date = command
            .get_schedule_date()
            .ok_or(TransferError::MissingField("schedule"))?;
        let amount = command
            .get_amount()
            .ok_or(TransferError::MissingField("amount"))?;

        let fee = compute_fee(amount, self.today, schedule_date);
        let record = self
            .store
            .get_mut(id)
            .ok_or(TransferError::RecordNotFound(id))?;
        record.update(origin, destination, schedule_date, amount, fee);
        Ok(())
    }

    /// Deletes a record. Ids with no record are ignored.
    fn delete(&mut self, command: Command) -> Result<(), TransferError> {
        let id = command
            .get_record_id()
            .ok_or(TransferError::MissingField("id"))?;
        self.store.remove(id);
        Ok(())
    }

    /// Applies a single command to the store.
    fn apply(&mut self, command: Command) -> Result<(), TransferError> {
        match command.get_type() {
            CommandType::Create => {
                self.create(command)?;
                Ok(())
            }
            CommandType::Update => self.update(command),
            CommandType::Delete => self.delete(command),
        }
    }

    /// Runs the command loop, applying commands from the receiver until the
    /// channel closes. Failed commands are reported and skipped.
    pub async fn run(&mut self) {
        while let Some(command) = self.receiver.recv().await {
            if let Err(e) = self.apply(command) {
                eprintln!("Error applying command: {e}");
            }
        }
    }
}

/// Errors that can occur while applying a command.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Record {0} not found")]
    RecordNotFound(RecordId),
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),
}
