use chrono::Local;
use csv::{ReaderBuilder, Trim};
use tokio::sync::mpsc;

mod transfer;

/// The size of the channel for processing commands.
const CHANNEL_SIZE: usize = 100;

#[tokio::main]
async fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 2 {
        eprintln!("Usage: {} <input_csv_file>", args[0]);
        std::process::exit(1);
    }
    let input_file = &args[1];

    let (sender, receiver) = mpsc::channel(CHANNEL_SIZE);
    let mut state = transfer::State::new(receiver, Local::now().date_naive());

    let handle = tokio::spawn(async move {
        state.run().await;
        state
    });

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(input_file)
        .expect("Failed to read CSV file");

    for command in reader.deserialize().flatten() {
        if let Err(err) = sender.send(command).await {
            eprintln!("Error sending command: {err}");
        }
    }

    drop(sender); // Close the sender to signal no more commands will be sent
    let state = handle
        .await
        .expect("Failed to join the state handling task");

    let mut records = state.get_all_records().values().collect::<Vec<_>>();
    records.sort_by_key(|record| record.get_id());

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for record in records {
        if let Err(err) = writer.serialize(record) {
            eprintln!("Error writing record: {err}");
        }
    }
}
