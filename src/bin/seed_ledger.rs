use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Duration, OffsetDateTime};

use keuanganku::ledger::{LedgerFile, Transaction, TransactionType};

/// A utility for creating a ledger file with sample transactions for the Keuanganku server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the CSV ledger to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a ledger file for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'keuanganku.csv').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'keuanganku.csv').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating ledger at {output_path:#?}");

    let today = OffsetDateTime::now_utc().date();
    let transaction = |days_ago: i64, category: &str, transaction_type, amount, note: &str| {
        Transaction {
            date: today - Duration::days(days_ago),
            category: category.to_owned(),
            transaction_type,
            amount,
            note: note.to_owned(),
        }
    };

    let transactions = vec![
        transaction(30, "Gaji", TransactionType::Income, 7_500_000, "Gaji bulanan"),
        transaction(28, "Tagihan", TransactionType::Expense, 350_000, "Listrik dan air"),
        transaction(25, "Belanja", TransactionType::Expense, 420_000, "Belanja bulanan"),
        transaction(20, "Makan", TransactionType::Expense, 50_000, "Makan siang"),
        transaction(14, "Freelance", TransactionType::Income, 1_250_000, "Proyek desain logo"),
        transaction(10, "Transport", TransactionType::Expense, 30_000, "Ojek ke kantor"),
        transaction(7, "Hiburan", TransactionType::Expense, 65_000, "Nonton bioskop"),
        transaction(3, "Makan", TransactionType::Expense, 85_000, "Makan malam keluarga"),
        transaction(1, "Lainnya", TransactionType::Expense, 25_000, ""),
    ];

    println!("Writing {} sample transactions...", transactions.len());

    LedgerFile::new(output_path).save(&transactions)?;

    println!("Success!");

    Ok(())
}
