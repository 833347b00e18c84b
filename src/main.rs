mod api;
mod config;
mod error;
mod extractor;
mod recognizer;
mod scanner;
mod types;

#[cfg(test)]
mod test_support;

use crate::api::ApiClient;
use crate::config::{Args, Config};
use crate::recognizer::CommandRecognizer;
use crate::scanner::Scanner;
use crate::types::Notice;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::process;

#[macro_use]
extern crate failure;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting plate-reporter");

    let args = Args::parse();
    match run(args).await {
        Ok(true) => info!("Exiting main"),
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    }
}

/// Returns whether every attempt ended without an error notice.
async fn run(args: Args) -> Result<bool, failure::Error> {
    if args.images.is_empty() && args.plate.is_none() {
        return Err(format_err!("Nothing to do: pass image paths or --plate"));
    }
    let config = Config::from_args(&args)?;
    let api = ApiClient::new(&config)?;
    let scanner = Scanner::new(CommandRecognizer::new(config.ocr_command.clone()), api);

    let mut all_ok = true;
    if let Some(plate) = &args.plate {
        all_ok &= report(&scanner.report_plate(plate).await);
    }
    // One request in flight at a time.
    for image in &args.images {
        all_ok &= report(&scanner.scan_image(image).await);
    }
    Ok(all_ok)
}

fn report(notice: &Notice) -> bool {
    match notice.reason() {
        Some(reason) => error!("{} ({})", notice.message(), reason),
        None if notice.is_error() => error!("{}", notice.message()),
        None => info!("{}", notice.message()),
    }
    println!("{}", notice.message());
    !notice.is_error()
}
