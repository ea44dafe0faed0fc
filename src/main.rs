// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod db;
mod report;
mod types;
mod ui;
mod wrap;

use log::debug;
use std::io;
use types::MoveRecord;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // One scoped read; the connection is released before any output starts
    let records = match read_all_moves(&args) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    if records.is_empty() {
        println!("No reasoning traces found.");
        std::process::exit(1);
    }

    if args.json {
        match report::render_json(&records) {
            Ok(doc) => println!("{}", doc),
            Err(e) => {
                ui::print_error(&format!("Failed to encode JSON report: {}", e));
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = print_text_report(&records, args.wrap_width) {
        ui::print_error(&format!("Failed to write report: {}", e));
        std::process::exit(1);
    }
}

/// Open the database, read every move, and drop the connection
fn read_all_moves(args: &cli::CliArgs) -> Result<Vec<MoveRecord>, String> {
    debug!("Reading moves from {}", args.db.display());

    let store = db::MoveStore::open(&args.db)
        .map_err(|e| format!("Failed to open {}: {}", args.db.display(), e))?;

    store
        .fetch_moves()
        .map_err(|e| format!("Failed to read moves table: {}", e))
}

/// Stream the full text report to stdout: header, one block per record,
/// then the aggregate summary
fn print_text_report(records: &[MoveRecord], wrap_width: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = report::ReportWriter::new(stdout.lock(), wrap_width);

    writer.write_report_header(records.len())?;
    for (i, record) in records.iter().enumerate() {
        writer.write_trace_block(record, i + 1)?;
    }

    let summary = report::summarize(records);
    writer.write_summary(&summary)
}
