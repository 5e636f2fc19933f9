//! Split a PDF into standalone segments at its largest whitespace gaps.
//!
//! Usage:
//!   segment_pdf <input-pdf> <output-directory> <number-of-segments>
//!
//! Extracts the text layout, finds the N-1 largest vertical whitespace gaps,
//! and writes one PDF per resulting page group as segment_1.pdf ..
//! segment_N.pdf in the output directory. Set RUST_LOG=debug for per-stage
//! diagnostics.

use std::process;

use pdf_segmenter::segment_document;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        let program = args.first().map(|s| s.as_str()).unwrap_or("segment_pdf");
        eprintln!(
            "Usage: {} <input-pdf> <output-directory> <number-of-segments>",
            program
        );
        process::exit(1);
    }

    let segment_count: usize = match args[3].parse() {
        Ok(count) => count,
        Err(_) => {
            eprintln!(
                "error: number of segments must be a positive integer, got '{}'",
                args[3]
            );
            process::exit(1);
        },
    };

    match segment_document(&args[1], &args[2], segment_count) {
        Ok(report) if report.is_empty() => {
            eprintln!("warning: no text content extracted, nothing written");
        },
        Ok(report) => {
            for segment in &report.segments {
                println!(
                    "{} (pages {}-{}, {} pages)",
                    segment.path.display(),
                    segment.first_page + 1,
                    segment.last_page + 1,
                    segment.page_count
                );
            }
        },
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        },
    }
}
