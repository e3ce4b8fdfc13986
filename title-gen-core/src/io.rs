use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::error::GenerationError;
use crate::model::generator::GeneratedRow;

/// Header of the exported spreadsheet.
pub const EXPORT_HEADER: [&str; 2] = ["title", "keywords"];

/// Splits newline-delimited text into phrases.
///
/// - Splits on `\n` / `\r\n`
/// - Trims every line
/// - Drops blank lines
pub fn parse_lines(text: &str) -> Vec<String> {
	text.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Reads a UTF-8 word list file, one phrase per line.
///
/// Blank lines are skipped (see `parse_lines`).
pub fn read_word_list<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, GenerationError> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(parse_lines(&contents))
}

/// Writes rows as a two-column CSV spreadsheet.
///
/// The header is `title,keywords`, followed by one record per row in
/// batch order. Multi-line keyword blobs are quoted by the CSV writer.
pub fn write_rows<W: Write>(writer: W, rows: &[GeneratedRow]) -> Result<(), GenerationError> {
	let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

	writer.write_record(EXPORT_HEADER)?;
	for row in rows {
		writer.write_record([&row.title, &row.keywords])?;
	}
	writer.flush()?;

	Ok(())
}

/// Writes rows to a CSV file, replacing it if it exists.
pub fn export_rows<P: AsRef<Path>>(path: P, rows: &[GeneratedRow]) -> Result<(), GenerationError> {
	let file = File::create(&path)?;
	write_rows(file, rows)?;
	log::info!("Exported {} rows to {}", rows.len(), path.as_ref().display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_lines_trims_and_skips_blanks() {
		let text = "  Dual SIM \r\n\n5G\n   \n\tFast Charging\n";
		assert_eq!(parse_lines(text), vec!["Dual SIM", "5G", "Fast Charging"]);
		assert!(parse_lines("").is_empty());
	}

	#[test]
	fn csv_keeps_header_and_row_order() {
		let rows = vec![
			GeneratedRow { title: "A 5G, Dual SIM".to_owned(), keywords: "5g\ndual sim".to_owned() },
			GeneratedRow { title: "B".to_owned(), keywords: "b".to_owned() },
		];
		let mut out = Vec::new();
		write_rows(&mut out, &rows).unwrap();

		let text = String::from_utf8(out).unwrap();
		assert_eq!(text, "title,keywords\n\"A 5G, Dual SIM\",\"5g\ndual sim\"\nB,b\n");
	}

	#[test]
	fn csv_for_empty_batch_is_only_the_header() {
		let mut out = Vec::new();
		write_rows(&mut out, &[]).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "title,keywords\n");
	}

	#[test]
	fn word_list_file_round_trip() {
		let path = std::env::temp_dir().join(format!("title-gen-words-{}.txt", std::process::id()));
		std::fs::write(&path, "Flash Deal\n\n  Best Seller  \n").unwrap();

		let words = read_word_list(&path).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(words, vec!["Flash Deal", "Best Seller"]);
	}

	#[test]
	fn export_writes_csv_file() {
		let path = std::env::temp_dir().join(format!("title-gen-export-{}.csv", std::process::id()));
		let rows = vec![GeneratedRow { title: "X1 5G".to_owned(), keywords: "5g\nx1".to_owned() }];

		export_rows(&path, &rows).unwrap();
		let text = std::fs::read_to_string(&path).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(text, "title,keywords\nX1 5G,\"5g\nx1\"\n");
	}

	#[test]
	fn missing_word_list_is_an_io_error() {
		let err = read_word_list("/definitely/not/here.txt").unwrap_err();
		assert!(matches!(err, GenerationError::Io(_)));
	}
}
