use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Appends a single line to a file, creating the file if it does not exist.
pub(crate) fn append_line<P: AsRef<Path>>(filename: P, line: &str) -> io::Result<()> {
	let mut file = OpenOptions::new().create(true).append(true).open(filename)?;
	file.write_all(line.as_bytes())?;
	file.write_all(b"\n")?;
	Ok(())
}
