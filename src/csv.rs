use std::io::prelude::*;

use crate::extract::PlateTemperatures;

/// Writes the converged field as CSV, one line per y value starting
/// at the top of the plate, so the printed table reads like the
/// physical layout.
pub fn write_csv<P: AsRef<std::path::Path>>(
    temperatures: &PlateTemperatures,
    path: &P,
) -> std::io::Result<()> {
    println!("Writing: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);

    // Write line for each y value
    for row in temperatures.rows_top_down() {
        let mut cells = row.into_iter();
        if let Some(first) = cells.next() {
            write!(output, "{first}")?;
        }
        for r in cells {
            write!(output, ", {r}")?;
        }
        writeln!(output)?;
    }
    output.flush()
}
