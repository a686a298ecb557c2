use std::io::Write;

use crate::error::Result;
use crate::processors::AggregationReport;
use crate::utils::format::format_degrees;

/// Prints the two-line highest/lowest temperature summary.
///
/// When no station produced a reading the names are empty and the values are
/// the -1000/1000 seeds, printed as whole numbers.
pub struct SummaryWriter;

impl SummaryWriter {
    pub fn lines(report: &AggregationReport) -> [String; 2] {
        let (highest_name, highest_value, lowest_name, lowest_value) = match &report.extremes {
            Some(e) => (
                e.highest.station_name.as_str(),
                format_degrees(e.highest.value),
                e.lowest.station_name.as_str(),
                format_degrees(e.lowest.value),
            ),
            None => {
                let (_, high, _, low) = report.as_tuple();
                ("", format!("{}", high), "", format!("{}", low))
            }
        };

        [
            format!("Highest temperature: {}, {} degrees", highest_name, highest_value),
            format!("Lowest temperature: {}, {} degrees", lowest_name, lowest_value),
        ]
    }

    pub fn write_to<W: Write>(report: &AggregationReport, out: &mut W) -> Result<()> {
        for line in Self::lines(report) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
