/*!

Metric-table collaborator (§6, §10.F): writes one text file per calculator,
tabulating swept range against each builder's averaged metric value.

*/

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::Result;

///One calculator's sweep results: a row per swept range, a column per
///builder, in the order `builders` was given to [`crate::sweep::sweep_metrics`].
pub struct MetricTable
{
	pub metric_name: String,
	pub builder_names: Vec<String>,
	///`rows[i] = (range, values)`, `values[j]` corresponding to `builder_names[j]`.
	pub rows: Vec<(f64, Vec<f64>)>,
}

impl MetricTable
{
	///Renders the header and rows as `range builder_0 builder_1 ...` lines,
	///space-separated, with a timestamped comment header.
	pub fn render(&self) -> String
	{
		let mut out = String::new();
		let _ = writeln!(out, "# {} — generated {}", self.metric_name, Local::now().to_rfc2822());
		let _ = write!(out, "# range");
		for name in &self.builder_names
		{
			let _ = write!(out, " {}", name);
		}
		let _ = writeln!(out);
		for (range, values) in &self.rows
		{
			let _ = write!(out, "{}", range);
			for v in values
			{
				let _ = write!(out, " {}", v);
			}
			let _ = writeln!(out);
		}
		out
	}

	///Writes this table to `directory/<metric_name>.txt`.
	pub fn write_to_file(&self, directory: &Path) -> Result<()>
	{
		fs::create_dir_all(directory)?;
		fs::write(directory.join(format!("{}.txt", self.metric_name)), self.render())?;
		Ok(())
	}
}
