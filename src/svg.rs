/*!

SVG rendering collaborator (§6, §10.E): draws a built network's channels and
routing edges as a single `<svg>` document. Plain string formatting, no
templating dependency, consistent with this codebase's direct `Display`-style
output elsewhere.

*/

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::error::Result;
use crate::geometry::{Position, Region};
use crate::network::Network;

const NODE_RADIUS: f64 = 8.0;
const STROKE_WIDTH: f64 = 1.0;
const TITLE_FONT_SIZE: f64 = 20.0;
const TITLE_MARGIN: f64 = 30.0;

///Maps region coordinates to pixels: `pixel = (coordinate - origin) * scale`,
///with the y axis flipped so larger `y` draws higher on the page.
struct Projection
{
	region: Region,
	scale: f64,
}

impl Projection
{
	fn project(&self, p: Position) -> (f64, f64)
	{
		let px = (p.x - self.region.min_x) * self.scale;
		let py = (self.region.max_y - p.y) * self.scale;
		(px, py)
	}
	fn width(&self) -> f64
	{
		self.region.width() * self.scale
	}
	fn height(&self) -> f64
	{
		self.region.height() * self.scale + TITLE_MARGIN
	}
}

///Renders `network` under `title` to a single SVG document string.
pub fn render(network: &Network, title: &str, region: &Region, scale: f64) -> String
{
	let projection = Projection{region: *region, scale};
	let width = projection.width();
	let height = projection.height();
	let mut out = String::new();

	let _ = writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.1}" height="{:.1}" viewBox="0 0 {:.1} {:.1}">"#, width, height, width, height);
	let _ = writeln!(out, r#"<rect x="0" y="0" width="{:.1}" height="{:.1}" fill="white"/>"#, width, height);

	let n = network.num_sensors();
	for (i, j) in (0..n).tuple_combinations()
	{
		if network.get_neighbors(i).any(|k| k == j)
		{
			let (x1, y1) = projection.project(network.get_position(i));
			let (x2, y2) = projection.project(network.get_position(j));
			let _ = writeln!(out, r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="gray" stroke-width="{}" stroke-dasharray="4,3"/>"#, x1, y1, x2, y2, STROKE_WIDTH);
		}
	}

	for i in 1..n
	{
		if let Some(parent) = network.get_parent(i)
		{
			let (x1, y1) = projection.project(network.get_position(i));
			let (x2, y2) = projection.project(network.get_position(parent));
			let _ = writeln!(out, r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="blue" stroke-width="{}"/>"#, x1, y1, x2, y2, STROKE_WIDTH);
		}
	}

	for i in 0..n
	{
		let (cx, cy) = projection.project(network.get_position(i));
		let (fill, border) = if i == 0 { ("red", "yellow") } else { ("yellow", "green") };
		let _ = writeln!(out, r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#, cx, cy, NODE_RADIUS, fill, border, STROKE_WIDTH);
	}

	let _ = writeln!(out, r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{}" fill="blue">{}</text>"#, width / 2.0, height - TITLE_MARGIN / 3.0, TITLE_FONT_SIZE, escape(title));
	let _ = writeln!(out, "</svg>");
	out
}

///Renders and writes the document to `directory/<name>.svg`.
pub fn write_to_file(network: &Network, name: &str, title: &str, region: &Region, scale: f64, directory: &Path) -> Result<()>
{
	fs::create_dir_all(directory)?;
	let document = render(network, title, region, scale);
	fs::write(directory.join(format!("{}.svg", name)), document)?;
	Ok(())
}

fn escape(s: &str) -> String
{
	s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
