// preview.rs - Terminal rendering of the colour raster
//
// Two grid rows per character cell using the upper-half block with
// 24-bit foreground/background colours. Top of the terminal = highest y.

use std::io::{self, Write};

use feature_field::ColorRaster;

const UPPER_HALF: char = '\u{2580}';

pub fn render(raster: &ColorRaster) -> String {
    let (w, h) = (raster.width(), raster.height());
    let mut out = String::new();

    let mut top = h;
    while top > 0 {
        let upper = top - 1;
        let lower = upper.checked_sub(1);
        for x in 0..w {
            let [r, g, b] = raster.get(x, upper).unwrap_or_default();
            match lower.and_then(|y| raster.get(x, y)) {
                Some([lr, lg, lb]) => out.push_str(&format!(
                    "\x1b[38;2;{r};{g};{b}m\x1b[48;2;{lr};{lg};{lb}m{UPPER_HALF}"
                )),
                None => out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{UPPER_HALF}")),
            }
        }
        out.push_str("\x1b[0m\n");
        top = lower.unwrap_or(0);
    }
    out
}

pub fn show(raster: &ColorRaster) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render(raster).as_bytes())?;
    stdout.flush()
}
