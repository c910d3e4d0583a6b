//! Plain-text point input.
//!
//! One point per line as `x,y` or `x y`. `#` starts a comment.
//! Blank lines separate strokes.

use std::path::Path;

use crate::error::{FitError, Result};
use crate::geom::Point;

/// Parse all points in `text` as a single stroke (blank lines ignored).
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    Ok(parse_strokes(text)?.into_iter().flatten().collect())
}

/// Parse `text` into strokes separated by one or more blank lines.
pub fn parse_strokes(text: &str) -> Result<Vec<Vec<Point>>> {
    let mut strokes = Vec::new();
    let mut current = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            // A comment-only line does not end a stroke.
            if raw.trim().is_empty() && !current.is_empty() {
                strokes.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(parse_line(line, lineno + 1)?);
    }
    if !current.is_empty() {
        strokes.push(current);
    }
    Ok(strokes)
}

/// Read and parse strokes from a file.
pub fn read_strokes(path: &Path) -> Result<Vec<Vec<Point>>> {
    let text = std::fs::read_to_string(path)?;
    parse_strokes(&text)
}

fn parse_line(line: &str, lineno: usize) -> Result<Point> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    let [x, y] = fields.as_slice() else {
        return Err(FitError::InvalidInput(format!(
            "line {}: expected two coordinates, got {}",
            lineno,
            fields.len()
        )));
    };
    let coord = |s: &str| {
        s.parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| FitError::InvalidInput(format!("line {}: bad number '{}'", lineno, s)))
    };
    Ok(Point::new(coord(*x)?, coord(*y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_separators_and_comments() {
        let text = "# stroke\n0,0\n1 2   # trailing\n  3.5 , -4\n";
        let pts = parse_points(text).unwrap();
        assert_eq!(
            pts,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(3.5, -4.0)]
        );
    }

    #[test]
    fn blank_lines_split_strokes() {
        let text = "0,0\n1,1\n\n\n2,2\n# note\n3,3\n";
        let strokes = parse_strokes(text).unwrap();
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].len(), 2);
        assert_eq!(strokes[1], vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0)]);
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_points("0,0\n1,x\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: line 2: bad number 'x'");
        let err = parse_points("1,2,3\n").unwrap_err();
        assert!(matches!(err, FitError::InvalidInput(_)));
        assert!(parse_points("nan,1\n").is_err());
    }
}
