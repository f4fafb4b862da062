
use regex::Regex;

use crate::dots_and_boxes::prelude::*;

/// A line written as its two end dots, `col,row-col,row`.
///
/// Parsing only checks syntax: whether the dots exist on a particular board, and whether they are adjacent,
/// is for that board to decide when the line is played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineString {
    pub repr: String,
    pub from: Coord,
    pub to: Coord,
}

impl std::str::FromStr for LineString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(r"^\s*(?<from>[0-9]+\s*,\s*[0-9]+)\s*[-\s]\s*(?<to>[0-9]+\s*,\s*[0-9]+)\s*$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse line {s}; expected col,row-col,row"));
        };

        let [from, to] = ["from", "to"].map(|name| {
            matches.name(name).map_or("", |m| m.as_str()).parse::<Coord>()
        });
        Ok(LineString { repr: s.trim().to_owned(), from: from?, to: to? })
    }
}

impl LineString {
    /// Writes the line between two dots.
    pub fn notate(from: &Coord, to: &Coord) -> String {
        format!("{}-{}", from.notate(), to.notate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashed_and_spaced_forms() {
        let dashed = "0,1-1,1".parse::<LineString>().unwrap();
        assert_eq!((dashed.from, dashed.to), (Coord::new(0, 1), Coord::new(1, 1)));

        let spaced = " 2,0 2,1 ".parse::<LineString>().unwrap();
        assert_eq!((spaced.from, spaced.to), (Coord::new(2, 0), Coord::new(2, 1)));
        assert_eq!(spaced.repr, "2,0 2,1");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!("0,1".parse::<LineString>().is_err());
        assert!("a,b-c,d".parse::<LineString>().is_err());
        assert!("0,1-1,1-2,1".parse::<LineString>().is_err());
    }

    #[test]
    fn notates_round_trip() {
        let text = LineString::notate(&Coord::new(3, 4), &Coord::new(3, 5));
        assert_eq!(text, "3,4-3,5");
        assert_eq!(text.parse::<LineString>().unwrap().to, Coord::new(3, 5));
    }
}
