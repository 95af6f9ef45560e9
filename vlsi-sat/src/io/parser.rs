use std::io::BufRead;
use std::io::BufReader;
use std::io::Lines;
use std::io::Read;
use std::str::FromStr;

use super::ParseError;
use crate::model::Instance;
use crate::model::PackingSolution;
use crate::model::Placement;
use crate::model::Rectangle;

/// Parses an instance. The instance is not validated, see [`Instance::validate`].
pub fn parse_instance(source: impl Read) -> Result<Instance, ParseError> {
    let mut lines = NumberedLines::new(source);

    let [plate_width] = lines.expect_values::<i32, 1>("the plate width")?;
    let [num_rectangles] = lines.expect_values::<usize, 1>("the number of rectangles")?;

    let rectangles = (0..num_rectangles)
        .map(|_| {
            let [width, height] = lines.expect_values::<i32, 2>("the dimensions of a rectangle")?;
            Ok(Rectangle::new(width, height))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    lines.expect_end(num_rectangles)?;

    Ok(Instance::new(plate_width, rectangles))
}

/// Parses a packing as written by [`super::write_solution`]. The packing is not verified, see
/// [`PackingSolution::verify`].
pub fn parse_solution(source: impl Read) -> Result<PackingSolution, ParseError> {
    let mut lines = NumberedLines::new(source);

    let [plate_width, height] = lines.expect_values::<i32, 2>("the plate width and height")?;
    let [num_rectangles] = lines.expect_values::<usize, 1>("the number of rectangles")?;

    let placements = (0..num_rectangles)
        .map(|_| {
            let (line, text) = lines.expect_line("the placement of a rectangle")?;
            let tokens = text.split_whitespace().collect::<Vec<_>>();

            let is_rotated = match tokens.len() {
                4 => false,
                5 if tokens[4] == "R" => true,
                5 => {
                    return Err(ParseError::InvalidMarker {
                        line,
                        token: tokens[4].to_owned(),
                    })
                }
                found => {
                    return Err(ParseError::WrongNumberOfValues {
                        line,
                        expected: 4,
                        found,
                    })
                }
            };
            let [width, height, x, y] = parse_tokens::<i32, 4>(line, &tokens[..4])?;

            Ok(Placement {
                x,
                y,
                width,
                height,
                is_rotated,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    lines.expect_end(num_rectangles)?;

    Ok(PackingSolution {
        plate_width,
        height,
        placements,
    })
}

/// The non-blank lines of the input together with their (1-based) line numbers.
struct NumberedLines<Source> {
    lines: Lines<BufReader<Source>>,
    line_number: usize,
}

impl<Source: Read> NumberedLines<Source> {
    fn new(source: Source) -> Self {
        NumberedLines {
            lines: BufReader::new(source).lines(),
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some((self.line_number, line)));
            }
        }

        Ok(None)
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<(usize, String), ParseError> {
        self.next_line()?
            .ok_or(ParseError::UnexpectedEnd { expected })
    }

    fn expect_values<Value: FromStr, const N: usize>(
        &mut self,
        expected: &'static str,
    ) -> Result<[Value; N], ParseError> {
        let (line, text) = self.expect_line(expected)?;
        parse_tokens(line, &text.split_whitespace().collect::<Vec<_>>())
    }

    fn expect_end(&mut self, num_rectangles: usize) -> Result<(), ParseError> {
        match self.next_line()? {
            Some((line, _)) => Err(ParseError::TooManyRectangles {
                line,
                expected: num_rectangles,
            }),
            None => Ok(()),
        }
    }
}

fn parse_tokens<Value: FromStr, const N: usize>(
    line: usize,
    tokens: &[&str],
) -> Result<[Value; N], ParseError> {
    let values = tokens
        .iter()
        .map(|token| {
            token.parse::<Value>().map_err(|_| ParseError::InvalidNumber {
                line,
                token: (*token).to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let found = values.len();
    values.try_into().map_err(|_| ParseError::WrongNumberOfValues {
        line,
        expected: N,
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_instance;
    use super::parse_solution;
    use crate::io::ParseError;
    use crate::model::Rectangle;

    #[test]
    fn instances_are_parsed_in_order() {
        let source = "8\n4\n3 3\n5 3\n3 5\n5 5\n";

        let instance = parse_instance(source.as_bytes()).expect("the instance is well formed");

        assert_eq!(instance.plate_width(), 8);
        assert_eq!(
            instance.rectangles(),
            &[
                Rectangle::new(3, 3),
                Rectangle::new(5, 3),
                Rectangle::new(3, 5),
                Rectangle::new(5, 5)
            ]
        );
    }

    #[test]
    fn blank_lines_and_surrounding_whitespace_are_ignored() {
        let source = "\n 10 \n\n1\n\n  10   1\n\n";

        let instance = parse_instance(source.as_bytes()).expect("the instance is well formed");

        assert_eq!(instance.plate_width(), 10);
        assert_eq!(instance.rectangles(), &[Rectangle::new(10, 1)]);
    }

    #[test]
    fn errors_carry_the_line_number() {
        let source = "4\n2\n1 1\n\n1 x\n";

        let error = parse_instance(source.as_bytes()).expect_err("'x' is not a number");

        assert!(matches!(
            error,
            ParseError::InvalidNumber { line: 5, ref token } if token == "x"
        ));
    }

    #[test]
    fn rectangles_need_two_dimensions() {
        let error = parse_instance("4\n1\n1 2 3\n".as_bytes()).expect_err("one value too many");

        assert!(matches!(
            error,
            ParseError::WrongNumberOfValues {
                line: 3,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn the_rectangle_count_must_match() {
        let missing = parse_instance("4\n2\n1 1\n".as_bytes()).expect_err("a rectangle is missing");
        assert!(matches!(missing, ParseError::UnexpectedEnd { .. }));

        let extra = parse_instance("4\n1\n1 1\n2 2\n".as_bytes()).expect_err("one rectangle extra");
        assert!(matches!(
            extra,
            ParseError::TooManyRectangles {
                line: 4,
                expected: 1
            }
        ));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let error = parse_instance("4\n-1\n".as_bytes()).expect_err("counts are unsigned");

        assert!(matches!(error, ParseError::InvalidNumber { line: 2, .. }));
    }

    #[test]
    fn solutions_are_parsed_with_rotation_markers() {
        let source = "3 4\n2\n1 3 0 0\n3 1 0 3 R\n";

        let solution = parse_solution(source.as_bytes()).expect("the packing is well formed");

        assert_eq!((solution.plate_width, solution.height), (3, 4));
        assert!(!solution.placements[0].is_rotated);
        assert!(solution.placements[1].is_rotated);
        assert_eq!(
            (solution.placements[1].x, solution.placements[1].y),
            (0, 3)
        );
    }

    #[test]
    fn unknown_markers_are_rejected() {
        let error = parse_solution("3 4\n1\n1 3 0 0 X\n".as_bytes()).expect_err("'X' is no marker");

        assert!(matches!(error, ParseError::InvalidMarker { line: 3, .. }));
    }
}
