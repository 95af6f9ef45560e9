use std::io::Write;

use crate::model::PackingSolution;

/// Writes `solution` in the packing format described in [`crate::io`].
pub fn write_solution(solution: &PackingSolution, mut writer: impl Write) -> std::io::Result<()> {
    writeln!(writer, "{} {}", solution.plate_width, solution.height)?;
    writeln!(writer, "{}", solution.placements.len())?;

    for placement in &solution.placements {
        write!(
            writer,
            "{} {} {} {}",
            placement.width, placement.height, placement.x, placement.y
        )?;
        if placement.is_rotated {
            write!(writer, " R")?;
        }
        writeln!(writer)?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::write_solution;
    use crate::io::parse_solution;
    use crate::model::PackingSolution;
    use crate::model::Placement;

    fn solution() -> PackingSolution {
        PackingSolution {
            plate_width: 3,
            height: 4,
            placements: vec![
                Placement {
                    x: 0,
                    y: 0,
                    width: 1,
                    height: 3,
                    is_rotated: false,
                },
                Placement {
                    x: 0,
                    y: 3,
                    width: 3,
                    height: 1,
                    is_rotated: true,
                },
            ],
        }
    }

    #[test]
    fn packings_are_written_one_rectangle_per_line() {
        let mut buffer = vec![];

        write_solution(&solution(), &mut buffer).expect("writing to memory succeeds");

        assert_eq!(
            String::from_utf8(buffer).expect("the output is utf-8"),
            "3 4\n2\n1 3 0 0\n3 1 0 3 R\n"
        );
    }

    #[test]
    fn written_packings_parse_back() {
        let mut buffer = vec![];
        write_solution(&solution(), &mut buffer).expect("writing to memory succeeds");

        let parsed = parse_solution(buffer.as_slice()).expect("the output is well formed");

        assert_eq!(parsed, solution());
    }
}
