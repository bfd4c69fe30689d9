use crate::random::RandomSource;
use crate::simulation::Model;
use crate::world::Position;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Largest window half-width a frame will draw
pub const MAX_VIEW: i32 = 500;

/// Observer that draws the model between ticks. Must not mutate it.
pub trait Renderer {
    fn render<R: RandomSource>(&mut self, model: &Model<R>) -> io::Result<()>;
}

/// Terminal frame of a square window centred on the nest.
///
/// `@` nest, digits ant counts (`*` for ten or more), `%` food, and
/// `.` `:` `+` `#` for rising pheromone. Unexplored cells are blank.
#[derive(Clone, Debug)]
pub struct AsciiRenderer {
    radius: i32,
    color: bool,
}

impl AsciiRenderer {
    /// Radius is clamped to `0..=MAX_VIEW`
    pub fn new(radius: i32) -> Self {
        Self {
            radius: radius.clamp(0, MAX_VIEW),
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Build the frame text: a header line, then rows from top (+y) to bottom
    pub fn frame<R: RandomSource>(&self, model: &Model<R>) -> String {
        // radius is within 0..=MAX_VIEW
        let side = 2 * self.radius as usize + 1;
        let mut out = String::with_capacity((side + 1) * side + 64);

        let stats = model.stats();
        let header = format!(
            "tick {} | ants {} | carrying {} | delivered {}",
            stats.ticks,
            model.ants().len(),
            model.carrying_count(),
            stats.deliveries
        );
        out.push_str(&self.paint(header.as_str().bold()));
        out.push('\n');

        for y in (-self.radius..=self.radius).rev() {
            for x in -self.radius..=self.radius {
                out.push_str(&self.cell(model, Position::new(x, y)));
            }
            out.push('\n');
        }
        out
    }

    fn cell<R: RandomSource>(&self, model: &Model<R>, pos: Position) -> String {
        if pos.is_nest() {
            return self.paint("@".blue().bold());
        }
        let ants = model.ant_count_at(pos);
        if ants > 0 {
            let glyph = if ants < 10 {
                ants.to_string()
            } else {
                "*".to_string()
            };
            return if model.at_capacity(pos) {
                self.paint(glyph.as_str().red().bold())
            } else {
                self.paint(glyph.as_str().yellow().bold())
            };
        }
        let Some(loc) = model.location(pos) else {
            return " ".to_string();
        };
        if loc.has_food() {
            return self.paint("%".green());
        }
        let glyph = match loc.pheromone() {
            p if p >= 100.0 => "#",
            p if p >= 10.0 => "+",
            p if p >= 1.0 => ":",
            p if p > 0.05 => ".",
            _ => " ",
        };
        self.paint(glyph.magenta())
    }

    fn paint(&self, s: ColoredString) -> String {
        if self.color {
            s.to_string()
        } else {
            s.clear().to_string()
        }
    }
}

impl Renderer for AsciiRenderer {
    fn render<R: RandomSource>(&mut self, model: &Model<R>) -> io::Result<()> {
        let frame = self.frame(model);
        let mut stdout = io::stdout().lock();
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::random::Constant;

    fn plain(radius: i32) -> AsciiRenderer {
        AsciiRenderer::new(radius).with_color(false)
    }

    #[test]
    fn test_empty_model_frame() {
        let model = Model::with_source(ModelConfig::default(), Constant(0.0)).unwrap();
        let frame = plain(1).frame(&model);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], "tick 0 | ants 0 | carrying 0 | delivered 0");
        assert_eq!(&lines[1..], &["   ", " @ ", "   "]);
    }

    #[test]
    fn test_frame_shows_ants_food_and_trail() {
        let mut model = Model::with_source(ModelConfig::default(), Constant(0.0)).unwrap();
        model.seed_food(1.0).unwrap();
        model.add_ants(1).unwrap();
        // Ant steps onto (1, 0) and picks up its food; (0, 1) keeps its food
        model.advance_tick().unwrap();
        let corner = Position::new(-1, -1);
        model.set_pheromone_at(corner, 150.0);
        model.remove_food_at(corner).unwrap();

        let frame = plain(1).frame(&model);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], "tick 1 | ants 1 | carrying 1 | delivered 0");
        assert_eq!(lines[1], " % ");
        assert_eq!(lines[2], " @1");
        assert_eq!(lines[3], "#  ");
    }

    #[test]
    fn test_huge_radius_is_clamped() {
        let model = Model::with_source(ModelConfig::default(), Constant(0.0)).unwrap();
        let frame = plain(i32::MAX).frame(&model);
        let side = 2 * MAX_VIEW as usize + 1;

        // Header plus one row per cell of the clamped window
        assert_eq!(frame.lines().count(), side + 1);
        assert!(frame.lines().skip(1).all(|row| row.len() == side));
    }

    #[test]
    fn test_negative_radius_is_single_cell() {
        let model = Model::with_source(ModelConfig::default(), Constant(0.0)).unwrap();
        let frame = plain(-4).frame(&model);

        assert_eq!(frame.lines().nth(1), Some("@"));
    }
}
