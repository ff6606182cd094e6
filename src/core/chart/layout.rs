//! Deterministic chart layout computation
//!
//! All coordinates are in abstract layout units with the origin at the top
//! left and y increasing downward; the SVG renderer multiplies by a pixel
//! scale. Each year occupies one column, with its courses stacked into two
//! sub-columns of at most [`ROWS_PER_SUB_COLUMN`] boxes each.

use crate::core::models::{Category, Program};

/// Width of one year column (layout units)
pub const COLUMN_WIDTH: f32 = 7.0;
/// Width of one course box; two sub-columns plus gaps fit in a column
pub const BOX_WIDTH: f32 = COLUMN_WIDTH / 2.2;
/// Height of one course box
pub const BOX_HEIGHT: f32 = 0.8;
/// Uniform spacing between boxes, both vertically and between sub-columns
pub const GAP: f32 = (COLUMN_WIDTH - BOX_WIDTH) / 9.0;
/// Maximum boxes per sub-column before overflowing into the second one
pub const ROWS_PER_SUB_COLUMN: usize = 5;
/// Character width used when wrapping course labels
pub const WRAP_WIDTH: usize = 15;

/// Inset applied to each box so adjacent boxes never touch
const BOX_MARGIN: f32 = 0.1;
/// Vertical band reserved for the chart title
const TITLE_BAND: f32 = 0.9;
/// Vertical band reserved for year headers and their rule
const HEADER_BAND: f32 = 1.0;
/// Vertical band reserved for the legend
const LEGEND_BAND: f32 = 1.4;
/// Horizontal space allotted to one legend entry
const LEGEND_ENTRY_WIDTH: f32 = 4.0;

/// A positioned piece of text (x is the horizontal center)
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Horizontal center
    pub x: f32,
    /// Vertical center
    pub y: f32,
    /// Text content
    pub text: String,
}

/// A positioned course box with its wrapped label
#[derive(Debug, Clone, PartialEq)]
pub struct CourseBox {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
    /// Wrapped label lines, rendered centered
    pub lines: Vec<String>,
    /// Category deciding the fill color
    pub category: Category,
    /// Index of the year column this box belongs to
    pub year_index: usize,
}

/// One legend swatch with its category label
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Left edge of the swatch
    pub x: f32,
    /// Vertical center of the entry
    pub y: f32,
    /// Category shown by this entry
    pub category: Category,
}

/// Fully computed chart layout, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Canvas width (layout units)
    pub width: f32,
    /// Canvas height (layout units)
    pub height: f32,
    /// Top edge of the year grid (below the title band)
    pub grid_top: f32,
    /// Bottom edge of the year grid
    pub grid_bottom: f32,
    /// Y position of the rule under the year headers
    pub header_rule_y: f32,
    /// Chart title, centered over the canvas
    pub title: TextSpan,
    /// Year header labels, centered over their columns
    pub year_headers: Vec<TextSpan>,
    /// X positions of vertical separators at column right edges
    pub separators: Vec<f32>,
    /// All course boxes, in plan order
    pub boxes: Vec<CourseBox>,
    /// Legend heading
    pub legend_title: TextSpan,
    /// Legend entries in fixed category order
    pub legend: Vec<LegendEntry>,
}

impl ChartLayout {
    /// Boxes belonging to one year column, in plan order
    pub fn boxes_for_year(&self, year_index: usize) -> impl Iterator<Item = &CourseBox> {
        self.boxes.iter().filter(move |b| b.year_index == year_index)
    }
}

/// Greedy word-wrap at a fixed character width
///
/// Words longer than `width` get a line of their own; whitespace (including
/// newlines) collapses to single spaces, matching how the course labels are
/// composed.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Compute the full chart layout for a program
///
/// The computation is pure and deterministic: the same program always yields
/// the same layout. Years run left to right; within a year, courses fill the
/// first sub-column top to bottom (at most [`ROWS_PER_SUB_COLUMN`]), then
/// continue at the top of the second sub-column. Years with more than twice
/// [`ROWS_PER_SUB_COLUMN`] courses overflow below the grid silently.
#[must_use]
pub fn layout_program(program: &Program) -> ChartLayout {
    let pitch = BOX_HEIGHT + GAP;
    let width = (program.years.len() as f32 * COLUMN_WIDTH).max(COLUMN_WIDTH);

    let grid_top = TITLE_BAND;
    let rows_top = grid_top + HEADER_BAND;
    let grid_bottom = rows_top + ROWS_PER_SUB_COLUMN as f32 * pitch;
    let height = grid_bottom + LEGEND_BAND;

    let title = TextSpan {
        x: width / 2.0,
        y: grid_top / 2.0,
        text: format!("Suggested Academic Plan for {}", program.name),
    };

    let mut year_headers = Vec::with_capacity(program.years.len());
    let mut separators = Vec::with_capacity(program.years.len());
    let mut boxes = Vec::with_capacity(program.course_count());

    for (year_index, year) in program.years.iter().enumerate() {
        let col_left = year_index as f32 * COLUMN_WIDTH;

        year_headers.push(TextSpan {
            x: col_left + COLUMN_WIDTH / 2.0,
            y: grid_top + 0.35,
            text: year.label.clone(),
        });
        separators.push(col_left + COLUMN_WIDTH);

        for (course_index, course) in year.courses.iter().enumerate() {
            // First five courses stack in sub-column one; the rest restart
            // at the top of sub-column two.
            let (sub_column, row) = if course_index < ROWS_PER_SUB_COLUMN {
                (0.0, course_index)
            } else {
                (1.0, course_index - ROWS_PER_SUB_COLUMN)
            };

            let label = format!("{} {} credits", course.name, course.credits_label());
            boxes.push(CourseBox {
                x: col_left + sub_column * (BOX_WIDTH + GAP) + BOX_MARGIN,
                y: rows_top + row as f32 * pitch + BOX_MARGIN,
                width: BOX_WIDTH - 2.0 * BOX_MARGIN,
                height: BOX_HEIGHT - 2.0 * BOX_MARGIN,
                lines: wrap_text(&label, WRAP_WIDTH),
                category: course.category.clone(),
                year_index,
            });
        }
    }

    let legend_title = TextSpan {
        x: width / 2.0,
        y: grid_bottom + 0.4,
        text: "Course Type".to_string(),
    };

    let legend_total = Category::KNOWN.len() as f32 * LEGEND_ENTRY_WIDTH;
    let legend_start = ((width - legend_total) / 2.0).max(0.2);
    let legend_y = grid_bottom + 0.95;
    let legend = Category::KNOWN
        .iter()
        .enumerate()
        .map(|(i, category)| LegendEntry {
            x: legend_start + i as f32 * LEGEND_ENTRY_WIDTH,
            y: legend_y,
            category: category.clone(),
        })
        .collect();

    ChartLayout {
        width,
        height,
        grid_top,
        grid_bottom,
        header_rule_y: grid_top + 0.7,
        title,
        year_headers,
        separators,
        boxes,
        legend_title,
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Program, Year};

    fn year_with_courses(label: &str, count: usize) -> Year {
        let mut year = Year::new(label.to_string());
        for i in 0..count {
            year.add_course(Course::new(format!("Course {i}"), 3.0, Category::Core));
        }
        year
    }

    fn program_with_year_sizes(sizes: &[usize]) -> Program {
        let mut program = Program::new("Test Program".to_string());
        for (i, &count) in sizes.iter().enumerate() {
            program.add_year(year_with_courses(&format!("Year {i}"), count));
        }
        program
    }

    #[test]
    fn test_box_count_equals_course_count() {
        let program = program_with_year_sizes(&[6, 8, 5, 7]);
        let layout = layout_program(&program);
        assert_eq!(layout.boxes.len(), program.course_count());
    }

    #[test]
    fn test_seven_courses_split_five_two() {
        let program = program_with_year_sizes(&[7]);
        let layout = layout_program(&program);

        let boxes: Vec<_> = layout.boxes_for_year(0).collect();
        let first_column_x = boxes[0].x;
        let in_first: Vec<_> = boxes
            .iter()
            .filter(|b| (b.x - first_column_x).abs() < f32::EPSILON)
            .collect();
        assert_eq!(in_first.len(), 5);
        assert_eq!(boxes.len() - in_first.len(), 2);
    }

    #[test]
    fn test_boxes_descend_in_list_order() {
        let program = program_with_year_sizes(&[5]);
        let layout = layout_program(&program);

        let ys: Vec<f32> = layout.boxes.iter().map(|b| b.y).collect();
        for pair in ys.windows(2) {
            assert!(pair[0] < pair[1], "boxes must stack top to bottom");
        }
    }

    #[test]
    fn test_second_sub_column_restarts_at_top() {
        let program = program_with_year_sizes(&[6]);
        let layout = layout_program(&program);

        let sixth = &layout.boxes[5];
        let first = &layout.boxes[0];
        assert!((sixth.y - first.y).abs() < f32::EPSILON);
        assert!(sixth.x > first.x);
    }

    #[test]
    fn test_years_advance_left_to_right() {
        let program = program_with_year_sizes(&[1, 1, 1]);
        let layout = layout_program(&program);

        assert!(layout.boxes[0].x < layout.boxes[1].x);
        assert!(layout.boxes[1].x < layout.boxes[2].x);
        assert_eq!(layout.year_headers.len(), 3);
        assert_eq!(layout.separators.len(), 3);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let program = program_with_year_sizes(&[4, 9]);
        assert_eq!(layout_program(&program), layout_program(&program));
    }

    #[test]
    fn test_five_rows_fit_inside_grid() {
        let program = program_with_year_sizes(&[10]);
        let layout = layout_program(&program);

        for b in &layout.boxes {
            assert!(b.y + b.height <= layout.grid_bottom + f32::EPSILON);
        }
    }

    #[test]
    fn test_legend_has_all_known_categories() {
        let layout = layout_program(&program_with_year_sizes(&[1]));
        assert_eq!(layout.legend.len(), 4);
        assert_eq!(layout.legend[0].category, Category::Core);
        assert_eq!(layout.legend[3].category, Category::Elective);
    }

    #[test]
    fn test_title_includes_program_name() {
        let layout = layout_program(&program_with_year_sizes(&[1]));
        assert_eq!(
            layout.title.text,
            "Suggested Academic Plan for Test Program"
        );
    }

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("Intro to Information Technology 3 credits", 15);
        assert_eq!(
            lines,
            vec!["Intro to", "Information", "Technology 3", "credits"]
        );
    }

    #[test]
    fn test_wrap_text_long_word_gets_own_line() {
        let lines = wrap_text("a Bioinformatics-Capstone b", 15);
        assert_eq!(lines, vec!["a", "Bioinformatics-Capstone", "b"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 15).is_empty());
    }
}
