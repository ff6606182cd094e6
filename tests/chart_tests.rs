//! Integration tests for the load → layout → render pipeline

use sap_chart::core::chart::{layout_program, render_svg, Theme};
use sap_chart::core::loader::{load_plan_json, parse_plan_json};
use sap_chart::core::models::Category;
use std::fs;
use tempfile::TempDir;

/// A four-year plan with a 7-course year and one unknown category
const PLAN_JSON: &str = r#"{
    "Program of Study": "Information Technology",
    "SAP": [
        { "1st year": [
            { "course": "Intro to IT", "credits": 3, "type": "Core" },
            { "course": "Composition", "credits": 3, "type": "Gen Ed" },
            { "course": "College Algebra", "credits": 3, "type": "Major & Gen Ed" },
            { "course": "First Year Seminar", "credits": 1, "type": "Core" },
            { "course": "Public Speaking", "credits": 3, "type": "Gen Ed" },
            { "course": "Programming I", "credits": 4, "type": "Core" },
            { "course": "Wellness", "credits": 1, "type": "Elective" }
        ] },
        { "2nd year": [
            { "course": "Networking", "credits": 4, "type": "Core" },
            { "course": "Statistics", "credits": 3, "type": "Major & Gen Ed" },
            { "course": "Internship Prep", "credits": 1, "type": "Experiential" }
        ] },
        { "3rd year": [
            { "course": "Databases", "credits": 3, "type": "Core" }
        ] },
        { "4th year": [
            { "course": "Capstone", "credits": 3, "type": "Core" },
            { "course": "Free Elective", "credits": 3, "type": "Elective" }
        ] }
    ]
}"#;

#[test]
fn test_load_plan_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let plan_path = temp_dir.path().join("IT-SAP.json");
    fs::write(&plan_path, PLAN_JSON).expect("Failed to write plan file");

    let program = load_plan_json(&plan_path).expect("Plan file should load");

    assert_eq!(program.name, "Information Technology");
    assert_eq!(program.years.len(), 4);
    assert_eq!(program.course_count(), 13);
}

#[test]
fn test_box_count_matches_course_count() {
    let program = parse_plan_json(PLAN_JSON).expect("plan should parse");
    let layout = layout_program(&program);

    assert_eq!(layout.boxes.len(), 13);
}

#[test]
fn test_seven_course_year_splits_five_two() {
    let program = parse_plan_json(PLAN_JSON).expect("plan should parse");
    let layout = layout_program(&program);

    let first_year: Vec<_> = layout.boxes_for_year(0).collect();
    assert_eq!(first_year.len(), 7);

    let sub_column_one_x = first_year[0].x;
    let in_first = first_year
        .iter()
        .filter(|b| (b.x - sub_column_one_x).abs() < f32::EPSILON)
        .count();
    assert_eq!(in_first, 5);
    assert_eq!(first_year.len() - in_first, 2);

    // Sixth course restarts at the top of sub-column two
    assert!((first_year[5].y - first_year[0].y).abs() < f32::EPSILON);
}

#[test]
fn test_courses_keep_plan_order_top_to_bottom() {
    let program = parse_plan_json(PLAN_JSON).expect("plan should parse");
    let layout = layout_program(&program);

    let first_year: Vec<_> = layout.boxes_for_year(0).collect();
    for pair in first_year[..5].windows(2) {
        assert!(pair[0].y < pair[1].y, "sub-column one must stack downward");
    }
    assert!(first_year[5].y < first_year[6].y);
}

#[test]
fn test_rendered_svg_has_expected_content() {
    let program = parse_plan_json(PLAN_JSON).expect("plan should parse");
    let layout = layout_program(&program);
    let svg = render_svg(&layout, &Theme::default(), 40.0);

    assert!(svg.contains("Suggested Academic Plan for Information Technology"));
    assert!(svg.contains("1st year"));
    assert!(svg.contains("4th year"));
    assert!(svg.contains("Course Type"));

    // One box per course plus background plus four legend swatches
    assert_eq!(svg.matches("<rect").count(), 1 + 13 + 4);
}

#[test]
fn test_unknown_category_renders_with_fallback_color() {
    let program = parse_plan_json(PLAN_JSON).expect("plan should parse");
    assert_eq!(
        program.years[1].courses[2].category,
        Category::Other("Experiential".to_string())
    );

    let layout = layout_program(&program);
    let svg = render_svg(&layout, &Theme::default(), 40.0);
    assert!(svg.contains("#808080"));
}

#[test]
fn test_rendering_is_deterministic() {
    let program = parse_plan_json(PLAN_JSON).expect("plan should parse");
    let theme = Theme::default();

    let first = render_svg(&layout_program(&program), &theme, 40.0);
    let second = render_svg(&layout_program(&program), &theme, 40.0);
    assert_eq!(first, second);
}

#[test]
fn test_svg_written_to_disk_round_trips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = temp_dir.path().join("chart.svg");

    let program = parse_plan_json(PLAN_JSON).expect("plan should parse");
    let svg = render_svg(&layout_program(&program), &Theme::default(), 40.0);
    fs::write(&out_path, &svg).expect("Failed to write SVG");

    let read_back = fs::read_to_string(&out_path).expect("Failed to read SVG");
    assert_eq!(read_back, svg);
}
