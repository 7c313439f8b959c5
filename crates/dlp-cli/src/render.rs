//! Terminal tables for reports, profiles and the validator catalogue.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use dlp_profiles::{ProfileSnapshot, ProfilesSnapshot};
use dlp_report::Report;
use dlp_validate::ValidatorKind;

/// One line describing the outcome of a run.
pub fn summary_line(report: &Report) -> String {
    match report.len() {
        0 => "No problems found.".to_owned(),
        1 => format!("1 problem found for profile '{}'.", report.profile),
        count => format!("{count} problems found for profile '{}'.", report.profile),
    }
}

pub fn report_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Col"),
        header_cell("Header"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
    ]);
    for warning in &report.warnings {
        table.add_row(vec![
            Cell::new(warning.row).set_alignment(CellAlignment::Right),
            Cell::new(warning.column).set_alignment(CellAlignment::Right),
            Cell::new(&warning.header),
            Cell::new(warning.message.replace("<br/>", "\n")).fg(Color::Yellow),
            Cell::new(&warning.value),
        ]);
    }
    table
}

pub fn checks_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Description")]);
    apply_table_style(&mut table);
    for kind in ValidatorKind::ALL {
        table.add_row(vec![
            Cell::new(kind.name()).add_attribute(Attribute::Bold),
            Cell::new(kind.description()),
        ]);
    }
    table
}

pub fn profiles_table(snapshot: &ProfilesSnapshot) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Profile"),
        header_cell("Validations"),
        header_cell("Last Update"),
    ]);
    apply_table_style(&mut table);
    for profile in snapshot.profiles.values() {
        let validations = if profile.validations.is_empty() {
            Cell::new("(all)").fg(Color::DarkGrey)
        } else {
            Cell::new(profile.validations.len()).set_alignment(CellAlignment::Right)
        };
        table.add_row(vec![
            Cell::new(&profile.name).add_attribute(Attribute::Bold),
            validations,
            Cell::new(profile.last_update.to_rfc3339()),
        ]);
    }
    table
}

pub fn profile_table(profile: &ProfileSnapshot) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Validation"), header_cell("Description")]);
    apply_table_style(&mut table);
    for validation in &profile.validations {
        table.add_row(vec![
            Cell::new(&validation.name),
            Cell::new(&validation.description),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
