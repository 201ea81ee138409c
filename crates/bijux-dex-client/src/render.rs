// SPDX-License-Identifier: Apache-2.0

use crate::controller::Action;
use crate::view::{DetailView, GridMode, GridStatus, GridView, RecordCard, StatBar, View};

const BAR_WIDTH: u32 = 30;

#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[must_use]
pub fn render_view(view: &View) -> String {
    match view {
        View::Grid(grid) => render_grid(grid),
        View::Detail(detail) => render_detail(detail),
    }
}

fn render_card(card: &RecordCard) -> String {
    format!(
        "#{:<5} {:<16} {:<18} {:>6} m {:>7} kg\n",
        card.id,
        capitalize(&card.name),
        card.types.join("/"),
        card.height_m,
        card.weight_kg
    )
}

fn retry_hint(action: &Action) -> &'static str {
    match action {
        Action::Search(_) => "type `retry` to search again",
        Action::ApplyTypeFilter(_) => "type `retry` to filter again",
        _ => "type `retry` to reload the list",
    }
}

#[must_use]
pub fn render_grid(grid: &GridView) -> String {
    let mut out = String::new();
    match &grid.status {
        GridStatus::Loading => out.push_str("Loading records...\n"),
        GridStatus::Ready { cards } if cards.is_empty() => out.push_str("No records to show.\n"),
        GridStatus::Ready { cards } => {
            out.extend(cards.iter().map(render_card));
        }
        GridStatus::Failed(panel) => {
            out.push_str(&format!("x {}\n", panel.message));
            out.push_str(&format!("  ({})\n", retry_hint(&panel.retry)));
        }
    }
    match &grid.mode {
        GridMode::Paginated {
            page_number,
            page_size,
            previous_enabled,
        } => {
            let prev = if *previous_enabled { "[prev]" } else { "[----]" };
            out.push_str(&format!(
                "{prev} Page {page_number} [next]  ({page_size} per page)\n"
            ));
        }
        GridMode::Filtered { type_name } => {
            out.push_str(&format!("Type: {} (pagination off)\n", capitalize(type_name)));
        }
    }
    out
}

fn stat_bar(bar: &StatBar) -> String {
    let filled = (bar.fill_percent * BAR_WIDTH / 100) as usize;
    let empty = BAR_WIDTH as usize - filled;
    format!(
        "{:<16} {:>3} |{}{}|",
        capitalize(&bar.name),
        bar.value,
        "#".repeat(filled),
        ".".repeat(empty)
    )
}

#[must_use]
pub fn render_detail(detail: &DetailView) -> String {
    let mut lines = vec![
        format!("{} (#{})", capitalize(&detail.name), detail.id),
        format!("Types:     {}", detail.types.join(", ")),
        format!("Height:    {} m", detail.height_m),
        format!("Weight:    {} kg", detail.weight_kg),
    ];
    if let Some(url) = &detail.image_url {
        lines.push(format!("Image:     {url}"));
    }
    lines.push("Stats:".to_string());
    lines.extend(detail.stats.iter().map(|bar| format!("  {}", stat_bar(bar))));
    lines.push(format!("Abilities: {}", detail.abilities));
    lines.push(format!("Moves:     {}", detail.moves));
    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str("(type `back` to return to the list)\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ErrorPanel;

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize("electric"), "Electric");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn stat_bar_is_fixed_width() {
        let full = stat_bar(&StatBar::new("attack", 200));
        let half = stat_bar(&StatBar::new("speed", 75));
        assert!(full.contains(&"#".repeat(30)));
        assert!(half.contains(&format!("{}{}", "#".repeat(15), ".".repeat(15))));
    }

    #[test]
    fn ready_grid_and_detail_render_line_per_item() {
        let record = crate::fake::stub_record(25, "pikachu");
        let grid = GridView {
            mode: GridMode::Filtered {
                type_name: "electric".to_string(),
            },
            status: GridStatus::Ready {
                cards: vec![RecordCard::from_record(&record)],
            },
        };
        let text = render_grid(&grid);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("#25    Pikachu"));
        assert!(text.ends_with("Type: Electric (pagination off)\n"));

        let detail = render_detail(&DetailView::from_record(&record));
        assert!(detail.starts_with("Pikachu (#25)\n"));
        assert!(detail.contains("Stats:\n  Hp"));
        assert!(detail.ends_with("(type `back` to return to the list)\n"));
    }

    #[test]
    fn failed_grid_shows_message_and_retry_hint() {
        let grid = GridView {
            mode: GridMode::Paginated {
                page_number: 1,
                page_size: 20,
                previous_enabled: false,
            },
            status: GridStatus::Failed(ErrorPanel {
                message: "Record \"notapokemon\" not found".to_string(),
                retry: Action::Search("notapokemon".to_string()),
            }),
        };
        let text = render_grid(&grid);
        assert!(text.contains("not found"));
        assert!(text.contains("retry"));
        assert!(text.contains("[----] Page 1"));
    }
}
