//! TUI rendering.
//!
//! Draws the catalog screen (header, search box, category chips, tool list,
//! footer) plus the two overlays: the summary popup and the documentation
//! page. Rendering never mutates filter or selection state.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, Focus};
use super::colors;
use crate::catalog::{CategoryFilter, ToolRecord};
use crate::docs::{self, SectionBody};
use crate::selection::Selection;

/// Render one frame of the whole UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // The docs page replaces the catalog screen entirely
    if let Some(tool) = app.selection.docs_tool() {
        render_docs_page(frame, area, tool, app.docs_scroll(), keybind_line(app));
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // search
            Constraint::Length(1), // chips
            Constraint::Min(3),    // tool list
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_search(frame, chunks[1], app);
    render_chips(frame, chunks[2], app.chip_idx());
    render_tool_list(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if let Some(tool) = app.selection.summary_tool() {
        render_summary_popup(frame, area, tool);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("ADZ", Style::default().fg(colors::BRAND).add_modifier(Modifier::BOLD)),
        Span::styled("Diag", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("  Automotive ECU Software Suite", Style::default().fg(colors::DIM)),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Search;
    let border_style = if focused {
        Style::default().fg(colors::BRAND)
    } else {
        Style::default()
    };
    let search = Paragraph::new(app.search.content())
        .block(Block::default().borders(Borders::ALL).border_style(border_style).title(" Search tools "));
    frame.render_widget(search, area);

    if focused {
        let offset = app.search.content()[..app.search.cursor()].chars().count() as u16;
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn render_chips(frame: &mut Frame, area: Rect, active_idx: usize) {
    let mut spans = vec![Span::raw(" ")];
    for (i, chip) in CategoryFilter::CHIPS.iter().enumerate() {
        let style = if i == active_idx {
            Style::default()
                .fg(Color::White)
                .bg(colors::CHIP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::DIM)
        };
        spans.push(Span::styled(format!(" {} ", chip.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tool_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let cursor = app.cursor();
    let visible = app.visible();
    let total = crate::catalog::all().len();

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, tool)| tool_item(tool, i == cursor))
        .collect();

    let title = format!(" Tools ({}/{}) ", visible.len(), total);
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

/// Format one tool card row.
fn tool_item(tool: &ToolRecord, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(
            format!("[{}] ", tool.category),
            Style::default().fg(colors::for_category(tool.category)),
        ),
        Span::styled(tool.name, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", tool.summary), Style::default().fg(colors::DIM)),
    ]);

    ListItem::new(line).style(style)
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(status.clone(), Style::default().fg(colors::BRAND)))
    } else {
        keybind_line(app)
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn keybind_line(app: &App) -> Line<'static> {
    let binds: &[(&str, &str)] = match (&app.selection, app.focus()) {
        (Selection::Summary(_), _) => &[
            ("enter/o", "open in ADZDiag"),
            ("d", "documentation"),
            ("esc", "close"),
        ],
        (Selection::Docs(_), _) => &[("↑↓", "scroll"), ("o", "open in ADZDiag"), ("b/esc", "back")],
        (Selection::Idle, Focus::Search) => &[("type", "filter"), ("enter/esc", "done")],
        (Selection::Idle, Focus::List) => &[
            ("/", "search"),
            ("tab", "category"),
            ("↑↓", "move"),
            ("enter", "more info"),
            ("esc", "reset"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in binds.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::DIM)));
        }
        spans.push(Span::styled(format!("<{}>", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::raw(format!(" {}", action)));
    }
    Line::from(spans)
}

fn render_summary_popup(frame: &mut Frame, area: Rect, tool: &ToolRecord) {
    let popup = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(Span::styled(
            tool.category.label(),
            Style::default().fg(colors::for_category(tool.category)),
        )),
        Line::from(Span::styled(tool.name, Style::default().add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(tool.detail),
        Line::default(),
    ];
    lines.push(Line::from(vec![
        Span::styled("<enter/o>", Style::default().fg(colors::KEYBIND)),
        Span::raw(" View in ADZDiag  "),
        Span::styled("<d>", Style::default().fg(colors::KEYBIND)),
        Span::raw(" View documentation  "),
        Span::styled("<esc>", Style::default().fg(colors::KEYBIND)),
        Span::raw(" Close"),
    ]));

    let card = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BRAND))
                .title(" More info "),
        );
    frame.render_widget(card, popup);
}

fn render_docs_page(frame: &mut Frame, area: Rect, tool: &ToolRecord, scroll: u16, footer: Line<'static>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let page = Paragraph::new(Text::from(docs_lines(tool)))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Documentation: {} ", tool.name)),
        );
    frame.render_widget(page, chunks[0]);

    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

/// Flatten the documentation sections into styled lines.
fn docs_lines(tool: &ToolRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            tool.category.label(),
            Style::default().fg(colors::for_category(tool.category)),
        )),
        Line::from(Span::styled(
            tool.name,
            Style::default().fg(colors::BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::from(tool.detail),
        Line::default(),
    ];

    for section in docs::sections(tool) {
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default().fg(colors::BRAND).add_modifier(Modifier::BOLD),
        )));
        match section.body {
            SectionBody::Paragraph(text) => lines.push(Line::from(text)),
            SectionBody::Bullets(bullets) => {
                for bullet in bullets {
                    lines.push(Line::from(format!("  • {}", bullet)));
                }
            }
            SectionBody::Steps(steps) => {
                for (i, step) in steps.iter().enumerate() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}. {}", i + 1, step.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(format!("     {}", step.body)));
                }
            }
        }
        lines.push(Line::default());
    }

    lines
}

/// Center a rect of the given percentage size inside `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_tool_item_formats() {
        let tool = catalog::by_id("dtc-editor").unwrap();
        let _item = tool_item(tool, false);
        let _item = tool_item(tool, true);
    }

    #[test]
    fn test_docs_lines_contain_all_sections() {
        let tool = catalog::by_id("vag-dsg-immo-off").unwrap();
        let lines = docs_lines(tool);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect::<Vec<_>>()
            .join("\n");
        for heading in ["Overview", "Key Features", "How It Works", "Supported Platforms", "Best Practices", "Get Started"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("VAG DSG Immo-Off"));
        assert!(text.contains("1. Upload File"));
    }

    #[test]
    fn test_centered_rect_within_bounds() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.width <= 60);
        assert!(inner.height <= 20);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }

    #[test]
    fn test_keybind_line_per_mode() {
        use crate::launch::RecordingLauncher;
        use std::sync::Arc;

        let mut app = App::new("https://app.adzdiag.co.uk", Arc::new(RecordingLauncher::new()));
        let line = keybind_line(&app);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("more info"));

        app.selection.select(catalog::by_id("dtc-editor").unwrap());
        let line = keybind_line(&app);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("open in ADZDiag"));
        assert!(text.contains("documentation"));
    }
}
