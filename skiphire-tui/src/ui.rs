use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use skiphire_core::model::DisplayOffer;

use crate::app::App;

/// Closed set of badge looks used on offer cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BadgeVariant {
    Primary,
    Warning,
    Success,
    Info,
    Secondary,
}

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new(format!(
        "Choose your skip size · {} · source {}",
        app.location,
        app.service.source_name()
    ))
    .block(Block::default().borders(Borders::ALL).title("Skiphire"));
    frame.render_widget(header, *header_area);

    match app.selected_offer() {
        Some(selected) => {
            let content_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(6)])
                .split(*content_area);
            let [list_area, panel_area] = content_chunks.as_ref() else {
                return;
            };
            draw_offer_list(frame, app, *list_area);
            draw_selected_panel(frame, selected, *panel_area);
        }
        None => draw_offer_list(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = if app.selection.current_selection().is_some() {
        "↑/↓ move · Enter select · c continue · Esc/x cancel · r reload · q quit"
    } else {
        "↑/↓ move · Enter/Space select skip · r reload · q/Ctrl-C quit"
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else if let Some(msg) = &app.status_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_offer_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = if app.offers.is_empty() {
        vec![ListItem::new("No skips available for this location.")]
    } else {
        app.offers
            .iter()
            .enumerate()
            .map(|(idx, offer)| offer_card(offer, idx == app.cursor, app.selection.is_selected(offer.id())))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Skips by size (↑/↓, Enter)"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !app.offers.is_empty() {
        state.select(Some(app.cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn offer_card(offer: &DisplayOffer, under_cursor: bool, selected: bool) -> ListItem<'static> {
    let prefix = match (under_cursor, selected) {
        (_, true) => "✔ ",
        (true, false) => "> ",
        (false, false) => "  ",
    };

    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.fg(Color::LightBlue);
    }

    let title = Line::from(vec![
        Span::styled(format!("{prefix}{} Yard Skip", offer.size()), title_style),
        Span::raw("  "),
        Span::styled(
            format!("£{}", offer.final_price),
            Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" inc. VAT", Style::default().fg(Color::DarkGray)),
    ]);

    let mut badges = vec![Span::raw("  ")];
    for (label, variant) in offer_badges(offer) {
        badges.push(Span::styled(format!("[{label}]"), badge_style(variant)));
        badges.push(Span::raw(" "));
    }

    ListItem::new(vec![title, Line::from(badges), Line::default()])
}

fn offer_badges(offer: &DisplayOffer) -> Vec<(String, BadgeVariant)> {
    let mut badges = vec![(format!("{} Yards", offer.size()), BadgeVariant::Primary)];
    if offer.requires_permit() {
        badges.push(("Permit Required".to_owned(), BadgeVariant::Warning));
    } else {
        badges.push(("Road Legal".to_owned(), BadgeVariant::Success));
    }
    if offer.offer.allows_heavy_waste {
        badges.push(("Heavy Waste OK".to_owned(), BadgeVariant::Info));
    }
    if offer.has_transport_surcharge() {
        badges.push(("+Transport".to_owned(), BadgeVariant::Warning));
    }
    badges.push((
        format!("{} days hire", offer.offer.hire_period_days),
        BadgeVariant::Secondary,
    ));
    badges
}

fn badge_style(variant: BadgeVariant) -> Style {
    match variant {
        BadgeVariant::Primary => Style::default().fg(Color::Indexed(99)),
        BadgeVariant::Warning => Style::default().fg(Color::Yellow),
        BadgeVariant::Success => Style::default().fg(Color::Green),
        BadgeVariant::Info => Style::default().fg(Color::Blue),
        BadgeVariant::Secondary => Style::default().fg(Color::Gray),
    }
}

fn draw_selected_panel(frame: &mut Frame<'_>, selected: &DisplayOffer, area: Rect) {
    let road_legal = if selected.requires_permit() {
        Span::styled("No", Style::default().fg(Color::Red))
    } else {
        Span::styled("Yes", Style::default().fg(Color::Green))
    };
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Size: ", label),
            Span::raw(format!("{} Yards   ", selected.size())),
            Span::styled("Hire Period: ", label),
            Span::raw(format!("{} days", selected.offer.hire_period_days)),
        ]),
        Line::from(vec![
            Span::styled("Price (inc. VAT): ", label),
            Span::raw(format!("£{}   ", selected.final_price)),
            Span::styled("Road Legal: ", label),
            road_legal,
        ]),
        Line::from(vec![
            Span::styled("[c] Continue with this Skip", Style::default().fg(Color::LightBlue)),
            Span::raw("   "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::Gray)),
        ]),
    ];

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Selected: {} Yard Skip", selected.size())),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, area);
}
