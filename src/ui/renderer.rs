use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Row, Table, Tabs, Wrap,
    },
    Frame,
};

use crate::{
    app::{App, Tab},
    helix::{PairTag, HELIX_RADIUS},
    lesson::{
        content::{
            flow_line, MoleculeCard, COMPARISON_HEADER, COMPARISON_ROWS, DNA_CARD, RNA_CARD,
            TRANSCRIPTION_RULES,
        },
        quiz::QUESTIONS,
        Feedback, RoundOutcome,
    },
    sequence::{complementary_strand, count_complete_codons, gc_content, partial_codon},
    ui::{amino_acid_chain, colored_strand, hex_to_color, project_helix, BACKBONE_COLOR},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_tabs(f, app, chunks[0]);
    match app.tab {
        Tab::Overview => render_overview(f, chunks[1]),
        Tab::Lab => render_lab(f, app, chunks[1]),
        Tab::Helix => render_helix(f, app, chunks[1]),
        Tab::Quiz => render_quiz(f, app, chunks[1]),
        Tab::Game => render_game(f, app, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("F{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().title("The Blueprint of Life: DNA vs. RNA").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn render_overview(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),
            Constraint::Length(3),
            Constraint::Length(9),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_card(f, &DNA_CARD, Color::Blue, cards[0]);
    render_card(f, &RNA_CARD, Color::Red, cards[1]);

    let flow_widget = Paragraph::new(vec![Line::from(Span::styled(
        flow_line(),
        Style::default().fg(Color::Cyan),
    ))])
    .block(Block::default().title("How Information Flows (The Central Dogma)").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    f.render_widget(flow_widget, rows[1]);

    let table_rows = COMPARISON_ROWS.iter().map(|row| Row::new(row.to_vec()));
    let table = Table::new(
        table_rows,
        [Constraint::Percentage(30), Constraint::Percentage(35), Constraint::Percentage(35)],
    )
    .header(Row::new(COMPARISON_HEADER.to_vec()).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title("Quick Comparison").borders(Borders::ALL));
    f.render_widget(table, rows[2]);
}

fn render_card(f: &mut Frame, card: &MoleculeCard, accent: Color, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(card.full_name, Style::default().fg(accent).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(card.role, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))),
        Line::from(card.description),
        Line::from(""),
        Line::from(vec![
            Span::raw("Structure: "),
            Span::styled(card.structure, Style::default().fg(accent)),
        ]),
        Line::from(card.structure_hint),
        Line::from(""),
        Line::from("Bases:"),
    ];
    for base in card.bases {
        lines.push(Line::from(format!("  - {base}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(card.memory_hint, Style::default().fg(Color::Yellow))));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(card.name)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_lab(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    let mut rules = vec![Line::from(
        "You are inside the nucleus! Transcribe the DNA strand into RNA so the cell can build a protein.",
    )];
    for rule in TRANSCRIPTION_RULES {
        rules.push(Line::from(Span::styled(format!("  {rule}"), Style::default().fg(Color::Cyan))));
    }
    let rules_widget = Paragraph::new(rules)
        .block(Block::default().title("Lab Activity: Transcribe DNA to RNA").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(rules_widget, chunks[0]);

    let mut input_spans = vec![Span::raw("DNA: ")];
    input_spans.push(Span::styled(app.lab_input.clone(), Style::default().fg(Color::Green)));
    input_spans.push(Span::styled("_", Style::default().fg(Color::DarkGray)));
    let input_widget = Paragraph::new(Line::from(input_spans))
        .block(Block::default().title("Enter a DNA Sequence (e.g., TACGCG)").borders(Borders::ALL));
    f.render_widget(input_widget, chunks[1]);

    let mut partner_spans = vec![Span::raw("Partner DNA: ")];
    partner_spans.extend(colored_strand(&complementary_strand(&app.lab_input)));
    let partner_widget = Paragraph::new(Line::from(partner_spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(partner_widget, chunks[2]);

    let rna_line = if app.transcription.is_valid {
        let mut spans = vec![Span::raw("RNA:         ")];
        spans.extend(colored_strand(&app.transcription.rna));
        Line::from(spans)
    } else {
        Line::from(Span::styled(
            "Invalid DNA character detected! Use only A, T, C, or G.",
            Style::default().fg(Color::Yellow),
        ))
    };
    let rna_widget = Paragraph::new(rna_line).block(Block::default().borders(Borders::ALL));
    f.render_widget(rna_widget, chunks[3]);

    let mut protein_lines = vec![amino_acid_chain(&app.amino_acids)];
    if app.transcription.is_valid {
        let waiting = partial_codon(&app.transcription.rna);
        protein_lines.push(Line::from(""));
        protein_lines.push(Line::from(format!(
            "Codons: {}   GC content: {:.1}%",
            count_complete_codons(&app.transcription.rna),
            gc_content(&app.lab_input)
        )));
        if !waiting.is_empty() {
            protein_lines.push(Line::from(Span::styled(
                format!("Waiting for more bases: {waiting}{}", "_".repeat(3 - waiting.len())),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    let protein_widget = Paragraph::new(protein_lines)
        .block(Block::default().title("Translation (In Ribosome)").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(protein_widget, chunks[4]);
}

fn render_helix(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    if app.helix_geometry.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "The DNA strand is empty! Press a, t, g or c to start building your helix.",
            Style::default().fg(Color::Cyan),
        )))
        .block(Block::default().title("Build Your Own 3D DNA Helix").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        f.render_widget(empty, chunks[0]);
    } else {
        let projected = project_helix(&app.helix_geometry, app.helix_yaw);
        let height = app.helix.len() as f64;
        let limit = HELIX_RADIUS + 1.0;
        let canvas = Canvas::default()
            .block(Block::default().title("Build Your Own 3D DNA Helix").borders(Borders::ALL))
            .marker(Marker::Braille)
            .x_bounds([-limit, limit])
            .y_bounds([-1.0, height + 1.0])
            .paint(move |ctx| {
                for &(x1, y1, x2, y2) in &projected.backbones {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, BACKBONE_COLOR));
                }
                for &((x1, y1, x2, y2), color) in &projected.rungs {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, hex_to_color(color)));
                }
            });
        f.render_widget(canvas, chunks[0]);
    }

    let mut lines = vec![Line::from("Add base pairs and watch the helix twist as it grows!"), Line::from("")];
    for (key, tag) in ['a', 't', 'g', 'c'].into_iter().zip(PairTag::ALL) {
        lines.push(Line::from(vec![
            Span::raw(format!("  {key}  Add ")),
            Span::styled(tag.as_str(), Style::default().fg(hex_to_color(tag.color()))),
        ]));
    }
    lines.push(Line::from("  u  Undo"));
    lines.push(Line::from("  r  Reset"));
    lines.push(Line::from("  ←/→ Rotate"));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Current Sequence Length: {} Base Pairs", app.helix.len())));
    if !app.helix.is_empty() {
        lines.push(Line::from(vec![Span::raw("Strand: ")]));
        lines.push(Line::from(colored_strand(&app.helix.strand_letters())));
    }

    let controls = Paragraph::new(lines)
        .block(Block::default().title("Controls").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(controls, chunks[1]);
}

fn render_quiz(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for (index, question) in QUESTIONS.iter().enumerate() {
        let focused = index == app.quiz.current;
        let prompt_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("Question {}: {}", index + 1, question.prompt),
            prompt_style,
        )));

        if focused {
            for (option_index, option) in question.options.iter().enumerate() {
                let marker = if option_index == app.quiz.highlighted[index] { "(•)" } else { "( )" };
                lines.push(Line::from(format!("  {marker} {option}")));
            }
        }

        if let Some(text) = app.quiz.feedback_text(index) {
            let color = match app.quiz.feedback[index] {
                Some(Feedback::Correct) => Color::Green,
                _ => Color::Red,
            };
            lines.push(Line::from(Span::styled(format!("  {text}"), Style::default().fg(color))));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "↑/↓ choose an answer, Enter to check, ←/→ switch question",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().title("Knowledge Check").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines = vec![
        Line::from("A DNA base will appear. Type the RNA base that pairs with it as fast as you can!"),
        Line::from(""),
    ];

    match game.prompt {
        Some(base) => lines.push(Line::from(vec![
            Span::raw("DNA base: "),
            Span::styled(base.to_string(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(Color::Cyan),
        ))),
    }

    match game.last_outcome {
        Some(RoundOutcome::Hit { reaction }) => lines.push(Line::from(Span::styled(
            format!("Match! {} ms", reaction.as_millis()),
            Style::default().fg(Color::Green),
        ))),
        Some(RoundOutcome::Miss { expected, guessed }) => lines.push(Line::from(Span::styled(
            format!("{guessed} doesn't pair there, the answer was {expected}"),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from("")),
    }

    let millis = |value: Option<std::time::Duration>| {
        value.map_or("-".to_string(), |d| format!("{} ms", d.as_millis()))
    };
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Score: {}/{}", game.score, game.rounds)));
    lines.push(Line::from(format!("Streak: {} (best {})", game.streak, game.best_streak)));
    lines.push(Line::from(format!("Last reaction: {}", millis(game.last_reaction))));
    lines.push(Line::from(format!("Best reaction: {}", millis(game.best_reaction))));

    let widget = Paragraph::new(lines)
        .block(Block::default().title("Match Game").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.tab {
        Tab::Lab => "Type DNA bases, Backspace to delete, Del to clear. Tab to switch, Esc to quit.",
        Tab::Game => "Type the partner base, Enter for a new base, Backspace to reset. Esc to quit.",
        _ => "Tab/F1-F5 to switch sections, q or Esc to quit.",
    };

    let mut spans = Vec::new();
    if !app.status.is_empty() {
        spans.push(Span::styled(app.status.clone(), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(help, Style::default().fg(Color::White)));

    let status_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
