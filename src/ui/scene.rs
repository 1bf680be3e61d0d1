//! Rendering for the game screen: play field, status bar, info panel,
//! and the start/game-over overlays.
//!
//! The play field is a Braille canvas in world-pixel coordinates, so the
//! drawing code speaks the same units as the simulation. The canvas has
//! y pointing up while the world has y pointing down; every draw flips
//! through `field.height - y`.

use crate::constants::{BIRD_WIDTH, BIRD_X, FLAP_ANIM_SECONDS, PIPE_WIDTH};
use crate::game::{Bird, Field, Phase, Pipe, Session};
use crate::ui::common::{create_game_layout, render_overlay, render_status_bar};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Paragraph,
    },
    Frame,
};

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, session: &Session) {
    let layout = create_game_layout(frame, area, " Skyward ", Color::Cyan, 22);

    render_play_field(frame, layout.play_area, session);
    render_status(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);

    match session.phase() {
        Phase::Idle => render_start_overlay(frame, layout.play_area, session),
        Phase::Ended => render_game_over_overlay(frame, layout.play_area, session),
        Phase::Running => {}
    }
}

/// Draw pipes and the bird onto a canvas spanning the world field.
fn render_play_field(frame: &mut Frame, area: Rect, session: &Session) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let field = *session.field();
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, field.width])
        .y_bounds([0.0, field.height])
        .paint(|ctx| {
            for pipe in session.pipes() {
                draw_pipe(ctx, pipe, &field);
            }
            draw_bird(ctx, session.bird(), session.time_since_flap(), &field);
        });
    frame.render_widget(canvas, area);
}

/// Fill a world-coordinate rectangle with closely spaced vertical lines
/// (the canvas shapes are outlines only).
fn fill_rect(ctx: &mut Context, x: f64, bottom: f64, width: f64, height: f64, color: Color) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let mut sx = x;
    while sx <= x + width {
        ctx.draw(&CanvasLine {
            x1: sx,
            y1: bottom,
            x2: sx,
            y2: bottom + height,
            color,
        });
        sx += 4.0;
    }
}

/// Both segments of a pipe as filled rectangles.
fn draw_pipe(ctx: &mut Context, pipe: &Pipe, field: &Field) {
    // Top segment hangs from the ceiling
    fill_rect(
        ctx,
        pipe.x,
        field.height - pipe.top_height,
        PIPE_WIDTH,
        pipe.top_height,
        Color::Green,
    );
    // Bottom segment rises from the floor
    fill_rect(
        ctx,
        pipe.x,
        0.0,
        PIPE_WIDTH,
        field.height - pipe.bottom_y,
        Color::Green,
    );
}

/// The bird: a circular body with eye, beak, and wing, all rotated by the
/// smoothed tilt angle. Purely cosmetic; collision uses the bounding box.
fn draw_bird(ctx: &mut Context, bird: &Bird, since_flap: Option<f64>, field: &Field) {
    let cx = BIRD_X;
    let cy = field.height - bird.y;

    // Rotate a bird-local offset (y down, like the world) by `degrees`
    // and flip into canvas coordinates.
    let local = |dx: f64, dy: f64, degrees: f64| -> (f64, f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        (cx + dx * cos - dy * sin, cy - (dx * sin + dy * cos))
    };

    ctx.draw(&Circle {
        x: cx,
        y: cy,
        radius: BIRD_WIDTH / 2.0,
        color: Color::Yellow,
    });

    let (eye_x, eye_y) = local(8.0, -6.0, bird.tilt);
    ctx.draw(&Circle {
        x: eye_x,
        y: eye_y,
        radius: 4.0,
        color: Color::White,
    });

    // Beak: a small triangle off the body's leading edge
    let tip = local(16.0, 0.0, bird.tilt);
    let top = local(24.0, -6.0, bird.tilt);
    let bottom = local(24.0, 6.0, bird.tilt);
    for (a, b) in [(tip, top), (top, bottom), (bottom, tip)] {
        ctx.draw(&CanvasLine {
            x1: a.0,
            y1: a.1,
            x2: b.0,
            y2: b.1,
            color: Color::LightRed,
        });
    }

    // Wing: resting angle -10°, swinging to -45° across the flap window
    let wing_tilt = match since_flap {
        Some(t) if t < FLAP_ANIM_SECONDS => -45.0 + 35.0 * (1.0 - t / FLAP_ANIM_SECONDS),
        _ => -10.0,
    };
    let (wing_x, wing_y) = local(-4.0, 6.0, bird.tilt + wing_tilt);
    ctx.draw(&Circle {
        x: wing_x,
        y: wing_y,
        radius: BIRD_WIDTH * 0.25,
        color: Color::LightRed,
    });
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    match session.phase() {
        Phase::Idle => render_status_bar(
            frame,
            area,
            "Press Space to take off!",
            Color::Yellow,
            &[("[Space]", "Flap"), ("[1-3]", "Level"), ("[Q]", "Quit")],
        ),
        Phase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score()),
            Color::Green,
            &[("[Space]", "Flap"), ("[Q]", "Quit")],
        ),
        Phase::Ended => render_status_bar(
            frame,
            area,
            &format!("Crashed at {}", session.score()),
            Color::Red,
            &[("[Space]", "Restart"), ("[1-3]", "Level"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    use ratatui::widgets::{Block, Borders};

    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", session.level().name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}px", session.level().gap() as u32),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}px/f", session.level().scroll_speed() as u32),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_start_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let mut lines = vec![
        Line::from(Span::styled(
            "S K Y W A R D",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Flap through the gaps. Touch nothing.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    for (i, level) in crate::game::Level::ALL.iter().enumerate() {
        let selected = *level == session.level();
        let marker = if selected { "▸" } else { " " };
        let style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}  {}", marker, i + 1, level.name()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Space] start",
        Style::default().fg(Color::DarkGray),
    )));

    render_overlay(frame, area, Color::Yellow, lines);
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let final_score = session.final_score().unwrap_or(0);
    let lines = vec![
        Line::from(Span::styled(
            "CRASH!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Final score: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", final_score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Level: {}", session.level_label()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] fly again   [1-3] level",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_overlay(frame, area, Color::Red, lines);
}
