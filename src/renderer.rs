use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::config::GridSize;
use crate::game::GameState;
use crate::snake::Cell;

const GLYPH_SNAKE_HEAD: &str = "█";
const GLYPH_SNAKE_BODY: &str = "▓";
const GLYPH_FOOD: &str = "●";

/// Renders the full game frame from immutable state.
///
/// This is the whole presentation layer: one styled terminal cell per snake
/// segment, one for the food, and a score line under the bordered play area.
/// It never mutates game state, so repeated calls draw identical frames.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
    render_score(frame, score_area, state);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.grid(), state.food.cell) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
        }
    }
}

fn render_score(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let line = Line::from(vec![
        Span::styled(" score ", Style::new().fg(Color::DarkGray)),
        Span::styled(
            state.score.to_string(),
            Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Maps a logical cell to a terminal coordinate inside `inner`, or `None`
/// when the cell falls outside the grid or the visible area.
fn logical_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
