//! View Renderer
//!
//! Pure projection of [`App`] state into a frame: order table, summary
//! counters, add-order form with color pickers, empty-state panel, loading
//! overlay, and the delete-confirmation modal. Nothing here mutates state.

use crate::app::{App, Focus};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap,
};
use shared::color;
use tui_input::Input;

const ACCENT: Color = Color::Rgb(0xf4, 0x3f, 0x5e);
const PAID: Color = Color::Rgb(0x10, 0xb9, 0x81);
const UNPAID: Color = Color::Rgb(0xef, 0x44, 0x44);
const DIM: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_summary(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(40)])
        .split(chunks[1]);

    if app.board.is_empty() {
        draw_empty_state(frame, app, body[0]);
    } else {
        draw_table(frame, app, body[0]);
    }
    draw_form(frame, app, body[1]);
    draw_hints(frame, app, chunks[2]);

    if let Some(id) = &app.pending_delete {
        draw_delete_modal(frame, app, id);
    }
    if app.loading {
        draw_loading_overlay(frame);
    }
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " 🌸 ร้านดอกไม้ ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("ออเดอร์: "),
        Span::styled(
            app.board.len().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ยอดรวม: "),
        Span::styled(
            format_baht(app.board.total_revenue()),
            Style::default().fg(PAID).add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(["คิว", "ลูกค้า", "จำนวน", "สี", "ราคา", "จ่ายแล้ว"])
        .style(Style::default().fg(DIM).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .board
        .sorted_by_queue()
        .into_iter()
        .map(|order| {
            let price_color = if order.is_paid { PAID } else { UNPAID };
            let customer = customer_cell(&order.customer_name, order.notes.as_deref());
            let colors = colors_cell(&order.flower_colors, &order.bouquet_colors);
            let paid_mark = if order.is_paid {
                Span::styled("✓", Style::default().fg(PAID))
            } else {
                Span::styled("✗", Style::default().fg(UNPAID))
            };
            Row::new(vec![
                Cell::from(order.queue_number.to_string()),
                Cell::from(customer),
                Cell::from(order.flower_count.to_string()),
                Cell::from(colors),
                Cell::from(Span::styled(
                    format_baht(order.price),
                    Style::default().fg(price_color).add_modifier(Modifier::BOLD),
                )),
                Cell::from(paid_mark),
            ])
            .height(2)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(6),
            Constraint::Min(14),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" ออเดอร์ "))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let text = Text::from(vec![
        Line::raw(""),
        Line::styled("🌷", Style::default()),
        Line::styled(app.empty_message.clone(), Style::default().fg(DIM)),
    ]);
    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" ออเดอร์ "));
    frame.render_widget(panel, area);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" เพิ่มออเดอร์ใหม่ ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // customer name
            Constraint::Length(1), // queue
            Constraint::Length(1), // count
            Constraint::Length(1), // date
            Constraint::Length(1), // price
            Constraint::Length(1), // notes
            Constraint::Length(2), // flower picker
            Constraint::Length(2), // bouquet picker
            Constraint::Length(1), // warning
            Constraint::Min(0),
        ])
        .split(inner);

    let fields: [(&str, &Input, Focus); 6] = [
        ("ชื่อลูกค้า*", &app.form.customer_name, Focus::CustomerName),
        ("คิว", &app.form.queue_number, Focus::QueueNumber),
        ("จำนวนดอก", &app.form.flower_count, Focus::FlowerCount),
        ("วันที่", &app.form.order_date, Focus::OrderDate),
        ("ราคา*", &app.form.price, Focus::Price),
        ("โน้ต", &app.form.notes, Focus::Notes),
    ];
    for (i, (label, input, focus)) in fields.iter().enumerate() {
        frame.render_widget(
            field_line(label, input.value(), app.focus == *focus),
            rows[i],
        );
    }

    frame.render_widget(
        picker_paragraph("สีดอก", app, Focus::FlowerPicker),
        rows[6],
    );
    frame.render_widget(
        picker_paragraph("สีช่อ", app, Focus::BouquetPicker),
        rows[7],
    );

    if let Some(warning) = &app.warning {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("⚠ {}", warning),
                Style::default().fg(UNPAID),
            )),
            rows[8],
        );
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM)
    };
    let value_span = if focused {
        Span::styled(format!("{}▏", value), Style::default())
    } else {
        Span::raw(value)
    };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{:<10} ", label), label_style),
        value_span,
    ]))
}

fn picker_paragraph<'a>(label: &'a str, app: &App, focus: Focus) -> Paragraph<'a> {
    let selection = match focus {
        Focus::BouquetPicker => &app.form.bouquet_colors,
        _ => &app.form.flower_colors,
    };
    let focused = app.focus == focus;
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM)
    };

    let mut spans = vec![Span::styled(format!("{:<10} ", label), label_style)];
    for (idx, entry) in color::PALETTE.iter().enumerate() {
        let (r, g, b) = entry.rgb;
        let symbol = if selection.contains(entry.hex) { "◉" } else { "●" };
        let mut style = Style::default().fg(Color::Rgb(r, g, b));
        if focused && idx == app.picker_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(symbol, style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false })
}

fn customer_cell(name: &str, notes: Option<&str>) -> Text<'static> {
    let mut lines = vec![Line::raw(name.to_string())];
    if let Some(notes) = notes {
        lines.push(Line::styled(
            format!("📝 {}", notes),
            Style::default().fg(DIM),
        ));
    }
    Text::from(lines)
}

fn colors_cell(flower: &str, bouquet: &str) -> Text<'static> {
    let mut lines = Vec::new();
    if !flower.trim().is_empty() {
        lines.push(dot_line("ดอก", flower));
    }
    if !bouquet.trim().is_empty() {
        lines.push(dot_line("ช่อ", bouquet));
    }
    if lines.is_empty() {
        lines.push(Line::styled("- ไม่ระบุ -", Style::default().fg(DIM)));
    }
    Text::from(lines)
}

/// One labeled row of color dots, decoded from the stored name string
fn dot_line(label: &str, stored: &str) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{} ", label),
        Style::default().fg(DIM),
    )];
    for hex in color::decode_names(stored) {
        let (r, g, b) = color::rgb_of(hex);
        spans.push(Span::styled("●", Style::default().fg(Color::Rgb(r, g, b))));
    }
    Line::from(spans)
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Table => "↑↓ เลือก  Space จ่ายแล้ว  d ลบ  a เพิ่มออเดอร์  r รีเฟรช  q ออก",
        Focus::FlowerPicker | Focus::BouquetPicker => {
            "←→ เลือกสี  Space ติ๊ก  Tab ช่องถัดไป  Enter บันทึก  Esc กลับ"
        }
        _ => "Tab ช่องถัดไป  Enter บันทึก  Esc กลับ",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(DIM))),
        area,
    );
}

fn draw_delete_modal(frame: &mut Frame, app: &App, id: &str) {
    let customer = app
        .board
        .get(id)
        .map(|o| o.customer_name.clone())
        .unwrap_or_default();
    let area = centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);
    let text = Text::from(vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("ลบออเดอร์ของ "),
            Span::styled(customer, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ใช่ไหม?"),
        ]),
        Line::raw(""),
        Line::styled("[y] ลบเลย   [n] ไม่ลบ", Style::default().fg(DIM)),
    ]);
    let modal = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(UNPAID))
                .title(" ยืนยันการลบ "),
        );
    frame.render_widget(modal, area);
}

fn draw_loading_overlay(frame: &mut Frame) {
    let area = centered_rect(30, 5, frame.area());
    frame.render_widget(Clear, area);
    let overlay = Paragraph::new(Text::from(vec![
        Line::raw(""),
        Line::raw("⏳ กำลังโหลดข้อมูล..."),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(overlay, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Format an amount as baht: no decimals for whole amounts, two otherwise.
///
/// Non-finite input renders as zero, never "NaN".
pub fn format_baht(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let whole = group_thousands(cents.abs() / 100);
    let frac = cents.abs() % 100;
    if frac == 0 {
        format!("฿{}{}", sign, whole)
    } else {
        format!("฿{}{}.{:02}", sign, whole, frac)
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
