//! # HTML Rendering
//!
//! Pure functions from view models to HTML strings. The full page is a shell
//! whose two placeholders are filled through htmx requests; each placeholder
//! receives a day log fragment (summary, add form, table).
//!
//! User supplied text is escaped; everything else is generated by the server.

use shared::{DayLogView, DaySummary, EventKind, FormattedEvent, IndexPageView};

const BOOTSTRAP_CSS: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@4.4.1/dist/css/bootstrap.min.css" integrity="sha384-Vkoo8x4CGsO3+Hhxv8T/Q5PaXtkKtu6ug5TOeNV6gBiFeWPGFN9MuhOf23Q9Ifjh" crossorigin="anonymous">"#;
const HTMX_SCRIPT: &str = r#"<script src="https://unpkg.com/htmx.org@1.9.6"></script>"#;
const DEFAULT_AMOUNT: i64 = 50;

/// Escape text for use in element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn section_title(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Intake => "Water Intake",
        EventKind::Output => "Urine Output",
    }
}

fn render_summary(summary: &DaySummary) -> String {
    match summary {
        DaySummary::Goal { goal, remaining } => format!(
            "<h4>Goal: <span class=\"badge badge-primary\">{} ml</span></h4>\n\
             <h4>Remaining: <span class=\"badge badge-primary\">{} ml</span></h4>\n",
            goal, remaining
        ),
        DaySummary::Total { total } => format!(
            "<h4>Today's output: <span class=\"badge badge-primary\">{} ml</span></h4>\n",
            total
        ),
    }
}

fn render_row(kind: EventKind, date_key: &str, row: &FormattedEvent) -> String {
    format!(
        "<tr>\
         <td>{time}</td>\
         <td>{amount}</td>\
         <td>{description}</td>\
         <td><form hx-delete=\"/{kind}?date={date}&amp;id={id}\"><button type=\"submit\">Delete</button></form></td>\
         <td>{subtotal}</td>\
         </tr>\n",
        time = row.formatted_time,
        amount = row.amount,
        description = escape_html(&row.description),
        kind = kind,
        date = date_key,
        id = row.id,
        subtotal = row.subtotal,
    )
}

/// Render the fragment swapped into a placeholder of the full page
pub fn render_day_log(view: &DayLogView) -> String {
    let mut html = String::new();

    html.push_str("<div name=\"data\" id=\"data\">\n");
    html.push_str(&render_summary(&view.summary));

    html.push_str(&format!(
        "<form hx-post=\"/{kind}?date={date}\">\n\
         <input type=\"text\" value=\"{date}\" name=\"daypart\" hidden/>\n\
         <label for=\"time\">Time:</label><input type=\"time\" value=\"\" name=\"time\"/>\n\
         <label for=\"amount\">Amount:</label><input type=\"number\" value=\"{amount}\" name=\"amount\"/>\n\
         <label for=\"description\">Description:</label><input type=\"text\" name=\"description\"/>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n",
        kind = view.kind,
        date = view.date_key,
        amount = DEFAULT_AMOUNT,
    ));

    html.push_str("<table class=\"table table-striped\">\n");
    html.push_str("<thead>\n");
    html.push_str(
        "<tr><th>Time</th><th>Amount (ml)</th><th>Description</th><th>Delete</th><th>Subtotal (ml)</th></tr>\n",
    );
    html.push_str("</thead>\n");
    html.push_str("<tbody>\n");
    for row in &view.rows {
        html.push_str(&render_row(view.kind, &view.date_key, row));
    }
    html.push_str("</tbody>\n");
    html.push_str("</table>\n");
    html.push_str("</div>\n");

    html
}

/// Render the full page for a day
pub fn render_index(view: &IndexPageView) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Track your water intake</title>\n");
    html.push_str(BOOTSTRAP_CSS);
    html.push('\n');
    html.push_str(HTMX_SCRIPT);
    html.push('\n');
    html.push_str("</head>\n<body>\n");

    for (index, kind) in EventKind::ALL.iter().enumerate() {
        html.push_str("<div class=\"container\">\n");
        if index == 0 {
            html.push_str(&format!("<h2>Liquid Input/Output on {}</h2>\n", view.title_date));
        }
        html.push_str(&format!("<div><h3>{}</h3></div>\n", section_title(*kind)));
        html.push_str(&format!(
            "<div hx-get=\"/{kind}?date={date}\" hx-trigger=\"{trigger}, load\">Fetching data...</div>\n",
            kind = kind,
            date = view.date_key,
            trigger = kind.update_trigger(),
        ));
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, description: &str, amount: i64, subtotal: i64) -> FormattedEvent {
        FormattedEvent {
            id,
            formatted_time: "09:30 am".to_string(),
            amount,
            description: description.to_string(),
            subtotal,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Water"), "Water");
        assert_eq!(
            escape_html("<b>\"tea\" & 'milk'</b>"),
            "&lt;b&gt;&quot;tea&quot; &amp; &#39;milk&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_day_log_has_no_rows() {
        let view = DayLogView {
            kind: EventKind::Intake,
            date_key: "01012024".to_string(),
            summary: DaySummary::Goal { goal: 1300, remaining: 1300 },
            rows: vec![],
        };
        let html = render_day_log(&view);
        assert!(html.contains("<tbody>\n</tbody>"));
        assert!(html.contains("Remaining: <span class=\"badge badge-primary\">1300 ml</span>"));
        assert!(html.contains("hx-post=\"/intake?date=01012024\""));
    }

    #[test]
    fn test_rows_carry_delete_target_and_subtotal() {
        let view = DayLogView {
            kind: EventKind::Output,
            date_key: "01012024".to_string(),
            summary: DaySummary::Total { total: 300 },
            rows: vec![row(4, "", 100, 100), row(9, "", 200, 300)],
        };
        let html = render_day_log(&view);
        assert!(html.contains("hx-delete=\"/output?date=01012024&amp;id=4\""));
        assert!(html.contains("hx-delete=\"/output?date=01012024&amp;id=9\""));
        assert!(html.contains("<td>300</td></tr>"));
        assert!(html.contains("Today's output: <span class=\"badge badge-primary\">300 ml</span>"));
        assert!(!html.contains("Remaining"));
    }

    #[test]
    fn test_description_is_escaped() {
        let view = DayLogView {
            kind: EventKind::Intake,
            date_key: "01012024".to_string(),
            summary: DaySummary::Goal { goal: 1300, remaining: 1250 },
            rows: vec![row(1, "<script>alert(1)</script>", 50, 50)],
        };
        let html = render_day_log(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_index_has_both_placeholders() {
        let view = IndexPageView {
            title_date: "1 Jan 2024".to_string(),
            date_key: "01012024".to_string(),
        };
        let html = render_index(&view);
        assert!(html.contains("<h2>Liquid Input/Output on 1 Jan 2024</h2>"));
        assert!(html.contains("hx-get=\"/intake?date=01012024\" hx-trigger=\"intakeUpdate, load\""));
        assert!(html.contains("hx-get=\"/output?date=01012024\" hx-trigger=\"outputUpdate, load\""));
        assert_eq!(html.matches("Fetching data...").count(), 2);
    }
}
