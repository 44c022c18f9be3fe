use std::fmt::Write;

use serde::Deserialize;

use super::{escape, page_heading, stat_card};

pub const REPORT_TYPES: [(&str, &str); 4] = [
    ("transactions", "Transaction Report"),
    ("members", "Member Report"),
    ("revenue", "Revenue Report"),
    ("usage", "Usage Report"),
];

// Placeholder content until the API exposes reporting.
const SAMPLE_MEMBERS: [&str; 5] = [
    "John Doe",
    "Jane Smith",
    "Mike Johnson",
    "Sarah Wilson",
    "David Brown",
];

const RECENT_REPORTS: [(&str, &str); 4] = [
    ("Transaction Report", "Jan 15, 2024"),
    ("Member Report", "Jan 14, 2024"),
    ("Revenue Report", "Jan 13, 2024"),
    ("Usage Report", "Jan 12, 2024"),
];

const TEMPLATES: [&str; 4] = ["Daily Summary", "Weekly Report", "Member Activity", "Export All Data"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    #[serde(default)]
    pub report_type: String,
    #[serde(default)]
    pub date_from: String,
    #[serde(default)]
    pub date_to: String,
    #[serde(default)]
    pub member: String,
}

fn options(choices: &[(&str, &str)], selected: &str, placeholder: &str) -> String {
    let mut out = format!(r#"<option value="">{}</option>"#, escape(placeholder));
    for (value, label) in choices {
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            escape(value),
            if *value == selected { " selected" } else { "" },
            escape(label)
        );
    }
    out
}

pub fn render(form: &ReportForm) -> String {
    let member_choices: Vec<(&str, &str)> = std::iter::once(("all", "All Members"))
        .chain(SAMPLE_MEMBERS.iter().map(|name| (*name, *name)))
        .collect();

    let recent = RECENT_REPORTS
        .iter()
        .map(|(name, date)| {
            format!(
                r#"<tr><td><strong>{}</strong><br><small>Generated on {}</small></td><td><button type="button" class="outline">Download</button></td></tr>"#,
                name, date
            )
        })
        .collect::<String>();

    let templates = TEMPLATES
        .iter()
        .map(|name| format!(r#"<button type="button" class="outline">{}</button>"#, name))
        .collect::<String>();

    format!(
        r#"{heading}
<div class="grid">{available}{month}{members}{range}</div>
<div class="grid">
<div class="card"><h3>Generate Report</h3>
<form method="post" action="/dashboard/reports">
<label for="reportType">Report Type</label><select id="reportType" name="reportType">{types}</select>
<label for="dateFrom">From Date</label><input id="dateFrom" name="dateFrom" type="date" value="{date_from}">
<label for="dateTo">To Date</label><input id="dateTo" name="dateTo" type="date" value="{date_to}">
<label for="member">Filter by Member (Optional)</label><select id="member" name="member">{member_options}</select>
<button type="submit" name="action" value="view">View Report</button>
<button type="submit" name="action" value="download" class="outline">Download</button>
</form></div>
<div class="card"><h3>Recent Reports</h3><table><tbody>{recent}</tbody></table></div>
</div>
<div class="card"><h3>Quick Report Templates</h3><div class="grid">{templates}</div></div>"#,
        heading = page_heading("Reports", "Generate and download various reports for analysis"),
        available = stat_card("Available Reports", "12", ""),
        month = stat_card("This Month", "45", ""),
        members = stat_card("Total Members", "1,000", ""),
        range = stat_card("Data Range", "2Y", ""),
        types = options(&REPORT_TYPES, &form.report_type, "Select report type"),
        date_from = escape(&form.date_from),
        date_to = escape(&form.date_to),
        member_options = options(&member_choices, &form.member, "Select member"),
        recent = recent,
        templates = templates
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_selection_is_kept() {
        let form = ReportForm {
            report_type: "revenue".to_string(),
            date_from: "2024-01-01".to_string(),
            date_to: "2024-01-31".to_string(),
            member: "Jane Smith".to_string(),
        };
        let html = render(&form);
        assert!(html.contains(r#"<option value="revenue" selected>Revenue Report</option>"#));
        assert!(html.contains(r#"<option value="Jane Smith" selected>Jane Smith</option>"#));
        assert!(html.contains(r#"value="2024-01-01""#));
        assert!(html.contains(r#"<option value="all">All Members</option>"#));
    }

    #[test]
    fn placeholder_content_is_present() {
        let html = render(&ReportForm::default());
        assert!(html.contains("Generated on Jan 15, 2024"));
        assert!(html.contains("Export All Data"));
        assert!(html.contains(r#"<div class="card-value ">1,000</div>"#));
    }
}
