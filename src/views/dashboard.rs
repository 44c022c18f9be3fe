use crate::models::{stats::or_zero, DashboardStats, MemberSummary};

use super::{escape, page_heading, stat_card};

pub fn render(stats: &DashboardStats, members: &MemberSummary) -> String {
    let naira = |value: &Option<String>| format!("₦{}", or_zero(value));

    let cards = [
        stat_card("Total Amount", &naira(&stats.total_amount), "blue"),
        stat_card("No. of Transactions", &naira(&stats.no_of_transaction), "green"),
        stat_card("Total Commission Paid", &naira(&stats.total_commission_paid), "purple"),
        stat_card("Total Amount Paid", &naira(&stats.total_amount_paid), "orange"),
        stat_card("Total Commission", &naira(&stats.total_commission), "red"),
    ]
    .concat();

    let quick_stats = [
        ("Active Members", members.active.to_string()),
        ("Inactive Members", members.inactive.to_string()),
        ("Pending Transactions", "-".to_string()),
        ("This Month's Revenue", naira(&stats.total_commission)),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            r#"<tr><td>{}</td><td><strong>{}</strong></td></tr>"#,
            escape(label),
            escape(value)
        )
    })
    .collect::<String>();

    format!(
        r#"{heading}
<div class="grid">{cards}</div>
<div class="card"><h3>Quick Stats</h3><table><tbody>{quick_stats}</tbody></table></div>"#,
        heading = page_heading(
            "Welcome to MacroTech Estate Dashboard",
            "Overview of your Estate management system"
        ),
        cards = cards,
        quick_stats = quick_stats
    )
}
