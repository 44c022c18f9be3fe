use std::fmt::Write;

use crate::models::{
    utils::{format_amount, format_date},
    Transaction, TransactionStatus, TransactionSummary,
};

use super::{badge, escape, page_heading, stat_card, Badge};

fn status_badge(status: TransactionStatus) -> String {
    let variant = match status {
        TransactionStatus::Completed => Badge::Default,
        TransactionStatus::Pending => Badge::Secondary,
        TransactionStatus::Failed => Badge::Destructive,
    };
    badge(variant, status.label())
}

// The search box and status select are display only; nothing reads them.
const FILTERS: &str = r#"<div class="card"><h3>Filter Transactions</h3>
<input type="search" placeholder="Search by name, phone, or meter number...">
<select><option value="all">All Status</option><option value="completed">Completed</option><option value="pending">Pending</option><option value="failed">Failed</option></select>
</div>"#;

pub fn render(transactions: &[Transaction]) -> String {
    let summary = TransactionSummary::from(transactions);

    let mut rows = String::new();
    for tx in transactions {
        let _ = write!(
            rows,
            r#"<tr><td><strong>{name}</strong></td><td>{phone}</td><td>{meter}</td><td>₦{amount}</td><td class="mono">{token}</td><td>{status}</td><td>{date}</td></tr>"#,
            name = escape(&tx.full_name),
            phone = escape(&tx.phone_number),
            meter = escape(&tx.meter_number),
            amount = format_amount(tx.amount),
            token = escape(&tx.token),
            status = status_badge(tx.status),
            date = escape(&format_date(&tx.date)),
        );
    }

    format!(
        r#"{heading}
<div class="grid">{total}{completed}{amount}</div>
{filters}
<div class="card">
<h3>All Transactions</h3>
<table>
<thead><tr><th>Full Name</th><th>Phone Number</th><th>Meter Number</th><th>Amount</th><th>Token</th><th>Status</th><th>Date</th></tr></thead>
<tbody>{rows}</tbody>
</table>
</div>"#,
        heading = page_heading("Transactions", "View and manage all estate transactions"),
        total = stat_card("Total Transactions", &summary.total.to_string(), ""),
        completed = stat_card("Completed", &summary.completed.to_string(), "green"),
        amount = stat_card(
            "Total Amount",
            &format!("₦{}", format_amount(summary.completed_amount)),
            ""
        ),
        filters = FILTERS,
        rows = rows
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn tx(id: &str, status: TransactionStatus, amount: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            full_name: "Ada".to_string(),
            phone_number: "0803".to_string(),
            meter_number: "0101".to_string(),
            amount: Decimal::from(amount),
            token: "1111-2222".to_string(),
            status,
            date: "2024-01-15T09:30:00Z".to_string(),
        }
    }

    #[test]
    fn summary_and_badges() {
        let html = render(&[
            tx("a", TransactionStatus::Completed, 150000),
            tx("b", TransactionStatus::Pending, 2000),
            tx("c", TransactionStatus::Failed, 3000),
        ]);
        assert!(html.contains(r#"<div class="card-value ">3</div>"#));
        assert!(html.contains(r#"<div class="card-value green">1</div>"#));
        assert!(html.contains(r#"<div class="card-value ">₦150,000</div>"#));
        assert!(html.contains(r#"<span class="badge secondary">Pending</span>"#));
        assert!(html.contains(r#"<span class="badge destructive">Failed</span>"#));
        assert!(html.contains("<td>1/15/2024</td>"));
    }

    #[test]
    fn empty_list_still_renders_filters() {
        let html = render(&[]);
        assert!(html.contains("Filter Transactions"));
        assert!(html.contains(r#"<div class="card-value ">₦0</div>"#));
    }
}
