use std::fmt::Write;

use crate::models::{Member, MemberForm, MemberSummary};

use super::{badge, escape, page_heading, stat_card, Badge};

const FORM_FIELDS: [(&str, &str, &str); 5] = [
    ("customerName", "Customer Name", "Enter full name"),
    ("customerPhoneNumber", "Phone Number", "080 xxx xx xxx"),
    ("meterNumber", "Meter Number", "01XXXXXXXXXXXXX"),
    ("address", "Address", "Enter address"),
    ("meterType", "Meter Type", "Single Phase Meter, Three Phase, etc."),
];

pub fn render_error(message: &str) -> String {
    format!(r#"<p class="inline-error">{}</p>"#, escape(message))
}

pub fn render(members: &[Member], form: &MemberForm, form_open: bool) -> String {
    let summary = MemberSummary::from(members);

    let mut rows = String::new();
    for member in members {
        let meter_badge = if member.meter_type == "Prepaid" {
            Badge::Default
        } else {
            Badge::Secondary
        };
        let (status_badge, status) = if member.is_active {
            (Badge::Default, "Active")
        } else {
            (Badge::Destructive, "Inactive")
        };
        let _ = write!(
            rows,
            r#"<tr><td><strong>{name}</strong></td><td>{phone}</td><td>{meter}</td><td>{address}</td><td>{meter_type}</td><td>{status}</td><td><form method="post" action="/dashboard/members/{id}/toggle"><button type="submit" class="outline" role="switch" aria-checked="{checked}">{action}</button></form></td></tr>"#,
            name = escape(&member.full_name),
            phone = escape(&member.phone_number),
            meter = escape(&member.meter_number),
            address = escape(&member.address),
            meter_type = badge(meter_badge, &member.meter_type),
            status = badge(status_badge, status),
            id = escape(&member.id),
            checked = member.is_active,
            action = if member.is_active { "Deactivate" } else { "Activate" },
        );
    }

    format!(
        r#"{heading}
<div class="grid">{total}{active}{inactive}</div>
<div class="card">
<h3>All Members</h3>
{form}
<table>
<thead><tr><th>Full Name</th><th>Phone Number</th><th>Meter Number</th><th>Address</th><th>Meter Type</th><th>Status</th><th>Activation</th></tr></thead>
<tbody>{rows}</tbody>
</table>
</div>"#,
        heading = page_heading("Members", "Manage estate members and their information"),
        total = stat_card("Total Members", &summary.total.to_string(), ""),
        active = stat_card("Active Members", &summary.active.to_string(), "green"),
        inactive = stat_card("Inactive Members", &summary.inactive.to_string(), "red"),
        form = add_member_form(form, form_open),
        rows = rows
    )
}

fn add_member_form(form: &MemberForm, open: bool) -> String {
    let values = [
        &form.customer_name,
        &form.customer_phone_number,
        &form.meter_number,
        &form.address,
        &form.meter_type,
    ];

    let mut inputs = String::new();
    for ((name, label, placeholder), value) in FORM_FIELDS.iter().zip(values) {
        let _ = write!(
            inputs,
            r#"<label for="{name}">{label}</label><input id="{name}" name="{name}" placeholder="{placeholder}" value="{value}">"#,
            name = name,
            label = label,
            placeholder = escape(placeholder),
            value = escape(value)
        );
    }

    format!(
        r#"<details{open}><summary><span class="badge">+ Add New Member</span></summary>
<form method="post" action="/dashboard/members">{inputs}<button type="submit" style="width:100%">Add Member</button></form>
</details>"#,
        open = if open { " open" } else { "" },
        inputs = inputs
    )
}
