use serde::{Deserialize, Serialize};

use super::utils::{format_date, lenient_text};

// Raw member as listed by the estate member endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMember {
    #[serde(default, deserialize_with = "lenient_text")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub customer_phone_number: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub meter_number: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub meter_type: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Member {
    pub id: String,
    pub full_name: String,
    pub phone_number: String,
    pub meter_number: String,
    pub address: String,
    pub meter_type: String,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub tariff_index: Option<String>,
}

/// Payload of the create-estate-member endpoint, also bound from the add
/// member form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone_number: String,
    #[serde(default)]
    pub meter_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub meter_type: String,
}

impl Member {
    /// Maps the raw list, numbering members by their 1-based position.
    pub fn from_list(raw: Vec<ApiMember>) -> Vec<Member> {
        raw.into_iter()
            .enumerate()
            .map(|(index, member)| Member {
                id: (index + 1).to_string(),
                full_name: member.customer_name,
                phone_number: member.customer_phone_number,
                meter_number: member.meter_number,
                address: member.address,
                meter_type: member.meter_type,
                is_active: member.status == "Active",
                created_at: Some(format_date(&member.created_at)),
                tariff_index: None,
            })
            .collect()
    }

    // record shown after a successful creation, built from what was submitted
    pub fn from_form(form: &MemberForm, id: String) -> Self {
        Self {
            id,
            full_name: form.customer_name.clone(),
            phone_number: form.customer_phone_number.clone(),
            meter_number: form.meter_number.clone(),
            address: form.address.clone(),
            meter_type: form.meter_type.clone(),
            is_active: true,
            created_at: None,
            tariff_index: None,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct MemberSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl From<&[Member]> for MemberSummary {
    fn from(members: &[Member]) -> Self {
        let active = members.iter().filter(|member| member.is_active).count();
        Self {
            total: members.len(),
            active,
            inactive: members.len() - active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_member(name: &str, status: &str) -> ApiMember {
        ApiMember {
            customer_name: name.to_string(),
            customer_phone_number: "08030000000".to_string(),
            meter_number: "0101".to_string(),
            address: "12 Palm Close".to_string(),
            meter_type: "Prepaid".to_string(),
            status: status.to_string(),
            created_at: "2024-01-15T09:30:00Z".to_string(),
        }
    }

    #[test]
    fn list_is_numbered_from_one() {
        let members = Member::from_list(vec![
            api_member("Ada", "Active"),
            api_member("Bayo", "Inactive"),
            api_member("Chi", "Active"),
        ]);
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn only_exact_active_status_is_active() {
        let members = Member::from_list(vec![
            api_member("Ada", "Active"),
            api_member("Bayo", "Inactive"),
            api_member("Chi", "active"),
        ]);
        assert!(members[0].is_active);
        assert!(!members[1].is_active);
        assert!(!members[2].is_active);
    }

    #[test]
    fn list_mapping_formats_date_and_drops_tariff() {
        let member = &Member::from_list(vec![api_member("Ada", "Active")])[0];
        assert_eq!(member.created_at.as_deref(), Some("1/15/2024"));
        assert_eq!(member.tariff_index, None);
        assert_eq!(member.full_name, "Ada");
        assert_eq!(member.phone_number, "08030000000");
    }

    #[test]
    fn null_fields_render_blank() {
        let body = r#"[
            { "customerName": "Ada", "customerPhoneNumber": "0803", "meterNumber": "0101",
              "address": "1 Palm Close", "meterType": "Prepaid", "status": "Active",
              "createdAt": "2024-01-15T09:30:00Z" },
            { "customerName": "Bayo", "customerPhoneNumber": "0805", "meterNumber": "0102",
              "address": null, "meterType": "Prepaid", "status": null, "createdAt": null }
        ]"#;
        let members = Member::from_list(serde_json::from_str(body).unwrap());

        assert_eq!(members.len(), 2);
        assert_eq!(members[1].full_name, "Bayo");
        assert_eq!(members[1].address, "");
        assert!(!members[1].is_active);
        assert_eq!(members[1].created_at.as_deref(), Some(""));
    }

    #[test]
    fn form_record_is_active_without_date() {
        let form = MemberForm {
            customer_name: "Dayo".to_string(),
            customer_phone_number: "0805".to_string(),
            meter_number: "0109".to_string(),
            address: "3 Oak Road".to_string(),
            meter_type: "Three Phase".to_string(),
        };
        let member = Member::from_form(&form, "1700000000000".to_string());
        assert!(member.is_active);
        assert_eq!(member.created_at, None);
        assert_eq!(member.id, "1700000000000");
        assert_eq!(member.meter_type, "Three Phase");
    }

    #[test]
    fn form_serializes_as_api_payload() {
        let form = MemberForm {
            customer_name: "Dayo".to_string(),
            ..Default::default()
        };
        let payload = serde_json::to_value(&form).unwrap();
        assert_eq!(payload["customerName"], "Dayo");
        assert_eq!(payload["customerPhoneNumber"], "");
        assert!(payload.get("meterType").is_some());
    }

    #[test]
    fn summary_counts_activation() {
        let members = Member::from_list(vec![
            api_member("Ada", "Active"),
            api_member("Bayo", "Inactive"),
            api_member("Chi", "Active"),
        ]);
        let summary = MemberSummary::from(members.as_slice());
        assert_eq!(
            summary,
            MemberSummary {
                total: 3,
                active: 2,
                inactive: 1
            }
        );
    }
}
