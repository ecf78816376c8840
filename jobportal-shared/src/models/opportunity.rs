use serde::{Deserialize, Serialize};

/// A job or internship posting.
///
/// Immutable from the client's perspective: fetched in bulk, never edited
/// locally. Field names follow the backend's camelCase wire form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Backend identifier, treated as opaque.
    pub id: String,

    /// Role title, e.g. "Data Science Intern".
    pub profile_name: String,

    /// Hiring company.
    pub company_name: String,

    /// Stipend text as scraped; spacing and a `/month` suffix vary.
    pub stipend: String,

    /// Work location.
    pub location: String,

    /// Engagement length, e.g. "6 Months".
    pub duration: String,

    /// Calendar date, or the literal `Starts Immediately`.
    pub start_date: String,
}

/// Entry in the signed-in user's applied list.
///
/// A reference back to an [`Opportunity`]; being present in the list is the
/// applied status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppliedOpportunity {
    /// Backend identifier of the posting applied to.
    pub id: String,

    /// Role title, when the backend echoes it.
    #[serde(default)]
    pub profile_name: Option<String>,

    /// Hiring company.
    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opportunity_reads_camel_case_payload() {
        let json = r#"{
            "id": "66b2f0",
            "profileName": "Data Science Intern",
            "companyName": "Acme Analytics",
            "stipend": "Rs 10000  /month",
            "location": "Remote",
            "duration": "6 Months",
            "startDate": "Starts Immediately"
        }"#;
        let opportunity: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opportunity.profile_name, "Data Science Intern");
        assert_eq!(opportunity.company_name, "Acme Analytics");
        assert_eq!(opportunity.start_date, "Starts Immediately");
    }

    #[test]
    fn applied_entry_tolerates_missing_profile_name() {
        let json = r#"{"id":"66b2f0","companyName":"Acme Analytics"}"#;
        let applied: AppliedOpportunity = serde_json::from_str(json).unwrap();
        assert_eq!(applied.profile_name, None);
        assert_eq!(applied.company_name, "Acme Analytics");
    }
}
