use serde::{Deserialize, Serialize};

/// One student profile as posted by the records backend.
///
/// Every attribute is optional: a missing key, an explicit `null` and an empty
/// string all render as a blank value cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub roll: Option<i64>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub father_name: Option<String>,
    pub father_phone: Option<String>,
    pub mother_name: Option<String>,
    pub mother_phone: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub relation_of_guardian: Option<String>,
    pub current_address: Option<String>,
    pub permanent_address: Option<String>,
    pub admission_date: Option<String>,
    pub reporter_name: Option<String>,
    pub system_access: Option<bool>,
}

impl StudentRecord {
    /// File name used in the `Content-Disposition` header of the rendered report.
    pub fn report_filename(&self) -> String {
        format!("student_{}_report.pdf", self.id.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_keys() {
        let record: StudentRecord = serde_json::from_value(json!({
            "id": 7,
            "name": "Asha Rao",
            "roll": 12,
            "class": "7",
            "relationOfGuardian": "Uncle",
            "admissionDate": "2020-06-01T00:00:00Z",
            "systemAccess": true
        }))
        .unwrap();

        assert_eq!(record.id, Some(7));
        assert_eq!(record.name.as_deref(), Some("Asha Rao"));
        assert_eq!(record.roll, Some(12));
        assert_eq!(record.class_name.as_deref(), Some("7"));
        assert_eq!(record.relation_of_guardian.as_deref(), Some("Uncle"));
        assert_eq!(
            record.admission_date.as_deref(),
            Some("2020-06-01T00:00:00Z")
        );
        assert_eq!(record.system_access, Some(true));
    }

    #[test]
    fn test_deserialize_empty_object_and_nulls() {
        let empty: StudentRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, StudentRecord::default());

        let nulls: StudentRecord =
            serde_json::from_value(json!({ "name": null, "roll": null })).unwrap();
        assert!(nulls.name.is_none());
        assert!(nulls.roll.is_none());
    }

    #[test]
    fn test_deserialize_rejects_wrong_types() {
        let result: Result<StudentRecord, _> =
            serde_json::from_value(json!({ "roll": "twelve" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_report_filename_uses_id() {
        let record = StudentRecord {
            id: Some(42),
            ..Default::default()
        };
        assert_eq!(record.report_filename(), "student_42_report.pdf");
        assert_eq!(
            StudentRecord::default().report_filename(),
            "student_0_report.pdf"
        );
    }
}
