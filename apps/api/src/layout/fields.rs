//! The fixed report structure: which sections appear, in what order, and
//! which record attribute each labelled row shows.
//!
//! The render loop walks these tables; nothing about ordering or labels lives
//! in the drawing code.

use crate::layout::date::normalize_date;
use crate::models::student::StudentRecord;

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Personal,
    Contact,
    Academic,
    Family,
}

/// Render order of the section banners.
pub const SECTIONS: [Section; 4] = [
    Section::Personal,
    Section::Contact,
    Section::Academic,
    Section::Family,
];

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Personal => "Personal Information",
            Section::Contact => "Contact Information",
            Section::Academic => "Academic Information",
            Section::Family => "Family Information",
        }
    }

    /// Field rows of this section, in declared order.
    pub fn fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        FIELDS.iter().filter(move |f| f.section == self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fields
// ────────────────────────────────────────────────────────────────────────────

/// Record attributes that appear in the report. `id` and `systemAccess`
/// are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Roll,
    Dob,
    Gender,
    AdmissionDate,
    Email,
    Phone,
    CurrentAddress,
    PermanentAddress,
    Class,
    Section,
    ReporterName,
    FatherName,
    FatherPhone,
    MotherName,
    MotherPhone,
    GuardianName,
    GuardianPhone,
    RelationOfGuardian,
}

/// One labelled row of the report.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// JSON key of the attribute in the posted record.
    pub json_name: &'static str,
    pub label: &'static str,
    pub section: Section,
}

const fn field(
    key: FieldKey,
    json_name: &'static str,
    label: &'static str,
    section: Section,
) -> FieldSpec {
    FieldSpec {
        key,
        json_name,
        label,
        section,
    }
}

#[rustfmt::skip]
pub static FIELDS: [FieldSpec; 19] = [
    field(FieldKey::Name,               "name",               "Name:",              Section::Personal),
    field(FieldKey::Roll,               "roll",               "Roll No:",           Section::Personal),
    field(FieldKey::Dob,                "dob",                "Date of Birth:",     Section::Personal),
    field(FieldKey::Gender,             "gender",             "Gender:",            Section::Personal),
    field(FieldKey::AdmissionDate,      "admissionDate",      "Admission Date:",    Section::Personal),
    field(FieldKey::Email,              "email",              "Email:",             Section::Contact),
    field(FieldKey::Phone,              "phone",              "Phone:",             Section::Contact),
    field(FieldKey::CurrentAddress,     "currentAddress",     "Current Address:",   Section::Contact),
    field(FieldKey::PermanentAddress,   "permanentAddress",   "Permanent Address:", Section::Contact),
    field(FieldKey::Class,              "class",              "Class:",             Section::Academic),
    field(FieldKey::Section,            "section",            "Section:",           Section::Academic),
    field(FieldKey::ReporterName,       "reporterName",       "Reporter/Teacher:",  Section::Academic),
    field(FieldKey::FatherName,         "fatherName",         "Father Name:",       Section::Family),
    field(FieldKey::FatherPhone,        "fatherPhone",        "Father Phone:",      Section::Family),
    field(FieldKey::MotherName,         "motherName",         "Mother Name:",       Section::Family),
    field(FieldKey::MotherPhone,        "motherPhone",        "Mother Phone:",      Section::Family),
    field(FieldKey::GuardianName,       "guardianName",       "Guardian Name:",     Section::Family),
    field(FieldKey::GuardianPhone,      "guardianPhone",      "Guardian Phone:",    Section::Family),
    field(FieldKey::RelationOfGuardian, "relationOfGuardian", "Guardian Relation:", Section::Family),
];

impl FieldSpec {
    /// Display text for this row. Missing values become an empty string,
    /// except the two date fields which go through [`normalize_date`].
    pub fn display_value(&self, record: &StudentRecord) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let date = |value: &Option<String>| normalize_date(value.as_deref().unwrap_or(""));

        match self.key {
            FieldKey::Name => text(&record.name),
            FieldKey::Roll => record.roll.map(|r| r.to_string()).unwrap_or_default(),
            FieldKey::Dob => date(&record.dob),
            FieldKey::Gender => text(&record.gender),
            FieldKey::AdmissionDate => date(&record.admission_date),
            FieldKey::Email => text(&record.email),
            FieldKey::Phone => text(&record.phone),
            FieldKey::CurrentAddress => text(&record.current_address),
            FieldKey::PermanentAddress => text(&record.permanent_address),
            FieldKey::Class => text(&record.class_name),
            FieldKey::Section => text(&record.section),
            FieldKey::ReporterName => text(&record.reporter_name),
            FieldKey::FatherName => text(&record.father_name),
            FieldKey::FatherPhone => text(&record.father_phone),
            FieldKey::MotherName => text(&record.mother_name),
            FieldKey::MotherPhone => text(&record.mother_phone),
            FieldKey::GuardianName => text(&record.guardian_name),
            FieldKey::GuardianPhone => text(&record.guardian_phone),
            FieldKey::RelationOfGuardian => text(&record.relation_of_guardian),
        }
    }
}
