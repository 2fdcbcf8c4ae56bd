use crate::wizard::state::FormVariant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    TextArea { rows: u32 },
    Select(&'static [&'static str]),
    File { accept: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    /// Spans both columns in the two-column layouts.
    pub wide: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind, placeholder: &'static str) -> Self {
        Self { name, label, kind, placeholder, wide: false }
    }

    const fn wide(self) -> Self {
        Self { wide: true, ..self }
    }

    /// Value a select starts with; everything else starts empty.
    pub fn default_text(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Select(options) => options.first().copied(),
            _ => None,
        }
    }
}

const SEX_OPTIONS: &[&str] = &["Male", "Female", "Other"];

const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", FieldKind::Text, "Full Name"),
    FieldSpec::new("email", "Email", FieldKind::Email, "youremail@gmail.com"),
    FieldSpec::new("phone", "Phone", FieldKind::Tel, "+91 9711 123 456"),
    FieldSpec::new("sex", "Gender", FieldKind::Select(SEX_OPTIONS), ""),
    FieldSpec::new("age", "Age", FieldKind::Number, "25"),
    FieldSpec::new("education", "Highest Education", FieldKind::Text, "Bachelor's Degree"),
    FieldSpec::new(
        "resume",
        "Upload Resume (PDF only)",
        FieldKind::File { accept: "application/pdf" },
        "",
    )
    .wide(),
];

const COMPANY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("companyName", "Company Name", FieldKind::Text, "Company Inc."),
    FieldSpec::new("description", "Description", FieldKind::TextArea { rows: 4 }, "Brief description..."),
    FieldSpec::new("ownerName", "Owner Name", FieldKind::Text, "Full Name"),
    FieldSpec::new("ownerEmail", "Owner Email", FieldKind::Email, "owner@company.com"),
    FieldSpec::new("address", "Address", FieldKind::Text, "123 Business Rd, City"),
    FieldSpec::new("socials", "Socials (optional)", FieldKind::Text, "LinkedIn, Twitter, etc."),
    FieldSpec::new("website", "Website (optional)", FieldKind::Text, "https://company.com"),
];

const INDIVIDUAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", FieldKind::Text, "Full Name"),
    FieldSpec::new("email", "Email", FieldKind::Email, "youremail@gmail.com"),
    FieldSpec::new("phone", "Phone", FieldKind::Tel, "+91 9711 123 456"),
    FieldSpec::new("address", "Address", FieldKind::Text, "123 Business Rd, City, State").wide(),
];

impl FormVariant {
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormVariant::Employee => EMPLOYEE_FIELDS,
            FormVariant::Company => COMPANY_FIELDS,
            FormVariant::Individual => INDIVIDUAL_FIELDS,
        }
    }

    /// Company details read better stacked in one column.
    pub fn two_columns(&self) -> bool {
        !matches!(self, FormVariant::Company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_employee_form_uploads_a_file() {
        let file_fields = |variant: FormVariant| {
            variant
                .fields()
                .iter()
                .filter(|f| matches!(f.kind, FieldKind::File { .. }))
                .map(|f| f.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(file_fields(FormVariant::Employee), vec!["resume"]);
        assert!(file_fields(FormVariant::Company).is_empty());
        assert!(file_fields(FormVariant::Individual).is_empty());
    }

    #[test]
    fn select_defaults_to_first_option() {
        let sex = FormVariant::Employee
            .fields()
            .iter()
            .find(|f| f.name == "sex")
            .copied();
        assert_eq!(sex.and_then(|f| f.default_text()), Some("Male"));
        assert_eq!(FormVariant::Company.fields()[0].default_text(), None);
    }

    #[test]
    fn field_names_are_unique_per_form() {
        for variant in [FormVariant::Employee, FormVariant::Company, FormVariant::Individual] {
            let mut names: Vec<_> = variant.fields().iter().map(|f| f.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{:?}", variant);
        }
    }
}
