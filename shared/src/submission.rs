use serde::{Deserialize, Serialize};

/// Age categories offered by the enrollment form's select.
pub const AGE_GROUPS: &[&str] = &["1-2", "2-3", "3-4", "4-5", "5-6"];

/// Named inputs of the enrollment form.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Field {
    ParentName,
    ChildName,
    ChildAge,
    Phone,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::ParentName, Self::ChildName, Self::ChildAge, Self::Phone];

    /// The `name` attribute the input carries in the page.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ParentName => "parentName",
            Self::ChildName => "childName",
            Self::ChildAge => "childAge",
            Self::Phone => "phone",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Values captured from the enrollment form at the moment of submit.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct EnrollmentSubmission {
    #[serde(rename = "parentName")]
    pub parent_name: String,
    #[serde(rename = "childName")]
    pub child_name: String,
    #[serde(rename = "childAge")]
    pub child_age: String,
    pub phone: String,
}

impl EnrollmentSubmission {
    /// Builds a submission from `name -> value` pairs in any order.
    /// Unknown names are skipped, missing ones stay empty.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = Self::default();

        for (name, value) in entries {
            match Field::from_name(name.as_ref()) {
                Some(field) => submission.set(field, value.into()),
                None => log::debug!("ignoring unknown form entry: {}", name.as_ref()),
            }
        }

        submission
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ParentName => &self.parent_name,
            Field::ChildName => &self.child_name,
            Field::ChildAge => &self.child_age,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::ParentName => self.parent_name = value,
            Field::ChildName => self.child_name = value,
            Field::ChildAge => self.child_age = value,
            Field::Phone => self.phone = value,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_entries_any_order() {
        let submission = EnrollmentSubmission::from_entries([
            ("phone", "0123456789"),
            ("childAge", "2-3"),
            ("parentName", "Jane Doe"),
            ("childName", "Sam"),
        ]);

        assert_eq!(
            submission,
            EnrollmentSubmission {
                parent_name: "Jane Doe".into(),
                child_name: "Sam".into(),
                child_age: "2-3".into(),
                phone: "0123456789".into(),
            }
        );
    }

    #[test]
    fn test_from_entries_unknown_and_missing() {
        let submission =
            EnrollmentSubmission::from_entries([("message", "hello"), ("childName", "Sam")]);

        assert_eq!(submission.child_name, "Sam");
        assert_eq!(submission.parent_name, "");
        assert_eq!(submission.phone, "");
    }

    #[test]
    fn test_serializes_form_names() {
        let submission = EnrollmentSubmission::from_entries([("parentName", "Jane")]);
        let json = serde_json::to_value(&submission).unwrap_or_default();

        assert_eq!(json["parentName"], "Jane");
        assert_eq!(json["childAge"], "");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("email"), None);
    }
}
